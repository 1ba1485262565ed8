//! Signup page: account creation followed by a timed return to login.
//!
//! The redirect guard is cancelled when the page unmounts, so leaving the
//! page during the delay never runs the switch callback afterwards.

use leptos::prelude::*;

use crate::state::auth_form::{SIGNUP_SUCCESS_MESSAGE, SignupForm};
use crate::state::session::SessionStore;
use crate::util::deferred::OneShot;

#[component]
pub fn SignupPage(on_switch_to_login: Callback<()>) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let form = RwSignal::new(SignupForm::default());

    let redirect = OneShot::new();
    on_cleanup({
        let redirect = redirect.clone();
        move || redirect.cancel()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(registration) = form.try_update(SignupForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let redirect = redirect.clone();
            leptos::task::spawn_local(async move {
                crate::state::auth_form::submit_signup(
                    &store,
                    form,
                    registration,
                    redirect,
                    gloo_timers::future::sleep,
                    move || on_switch_to_login.run(()),
                )
                .await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&store, &redirect, registration);
        }
    };

    let submitting = move || form.with(|f| f.submitting);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Create Account"</h1>
                <p class="auth-card__subtitle">"Start your cybersecurity learning journey"</p>

                <Show when=move || form.with(|f| f.error.is_some())>
                    <div class="auth-card__error" role="alert">
                        <p>{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                    </div>
                </Show>

                <Show when=move || form.with(|f| f.success)>
                    <div class="auth-card__success" role="status">
                        <p>{SIGNUP_SUCCESS_MESSAGE}</p>
                    </div>
                </Show>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Full Name"
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="John Doe"
                            prop:value=move || form.with(|f| f.full_name.clone())
                            on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                            disabled=submitting
                        />
                    </label>
                    <label class="auth-form__label">
                        "Email Address"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            disabled=submitting
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="At least 6 characters"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            disabled=submitting
                        />
                    </label>
                    <label class="auth-form__label">
                        "Confirm Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="Confirm your password"
                            prop:value=move || form.with(|f| f.confirm_password.clone())
                            on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                            disabled=submitting
                        />
                    </label>
                    <button
                        class="auth-form__submit"
                        type="submit"
                        disabled=move || form.with(SignupForm::submit_disabled)
                    >
                        {move || form.with(SignupForm::submit_label)}
                    </button>
                </form>

                <p class="auth-card__switch">
                    "Already have an account? "
                    <button class="auth-card__link" type="button" on:click=move |_| on_switch_to_login.run(())>
                        "Sign in"
                    </button>
                </p>
            </div>
        </div>
    }
}
