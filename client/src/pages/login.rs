//! Login page: email + password sign-in.

use leptos::prelude::*;

use crate::state::auth_form::LoginForm;
use crate::state::session::SessionStore;

#[component]
pub fn LoginPage(on_switch_to_signup: Callback<()>) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                let result = store.sign_in(&credentials.email, &credentials.password).await;
                // On success the session switch unmounts this page; the
                // signal may already be gone.
                form.try_update(|f| f.finish_submit(&result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&store, credentials);
        }
    };

    let submitting = move || form.with(|f| f.submitting);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue your cybersecurity journey"</p>

                <Show when=move || form.with(|f| f.error.is_some())>
                    <div class="auth-card__error" role="alert">
                        <p>{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                    </div>
                </Show>

                <form class="auth-form" on:submit=on_submit>
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
                            placeholder="Enter your password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            disabled=submitting
                        />
                    </label>
                    <button class="auth-form__submit" type="submit" disabled=submitting>
                        {move || form.with(LoginForm::submit_label)}
                    </button>
                </form>

                <p class="auth-card__switch">
                    "Don't have an account? "
                    <button class="auth-card__link" type="button" on:click=move |_| on_switch_to_signup.run(())>
                        "Sign up"
                    </button>
                </p>
            </div>
        </div>
    }
}
