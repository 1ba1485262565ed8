//! App shell: chooses between loading, auth, and dashboard screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! The screen is a memo over session + router state, so pages are only
//! remounted when the screen itself changes, never on unrelated router
//! updates. Each auth page therefore keeps its own form state until the user
//! toggles away from it.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::signup::SignupPage;
use crate::state::router::{RouterState, Screen};
use crate::state::session::SessionStore;

#[component]
pub fn AcademyPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let router = expect_context::<RwSignal<RouterState>>();
    let session = store.session();

    let screen = Memo::new(move |_| session.with(|s| router.with(|r| r.screen(s))));

    let on_switch_to_signup = Callback::new(move |()| router.update(RouterState::show_signup));
    let on_switch_to_login = Callback::new(move |()| router.update(RouterState::show_login));

    move || match screen.get() {
        Screen::Loading => view! { <LoadingScreen/> }.into_any(),
        Screen::Login => view! { <LoginPage on_switch_to_signup=on_switch_to_signup/> }.into_any(),
        Screen::Signup => view! { <SignupPage on_switch_to_login=on_switch_to_login/> }.into_any(),
        Screen::Dashboard => view! { <DashboardPage/> }.into_any(),
    }
}

/// Full-screen spinner shown while the session resolves.
#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner" aria-hidden="true"></div>
            <p class="loading-screen__text">"Loading..."</p>
        </div>
    }
}
