//! Top navigation bar: tab set, signed-in user, and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure display + dispatch. Tab clicks go to the caller; sign-out asks for
//! confirmation, then calls the session store and resets router selection.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;

use crate::state::router::{RouterState, Tab};
use crate::state::session::SessionStore;

const TAB_CLASS: &str = "nav__tab";
const TAB_ACTIVE_CLASS: &str = "nav__tab nav__tab--active";

fn tab_class(active: bool) -> &'static str {
    if active { TAB_ACTIVE_CLASS } else { TAB_CLASS }
}

#[component]
pub fn Navigation(active_tab: Memo<Tab>, on_tab_change: Callback<Tab>) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let router = expect_context::<RwSignal<RouterState>>();
    let session = store.session();

    let email = move || {
        session.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default())
    };

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                // Provider failures are logged by the store; the user stays put.
                let _ = store.sign_out_from_dashboard(crate::util::confirm::confirm, router).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&store, router);
        }
    };

    view! {
        <nav class="nav">
            <div class="nav__brand">
                <span class="nav__title">"CyberSec Academy"</span>
            </div>
            <div class="nav__tabs">
                {Tab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class=move || tab_class(active_tab.get() == tab)
                                data-tab=tab.id()
                                on:click=move |_| on_tab_change.run(tab)
                            >
                                <span class="nav__tab-label">{tab.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
                <div class="nav__user">
                    <span class="nav__email">{email}</span>
                    <button class="nav__logout" on:click=on_sign_out title="Sign Out">
                        "Logout"
                    </button>
                </div>
            </div>
        </nav>
    }
}
