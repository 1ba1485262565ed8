//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{AuthConfig, META_AUTH_ANON_KEY, META_AUTH_URL};
use crate::pages::academy::AcademyPage;
use crate::state::router::RouterState;
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The provider configuration is written into `<meta>` tags so the hydrated
/// client can rebuild the same provider.
pub fn shell(options: LeptosOptions, config: AuthConfig) -> impl IntoView {
    let meta_url = config.url.clone().unwrap_or_default();
    let meta_key = config.anon_key.clone();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_AUTH_URL content=meta_url/>
                <meta name=META_AUTH_ANON_KEY content=meta_key/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session store around the configured identity provider and
/// provides it, together with the router state, to every child view.
#[component]
pub fn App(config: AuthConfig) -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new(config.provider());
    let router = RwSignal::new(RouterState::default());
    provide_context(store.clone());
    provide_context(router);

    if config.is_offline() {
        log::info!("no identity provider configured; running offline");
    }

    // Initial session resolution happens in the browser only; SSR renders
    // the loading screen, which is also the first hydrated frame.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        store.resolve().await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = store;

    view! {
        <Title text="CyberSec Academy"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AcademyPage/>
            </Routes>
        </Router>
    }
}
