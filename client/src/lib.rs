//! # academy-client
//!
//! Leptos + WASM front-end for the CyberSec Academy learning platform.
//!
//! This crate contains the session store and its identity providers, the
//! app-shell routing state machine, the login/signup forms, and the
//! dashboard pages and components. The server crate renders it with SSR;
//! the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = config::AuthConfig::from_document();
    leptos::mount::hydrate_body(move || view! { <app::App config=config/> });
}
