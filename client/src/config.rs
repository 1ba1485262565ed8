//! Identity provider configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server reads the configuration from its environment and renders it
//! into `<meta>` tags of the HTML shell; the hydrated client reads the same
//! tags back, so both sides build the same provider.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::net::gotrue::GoTrueProvider;
use crate::net::memory::MemoryProvider;
use crate::net::provider::IdentityProvider;

/// `<meta name=...>` carrying the provider base URL.
pub const META_AUTH_URL: &str = "academy-auth-url";
/// `<meta name=...>` carrying the provider's public anon key.
pub const META_AUTH_ANON_KEY: &str = "academy-auth-anon-key";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Provider base URL. `None` selects offline mode.
    pub url: Option<String>,
    /// Public API key sent with every provider request.
    pub anon_key: String,
}

impl AuthConfig {
    /// Offline mode: accounts live in memory for the page's lifetime.
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn hosted(url: &str, anon_key: &str) -> Self {
        Self { url: Some(url.to_owned()), anon_key: anon_key.to_owned() }
    }

    /// Build from raw meta tag contents; blank values mean "not set".
    pub fn from_meta(url: Option<&str>, anon_key: Option<&str>) -> Self {
        let url = url.map(str::trim).filter(|u| !u.is_empty()).map(str::to_owned);
        Self { url, anon_key: anon_key.unwrap_or_default().trim().to_owned() }
    }

    pub fn is_offline(&self) -> bool {
        self.url.as_deref().is_none_or(|u| u.trim().is_empty())
    }

    /// Provider selected by this configuration.
    pub fn provider(&self) -> Arc<dyn IdentityProvider> {
        match self.url.as_deref() {
            Some(url) if !self.is_offline() => Arc::new(GoTrueProvider::new(url, &self.anon_key)),
            _ => Arc::new(MemoryProvider::new()),
        }
    }

    /// Read the configuration the server rendered into the document head.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let read = |name: &str| {
                web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|doc| doc.query_selector(&format!("meta[name=\"{name}\"]")).ok().flatten())
                    .and_then(|el| el.get_attribute("content"))
            };
            Self::from_meta(read(META_AUTH_URL).as_deref(), read(META_AUTH_ANON_KEY).as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::offline()
        }
    }
}
