//! Persistence slot for the hosted provider's session tokens.
//!
//! SYSTEM CONTEXT
//! ==============
//! `net::gotrue` keeps its access/refresh token pair under one
//! `localStorage` key so a page reload can restore the session. Access is
//! best-effort: blocked or missing storage reads as "no session", and on the
//! server every call is a no-op.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read and decode the record under `key`. Undecodable records read as absent.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Replace the record under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(value)) else {
            log::warn!("could not persist {key}");
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("could not persist {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
