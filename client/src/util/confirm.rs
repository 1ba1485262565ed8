//! Native confirmation dialog.

/// Ask the user to confirm `message` with `window.confirm`.
///
/// Returns `false` when no browser window is available (SSR) or the dialog
/// could not be shown, so callers treat "no answer" as declined.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
