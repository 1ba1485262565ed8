//! The identity provider capability consumed by the session store.
//!
//! DESIGN
//! ======
//! The provider is injected as `Arc<dyn IdentityProvider>` instead of living in
//! ambient global state, so the app can run against the HTTP provider, the
//! in-memory offline provider, or a test double without code changes.
//!
//! Futures are `?Send` because browser fetch futures are not `Send`; the
//! provider value itself is `Send + Sync` so it can sit in Leptos context.

use async_trait::async_trait;

use super::types::Identity;

/// Provider-reported authentication failure.
///
/// The `Display` output is the provider's human-readable message, shown to
/// the user verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Email/password pair was not accepted.
    #[error("{0}")]
    InvalidCredentials(String),
    /// An account with this email already exists.
    #[error("{0}")]
    DuplicateAccount(String),
    /// Input the provider considers malformed (weak password, bad email, ...).
    #[error("{0}")]
    Rejected(String),
    /// Network failure or provider-side error.
    #[error("{0}")]
    Unavailable(String),
}

impl AuthError {
    /// The message to display in the view's error banner.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidCredentials(m) | Self::DuplicateAccount(m) | Self::Rejected(m) | Self::Unavailable(m) => m,
        }
    }
}

/// External identity provider operations.
#[async_trait(?Send)]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the identity of a previously established session, if any.
    ///
    /// Failures are reported as absence; resolution must always complete.
    async fn current_identity(&self) -> Option<Identity>;

    /// Authenticate with email and password, establishing a session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the credentials are rejected or the provider
    /// cannot be reached.
    async fn authenticate(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    /// Register a new account. Does not establish a session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] for duplicate accounts, rejected input, or an
    /// unreachable provider.
    async fn register(&self, email: &str, password: &str, display_name: &str) -> Result<(), AuthError>;

    /// End the current session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the provider reports a failure.
    async fn deauthenticate(&self) -> Result<(), AuthError>;
}
