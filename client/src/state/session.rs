#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::provider::{AuthError, IdentityProvider};
use crate::net::types::Identity;
use crate::state::router::RouterState;

/// Prompt shown before signing out.
pub const SIGN_OUT_PROMPT: &str = "Are you sure you want to sign out?";

/// Authentication state tracking the current user and initial resolution.
///
/// `loading` is true only until the provider reports whether a session
/// already exists; it never becomes true again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: Option<Identity>,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

/// Transitions applied to a [`Session`], each as a single write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Initial resolution finished with the given identity (or none).
    Resolved(Option<Identity>),
    SignedIn(Identity),
    SignedOut,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    /// Apply `event`. Returns `false` when the event was ignored.
    ///
    /// A late `Resolved` (after a sign-in already cleared `loading`) is ignored.
    pub fn apply(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::Resolved(user) => {
                if !self.loading {
                    return false;
                }
                self.user = user;
                self.loading = false;
            }
            SessionEvent::SignedIn(user) => {
                self.user = Some(user);
                self.loading = false;
            }
            SessionEvent::SignedOut => {
                self.user = None;
            }
        }
        true
    }
}

/// Process-wide session context backed by an injected identity provider.
///
/// Cheap to clone; clones share the provider and the session signal. Only
/// the operations below write the session.
#[derive(Clone)]
pub struct SessionStore {
    provider: Arc<dyn IdentityProvider>,
    session: RwSignal<Session>,
}

impl SessionStore {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider, session: RwSignal::new(Session::default()) }
    }

    /// Reactive handle for views.
    pub fn session(&self) -> RwSignal<Session> {
        self.session
    }

    /// Current session without subscribing.
    pub fn snapshot(&self) -> Session {
        self.session.get_untracked()
    }

    fn apply(&self, event: SessionEvent) -> bool {
        self.session.try_update(|s| s.apply(event)).unwrap_or(false)
    }

    /// Ask the provider for an existing session and leave the loading state.
    pub async fn resolve(&self) {
        if !self.session.with_untracked(|s| s.loading) {
            return;
        }
        let user = self.provider.current_identity().await;
        let found = user.is_some();
        if self.apply(SessionEvent::Resolved(user)) {
            log::info!("session resolved (signed in: {found})");
        }
    }

    /// Authenticate and establish the session.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`AuthError`]; the session is left untouched.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        match self.provider.authenticate(email, password).await {
            Ok(user) => {
                log::info!("signed in as {}", user.email);
                self.apply(SessionEvent::SignedIn(user));
                Ok(())
            }
            Err(e) => {
                log::warn!("sign-in failed: {e}");
                Err(e)
            }
        }
    }

    /// Register a new account. Never establishes a session.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`AuthError`].
    pub async fn sign_up(&self, email: &str, password: &str, display_name: &str) -> Result<(), AuthError> {
        self.provider
            .register(email, password, display_name)
            .await
            .inspect(|()| log::info!("account created for {email}"))
            .inspect_err(|e| log::warn!("sign-up failed: {e}"))
    }

    /// End the session.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`AuthError`]; the user stays signed in.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        match self.provider.deauthenticate().await {
            Ok(()) => {
                log::info!("signed out");
                self.apply(SessionEvent::SignedOut);
                Ok(())
            }
            Err(e) => {
                log::warn!("sign-out failed: {e}");
                Err(e)
            }
        }
    }

    /// Sign out after `confirm` accepts [`SIGN_OUT_PROMPT`].
    ///
    /// Returns `Ok(false)` without contacting the provider when declined.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`AuthError`] if sign-out fails.
    pub async fn confirm_and_sign_out(&self, confirm: impl FnOnce(&str) -> bool) -> Result<bool, AuthError> {
        if !confirm(SIGN_OUT_PROMPT) {
            return Ok(false);
        }
        self.sign_out().await.map(|()| true)
    }

    /// Confirmed sign-out followed by the return to the login screen.
    ///
    /// `router` is only reset once the provider has ended the session; a
    /// declined prompt or a failed sign-out leaves it as it was.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`AuthError`] if sign-out fails.
    pub async fn sign_out_from_dashboard(
        &self,
        confirm: impl FnOnce(&str) -> bool,
        router: RwSignal<RouterState>,
    ) -> Result<bool, AuthError> {
        let signed_out = self.confirm_and_sign_out(confirm).await?;
        if signed_out {
            router.try_update(RouterState::signed_out);
        }
        Ok(signed_out)
    }
}
