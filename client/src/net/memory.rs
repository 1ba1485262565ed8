//! In-process identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs offline mode (no auth URL configured) and tests. Accounts live only
//! as long as the provider value; nothing is persisted.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::provider::{AuthError, IdentityProvider};
use super::types::Identity;

const MIN_PASSWORD_LEN: usize = 6;

struct Account {
    identity: Identity,
    password: String,
}

/// Identity provider holding accounts in memory.
#[derive(Default)]
pub struct MemoryProvider {
    accounts: Mutex<HashMap<String, Account>>,
    current: Mutex<Option<Identity>>,
    requests: AtomicUsize,
}

impl MemoryProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider that already holds an established session for `identity`,
    /// as if a previous page load had signed in.
    #[must_use]
    pub fn with_session(identity: Identity) -> Self {
        let provider = Self::new();
        *lock(&provider.current) = Some(identity);
        provider
    }

    /// Number of authenticate/register/deauthenticate calls received.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn account_key(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

#[async_trait(?Send)]
impl IdentityProvider for MemoryProvider {
    async fn current_identity(&self) -> Option<Identity> {
        lock(&self.current).clone()
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        self.record_request();
        let accounts = lock(&self.accounts);
        let identity = accounts
            .get(&account_key(email))
            .filter(|account| account.password == password)
            .map(|account| account.identity.clone())
            .ok_or_else(|| AuthError::InvalidCredentials("Invalid login credentials".to_owned()))?;
        *lock(&self.current) = Some(identity.clone());
        Ok(identity)
    }

    async fn register(&self, email: &str, password: &str, display_name: &str) -> Result<(), AuthError> {
        self.record_request();
        if !looks_like_email(email) {
            return Err(AuthError::Rejected("Unable to validate email address: invalid format".to_owned()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::Rejected("Password should be at least 6 characters.".to_owned()));
        }
        let key = account_key(email);
        let mut accounts = lock(&self.accounts);
        if accounts.contains_key(&key) {
            return Err(AuthError::DuplicateAccount("User already registered".to_owned()));
        }
        let identity = Identity {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.trim().to_owned(),
            display_name: Some(display_name.to_owned()).filter(|name| !name.is_empty()),
        };
        accounts.insert(key, Account { identity, password: password.to_owned() });
        Ok(())
    }

    async fn deauthenticate(&self) -> Result<(), AuthError> {
        self.record_request();
        lock(&self.current).take();
        Ok(())
    }
}
