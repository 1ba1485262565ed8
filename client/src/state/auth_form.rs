//! Login and signup form state machines.
//!
//! Each form moves `idle -> submitting -> idle` (with an error, or for signup
//! with success). Local validation runs inside `begin_submit` and
//! short-circuits before any provider call.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;

use crate::net::provider::AuthError;
use crate::state::session::SessionStore;
use crate::util::deferred::{OneShot, run_after};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Delay between signup success and the switch back to login.
pub const SIGNUP_REDIRECT_DELAY: Duration = Duration::from_secs(2);

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Account created successfully! Redirecting to login...";

/// Local, pre-network input problems.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Validate login input. Email is trimmed; the password is taken as typed.
///
/// # Errors
///
/// Returns [`ValidationError::MissingFields`] if either field is empty.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials, ValidationError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Validate signup input: completeness, then length, then confirmation.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn validate_signup(
    full_name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<Registration, ValidationError> {
    let full_name = full_name.trim();
    let email = email.trim();
    if full_name.is_empty() || email.is_empty() || password.is_empty() || confirm_password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(Registration { full_name: full_name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// Login view state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub submitting: bool,
}

impl LoginForm {
    /// Start a submit attempt.
    ///
    /// Returns the credentials to send, or `None` when the attempt is ignored
    /// (already submitting) or failed validation (error set).
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.submitting {
            return None;
        }
        self.error = None;
        match validate_login(&self.email, &self.password) {
            Ok(credentials) => {
                self.submitting = true;
                Some(credentials)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Record the provider's answer.
    pub fn finish_submit(&mut self, result: &Result<(), AuthError>) {
        self.submitting = false;
        if let Err(e) = result {
            self.error = Some(e.message().to_owned());
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting { "Signing in..." } else { "Sign In" }
    }
}

/// Signup view state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub error: Option<String>,
    pub success: bool,
    pub submitting: bool,
}

impl SignupForm {
    /// Start a submit attempt.
    ///
    /// Ignored while submitting and after success (the redirect is pending).
    pub fn begin_submit(&mut self) -> Option<Registration> {
        if self.submit_disabled() {
            return None;
        }
        self.error = None;
        self.success = false;
        match validate_signup(&self.full_name, &self.email, &self.password, &self.confirm_password) {
            Ok(registration) => {
                self.submitting = true;
                Some(registration)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Record the provider's answer. Returns `true` when the redirect to
    /// login should be scheduled.
    pub fn finish_submit(&mut self, result: &Result<(), AuthError>) -> bool {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.success = true;
                true
            }
            Err(e) => {
                self.error = Some(e.message().to_owned());
                false
            }
        }
    }

    pub fn submit_disabled(&self) -> bool {
        self.submitting || self.success
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting { "Creating account..." } else { "Create Account" }
    }
}

/// Send a validated registration and, on success, switch back to login
/// after [`SIGNUP_REDIRECT_DELAY`].
///
/// `sleep` starts the delay on the current runtime's timer. The switch is
/// skipped when `redirect` is cancelled first (the page unmounted).
/// Returns whether `on_switch_to_login` ran.
pub async fn submit_signup<S>(
    store: &SessionStore,
    form: RwSignal<SignupForm>,
    registration: Registration,
    redirect: OneShot,
    sleep: impl FnOnce(Duration) -> S,
    on_switch_to_login: impl FnOnce(),
) -> bool
where
    S: Future<Output = ()>,
{
    let result = store
        .sign_up(&registration.email, &registration.password, &registration.full_name)
        .await;
    if !form.try_update(|f| f.finish_submit(&result)).unwrap_or(false) {
        return false;
    }
    let switched = run_after(redirect, sleep(SIGNUP_REDIRECT_DELAY), on_switch_to_login).await;
    if !switched {
        log::debug!("signup redirect dropped: page already gone");
    }
    switched
}
