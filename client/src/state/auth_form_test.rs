use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use super::*;
use crate::net::memory::MemoryProvider;
use crate::net::provider::IdentityProvider;
use crate::state::session::SessionStore;
use crate::util::deferred::{OneShot, run_after};

fn filled_signup() -> SignupForm {
    SignupForm {
        full_name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
        ..SignupForm::default()
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_login_requires_both_fields() {
    assert_eq!(validate_login("", "pw"), Err(ValidationError::MissingFields));
    assert_eq!(validate_login("a@b.co", ""), Err(ValidationError::MissingFields));
    assert_eq!(validate_login("   ", "pw"), Err(ValidationError::MissingFields));
}

#[test]
fn validate_login_trims_email_only() {
    assert_eq!(
        validate_login("  a@b.co ", " pw "),
        Ok(Credentials { email: "a@b.co".to_owned(), password: " pw ".to_owned() })
    );
}

#[test]
fn validate_signup_any_empty_field_is_missing() {
    let cases = [
        ("", "a@b.co", "secret1", "secret1"),
        ("Ada", "", "secret1", "secret1"),
        ("Ada", "a@b.co", "", "secret1"),
        ("Ada", "a@b.co", "secret1", ""),
    ];
    for (name, email, password, confirm) in cases {
        assert_eq!(validate_signup(name, email, password, confirm), Err(ValidationError::MissingFields));
    }
}

#[test]
fn validate_signup_short_password_always_errors() {
    for password in ["a", "abc", "abcde"] {
        assert_eq!(
            validate_signup("Ada", "a@b.co", password, password),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_signup("Ada", "a@b.co", password, "different"),
            Err(ValidationError::PasswordTooShort)
        );
    }
}

#[test]
fn validate_signup_counts_characters_not_bytes() {
    assert_eq!(validate_signup("Ada", "a@b.co", "ñññ", "ñññ"), Err(ValidationError::PasswordTooShort));
    assert!(validate_signup("Ada", "a@b.co", "ññññññ", "ññññññ").is_ok());
}

#[test]
fn validate_signup_mismatch_with_valid_lengths() {
    assert_eq!(
        validate_signup("Ada", "a@b.co", "secret1", "secret2"),
        Err(ValidationError::PasswordMismatch)
    );
}

#[test]
fn validation_messages_match_banner_text() {
    assert_eq!(ValidationError::MissingFields.to_string(), "Please fill in all fields");
    assert_eq!(ValidationError::PasswordTooShort.to_string(), "Password must be at least 6 characters long");
    assert_eq!(ValidationError::PasswordMismatch.to_string(), "Passwords do not match");
}

// =============================================================
// LoginForm
// =============================================================

#[test]
fn login_invalid_submit_sets_error_without_submitting() {
    let mut form = LoginForm { email: "a@b.co".to_owned(), ..LoginForm::default() };
    assert_eq!(form.begin_submit(), None);
    assert_eq!(form.error.as_deref(), Some("Please fill in all fields"));
    assert!(!form.submitting);
}

#[test]
fn login_submit_clears_previous_error() {
    let mut form = LoginForm {
        email: "a@b.co".to_owned(),
        password: "pw".to_owned(),
        error: Some("Invalid login credentials".to_owned()),
        submitting: false,
    };
    assert!(form.begin_submit().is_some());
    assert_eq!(form.error, None);
    assert!(form.submitting);
    assert_eq!(form.submit_label(), "Signing in...");
}

#[test]
fn login_second_submit_while_submitting_is_ignored() {
    let mut form = LoginForm { email: "a@b.co".to_owned(), password: "pw".to_owned(), ..LoginForm::default() };
    assert!(form.begin_submit().is_some());
    assert_eq!(form.begin_submit(), None);
    assert!(form.submitting);
}

#[test]
fn login_provider_error_is_shown_verbatim() {
    let mut form = LoginForm { email: "a@b.co".to_owned(), password: "pw".to_owned(), ..LoginForm::default() };
    form.begin_submit();
    form.finish_submit(&Err(AuthError::InvalidCredentials("Invalid login credentials".to_owned())));
    assert!(!form.submitting);
    assert_eq!(form.error.as_deref(), Some("Invalid login credentials"));
    assert_eq!(form.submit_label(), "Sign In");
}

#[tokio::test]
async fn login_with_empty_field_never_calls_provider() {
    let provider = Arc::new(MemoryProvider::new());
    let store = SessionStore::new(provider.clone());
    let mut form = LoginForm { password: "secret1".to_owned(), ..LoginForm::default() };

    if let Some(credentials) = form.begin_submit() {
        let result = store.sign_in(&credentials.email, &credentials.password).await;
        form.finish_submit(&result);
    }

    assert_eq!(provider.request_count(), 0);
    assert_eq!(form.error.as_deref(), Some("Please fill in all fields"));
}

#[tokio::test]
async fn login_success_authenticates_session() {
    let provider = Arc::new(MemoryProvider::new());
    provider.register("ada@example.com", "secret1", "Ada").await.unwrap();
    let store = SessionStore::new(provider.clone());
    let mut form = LoginForm {
        email: "ada@example.com".to_owned(),
        password: "secret1".to_owned(),
        ..LoginForm::default()
    };

    let credentials = form.begin_submit().unwrap();
    let result = store.sign_in(&credentials.email, &credentials.password).await;
    form.finish_submit(&result);

    assert_eq!(form.error, None);
    assert!(store.snapshot().is_authenticated());
}

// =============================================================
// SignupForm
// =============================================================

#[test]
fn signup_invalid_submit_sets_first_error() {
    let mut form = SignupForm { password: "abc".to_owned(), confirm_password: "abd".to_owned(), ..filled_signup() };
    assert_eq!(form.begin_submit(), None);
    assert_eq!(form.error.as_deref(), Some("Password must be at least 6 characters long"));
}

#[test]
fn signup_success_disables_submit_and_requests_redirect() {
    let mut form = filled_signup();
    assert!(form.begin_submit().is_some());
    assert!(form.submit_disabled());
    assert_eq!(form.submit_label(), "Creating account...");
    assert!(form.finish_submit(&Ok(())));
    assert!(form.success);
    assert!(!form.submitting);
    assert!(form.submit_disabled());
    assert_eq!(form.begin_submit(), None);
}

#[test]
fn signup_failure_shows_provider_message() {
    let mut form = filled_signup();
    form.begin_submit();
    assert!(!form.finish_submit(&Err(AuthError::DuplicateAccount("User already registered".to_owned()))));
    assert_eq!(form.error.as_deref(), Some("User already registered"));
    assert!(!form.success);
    assert!(!form.submit_disabled());
}

#[tokio::test]
async fn signup_with_mismatched_passwords_never_calls_provider() {
    let provider = Arc::new(MemoryProvider::new());
    let store = SessionStore::new(provider.clone());
    let mut form = SignupForm { confirm_password: "secret2".to_owned(), ..filled_signup() };

    if let Some(reg) = form.begin_submit() {
        let result = store.sign_up(&reg.email, &reg.password, &reg.full_name).await;
        form.finish_submit(&result);
    }

    assert_eq!(provider.request_count(), 0);
    assert_eq!(form.error.as_deref(), Some("Passwords do not match"));
}

#[tokio::test(start_paused = true)]
async fn signup_success_switches_to_login_once_after_delay() {
    let provider = Arc::new(MemoryProvider::new());
    let store = SessionStore::new(provider.clone());
    let mut form = filled_signup();

    let reg = form.begin_submit().unwrap();
    let result = store.sign_up(&reg.email, &reg.password, &reg.full_name).await;
    assert!(form.finish_submit(&result));
    assert!(store.snapshot().user.is_none());

    let switches = Rc::new(Cell::new(0));
    let redirect = OneShot::new();
    let counter = Rc::clone(&switches);
    let start = tokio::time::Instant::now();
    let pending = run_after(redirect.clone(), tokio::time::sleep(SIGNUP_REDIRECT_DELAY), move || {
        counter.set(counter.get() + 1);
    });

    // Further clicks during the delay are ignored by the form.
    assert_eq!(form.begin_submit(), None);
    assert_eq!(switches.get(), 0);

    assert!(pending.await);
    assert!(start.elapsed() >= SIGNUP_REDIRECT_DELAY);
    assert_eq!(switches.get(), 1);
    assert!(!redirect.fire(|| switches.set(switches.get() + 1)));
    assert_eq!(switches.get(), 1);
}

// =============================================================
// Signup submission + redirect
// =============================================================

#[tokio::test(start_paused = true)]
async fn submit_signup_redirects_once_after_delay() {
    let provider = Arc::new(MemoryProvider::new());
    let store = SessionStore::new(provider.clone());
    let form = RwSignal::new(filled_signup());
    let registration = form.try_update(SignupForm::begin_submit).flatten().unwrap();
    let switches = Rc::new(Cell::new(0));
    let counter = Rc::clone(&switches);
    let start = tokio::time::Instant::now();

    let switched = submit_signup(&store, form, registration, OneShot::new(), tokio::time::sleep, move || {
        counter.set(counter.get() + 1);
    })
    .await;

    assert!(switched);
    assert_eq!(switches.get(), 1);
    assert!(start.elapsed() >= SIGNUP_REDIRECT_DELAY);
    let state = form.get_untracked();
    assert!(state.success);
    assert!(state.submit_disabled());
    assert!(store.snapshot().user.is_none());
}

#[tokio::test(start_paused = true)]
async fn submit_signup_skips_redirect_after_unmount() {
    let store = SessionStore::new(Arc::new(MemoryProvider::new()));
    let form = RwSignal::new(filled_signup());
    let registration = form.try_update(SignupForm::begin_submit).flatten().unwrap();
    let redirect = OneShot::new();
    let switches = Cell::new(0);

    let unmount = async {
        tokio::time::sleep(Duration::from_secs(1)).await;
        redirect.cancel();
    };
    let submit = submit_signup(&store, form, registration, redirect.clone(), tokio::time::sleep, || {
        switches.set(switches.get() + 1);
    });
    let ((), switched) = tokio::join!(unmount, submit);

    assert!(!switched);
    assert_eq!(switches.get(), 0);
    assert!(redirect.is_cancelled());
    assert!(form.get_untracked().success);
}

#[tokio::test(start_paused = true)]
async fn submit_signup_failure_never_redirects() {
    let provider = Arc::new(MemoryProvider::new());
    provider.register("ada@example.com", "secret1", "Ada").await.unwrap();
    let store = SessionStore::new(provider.clone());
    let form = RwSignal::new(filled_signup());
    let registration = form.try_update(SignupForm::begin_submit).flatten().unwrap();
    let switches = Cell::new(0);
    let start = tokio::time::Instant::now();

    let switched = submit_signup(&store, form, registration, OneShot::new(), tokio::time::sleep, || {
        switches.set(switches.get() + 1);
    })
    .await;

    assert!(!switched);
    assert_eq!(switches.get(), 0);
    assert!(start.elapsed() < SIGNUP_REDIRECT_DELAY);
    let state = form.get_untracked();
    assert_eq!(state.error.as_deref(), Some("User already registered"));
    assert!(!state.submit_disabled());
}
