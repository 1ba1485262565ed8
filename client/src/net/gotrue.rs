//! HTTP identity provider speaking the GoTrue auth REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the access
//! token persisted in `localStorage`.
//! Server-side (SSR): stubs; identity is only ever resolved in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-OK responses are mapped to [`AuthError`] variants by status and error
//! code, carrying the provider's own message so views can show it verbatim.
//! Transport failures become [`AuthError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gotrue_test.rs"]
mod gotrue_test;

use async_trait::async_trait;
#[cfg(any(test, feature = "hydrate"))]
use serde::{Deserialize, Serialize};

use super::provider::{AuthError, IdentityProvider};
use super::types::Identity;

/// `localStorage` key holding the persisted session.
#[cfg(feature = "hydrate")]
const SESSION_STORAGE_KEY: &str = "academy_auth_session";

/// Provider backed by a GoTrue-compatible auth service.
#[derive(Clone, Debug)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub struct GoTrueProvider {
    base_url: String,
    anon_key: String,
}

impl GoTrueProvider {
    #[must_use]
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned(), anon_key: anon_key.to_owned() }
    }
}

/// Session tokens persisted between page loads.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct StoredSession {
    access_token: String,
    refresh_token: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    user: UserResponse,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: serde_json::Value,
}

#[cfg(any(test, feature = "hydrate"))]
impl UserResponse {
    fn into_identity(self) -> Identity {
        let display_name = self
            .user_metadata
            .get("full_name")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned);
        Identity { id: self.id, email: self.email.unwrap_or_default(), display_name }
    }
}

/// Error payload fields across GoTrue versions. All optional.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    error: Option<String>,
    error_code: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
impl From<&TokenResponse> for StoredSession {
    fn from(body: &TokenResponse) -> Self {
        Self { access_token: body.access_token.clone(), refresh_token: body.refresh_token.clone() }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{base_url}/auth/v1/{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn token_endpoint(base_url: &str, grant_type: &str) -> String {
    format!("{}?grant_type={grant_type}", endpoint(base_url, "token"))
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_payload(email: &str, password: &str, display_name: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "password": password,
        "data": { "full_name": display_name },
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("auth request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, body: &ErrorBody) -> String {
    [&body.msg, &body.error_description, &body.message, &body.error]
        .into_iter()
        .flatten()
        .find(|m| !m.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| request_failed_message(status))
}

/// What happens to the stored session after the provider answers `status`.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StoredSessionAction {
    Keep,
    /// The access token expired; trade the refresh token for a new pair.
    Refresh,
    Discard,
}

/// Decision for a `GET /user` response. Provider outages keep the session
/// so the next page load can try again.
#[cfg(any(test, feature = "hydrate"))]
fn user_lookup_action(status: u16) -> StoredSessionAction {
    match status {
        200..=299 | 500.. => StoredSessionAction::Keep,
        401 | 403 => StoredSessionAction::Refresh,
        _ => StoredSessionAction::Discard,
    }
}

/// Whether a `POST /logout` response ends the local session. Besides
/// success, these statuses mean the provider no longer knows the token.
#[cfg(any(test, feature = "hydrate"))]
fn logout_ends_session(status: u16) -> bool {
    (200..=299).contains(&status) || matches!(status, 401 | 403 | 404)
}

/// Map a non-OK response to an [`AuthError`].
#[cfg(any(test, feature = "hydrate"))]
fn classify_error(status: u16, raw_body: &str) -> AuthError {
    let body: ErrorBody = serde_json::from_str(raw_body).unwrap_or_default();
    let message = error_message(status, &body);
    if status >= 500 {
        return AuthError::Unavailable(message);
    }

    let code = body.error_code.as_deref().or(body.error.as_deref()).unwrap_or_default();
    let lowered = message.to_ascii_lowercase();
    if matches!(code, "user_already_exists" | "email_exists") || lowered.contains("already registered") {
        return AuthError::DuplicateAccount(message);
    }
    if matches!(code, "invalid_credentials" | "invalid_grant") || lowered.contains("invalid login credentials") {
        return AuthError::InvalidCredentials(message);
    }
    AuthError::Rejected(message)
}

#[cfg(feature = "hydrate")]
fn transport_error(err: &gloo_net::Error) -> AuthError {
    AuthError::Unavailable(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> AuthError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    classify_error(status, &body)
}

#[cfg(feature = "hydrate")]
impl GoTrueProvider {
    /// `POST /token` for `grant_type`, persisting the returned session.
    async fn token_grant(&self, grant_type: &str, payload: &serde_json::Value) -> Result<Identity, AuthError> {
        let resp = gloo_net::http::Request::post(&token_endpoint(&self.base_url, grant_type))
            .header("apikey", &self.anon_key)
            .json(payload)
            .map_err(|e| transport_error(&e))?
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let body: TokenResponse = resp.json().await.map_err(|e| transport_error(&e))?;
        crate::util::storage::save_json(SESSION_STORAGE_KEY, &StoredSession::from(&body));
        Ok(body.user.into_identity())
    }

    /// `GET /user` with the given access token. `Err(None)` on transport or
    /// decode failure, `Err(Some(status))` on a non-OK answer.
    async fn fetch_user(&self, access_token: &str) -> Result<Identity, Option<u16>> {
        let resp = gloo_net::http::Request::get(&endpoint(&self.base_url, "user"))
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|_| None::<u16>)?;
        if !resp.ok() {
            return Err(Some(resp.status()));
        }
        resp.json::<UserResponse>().await.map(UserResponse::into_identity).map_err(|_| None)
    }

    async fn refresh(&self, stored: &StoredSession) -> Option<Identity> {
        let refresh_token = stored.refresh_token.as_deref()?;
        let payload = serde_json::json!({ "refresh_token": refresh_token });
        self.token_grant("refresh_token", &payload)
            .await
            .inspect_err(|e| log::info!("session refresh failed: {e}"))
            .ok()
    }
}

#[async_trait(?Send)]
impl IdentityProvider for GoTrueProvider {
    async fn current_identity(&self) -> Option<Identity> {
        #[cfg(feature = "hydrate")]
        {
            let stored: StoredSession = crate::util::storage::load_json(SESSION_STORAGE_KEY)?;
            let status = match self.fetch_user(&stored.access_token).await {
                Ok(identity) => return Some(identity),
                Err(None) => return None,
                Err(Some(status)) => status,
            };
            match user_lookup_action(status) {
                StoredSessionAction::Keep => None,
                StoredSessionAction::Refresh => {
                    let identity = self.refresh(&stored).await;
                    if identity.is_none() {
                        crate::util::storage::remove(SESSION_STORAGE_KEY);
                    }
                    identity
                }
                StoredSessionAction::Discard => {
                    log::info!("stored session rejected by provider (status {status})");
                    crate::util::storage::remove(SESSION_STORAGE_KEY);
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            self.token_grant("password", &payload).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(AuthError::Unavailable("not available on server".to_owned()))
        }
    }

    async fn register(&self, email: &str, password: &str, display_name: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = signup_payload(email, password, display_name);
            let resp = gloo_net::http::Request::post(&endpoint(&self.base_url, "signup"))
                .header("apikey", &self.anon_key)
                .json(&payload)
                .map_err(|e| transport_error(&e))?
                .send()
                .await
                .map_err(|e| transport_error(&e))?;
            if !resp.ok() {
                return Err(error_from_response(resp).await);
            }
            // Any session returned by sign-up is dropped; the user signs in explicitly.
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password, display_name);
            Err(AuthError::Unavailable("not available on server".to_owned()))
        }
    }

    async fn deauthenticate(&self) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let Some(stored) = crate::util::storage::load_json::<StoredSession>(SESSION_STORAGE_KEY) else {
                return Ok(());
            };
            let resp = gloo_net::http::Request::post(&endpoint(&self.base_url, "logout"))
                .header("apikey", &self.anon_key)
                .header("Authorization", &format!("Bearer {}", stored.access_token))
                .send()
                .await
                .map_err(|e| transport_error(&e))?;
            // Failed logouts keep the token so the still-signed-in UI can retry.
            if !logout_ends_session(resp.status()) {
                return Err(error_from_response(resp).await);
            }
            crate::util::storage::remove(SESSION_STORAGE_KEY);
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}
