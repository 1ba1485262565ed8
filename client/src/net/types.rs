//! Identity DTOs shared by providers, session state, and views.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque provider-assigned user identifier.
    pub id: String,
    /// Email address the account was registered with.
    pub email: String,
    /// Full name captured at sign-up, if the provider returned it.
    #[serde(default)]
    pub display_name: Option<String>,
}
