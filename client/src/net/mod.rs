//! Networking modules for the identity provider boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` defines the injected `IdentityProvider` capability, `gotrue`
//! implements it over HTTP, `memory` implements it in-process for offline mode
//! and tests, and `types` defines the shared identity schema.

pub mod gotrue;
pub mod memory;
pub mod provider;
pub mod types;
