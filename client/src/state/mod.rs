//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `router`, `auth_form`) so views can
//! depend on small focused models. Everything here is plain Rust driven by
//! explicit transitions, which keeps the state machines testable natively.

pub mod auth_form;
pub mod router;
pub mod session;
