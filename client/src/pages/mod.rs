//! Page modules for top-level screens.
//!
//! ARCHITECTURE
//! ============
//! `academy` is the app shell that picks a screen from session + router
//! state; the other pages own screen-scoped orchestration and delegate
//! rendering details to `components`.

pub mod academy;
pub mod dashboard;
pub mod login;
pub mod signup;
