//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! native dialogs) from page and component logic to improve testability.

pub mod confirm;
pub mod deferred;
pub mod storage;
