//! One-shot delayed callbacks bound to a view's lifetime.
//!
//! DESIGN
//! ======
//! A [`OneShot`] guard moves from pending to either fired or cancelled, once.
//! Views create the guard on mount and cancel it in `on_cleanup`, so a timer
//! that outlives its view never runs the callback.

#[cfg(test)]
#[path = "deferred_test.rs"]
mod deferred_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

const PENDING: u8 = 0;
const FIRED: u8 = 1;
const CANCELLED: u8 = 2;

/// Shared pending/fired/cancelled flag for one delayed callback.
#[derive(Clone, Debug, Default)]
pub struct OneShot {
    state: Arc<AtomicU8>,
}

impl OneShot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prevent the callback from running. No effect once fired.
    pub fn cancel(&self) {
        let _ = self.state.compare_exchange(PENDING, CANCELLED, Ordering::SeqCst, Ordering::SeqCst);
    }

    pub fn is_pending(&self) -> bool {
        self.state.load(Ordering::SeqCst) == PENDING
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.load(Ordering::SeqCst) == CANCELLED
    }

    /// Run `f` if still pending. Returns whether it ran.
    pub fn fire(&self, f: impl FnOnce()) -> bool {
        if self
            .state
            .compare_exchange(PENDING, FIRED, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            f();
            true
        } else {
            false
        }
    }
}

/// Await `sleep`, then fire `guard` with `f`.
pub async fn run_after<S>(guard: OneShot, sleep: S, f: impl FnOnce()) -> bool
where
    S: Future<Output = ()>,
{
    sleep.await;
    guard.fire(f)
}
