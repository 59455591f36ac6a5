//! Scheduler capability used between poll attempts.

use core::time::Duration;

/// Suspends the calling thread without spinning.
pub trait Scheduler: Send + Sync {
    /// Yield the processor for at least `duration`.
    fn sleep(&self, duration: Duration);
}
