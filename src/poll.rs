//! The single retry loop behind every policy-bearing read.

use core::sync::atomic::{AtomicBool, Ordering};
use core::time::Duration;

use crate::scheduler::Scheduler;
use crate::timeout::TimeoutPolicy;

/// Drives an attempt closure according to a [`TimeoutPolicy`].
///
/// `Infinite` re-probes every `interval`. `Bounded(d)` sleeps once for all of `d`
/// and probes exactly once more.
pub(crate) struct Poller<'a> {
    scheduler: &'a dyn Scheduler,
    interval: Duration,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> Poller<'a> {
    pub(crate) fn new(scheduler: &'a dyn Scheduler, interval: Duration) -> Self {
        Self {
            scheduler,
            interval,
            cancel: None,
        }
    }

    /// Stop an `Infinite` loop once `flag` is set. Checked before each probe.
    pub(crate) fn cancel_on(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Run `attempt` until it reports completion or the policy gives up.
    pub(crate) fn run<F>(&self, policy: TimeoutPolicy, mut attempt: F) -> bool
    where
        F: FnMut() -> bool,
    {
        match policy {
            TimeoutPolicy::Immediate => attempt(),
            TimeoutPolicy::Bounded(timeout) => {
                if attempt() {
                    return true;
                }
                self.scheduler.sleep(timeout);
                attempt()
            }
            TimeoutPolicy::Infinite => loop {
                if self.cancelled() {
                    return false;
                }
                if attempt() {
                    return true;
                }
                self.scheduler.sleep(self.interval);
            },
        }
    }

    fn cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::Acquire))
    }
}
