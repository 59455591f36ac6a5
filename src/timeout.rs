//! Timeout policies for blocking-style channel operations.

use core::time::Duration;

/// How long an operation may keep polling the transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeoutPolicy {
    /// Try once, never wait.
    Immediate,
    /// Retry until satisfied.
    Infinite,
    /// Try, wait once for the whole duration, try again.
    Bounded(Duration),
}

impl TimeoutPolicy {
    /// Map the kernel's timeout encoding onto a policy.
    ///
    /// `None` waits forever and a zero duration never waits.
    pub const fn from_timeout(timeout: Option<Duration>) -> Self {
        match timeout {
            None => TimeoutPolicy::Infinite,
            Some(d) if d.is_zero() => TimeoutPolicy::Immediate,
            Some(d) => TimeoutPolicy::Bounded(d),
        }
    }
}

impl From<Option<Duration>> for TimeoutPolicy {
    fn from(timeout: Option<Duration>) -> Self {
        Self::from_timeout(timeout)
    }
}

impl From<Duration> for TimeoutPolicy {
    fn from(timeout: Duration) -> Self {
        Self::from_timeout(Some(timeout))
    }
}
