//! Channel configuration.

use core::time::Duration;

use crate::protocol::DEFAULT_POLL_INTERVAL;
use crate::transport::UpBufferMode;

/// Tunables fixed when a channel is bound to its transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelConfig {
    /// Sleep between probes in unbounded poll loops.
    pub poll_interval: Duration,
    /// Up buffer mode applied to the transport at bind time.
    pub up_buffer_mode: UpBufferMode,
}

impl ChannelConfig {
    /// Default poll interval and skip-on-overflow up buffer.
    pub const fn new() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            up_buffer_mode: UpBufferMode::NoBlockSkip,
        }
    }

    /// Replace the poll interval.
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Replace the up buffer mode.
    pub const fn with_up_buffer_mode(mut self, mode: UpBufferMode) -> Self {
        self.up_buffer_mode = mode;
        self
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self::new()
    }
}
