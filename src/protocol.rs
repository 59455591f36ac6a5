//! Channel constants shared with the kernel's channel interface.

use core::time::Duration;

/// Control code reserved as "no operation was requested".
pub const CHN_CTL_INVALID: u32 = 0;
/// Control code for the argument-less no-op.
pub const CHN_CTL_NOP: u32 = 1;

/// Sleep between probes while polling without a deadline.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);
