//! Channel error type.

use core::fmt;

/// Errors reported by channel operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelError {
    /// The timeout policy expired before a byte arrived.
    Timeout,
    /// The transport refused a write outright.
    TransportRejected,
    /// Control was issued without a bound channel.
    InvalidHandle,
    /// Unknown or disallowed control operation.
    UnsupportedControl,
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelError::Timeout => write!(f, "channel operation timed out"),
            ChannelError::TransportRejected => write!(f, "transport rejected the write"),
            ChannelError::InvalidHandle => write!(f, "channel handle is not bound"),
            ChannelError::UnsupportedControl => write!(f, "unsupported control operation"),
        }
    }
}

/// Result alias for channel operations.
pub type Result<T> = core::result::Result<T, ChannelError>;
