//! `core::fmt::Write` bridge over a channel's bulk write.

use core::fmt;

use crate::channel::Channel;

/// Formats text straight into a channel.
///
/// Each fragment goes out as one bulk write. A fragment the transport drops
/// entirely is reported as [`fmt::Error`]; a partially accepted one is not.
pub struct ChannelWriter<'a, C: Channel + ?Sized> {
    channel: &'a C,
}

impl<'a, C: Channel + ?Sized> ChannelWriter<'a, C> {
    /// Wrap `channel` for use with `write!`.
    pub fn new(channel: &'a C) -> Self {
        Self { channel }
    }
}

impl<C: Channel + ?Sized> fmt::Write for ChannelWriter<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if s.is_empty() || self.channel.write(s.as_bytes()) > 0 {
            Ok(())
        } else {
            Err(fmt::Error)
        }
    }
}
