//! `log` sink that prints records over a channel.

use core::fmt::{self, Write};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::channel::Channel;

/// Writes each record as `[LEVEL] target: message` on its own line.
///
/// Output goes through bulk writes. Pieces the transport cannot take are dropped
/// and the rest of the line, newline included, is still sent.
pub struct ChannelLogger<'a> {
    channel: &'a dyn Channel,
    level: LevelFilter,
}

impl<'a> ChannelLogger<'a> {
    /// Log records at or above `level` to `channel`.
    pub const fn new(channel: &'a dyn Channel, level: LevelFilter) -> Self {
        Self { channel, level }
    }
}

impl ChannelLogger<'static> {
    /// Register as the global logger and raise the max level to match.
    pub fn install(&'static self) -> Result<(), SetLoggerError> {
        log::set_logger(self)?;
        log::set_max_level(self.level);
        Ok(())
    }
}

impl Log for ChannelLogger<'_> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut out = RecordWriter(self.channel);
        let _ = writeln!(out, "[{}] {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

// Never fails, so a dropped piece cannot cut a record short.
struct RecordWriter<'a>(&'a dyn Channel);

impl fmt::Write for RecordWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write(s.as_bytes());
        Ok(())
    }
}
