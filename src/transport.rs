//! Transport abstraction for the debug-probe link beneath a channel.

/// How the up (target to host) buffer behaves when the host is not draining it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UpBufferMode {
    /// Drop the whole write if it does not fit.
    #[default]
    NoBlockSkip,
    /// Write as much as fits and drop the rest.
    NoBlockTrim,
    /// Stall the caller until the host makes room.
    BlockIfFull,
}

/// Non-blocking, best-effort byte link.
///
/// Every call returns immediately with whatever could be transferred right now.
pub trait Transport: Send + Sync {
    /// Queue up to `buf.len()` bytes, returning how many were accepted.
    fn write(&self, buf: &[u8]) -> usize;

    /// Copy up to `buf.len()` already-available bytes into `buf`, returning the count.
    fn read(&self, buf: &mut [u8]) -> usize;

    /// Take one pending input byte, if any.
    fn read_key(&self) -> Option<u8>;

    /// Set the up buffer mode. Called once, when the channel is bound.
    fn configure(&self, mode: UpBufferMode);
}
