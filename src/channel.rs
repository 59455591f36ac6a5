//! The channel interface and its RTT-backed adapter.

use core::fmt;
use core::sync::atomic::AtomicBool;

use log::{debug, trace, warn};

use crate::config::ChannelConfig;
use crate::control::{ControlArg, ControlOp};
use crate::error::{ChannelError, Result};
use crate::poll::Poller;
use crate::scheduler::Scheduler;
use crate::timeout::TimeoutPolicy;
use crate::transport::Transport;
use crate::writer::ChannelWriter;

/// Uniform stream interface exposed to loggers and consoles.
///
/// Single-byte operations report failure through [`ChannelError`]. Bulk operations
/// never fail; they return the number of bytes moved and leave the caller to
/// decide whether that was enough.
pub trait Channel: Send + Sync {
    /// Bulk write without a timeout.
    fn write(&self, buf: &[u8]) -> usize;

    /// Fill `buf` completely, waiting as long as it takes.
    fn read(&self, buf: &mut [u8]) -> usize {
        self.read_timeout(buf, TimeoutPolicy::Infinite)
    }

    /// Write one byte.
    fn put(&self, byte: u8) -> Result<()>;

    /// Read one byte, waiting as long as it takes.
    fn get(&self) -> Result<u8> {
        self.get_timeout(TimeoutPolicy::Infinite)
    }

    /// Bulk write under `policy`.
    fn write_timeout(&self, buf: &[u8], policy: TimeoutPolicy) -> usize;

    /// Bulk read under `policy`; may return fewer than `buf.len()` bytes unless `Infinite`.
    fn read_timeout(&self, buf: &mut [u8], policy: TimeoutPolicy) -> usize;

    /// Write one byte under `policy`.
    fn put_timeout(&self, byte: u8, policy: TimeoutPolicy) -> Result<()>;

    /// Read one byte, or [`ChannelError::Timeout`] once `policy` gives up.
    fn get_timeout(&self, policy: TimeoutPolicy) -> Result<u8>;

    /// Perform a control operation.
    fn control(&self, op: ControlOp, arg: ControlArg<'_>) -> Result<()>;
}

/// Blocking channel on top of a non-blocking RTT link.
///
/// Holds no buffers of its own: every operation goes straight to the transport,
/// sleeping on the scheduler between probes.
pub struct RttChannel<'a> {
    transport: &'a dyn Transport,
    scheduler: &'a dyn Scheduler,
    config: ChannelConfig,
}

impl<'a> RttChannel<'a> {
    /// Bind a channel to `transport` with the default configuration.
    pub fn new(transport: &'a dyn Transport, scheduler: &'a dyn Scheduler) -> Self {
        Self::with_config(transport, scheduler, ChannelConfig::default())
    }

    /// Bind a channel to `transport`, applying `config.up_buffer_mode` to it.
    pub fn with_config(
        transport: &'a dyn Transport,
        scheduler: &'a dyn Scheduler,
        config: ChannelConfig,
    ) -> Self {
        transport.configure(config.up_buffer_mode);
        debug!(
            "rtt channel bound (mode={:?}, poll={:?})",
            config.up_buffer_mode, config.poll_interval
        );
        Self {
            transport,
            scheduler,
            config,
        }
    }

    /// Configuration fixed at bind time.
    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    /// Like [`Channel::read`], but gives up with a partial count once `cancel` is set.
    pub fn read_cancellable(&self, buf: &mut [u8], cancel: &AtomicBool) -> usize {
        let poller = self.poller().cancel_on(cancel);
        self.accumulate(&poller, buf, TimeoutPolicy::Infinite)
    }

    fn poller(&self) -> Poller<'a> {
        Poller::new(self.scheduler, self.config.poll_interval)
    }

    fn accumulate(&self, poller: &Poller<'_>, buf: &mut [u8], policy: TimeoutPolicy) -> usize {
        let len = buf.len();
        let mut filled = 0;
        poller.run(policy, || {
            if filled < len {
                let got = self.transport.read(&mut buf[filled..]);
                filled += got.min(len - filled);
            }
            filled == len
        });
        filled
    }
}

impl Channel for RttChannel<'_> {
    fn write(&self, buf: &[u8]) -> usize {
        self.transport.write(buf)
    }

    fn put(&self, byte: u8) -> Result<()> {
        if self.transport.write(&[byte]) == 1 {
            Ok(())
        } else {
            Err(ChannelError::TransportRejected)
        }
    }

    // Single transport call whatever the policy.
    fn write_timeout(&self, buf: &[u8], _policy: TimeoutPolicy) -> usize {
        self.write(buf)
    }

    fn read_timeout(&self, buf: &mut [u8], policy: TimeoutPolicy) -> usize {
        self.accumulate(&self.poller(), buf, policy)
    }

    fn put_timeout(&self, byte: u8, _policy: TimeoutPolicy) -> Result<()> {
        self.put(byte)
    }

    fn get_timeout(&self, policy: TimeoutPolicy) -> Result<u8> {
        let mut key = None;
        self.poller().run(policy, || {
            key = self.transport.read_key();
            key.is_some()
        });
        key.ok_or_else(|| {
            trace!("rtt get timed out ({:?})", policy);
            ChannelError::Timeout
        })
    }

    fn control(&self, op: ControlOp, arg: ControlArg<'_>) -> Result<()> {
        match op {
            ControlOp::Nop => {
                debug_assert!(arg.is_none(), "nop control takes no argument");
                if arg.is_some() {
                    warn!("nop control called with an argument");
                    return Err(ChannelError::UnsupportedControl);
                }
                Ok(())
            }
            ControlOp::Invalid | ControlOp::Other(_) => {
                warn!("unsupported control operation: {}", op.code());
                Err(ChannelError::UnsupportedControl)
            }
        }
    }
}

impl fmt::Write for RttChannel<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        fmt::Write::write_str(&mut ChannelWriter::new(&*self), s)
    }
}

impl fmt::Write for &RttChannel<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        fmt::Write::write_str(&mut ChannelWriter::new(*self), s)
    }
}
