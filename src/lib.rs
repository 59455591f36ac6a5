#![no_std]

//! Blocking byte channel over a non-blocking RTT debug transport.
//!
//! The transport only offers "whatever fits right now" reads and writes. [`RttChannel`]
//! turns that into stream semantics under a [`TimeoutPolicy`], sleeping on a
//! [`Scheduler`] between probes instead of spinning.

#[cfg(test)]
extern crate std;

mod channel;
mod config;
mod control;
mod error;
mod logger;
mod poll;
mod protocol;
mod scheduler;
mod timeout;
mod transport;
mod writer;

#[cfg(test)]
mod mock;

pub use channel::{Channel, RttChannel};
pub use config::ChannelConfig;
pub use control::{control, ControlArg, ControlOp};
pub use error::{ChannelError, Result};
pub use logger::ChannelLogger;
pub use protocol::{CHN_CTL_INVALID, CHN_CTL_NOP, DEFAULT_POLL_INTERVAL};
pub use scheduler::Scheduler;
pub use timeout::TimeoutPolicy;
pub use transport::{Transport, UpBufferMode};
pub use writer::ChannelWriter;
