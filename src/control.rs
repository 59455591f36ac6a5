//! Control operations and their dispatch entry point.

use core::any::Any;

use crate::channel::Channel;
use crate::error::{ChannelError, Result};
use crate::protocol::{CHN_CTL_INVALID, CHN_CTL_NOP};

/// Optional argument carried by a control request.
pub type ControlArg<'a> = Option<&'a mut dyn Any>;

/// A channel control operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlOp {
    /// Explicitly invalid; always rejected.
    Invalid,
    /// Does nothing. Takes no argument.
    Nop,
    /// Any code this channel does not know.
    Other(u32),
}

impl ControlOp {
    /// Numeric code of the operation.
    pub const fn code(self) -> u32 {
        match self {
            ControlOp::Invalid => CHN_CTL_INVALID,
            ControlOp::Nop => CHN_CTL_NOP,
            ControlOp::Other(code) => code,
        }
    }
}

impl From<u32> for ControlOp {
    fn from(code: u32) -> Self {
        match code {
            CHN_CTL_INVALID => ControlOp::Invalid,
            CHN_CTL_NOP => ControlOp::Nop,
            other => ControlOp::Other(other),
        }
    }
}

/// Issue `op` on `channel`, failing fast when no channel is bound.
pub fn control<C: Channel + ?Sized>(
    channel: Option<&C>,
    op: ControlOp,
    arg: ControlArg<'_>,
) -> Result<()> {
    match channel {
        Some(channel) => channel.control(op, arg),
        None => Err(ChannelError::InvalidHandle),
    }
}
