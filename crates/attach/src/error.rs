use std::result;

use thiserror::Error;

use crate::{rule::AttachRule, window::WindowId};

/// Errors produced while evaluating rules or positioning windows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Positioning was requested before an attachment rectangle was set.
    /// Callers must check [`AttachParams::has_attach_rect`](crate::AttachParams::has_attach_rect) first.
    #[error("attach params have no attachment rectangle")]
    MissingAttachRect,

    /// The rule does not constrain exactly one axis.
    #[error("invalid constraint axis: {0} (0x{bits:02X})", bits = .0.bits())]
    InvalidAxis(AttachRule),

    /// A packed rule value contains unknown bits or an empty anchor field.
    #[error("invalid rule bits: 0x{0:02X}")]
    InvalidRuleBits(u8),

    /// The window backend does not know the window.
    #[error("unknown window: {0}")]
    UnknownWindow(WindowId),
}

/// Result alias for positioning operations.
pub type Result<T> = result::Result<T, Error>;
