//! Positioning rules.
//!
//! A rule constrains the window on one axis: it names a point of the
//! attachment rectangle and a point of the window, and asks for the two to
//! coincide. Rules can be exchanged with other processes through their packed
//! bit form, see [`AttachRule::bits`] and [`AttachRule::from_bits`].

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Packed bit layout of a rule.
pub mod bits {
    /// Constrain horizontally.
    pub const AXIS_X: u8 = 0x01;
    /// Constrain vertically.
    pub const AXIS_Y: u8 = 0x02;
    /// Mask for the constraint axis.
    pub const AXIS_MASK: u8 = 0x03;
    /// Left/top edge of the rectangle.
    pub const RECT_MIN: u8 = 0x04;
    /// Centre of the rectangle.
    pub const RECT_MID: u8 = 0x08;
    /// Right/bottom edge of the rectangle.
    pub const RECT_MAX: u8 = 0x0C;
    /// Mask for the rectangle anchor.
    pub const RECT_MASK: u8 = 0x0C;
    /// Left/top edge of the window.
    pub const WINDOW_MIN: u8 = 0x10;
    /// Centre of the window.
    pub const WINDOW_MID: u8 = 0x20;
    /// Right/bottom edge of the window.
    pub const WINDOW_MAX: u8 = 0x30;
    /// Mask for the window anchor.
    pub const WINDOW_MASK: u8 = 0x30;
    /// Swap min and max if text is right-to-left.
    pub const FLIP_IF_RTL: u8 = 0x40;
    /// Every bit with a defined meaning.
    pub const ALL: u8 = AXIS_MASK | RECT_MASK | WINDOW_MASK | FLIP_IF_RTL;
}

/// Axis constrained by a rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    /// Both axes, X first.
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    /// The orthogonal axis.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Slot index used by per-axis tables.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

/// A point along one axis of a rectangle or window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    /// Left or top edge.
    Min,
    /// Centre.
    Mid,
    /// Right or bottom edge.
    Max,
}

impl Anchor {
    /// Swap `Min` and `Max`; `Mid` is its own mirror.
    #[inline]
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Min => Self::Max,
            Self::Mid => Self::Mid,
            Self::Max => Self::Min,
        }
    }
}

impl Display for Anchor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Min => "min",
            Self::Mid => "mid",
            Self::Max => "max",
        })
    }
}

/// A single positioning constraint.
///
/// `axis` is `None` for rules that arrived without exactly one axis bit.
/// Such rules are kept as data but rejected by the evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttachRule {
    /// Constrained axis.
    pub axis: Option<Axis>,
    /// Point of the attachment rectangle.
    pub rect: Anchor,
    /// Point of the window aligned to `rect`.
    pub window: Anchor,
    /// Mirror both anchors when the text direction is right-to-left.
    #[serde(default)]
    pub flip_if_rtl: bool,
}

impl AttachRule {
    /// Rule aligning `window` to `rect` along `axis`.
    #[must_use]
    pub const fn new(axis: Axis, rect: Anchor, window: Anchor) -> Self {
        Self {
            axis: Some(axis),
            rect,
            window,
            flip_if_rtl: false,
        }
    }

    /// Horizontal rule.
    #[must_use]
    pub const fn x(rect: Anchor, window: Anchor) -> Self {
        Self::new(Axis::X, rect, window)
    }

    /// Vertical rule.
    #[must_use]
    pub const fn y(rect: Anchor, window: Anchor) -> Self {
        Self::new(Axis::Y, rect, window)
    }

    /// Same rule, mirrored under right-to-left text.
    #[must_use]
    pub const fn flip_if_rtl(mut self) -> Self {
        self.flip_if_rtl = true;
        self
    }

    /// Rule with `Min`/`Max` swapped on both anchors.
    ///
    /// The flip flag is cleared: a mirrored rule is already in its
    /// right-to-left form.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self {
            axis: self.axis,
            rect: self.rect.mirrored(),
            window: self.window.mirrored(),
            flip_if_rtl: false,
        }
    }

    /// Whether the window sits outside the rectangle on this axis, i.e. its
    /// far edge meets the rectangle's near edge or the other way round.
    #[inline]
    #[must_use]
    pub const fn is_outside(&self) -> bool {
        matches!(
            (self.rect, self.window),
            (Anchor::Min, Anchor::Max) | (Anchor::Max, Anchor::Min)
        )
    }

    /// Packed bit form.
    #[must_use]
    pub const fn bits(&self) -> u8 {
        let axis = match self.axis {
            Some(Axis::X) => bits::AXIS_X,
            Some(Axis::Y) => bits::AXIS_Y,
            None => 0,
        };
        let rect = match self.rect {
            Anchor::Min => bits::RECT_MIN,
            Anchor::Mid => bits::RECT_MID,
            Anchor::Max => bits::RECT_MAX,
        };
        let window = match self.window {
            Anchor::Min => bits::WINDOW_MIN,
            Anchor::Mid => bits::WINDOW_MID,
            Anchor::Max => bits::WINDOW_MAX,
        };
        let flip = if self.flip_if_rtl { bits::FLIP_IF_RTL } else { 0 };
        axis | rect | window | flip
    }

    /// Decode a packed rule.
    ///
    /// Axis fields of `0` or `AXIS_X | AXIS_Y` decode to `axis: None`. Unknown
    /// bits and empty anchor fields are rejected.
    pub fn from_bits(raw: u8) -> Result<Self> {
        if raw & !bits::ALL != 0 {
            return Err(Error::InvalidRuleBits(raw));
        }
        let axis = match raw & bits::AXIS_MASK {
            bits::AXIS_X => Some(Axis::X),
            bits::AXIS_Y => Some(Axis::Y),
            _ => None,
        };
        let rect = match raw & bits::RECT_MASK {
            bits::RECT_MIN => Anchor::Min,
            bits::RECT_MID => Anchor::Mid,
            bits::RECT_MAX => Anchor::Max,
            _ => return Err(Error::InvalidRuleBits(raw)),
        };
        let window = match raw & bits::WINDOW_MASK {
            bits::WINDOW_MIN => Anchor::Min,
            bits::WINDOW_MID => Anchor::Mid,
            bits::WINDOW_MAX => Anchor::Max,
            _ => return Err(Error::InvalidRuleBits(raw)),
        };
        Ok(Self {
            axis,
            rect,
            window,
            flip_if_rtl: raw & bits::FLIP_IF_RTL != 0,
        })
    }
}

impl TryFrom<u8> for AttachRule {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self> {
        Self::from_bits(raw)
    }
}

impl From<AttachRule> for u8 {
    fn from(rule: AttachRule) -> Self {
        rule.bits()
    }
}

impl Display for AttachRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.axis {
            Some(axis) => write!(f, "{axis}")?,
            None => f.write_str("invalid-axis")?,
        }
        write!(f, " rect={} window={}", self.rect, self.window)?;
        if self.flip_if_rtl {
            f.write_str(" flip-rtl")?;
        }
        Ok(())
    }
}
