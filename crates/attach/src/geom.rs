//! Integer geometry primitives shared by the evaluator, chooser, and window adapter.
//!
//! Coordinates are root (screen) coordinates with `y` growing downwards. All
//! divisions truncate toward zero.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::rule::Axis;

/// A point in root coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Construct a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component along `axis`.
    #[inline]
    #[must_use]
    pub const fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Mutable component along `axis`.
    #[inline]
    pub fn get_mut(&mut self, axis: Axis) -> &mut i32 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from(v: (i32, i32)) -> Self {
        Self::new(v.0, v.1)
    }
}

/// A window size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Size {
    /// Construct a size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Extent along `axis`.
    #[inline]
    #[must_use]
    pub const fn extent(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl Rect {
    /// Construct a rectangle from origin and size components.
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Low edge along `axis` (left or top).
    #[inline]
    #[must_use]
    pub const fn origin(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Extent along `axis` (width or height).
    #[inline]
    #[must_use]
    pub const fn extent(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.w,
            Axis::Y => self.h,
        }
    }

    /// High edge along `axis` (right or bottom), exclusive.
    #[inline]
    #[must_use]
    pub const fn end(&self, axis: Axis) -> i32 {
        self.origin(axis) + self.extent(axis)
    }

    /// Centre point, truncating toward zero.
    #[inline]
    #[must_use]
    pub const fn center(&self) -> Point {
        Point {
            x: self.x + self.w / 2,
            y: self.y + self.h / 2,
        }
    }

    /// Size of the rectangle.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        Size {
            width: self.w,
            height: self.h,
        }
    }

    /// Whether `p` lies inside the rectangle (far edges exclusive).
    #[inline]
    #[must_use]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    /// Squared distance from `p` to the nearest point of the rectangle.
    #[must_use]
    pub fn distance_sq(&self, p: Point) -> i64 {
        let dx = axis_gap(p.x, self.x, self.x + self.w);
        let dy = axis_gap(p.y, self.y, self.y + self.h);
        dx * dx + dy * dy
    }
}

/// Distance from `v` to the half-open span `[lo, hi)`; zero inside.
#[inline]
fn axis_gap(v: i32, lo: i32, hi: i32) -> i64 {
    if v < lo {
        i64::from(lo) - i64::from(v)
    } else if v >= hi {
        i64::from(v) - i64::from(hi.max(lo + 1)) + 1
    } else {
        0
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({},{},{},{})", self.x, self.y, self.w, self.h)
    }
}

impl From<(Point, Size)> for Rect {
    fn from(v: (Point, Size)) -> Self {
        let (p, s) = v;
        Self {
            x: p.x,
            y: p.y,
            w: s.width,
            h: s.height,
        }
    }
}

/// Insets on each side of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Border {
    /// Left inset.
    pub left: i32,
    /// Top inset.
    pub top: i32,
    /// Right inset.
    pub right: i32,
    /// Bottom inset.
    pub bottom: i32,
}

impl Border {
    /// No insets.
    pub const ZERO: Self = Self::uniform(0);

    /// Construct a border from explicit sides.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same inset on every side.
    #[must_use]
    pub const fn uniform(v: i32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Inset on the low side of `axis` (left or top).
    #[inline]
    #[must_use]
    pub const fn near(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.left,
            Axis::Y => self.top,
        }
    }

    /// Inset on the high side of `axis` (right or bottom).
    #[inline]
    #[must_use]
    pub const fn far(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.right,
            Axis::Y => self.bottom,
        }
    }
}
