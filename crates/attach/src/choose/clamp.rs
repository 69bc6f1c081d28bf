use crate::{
    geom::{Point, Rect, Size},
    rule::Axis,
};

/// Which bound is tested first when pushing a window back on-screen.
///
/// The second test wins when the window is larger than the bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ClampOrder {
    /// Test the low edge, then the high edge; oversized windows hug the high edge.
    LowFirst,
    /// Test the high edge, then the low edge; oversized windows hug the low edge.
    HighFirst,
}

/// Push `position` inside `bounds` on `axis`, accumulating the displacement
/// into `offset`.
pub(super) fn clamp_axis(
    position: &mut Point,
    offset: &mut Point,
    size: Size,
    bounds: &Rect,
    axis: Axis,
    order: ClampOrder,
) {
    let lo = bounds.origin(axis);
    let hi = bounds.end(axis) - size.extent(axis);
    let pos = position.get_mut(axis);
    let off = offset.get_mut(axis);
    match order {
        ClampOrder::LowFirst => {
            push_up_to(pos, off, lo);
            push_down_to(pos, off, hi);
        }
        ClampOrder::HighFirst => {
            push_down_to(pos, off, hi);
            push_up_to(pos, off, lo);
        }
    }
}

/// Raise `pos` to at least `lo`.
#[inline]
fn push_up_to(pos: &mut i32, off: &mut i32, lo: i32) {
    if *pos < lo {
        *off += lo - *pos;
        *pos = lo;
    }
}

/// Lower `pos` to at most `hi`.
#[inline]
fn push_down_to(pos: &mut i32, off: &mut i32, hi: i32) {
    if *pos > hi {
        *off += hi - *pos;
        *pos = hi;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clamp_x(x: i32, width: i32, order: ClampOrder) -> (i32, i32) {
        let mut position = Point::new(x, 0);
        let mut offset = Point::ZERO;
        let bounds = Rect::new(0, 0, 800, 600);
        clamp_axis(
            &mut position,
            &mut offset,
            Size::new(width, 10),
            &bounds,
            Axis::X,
            order,
        );
        (position.x, offset.x)
    }

    #[test]
    fn pushes_in_from_the_low_edge() {
        assert_eq!(clamp_x(-50, 100, ClampOrder::HighFirst), (0, 50));
        assert_eq!(clamp_x(-50, 100, ClampOrder::LowFirst), (0, 50));
    }

    #[test]
    fn pushes_in_from_the_high_edge() {
        assert_eq!(clamp_x(750, 100, ClampOrder::HighFirst), (700, -50));
        assert_eq!(clamp_x(750, 100, ClampOrder::LowFirst), (700, -50));
    }

    #[test]
    fn inside_is_untouched() {
        assert_eq!(clamp_x(300, 100, ClampOrder::HighFirst), (300, 0));
    }

    #[test]
    fn oversized_window_follows_the_last_test() {
        assert_eq!(clamp_x(50, 1000, ClampOrder::HighFirst), (0, -50));
        assert_eq!(clamp_x(50, 1000, ClampOrder::LowFirst), (-200, -250));
    }
}
