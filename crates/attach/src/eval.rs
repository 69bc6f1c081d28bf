//! Rule satisfiability.

use tracing::trace;

use crate::{
    Error, Result,
    geom::{Rect, Size},
    params::AttachParams,
    rule::{Anchor, AttachRule},
};

/// Outcome of evaluating a single rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Window origin on the rule's axis.
    pub value: i32,
    /// Whether the window fits inside the bounds at `value`.
    pub satisfiable: bool,
}

/// Compute where `rule` would put a window of the given size and whether
/// that position keeps the window inside `bounds`.
///
/// The value is computed even when the rule is unsatisfiable; the chooser
/// falls back to such values when nothing fits. Without `bounds` every rule
/// is satisfiable.
pub fn evaluate(
    rule: AttachRule,
    params: &AttachParams,
    width: i32,
    height: i32,
    bounds: Option<&Rect>,
) -> Result<Evaluation> {
    let attach_rect = params.attach_rect().ok_or(Error::MissingAttachRect)?;
    let axis = rule.axis.ok_or(Error::InvalidAxis(rule))?;

    let effective = if params.is_right_to_left() && rule.flip_if_rtl {
        rule.mirrored()
    } else {
        rule
    };

    let use_rect_margin = effective.is_outside();
    let use_window_margin = use_rect_margin;
    let use_window_padding = true;

    let attach_margin = params.attach_margin();
    let window_margin = params.window_margin();
    let size = Size::new(width, height).extent(axis);

    let mut value = params.attach_origin().get(axis) + attach_rect.origin(axis);
    match effective.rect {
        Anchor::Min => {
            if use_rect_margin {
                value -= attach_margin.near(axis);
            }
        }
        Anchor::Mid => value += attach_rect.extent(axis) / 2,
        Anchor::Max => {
            value += attach_rect.extent(axis);
            if use_rect_margin {
                value += attach_margin.far(axis);
            }
        }
    }

    // The padding term reads the window margin, so margin and padding cancel
    // for outside anchors and only the padding shift remains otherwise.
    match effective.window {
        Anchor::Min => {
            if use_window_margin {
                value += window_margin.near(axis);
            }
            if use_window_padding {
                value -= window_margin.near(axis);
            }
        }
        Anchor::Mid => value -= size / 2,
        Anchor::Max => {
            value -= size;
            if use_window_margin {
                value -= window_margin.far(axis);
            }
            if use_window_padding {
                value += window_margin.far(axis);
            }
        }
    }

    value += params.window_offset().get(axis);

    let satisfiable = bounds
        .is_none_or(|b| b.origin(axis) <= value && value + size <= b.origin(axis) + b.extent(axis));
    trace!(rule = %rule, %axis, value, satisfiable, "evaluated rule");
    Ok(Evaluation { value, satisfiable })
}
