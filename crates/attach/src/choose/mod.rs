//! Choosing a window position from the primary and secondary rule lists.
//!
//! Each list is scanned once. Per axis, the first satisfiable rule becomes
//! the list's *best* candidate, and the first rule that did not make it into
//! the best slot becomes the *good* fallback. A primary candidate is then
//! paired with a secondary candidate on the other axis, preferring
//! best/best, then best/good, good/best and good/good.

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    Error, Result,
    eval::evaluate,
    geom::{Point, Rect, Size},
    params::AttachParams,
    rule::{AttachRule, Axis},
};

mod clamp;

#[cfg(test)]
mod deterministic_tests;

use clamp::{ClampOrder, clamp_axis};

/// Final position chosen for a window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Window origin after clamping to the bounds.
    pub position: Point,
    /// Displacement applied by clamping, relative to the rule-derived position.
    pub offset: Point,
    /// Primary rule that fixed one axis.
    pub primary: AttachRule,
    /// Secondary rule that fixed the other axis.
    pub secondary: AttachRule,
}

impl Placement {
    /// Whether clamping moved the window.
    #[must_use]
    pub fn was_clamped(&self) -> bool {
        self.offset != Point::ZERO
    }

    /// The rule governing `axis`.
    #[must_use]
    pub fn rule_for(&self, axis: Axis) -> AttachRule {
        if self.primary.axis == Some(axis) {
            self.primary
        } else {
            self.secondary
        }
    }
}

/// A rule together with the axis value it produced.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    /// The rule as stored in the list.
    rule: AttachRule,
    /// Window origin on the rule's axis.
    value: i32,
}

/// One quality level of a scanned list: at most one candidate per axis.
#[derive(Clone, Copy, Debug, Default)]
struct Tier {
    /// Candidates indexed by [`Axis::index`].
    slots: [Option<Candidate>; 2],
    /// Axis of the first slot filled; tried first when pairing.
    lead: Option<Axis>,
}

impl Tier {
    /// Candidate for `axis`, if any.
    fn get(&self, axis: Axis) -> Option<Candidate> {
        self.slots[axis.index()]
    }

    /// Whether the slot for `axis` is still free.
    fn is_open(&self, axis: Axis) -> bool {
        self.slots[axis.index()].is_none()
    }

    /// Fill the slot for `axis`.
    fn fill(&mut self, axis: Axis, candidate: Candidate) {
        self.slots[axis.index()] = Some(candidate);
        self.lead.get_or_insert(axis);
    }

    /// Whether both axes have a candidate.
    fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

/// Best and fallback candidates of one rule list.
#[derive(Clone, Copy, Debug, Default)]
struct Selection {
    /// First satisfiable rule per axis.
    best: Tier,
    /// First rule per axis not taken as best.
    good: Tier,
}

/// Scan `rules` in order and record candidates.
fn select(
    label: &str,
    rules: &[AttachRule],
    params: &AttachParams,
    size: Size,
    bounds: Option<&Rect>,
) -> Result<Selection> {
    let mut sel = Selection::default();
    for &rule in rules {
        let Some(axis) = rule.axis else {
            warn!(list = label, rule = %rule, bits = rule.bits(), "{}", Error::InvalidAxis(rule));
            continue;
        };
        let eval = evaluate(rule, params, size.width, size.height, bounds)?;
        let candidate = Candidate {
            rule,
            value: eval.value,
        };
        if eval.satisfiable && sel.best.is_open(axis) {
            sel.best.fill(axis, candidate);
            if sel.best.is_full() {
                break;
            }
        } else if sel.good.is_open(axis) {
            sel.good.fill(axis, candidate);
        }
    }
    Ok(sel)
}

/// A non-conflicting pair of candidates.
#[derive(Clone, Copy, Debug)]
struct Pairing {
    /// Candidate from the primary list.
    primary: Candidate,
    /// Candidate from the secondary list, on the other axis.
    secondary: Candidate,
    /// Axis fixed by the primary candidate.
    primary_axis: Axis,
}

/// Find the first pair of primary and secondary candidates on different axes.
fn pair(primary: &Selection, secondary: &Selection) -> Option<Pairing> {
    for p_tier in [&primary.best, &primary.good] {
        let Some(lead) = p_tier.lead else { continue };
        for s_tier in [&secondary.best, &secondary.good] {
            for axis in [lead, lead.other()] {
                if let (Some(p), Some(s)) = (p_tier.get(axis), s_tier.get(axis.other())) {
                    return Some(Pairing {
                        primary: p,
                        secondary: s,
                        primary_axis: axis,
                    });
                }
            }
        }
    }
    None
}

/// Find the best position for a window of `width` × `height` inside `bounds`.
///
/// Returns `Ok(None)` when the rule lists contain no pair of rules on
/// different axes. When `bounds` is given the position is pushed back inside
/// them and the displacement is reported as the placement's offset.
pub fn choose_position(
    params: &AttachParams,
    width: i32,
    height: i32,
    bounds: Option<&Rect>,
) -> Result<Option<Placement>> {
    if !params.has_attach_rect() {
        return Err(Error::MissingAttachRect);
    }
    let size = Size::new(width, height);
    let primary = select("primary", params.primary_rules(), params, size, bounds)?;
    let secondary = select("secondary", params.secondary_rules(), params, size, bounds)?;

    let Some(pairing) = pair(&primary, &secondary) else {
        debug!(
            primary = params.primary_rules().len(),
            secondary = params.secondary_rules().len(),
            "no non-conflicting rule pair"
        );
        return Ok(None);
    };

    let mut position = Point::ZERO;
    *position.get_mut(pairing.primary_axis) = pairing.primary.value;
    *position.get_mut(pairing.primary_axis.other()) = pairing.secondary.value;
    let mut offset = Point::ZERO;

    let placement = |position, offset| Placement {
        position,
        offset,
        primary: pairing.primary.rule,
        secondary: pairing.secondary.rule,
    };

    if let Some(bounds) = bounds {
        let unclamped = placement(position, offset);
        for axis in Axis::ALL {
            let order = if params.is_right_to_left() && unclamped.rule_for(axis).flip_if_rtl {
                ClampOrder::LowFirst
            } else {
                ClampOrder::HighFirst
            };
            clamp_axis(&mut position, &mut offset, size, bounds, axis, order);
        }
    }

    let chosen = placement(position, offset);
    debug!(
        primary = %chosen.primary,
        secondary = %chosen.secondary,
        position = %chosen.position,
        offset = %chosen.offset,
        "chose position"
    );
    Ok(Some(chosen))
}
