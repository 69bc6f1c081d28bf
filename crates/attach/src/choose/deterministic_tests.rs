use super::{Placement, choose_position};
use crate::{
    Error,
    geom::{Point, Rect},
    params::AttachParams,
    rule::{Anchor, AttachRule, Axis},
};

const BELOW: AttachRule = AttachRule::y(Anchor::Max, Anchor::Min);
const ABOVE: AttachRule = AttachRule::y(Anchor::Min, Anchor::Max);
const CENTRED_X: AttachRule = AttachRule::x(Anchor::Mid, Anchor::Mid);
const START_X: AttachRule = AttachRule::x(Anchor::Min, Anchor::Min);
const END_X: AttachRule = AttachRule::x(Anchor::Max, Anchor::Max);

fn params(rect: Rect, primary: &[AttachRule], secondary: &[AttachRule]) -> AttachParams {
    let mut p = AttachParams::new();
    p.set_attach_rect(Some(rect))
        .add_primary_rules(primary.iter().copied())
        .add_secondary_rules(secondary.iter().copied());
    p
}

fn chosen(p: &AttachParams, w: i32, h: i32, bounds: Option<&Rect>) -> Placement {
    choose_position(p, w, h, bounds)
        .expect("choose")
        .expect("a rule pair should exist")
}

#[test]
fn dropdown_below_centred_without_bounds() {
    let p = params(Rect::new(100, 100, 50, 20), &[BELOW], &[CENTRED_X]);
    let got = chosen(&p, 40, 30, None);
    assert_eq!(
        got,
        Placement {
            position: Point::new(105, 120),
            offset: Point::ZERO,
            primary: BELOW,
            secondary: CENTRED_X,
        }
    );
    assert!(!got.was_clamped());
}

#[test]
fn missing_rect_fails_fast() {
    let mut p = AttachParams::new();
    p.add_primary_rules([BELOW]).add_secondary_rules([CENTRED_X]);
    assert_eq!(
        choose_position(&p, 10, 10, None),
        Err(Error::MissingAttachRect)
    );
}

#[test]
fn empty_lists_have_no_pair() {
    let p = params(Rect::new(0, 0, 10, 10), &[], &[]);
    assert_eq!(choose_position(&p, 10, 10, None), Ok(None));
}

#[test]
fn same_axis_lists_have_no_pair() {
    let p = params(Rect::new(0, 0, 10, 10), &[BELOW, ABOVE], &[BELOW]);
    assert_eq!(choose_position(&p, 10, 10, None), Ok(None));
}

#[test]
fn earlier_satisfiable_rule_wins() {
    let p = params(Rect::new(100, 100, 50, 20), &[ABOVE, BELOW], &[CENTRED_X]);
    let got = chosen(&p, 40, 30, Some(&Rect::new(0, 0, 800, 600)));
    assert_eq!(got.primary, ABOVE);
    assert_eq!(got.position, Point::new(105, 70));
}

#[test]
fn satisfiable_rule_beats_earlier_unsatisfiable_one() {
    let p = params(Rect::new(100, 100, 50, 20), &[BELOW, ABOVE], &[CENTRED_X]);
    let bounds = Rect::new(0, 0, 200, 110);
    let got = chosen(&p, 40, 30, Some(&bounds));
    assert_eq!(got.primary, ABOVE);
    assert_eq!(got.position, Point::new(105, 70));
    assert_eq!(got.offset, Point::ZERO);
}

#[test]
fn earliest_rule_is_fallback_when_nothing_fits() {
    let p = params(Rect::new(100, 100, 50, 20), &[BELOW, ABOVE], &[CENTRED_X]);
    let bounds = Rect::new(0, 0, 200, 90);
    let got = chosen(&p, 40, 30, Some(&bounds));
    assert_eq!(got.primary, BELOW);
    assert_eq!(got.secondary, CENTRED_X);
    assert_eq!(got.position, Point::new(105, 60));
    assert_eq!(got.offset, Point::new(0, -60));
}

#[test]
fn invalid_rule_is_skipped() {
    let garbage = AttachRule {
        axis: None,
        ..BELOW
    };
    let mut rules = vec![garbage];
    rules.extend([
        AttachRule::y(Anchor::Max, Anchor::Min),
        AttachRule::y(Anchor::Min, Anchor::Max),
        AttachRule::y(Anchor::Mid, Anchor::Mid),
        AttachRule::y(Anchor::Min, Anchor::Min),
        AttachRule::y(Anchor::Max, Anchor::Max),
        AttachRule::x(Anchor::Max, Anchor::Min),
        AttachRule::x(Anchor::Min, Anchor::Max),
        AttachRule::x(Anchor::Mid, Anchor::Mid),
        AttachRule::x(Anchor::Min, Anchor::Min),
    ]);
    let with = params(Rect::new(100, 100, 50, 20), &rules, &[CENTRED_X, BELOW]);
    let without = params(Rect::new(100, 100, 50, 20), &rules[1..], &[CENTRED_X, BELOW]);
    let bounds = Rect::new(0, 0, 300, 140);
    assert_eq!(
        chosen(&with, 40, 30, Some(&bounds)),
        chosen(&without, 40, 30, Some(&bounds))
    );
}

#[test]
fn secondary_takes_the_complementary_axis() {
    let p = params(
        Rect::new(100, 100, 50, 20),
        &[BELOW],
        &[AttachRule::y(Anchor::Mid, Anchor::Mid), START_X],
    );
    let got = chosen(&p, 40, 30, None);
    assert_eq!(got.primary, BELOW);
    assert_eq!(got.secondary, START_X);
    assert_eq!(got.position, Point::new(100, 120));
}

#[test]
fn primary_prefers_its_leading_axis() {
    let x_first = params(Rect::new(100, 100, 50, 20), &[START_X, BELOW], &[ABOVE, END_X]);
    let got = chosen(&x_first, 40, 30, None);
    assert_eq!(got.primary, START_X);
    assert_eq!(got.secondary, ABOVE);
    assert_eq!(got.position, Point::new(100, 70));

    let y_first = params(Rect::new(100, 100, 50, 20), &[BELOW, START_X], &[ABOVE, END_X]);
    let got = chosen(&y_first, 40, 30, None);
    assert_eq!(got.primary, BELOW);
    assert_eq!(got.secondary, END_X);
    assert_eq!(got.position, Point::new(110, 120));
}

#[test]
fn clamps_from_the_low_edge() {
    let p = params(Rect::new(-50, 100, 50, 20), &[BELOW], &[START_X]);
    let bounds = Rect::new(0, 0, 800, 600);
    let got = chosen(&p, 100, 30, Some(&bounds));
    assert_eq!(got.position.x, 0);
    assert_eq!(got.offset.x, 50);
    assert_eq!(got.offset.y, 0);
}

#[test]
fn clamps_from_the_high_edge() {
    let p = params(Rect::new(750, 100, 50, 20), &[BELOW], &[START_X]);
    let bounds = Rect::new(0, 0, 800, 600);
    let got = chosen(&p, 100, 30, Some(&bounds));
    assert_eq!(got.position.x, 700);
    assert_eq!(got.offset.x, -50);
}

#[test]
fn oversized_window_sticks_to_the_low_edge() {
    let p = params(Rect::new(100, 100, 50, 20), &[BELOW], &[START_X]);
    let bounds = Rect::new(0, 0, 800, 600);
    let got = chosen(&p, 1000, 30, Some(&bounds));
    assert_eq!(got.position.x, 0);
    assert_eq!(got.offset.x, -100);
}

#[test]
fn oversized_flipped_window_sticks_to_the_high_edge_under_rtl() {
    let mut p = params(Rect::new(100, 100, 50, 20), &[BELOW], &[START_X.flip_if_rtl()]);
    p.set_right_to_left(true);
    let bounds = Rect::new(0, 0, 800, 600);
    let got = chosen(&p, 1000, 30, Some(&bounds));
    // mirrored rule puts the window's right edge on the rect's right edge: x = -850
    assert_eq!(got.position.x, -200);
    assert_eq!(got.offset.x, 650);
}

#[test]
fn rtl_menu_opens_towards_the_left() {
    let mut p = params(
        Rect::new(300, 100, 50, 20),
        &[BELOW, ABOVE],
        &[START_X.flip_if_rtl(), END_X.flip_if_rtl()],
    );
    let bounds = Rect::new(0, 0, 800, 600);
    let ltr = chosen(&p, 120, 30, Some(&bounds));
    assert_eq!(ltr.position, Point::new(300, 120));
    p.set_right_to_left(true);
    let rtl = chosen(&p, 120, 30, Some(&bounds));
    assert_eq!(rtl.position, Point::new(230, 120));
    // the stored rule is reported, not its mirror
    assert_eq!(rtl.secondary, START_X.flip_if_rtl());
}

#[test]
fn rule_for_reports_the_governing_rule() {
    let p = params(Rect::new(100, 100, 50, 20), &[BELOW], &[CENTRED_X]);
    let got = chosen(&p, 40, 30, None);
    assert_eq!(got.rule_for(Axis::Y), BELOW);
    assert_eq!(got.rule_for(Axis::X), CENTRED_X);
}

#[test]
fn copy_keeps_rule_order_after_original_is_dropped() {
    let primary = [BELOW, ABOVE, AttachRule::y(Anchor::Mid, Anchor::Mid)];
    let secondary = [START_X, END_X];
    let original = params(Rect::new(0, 0, 10, 10), &primary, &secondary);
    let copy = original.clone();
    drop(original);
    assert_eq!(copy.primary_rules(), &primary);
    assert_eq!(copy.secondary_rules(), &secondary);
}
