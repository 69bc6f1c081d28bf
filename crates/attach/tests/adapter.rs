use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use attach::{
    Anchor, AttachParams, AttachRule, Error, Monitor, Point, PositionCallback, PositionReport,
    Rect, Size, VirtualScreen, WindowBackend, choose_position_for_window,
    move_using_attach_params,
};
use parking_lot::Mutex;

const BELOW: AttachRule = AttachRule::y(Anchor::Max, Anchor::Min);
const ABOVE: AttachRule = AttachRule::y(Anchor::Min, Anchor::Max);
const CENTRED_X: AttachRule = AttachRule::x(Anchor::Mid, Anchor::Mid);

fn dual_screen() -> VirtualScreen {
    VirtualScreen::new([
        Monitor::new(Rect::new(0, 0, 1000, 800)).with_work_area(Rect::new(0, 30, 1000, 770)),
        Monitor::new(Rect::new(1000, 0, 600, 400)),
    ])
}

fn dropdown(rect: Rect) -> AttachParams {
    let mut p = AttachParams::new();
    p.set_attach_rect(Some(rect))
        .add_primary_rules([BELOW, ABOVE])
        .add_secondary_rules([CENTRED_X]);
    p
}

#[test]
fn moves_window_and_reports_once() {
    let screen = dual_screen();
    let win = screen.add_window(Size::new(40, 30), Point::ZERO);
    let reports = Arc::new(Mutex::new(Vec::<PositionReport>::new()));

    let mut params = dropdown(Rect::new(100, 100, 50, 20));
    let sink = reports.clone();
    params.set_position_callback(Some(PositionCallback::new(move |_, report| {
        sink.lock().push(*report);
    })));

    let placement = move_using_attach_params(&screen, win, Some(&params))
        .expect("move")
        .expect("placement");
    assert_eq!(placement.position, Point::new(105, 120));
    assert_eq!(screen.position(win), Some(Point::new(105, 120)));
    assert_eq!(screen.moves(), vec![(win, Point::new(105, 120))]);

    let got = reports.lock().clone();
    assert_eq!(
        got,
        vec![PositionReport {
            window: win,
            position: Point::new(105, 120),
            offset: Point::ZERO,
            primary: BELOW,
            secondary: CENTRED_X,
        }]
    );
}

#[test]
fn absent_params_or_rect_is_a_no_op() {
    let screen = dual_screen();
    let win = screen.add_window(Size::new(40, 30), Point::new(7, 7));
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let mut params = AttachParams::new();
    params
        .add_primary_rules([BELOW])
        .add_secondary_rules([CENTRED_X])
        .set_position_callback(Some(PositionCallback::new(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        })));

    assert_eq!(move_using_attach_params(&screen, win, None), Ok(None));
    assert_eq!(move_using_attach_params(&screen, win, Some(&params)), Ok(None));
    assert!(screen.moves().is_empty());
    assert_eq!(screen.position(win), Some(Point::new(7, 7)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn no_rule_pair_leaves_window_in_place() {
    let screen = dual_screen();
    let win = screen.add_window(Size::new(40, 30), Point::new(7, 7));
    let mut params = AttachParams::new();
    params
        .set_attach_rect(Some(Rect::new(100, 100, 50, 20)))
        .add_primary_rules([BELOW])
        .add_secondary_rules([ABOVE]);
    assert_eq!(move_using_attach_params(&screen, win, Some(&params)), Ok(None));
    assert!(screen.moves().is_empty());
}

#[test]
fn bounds_come_from_the_monitor_under_the_rect_centre() {
    let screen = dual_screen();
    let win = screen.add_window(Size::new(100, 50), Point::ZERO);

    // Centre (1575, 370) is on the second monitor. There is no room below,
    // and the centred window overhangs the monitor's right edge.
    let params = dropdown(Rect::new(1550, 360, 50, 20));
    let placement = choose_position_for_window(&params, &screen, win)
        .expect("choose")
        .expect("placement");
    assert_eq!(placement.primary, ABOVE);
    assert_eq!(placement.position, Point::new(1500, 310));
    assert_eq!(placement.offset, Point::new(-25, 0));
}

#[test]
fn attach_origin_shifts_the_lookup_point() {
    let screen = dual_screen();
    let win = screen.add_window(Size::new(40, 30), Point::ZERO);
    let mut params = dropdown(Rect::new(100, 100, 50, 20));
    params.set_attach_origin(Some(Point::new(1000, 0)));

    let bounds = screen.work_area_at(Point::new(1125, 110));
    assert_eq!(bounds, Rect::new(1000, 0, 600, 400));
    let placement = choose_position_for_window(&params, &screen, win)
        .expect("choose")
        .expect("placement");
    assert_eq!(placement.position, Point::new(1105, 120));
}

#[test]
fn work_area_excludes_panels() {
    let screen = dual_screen();
    let win = screen.add_window(Size::new(40, 30), Point::ZERO);
    let mut params = AttachParams::new();
    params
        .set_attach_rect(Some(Rect::new(100, 0, 50, 20)))
        .add_primary_rules([ABOVE])
        .add_secondary_rules([CENTRED_X]);
    let placement = choose_position_for_window(&params, &screen, win)
        .expect("choose")
        .expect("placement");
    assert_eq!(placement.position, Point::new(105, 30));
    assert_eq!(placement.offset, Point::new(0, 60));
}

#[test]
fn missing_rect_and_unknown_window_are_errors() {
    let screen = dual_screen();
    let params = AttachParams::new();
    assert_eq!(
        choose_position_for_window(&params, &screen, 1),
        Err(Error::MissingAttachRect)
    );
    let params = dropdown(Rect::new(100, 100, 50, 20));
    assert_eq!(
        move_using_attach_params(&screen, 99, Some(&params)),
        Err(Error::UnknownWindow(99))
    );
}

#[test]
fn backend_can_be_used_as_trait_object() {
    let screen = dual_screen();
    let win = screen.add_window(Size::new(40, 30), Point::ZERO);
    let backend: &dyn WindowBackend = &screen;
    let params = dropdown(Rect::new(100, 100, 50, 20));
    let placement = move_using_attach_params(backend, win, Some(&params))
        .expect("move")
        .expect("placement");
    assert_eq!(placement.position, Point::new(105, 120));
}
