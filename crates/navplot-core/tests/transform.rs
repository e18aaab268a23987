// File: crates/navplot-core/tests/transform.rs
// Purpose: Validate the view transform: round trips, clamping, limits, ticks.

use navplot_core::view::{auto_tick, auto_tick_time};
use navplot_core::{Point, View, Viewport};

fn view_640x480() -> View {
    View::new(Viewport::new(0, 0, 640, 480))
}

#[test]
fn world_pixel_round_trip_within_one_pixel() {
    let mut view = view_640x480();
    view.set_center(1.5, -2.0);
    view.set_scale(0.05, 0.1);

    let ([x0, x1], [y0, y1]) = view.limits();
    for k in 0..=10 {
        let f = f64::from(k) / 10.0;
        let wx = x0 + (x1 - x0) * f;
        let wy = y0 + (y1 - y0) * f;
        let (p, inside) = view.to_pixel(wx, wy);
        assert!(inside, "({wx}, {wy}) should be on screen");
        let (rx, ry) = view.to_world(p);
        let (xs, ys) = view.scale();
        assert!((rx - wx).abs() <= xs, "x error {} > {}", (rx - wx).abs(), xs);
        assert!((ry - wy).abs() <= ys, "y error {} > {}", (ry - wy).abs(), ys);
    }
}

#[test]
fn scale_is_clamped_to_bounds() {
    let mut view = view_640x480();
    view.set_scale(0.0, -5.0);
    assert_eq!(view.scale(), (2e-5, 2e-5));
    view.set_scale(1e12, f64::MAX);
    assert_eq!(view.scale(), (1e7, 1e7));
}

#[test]
fn limits_round_trip_exactly_at_corners() {
    let mut view = view_640x480();
    view.set_limits([-10.0, 10.0], [0.0, 5.0]);
    let ([x0, x1], [y0, y1]) = view.limits();
    assert!((x0 + 10.0).abs() < 1e-9);
    assert!((x1 - 10.0).abs() < 1e-9);
    assert!((y0 - 0.0).abs() < 1e-9);
    assert!((y1 - 5.0).abs() < 1e-9);
}

#[test]
fn degenerate_limit_ranges_leave_axis_untouched() {
    let mut view = view_640x480();
    view.set_center(3.0, 4.0);
    view.set_scale(0.5, 0.25);
    view.set_limits([2.0, 2.0], [5.0, 1.0]);
    assert_eq!(view.center(), (3.0, 4.0));
    assert_eq!(view.scale(), (0.5, 0.25));
}

#[test]
fn set_position_with_fit_rescales_proportionally() {
    let mut view = View::new(Viewport::new(0, 0, 101, 101));
    view.set_scale(1.0, 1.0);
    view.fit = true;
    view.set_position(Point::new(0, 0), Point::new(200, 200));
    let (xs, ys) = view.scale();
    assert!((xs - 0.5).abs() < 1e-12);
    assert!((ys - 0.5).abs() < 1e-12);
    assert_eq!(view.viewport().width(), 201);
}

#[test]
fn set_position_clamps_minimum_size() {
    let mut view = view_640x480();
    view.fit = false;
    view.set_position(Point::new(10, 10), Point::new(12, 12));
    assert_eq!(view.viewport().width(), 10);
    assert_eq!(view.viewport().height(), 10);
}

#[test]
fn inside_flag_tracks_viewport() {
    let mut view = View::new(Viewport::new(0, 0, 100, 100));
    view.set_center(0.0, 0.0);
    view.set_scale(0.02, 0.02);
    let (_, inside) = view.to_pixel(0.0, 0.0);
    assert!(inside);
    let (_, inside) = view.to_pixel(100.0, 0.0);
    assert!(!inside);
}

#[test]
fn right_anchor_round_trips() {
    let mut view = view_640x480();
    view.set_scale(0.1, 0.1);
    view.set_right(25.0, -3.0);
    let (x, y) = view.right();
    assert!((x - 25.0).abs() < 1e-9);
    assert!((y + 3.0).abs() < 1e-9);
}

#[test]
fn auto_tick_matches_nice_number_table() {
    // 30 px/tick rule: scale 1 -> raw 30 -> next nice value 50
    assert_eq!(auto_tick(1.0), 50.0);
    // raw 3 -> 5
    assert_eq!(auto_tick(0.1), 5.0);
    // boundary: raw exactly 20 stays 20
    assert_eq!(auto_tick(2.0 / 3.0), 20.0);
    assert_eq!(auto_tick(0.02), 1.0);
}

#[test]
fn auto_tick_is_monotonic() {
    let mut last = 0.0;
    let mut scale = 1e-4;
    while scale < 1e5 {
        let t = auto_tick(scale);
        assert!(t >= last, "tick decreased at scale {scale}");
        last = t;
        scale *= 1.3;
    }
}

#[test]
fn auto_tick_time_snaps_to_calendar_table() {
    // 60 px/tick rule: scale 1 -> raw 60 -> exactly 60 s
    assert_eq!(auto_tick_time(1.0), 60.0);
    assert_eq!(auto_tick_time(0.001), 0.1);
    // raw 90 -> next entry 300 s
    assert_eq!(auto_tick_time(1.5), 300.0);
    // beyond the table: saturates at 140 days
    assert_eq!(auto_tick_time(1e6), 86400.0 * 140.0);
}
