// File: crates/navplot-core/tests/clipping.rs
// Purpose: Region codes, edge clipping, and the clipped polyline algorithm.

use navplot_core::clip::{clip_to_edge, region_code, ABOVE, BELOW, LEFT, RIGHT};
use navplot_core::{DrawOp, Graph, LineStyle, Point, RecordingPainter, Viewport};

fn vp100() -> Viewport {
    Viewport::new(0, 0, 100, 100)
}

fn graph100() -> Graph {
    Graph::new(vp100())
}

#[test]
fn region_codes_cover_all_sides() {
    let vp = vp100();
    assert_eq!(region_code(&vp, Point::new(50, 50)), 0);
    assert_eq!(region_code(&vp, Point::new(-5, 50)), LEFT);
    assert_eq!(region_code(&vp, Point::new(150, 50)), RIGHT);
    assert_eq!(region_code(&vp, Point::new(50, -5)), ABOVE);
    assert_eq!(region_code(&vp, Point::new(50, 150)), BELOW);
    assert_eq!(region_code(&vp, Point::new(150, 150)), RIGHT | BELOW);
    assert_eq!(region_code(&vp, Point::new(-5, -5)), LEFT | ABOVE);
    // inclusive edges
    assert_eq!(region_code(&vp, Point::new(99, 99)), 0);
    assert_eq!(region_code(&vp, Point::new(100, 99)), RIGHT);
}

#[test]
fn clip_moves_endpoint_onto_edge() {
    let vp = vp100();
    let p = clip_to_edge(&vp, Point::new(-10, 50), LEFT, Point::new(50, 50));
    assert_eq!(p, Some(Point::new(0, 50)));

    let p = clip_to_edge(&vp, Point::new(50, -20), ABOVE, Point::new(50, 40));
    assert_eq!(p, Some(Point::new(50, 0)));
}

#[test]
fn clip_fails_when_segment_misses_the_rectangle() {
    let vp = vp100();
    // cuts across the outside of the top-left corner: the left-edge
    // intersection lands above the box, and LEFT is the only edge named
    let p = clip_to_edge(&vp, Point::new(-10, 10), LEFT, Point::new(10, -30));
    assert_eq!(p, None);
}

#[test]
fn axis_parallel_segment_cannot_clip_against_parallel_edge() {
    let vp = vp100();
    // vertical segment entirely left of the box: dx == 0 for the left edge
    let p = clip_to_edge(&vp, Point::new(-5, 10), LEFT, Point::new(-5, 90));
    assert_eq!(p, None);
    // but a horizontal segment does clip against the vertical edges
    let p = clip_to_edge(&vp, Point::new(-5, 40), LEFT, Point::new(60, 40));
    assert_eq!(p, Some(Point::new(0, 40)));
}

#[test]
fn enter_cross_exit_emits_exactly_two_clipped_segments() {
    let graph = graph100();
    let mut rec = RecordingPainter::new();
    let pts = [Point::new(-10, 50), Point::new(50, 50), Point::new(150, 50)];
    graph.draw_poly_at(&mut rec, &pts, navplot_core::Color::BLACK, LineStyle::Solid);

    let lines = rec.polylines();
    assert_eq!(lines.len(), 2, "got ops: {:?}", rec.ops);
    assert_eq!(lines[0], &[Point::new(0, 50), Point::new(50, 50)]);
    assert_eq!(lines[1], &[Point::new(50, 50), Point::new(99, 50)]);
}

#[test]
fn fully_outside_path_emits_nothing() {
    let graph = graph100();
    let mut rec = RecordingPainter::new();
    let pts = [Point::new(-10, 0), Point::new(-20, 50), Point::new(-10, 99)];
    graph.draw_poly_at(&mut rec, &pts, navplot_core::Color::BLACK, LineStyle::Solid);
    assert!(rec.ops.is_empty(), "got ops: {:?}", rec.ops);
}

#[test]
fn diagonal_crossing_is_clipped_at_both_ends() {
    let graph = graph100();
    let mut rec = RecordingPainter::new();
    let pts = [Point::new(-10, -10), Point::new(110, 110)];
    graph.draw_poly_at(&mut rec, &pts, navplot_core::Color::BLACK, LineStyle::Solid);

    let lines = rec.polylines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], &[Point::new(0, 0), Point::new(99, 99)]);
}

#[test]
fn inside_run_is_flushed_as_one_polyline() {
    let graph = graph100();
    let mut rec = RecordingPainter::new();
    let pts = [
        Point::new(10, 10),
        Point::new(20, 30),
        Point::new(40, 20),
        Point::new(60, 60),
    ];
    graph.draw_poly_at(&mut rec, &pts, navplot_core::Color::BLACK, LineStyle::Solid);

    let lines = rec.polylines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 4);
}

#[test]
fn world_poly_coalesces_duplicate_pixels() {
    let mut graph = graph100();
    graph.view.set_center(0.0, 0.0);
    graph.view.set_scale(0.02, 0.02);
    let mut rec = RecordingPainter::new();
    // middle two points land on the same pixel after rounding
    let xs = [-0.4, 0.0, 0.001, 0.4];
    let ys = [0.0, 0.0, 0.0, 0.0];
    graph.draw_poly(&mut rec, &xs, &ys, navplot_core::Color::BLACK, LineStyle::Solid);

    let lines = rec.polylines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 3);
}

#[test]
fn wildly_out_of_range_coordinates_do_not_reach_the_painter() {
    let graph = graph100();
    let mut rec = RecordingPainter::new();
    let pts = [Point::new(-1_000_000, 50), Point::new(2_000_000, 50)];
    graph.draw_poly_at(&mut rec, &pts, navplot_core::Color::BLACK, LineStyle::Solid);

    for op in &rec.ops {
        if let DrawOp::Polyline { pts, .. } = op {
            for p in pts {
                assert!((0..100).contains(&p.x), "unclipped x {}", p.x);
                assert!((0..100).contains(&p.y), "unclipped y {}", p.y);
            }
        }
    }
    assert_eq!(rec.polylines().len(), 1);
}
