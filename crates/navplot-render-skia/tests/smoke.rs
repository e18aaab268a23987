// File: crates/navplot-render-skia/tests/smoke.rs
// Purpose: End-to-end raster check: draw a small plot, decode the PNG back.

use navplot_core::{Color, Graph, LineStyle, Viewport};

#[test]
fn renders_a_decodable_png_of_the_right_size() {
    let mut graph = Graph::new(Viewport::new(20, 20, 280, 200));
    graph.view.set_limits([0.0, 10.0], [-1.0, 1.0]);

    let xs: Vec<f64> = (0..=100).map(|i| f64::from(i) * 0.1).collect();
    let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();

    let bytes = navplot_render_skia::render_to_png_bytes(320, 240, Color::WHITE, |p| {
        graph.draw_axis(p, true, true);
        graph.draw_poly(p, &xs, &ys, Color::rgb(30, 90, 200), LineStyle::Solid);
    })
    .expect("render failed");

    assert_eq!(&bytes[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);

    let img = image::load_from_memory(&bytes).expect("PNG did not decode");
    assert_eq!(img.width(), 320);
    assert_eq!(img.height(), 240);
}

#[test]
fn background_color_fills_uncovered_pixels() {
    let bytes = navplot_render_skia::render_to_png_bytes(64, 64, Color::rgb(10, 20, 30), |_| {})
        .expect("render failed");
    let img = image::load_from_memory(&bytes).expect("PNG did not decode").to_rgba8();
    let px = img.get_pixel(32, 32);
    assert_eq!(px.0, [10, 20, 30, 255]);
}
