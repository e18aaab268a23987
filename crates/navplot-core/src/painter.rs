// File: crates/navplot-core/src/painter.rs
// Summary: Rendering-surface trait and a recording painter for headless use.

use crate::geometry::Point;
use crate::types::{Color, HAlign, LineStyle, VAlign};

/// Drawing surface the plot canvas renders onto.
///
/// Color and pen style travel with each call; backends build their paint
/// state per primitive. `draw_text` anchors the string at `pos` under the
/// given alignment pair and rotates it by `rot_deg` degrees
/// counter-clockwise about the anchor; any surface transform mutated to do
/// so must be restored before the call returns.
pub trait Painter {
    fn draw_line(&mut self, p0: Point, p1: Point, color: Color, style: LineStyle);

    /// Ellipse outline inside the box at `(x, y)` with size `(w, h)`;
    /// filled with `fill` when given.
    fn draw_ellipse(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color, style: LineStyle, fill: Option<Color>);

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color, fill: Option<Color>);

    fn draw_polyline(&mut self, pts: &[Point], color: Color, style: LineStyle);

    fn draw_polygon(&mut self, pts: &[Point], outline: Color, style: LineStyle, fill: Color);

    fn draw_text(
        &mut self,
        pos: Point,
        text: &str,
        color: Color,
        ha: HAlign,
        va: VAlign,
        rot_deg: f64,
        font_px: Option<f32>,
    );
}

/// One recorded draw command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Line {
        p0: Point,
        p1: Point,
        color: Color,
        style: LineStyle,
    },
    Ellipse {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
        style: LineStyle,
        fill: Option<Color>,
    },
    Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
        fill: Option<Color>,
    },
    Polyline {
        pts: Vec<Point>,
        color: Color,
        style: LineStyle,
    },
    Polygon {
        pts: Vec<Point>,
        outline: Color,
        style: LineStyle,
        fill: Color,
    },
    Text {
        pos: Point,
        text: String,
        color: Color,
        ha: HAlign,
        va: VAlign,
        rot_deg: f64,
    },
}

/// Painter that records commands instead of rasterizing. Backs the test
/// suite and the benches; also handy for dumping a draw trace.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    pub ops: Vec<DrawOp>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polylines(&self) -> Vec<&[Point]> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Polyline { pts, .. } => Some(pts.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Painter for RecordingPainter {
    fn draw_line(&mut self, p0: Point, p1: Point, color: Color, style: LineStyle) {
        self.ops.push(DrawOp::Line { p0, p1, color, style });
    }

    fn draw_ellipse(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color, style: LineStyle, fill: Option<Color>) {
        self.ops.push(DrawOp::Ellipse { x, y, w, h, color, style, fill });
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color, fill: Option<Color>) {
        self.ops.push(DrawOp::Rect { x, y, w, h, color, fill });
    }

    fn draw_polyline(&mut self, pts: &[Point], color: Color, style: LineStyle) {
        self.ops.push(DrawOp::Polyline { pts: pts.to_vec(), color, style });
    }

    fn draw_polygon(&mut self, pts: &[Point], outline: Color, style: LineStyle, fill: Color) {
        self.ops.push(DrawOp::Polygon { pts: pts.to_vec(), outline, style, fill });
    }

    fn draw_text(
        &mut self,
        pos: Point,
        text: &str,
        color: Color,
        ha: HAlign,
        va: VAlign,
        rot_deg: f64,
        _font_px: Option<f32>,
    ) {
        self.ops.push(DrawOp::Text {
            pos,
            text: text.to_string(),
            color,
            ha,
            va,
            rot_deg,
        });
    }
}
