// File: crates/navplot-core/src/graph.rs
// Summary: The plot canvas: marks, text, clipped polylines, patches, grids,
// axes, range rings and sky plots drawn through a Painter.

use crate::clip::{clip_to_edge, region_code};
use crate::geometry::{Point, Viewport};
use crate::mark::{rotate_points, shape_points, MarkShape};
use crate::painter::Painter;
use crate::theme::Theme;
use crate::time::{num_label, time_label};
use crate::types::{Color, HAlign, LineStyle, VAlign, MAX_POLY_POINTS, ORIGIN_MARK_SIZE};
use crate::view::{auto_tick, auto_tick_time, View};

/// Placement of grid labels along an axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelPos {
    Off,
    #[default]
    Outer,
    Inner,
    OuterRot,
    InnerRot,
    /// Time-table tick selection, no labels.
    TimeTick,
    /// Time-formatted labels outside the box.
    Time,
    /// Numeric labels along the zero axis inside the box.
    Axis,
}

impl LabelPos {
    fn is_time(self) -> bool {
        matches!(self, Self::TimeTick | Self::Time)
    }

    fn is_rotated(self) -> bool {
        matches!(self, Self::OuterRot | Self::InnerRot)
    }

    fn is_outer(self) -> bool {
        matches!(self, Self::Outer | Self::OuterRot | Self::TimeTick | Self::Axis)
    }
}

/// 2-D plot canvas. Owns the view transform and the style state; every
/// `draw_*` method is a synchronous computation plus painter calls.
/// Degenerate geometry (empty point lists, off-screen marks, empty label
/// strings) is skipped silently, never an error.
#[derive(Clone, Debug)]
pub struct Graph {
    pub view: View,
    pub box_outline: bool,
    pub x_grid: bool,
    pub y_grid: bool,
    /// Grid interval in world units; 0 selects the automatic tick.
    pub x_tick: f64,
    pub y_tick: f64,
    pub x_label_pos: LabelPos,
    pub y_label_pos: LabelPos,
    /// GPS week number backing time-axis labels.
    pub week: i32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub background: Color,
    pub grid_color: Color,
    pub label_color: Color,
}

impl Graph {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            view: View::new(viewport),
            box_outline: true,
            x_grid: true,
            y_grid: true,
            x_tick: 0.0,
            y_tick: 0.0,
            x_label_pos: LabelPos::Outer,
            y_label_pos: LabelPos::Outer,
            week: 0,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            background: Color::WHITE,
            grid_color: Color::GRAY,
            label_color: Color::BLACK,
        }
    }

    pub fn apply_theme(&mut self, theme: &Theme) {
        self.background = theme.background;
        self.grid_color = theme.grid;
        self.label_color = theme.label;
    }

    pub fn is_in_area(&self, p: Point) -> bool {
        self.view.viewport().contains(p)
    }

    /// Effective grid intervals: explicit ticks when set, otherwise the
    /// automatic tables (the calendar table for a time-labeled x axis).
    pub fn get_tick(&self) -> (f64, f64) {
        let (xs, ys) = self.view.scale();
        let xt = if self.x_tick > 0.0 {
            self.x_tick
        } else if self.x_label_pos.is_time() {
            auto_tick_time(xs)
        } else {
            auto_tick(xs)
        };
        let yt = if self.y_tick > 0.0 { self.y_tick } else { auto_tick(ys) };
        (xt, yt)
    }

    // ---- marks -------------------------------------------------------------

    /// Draw a mark centered on the pixel `p`. Dot/Circle/Rect/Cross ignore
    /// `rot_deg`; the remaining shapes are rotated point lists. Compass adds
    /// an "N" glyph at a rotated radial offset.
    pub fn draw_mark_at(
        &self,
        c: &mut dyn Painter,
        p: Point,
        shape: MarkShape,
        color: Color,
        size: i32,
        rot_deg: f64,
    ) {
        let size = size.max(1);
        let s = size / 2;
        let (x1, y1, w1, h1) = (p.x - s, p.y - s, size + 1, size + 1);
        match shape {
            MarkShape::Dot => c.draw_ellipse(x1, y1, w1, h1, color, LineStyle::Solid, Some(color)),
            MarkShape::Circle => c.draw_ellipse(x1, y1, w1, h1, color, LineStyle::Solid, None),
            MarkShape::Rect => c.draw_rect(x1, y1, w1, h1, color, None),
            MarkShape::Cross => {
                c.draw_line(Point::new(x1, y1), Point::new(x1 + w1, y1 + h1), color, LineStyle::Solid);
                c.draw_line(Point::new(x1, y1 + h1), Point::new(x1 + w1, y1), color, LineStyle::Solid);
            }
            _ => {
                if shape == MarkShape::Compass {
                    let anchor = rotate_points(&[Point::new(0, size / 2 + 12)], p, rot_deg);
                    self.draw_text_at(c, anchor[0], "N", color, HAlign::Center, VAlign::Center, rot_deg);
                }
                if let Some(pts) = shape_points(shape, size) {
                    let pr = rotate_points(&pts, p, rot_deg);
                    self.draw_poly_at(c, &pr, color, LineStyle::Solid);
                }
            }
        }
    }

    /// World-space mark; skipped when the position is off screen.
    pub fn draw_mark(
        &self,
        c: &mut dyn Painter,
        wx: f64,
        wy: f64,
        shape: MarkShape,
        color: Color,
        size: i32,
        rot_deg: f64,
    ) {
        let (p, inside) = self.view.to_pixel(wx, wy);
        if inside {
            self.draw_mark_at(c, p, shape, color, size, rot_deg);
        }
    }

    /// Hemmed mark: four background passes offset by one pixel, then the
    /// foreground pass, producing a halo for legibility over busy content.
    pub fn draw_mark_hemmed_at(
        &self,
        c: &mut dyn Painter,
        p: Point,
        shape: MarkShape,
        color: Color,
        bg: Color,
        size: i32,
        rot_deg: f64,
    ) {
        self.draw_mark_at(c, Point::new(p.x - 1, p.y), shape, bg, size, rot_deg);
        self.draw_mark_at(c, Point::new(p.x + 1, p.y), shape, bg, size, rot_deg);
        self.draw_mark_at(c, Point::new(p.x, p.y - 1), shape, bg, size, rot_deg);
        self.draw_mark_at(c, Point::new(p.x, p.y + 1), shape, bg, size, rot_deg);
        self.draw_mark_at(c, p, shape, color, size, rot_deg);
    }

    pub fn draw_mark_hemmed(
        &self,
        c: &mut dyn Painter,
        wx: f64,
        wy: f64,
        shape: MarkShape,
        color: Color,
        bg: Color,
        size: i32,
        rot_deg: f64,
    ) {
        let (p, inside) = self.view.to_pixel(wx, wy);
        if inside {
            self.draw_mark_hemmed_at(c, p, shape, color, bg, size, rot_deg);
        }
    }

    /// One mark per data point with a per-point color, skipping points off
    /// screen and points that round onto the previously drawn pixel.
    pub fn draw_marks(
        &self,
        c: &mut dyn Painter,
        xs: &[f64],
        ys: &[f64],
        colors: &[Color],
        shape: MarkShape,
        size: i32,
        rot_deg: f64,
    ) {
        let n = xs.len().min(ys.len()).min(colors.len());
        let mut prev: Option<Point> = None;
        for i in 0..n {
            let (p, inside) = self.view.to_pixel(xs[i], ys[i]);
            if !inside || prev == Some(p) {
                continue;
            }
            self.draw_mark_at(c, p, shape, colors[i], size, rot_deg);
            prev = Some(p);
        }
    }

    // ---- text --------------------------------------------------------------

    /// Text anchored at pixel `p`. Rotation is counter-clockwise in screen
    /// space; note marks and text rotate with opposite sign conventions, the
    /// painter receives the text convention directly.
    pub fn draw_text_at(
        &self,
        c: &mut dyn Painter,
        p: Point,
        text: &str,
        color: Color,
        ha: HAlign,
        va: VAlign,
        rot_deg: f64,
    ) {
        if text.is_empty() {
            return;
        }
        c.draw_text(p, text, color, ha, va, rot_deg, None);
    }

    pub fn draw_text(
        &self,
        c: &mut dyn Painter,
        wx: f64,
        wy: f64,
        text: &str,
        color: Color,
        ha: HAlign,
        va: VAlign,
        rot_deg: f64,
    ) {
        let (p, _) = self.view.to_pixel(wx, wy);
        self.draw_text_at(c, p, text, color, ha, va, rot_deg);
    }

    /// Text with an explicit font size in pixels instead of the painter's
    /// default.
    pub fn draw_text_sized_at(
        &self,
        c: &mut dyn Painter,
        p: Point,
        text: &str,
        color: Color,
        ha: HAlign,
        va: VAlign,
        rot_deg: f64,
        font_px: f32,
    ) {
        if text.is_empty() {
            return;
        }
        c.draw_text(p, text, color, ha, va, rot_deg, Some(font_px));
    }

    pub fn draw_text_sized(
        &self,
        c: &mut dyn Painter,
        wx: f64,
        wy: f64,
        text: &str,
        color: Color,
        ha: HAlign,
        va: VAlign,
        rot_deg: f64,
        font_px: f32,
    ) {
        let (p, _) = self.view.to_pixel(wx, wy);
        self.draw_text_sized_at(c, p, text, color, ha, va, rot_deg, font_px);
    }

    pub fn draw_text_hemmed_at(
        &self,
        c: &mut dyn Painter,
        p: Point,
        text: &str,
        color: Color,
        bg: Color,
        ha: HAlign,
        va: VAlign,
        rot_deg: f64,
    ) {
        if text.is_empty() {
            return;
        }
        self.draw_text_at(c, Point::new(p.x - 1, p.y), text, bg, ha, va, rot_deg);
        self.draw_text_at(c, Point::new(p.x + 1, p.y), text, bg, ha, va, rot_deg);
        self.draw_text_at(c, Point::new(p.x, p.y - 1), text, bg, ha, va, rot_deg);
        self.draw_text_at(c, Point::new(p.x, p.y + 1), text, bg, ha, va, rot_deg);
        self.draw_text_at(c, p, text, color, ha, va, rot_deg);
    }

    pub fn draw_text_hemmed(
        &self,
        c: &mut dyn Painter,
        wx: f64,
        wy: f64,
        text: &str,
        color: Color,
        bg: Color,
        ha: HAlign,
        va: VAlign,
        rot_deg: f64,
    ) {
        let (p, _) = self.view.to_pixel(wx, wy);
        self.draw_text_hemmed_at(c, p, text, color, bg, ha, va, rot_deg);
    }

    // ---- circles -----------------------------------------------------------

    /// Axis-aligned ellipse outline with pixel radii.
    pub fn draw_circle_at(
        &self,
        c: &mut dyn Painter,
        p: Point,
        color: Color,
        rx: i32,
        ry: i32,
        style: LineStyle,
    ) {
        c.draw_ellipse(p.x - rx, p.y - ry, 2 * rx, 2 * ry, color, style, None);
    }

    /// World-space ellipse; radii are world units divided by the scale.
    pub fn draw_circle(
        &self,
        c: &mut dyn Painter,
        wx: f64,
        wy: f64,
        color: Color,
        rx: f64,
        ry: f64,
        style: LineStyle,
    ) {
        let (p, _) = self.view.to_pixel(wx, wy);
        let (xs, ys) = self.view.scale();
        self.draw_circle_at(c, p, color, (rx / xs + 0.5) as i32, (ry / ys + 0.5) as i32, style);
    }

    /// Concentric range rings about the world origin covering the visible
    /// annulus, with solid zero axes and an origin dot. Used by track plots
    /// in place of the rectangular grid.
    pub fn draw_circles(&self, c: &mut dyn Painter, label: bool) {
        let vp = *self.view.viewport();
        let ([x0, x1], [y0, y1]) = self.view.limits();
        let (mut xt, mut yt) = self.get_tick();

        let r = [
            x0.hypot(y0),
            x0.hypot(y1),
            x1.hypot(y0),
            x1.hypot(y1),
        ];
        let rmin = r.iter().cloned().fold(f64::INFINITY, f64::min);
        let rmax = r.iter().cloned().fold(0.0, f64::max);

        let (imin, imax) = if x0 <= 0.0 && x1 >= 0.0 && y0 <= 0.0 && y1 >= 0.0 {
            (0, (rmax / xt).ceil() as i64)
        } else if x0 <= 0.0 && x1 >= 0.0 {
            let near = if y1 < 0.0 { -y1 } else { y0 };
            ((near / xt).floor() as i64, (rmax / xt).ceil() as i64)
        } else if y0 <= 0.0 && y1 >= 0.0 {
            let near = if x1 < 0.0 { -x1 } else { x0 };
            ((near / xt).floor() as i64, (rmax / xt).ceil() as i64)
        } else {
            ((rmin / xt).floor() as i64, (rmax / xt).ceil() as i64)
        };

        for i in imin..=imax {
            let radius = i as f64 * xt;
            self.draw_circle(c, 0.0, 0.0, self.grid_color, radius, radius, LineStyle::Dot);
        }

        let (p, _) = self.view.to_pixel(0.0, 0.0);
        c.draw_line(
            Point::new(p.x, vp.top()),
            Point::new(p.x, vp.bottom()),
            self.grid_color,
            LineStyle::Solid,
        );
        c.draw_line(
            Point::new(vp.left(), p.y),
            Point::new(vp.right(), p.y),
            self.grid_color,
            LineStyle::Solid,
        );

        self.draw_mark(c, 0.0, 0.0, MarkShape::Dot, self.grid_color, ORIGIN_MARK_SIZE, 0.0);

        let (xs, ys) = self.view.scale();
        if xt / xs < 50.0 {
            xt *= 2.0;
        }
        if yt / ys < 50.0 {
            yt *= 2.0;
        }
        if label {
            self.draw_grid_label(c, xt, yt);
        }
        self.draw_box(c);
    }

    // ---- polylines & patches -----------------------------------------------

    /// Hand a polyline to the painter in chunks of at most `MAX_POLY_POINTS`
    /// points; consecutive chunks share their boundary point. Runs shorter
    /// than a segment are dropped.
    fn draw_polyline_chunked(&self, c: &mut dyn Painter, pts: &[Point], color: Color, style: LineStyle) {
        if pts.len() < 2 {
            return;
        }
        let mut i = 0;
        loop {
            let end = (i + MAX_POLY_POINTS).min(pts.len());
            c.draw_polyline(&pts[i..end], color, style);
            if end == pts.len() {
                break;
            }
            i = end - 1;
        }
    }

    /// Clipped polyline over raw pixel points: inside runs are flushed as
    /// single polylines, boundary crossings are clipped to two-point
    /// segments, and fully-outside runs produce no painter calls.
    pub fn draw_poly_at(&self, c: &mut dyn Painter, pts: &[Point], color: Color, style: LineStyle) {
        let vp = *self.view.viewport();
        // sentinel outcode no real point can have, so the first point
        // always starts a region transition
        let mut area0: u8 = 11;
        let mut i = 0;
        let mut j = 0;
        while j < pts.len() {
            let area1 = region_code(&vp, pts[j]);
            if area1 != area0 {
                if area1 == 0 {
                    i = j;
                } else if area0 == 0 {
                    self.draw_polyline_chunked(c, &pts[i..j], color, style);
                }
                if j > 0 && (area0 & area1) == 0 {
                    let mut pc = [pts[j - 1], pts[j]];
                    let mut ok = true;
                    if area0 != 0 {
                        match clip_to_edge(&vp, pc[0], area0, pts[j]) {
                            Some(p) => pc[0] = p,
                            None => ok = false,
                        }
                    }
                    if ok && area1 != 0 {
                        match clip_to_edge(&vp, pc[1], area1, pts[j - 1]) {
                            Some(p) => pc[1] = p,
                            None => ok = false,
                        }
                    }
                    if ok {
                        self.draw_polyline_chunked(c, &pc, color, style);
                    }
                }
            }
            area0 = area1;
            j += 1;
        }
        if area0 == 0 {
            self.draw_polyline_chunked(c, &pts[i..], color, style);
        }
    }

    /// World-space polyline. Consecutive points that round onto the same
    /// pixel are coalesced before clipping so zero-length segments never
    /// reach the region-transition logic.
    pub fn draw_poly(&self, c: &mut dyn Painter, xs: &[f64], ys: &[f64], color: Color, style: LineStyle) {
        let n = xs.len().min(ys.len());
        let mut pts: Vec<Point> = Vec::with_capacity(n);
        for i in 0..n {
            let (p, _) = self.view.to_pixel(xs[i], ys[i]);
            if pts.last() != Some(&p) {
                pts.push(p);
            }
        }
        self.draw_poly_at(c, &pts, color, style);
    }

    /// Filled polygon over pixel points; the trailing closing point is
    /// dropped. Oversized polygons and polygons whose bounding box misses
    /// the viewport entirely are rejected without drawing.
    pub fn draw_patch_at(
        &self,
        c: &mut dyn Painter,
        pts: &[Point],
        outline: Color,
        fill: Color,
        style: LineStyle,
    ) {
        if pts.len() < 2 || pts.len() > MAX_POLY_POINTS {
            return;
        }
        let body = &pts[..pts.len() - 1];
        let vp = self.view.viewport();
        let (mut xmin, mut xmax, mut ymin, mut ymax) = (i32::MAX, i32::MIN, i32::MAX, i32::MIN);
        for p in body {
            xmin = xmin.min(p.x);
            xmax = xmax.max(p.x);
            ymin = ymin.min(p.y);
            ymax = ymax.max(p.y);
        }
        if xmax < vp.left() || xmin > vp.right() || ymax < vp.top() || ymin > vp.bottom() {
            return;
        }
        c.draw_polygon(body, outline, style, fill);
    }

    pub fn draw_patch(
        &self,
        c: &mut dyn Painter,
        xs: &[f64],
        ys: &[f64],
        outline: Color,
        fill: Color,
        style: LineStyle,
    ) {
        let n = xs.len().min(ys.len());
        let pts: Vec<Point> = (0..n).map(|i| self.view.to_pixel(xs[i], ys[i]).0).collect();
        self.draw_patch_at(c, &pts, outline, fill, style);
    }

    // ---- grid, axes, labels ------------------------------------------------

    fn draw_box(&self, c: &mut dyn Painter) {
        if self.box_outline {
            let vp = self.view.viewport();
            c.draw_rect(vp.x, vp.y, vp.width() - 1, vp.height() - 1, self.grid_color, None);
        }
    }

    fn draw_grid(&self, c: &mut dyn Painter, xt: f64, yt: f64) {
        let vp = *self.view.viewport();
        let ([x0, x1], [y0, y1]) = self.view.limits();
        if self.x_grid {
            let mut i = (x0 / xt).ceil() as i64;
            while i as f64 * xt <= x1 {
                let (p, _) = self.view.to_pixel(i as f64 * xt, 0.0);
                let style = if i != 0 { LineStyle::Dot } else { LineStyle::Solid };
                c.draw_line(Point::new(p.x, vp.top()), Point::new(p.x, vp.bottom()), self.grid_color, style);
                i += 1;
            }
        }
        if self.y_grid {
            let mut i = (y0 / yt).ceil() as i64;
            while i as f64 * yt <= y1 {
                let (p, _) = self.view.to_pixel(0.0, i as f64 * yt);
                let style = if i != 0 { LineStyle::Dot } else { LineStyle::Solid };
                c.draw_line(Point::new(vp.left(), p.y), Point::new(vp.right(), p.y), self.grid_color, style);
                i += 1;
            }
        }
        self.draw_mark(c, 0.0, 0.0, MarkShape::Dot, self.grid_color, ORIGIN_MARK_SIZE, 0.0);
    }

    fn draw_grid_label(&self, c: &mut dyn Painter, xt: f64, yt: f64) {
        let ([x0, x1], [y0, y1]) = self.view.limits();

        if self.x_label_pos != LabelPos::Off {
            let mut i = (x0 / xt).ceil() as i64;
            while i as f64 * xt <= x1 {
                let v = i as f64 * xt;
                match self.x_label_pos {
                    LabelPos::Outer | LabelPos::Inner | LabelPos::OuterRot | LabelPos::InnerRot => {
                        let (mut p, _) = self.view.to_pixel(v, y0);
                        if self.x_label_pos == LabelPos::Outer {
                            p.y -= 1;
                        }
                        let ha = match self.x_label_pos {
                            LabelPos::OuterRot => HAlign::Right,
                            LabelPos::InnerRot => HAlign::Left,
                            _ => HAlign::Center,
                        };
                        let va = match self.x_label_pos {
                            LabelPos::Outer => VAlign::Top,
                            LabelPos::Inner => VAlign::Bottom,
                            _ => VAlign::Center,
                        };
                        let rot = if self.x_label_pos.is_rotated() { 90.0 } else { 0.0 };
                        self.draw_text_at(c, p, &num_label(v, xt), self.label_color, ha, va, rot);
                    }
                    LabelPos::Time => {
                        let (p, _) = self.view.to_pixel(v, y0);
                        let text = time_label(self.week, v, xt);
                        self.draw_text_at(c, p, &text, self.label_color, HAlign::Center, VAlign::Top, 0.0);
                    }
                    LabelPos::Axis => {
                        if i != 0 {
                            let (p, _) = self.view.to_pixel(v, 0.0);
                            self.draw_text_at(c, p, &num_label(v, xt), self.label_color, HAlign::Center, VAlign::Top, 0.0);
                        }
                    }
                    LabelPos::Off | LabelPos::TimeTick => {}
                }
                i += 1;
            }
        }

        if self.y_label_pos != LabelPos::Off {
            let mut i = (y0 / yt).ceil() as i64;
            while i as f64 * yt <= y1 {
                let v = i as f64 * yt;
                match self.y_label_pos {
                    LabelPos::Outer | LabelPos::Inner | LabelPos::OuterRot | LabelPos::InnerRot => {
                        let (p, _) = self.view.to_pixel(x0, v);
                        let ha = match self.y_label_pos {
                            LabelPos::Outer => HAlign::Right,
                            LabelPos::Inner => HAlign::Left,
                            _ => HAlign::Center,
                        };
                        let va = match self.y_label_pos {
                            LabelPos::OuterRot => VAlign::Bottom,
                            LabelPos::InnerRot => VAlign::Top,
                            _ => VAlign::Center,
                        };
                        let rot = if self.y_label_pos.is_rotated() { 90.0 } else { 0.0 };
                        self.draw_text_at(c, p, &num_label(v, yt), self.label_color, ha, va, rot);
                    }
                    LabelPos::Axis => {
                        if i != 0 {
                            let (mut p, _) = self.view.to_pixel(0.0, v);
                            p.x += 2;
                            self.draw_text_at(c, p, &num_label(v, yt), self.label_color, HAlign::Left, VAlign::Center, 0.0);
                        }
                    }
                    _ => {}
                }
                i += 1;
            }
        }
    }

    fn draw_label(&self, c: &mut dyn Painter) {
        let vp = self.view.viewport();
        if !self.x_label.is_empty() {
            let off = if self.x_label_pos.is_outer() { 10 } else { 2 };
            let p = Point::new(vp.x + vp.width() / 2, vp.y + vp.height() + off);
            self.draw_text_at(c, p, &self.x_label, self.label_color, HAlign::Center, VAlign::Top, 0.0);
        }
        if !self.y_label.is_empty() {
            let off = if self.y_label_pos.is_outer() { 20 } else { 2 };
            let p = Point::new(vp.x - off, vp.y + vp.height() / 2);
            self.draw_text_at(c, p, &self.y_label, self.label_color, HAlign::Center, VAlign::Bottom, 90.0);
        }
        if !self.title.is_empty() {
            let p = Point::new(vp.x + vp.width() / 2, vp.y - 1);
            self.draw_text_at(c, p, &self.title, self.label_color, HAlign::Center, VAlign::Bottom, 0.0);
        }
    }

    /// Grid, grid labels, box outline and axis labels in one pass. Label
    /// ticks are relaxed when their pixel spacing would drop below ~50 px:
    /// quadrupled for time-formatted x labels, doubled otherwise, and
    /// doubled for rotated y labels.
    pub fn draw_axis(&self, c: &mut dyn Painter, label: bool, grid_label: bool) {
        let (mut xt, mut yt) = self.get_tick();
        let (xs, ys) = self.view.scale();

        self.draw_grid(c, xt, yt);

        if xt / xs < 50.0 {
            xt *= match self.x_label_pos {
                LabelPos::TimeTick | LabelPos::Time => 4.0,
                LabelPos::Off | LabelPos::Outer | LabelPos::Inner => 2.0,
                _ => 1.0,
            };
        }
        if yt / ys < 50.0 && self.y_label_pos.is_rotated() {
            yt *= 2.0;
        }
        if grid_label {
            self.draw_grid_label(c, xt, yt);
        }

        self.draw_box(c);

        if label {
            self.draw_label(c);
        }
    }

    // ---- sky plot ----------------------------------------------------------

    /// Sky plot scaffold at pixel center `p`: elevation rings every 15
    /// degrees (solid horizon, dotted above), ring labels, and 12 azimuth
    /// spokes labeled with cardinal letters on the quadrants.
    pub fn draw_sky_plot_at(
        &self,
        c: &mut dyn Painter,
        p: Point,
        ring_color: Color,
        text_color: Color,
        size: i32,
    ) {
        self.sky_plot(c, p, ring_color, text_color, None, size);
    }

    /// Hemmed sky plot: every label gets a one-pixel halo in `bg`.
    pub fn draw_sky_plot_hemmed_at(
        &self,
        c: &mut dyn Painter,
        p: Point,
        ring_color: Color,
        text_color: Color,
        bg: Color,
        size: i32,
    ) {
        self.sky_plot(c, p, ring_color, text_color, Some(bg), size);
    }

    /// World-space sky plot; `size` is the horizon diameter in world units.
    pub fn draw_sky_plot(
        &self,
        c: &mut dyn Painter,
        wx: f64,
        wy: f64,
        ring_color: Color,
        text_color: Color,
        size: f64,
    ) {
        let (p, _) = self.view.to_pixel(wx, wy);
        let (xs, _) = self.view.scale();
        self.draw_sky_plot_at(c, p, ring_color, text_color, (size / xs) as i32);
    }

    pub fn draw_sky_plot_hemmed(
        &self,
        c: &mut dyn Painter,
        wx: f64,
        wy: f64,
        ring_color: Color,
        text_color: Color,
        bg: Color,
        size: f64,
    ) {
        let (p, _) = self.view.to_pixel(wx, wy);
        let (xs, _) = self.view.scale();
        self.draw_sky_plot_hemmed_at(c, p, ring_color, text_color, bg, (size / xs) as i32);
    }

    fn sky_plot(
        &self,
        c: &mut dyn Painter,
        p: Point,
        ring_color: Color,
        text_color: Color,
        bg: Option<Color>,
        size: i32,
    ) {
        const DIRS: [&str; 4] = ["N", "E", "S", "W"];
        let r = size / 2;

        let label = |c: &mut dyn Painter, pos: Point, s: &str, ha, va, rot: f64| match bg {
            Some(bg) => self.draw_text_hemmed_at(c, pos, s, text_color, bg, ha, va, rot),
            None => self.draw_text_at(c, pos, s, text_color, ha, va, rot),
        };

        for el in (0..90).step_by(15) {
            let ys = r - r * el / 90;
            let style = if el == 0 { LineStyle::Solid } else { LineStyle::Dot };
            c.draw_ellipse(p.x - ys, p.y - ys, 2 * ys, 2 * ys, ring_color, style, None);
            if el == 0 {
                continue;
            }
            label(c, Point::new(p.x, p.y - ys), &el.to_string(), HAlign::Left, VAlign::Center, 0.0);
        }

        let mut di = 0;
        for az in (0..360).step_by(30) {
            let azr = f64::from(az).to_radians();
            let rim = Point::new(
                (f64::from(p.x) + f64::from(r) * azr.sin() + 0.5).floor() as i32,
                (f64::from(p.y) - f64::from(r) * azr.cos() + 0.5).floor() as i32,
            );
            c.draw_line(p, rim, text_color, LineStyle::Dot);
            let lp = Point::new(
                rim.x + (3.0 * azr.sin()) as i32,
                rim.y - (3.0 * azr.cos()) as i32,
            );
            let s = if az % 90 == 0 {
                di += 1;
                DIRS[di - 1].to_string()
            } else {
                az.to_string()
            };
            label(c, lp, &s, HAlign::Center, VAlign::Bottom, -f64::from(az));
        }
    }
}
