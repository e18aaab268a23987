// File: crates/navplot-render-skia/src/lib.rs
// Summary: Skia-backed Painter implementation plus headless PNG raster helpers.

use skia_safe as skia;

use navplot_core::{Color, HAlign, LineStyle, Painter, Point, VAlign};

/// Failure modes of the headless render pipeline.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create raster surface")]
    SurfaceCreate,
    #[error("failed to encode PNG")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn dash_intervals(style: LineStyle) -> Option<&'static [f32]> {
    match style {
        LineStyle::Solid => None,
        LineStyle::Dot => Some(&[1.0, 2.0]),
        LineStyle::Dash => Some(&[6.0, 3.0]),
        LineStyle::DashDot => Some(&[6.0, 3.0, 1.0, 3.0]),
        LineStyle::DashDotDot => Some(&[6.0, 3.0, 1.0, 3.0, 1.0, 3.0]),
    }
}

fn stroke_paint(color: Color, style: LineStyle) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_color(to_skia_color(color));
    if let Some(intervals) = dash_intervals(style) {
        paint.set_path_effect(skia::PathEffect::dash(intervals, 0.0));
    }
    paint
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia_color(color));
    paint
}

fn path_from(pts: &[Point], close: bool) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some((first, rest)) = pts.split_first() {
        path.move_to((first.x as f32, first.y as f32));
        for p in rest {
            path.line_to((p.x as f32, p.y as f32));
        }
        if close {
            path.close();
        }
    }
    path
}

/// Restores the canvas matrix/clip stack on drop, so rotated-text drawing
/// cannot leak a transform on any exit path.
struct CanvasStateGuard<'a> {
    canvas: &'a skia::Canvas,
    count: usize,
}

impl<'a> CanvasStateGuard<'a> {
    fn new(canvas: &'a skia::Canvas) -> Self {
        let count = canvas.save();
        Self { canvas, count }
    }
}

impl Drop for CanvasStateGuard<'_> {
    fn drop(&mut self) {
        self.canvas.restore_to_count(self.count);
    }
}

/// Painter drawing onto a Skia canvas (raster or GPU-backed).
pub struct SkiaPainter<'a> {
    canvas: &'a skia::Canvas,
    font: skia::Font,
}

impl<'a> SkiaPainter<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        let mut font = skia::Font::default();
        font.set_size(12.0);
        Self { canvas, font }
    }

    pub fn with_font(canvas: &'a skia::Canvas, font: skia::Font) -> Self {
        Self { canvas, font }
    }
}

impl Painter for SkiaPainter<'_> {
    fn draw_line(&mut self, p0: Point, p1: Point, color: Color, style: LineStyle) {
        let paint = stroke_paint(color, style);
        self.canvas.draw_line(
            (p0.x as f32, p0.y as f32),
            (p1.x as f32, p1.y as f32),
            &paint,
        );
    }

    fn draw_ellipse(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color, style: LineStyle, fill: Option<Color>) {
        let rect = skia::Rect::from_xywh(x as f32, y as f32, w as f32, h as f32);
        if let Some(fc) = fill {
            self.canvas.draw_oval(rect, &fill_paint(fc));
        }
        self.canvas.draw_oval(rect, &stroke_paint(color, style));
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color, fill: Option<Color>) {
        let rect = skia::Rect::from_xywh(x as f32, y as f32, w as f32, h as f32);
        if let Some(fc) = fill {
            self.canvas.draw_rect(rect, &fill_paint(fc));
        }
        self.canvas.draw_rect(rect, &stroke_paint(color, LineStyle::Solid));
    }

    fn draw_polyline(&mut self, pts: &[Point], color: Color, style: LineStyle) {
        if pts.len() < 2 {
            return;
        }
        let path = path_from(pts, false);
        self.canvas.draw_path(&path, &stroke_paint(color, style));
    }

    fn draw_polygon(&mut self, pts: &[Point], outline: Color, style: LineStyle, fill: Color) {
        if pts.len() < 2 {
            return;
        }
        let path = path_from(pts, true);
        self.canvas.draw_path(&path, &fill_paint(fill));
        self.canvas.draw_path(&path, &stroke_paint(outline, style));
    }

    fn draw_text(
        &mut self,
        pos: Point,
        text: &str,
        color: Color,
        ha: HAlign,
        va: VAlign,
        rot_deg: f64,
        font_px: Option<f32>,
    ) {
        if text.is_empty() {
            return;
        }
        let mut font = self.font.clone();
        if let Some(px) = font_px {
            font.set_size(px.max(1.0));
        }
        let paint = fill_paint(color);
        let (advance, _) = font.measure_str(text, Some(&paint));
        let (_, metrics) = font.metrics();
        let dx = match ha {
            HAlign::Center => -advance / 2.0,
            HAlign::Left => 0.0,
            HAlign::Right => -advance,
        };
        // ascent is negative in Skia's metrics
        let dy = match va {
            VAlign::Center => -(metrics.ascent + metrics.descent) / 2.0,
            VAlign::Bottom => -metrics.descent,
            VAlign::Top => -metrics.ascent,
        };

        let _guard = CanvasStateGuard::new(self.canvas);
        self.canvas.translate((pos.x as f32, pos.y as f32));
        self.canvas.rotate(-(rot_deg as f32), None);
        self.canvas.draw_str(text, (dx, dy), &font, &paint);
    }
}

/// Render into an offscreen raster surface and return the PNG bytes.
pub fn render_to_png_bytes(
    width: i32,
    height: i32,
    background: Color,
    draw: impl FnOnce(&mut SkiaPainter<'_>),
) -> Result<Vec<u8>, RenderError> {
    let mut surface =
        skia::surfaces::raster_n32_premul((width, height)).ok_or(RenderError::SurfaceCreate)?;
    {
        let canvas = surface.canvas();
        canvas.clear(to_skia_color(background));
        let mut painter = SkiaPainter::new(canvas);
        draw(&mut painter);
    }
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(RenderError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

/// Render to a PNG file, creating parent directories as needed.
pub fn render_to_png(
    width: i32,
    height: i32,
    background: Color,
    draw: impl FnOnce(&mut SkiaPainter<'_>),
    output_path: impl AsRef<std::path::Path>,
) -> Result<(), RenderError> {
    let bytes = render_to_png_bytes(width, height, background, draw)?;
    if let Some(parent) = output_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, bytes)?;
    Ok(())
}
