// File: crates/navplot-core/src/view.rs
// Summary: View transform: world<->pixel mapping, scale/center/limits, auto ticks.

use crate::geometry::{Point, Viewport};
use crate::types::{MAX_SCALE, MIN_SCALE};

/// Maps a logical 2-D coordinate space onto a pixel viewport.
///
/// `x_scale`/`y_scale` are world units per pixel and always positive.
/// The world point `(x_center, y_center)` lands on the viewport center.
/// World y grows upward, pixel y grows downward.
#[derive(Clone, Debug)]
pub struct View {
    viewport: Viewport,
    x_center: f64,
    y_center: f64,
    x_scale: f64,
    y_scale: f64,
    /// Rescale proportionally when the viewport is repositioned.
    pub fit: bool,
    /// Pixels reserved at the right edge for a legend gutter; used by
    /// `set_right`/`right`.
    pub right_gutter: i32,
}

impl View {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            x_center: 0.0,
            y_center: 0.0,
            x_scale: 0.02,
            y_scale: 0.02,
            fit: true,
            right_gutter: 13,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        self.viewport.set_size(width, height);
    }

    /// Move the viewport to the rectangle spanned by `p1` (top-left) and
    /// `p2` (bottom-right). With `fit` on, the scale follows the resize so
    /// the same world content stays framed.
    pub fn set_position(&mut self, p1: Point, p2: Point) {
        let w = (p2.x - p1.x + 1).max(crate::types::MIN_SIZE);
        let h = (p2.y - p1.y + 1).max(crate::types::MIN_SIZE);
        if self.fit {
            self.x_scale *= f64::from(self.viewport.width() - 1) / f64::from(w - 1);
            self.y_scale *= f64::from(self.viewport.height() - 1) / f64::from(h - 1);
        }
        self.viewport = Viewport::new(p1.x, p1.y, w, h);
    }

    pub fn position(&self) -> (Point, Point) {
        (
            Point::new(self.viewport.left(), self.viewport.top()),
            Point::new(self.viewport.right(), self.viewport.bottom()),
        )
    }

    pub fn set_center(&mut self, x: f64, y: f64) {
        self.x_center = x;
        self.y_center = y;
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x_center, self.y_center)
    }

    /// Place `(x, y)` at the right edge of the plot area, leaving
    /// `right_gutter` pixels free.
    pub fn set_right(&mut self, x: f64, y: f64) {
        self.x_center = x - f64::from(self.viewport.width() - self.right_gutter) * self.x_scale * 0.5;
        self.y_center = y;
    }

    pub fn right(&self) -> (f64, f64) {
        (
            self.x_center + f64::from(self.viewport.width() - self.right_gutter) * self.x_scale * 0.5,
            self.y_center,
        )
    }

    pub fn set_scale(&mut self, xs: f64, ys: f64) {
        self.x_scale = xs.clamp(MIN_SCALE, MAX_SCALE);
        self.y_scale = ys.clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn scale(&self) -> (f64, f64) {
        (self.x_scale, self.y_scale)
    }

    /// Frame the requested visible ranges. A degenerate range (`lo >= hi`)
    /// leaves that axis untouched.
    pub fn set_limits(&mut self, xl: [f64; 2], yl: [f64; 2]) {
        if xl[0] < xl[1] {
            self.x_center = (xl[0] + xl[1]) / 2.0;
            self.x_scale = (xl[1] - xl[0]) / f64::from(self.viewport.width() - 1);
        }
        if yl[0] < yl[1] {
            self.y_center = (yl[0] + yl[1]) / 2.0;
            self.y_scale = (yl[1] - yl[0]) / f64::from(self.viewport.height() - 1);
        }
    }

    /// Visible world bounds of the viewport corners, `([xlo, xhi], [ylo, yhi])`.
    pub fn limits(&self) -> ([f64; 2], [f64; 2]) {
        let (x0, y1) = self.to_world(Point::new(self.viewport.left(), self.viewport.top()));
        let (x1, y0) = self.to_world(Point::new(self.viewport.right(), self.viewport.bottom()));
        ([x0, x1], [y0, y1])
    }

    /// World to pixel. The flag is true when the unrounded position falls
    /// inside the viewport with a 0.1 px tolerance; callers use it to skip
    /// off-screen marks.
    pub fn to_pixel(&self, wx: f64, wy: f64) -> (Point, bool) {
        const TOL: f64 = 0.1;
        let px = f64::from(self.viewport.x)
            + f64::from(self.viewport.width() - 1) / 2.0
            + (wx - self.x_center) / self.x_scale;
        let py = f64::from(self.viewport.y)
            + f64::from(self.viewport.height() - 1) / 2.0
            - (wy - self.y_center) / self.y_scale;
        let p = Point::new((px + 0.5).floor() as i32, (py + 0.5).floor() as i32);
        let inside = f64::from(self.viewport.x) - TOL < px
            && px < f64::from(self.viewport.right()) + TOL
            && f64::from(self.viewport.y) - TOL < py
            && py < f64::from(self.viewport.bottom()) + TOL;
        (p, inside)
    }

    /// Pixel to world; exact inverse of `to_pixel` up to rounding.
    pub fn to_world(&self, p: Point) -> (f64, f64) {
        let wx = self.x_center
            + (f64::from(p.x) - f64::from(self.viewport.x) - f64::from(self.viewport.width() - 1) / 2.0)
                * self.x_scale;
        let wy = self.y_center
            - (f64::from(p.y) - f64::from(self.viewport.y) - f64::from(self.viewport.height() - 1) / 2.0)
                * self.y_scale;
        (wx, wy)
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

/// Smallest "nice" tick (`{1,2,5,10} x 10^k`) giving at least ~30 px per
/// tick at the given scale. Falls back to 10.0 for degenerate scales.
pub fn auto_tick(scale: f64) -> f64 {
    let candidates = [1.0, 2.0, 5.0, 10.0];
    let tick = 30.0 * scale;
    if !(tick > 0.0) {
        return 10.0;
    }
    let order = 10f64.powf(tick.log10().floor());
    for c in candidates {
        if tick <= c * order {
            return c * order;
        }
    }
    10.0
}

/// Tick for a time axis: calendar-meaningful second counts rather than
/// powers of ten, ~60 px per tick minimum. Saturates at 140 days.
pub fn auto_tick_time(scale: f64) -> f64 {
    const DAY: f64 = 86400.0;
    let candidates = [
        0.1,
        0.2,
        0.5,
        1.0,
        3.0,
        6.0,
        12.0,
        30.0,
        60.0,
        300.0,
        900.0,
        1800.0,
        3600.0,
        7200.0,
        10800.0,
        21600.0,
        43200.0,
        DAY,
        DAY * 2.0,
        DAY * 7.0,
        DAY * 14.0,
        DAY * 35.0,
        DAY * 70.0,
    ];
    let tick = 60.0 * scale;
    for c in candidates {
        if tick <= c {
            return c;
        }
    }
    DAY * 140.0
}
