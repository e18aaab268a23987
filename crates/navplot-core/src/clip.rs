// File: crates/navplot-core/src/clip.rs
// Summary: Cohen-Sutherland style outcodes and segment clipping against the viewport.

use crate::geometry::{Point, Viewport};

// area code :  5  4  6
//              1  0  2
//              9  8 10
pub const LEFT: u8 = 1;
pub const RIGHT: u8 = 2;
pub const ABOVE: u8 = 4;
pub const BELOW: u8 = 8;

/// Region code of `p` relative to `vp`; 0 means inside.
pub fn region_code(vp: &Viewport, p: Point) -> u8 {
    let h = if p.x < vp.left() {
        LEFT
    } else if p.x <= vp.right() {
        0
    } else {
        RIGHT
    };
    let v = if p.y < vp.top() {
        ABOVE
    } else if p.y <= vp.bottom() {
        0
    } else {
        BELOW
    };
    h + v
}

/// Clip the segment `p0`-`p1` to the viewport edges named by `area`
/// (the region code of `p0`). Edges are tried in left/right/above/below
/// order; the first intersection that lands within the rectangle's
/// other-axis bounds wins. A segment coincident along the relevant axis
/// cannot cross that edge and is skipped. Returns the moved endpoint, or
/// `None` when the segment does not actually enter the rectangle on any
/// of the named sides.
pub fn clip_to_edge(vp: &Viewport, p0: Point, area: u8, p1: Point) -> Option<Point> {
    let (xmin, xmax) = (vp.left(), vp.right());
    let (ymin, ymax) = (vp.top(), vp.bottom());
    // 64-bit intermediates: endpoints far outside the window would
    // overflow the i32 cross products.
    let (x0, y0) = (i64::from(p0.x), i64::from(p0.y));
    let (x1, y1) = (i64::from(p1.x), i64::from(p1.y));

    if area & LEFT != 0 && x1 != x0 {
        let y = y0 + (y1 - y0) * (i64::from(xmin) - x0) / (x1 - x0);
        if i64::from(ymin) <= y && y <= i64::from(ymax) {
            return Some(Point::new(xmin, y as i32));
        }
    }
    if area & RIGHT != 0 && x1 != x0 {
        let y = y0 + (y1 - y0) * (i64::from(xmax) - x0) / (x1 - x0);
        if i64::from(ymin) <= y && y <= i64::from(ymax) {
            return Some(Point::new(xmax, y as i32));
        }
    }
    if area & ABOVE != 0 && y1 != y0 {
        let x = x0 + (x1 - x0) * (i64::from(ymin) - y0) / (y1 - y0);
        if i64::from(xmin) <= x && x <= i64::from(xmax) {
            return Some(Point::new(x as i32, ymin));
        }
    }
    if area & BELOW != 0 && y1 != y0 {
        let x = x0 + (x1 - x0) * (i64::from(ymax) - y0) / (y1 - y0);
        if i64::from(xmin) <= x && x <= i64::from(xmax) {
            return Some(Point::new(x as i32, ymax));
        }
    }
    None
}
