// File: crates/navplot-core/src/mark.rs
// Summary: Mark shapes, their local point tables, and pixel-space rotation.

use crate::geometry::Point;

/// Marker shape drawn at a data point.
///
/// Dot/Circle/Rect/Cross are rotation-invariant and drawn directly;
/// the rest are small polylines rotated about the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkShape {
    Dot,
    Circle,
    Rect,
    Cross,
    Line,
    Plus,
    Arrow,
    HScale,
    VScale,
    Compass,
}

/// Rotate `pts` (mark-local pixel offsets) by `rot_deg` about `center`.
/// Pixel y grows downward, so the y term is negated to keep positive
/// angles counter-clockwise on screen.
pub fn rotate_points(pts: &[Point], center: Point, rot_deg: f64) -> Vec<Point> {
    let (sin_r, cos_r) = rot_deg.to_radians().sin_cos();
    pts.iter()
        .map(|p| {
            let x = f64::from(p.x);
            let y = f64::from(p.y);
            Point::new(
                center.x + (x * cos_r - y * sin_r + 0.5).floor() as i32,
                center.y - (x * sin_r + y * cos_r + 0.5).floor() as i32,
            )
        })
        .collect()
}

/// Local outline for the rotatable shapes, sized in pixels. Returns `None`
/// for the shapes drawn directly (dot, circle, rect, cross).
pub(crate) fn shape_points(shape: MarkShape, size: i32) -> Option<Vec<Point>> {
    let s = size / 2;
    match shape {
        MarkShape::Line => Some(vec![Point::new(-s, 0), Point::new(s, 0)]),
        MarkShape::Plus => {
            const XS: [i32; 5] = [0, 0, 0, 1, -1];
            const YS: [i32; 5] = [1, -1, 0, 0, 0];
            Some((0..5).map(|i| Point::new(XS[i] * s, YS[i] * s)).collect())
        }
        MarkShape::Arrow => {
            // shaft plus a two-segment head at the tip
            const XS: [i32; 4] = [-7, 0, -7, 0];
            const YS: [i32; 4] = [2, 0, -2, 0];
            let mut pts = vec![Point::new(-s, 0), Point::new(s, 0)];
            pts.extend((0..4).map(|i| Point::new(s + XS[i], YS[i])));
            Some(pts)
        }
        MarkShape::HScale | MarkShape::VScale => {
            const XS: [i32; 6] = [-1, -1, -1, 1, 1, 1];
            const YS: [i32; 6] = [-1, 1, 0, 0, -1, 1];
            Some((0..6)
                .map(|i| {
                    let x = XS[i] * s;
                    let y = YS[i] * 5;
                    if shape == MarkShape::HScale {
                        Point::new(x, y)
                    } else {
                        Point::new(y, x)
                    }
                })
                .collect())
        }
        MarkShape::Compass => {
            const XS: [i32; 7] = [3, -4, 0, 0, 0, -8, 8];
            const YS: [i32; 7] = [0, 5, 20, -20, -10, -10, -10];
            Some((0..7).map(|i| Point::new(XS[i] * size / 40, YS[i] * size / 40)).collect())
        }
        MarkShape::Dot | MarkShape::Circle | MarkShape::Rect | MarkShape::Cross => None,
    }
}
