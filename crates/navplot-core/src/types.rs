// File: crates/navplot-core/src/types.rs
// Summary: Shared types and constants (sizes, scale bounds, colors, styles).

/// Minimum viewport width/height in pixels.
pub const MIN_SIZE: i32 = 10;
/// Minimum scale factor (world units per pixel).
pub const MIN_SCALE: f64 = 2e-5;
/// Maximum scale factor (world units per pixel).
pub const MAX_SCALE: f64 = 1e7;
/// Maximum point count per polyline/polygon handed to a painter.
pub const MAX_POLY_POINTS: usize = 30000;
/// Pixel size of the origin dot drawn by grids and circle grids.
pub const ORIGIN_MARK_SIZE: i32 = 6;

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const SILVER: Self = Self::rgb(192, 192, 192);
}

/// Pen style for lines, outlines and grid strokes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineStyle {
    #[default]
    Solid,
    Dot,
    Dash,
    DashDot,
    DashDotDot,
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Center,
    Left,
    Right,
}

/// Vertical text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Center,
    Bottom,
    Top,
}
