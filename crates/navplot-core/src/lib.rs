// File: crates/navplot-core/src/lib.rs
// Summary: Core library entry point; exports the plot canvas API.

pub mod clip;
pub mod geometry;
pub mod graph;
pub mod mark;
pub mod painter;
pub mod theme;
pub mod time;
pub mod types;
pub mod view;

pub use geometry::{Point, Viewport};
pub use graph::{Graph, LabelPos};
pub use mark::MarkShape;
pub use painter::{DrawOp, Painter, RecordingPainter};
pub use theme::Theme;
pub use types::{Color, HAlign, LineStyle, VAlign};
pub use view::View;
