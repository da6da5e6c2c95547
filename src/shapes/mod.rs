pub mod line_segment;
pub mod rect;

pub use line_segment::LineSegment;
pub use rect::{Edge, Rect};
