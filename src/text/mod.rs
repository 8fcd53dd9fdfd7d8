//! Text measurement and line wrapping.

pub mod measure;
pub mod wrap;

pub use measure::{DefaultTextMeasurer, TextMeasurer};
pub use wrap::{wrap_paragraph, LineSegment, WrappedLine};
