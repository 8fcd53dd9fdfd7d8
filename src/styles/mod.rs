//! Style resolution: shape style references against the theme's format
//! scheme, and the text style inheritance cascade.

pub mod inheritance;
pub mod reference;

pub use inheritance::{apply_text_style_inheritance, TextStyleContext};
pub use reference::{resolve_shape_style, ResolvedStyleReference};
