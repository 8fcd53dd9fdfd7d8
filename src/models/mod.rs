//! Data model records exchanged with the document-model, font-loading,
//! and rendering layers. All types are plain serde-derived records; the
//! collaborators hand them over already parsed, with numeric values
//! pre-converted from the format's integer-scaled encodings.

pub mod colors;
pub mod common;
pub mod effect;
pub mod fill;
pub mod font;
pub mod line;
pub mod shape;
pub mod text;
pub mod theme;
