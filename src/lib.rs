//! Core style-resolution and text-layout engine for converting PPTX
//! presentations to vector output.
//!
//! This crate owns two subsystems: the cascading style resolution
//! pipeline (theme colors through color-map indirection and colorspace
//! transform chains, indexed style references, and the placeholder/
//! master/document text style cascade) and a script-aware text layout
//! engine (tokenization, metric or heuristic measurement, greedy
//! wrapping with forced character splits).
//!
//! Archive reading, XML parsing, relationship resolution, font file
//! loading, and markup emission are external collaborators: they hand
//! this crate already-parsed records (see [`models`]) and consume its
//! resolved colors, styles, and wrapped lines. Nothing here performs
//! I/O, and every operation degrades to a documented default instead of
//! failing — misses are reported through [`Diagnostics`].

pub mod color;
pub mod diagnostics;
pub mod errors;
pub mod models;
pub mod styles;
pub mod text;

pub use color::{apply_transforms, ColorResolver};
pub use diagnostics::{Diagnostic, DiagnosticCode, Diagnostics};
pub use errors::ColorParseError;
pub use models::colors::{ColorDefinition, ColorTransform, ResolvedColor};
pub use models::theme::Theme;
pub use styles::{
    apply_text_style_inheritance, resolve_shape_style, ResolvedStyleReference, TextStyleContext,
};
pub use text::{wrap_paragraph, DefaultTextMeasurer, TextMeasurer, WrappedLine};
