//! Color transform engine and theme color resolution.

pub mod resolver;
pub mod transforms;

pub use resolver::ColorResolver;
pub use transforms::apply_transforms;
