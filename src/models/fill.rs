// src/models/fill.rs

use serde::{Deserialize, Serialize};

use crate::models::colors::ResolvedColor;

/// A shape or background fill. One variant per fill kind so missing
/// handling shows up as a non-exhaustive match at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Fill {
    /// Single flat color.
    Solid { color: ResolvedColor },
    /// Gradient along `angle` (degrees, clockwise from the x axis).
    Gradient { stops: Vec<GradientStop>, angle: f64 },
    /// Preset two-color pattern.
    Pattern {
        preset: String,
        foreground_color: ResolvedColor,
        background_color: ResolvedColor,
    },
    /// Image fill; the payload is handled by the rendering layer.
    Image {
        image_data: String,
        mime_type: String,
    },
    /// Explicitly no fill (distinct from "no fill resolved").
    None,
}

/// One gradient stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientStop {
    /// Position along the gradient axis, 0.0 to 1.0.
    pub position: f64,
    pub color: ResolvedColor,
}
