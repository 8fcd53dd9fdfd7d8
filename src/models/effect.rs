// src/models/effect.rs

use serde::{Deserialize, Serialize};

use crate::models::colors::ResolvedColor;

/// A single visual effect. One variant per effect kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Effect {
    /// Drop shadow cast outside the shape.
    OuterShadow {
        color: ResolvedColor,
        /// Blur radius in EMU.
        blur_radius: i64,
        /// Offset distance in EMU.
        distance: i64,
        /// Offset direction in degrees.
        direction: f64,
    },
    /// Shadow cast inside the shape edge.
    InnerShadow {
        color: ResolvedColor,
        blur_radius: i64,
        distance: i64,
        direction: f64,
    },
    /// Soft colored halo around the shape.
    Glow {
        color: ResolvedColor,
        /// Glow radius in EMU.
        radius: i64,
    },
}

/// An ordered list of effects applied to one shape, as stored in the
/// theme's effect style list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EffectList {
    #[serde(default)]
    pub effects: Vec<Effect>,
}
