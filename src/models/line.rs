// src/models/line.rs

use serde::{Deserialize, Serialize};

use crate::models::fill::Fill;

/// Line end cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineCap {
    Flat,
    Round,
    Square,
}

/// A shape outline: stroke width, paint, and dashing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    /// Stroke width in EMU.
    pub width: i64,
    /// Stroke paint. `Fill::None` renders no stroke.
    pub fill: Fill,
    /// Preset dash name (e.g. `"dash"`, `"sysDot"`); solid when absent.
    pub dash: Option<String>,
    pub cap: Option<LineCap>,
}
