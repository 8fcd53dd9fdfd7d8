// src/models/font.rs

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Measured metrics for one font family, scaled in font units.
///
/// Supplied by the font-loading layer; absence is a valid, expected state
/// that routes measurement onto the heuristic path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontMetrics {
    /// Font units per em square (commonly 1000 or 2048).
    pub units_per_em: f64,
    /// Ascender height in font units.
    pub ascender: f64,
    /// Descender depth in font units (typically negative).
    pub descender: f64,
    /// Advance width used for glyphs absent from `glyph_advances`.
    pub default_width: f64,
    /// Advance width used for CJK glyphs absent from `glyph_advances`.
    pub cjk_width: f64,
    /// Per-glyph advance widths in font units, keyed by character.
    #[serde(default)]
    pub glyph_advances: IndexMap<char, f64>,
}

impl FontMetrics {
    /// Natural line height as a ratio of the em size:
    /// `(ascender + |descender|) / unitsPerEm`.
    pub fn line_height_ratio(&self) -> f64 {
        (self.ascender + self.descender.abs()) / self.units_per_em
    }

    /// Ascender as a ratio of the em size, used for first-baseline
    /// placement.
    pub fn ascender_ratio(&self) -> f64 {
        self.ascender / self.units_per_em
    }
}

/// Metric tables keyed by family name. Lookup is case-insensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", transparent)]
pub struct FontLibrary {
    families: IndexMap<String, FontMetrics>,
}

impl FontLibrary {
    pub fn new() -> Self {
        FontLibrary::default()
    }

    /// Registers metrics under `family`. Later registrations replace
    /// earlier ones for the same (case-insensitive) name.
    pub fn insert(&mut self, family: impl Into<String>, metrics: FontMetrics) {
        self.families.insert(family.into().to_lowercase(), metrics);
    }

    /// Looks up metrics for an optional family name.
    pub fn get(&self, family: Option<&str>) -> Option<&FontMetrics> {
        self.families.get(&family?.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}
