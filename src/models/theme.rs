// src/models/theme.rs

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::colors::{ColorSchemeKey, SchemeColorValue};
use crate::models::effect::EffectList;
use crate::models::fill::Fill;
use crate::models::line::Outline;

/// The 12 named theme colors, keyed by scheme key, each a `#RRGGBB` hex
/// string. Immutable per document theme.
pub type ColorScheme = IndexMap<ColorSchemeKey, String>;

/// Per-master indirection from semantic roles (`bg1`, `tx1`, ...) to
/// palette keys, letting a master remap e.g. "background 1" to either the
/// light or the dark entry. Roles missing from the map are unresolvable
/// (the resolver reports the miss and yields nothing).
pub type ColorMap = IndexMap<SchemeColorValue, ColorSchemeKey>;

/// The theme's major/minor font pairing for Latin and East-Asian scripts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontScheme {
    /// Major (heading) Latin font.
    pub major_font: String,
    /// Minor (body) Latin font.
    pub minor_font: String,
    /// Major East-Asian font, when the theme declares one.
    pub major_font_ea: Option<String>,
    /// Minor East-Asian font, when the theme declares one.
    pub minor_font_ea: Option<String>,
}

/// The theme's format scheme: indexed style template lists referenced by
/// shape style references.
///
/// Indexing is 1-based from the reference side; index 0 means "no style"
/// and indices >= 1000 route to `bg_fill_styles` at position `idx - 1000`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FormatScheme {
    #[serde(default)]
    pub fill_styles: Vec<Fill>,
    #[serde(default)]
    pub line_styles: Vec<Outline>,
    #[serde(default)]
    pub effect_styles: Vec<EffectList>,
    #[serde(default)]
    pub bg_fill_styles: Vec<Fill>,
}

/// A document theme: palette, fonts, and style templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub color_scheme: ColorScheme,
    pub font_scheme: FontScheme,
    #[serde(default)]
    pub format_scheme: FormatScheme,
}

/// The standard color map most masters carry (`bg1 -> lt1`, `tx1 -> dk1`,
/// `bg2 -> lt2`, `tx2 -> dk2`, accents and link colors mapped to
/// themselves).
pub fn default_color_map() -> ColorMap {
    IndexMap::from([
        (SchemeColorValue::Bg1, ColorSchemeKey::Lt1),
        (SchemeColorValue::Tx1, ColorSchemeKey::Dk1),
        (SchemeColorValue::Bg2, ColorSchemeKey::Lt2),
        (SchemeColorValue::Tx2, ColorSchemeKey::Dk2),
        (SchemeColorValue::Accent1, ColorSchemeKey::Accent1),
        (SchemeColorValue::Accent2, ColorSchemeKey::Accent2),
        (SchemeColorValue::Accent3, ColorSchemeKey::Accent3),
        (SchemeColorValue::Accent4, ColorSchemeKey::Accent4),
        (SchemeColorValue::Accent5, ColorSchemeKey::Accent5),
        (SchemeColorValue::Accent6, ColorSchemeKey::Accent6),
        (SchemeColorValue::Hlink, ColorSchemeKey::Hlink),
        (SchemeColorValue::FolHlink, ColorSchemeKey::FolHlink),
    ])
}
