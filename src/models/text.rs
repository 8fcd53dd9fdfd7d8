// src/models/text.rs

use serde::{Deserialize, Serialize};

use crate::models::colors::ResolvedColor;

/// Paragraph alignment, using the format's attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    /// Left aligned.
    #[serde(rename = "l")]
    Left,
    /// Centered.
    #[serde(rename = "ctr")]
    Center,
    /// Right aligned.
    #[serde(rename = "r")]
    Right,
    /// Justified.
    #[serde(rename = "just")]
    Justified,
}

/// A hyperlink attached to a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hyperlink {
    pub url: String,
    pub tooltip: Option<String>,
}

/// Per-run character properties. Every field is optional: unset fields are
/// filled by the style inheritance cascade, and an already-set field is
/// never overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RunProperties {
    /// Font size in points.
    pub font_size: Option<f64>,
    /// Latin font family.
    pub font_family: Option<String>,
    /// East-Asian font family.
    pub font_family_ea: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub strikethrough: Option<bool>,
    pub color: Option<ResolvedColor>,
    /// Baseline offset as a ×100000-scaled percentage of the font size
    /// (positive = superscript).
    pub baseline: Option<i64>,
    pub hyperlink: Option<Hyperlink>,
}

/// One run of uniformly styled text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    pub text: String,
    #[serde(default)]
    pub properties: RunProperties,
}

/// Bullet marker for a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Bullet {
    /// Explicitly no bullet.
    None,
    /// Literal bullet character.
    Char { char: String },
    /// Auto-numbered bullet (`arabicPeriod`, `romanLcPeriod`, ...).
    AutoNum { scheme: String, start_at: i32 },
}

/// Per-paragraph properties. `level` is always known (it defaults to 0 in
/// the source format); the rest participate in the inheritance cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphProperties {
    /// Nesting level, 0..=8.
    #[serde(default)]
    pub level: u8,
    pub alignment: Option<Alignment>,
    /// Left margin in EMU.
    pub margin_left: Option<i64>,
    /// First-line indent in EMU (negative for hanging indents).
    pub indent: Option<i64>,
    /// Line spacing as a ×100000-scaled percentage of single spacing.
    pub line_spacing: Option<i64>,
    pub bullet: Option<Bullet>,
    /// Paragraph-level run defaults (`pPr`'s own `defRPr`), consulted for
    /// this paragraph's runs before any list-style source.
    pub default_run_properties: Option<DefaultRunProperties>,
}

/// One paragraph: its runs and paragraph-level properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    #[serde(default)]
    pub runs: Vec<TextRun>,
    #[serde(default)]
    pub properties: ParagraphProperties,
}

/// Vertical anchoring of text within its body box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    #[serde(rename = "t")]
    Top,
    #[serde(rename = "ctr")]
    Center,
    #[serde(rename = "b")]
    Bottom,
}

/// Wrapping mode for a text body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextWrap {
    /// Wrap lines within the body width.
    Square,
    /// Never wrap; each paragraph renders as a single line.
    None,
}

impl Default for TextWrap {
    fn default() -> Self {
        TextWrap::Square
    }
}

/// Body-level text properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyProperties {
    pub anchor: TextAnchor,
    /// Insets in EMU.
    pub margin_left: i64,
    pub margin_right: i64,
    pub margin_top: i64,
    pub margin_bottom: i64,
    #[serde(default)]
    pub wrap: TextWrap,
}

impl Default for BodyProperties {
    fn default() -> Self {
        // Standard body insets: 0.1" left/right, 0.05" top/bottom.
        BodyProperties {
            anchor: TextAnchor::Top,
            margin_left: 91_440,
            margin_right: 91_440,
            margin_top: 45_720,
            margin_bottom: 45_720,
            wrap: TextWrap::Square,
        }
    }
}

/// The text content of a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBody {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
    #[serde(default)]
    pub body_properties: BodyProperties,
}

/// Default run properties carried by a list-style level (`defRPr`).
/// All fields optional; only unset run fields are filled from here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DefaultRunProperties {
    /// Font size in points.
    pub font_size: Option<f64>,
    /// Latin font family; may be a theme token (`+mj-lt`, `+mn-lt`).
    pub font_family: Option<String>,
    /// East-Asian font family; may be a theme token (`+mj-ea`, `+mn-ea`).
    pub font_family_ea: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub strikethrough: Option<bool>,
    pub color: Option<ResolvedColor>,
}

/// Paragraph-level defaults for one list-style level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DefaultParagraphStyle {
    pub alignment: Option<Alignment>,
    /// Left margin in EMU.
    pub margin_left: Option<i64>,
    /// First-line indent in EMU.
    pub indent: Option<i64>,
    pub default_run_properties: Option<DefaultRunProperties>,
}

/// A list style: up to 9 per-level records (levels 0..=8) plus one
/// paragraph-wide default consulted when the level record is absent.
///
/// Used for the document-wide default text style, the master's named
/// styles, and per-placeholder list styles on layouts and masters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextStyleLevels {
    pub default_paragraph: Option<DefaultParagraphStyle>,
    /// Sparse level records; index 0 = level 1 in the source markup.
    #[serde(default)]
    pub levels: Vec<Option<DefaultParagraphStyle>>,
}

impl TextStyleLevels {
    /// The record for nesting level `level`, if one is present.
    pub fn level(&self, level: u8) -> Option<&DefaultParagraphStyle> {
        self.levels.get(level as usize)?.as_ref()
    }
}

/// The master's named styles, selected by placeholder category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NamedTextStyles {
    pub title_style: Option<TextStyleLevels>,
    pub body_style: Option<TextStyleLevels>,
    pub other_style: Option<TextStyleLevels>,
}

/// Semantic role of a placeholder shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaceholderCategory {
    Title,
    CtrTitle,
    Body,
    SubTitle,
    Obj,
    Dt,
    Ftr,
    SldNum,
    Pic,
    Chart,
    Tbl,
    Media,
    /// Any category this model does not name explicitly.
    #[serde(other)]
    Other,
}

/// List style attached to one placeholder on a layout or master, matched
/// against shapes by `(category, index)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderStyleInfo {
    pub category: PlaceholderCategory,
    pub index: Option<u32>,
    #[serde(default)]
    pub levels: TextStyleLevels,
}
