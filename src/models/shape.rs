// src/models/shape.rs

use serde::{Deserialize, Serialize};

use crate::models::colors::ColorDefinition;
use crate::models::text::{PlaceholderCategory, TextBody};

/// Placement of an element on the slide, in EMU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    /// Rotation in degrees, clockwise.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub flip_h: bool,
    #[serde(default)]
    pub flip_v: bool,
}

/// Shape geometry: a named preset or caller-supplied custom outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Geometry {
    /// Preset geometry (`rect`, `ellipse`, `roundRect`, ...).
    Preset { name: String },
    /// Custom geometry; the path data stays opaque to this core.
    Custom { path: String },
}

/// One `fillRef`/`lnRef`/`effectRef` entry: a 1-based index into the
/// corresponding format-scheme list plus an optional color that replaces
/// the template's placeholder color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StyleMatrixRef {
    /// 0 = no style; 1..=999 = primary list; >= 1000 = background-fill
    /// list at position `idx - 1000`.
    #[serde(default)]
    pub idx: u32,
    pub color: Option<ColorDefinition>,
}

/// Which theme font collection a font reference selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontCollectionIndex {
    None,
    Major,
    Minor,
}

/// A `fontRef` entry: theme font selection plus an optional color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontRef {
    pub idx: Option<FontCollectionIndex>,
    pub color: Option<ColorDefinition>,
}

/// A shape's style reference block ("use style N from the theme").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StyleReference {
    pub fill_ref: Option<StyleMatrixRef>,
    pub line_ref: Option<StyleMatrixRef>,
    pub effect_ref: Option<StyleMatrixRef>,
    pub font_ref: Option<FontRef>,
}

/// A shape element: geometry, optional placeholder identity, optional
/// style reference, optional text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeElement {
    #[serde(default)]
    pub transform: Transform,
    pub geometry: Option<Geometry>,
    /// Placeholder category when this shape fills a placeholder.
    pub placeholder_category: Option<PlaceholderCategory>,
    /// Placeholder index pairing this shape with layout/master styles.
    pub placeholder_index: Option<u32>,
    pub style: Option<StyleReference>,
    pub text_body: Option<TextBody>,
}

/// A group of nested elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupElement {
    #[serde(default)]
    pub transform: Transform,
    #[serde(default)]
    pub children: Vec<SlideElement>,
}

/// One element of a slide's shape tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum SlideElement {
    Shape(ShapeElement),
    Group(GroupElement),
}
