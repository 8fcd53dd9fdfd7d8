// src/models/colors.rs

use serde::{Deserialize, Serialize};

/// A fully resolved color: an `#RRGGBB` hex string plus an opacity in
/// `[0.0, 1.0]`. Resolution never yields a partially applied color — by the
/// time a `ResolvedColor` exists, every transform on it has been applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedColor {
    /// Lowercase `#rrggbb` hex string.
    pub hex: String,
    /// Opacity, 0.0 (transparent) to 1.0 (opaque).
    pub alpha: f64,
}

impl ResolvedColor {
    /// Fully opaque color from a hex string.
    pub fn opaque(hex: impl Into<String>) -> Self {
        ResolvedColor {
            hex: hex.into(),
            alpha: 1.0,
        }
    }
}

/// One colorspace operation from a color definition's transform chain.
///
/// Values use the format's ×100000-scaled integer encoding (`50000` = 50%).
/// The chain is ordered: each operation consumes the previous operation's
/// output, so `[LumMod(75000), LumOff(25000)]` differs from the reverse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum ColorTransform {
    /// Multiplies the HSL lightness channel by `value / 100000`.
    LumMod(i64),
    /// Adds `value / 100000` to the HSL lightness channel.
    LumOff(i64),
    /// Blends each RGB channel toward white by `value / 100000`.
    Tint(i64),
    /// Blends each RGB channel toward black: `channel * value / 100000`.
    Shade(i64),
    /// Sets opacity to `value / 100000`, replacing the previous alpha.
    Alpha(i64),
}

/// The key of an entry in the theme's [`ColorScheme`](crate::models::theme::ColorScheme).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorSchemeKey {
    /// First dark color.
    Dk1,
    /// First light color.
    Lt1,
    /// Second dark color.
    Dk2,
    /// Second light color.
    Lt2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    /// Hyperlink color.
    Hlink,
    /// Followed hyperlink color.
    FolHlink,
}

/// A scheme color name as it appears on a `schemeClr` node.
///
/// This is a superset of [`ColorSchemeKey`]: the four semantic roles
/// (`bg1`, `tx1`, `bg2`, `tx2`) go through the master's color map before
/// reaching the palette, and `phClr` is the placeholder slot only
/// meaningful inside a theme style template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemeColorValue {
    Bg1,
    Tx1,
    Bg2,
    Tx2,
    Dk1,
    Lt1,
    Dk2,
    Lt2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Hlink,
    FolHlink,
    /// Placeholder color; substituted by style references, unresolvable
    /// on its own.
    PhClr,
}

impl SchemeColorValue {
    /// The direct palette key this name addresses, if it is one
    /// (i.e. not a remappable role and not `phClr`).
    pub fn as_scheme_key(self) -> Option<ColorSchemeKey> {
        match self {
            SchemeColorValue::Dk1 => Some(ColorSchemeKey::Dk1),
            SchemeColorValue::Lt1 => Some(ColorSchemeKey::Lt1),
            SchemeColorValue::Dk2 => Some(ColorSchemeKey::Dk2),
            SchemeColorValue::Lt2 => Some(ColorSchemeKey::Lt2),
            SchemeColorValue::Accent1 => Some(ColorSchemeKey::Accent1),
            SchemeColorValue::Accent2 => Some(ColorSchemeKey::Accent2),
            SchemeColorValue::Accent3 => Some(ColorSchemeKey::Accent3),
            SchemeColorValue::Accent4 => Some(ColorSchemeKey::Accent4),
            SchemeColorValue::Accent5 => Some(ColorSchemeKey::Accent5),
            SchemeColorValue::Accent6 => Some(ColorSchemeKey::Accent6),
            SchemeColorValue::Hlink => Some(ColorSchemeKey::Hlink),
            SchemeColorValue::FolHlink => Some(ColorSchemeKey::FolHlink),
            _ => None,
        }
    }
}

/// The color source of a [`ColorDefinition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorChoice {
    /// Direct sRGB value, six hex digits without the leading `#`
    /// (e.g. `"4472C4"`).
    Srgb { value: String },
    /// Theme scheme color reference, resolved through the color map.
    Scheme { value: SchemeColorValue },
    /// System color. The writer records the concrete value it last used
    /// in `lastClr`; absent, the color falls back to black.
    System { last_color: Option<String> },
}

/// An unresolved color as parsed from the document: a source plus an
/// ordered chain of colorspace transforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorDefinition {
    pub choice: ColorChoice,
    /// Transform chain in document order. May be empty.
    #[serde(default)]
    pub transforms: Vec<ColorTransform>,
}

impl ColorDefinition {
    /// A direct sRGB color with no transforms.
    pub fn srgb(value: impl Into<String>) -> Self {
        ColorDefinition {
            choice: ColorChoice::Srgb {
                value: value.into(),
            },
            transforms: Vec::new(),
        }
    }

    /// A scheme color reference with no transforms.
    pub fn scheme(value: SchemeColorValue) -> Self {
        ColorDefinition {
            choice: ColorChoice::Scheme { value },
            transforms: Vec::new(),
        }
    }
}
