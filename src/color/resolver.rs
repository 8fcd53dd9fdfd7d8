//! Theme color resolution (ECMA-376 §20.1.6).
//!
//! Three color sources exist: direct sRGB values, scheme color references
//! (resolved through the master's color map into the theme palette), and
//! system colors (which carry the writer's last observed value). Whatever
//! the source, the node's transform chain is applied to the base color
//! before it is returned.

use crate::color::transforms::{apply_transforms, Rgb};
use crate::diagnostics::{DiagnosticCode, Diagnostics};
use crate::models::colors::{
    ColorChoice, ColorDefinition, ColorSchemeKey, ResolvedColor, SchemeColorValue,
};
use crate::models::theme::{ColorMap, ColorScheme};

/// Fallback hex for system colors without a recorded `lastClr` and for
/// literal values that fail to parse.
const FALLBACK_HEX: &str = "#000000";

/// Resolves color definitions against one master's color map and the
/// document theme's palette.
#[derive(Debug, Clone)]
pub struct ColorResolver<'a> {
    color_scheme: &'a ColorScheme,
    color_map: &'a ColorMap,
}

impl<'a> ColorResolver<'a> {
    pub fn new(color_scheme: &'a ColorScheme, color_map: &'a ColorMap) -> Self {
        ColorResolver {
            color_scheme,
            color_map,
        }
    }

    /// Resolves a color definition to a final color.
    ///
    /// Returns `None` when no resolvable color source exists — an
    /// unmapped scheme role, a palette key with no entry, or a bare
    /// placeholder color — so callers can distinguish "explicitly no
    /// fill" from "fell through to resolve nothing" and apply their own
    /// fallback. Each miss is recorded in `diag`.
    pub fn resolve(
        &self,
        def: &ColorDefinition,
        diag: &mut Diagnostics,
    ) -> Option<ResolvedColor> {
        let base = match &def.choice {
            ColorChoice::Srgb { value } => ResolvedColor::opaque(normalize_hex(value, diag)),
            ColorChoice::System { last_color } => {
                let hex = match last_color {
                    Some(value) => normalize_hex(value, diag),
                    None => FALLBACK_HEX.to_string(),
                };
                ResolvedColor::opaque(hex)
            }
            ColorChoice::Scheme { value } => {
                let hex = self.resolve_scheme_value(*value, diag)?;
                ResolvedColor::opaque(hex)
            }
        };

        Some(apply_transforms(base, &def.transforms))
    }

    /// Scheme name → color map → palette key → hex.
    fn resolve_scheme_value(
        &self,
        value: SchemeColorValue,
        diag: &mut Diagnostics,
    ) -> Option<String> {
        if value == SchemeColorValue::PhClr {
            diag.report(
                DiagnosticCode::PlaceholderColorOutOfContext,
                "phClr referenced outside a style reference",
                "schemeClr",
            );
            return None;
        }

        // Map indirection first: a master may remap even names that are
        // themselves palette keys (e.g. accent1 -> accent3).
        let key = match self.color_map.get(&value) {
            Some(key) => *key,
            None => match value.as_scheme_key() {
                Some(key) => key,
                None => {
                    diag.report(
                        DiagnosticCode::UnmappedColorRole,
                        format!("role {value:?} has no color-map entry"),
                        "schemeClr",
                    );
                    return None;
                }
            },
        };

        match self.color_scheme.get(&key) {
            Some(hex) => Some(normalize_hex(hex, diag)),
            None => {
                diag.report(
                    DiagnosticCode::MissingSchemeEntry,
                    format!("palette has no entry for {key:?}"),
                    "schemeClr",
                );
                None
            }
        }
    }
}

/// Canonicalizes a hex value to lowercase `#rrggbb`, defaulting to black
/// (with a diagnostic) when it does not parse.
fn normalize_hex(value: &str, diag: &mut Diagnostics) -> String {
    match Rgb::parse(value) {
        Ok(rgb) => rgb.to_hex(),
        Err(err) => {
            diag.report(
                DiagnosticCode::InvalidColorValue,
                err.to_string(),
                "color value",
            );
            FALLBACK_HEX.to_string()
        }
    }
}
