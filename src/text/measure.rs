//! Text measurement.
//!
//! Widths come from real per-glyph font metrics when the font-loading
//! layer supplied them, and from a three-bucket heuristic (narrow 0.3em,
//! normal 0.6em, wide 1.0em) otherwise. Missing metrics are an expected
//! state, never an error.

use crate::models::common::PX_PER_PT;
use crate::models::font::{FontLibrary, FontMetrics};

/// Width multiplier applied to bold text, whatever the metrics source.
const BOLD_FACTOR: f64 = 1.05;

/// Line height fallback when no metrics exist (CSS default equivalent).
const DEFAULT_LINE_HEIGHT_RATIO: f64 = 1.2;

/// Ascender fallback when no metrics exist.
const DEFAULT_ASCENDER_RATIO: f64 = 1.0;

/// Heuristic width ratios relative to the font size.
const NARROW_RATIO: f64 = 0.3;
const NORMAL_RATIO: f64 = 0.6;
const WIDE_RATIO: f64 = 1.0;

/// Whether a code point falls in the CJK ranges treated as full-width,
/// per the Unicode Standard block assignments.
pub fn is_cjk(c: char) -> bool {
    let cp = c as u32;
    (0x3000..=0x9FFF).contains(&cp)       // CJK symbols, kana, unified ideographs
        || (0xF900..=0xFAFF).contains(&cp)   // compatibility ideographs
        || (0xFF01..=0xFF60).contains(&cp)   // full-width forms
        || (0x20000..=0x2A6DF).contains(&cp) // extension B
}

fn heuristic_ratio(c: char) -> f64 {
    if is_cjk(c) {
        return WIDE_RATIO;
    }
    match c {
        ' ' | '!' | ',' | '.' | ':' | ';' | 'i' | 'j' | 'l' | '1' | '|' | '\'' | '(' | ')'
        | '[' | ']' | '{' | '}' => NARROW_RATIO,
        _ => NORMAL_RATIO,
    }
}

fn metric_char_width(c: char, base_size_px: f64, metrics: &FontMetrics) -> f64 {
    if let Some(&advance) = metrics.glyph_advances.get(&c) {
        return advance / metrics.units_per_em * base_size_px;
    }
    let fallback = if is_cjk(c) {
        metrics.cjk_width
    } else {
        metrics.default_width
    };
    fallback / metrics.units_per_em * base_size_px
}

/// Measures text fragments and reports font vertical metrics.
///
/// The default implementation works from static metric tables; callers
/// can substitute any backend (a shaping engine, a canvas, ...) that
/// honors the same contract.
pub trait TextMeasurer {
    /// Estimated width of `text` in CSS pixels.
    fn measure_text_width(
        &self,
        text: &str,
        font_size_pt: f64,
        bold: bool,
        font_family: Option<&str>,
        font_family_ea: Option<&str>,
    ) -> f64;

    /// Natural line height as a ratio of the font size
    /// (`(ascender + |descender|) / unitsPerEm`), 1.2 without metrics.
    fn line_height_ratio(&self, font_family: Option<&str>, font_family_ea: Option<&str>) -> f64;

    /// Ascender as a ratio of the em size, for first-baseline placement;
    /// 1.0 without metrics.
    fn ascender_ratio(&self, font_family: Option<&str>, font_family_ea: Option<&str>) -> f64;
}

/// Metrics-backed measurer with heuristic fallback.
#[derive(Debug, Clone, Default)]
pub struct DefaultTextMeasurer {
    library: FontLibrary,
}

impl DefaultTextMeasurer {
    /// A measurer with no metric tables; every measurement takes the
    /// heuristic path.
    pub fn new() -> Self {
        DefaultTextMeasurer::default()
    }

    pub fn with_library(library: FontLibrary) -> Self {
        DefaultTextMeasurer { library }
    }

    fn resolved_metrics(
        &self,
        font_family: Option<&str>,
        font_family_ea: Option<&str>,
    ) -> Option<&FontMetrics> {
        self.library
            .get(font_family)
            .or_else(|| self.library.get(font_family_ea))
    }
}

impl TextMeasurer for DefaultTextMeasurer {
    fn measure_text_width(
        &self,
        text: &str,
        font_size_pt: f64,
        bold: bool,
        font_family: Option<&str>,
        font_family_ea: Option<&str>,
    ) -> f64 {
        let base_size_px = font_size_pt * PX_PER_PT;
        let latin_metrics = self.library.get(font_family);
        let ea_metrics = self.library.get(font_family_ea);

        let mut total = 0.0;
        for c in text.chars() {
            // CJK code points prefer the East-Asian table, then fall back
            // to the Latin one, then to the heuristic.
            let metrics = if is_cjk(c) {
                ea_metrics.or(latin_metrics)
            } else {
                latin_metrics
            };
            total += match metrics {
                Some(m) => metric_char_width(c, base_size_px, m),
                None => base_size_px * heuristic_ratio(c),
            };
        }

        if bold {
            total *= BOLD_FACTOR;
        }
        total
    }

    fn line_height_ratio(&self, font_family: Option<&str>, font_family_ea: Option<&str>) -> f64 {
        self.resolved_metrics(font_family, font_family_ea)
            .map(FontMetrics::line_height_ratio)
            .unwrap_or(DEFAULT_LINE_HEIGHT_RATIO)
    }

    fn ascender_ratio(&self, font_family: Option<&str>, font_family_ea: Option<&str>) -> f64 {
        self.resolved_metrics(font_family, font_family_ea)
            .map(FontMetrics::ascender_ratio)
            .unwrap_or(DEFAULT_ASCENDER_RATIO)
    }
}
