//! Unit constants and conversions shared across the model and layout code.
//!
//! The document's native coordinate unit is the EMU (English Metric Unit,
//! 914,400 per inch). Font sizes arrive in points; text measurement works
//! in CSS pixels at the conventional 96 DPI.

/// Points per inch.
pub const PT_PER_INCH: f64 = 72.0;

/// EMU (English Metric Units) per inch.
pub const EMU_PER_INCH: f64 = 914_400.0;

/// EMU per point (12,700).
pub const EMU_PER_PT: f64 = EMU_PER_INCH / PT_PER_INCH;

/// CSS pixels per point at 96 DPI.
pub const PX_PER_PT: f64 = 96.0 / 72.0;

/// Divisor for the format's ×100000-scaled percentage encoding
/// (e.g. `50000` means 50%).
pub const PERCENT_SCALE: f64 = 100_000.0;

/// Converts EMU to points.
pub fn emu_to_pt(emu: i64) -> f64 {
    emu as f64 / EMU_PER_PT
}

/// Converts points to CSS pixels (96 DPI).
pub fn pt_to_px(pt: f64) -> f64 {
    pt * PX_PER_PT
}

/// Converts a ×100000-scaled integer percentage to a fraction.
/// Values above 100000 map above 1.0; callers clamp where the operation
/// requires it.
pub fn percent_to_fraction(value: i64) -> f64 {
    value as f64 / PERCENT_SCALE
}
