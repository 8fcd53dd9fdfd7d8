//! Colorspace transform chain (ECMA-376 §20.1.2.3).
//!
//! `lumMod`/`lumOff` operate on the HSL lightness channel; `tint` and
//! `shade` blend linearly in RGB toward white and black; `alpha` replaces
//! the opacity. The mixed-colorspace behavior matches the reference
//! output and is kept as observed. Operations apply strictly in chain
//! order: each one consumes the previous operation's output.
//!
//! RGB ↔ HSL conversion follows the W3C CSS Color Module Level 3 §4.2.4
//! algorithm, which round-trips pure hues exactly (so `lumMod 100%` is an
//! identity).

use crate::errors::ColorParseError;
use crate::models::colors::{ColorTransform, ResolvedColor};
use crate::models::common::percent_to_fraction;

/// Applies an ordered transform chain to a base color.
///
/// Never fails: a hex value that does not parse passes through the
/// RGB-based operations unchanged (alpha operations still apply).
pub fn apply_transforms(base: ResolvedColor, chain: &[ColorTransform]) -> ResolvedColor {
    chain.iter().fold(base, apply_one)
}

fn apply_one(color: ResolvedColor, op: &ColorTransform) -> ResolvedColor {
    if let ColorTransform::Alpha(v) = *op {
        return ResolvedColor {
            alpha: percent_to_fraction(v).clamp(0.0, 1.0),
            ..color
        };
    }

    let rgb = match Rgb::parse(&color.hex) {
        Ok(rgb) => rgb,
        Err(_) => return color,
    };

    let out = match *op {
        ColorTransform::LumMod(v) => {
            let factor = percent_to_fraction(v);
            adjust_lightness(rgb, |l| l * factor)
        }
        ColorTransform::LumOff(v) => {
            let offset = percent_to_fraction(v);
            adjust_lightness(rgb, |l| l + offset)
        }
        ColorTransform::Tint(v) => {
            let amount = percent_to_fraction(v);
            rgb.map(|c| c + (255.0 - c) * amount)
        }
        ColorTransform::Shade(v) => {
            let amount = percent_to_fraction(v);
            rgb.map(|c| c * amount)
        }
        ColorTransform::Alpha(_) => unreachable!("handled above"),
    };

    ResolvedColor {
        hex: out.to_hex(),
        alpha: color.alpha,
    }
}

fn adjust_lightness(rgb: Rgb, f: impl Fn(f64) -> f64) -> Rgb {
    let (h, s, l) = rgb.to_hsl();
    let new_l = f(l).clamp(0.0, 1.0);
    Rgb::from_hsl(h, s, new_l)
}

/// An 8-bit RGB triple with hex parsing/formatting and HSL conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses `#RRGGBB` or `RRGGBB`.
    pub fn parse(hex: &str) -> Result<Rgb, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::BadLength(hex.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigits(hex.to_string()));
        }
        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidDigits(hex.to_string()))
        };
        Ok(Rgb {
            r: component(0..2)?,
            g: component(2..4)?,
            b: component(4..6)?,
        })
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Applies `f` to each channel in 0..=255 space, clamping the result.
    fn map(self, f: impl Fn(f64) -> f64) -> Rgb {
        let apply = |c: u8| f(c as f64).round().clamp(0.0, 255.0) as u8;
        Rgb {
            r: apply(self.r),
            g: apply(self.g),
            b: apply(self.b),
        }
    }

    /// RGB → HSL, all channels in [0, 1].
    fn to_hsl(self) -> (f64, f64, f64) {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };

        (h, s, l)
    }

    /// HSL → RGB, hue/saturation/lightness in [0, 1].
    fn from_hsl(h: f64, s: f64, l: f64) -> Rgb {
        if s == 0.0 {
            let v = (l * 255.0).round().clamp(0.0, 255.0) as u8;
            return Rgb { r: v, g: v, b: v };
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let channel = |t: f64| (hue_to_rgb(p, q, t) * 255.0).round().clamp(0.0, 255.0) as u8;

        Rgb {
            r: channel(h + 1.0 / 3.0),
            g: channel(h),
            b: channel(h - 1.0 / 3.0),
        }
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gray(hex: &str) -> ResolvedColor {
        ResolvedColor::opaque(hex)
    }

    fn apply(hex: &str, chain: &[ColorTransform]) -> ResolvedColor {
        apply_transforms(gray(hex), chain)
    }

    #[test]
    fn empty_chain_is_identity() {
        let c = apply("#ff0000", &[]);
        assert_eq!(c, ResolvedColor::opaque("#ff0000"));
    }

    #[test]
    fn lum_mod_50_darkens_gray() {
        // #808080 -> HSL(0, 0, 0.502) -> l = 0.251 -> #404040
        let c = apply("#808080", &[ColorTransform::LumMod(50_000)]);
        assert_eq!(c.hex, "#404040");
        assert_eq!(c.alpha, 1.0);
    }

    #[test]
    fn lum_mod_100_is_identity_for_primaries_and_extremes() {
        for hex in [
            "#000000", "#ffffff", "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#00ffff",
            "#ff00ff", "#808080",
        ] {
            let c = apply(hex, &[ColorTransform::LumMod(100_000)]);
            assert_eq!(c.hex, hex, "lumMod 100% must not change {hex}");
        }
    }

    #[test]
    fn lum_off_brightens_black() {
        let c = apply("#000000", &[ColorTransform::LumOff(50_000)]);
        assert_eq!(c.hex, "#808080");
    }

    #[test]
    fn lum_mod_then_off_brightens_gray() {
        // l = 0.502 * 0.75 + 0.25 = 0.6265, brighter than the input.
        let c = apply(
            "#808080",
            &[ColorTransform::LumMod(75_000), ColorTransform::LumOff(25_000)],
        );
        assert_ne!(c.hex, "#808080");
        let rgb = Rgb::parse(&c.hex).unwrap();
        assert!(rgb.r > 0x80, "expected brighter gray, got {}", c.hex);
        assert_eq!(rgb.r, rgb.g);
        assert_eq!(rgb.g, rgb.b);
    }

    #[test]
    fn chain_order_is_significant() {
        // l*0.75 + 0.25 differs from (l + 0.25)*0.75 away from the fixed
        // point, so the two orders must produce different colors.
        let forward = apply(
            "#336699",
            &[ColorTransform::LumMod(75_000), ColorTransform::LumOff(25_000)],
        );
        let reverse = apply(
            "#336699",
            &[ColorTransform::LumOff(25_000), ColorTransform::LumMod(75_000)],
        );
        assert_ne!(forward.hex, reverse.hex);
    }

    #[test]
    fn lightness_clamps_high_and_low() {
        let high = apply(
            "#ffffff",
            &[ColorTransform::LumMod(200_000), ColorTransform::LumOff(50_000)],
        );
        assert_eq!(high.hex, "#ffffff");

        let low = apply("#808080", &[ColorTransform::LumMod(0)]);
        assert_eq!(low.hex, "#000000");
    }

    #[test]
    fn tint_blends_toward_white() {
        let c = apply("#ff0000", &[ColorTransform::Tint(50_000)]);
        assert_eq!(c.hex, "#ff8080");

        let full = apply("#000000", &[ColorTransform::Tint(100_000)]);
        assert_eq!(full.hex, "#ffffff");

        let zero = apply("#ff0000", &[ColorTransform::Tint(0)]);
        assert_eq!(zero.hex, "#ff0000");

        let white = apply("#ffffff", &[ColorTransform::Tint(50_000)]);
        assert_eq!(white.hex, "#ffffff");
    }

    #[test]
    fn shade_blends_toward_black() {
        let c = apply("#ff0000", &[ColorTransform::Shade(50_000)]);
        assert_eq!(c.hex, "#800000");

        let zero = apply("#4472c4", &[ColorTransform::Shade(0)]);
        assert_eq!(zero.hex, "#000000");

        let black = apply("#000000", &[ColorTransform::Shade(50_000)]);
        assert_eq!(black.hex, "#000000");
    }

    #[test]
    fn alpha_replaces_opacity() {
        let c = apply("#ff0000", &[ColorTransform::Alpha(50_000)]);
        assert_eq!(c.hex, "#ff0000");
        assert_eq!(c.alpha, 0.5);

        // A later alpha replaces, not multiplies.
        let c = apply(
            "#ff0000",
            &[ColorTransform::Alpha(50_000), ColorTransform::Alpha(25_000)],
        );
        assert_eq!(c.alpha, 0.25);
    }

    #[test]
    fn tint_after_shade_sees_shaded_output() {
        // shade 50% then tint 50%: 255*0.5 = 128, 128 + (255-128)*0.5 = 192.
        let c = apply(
            "#ffffff",
            &[ColorTransform::Shade(50_000), ColorTransform::Tint(50_000)],
        );
        assert_eq!(c.hex, "#c0c0c0");
    }

    #[test]
    fn unparseable_hex_passes_through_rgb_ops() {
        let odd = ResolvedColor::opaque("not-a-color");
        let c = apply_transforms(odd.clone(), &[ColorTransform::Tint(50_000)]);
        assert_eq!(c, odd);

        let c = apply_transforms(odd, &[ColorTransform::Alpha(40_000)]);
        assert_eq!(c.alpha, 0.4);
    }

    #[test]
    fn rgb_parse_rejects_bad_input() {
        assert!(Rgb::parse("#12345").is_err());
        assert!(Rgb::parse("12345G").is_err());
        assert_eq!(
            Rgb::parse("#4472C4").unwrap(),
            Rgb {
                r: 0x44,
                g: 0x72,
                b: 0xc4
            }
        );
    }
}
