//! Shape style references: "use fill/line/effect style N from the theme".
//!
//! Indices are 1-based into the format scheme's lists; index 0 means "no
//! style", and fill indices >= 1000 route to the background-fill list at
//! position `idx - 1000`. A reference may carry a color of its own, which
//! replaces the placeholder color in every color slot of the retrieved
//! template.

use crate::color::ColorResolver;
use crate::diagnostics::{DiagnosticCode, Diagnostics};
use crate::models::colors::ResolvedColor;
use crate::models::effect::EffectList;
use crate::models::fill::Fill;
use crate::models::line::Outline;
use crate::models::shape::{FontCollectionIndex, StyleMatrixRef, StyleReference};
use crate::models::theme::FormatScheme;

/// A font reference resolved to its theme collection and color.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFontRef {
    pub idx: FontCollectionIndex,
    pub color: Option<ResolvedColor>,
}

/// The style templates a shape's style reference selects, with color
/// overrides applied. Slots the reference does not address are `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedStyleReference {
    pub fill: Option<Fill>,
    pub outline: Option<Outline>,
    pub effects: Option<EffectList>,
    pub font_ref: Option<ResolvedFontRef>,
}

/// Resolves a shape's style reference against the theme's format scheme.
///
/// Returns `None` when either the reference or the format scheme is
/// absent. Individual out-of-range indices degrade to an empty slot with
/// a diagnostic; they never fail the whole reference.
pub fn resolve_shape_style(
    style: Option<&StyleReference>,
    format_scheme: Option<&FormatScheme>,
    resolver: &ColorResolver<'_>,
    diag: &mut Diagnostics,
) -> Option<ResolvedStyleReference> {
    let style = style?;
    let scheme = format_scheme?;

    let fill = style
        .fill_ref
        .as_ref()
        .and_then(|r| resolve_fill_ref(r, scheme, resolver, diag));
    let outline = style
        .line_ref
        .as_ref()
        .and_then(|r| resolve_line_ref(r, scheme, resolver, diag));
    let effects = style
        .effect_ref
        .as_ref()
        .and_then(|r| resolve_effect_ref(r, scheme, diag));

    let font_ref = style.font_ref.as_ref().map(|r| ResolvedFontRef {
        idx: r.idx.unwrap_or(FontCollectionIndex::Minor),
        color: r
            .color
            .as_ref()
            .and_then(|def| resolver.resolve(def, diag)),
    });

    Some(ResolvedStyleReference {
        fill,
        outline,
        effects,
        font_ref,
    })
}

/// Looks up a 1-based style index in `list`, reporting out-of-range hits.
fn lookup<'a, T>(
    list: &'a [T],
    idx: u32,
    context: &str,
    diag: &mut Diagnostics,
) -> Option<&'a T> {
    let pos = idx.checked_sub(1)? as usize;
    match list.get(pos) {
        Some(entry) => Some(entry),
        None => {
            diag.report(
                DiagnosticCode::StyleIndexOutOfRange,
                format!("index {idx} exceeds list of {}", list.len()),
                context,
            );
            None
        }
    }
}

fn resolve_fill_ref(
    r: &StyleMatrixRef,
    scheme: &FormatScheme,
    resolver: &ColorResolver<'_>,
    diag: &mut Diagnostics,
) -> Option<Fill> {
    if r.idx == 0 {
        return None;
    }

    // Indices >= 1000 address the background-fill variants of the same
    // templates.
    let template = if r.idx >= 1000 {
        lookup(&scheme.bg_fill_styles, r.idx - 1000, "fillRef", diag)?
    } else {
        lookup(&scheme.fill_styles, r.idx, "fillRef", diag)?
    };

    let override_color = r.color.as_ref().and_then(|def| resolver.resolve(def, diag));
    Some(substitute_fill_color(template, override_color))
}

/// Replaces the placeholder color in a fill template. Solid fills take the
/// override directly; gradients take it in every stop. Pattern and image
/// templates carry no placeholder slot and pass through unchanged.
fn substitute_fill_color(template: &Fill, override_color: Option<ResolvedColor>) -> Fill {
    let Some(color) = override_color else {
        return template.clone();
    };

    match template {
        Fill::Solid { .. } => Fill::Solid { color },
        Fill::Gradient { stops, angle } => Fill::Gradient {
            stops: stops
                .iter()
                .map(|s| crate::models::fill::GradientStop {
                    position: s.position,
                    color: color.clone(),
                })
                .collect(),
            angle: *angle,
        },
        other => other.clone(),
    }
}

fn resolve_line_ref(
    r: &StyleMatrixRef,
    scheme: &FormatScheme,
    resolver: &ColorResolver<'_>,
    diag: &mut Diagnostics,
) -> Option<Outline> {
    if r.idx == 0 {
        return None;
    }
    let template = lookup(&scheme.line_styles, r.idx, "lnRef", diag)?;

    match r.color.as_ref().and_then(|def| resolver.resolve(def, diag)) {
        Some(color) => Some(Outline {
            fill: Fill::Solid { color },
            ..template.clone()
        }),
        None => Some(template.clone()),
    }
}

fn resolve_effect_ref(
    r: &StyleMatrixRef,
    scheme: &FormatScheme,
    diag: &mut Diagnostics,
) -> Option<EffectList> {
    if r.idx == 0 {
        return None;
    }
    lookup(&scheme.effect_styles, r.idx, "effectRef", diag).cloned()
}
