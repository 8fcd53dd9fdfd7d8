//! Text style inheritance.
//!
//! Run and paragraph properties left unset by the document content are
//! filled from an ordered chain of fallback sources: the layout's
//! placeholder list style, the master's placeholder list style, the
//! master's named style for the placeholder category, and the document's
//! default text style. Each source is level-aware: a paragraph at nesting
//! level *n* consults that level's record first, then the style's
//! paragraph-wide default record, before the next source is tried.
//!
//! The cascade never overwrites an already-set value.

use crate::models::shape::{ShapeElement, SlideElement};
use crate::models::text::{
    DefaultParagraphStyle, DefaultRunProperties, NamedTextStyles, Paragraph, PlaceholderCategory,
    PlaceholderStyleInfo, RunProperties, TextStyleLevels,
};
use crate::models::theme::FontScheme;

/// The style tables one slide inherits from: its layout, its master, and
/// the document defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextStyleContext<'a> {
    pub layout_placeholder_styles: &'a [PlaceholderStyleInfo],
    pub master_placeholder_styles: &'a [PlaceholderStyleInfo],
    pub named_styles: Option<&'a NamedTextStyles>,
    pub default_text_style: Option<&'a TextStyleLevels>,
    pub font_scheme: Option<&'a FontScheme>,
}

/// Fills unset run and paragraph properties throughout an element tree,
/// recursing into groups so every leaf text body is resolved. Explicit
/// document values always win; only `None` fields are touched.
pub fn apply_text_style_inheritance(elements: &mut [SlideElement], ctx: &TextStyleContext<'_>) {
    for element in elements {
        match element {
            SlideElement::Shape(shape) => resolve_shape(shape, ctx),
            SlideElement::Group(group) => apply_text_style_inheritance(&mut group.children, ctx),
        }
    }
}

fn resolve_shape(shape: &mut ShapeElement, ctx: &TextStyleContext<'_>) {
    let Some(text_body) = shape.text_body.as_mut() else {
        return;
    };

    // Ordered fallback chain, nearest source first.
    let sources: Vec<&TextStyleLevels> = [
        find_placeholder_style(
            shape.placeholder_category,
            shape.placeholder_index,
            ctx.layout_placeholder_styles,
        ),
        find_placeholder_style(
            shape.placeholder_category,
            shape.placeholder_index,
            ctx.master_placeholder_styles,
        ),
        named_style_for(shape.placeholder_category, ctx.named_styles),
        ctx.default_text_style,
    ]
    .into_iter()
    .flatten()
    .collect();

    for paragraph in &mut text_body.paragraphs {
        resolve_paragraph(paragraph, &sources, ctx.font_scheme);
    }
}

/// Matches a shape against a layout's or master's placeholder styles:
/// exact index match first, category match as fallback.
fn find_placeholder_style<'a>(
    category: Option<PlaceholderCategory>,
    index: Option<u32>,
    styles: &'a [PlaceholderStyleInfo],
) -> Option<&'a TextStyleLevels> {
    let category = category?;

    if let Some(index) = index {
        if let Some(by_index) = styles.iter().find(|s| s.index == Some(index)) {
            return Some(&by_index.levels);
        }
    }

    styles
        .iter()
        .find(|s| s.category == category)
        .map(|s| &s.levels)
}

/// Routes a placeholder category to the master's named style. Shapes
/// without a placeholder use the "other" style.
fn named_style_for(
    category: Option<PlaceholderCategory>,
    named: Option<&NamedTextStyles>,
) -> Option<&TextStyleLevels> {
    let named = named?;
    match category {
        Some(PlaceholderCategory::Title) | Some(PlaceholderCategory::CtrTitle) => {
            named.title_style.as_ref()
        }
        Some(PlaceholderCategory::Body)
        | Some(PlaceholderCategory::SubTitle)
        | Some(PlaceholderCategory::Obj) => named.body_style.as_ref(),
        _ => named.other_style.as_ref(),
    }
}

fn resolve_paragraph(
    paragraph: &mut Paragraph,
    sources: &[&TextStyleLevels],
    fonts: Option<&FontScheme>,
) {
    let Paragraph { runs, properties } = paragraph;
    let level = properties.level.min(8);

    fill_missing(&mut properties.alignment, para_prop(sources, level, |p| p.alignment.as_ref()));
    fill_missing(
        &mut properties.margin_left,
        para_prop(sources, level, |p| p.margin_left.as_ref()),
    );
    fill_missing(&mut properties.indent, para_prop(sources, level, |p| p.indent.as_ref()));

    let para_defaults = properties.default_run_properties.as_ref();
    for run in runs {
        resolve_run(&mut run.properties, para_defaults, sources, level, fonts);
    }
}

fn resolve_run(
    props: &mut RunProperties,
    para_defaults: Option<&DefaultRunProperties>,
    sources: &[&TextStyleLevels],
    level: u8,
    fonts: Option<&FontScheme>,
) {
    // The paragraph's own defRPr outranks every list-style source.
    if let Some(def) = para_defaults {
        fill_missing(&mut props.font_size, def.font_size.as_ref());
        fill_missing(&mut props.font_family, def.font_family.as_ref());
        fill_missing(&mut props.font_family_ea, def.font_family_ea.as_ref());
        fill_missing(&mut props.bold, def.bold.as_ref());
        fill_missing(&mut props.italic, def.italic.as_ref());
        fill_missing(&mut props.underline, def.underline.as_ref());
        fill_missing(&mut props.strikethrough, def.strikethrough.as_ref());
        fill_missing(&mut props.color, def.color.as_ref());
    }

    fill_missing(&mut props.font_size, run_prop(sources, level, |r| r.font_size.as_ref()));
    fill_missing(&mut props.font_family, run_prop(sources, level, |r| r.font_family.as_ref()));
    fill_missing(
        &mut props.font_family_ea,
        run_prop(sources, level, |r| r.font_family_ea.as_ref()),
    );
    fill_missing(&mut props.bold, run_prop(sources, level, |r| r.bold.as_ref()));
    fill_missing(&mut props.italic, run_prop(sources, level, |r| r.italic.as_ref()));
    fill_missing(&mut props.underline, run_prop(sources, level, |r| r.underline.as_ref()));
    fill_missing(
        &mut props.strikethrough,
        run_prop(sources, level, |r| r.strikethrough.as_ref()),
    );
    fill_missing(&mut props.color, run_prop(sources, level, |r| r.color.as_ref()));

    // Theme font tokens substitute with the theme's font, wherever the
    // family came from.
    props.font_family = props
        .font_family
        .take()
        .and_then(|f| resolve_theme_font(f, fonts));
    props.font_family_ea = props
        .font_family_ea
        .take()
        .and_then(|f| resolve_theme_font(f, fonts));
}

/// First-`Some`-wins merge: copies `value` into `slot` only when the slot
/// is unset.
fn fill_missing<T: Clone>(slot: &mut Option<T>, value: Option<&T>) {
    if slot.is_none() {
        *slot = value.cloned();
    }
}

/// Queries one run property across the source chain: for each source, the
/// level record's `defRPr` first, then the paragraph-wide default's.
fn run_prop<'a, T>(
    sources: &[&'a TextStyleLevels],
    level: u8,
    pick: impl Fn(&'a DefaultRunProperties) -> Option<&'a T>,
) -> Option<&'a T> {
    sources.iter().find_map(|source| {
        source
            .level(level)
            .and_then(|l| l.default_run_properties.as_ref())
            .and_then(&pick)
            .or_else(|| {
                source
                    .default_paragraph
                    .as_ref()
                    .and_then(|p| p.default_run_properties.as_ref())
                    .and_then(&pick)
            })
    })
}

/// Queries one paragraph property across the source chain, with the same
/// level-then-default order as [`run_prop`].
fn para_prop<'a, T>(
    sources: &[&'a TextStyleLevels],
    level: u8,
    pick: impl Fn(&'a DefaultParagraphStyle) -> Option<&'a T>,
) -> Option<&'a T> {
    sources.iter().find_map(|source| {
        source
            .level(level)
            .and_then(&pick)
            .or_else(|| source.default_paragraph.as_ref().and_then(&pick))
    })
}

/// Substitutes theme font tokens (`+mj-lt`, `+mn-lt`, `+mj-ea`, `+mn-ea`)
/// with the theme's font name; any other family passes through unchanged.
/// An East-Asian token with no theme East-Asian font yields `None`.
pub fn resolve_theme_font(family: String, fonts: Option<&FontScheme>) -> Option<String> {
    let Some(fonts) = fonts else {
        return Some(family);
    };
    match family.as_str() {
        "+mj-lt" => Some(fonts.major_font.clone()),
        "+mn-lt" => Some(fonts.minor_font.clone()),
        "+mj-ea" => fonts.major_font_ea.clone(),
        "+mn-ea" => fonts.minor_font_ea.clone(),
        _ => Some(family),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::colors::ResolvedColor;
    use crate::models::shape::{GroupElement, ShapeElement, Transform};
    use crate::models::text::{
        Alignment, BodyProperties, ParagraphProperties, TextBody, TextRun,
    };
    use pretty_assertions::assert_eq;

    fn shape_with_text(
        category: Option<PlaceholderCategory>,
        index: Option<u32>,
        paragraphs: Vec<Paragraph>,
    ) -> SlideElement {
        SlideElement::Shape(ShapeElement {
            transform: Transform::default(),
            geometry: None,
            placeholder_category: category,
            placeholder_index: index,
            style: None,
            text_body: Some(TextBody {
                paragraphs,
                body_properties: BodyProperties::default(),
            }),
        })
    }

    fn paragraph(level: u8, runs: Vec<TextRun>) -> Paragraph {
        Paragraph {
            runs,
            properties: ParagraphProperties {
                level,
                ..ParagraphProperties::default()
            },
        }
    }

    fn run(text: &str, props: RunProperties) -> TextRun {
        TextRun {
            text: text.to_string(),
            properties: props,
        }
    }

    fn style_with_size(level: u8, size: f64) -> TextStyleLevels {
        let mut levels = vec![None; level as usize + 1];
        levels[level as usize] = Some(DefaultParagraphStyle {
            default_run_properties: Some(DefaultRunProperties {
                font_size: Some(size),
                ..DefaultRunProperties::default()
            }),
            ..DefaultParagraphStyle::default()
        });
        TextStyleLevels {
            default_paragraph: None,
            levels,
        }
    }

    fn first_run(element: &SlideElement) -> &RunProperties {
        match element {
            SlideElement::Shape(s) => {
                &s.text_body.as_ref().unwrap().paragraphs[0].runs[0].properties
            }
            _ => panic!("expected shape"),
        }
    }

    #[test]
    fn explicit_run_value_wins_over_every_source() {
        let mut elements = vec![shape_with_text(
            Some(PlaceholderCategory::Body),
            Some(1),
            vec![paragraph(
                0,
                vec![run(
                    "hi",
                    RunProperties {
                        font_size: Some(30.0),
                        ..RunProperties::default()
                    },
                )],
            )],
        )];

        let layout = vec![PlaceholderStyleInfo {
            category: PlaceholderCategory::Body,
            index: Some(1),
            levels: style_with_size(0, 20.0),
        }];
        let ctx = TextStyleContext {
            layout_placeholder_styles: &layout,
            ..TextStyleContext::default()
        };

        apply_text_style_inheritance(&mut elements, &ctx);
        assert_eq!(first_run(&elements[0]).font_size, Some(30.0));
    }

    #[test]
    fn paragraph_def_rpr_outranks_list_style_but_not_the_run() {
        let list_style = style_with_size(0, 20.0);
        let ctx = TextStyleContext {
            default_text_style: Some(&list_style),
            ..TextStyleContext::default()
        };

        let with_para_default = |run_size: Option<f64>| Paragraph {
            runs: vec![run(
                "hi",
                RunProperties {
                    font_size: run_size,
                    ..RunProperties::default()
                },
            )],
            properties: ParagraphProperties {
                default_run_properties: Some(DefaultRunProperties {
                    font_size: Some(26.0),
                    ..DefaultRunProperties::default()
                }),
                ..ParagraphProperties::default()
            },
        };

        // Run value wins over both.
        let mut elements = vec![shape_with_text(None, None, vec![with_para_default(Some(32.0))])];
        apply_text_style_inheritance(&mut elements, &ctx);
        assert_eq!(first_run(&elements[0]).font_size, Some(32.0));

        // Without a run value, the paragraph defRPr is promoted.
        let mut elements = vec![shape_with_text(None, None, vec![with_para_default(None)])];
        apply_text_style_inheritance(&mut elements, &ctx);
        assert_eq!(first_run(&elements[0]).font_size, Some(26.0));

        // Without either, the list-style level is promoted.
        let mut elements = vec![shape_with_text(
            None,
            None,
            vec![paragraph(0, vec![run("hi", RunProperties::default())])],
        )];
        apply_text_style_inheritance(&mut elements, &ctx);
        assert_eq!(first_run(&elements[0]).font_size, Some(20.0));
    }

    #[test]
    fn cascade_promotes_next_source_when_value_removed() {
        let layout = vec![PlaceholderStyleInfo {
            category: PlaceholderCategory::Body,
            index: None,
            levels: style_with_size(0, 20.0),
        }];
        let master = vec![PlaceholderStyleInfo {
            category: PlaceholderCategory::Body,
            index: None,
            levels: style_with_size(0, 16.0),
        }];

        // Layout wins while present.
        let mut elements = vec![shape_with_text(
            Some(PlaceholderCategory::Body),
            None,
            vec![paragraph(0, vec![run("hi", RunProperties::default())])],
        )];
        let ctx = TextStyleContext {
            layout_placeholder_styles: &layout,
            master_placeholder_styles: &master,
            ..TextStyleContext::default()
        };
        apply_text_style_inheritance(&mut elements, &ctx);
        assert_eq!(first_run(&elements[0]).font_size, Some(20.0));

        // Without the layout style, the master's value is promoted.
        let mut elements = vec![shape_with_text(
            Some(PlaceholderCategory::Body),
            None,
            vec![paragraph(0, vec![run("hi", RunProperties::default())])],
        )];
        let ctx = TextStyleContext {
            master_placeholder_styles: &master,
            ..TextStyleContext::default()
        };
        apply_text_style_inheritance(&mut elements, &ctx);
        assert_eq!(first_run(&elements[0]).font_size, Some(16.0));
    }

    #[test]
    fn index_match_beats_category_match() {
        let layout = vec![
            PlaceholderStyleInfo {
                category: PlaceholderCategory::Body,
                index: Some(7),
                levels: style_with_size(0, 14.0),
            },
            PlaceholderStyleInfo {
                category: PlaceholderCategory::Body,
                index: None,
                levels: style_with_size(0, 22.0),
            },
        ];
        let ctx = TextStyleContext {
            layout_placeholder_styles: &layout,
            ..TextStyleContext::default()
        };

        let mut elements = vec![shape_with_text(
            Some(PlaceholderCategory::Body),
            Some(7),
            vec![paragraph(0, vec![run("hi", RunProperties::default())])],
        )];
        apply_text_style_inheritance(&mut elements, &ctx);
        assert_eq!(first_run(&elements[0]).font_size, Some(14.0));

        // No index match: category alone.
        let mut elements = vec![shape_with_text(
            Some(PlaceholderCategory::Body),
            Some(3),
            vec![paragraph(0, vec![run("hi", RunProperties::default())])],
        )];
        apply_text_style_inheritance(&mut elements, &ctx);
        assert_eq!(first_run(&elements[0]).font_size, Some(22.0));
    }

    #[test]
    fn named_styles_route_by_category() {
        let named = NamedTextStyles {
            title_style: Some(style_with_size(0, 44.0)),
            body_style: Some(style_with_size(0, 24.0)),
            other_style: Some(style_with_size(0, 18.0)),
        };
        let ctx = TextStyleContext {
            named_styles: Some(&named),
            ..TextStyleContext::default()
        };

        let cases = [
            (Some(PlaceholderCategory::CtrTitle), 44.0),
            (Some(PlaceholderCategory::SubTitle), 24.0),
            (Some(PlaceholderCategory::Ftr), 18.0),
            (None, 18.0), // non-placeholder shapes use the other style
        ];
        for (category, expected) in cases {
            let mut elements = vec![shape_with_text(
                category,
                None,
                vec![paragraph(0, vec![run("hi", RunProperties::default())])],
            )];
            apply_text_style_inheritance(&mut elements, &ctx);
            assert_eq!(
                first_run(&elements[0]).font_size,
                Some(expected),
                "category {category:?}"
            );
        }
    }

    #[test]
    fn level_record_beats_paragraph_wide_default() {
        let style = TextStyleLevels {
            default_paragraph: Some(DefaultParagraphStyle {
                alignment: Some(Alignment::Left),
                default_run_properties: Some(DefaultRunProperties {
                    font_size: Some(12.0),
                    bold: Some(false),
                    ..DefaultRunProperties::default()
                }),
                ..DefaultParagraphStyle::default()
            }),
            levels: vec![
                None,
                Some(DefaultParagraphStyle {
                    alignment: Some(Alignment::Center),
                    default_run_properties: Some(DefaultRunProperties {
                        font_size: Some(28.0),
                        ..DefaultRunProperties::default()
                    }),
                    ..DefaultParagraphStyle::default()
                }),
            ],
        };
        let ctx = TextStyleContext {
            default_text_style: Some(&style),
            ..TextStyleContext::default()
        };

        let mut elements = vec![shape_with_text(
            None,
            None,
            vec![paragraph(1, vec![run("hi", RunProperties::default())])],
        )];
        apply_text_style_inheritance(&mut elements, &ctx);

        let SlideElement::Shape(shape) = &elements[0] else {
            panic!()
        };
        let para = &shape.text_body.as_ref().unwrap().paragraphs[0];
        // Level 1 record supplies size and alignment; the paragraph-wide
        // default still fills bold, which the level record leaves unset.
        assert_eq!(para.runs[0].properties.font_size, Some(28.0));
        assert_eq!(para.runs[0].properties.bold, Some(false));
        assert_eq!(para.properties.alignment, Some(Alignment::Center));

        // A level without a record falls back to the paragraph-wide default.
        let mut elements = vec![shape_with_text(
            None,
            None,
            vec![paragraph(0, vec![run("hi", RunProperties::default())])],
        )];
        apply_text_style_inheritance(&mut elements, &ctx);
        let SlideElement::Shape(shape) = &elements[0] else {
            panic!()
        };
        let para = &shape.text_body.as_ref().unwrap().paragraphs[0];
        assert_eq!(para.runs[0].properties.font_size, Some(12.0));
        assert_eq!(para.properties.alignment, Some(Alignment::Left));
    }

    #[test]
    fn theme_font_tokens_substitute() {
        let fonts = FontScheme {
            major_font: "Oswald".to_string(),
            minor_font: "Roboto".to_string(),
            major_font_ea: Some("Noto Sans JP".to_string()),
            minor_font_ea: None,
        };
        let style = TextStyleLevels {
            default_paragraph: Some(DefaultParagraphStyle {
                default_run_properties: Some(DefaultRunProperties {
                    font_family: Some("+mn-lt".to_string()),
                    font_family_ea: Some("+mn-ea".to_string()),
                    ..DefaultRunProperties::default()
                }),
                ..DefaultParagraphStyle::default()
            }),
            levels: Vec::new(),
        };
        let ctx = TextStyleContext {
            default_text_style: Some(&style),
            font_scheme: Some(&fonts),
            ..TextStyleContext::default()
        };

        let mut elements = vec![shape_with_text(
            None,
            None,
            vec![paragraph(0, vec![run("hi", RunProperties::default())])],
        )];
        apply_text_style_inheritance(&mut elements, &ctx);

        let props = first_run(&elements[0]);
        assert_eq!(props.font_family.as_deref(), Some("Roboto"));
        // Minor EA token with no theme EA font stays unset.
        assert_eq!(props.font_family_ea, None);

        // A literal family on the run passes through untouched.
        let mut elements = vec![shape_with_text(
            None,
            None,
            vec![paragraph(
                0,
                vec![run(
                    "hi",
                    RunProperties {
                        font_family: Some("Courier New".to_string()),
                        ..RunProperties::default()
                    },
                )],
            )],
        )];
        apply_text_style_inheritance(&mut elements, &ctx);
        assert_eq!(
            first_run(&elements[0]).font_family.as_deref(),
            Some("Courier New")
        );
    }

    #[test]
    fn recurses_into_groups() {
        let style = style_with_size(0, 21.0);
        let ctx = TextStyleContext {
            default_text_style: Some(&style),
            ..TextStyleContext::default()
        };

        let inner = shape_with_text(
            None,
            None,
            vec![paragraph(0, vec![run("deep", RunProperties::default())])],
        );
        let mut elements = vec![SlideElement::Group(GroupElement {
            transform: Transform::default(),
            children: vec![SlideElement::Group(GroupElement {
                transform: Transform::default(),
                children: vec![inner],
            })],
        })];

        apply_text_style_inheritance(&mut elements, &ctx);

        let SlideElement::Group(outer) = &elements[0] else {
            panic!()
        };
        let SlideElement::Group(mid) = &outer.children[0] else {
            panic!()
        };
        assert_eq!(first_run(&mid.children[0]).font_size, Some(21.0));
    }

    #[test]
    fn resolved_color_is_inherited_like_other_fields() {
        let style = TextStyleLevels {
            default_paragraph: Some(DefaultParagraphStyle {
                default_run_properties: Some(DefaultRunProperties {
                    color: Some(ResolvedColor::opaque("#4472c4")),
                    ..DefaultRunProperties::default()
                }),
                ..DefaultParagraphStyle::default()
            }),
            levels: Vec::new(),
        };
        let ctx = TextStyleContext {
            default_text_style: Some(&style),
            ..TextStyleContext::default()
        };

        let mut elements = vec![shape_with_text(
            None,
            None,
            vec![paragraph(0, vec![run("hi", RunProperties::default())])],
        )];
        apply_text_style_inheritance(&mut elements, &ctx);
        assert_eq!(
            first_run(&elements[0]).color,
            Some(ResolvedColor::opaque("#4472c4"))
        );
    }
}
