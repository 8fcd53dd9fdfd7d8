//! Greedy line wrapping over a paragraph's runs.
//!
//! Runs are tokenized into fragments by script class: whitespace runs and
//! individual CJK characters are breakable, Latin-and-other words are
//! atomic (a break before a word falls out of the overflow handling, and
//! a word split across two runs never gains an internal break point). The
//! paragraph's first token is never breakable — no line break may precede
//! all content. Tokens are packed greedily; a token wider than the whole
//! line is force-split character by character.

use log::debug;

use crate::models::text::{Paragraph, RunProperties, TextRun, TextWrap};
use crate::text::measure::{is_cjk, TextMeasurer};

/// Font size in points assumed for runs the inheritance cascade left
/// without a size.
pub const DEFAULT_FONT_SIZE_PT: f64 = 18.0;

/// A stretch of identically-styled text within one wrapped line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub text: String,
    pub properties: RunProperties,
}

/// One visual row produced by wrapping. An empty paragraph yields a
/// single line with no segments.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub segments: Vec<LineSegment>,
}

/// Atomic unit of the packing loop. Never spans a script boundary.
struct Token<'a> {
    text: String,
    properties: &'a RunProperties,
    width: f64,
    breakable: bool,
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn is_space_only(text: &str) -> bool {
    text.chars().all(is_space)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptClass {
    Latin,
    Cjk,
    Space,
}

/// Splits run text into breakable units: whitespace runs (breakable),
/// single CJK characters (breakable), maximal Latin-and-other runs
/// (not breakable).
fn split_into_fragments(text: &str) -> Vec<(String, bool)> {
    let mut fragments = Vec::new();
    let mut current = String::new();
    let mut current_class: Option<ScriptClass> = None;

    for c in text.chars() {
        if is_space(c) {
            if !current.is_empty() && current_class != Some(ScriptClass::Space) {
                fragments.push((
                    std::mem::take(&mut current),
                    current_class == Some(ScriptClass::Cjk),
                ));
            }
            current_class = Some(ScriptClass::Space);
            current.push(c);
        } else if is_cjk(c) {
            if !current.is_empty() {
                fragments.push((
                    std::mem::take(&mut current),
                    matches!(
                        current_class,
                        Some(ScriptClass::Cjk) | Some(ScriptClass::Space)
                    ),
                ));
            }
            // Each CJK character is its own breakable token.
            fragments.push((c.to_string(), true));
            current_class = Some(ScriptClass::Cjk);
        } else {
            if !current.is_empty() && current_class != Some(ScriptClass::Latin) {
                fragments.push((
                    std::mem::take(&mut current),
                    current_class == Some(ScriptClass::Space),
                ));
            }
            current_class = Some(ScriptClass::Latin);
            current.push(c);
        }
    }

    if !current.is_empty() {
        fragments.push((
            current,
            matches!(
                current_class,
                Some(ScriptClass::Space) | Some(ScriptClass::Cjk)
            ),
        ));
    }

    fragments
}

fn measure_run_text(
    text: &str,
    properties: &RunProperties,
    default_font_size: f64,
    measurer: &dyn TextMeasurer,
) -> f64 {
    measurer.measure_text_width(
        text,
        properties.font_size.unwrap_or(default_font_size),
        properties.bold.unwrap_or(false),
        properties.font_family.as_deref(),
        properties.font_family_ea.as_deref(),
    )
}

fn tokenize_runs<'a>(
    runs: &'a [TextRun],
    default_font_size: f64,
    measurer: &dyn TextMeasurer,
) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut is_first = true;

    for run in runs {
        if run.text.is_empty() {
            continue;
        }

        for (fragment, breakable) in split_into_fragments(&run.text) {
            let width = measure_run_text(&fragment, &run.properties, default_font_size, measurer);
            tokens.push(Token {
                text: fragment,
                properties: &run.properties,
                width,
                // The first token of a paragraph is never breakable.
                breakable: if is_first { false } else { breakable },
            });
            is_first = false;
        }
    }

    tokens
}

/// Force-splits an over-wide token character by character, each measured
/// independently. Returns full sub-lines; the caller keeps the last one
/// open as the start of the next packing line.
fn split_token_by_chars<'a>(
    token: &Token<'a>,
    available_width: f64,
    default_font_size: f64,
    measurer: &dyn TextMeasurer,
) -> Vec<Vec<Token<'a>>> {
    let mut lines = Vec::new();
    let mut current: Vec<Token<'a>> = Vec::new();
    let mut current_width = 0.0;

    for c in token.text.chars() {
        let text = c.to_string();
        let char_width = measure_run_text(&text, token.properties, default_font_size, measurer);

        if current_width + char_width > available_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0.0;
        }

        current_width += char_width;
        current.push(Token {
            text,
            properties: token.properties,
            width: char_width,
            breakable: false,
        });
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Merges adjacent tokens with identical resolved run properties into one
/// segment.
fn merge_segments(tokens: &[Token<'_>]) -> Vec<LineSegment> {
    let mut segments: Vec<LineSegment> = Vec::new();

    for token in tokens {
        if let Some(last) = segments.last_mut() {
            if last.properties == *token.properties {
                last.text.push_str(&token.text);
                continue;
            }
        }
        segments.push(LineSegment {
            text: token.text.clone(),
            properties: token.properties.clone(),
        });
    }

    segments
}

/// Drops whitespace-only trailing segments and trims trailing whitespace
/// from the last remaining one.
fn trim_trailing_spaces(mut segments: Vec<LineSegment>) -> Vec<LineSegment> {
    while let Some(last) = segments.last_mut() {
        let trimmed_len = last.text.trim_end_matches(is_space).len();
        if trimmed_len == 0 {
            segments.pop();
            continue;
        }
        last.text.truncate(trimmed_len);
        break;
    }
    segments
}

fn close_line(tokens: &[Token<'_>], lines: &mut Vec<WrappedLine>) {
    let segments = trim_trailing_spaces(merge_segments(tokens));
    if !segments.is_empty() {
        lines.push(WrappedLine { segments });
    }
}

fn layout_tokens(
    tokens: Vec<Token<'_>>,
    available_width: f64,
    default_font_size: f64,
    measurer: &dyn TextMeasurer,
) -> Vec<WrappedLine> {
    let mut lines: Vec<WrappedLine> = Vec::new();
    let mut current: Vec<Token<'_>> = Vec::new();
    let mut current_width = 0.0;

    for token in tokens {
        if current_width + token.width <= available_width {
            current_width += token.width;
            current.push(token);
        } else if current.is_empty() {
            // Nothing on the line and the token still does not fit:
            // force character-level splitting.
            if is_space_only(&token.text) {
                continue;
            }
            let mut split =
                split_token_by_chars(&token, available_width, default_font_size, measurer);
            // The last chunk stays open as the next packing line.
            if let Some(tail) = split.pop() {
                for full in &split {
                    close_line(full, &mut lines);
                }
                current_width = tail.iter().map(|t| t.width).sum();
                current = tail;
            }
        } else if token.breakable {
            close_line(&current, &mut lines);
            if is_space_only(&token.text) {
                // Leading whitespace on the new line is dropped.
                current = Vec::new();
                current_width = 0.0;
            } else {
                current_width = token.width;
                current = vec![token];
            }
        } else {
            // Does not fit and may not be preceded by a break inside
            // itself: close the line and carry the token over whole.
            close_line(&current, &mut lines);
            current_width = token.width;
            current = vec![token];
        }
    }

    if !current.is_empty() {
        close_line(&current, &mut lines);
    }

    if lines.is_empty() {
        lines.push(WrappedLine {
            segments: Vec::new(),
        });
    }
    lines
}

/// Merges a paragraph's runs into one unwrapped line.
fn single_line(runs: &[TextRun]) -> WrappedLine {
    let mut segments: Vec<LineSegment> = Vec::new();
    for run in runs {
        if run.text.is_empty() {
            continue;
        }
        if let Some(last) = segments.last_mut() {
            if last.properties == run.properties {
                last.text.push_str(&run.text);
                continue;
            }
        }
        segments.push(LineSegment {
            text: run.text.clone(),
            properties: run.properties.clone(),
        });
    }
    WrappedLine { segments }
}

/// Wraps a paragraph's runs into visual lines within `available_width`
/// (CSS pixels).
///
/// With `TextWrap::None` the paragraph always produces exactly one line,
/// whatever the width. An empty paragraph (no runs or only empty runs)
/// yields one line with an empty segment list. A non-positive width is
/// clamped to 1px, which degenerates to one character per line rather
/// than failing.
pub fn wrap_paragraph(
    paragraph: &Paragraph,
    available_width: f64,
    wrap: TextWrap,
    default_font_size: f64,
    measurer: &dyn TextMeasurer,
) -> Vec<WrappedLine> {
    if paragraph.runs.is_empty() || paragraph.runs.iter().all(|r| r.text.is_empty()) {
        return vec![WrappedLine {
            segments: Vec::new(),
        }];
    }

    if wrap == TextWrap::None {
        return vec![single_line(&paragraph.runs)];
    }

    let safe_width = available_width.max(1.0);
    let tokens = tokenize_runs(&paragraph.runs, default_font_size, measurer);
    if tokens.is_empty() {
        return vec![WrappedLine {
            segments: Vec::new(),
        }];
    }

    let lines = layout_tokens(tokens, safe_width, default_font_size, measurer);
    debug!(
        "wrapped {} runs into {} lines at {safe_width:.1}px",
        paragraph.runs.len(),
        lines.len()
    );
    lines
}
