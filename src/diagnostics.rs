//! Structured diagnostics collected alongside resolution results.
//!
//! Every operation in this core degrades to a documented default rather
//! than failing; the only record of a skipped or defaulted input is an
//! entry in the [`Diagnostics`] value threaded through the resolvers. The
//! embedding application decides what to do with them (log, count,
//! surface to the user).

use log::debug;
use serde::{Deserialize, Serialize};

/// Machine-readable category of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticCode {
    /// A scheme color role had no entry in the master's color map.
    UnmappedColorRole,
    /// A color-map lookup produced a key missing from the theme palette.
    MissingSchemeEntry,
    /// A placeholder color (`phClr`) was referenced outside a style
    /// reference, where no substitution context exists.
    PlaceholderColorOutOfContext,
    /// A literal color value failed to parse and was defaulted.
    InvalidColorValue,
    /// A style reference index addressed past the end of its list.
    StyleIndexOutOfRange,
}

/// One diagnostic: category, human-readable message, and the context it
/// arose in (e.g. which reference or role).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub message: String,
    pub context: String,
}

/// An append-only collection of diagnostics for one conversion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    /// Records a diagnostic and mirrors it to the trace log.
    pub fn report(
        &mut self,
        code: DiagnosticCode,
        message: impl Into<String>,
        context: impl Into<String>,
    ) {
        let entry = Diagnostic {
            code,
            message: message.into(),
            context: context.into(),
        };
        debug!("{:?} [{}]: {}", entry.code, entry.context, entry.message);
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }
}
