use thiserror::Error;

/// Errors raised while parsing literal color values.
///
/// These never escape the crate's resolution surface: per the degradation
/// contract, callers record a diagnostic and substitute a default instead
/// of propagating the failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The hex string is not exactly six hex digits (after an optional
    /// leading `#`).
    #[error("hex color must be 6 hex digits, got {0:?}")]
    BadLength(String),

    /// A component of the hex string is not a valid hex digit pair.
    #[error("invalid hex digits in color {0:?}")]
    InvalidDigits(String),
}
