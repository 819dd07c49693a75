//! Parse error types for catalog files.

use thiserror::Error;

/// An error that occurred while decoding a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Unexpected end of input.
    #[error("unexpected end of input at {line}:{column}")]
    UnexpectedEof { line: usize, column: usize },

    /// Invalid UTF-8 in input.
    #[error("invalid UTF-8 in input")]
    InvalidUtf8,

    /// The first four bytes are not the MO magic number.
    #[error("not a gettext MO catalog (magic number {found:#010x})")]
    BadMagic { found: u32 },

    /// The MO major revision is not one this decoder understands.
    #[error("unsupported MO revision {major}")]
    UnsupportedRevision { major: u32 },

    /// A table or string points past the end of the MO buffer.
    #[error("MO catalog truncated: {what} at byte {offset} exceeds {len} bytes")]
    Truncated {
        what: &'static str,
        offset: usize,
        len: usize,
    },

    /// The `Plural-Forms` header could not be understood.
    #[error("invalid Plural-Forms header '{header}': {message}")]
    PluralForms { header: String, message: String },
}
