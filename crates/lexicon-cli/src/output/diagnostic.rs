//! Miette diagnostics for locale and catalog errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::fs::read_to_string;
use std::path::Path;

use lexicon::parser::ParseError;
use lexicon::{LoadError, LocaleError};
use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for PO syntax errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(lexicon::syntax))]
pub struct CatalogDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl CatalogDiagnostic {
    /// Create a diagnostic from a located ParseError with source context.
    ///
    /// Errors without a position in the text yield `None`.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Option<Self> {
        let (line, column, message, help) = match err {
            ParseError::Syntax {
                line,
                column,
                message,
            } => (*line, *column, message.clone(), None),
            ParseError::UnexpectedEof { line, column } => (
                *line,
                *column,
                "unexpected end of file".to_string(),
                Some("every msgid needs a matching msgstr".to_string()),
            ),
            _ => return None,
        };

        // Sum of (line_length + 1) for lines before error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        Some(CatalogDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help,
        })
    }
}

/// A diagnostic for a locale string that failed to resolve.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(lexicon::locale))]
pub struct LocaleDiagnostic {
    message: String,

    #[help]
    help: Option<String>,
}

impl LocaleDiagnostic {
    pub fn from_locale_error(err: &LocaleError) -> Self {
        let help = match err {
            LocaleError::Malformed { .. } => {
                "expected 'language' or 'language_TERRITORY', e.g. 'en' or 'pt_BR'"
            }
            LocaleError::UnknownLanguage { .. } => {
                "languages are ISO 639 codes, e.g. 'en', 'fr' or 'fil'"
            }
        };
        LocaleDiagnostic {
            message: err.to_string(),
            help: Some(help.to_string()),
        }
    }
}

/// Render a catalog load failure, with source context for PO syntax errors.
pub fn load_error_report(err: LoadError) -> Report {
    if let LoadError::Format { path, source } = &err
        && let Ok(content) = read_to_string(path)
        && let Some(diagnostic) = CatalogDiagnostic::from_parse_error(path, &content, source)
    {
        return Report::new(diagnostic);
    }
    Report::from_err(err)
}
