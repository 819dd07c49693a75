//! Locale validation errors.

use thiserror::Error;

/// A raw locale string that could not be resolved.
///
/// Both variants are validation failures of user input; callers are expected
/// to report them and stop rather than fall back to a default locale.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The input does not have the `language[_territory]` shape.
    #[error("malformed locale '{input}': {reason}")]
    Malformed { input: String, reason: String },

    /// The input is shaped like a locale but names no known language.
    #[error(
        "unknown language '{language}' in locale '{input}'{}",
        format_suggestions(suggestions)
    )]
    UnknownLanguage {
        input: String,
        language: String,
        suggestions: Vec<String>,
    },
}

impl LocaleError {
    /// The raw string that failed to resolve.
    pub fn input(&self) -> &str {
        match self {
            LocaleError::Malformed { input, .. } | LocaleError::UnknownLanguage { input, .. } => {
                input
            }
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}
