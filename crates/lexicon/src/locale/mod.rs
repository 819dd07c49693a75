//! Locale resolution.
//!
//! Turns a loosely formatted, user-supplied locale string such as `en`,
//! `EN_us` or ` pt_BR ` into a [`LocaleIdentifier`], rejecting strings that
//! are not shaped like `language[_territory]` and languages the registry
//! does not know.

mod error;
mod registry;

use icu_locale_core::subtags::{Language, Region};

pub use error::LocaleError;
pub use registry::{is_known_language, known_languages};

use crate::types::LocaleIdentifier;

/// Parse and validate a raw locale string.
///
/// The string is split on its first underscore. The language part is
/// lowercased, must be two or more letters, and must be a known code; the territory
/// part, if present, is uppercased and must be two letters or a three-digit
/// area code. Territories are not checked against any registry.
///
/// # Errors
///
/// Returns [`LocaleError::Malformed`] when the input does not have the
/// expected shape, and [`LocaleError::UnknownLanguage`] when the language
/// code is well formed but unknown.
///
/// # Example
///
/// ```
/// use lexicon::{LocaleError, parse_locale};
///
/// assert_eq!(parse_locale("en_US").unwrap().to_string(), "en_US");
/// assert!(matches!(parse_locale("42"), Err(LocaleError::Malformed { .. })));
/// assert!(matches!(parse_locale("xx"), Err(LocaleError::UnknownLanguage { .. })));
/// ```
pub fn parse_locale(raw: &str) -> Result<LocaleIdentifier, LocaleError> {
    let trimmed = raw.trim();
    let malformed = |reason: &str| LocaleError::Malformed {
        input: raw.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(malformed("locale is empty"));
    }

    let (language, territory) = match trimmed.split_once('_') {
        Some((language, territory)) => (language, Some(territory)),
        None => (trimmed, None),
    };

    let language = language_shape(language)
        .ok_or_else(|| malformed("language must be 2 or more ASCII letters"))?;

    let territory = match territory {
        Some(segment) if segment.contains('_') => {
            return Err(malformed("expected 'language' or 'language_territory'"));
        }
        Some(segment) => Some(parse_territory(segment).ok_or_else(|| {
            malformed("territory must be 2 ASCII letters or a 3-digit area code")
        })?),
        None => None,
    };

    let known = if is_known_language(&language) {
        language.parse::<Language>().ok()
    } else {
        None
    };
    let Some(subtag) = known else {
        return Err(LocaleError::UnknownLanguage {
            input: raw.to_string(),
            suggestions: registry::suggest_languages(&language),
            language,
        });
    };

    Ok(LocaleIdentifier::new(subtag, territory))
}

/// Lowercased language segment, if it is two or more ASCII letters.
fn language_shape(segment: &str) -> Option<String> {
    let shaped = segment.len() >= 2 && segment.chars().all(|c| c.is_ascii_alphabetic());
    shaped.then(|| segment.to_ascii_lowercase())
}

fn parse_territory(segment: &str) -> Option<Region> {
    let letters = segment.len() == 2 && segment.chars().all(|c| c.is_ascii_alphabetic());
    let digits = segment.len() == 3 && segment.chars().all(|c| c.is_ascii_digit());
    if !letters && !digits {
        return None;
    }
    segment.to_ascii_uppercase().parse().ok()
}
