use std::fmt;
use std::str::FromStr;

use icu_locale_core::subtags::{Language, Region};
use serde::{Deserialize, Serialize};

use crate::locale::{LocaleError, parse_locale};

/// A validated `language[_TERRITORY]` locale.
///
/// Instances only come out of [`parse_locale`] (directly or through
/// `FromStr` / serde), so the language is always lowercase and known to the
/// registry, and the territory, when present, is uppercase.
///
/// The `Display` form is the canonical key used to find catalogs on disk:
///
/// ```
/// use lexicon::parse_locale;
///
/// let locale = parse_locale("pt_br").unwrap();
/// assert_eq!(locale.language(), "pt");
/// assert_eq!(locale.territory(), Some("BR"));
/// assert_eq!(locale.to_string(), "pt_BR");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleIdentifier {
    language: Language,
    territory: Option<Region>,
}

impl LocaleIdentifier {
    pub(crate) fn new(language: Language, territory: Option<Region>) -> Self {
        Self {
            language,
            territory,
        }
    }

    /// The lowercase ISO-639 language code.
    pub fn language(&self) -> &str {
        self.language.as_str()
    }

    /// The uppercase territory code, if one was given.
    pub fn territory(&self) -> Option<&str> {
        self.territory.as_ref().map(Region::as_str)
    }

    /// Catalog lookup keys, most specific first.
    ///
    /// `fr_CA` yields `["fr_CA", "fr"]`, a bare language yields only itself.
    pub fn fallback_chain(&self) -> Vec<String> {
        let mut chain = vec![self.to_string()];
        if self.territory.is_some() {
            chain.push(self.language().to_string());
        }
        chain
    }
}

impl fmt::Display for LocaleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.territory {
            Some(territory) => write!(f, "{}_{}", self.language, territory),
            None => write!(f, "{}", self.language),
        }
    }
}

impl FromStr for LocaleIdentifier {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_locale(s)
    }
}

impl TryFrom<String> for LocaleIdentifier {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_locale(&value)
    }
}

impl From<LocaleIdentifier> for String {
    fn from(locale: LocaleIdentifier) -> Self {
        locale.to_string()
    }
}
