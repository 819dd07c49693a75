/// Separator between `msgctxt` and `msgid` in compiled catalogs.
pub(crate) const CONTEXT_SEPARATOR: char = '\u{4}';

/// Separator between plural forms in compiled catalogs.
pub(crate) const PLURAL_SEPARATOR: char = '\0';

/// Identifies a message in a catalog: the source text plus optional context.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageKey {
    pub context: Option<String>,
    pub id: String,
}

impl MessageKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            context: None,
            id: id.into(),
        }
    }

    pub fn with_context(context: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            context: Some(context.into()),
            id: id.into(),
        }
    }

    /// The header entry is the context-free empty msgid.
    pub(crate) fn is_header(&self) -> bool {
        self.context.is_none() && self.id.is_empty()
    }
}

/// Translated text for one catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    Singular(String),
    Plural {
        /// Source-language plural (`msgid_plural`).
        id_plural: String,
        /// One translation per plural form, indexed by the catalog's
        /// `Plural-Forms` rule.
        forms: Vec<String>,
    },
}

impl Message {
    /// An entry counts as translated when at least one form has text.
    ///
    /// Empty `msgstr` values mean "untranslated" in gettext catalogs.
    pub fn is_translated(&self) -> bool {
        match self {
            Message::Singular(text) => !text.is_empty(),
            Message::Plural { forms, .. } => forms.iter().any(|form| !form.is_empty()),
        }
    }

    /// The first (singular) translation.
    pub fn text(&self) -> &str {
        match self {
            Message::Singular(text) => text,
            Message::Plural { forms, .. } => forms.first().map(String::as_str).unwrap_or(""),
        }
    }
}
