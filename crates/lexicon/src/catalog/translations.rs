//! The in-memory translation catalog.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::{Path, PathBuf};

use crate::catalog::MergeCatalog;
use crate::parser::{
    MoEntry, ParseError, PluralForms, PoEntry, parse_header, parse_mo, parse_plural_forms,
    parse_po, write_mo,
};
use crate::types::{CONTEXT_SEPARATOR, Message, MessageKey, PLURAL_SEPARATOR};

/// Translations for one locale, as loaded from one or more catalog files.
///
/// Lookups never fail: a message the catalog does not translate comes back
/// unchanged, exactly as it would from the null catalog.
///
/// # Example
///
/// ```
/// use lexicon::Catalog;
///
/// let catalog = Catalog::from_po_str(r#"
/// msgid "Search"
/// msgstr "Rechercher"
/// "#).unwrap();
///
/// assert_eq!(catalog.gettext("Search"), "Rechercher");
/// assert_eq!(catalog.gettext("Next"), "Next");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    messages: BTreeMap<MessageKey, Message>,
    /// Raw `msgstr` of the header entry; empty when the catalog has none.
    header: String,
    /// Compiled `Plural-Forms` rule from the header, if declared.
    plural_forms: Option<PluralForms>,
    /// Files that contributed to this catalog, lowest precedence first.
    sources: Vec<PathBuf>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Decoding
    // =========================================================================

    /// Build a catalog from `.po` source, skipping fuzzy entries.
    pub fn from_po_str(content: &str) -> Result<Self, ParseError> {
        Self::from_po_entries(parse_po(content)?, false)
    }

    /// Build a catalog from parsed `.po` entries.
    ///
    /// Untranslated entries are dropped, as are fuzzy ones unless `use_fuzzy`
    /// is set. The header entry is always kept.
    pub fn from_po_entries(entries: Vec<PoEntry>, use_fuzzy: bool) -> Result<Self, ParseError> {
        let mut catalog = Catalog::new();
        for entry in entries {
            if entry.is_header() {
                let header = entry.translations.into_iter().next().unwrap_or_default();
                catalog.set_header(header)?;
                continue;
            }
            if entry.is_fuzzy() && !use_fuzzy {
                continue;
            }

            let key = MessageKey {
                context: entry.context,
                id: entry.id,
            };
            let message = match entry.id_plural {
                Some(id_plural) => Message::Plural {
                    id_plural,
                    forms: entry.translations,
                },
                None => Message::Singular(entry.translations.into_iter().next().unwrap_or_default()),
            };
            if message.is_translated() {
                catalog.messages.insert(key, message);
            }
        }
        Ok(catalog)
    }

    /// Build a catalog from a compiled `.mo` file.
    pub fn from_mo_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        let mut catalog = Catalog::new();
        for entry in parse_mo(bytes)? {
            let (context, rest) = match entry.original.split_once(CONTEXT_SEPARATOR) {
                Some((context, rest)) => (Some(context.to_string()), rest),
                None => (None, entry.original.as_str()),
            };
            let (id, id_plural) = match rest.split_once(PLURAL_SEPARATOR) {
                Some((id, id_plural)) => (id, Some(id_plural)),
                None => (rest, None),
            };

            let key = MessageKey {
                context,
                id: id.to_string(),
            };
            if key.is_header() {
                catalog.set_header(entry.translation)?;
                continue;
            }

            let message = match id_plural {
                Some(id_plural) => Message::Plural {
                    id_plural: id_plural.to_string(),
                    forms: entry
                        .translation
                        .split(PLURAL_SEPARATOR)
                        .map(str::to_string)
                        .collect(),
                },
                None => Message::Singular(entry.translation),
            };
            catalog.messages.insert(key, message);
        }
        Ok(catalog)
    }

    /// Encode this catalog, header included, as a `.mo` file.
    pub fn to_mo_bytes(&self) -> Vec<u8> {
        let mut entries = Vec::with_capacity(self.messages.len() + 1);
        if !self.header.is_empty() {
            entries.push(MoEntry {
                original: String::new(),
                translation: self.header.clone(),
            });
        }
        for (key, message) in &self.messages {
            let mut original = String::new();
            if let Some(context) = &key.context {
                original.push_str(context);
                original.push(CONTEXT_SEPARATOR);
            }
            original.push_str(&key.id);

            let translation = match message {
                Message::Singular(text) => text.clone(),
                Message::Plural { id_plural, forms } => {
                    original.push(PLURAL_SEPARATOR);
                    original.push_str(id_plural);
                    forms.join("\0")
                }
            };
            entries.push(MoEntry {
                original,
                translation,
            });
        }
        write_mo(&entries)
    }

    // =========================================================================
    // Contents
    // =========================================================================

    /// Insert or replace a message, returning the previous one.
    pub fn insert(&mut self, key: MessageKey, message: Message) -> Option<Message> {
        self.messages.insert(key, message)
    }

    /// Replace the header entry and recompile its `Plural-Forms` rule.
    pub fn set_header(&mut self, header: impl Into<String>) -> Result<(), ParseError> {
        let header = header.into();
        let plural_forms = parse_header(&header)
            .into_iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("Plural-Forms"))
            .map(|(_, value)| parse_plural_forms(&value))
            .transpose()?;
        self.header = header;
        self.plural_forms = plural_forms;
        Ok(())
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Look up a header field by case-insensitive name.
    pub fn header_field(&self, name: &str) -> Option<String> {
        parse_header(&self.header)
            .into_iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    pub fn plural_forms(&self) -> Option<&PluralForms> {
        self.plural_forms.as_ref()
    }

    /// Plural form index for `n`, using the germanic rule when the catalog
    /// declares none.
    pub fn plural_index(&self, n: u64) -> usize {
        match &self.plural_forms {
            Some(forms) => forms.index(n),
            None => usize::from(n != 1),
        }
    }

    pub fn get(&self, key: &MessageKey) -> Option<&Message> {
        self.messages.get(key)
    }

    pub fn contains(&self, key: &MessageKey) -> bool {
        self.messages.contains_key(key)
    }

    /// Number of messages, not counting the header.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages in key order.
    pub fn messages(&self) -> impl Iterator<Item = (&MessageKey, &Message)> {
        self.messages.iter()
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Record `path` as a file this catalog was loaded from.
    pub fn with_source(mut self, path: impl AsRef<Path>) -> Self {
        self.sources.push(path.as_ref().to_path_buf());
        self
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Translate `msgid`.
    pub fn gettext<'a>(&'a self, msgid: &'a str) -> &'a str {
        self.singular(None, msgid).unwrap_or(msgid)
    }

    /// Translate `msgid` within `context`.
    pub fn pgettext<'a>(&'a self, context: &str, msgid: &'a str) -> &'a str {
        self.singular(Some(context), msgid).unwrap_or(msgid)
    }

    /// Translate a message with a plural form chosen for `n`.
    pub fn ngettext<'a>(&'a self, singular: &'a str, plural: &'a str, n: u64) -> &'a str {
        self.plural(None, singular, n)
            .unwrap_or_else(|| untranslated(singular, plural, n))
    }

    /// Translate a plural message within `context`.
    pub fn npgettext<'a>(
        &'a self,
        context: &str,
        singular: &'a str,
        plural: &'a str,
        n: u64,
    ) -> &'a str {
        self.plural(Some(context), singular, n)
            .unwrap_or_else(|| untranslated(singular, plural, n))
    }

    fn singular(&self, context: Option<&str>, id: &str) -> Option<&str> {
        self.messages
            .get(&lookup_key(context, id))
            .map(Message::text)
            .filter(|text| !text.is_empty())
    }

    fn plural(&self, context: Option<&str>, id: &str, n: u64) -> Option<&str> {
        match self.messages.get(&lookup_key(context, id))? {
            Message::Plural { forms, .. } => forms
                .get(self.plural_index(n))
                .map(String::as_str)
                .filter(|text| !text.is_empty()),
            Message::Singular(_) => None,
        }
    }
}

impl MergeCatalog for Catalog {
    /// Layer `self` over `base`.
    ///
    /// Messages `self` translates keep their text; everything else comes from
    /// `base`. The header and plural rule of `self` win when present.
    fn merge(&mut self, base: Self) {
        for (key, message) in base.messages {
            match self.messages.entry(key) {
                Entry::Occupied(mut existing) => {
                    if !existing.get().is_translated() && message.is_translated() {
                        existing.insert(message);
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(message);
                }
            }
        }
        if self.header.is_empty() {
            self.header = base.header;
        }
        if self.plural_forms.is_none() {
            self.plural_forms = base.plural_forms;
        }
        let mut sources = base.sources;
        sources.append(&mut self.sources);
        self.sources = sources;
    }
}

fn lookup_key(context: Option<&str>, id: &str) -> MessageKey {
    MessageKey {
        context: context.map(str::to_string),
        id: id.to_string(),
    }
}

/// Untranslated plural fallback: the source singular for one, plural otherwise.
pub(crate) fn untranslated<'a>(singular: &'a str, plural: &'a str, n: u64) -> &'a str {
    if n == 1 { singular } else { plural }
}
