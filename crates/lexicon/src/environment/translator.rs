//! A concrete template environment backed by [`Catalog`].

use std::path::Path;

use crate::catalog::{Catalog, CatalogLoader, LoadError, untranslated};
use crate::environment::{TemplateEnvironment, install_translations};
use crate::types::LocaleIdentifier;

/// The translation source a [`Translator`] currently renders with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveCatalog {
    /// Identity translations: every message renders as its source text.
    #[default]
    Null,
    Catalog(Catalog),
}

impl ActiveCatalog {
    pub fn is_null(&self) -> bool {
        matches!(self, ActiveCatalog::Null)
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            ActiveCatalog::Null => None,
            ActiveCatalog::Catalog(catalog) => Some(catalog),
        }
    }
}

/// Minimal rendering environment: a set of registered extensions plus the
/// active catalog, with gettext-style lookups.
///
/// Starts out with the null catalog installed.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    extensions: Vec<String>,
    active: ActiveCatalog,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a translator with the translations for `locale` under `dirs`
    /// installed.
    pub fn load<L, P>(locale: &LocaleIdentifier, dirs: &[P], loader: &L) -> Result<Self, LoadError>
    where
        L: CatalogLoader<Catalog = Catalog>,
        P: AsRef<Path>,
    {
        let mut translator = Self::new();
        install_translations(&mut translator, locale, dirs, loader)?;
        Ok(translator)
    }

    /// Registered extensions, in registration order.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|extension| extension == name)
    }

    pub fn active(&self) -> &ActiveCatalog {
        &self.active
    }

    pub fn gettext<'a>(&'a self, msgid: &'a str) -> &'a str {
        match &self.active {
            ActiveCatalog::Null => msgid,
            ActiveCatalog::Catalog(catalog) => catalog.gettext(msgid),
        }
    }

    pub fn pgettext<'a>(&'a self, context: &str, msgid: &'a str) -> &'a str {
        match &self.active {
            ActiveCatalog::Null => msgid,
            ActiveCatalog::Catalog(catalog) => catalog.pgettext(context, msgid),
        }
    }

    pub fn ngettext<'a>(&'a self, singular: &'a str, plural: &'a str, n: u64) -> &'a str {
        match &self.active {
            ActiveCatalog::Null => untranslated(singular, plural, n),
            ActiveCatalog::Catalog(catalog) => catalog.ngettext(singular, plural, n),
        }
    }

    pub fn npgettext<'a>(
        &'a self,
        context: &str,
        singular: &'a str,
        plural: &'a str,
        n: u64,
    ) -> &'a str {
        match &self.active {
            ActiveCatalog::Null => untranslated(singular, plural, n),
            ActiveCatalog::Catalog(catalog) => catalog.npgettext(context, singular, plural, n),
        }
    }
}

impl TemplateEnvironment for Translator {
    type Catalog = Catalog;

    fn register_extension(&mut self, name: &str) {
        if !self.has_extension(name) {
            self.extensions.push(name.to_string());
        }
    }

    fn install_catalog(&mut self, catalog: Catalog) {
        self.active = ActiveCatalog::Catalog(catalog);
    }

    fn install_null_catalog(&mut self) {
        self.active = ActiveCatalog::Null;
    }
}
