//! Catalog loading capabilities and the gettext filesystem loader.

use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::from_utf8;

use bon::Builder;
use tracing::{debug, trace};

use crate::catalog::{Catalog, LoadError};
use crate::parser::ParseError;
use crate::types::LocaleIdentifier;

/// Catalog file stem used when no domain is configured.
pub const DEFAULT_DOMAIN: &str = "messages";

/// Subdirectory of a locale directory that holds message catalogs.
const MESSAGES_DIR: &str = "LC_MESSAGES";

/// Layering of one catalog over a lower-precedence one.
pub trait MergeCatalog {
    /// Make every message of `base` that `self` lacks available through
    /// `self`. Messages `self` already defines keep their own text.
    fn merge(&mut self, base: Self)
    where
        Self: Sized;
}

/// Source of catalogs rooted at candidate directories.
pub trait CatalogLoader {
    type Catalog: MergeCatalog;

    /// Load the catalog for `locale` under `directory`.
    ///
    /// Returns `Ok(None)` when the directory simply has no catalog for the
    /// locale. Errors are reserved for catalogs that exist but cannot be
    /// read or decoded.
    fn load(
        &self,
        directory: &Path,
        locale: &LocaleIdentifier,
    ) -> Result<Option<Self::Catalog>, LoadError>;
}

/// Loads gettext catalogs laid out as
/// `<directory>/<locale>/LC_MESSAGES/<domain>.{mo,po}`.
///
/// For each lookup key the compiled `.mo` file is preferred over the `.po`
/// source. With `language_fallback` enabled (the default), a territory
/// locale such as `fr_CA` falls back to the `fr` catalog of the same
/// directory when it has no catalog of its own.
///
/// # Example
///
/// ```
/// use lexicon::GettextLoader;
///
/// let loader = GettextLoader::builder()
///     .domain("theme")
///     .language_fallback(false)
///     .build();
/// assert_eq!(loader.domain(), "theme");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct GettextLoader {
    /// Catalog file stem.
    #[builder(default = DEFAULT_DOMAIN.to_string())]
    domain: String,

    /// Whether `language_TERRITORY` lookups also try the bare language.
    #[builder(default = true)]
    language_fallback: bool,
}

impl Default for GettextLoader {
    fn default() -> Self {
        GettextLoader::builder().build()
    }
}

impl GettextLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn language_fallback(&self) -> bool {
        self.language_fallback
    }

    /// Catalog files consulted for `locale` under `directory`, in order.
    pub fn candidate_paths(&self, directory: &Path, locale: &LocaleIdentifier) -> Vec<PathBuf> {
        let mut keys = locale.fallback_chain();
        if !self.language_fallback {
            keys.truncate(1);
        }

        keys.iter()
            .flat_map(|key| {
                let messages = directory.join(key).join(MESSAGES_DIR);
                [
                    messages.join(format!("{}.mo", self.domain)),
                    messages.join(format!("{}.po", self.domain)),
                ]
            })
            .collect()
    }
}

impl CatalogLoader for GettextLoader {
    type Catalog = Catalog;

    fn load(&self, directory: &Path, locale: &LocaleIdentifier) -> Result<Option<Catalog>, LoadError> {
        for path in self.candidate_paths(directory, locale) {
            let Some(bytes) = read_if_present(&path)? else {
                trace!(path = %path.display(), "no catalog file");
                continue;
            };

            let catalog = decode(&path, &bytes).map_err(|source| LoadError::Format {
                path: path.clone(),
                source,
            })?;
            debug!(
                path = %path.display(),
                messages = catalog.len(),
                "loaded catalog"
            );
            return Ok(Some(catalog.with_source(path)));
        }
        Ok(None)
    }
}

/// Read a file, mapping "not found" to `None`.
fn read_if_present(path: &Path) -> Result<Option<Vec<u8>>, LoadError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(LoadError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn decode(path: &Path, bytes: &[u8]) -> Result<Catalog, ParseError> {
    match path.extension().and_then(OsStr::to_str) {
        Some("po") => {
            let content = from_utf8(bytes).map_err(|_| ParseError::InvalidUtf8)?;
            Catalog::from_po_str(content)
        }
        _ => Catalog::from_mo_bytes(bytes),
    }
}
