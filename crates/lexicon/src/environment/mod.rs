//! Installing translations into a template environment.
//!
//! [`install_translations`] is the single entry point: it registers the i18n
//! extension, layers the catalogs found in an ordered list of directories,
//! and installs either the merged catalog or the null catalog.

mod translator;

use std::path::Path;

use tracing::debug;

use crate::catalog::{CatalogLoader, LoadError, MergeCatalog};
use crate::types::LocaleIdentifier;

pub use translator::{ActiveCatalog, Translator};

/// Name of the extension registered on every environment that receives
/// translations.
pub const I18N_EXTENSION: &str = "i18n";

/// The capabilities a template environment exposes to the installer.
pub trait TemplateEnvironment {
    type Catalog;

    fn register_extension(&mut self, name: &str);

    /// Make `catalog` the active translation source.
    fn install_catalog(&mut self, catalog: Self::Catalog);

    /// Make the identity catalog, which returns every message unchanged,
    /// the active translation source.
    fn install_null_catalog(&mut self);
}

/// Install the translations for `locale` found under `dirs` into `env`.
///
/// `dirs` is ordered from lowest to highest precedence: when several
/// directories translate the same message, the text from the **last** one
/// wins, and earlier directories fill in the messages later ones omit.
/// Directories without a catalog for the locale are skipped; if none has
/// one, the null catalog is installed.
///
/// The i18n extension is registered exactly once per call, before any
/// catalog is loaded, and exactly one of `install_catalog` /
/// `install_null_catalog` is called on success.
///
/// # Errors
///
/// A catalog that exists but cannot be read or decoded aborts the call with
/// its [`LoadError`]; nothing is installed in that case.
///
/// # Example
///
/// ```
/// use lexicon::{GettextLoader, Translator, install_translations, parse_locale};
///
/// let mut env = Translator::new();
/// let no_dirs: [&str; 0] = [];
/// install_translations(&mut env, &parse_locale("en").unwrap(), &no_dirs, &GettextLoader::new())
///     .unwrap();
///
/// assert!(env.active().is_null());
/// assert_eq!(env.gettext("Search"), "Search");
/// ```
pub fn install_translations<E, L, P>(
    env: &mut E,
    locale: &LocaleIdentifier,
    dirs: &[P],
    loader: &L,
) -> Result<(), LoadError>
where
    E: TemplateEnvironment<Catalog = L::Catalog>,
    L: CatalogLoader,
    P: AsRef<Path>,
{
    env.register_extension(I18N_EXTENSION);

    match merged_translations(locale, dirs, loader)? {
        Some(catalog) => {
            debug!(%locale, "installing merged catalog");
            env.install_catalog(catalog);
        }
        None => {
            debug!(%locale, "no catalogs found, installing null catalog");
            env.install_null_catalog();
        }
    }
    Ok(())
}

/// Load and layer the catalogs for `locale` found under `dirs`.
///
/// Every directory is loaded before any merging, then the catalogs are
/// layered with [`layer_catalogs`], so later directories take precedence.
/// Returns `None` when no directory has a catalog.
pub fn merged_translations<L, P>(
    locale: &LocaleIdentifier,
    dirs: &[P],
    loader: &L,
) -> Result<Option<L::Catalog>, LoadError>
where
    L: CatalogLoader,
    P: AsRef<Path>,
{
    let mut catalogs = Vec::with_capacity(dirs.len());
    for dir in dirs {
        let dir = dir.as_ref();
        match loader.load(dir, locale)? {
            Some(catalog) => {
                debug!(%locale, dir = %dir.display(), "found catalog");
                catalogs.push(catalog);
            }
            None => debug!(%locale, dir = %dir.display(), "no catalog in directory"),
        }
    }

    Ok(layer_catalogs(catalogs))
}

/// Layer catalogs ordered lowest precedence first.
///
/// Folds left to right: each catalog receives the accumulated result as its
/// base, so its own translations win. Returns `None` for an empty input.
pub fn layer_catalogs<C, I>(catalogs: I) -> Option<C>
where
    C: MergeCatalog,
    I: IntoIterator<Item = C>,
{
    catalogs.into_iter().reduce(|base, mut catalog| {
        catalog.merge(base);
        catalog
    })
}
