//! Translation catalogs and the facilities that load them.
//!
//! [`Catalog`] is the concrete gettext catalog. [`CatalogLoader`] and
//! [`MergeCatalog`] are the capabilities the installer consumes, so tests and
//! embedders can substitute their own catalog sources.

mod error;
mod loader;
mod translations;

pub use error::LoadError;
pub use loader::{CatalogLoader, DEFAULT_DOMAIN, GettextLoader, MergeCatalog};
pub use translations::Catalog;
pub(crate) use translations::untranslated;
