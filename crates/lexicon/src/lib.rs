pub mod catalog;
pub mod environment;
pub mod locale;
pub mod parser;
pub mod types;

pub use catalog::{Catalog, CatalogLoader, DEFAULT_DOMAIN, GettextLoader, LoadError, MergeCatalog};
pub use environment::{
    ActiveCatalog, I18N_EXTENSION, TemplateEnvironment, Translator, install_translations,
    layer_catalogs, merged_translations,
};
pub use locale::{LocaleError, parse_locale};
pub use types::{LocaleIdentifier, Message, MessageKey};
