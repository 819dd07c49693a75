//! Catalog file codecs.
//!
//! This module decodes the two gettext catalog formats (`.po` text and `.mo`
//! binary), the header metadata they carry and the `Plural-Forms` expression
//! language, and encodes `.mo` files for compilation.

pub mod ast;
pub mod error;
mod header;
mod mo;
mod plural;
mod po;

pub use ast::*;
pub use error::ParseError;
pub use header::parse_header;
pub use mo::{parse_mo, write_mo};
pub use plural::parse_plural_forms;
pub use po::parse_po;
