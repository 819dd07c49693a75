//! Core value types shared by the resolver and the catalog layer.

mod locale_id;
mod message;

pub use locale_id::LocaleIdentifier;
pub use message::{Message, MessageKey};
pub(crate) use message::{CONTEXT_SEPARATOR, PLURAL_SEPARATOR};
