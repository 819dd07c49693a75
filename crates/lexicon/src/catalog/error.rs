//! Error types for catalog loading.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::parser::ParseError;

/// Errors that occur while loading a catalog from disk.
///
/// A directory without a catalog is not an error; loaders report that as
/// `Ok(None)`. These variants cover catalogs that exist but cannot be used.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error other than the catalog being absent.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The catalog file exists but its contents are corrupt.
    #[error("malformed catalog '{path}': {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl LoadError {
    /// The file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Format { path, .. } => path.as_path(),
        }
    }

    /// Whether the failure is corrupt catalog data rather than I/O.
    pub fn is_format_error(&self) -> bool {
        matches!(self, LoadError::Format { .. })
    }
}
