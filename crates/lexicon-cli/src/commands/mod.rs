//! CLI command implementations.

mod check;
mod compile;
mod translate;

use std::path::PathBuf;

use clap::Args;
use lexicon::{DEFAULT_DOMAIN, GettextLoader, LoadError, LocaleIdentifier, parse_locale};
use miette::Report;
use tracing::debug;

use crate::output::{LocaleDiagnostic, load_error_report};

pub use check::{CheckArgs, run_check};
pub use compile::{CompileArgs, run_compile};
pub use translate::{TranslateArgs, run_translate};

/// Catalog lookup options shared by `check` and `translate`.
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Locale to resolve (e.g., fr, pt_BR)
    #[arg(long, env = "LEXICON_LOCALE")]
    pub locale: String,

    /// Catalog file name inside LC_MESSAGES, without extension
    #[arg(long, default_value = DEFAULT_DOMAIN)]
    pub domain: String,

    /// Only look up the full locale, never its bare language
    #[arg(long)]
    pub no_fallback: bool,

    /// Locale directories, lowest precedence first
    #[arg(required = true)]
    pub dirs: Vec<PathBuf>,
}

impl CatalogArgs {
    /// Resolve `--locale`, printing a diagnostic and returning the exit code
    /// on failure.
    pub fn resolve_locale(&self) -> Result<LocaleIdentifier, i32> {
        match parse_locale(&self.locale) {
            Ok(locale) => {
                debug!(raw = %self.locale, %locale, "resolved locale");
                Ok(locale)
            }
            Err(err) => {
                let diagnostic = LocaleDiagnostic::from_locale_error(&err);
                eprintln!("{:?}", Report::new(diagnostic));
                Err(exitcode::DATAERR)
            }
        }
    }

    pub fn loader(&self) -> GettextLoader {
        GettextLoader::builder()
            .domain(self.domain.clone())
            .language_fallback(!self.no_fallback)
            .build()
    }
}

/// Print a catalog load failure and return the exit code for it.
pub fn report_load_error(err: LoadError) -> i32 {
    let code = if err.is_format_error() {
        exitcode::DATAERR
    } else {
        exitcode::IOERR
    };
    eprintln!("{:?}", load_error_report(err));
    code
}
