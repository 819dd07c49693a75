//! Implementation of the `lexicon compile` command.

use std::fs::{read_to_string, write};
use std::path::PathBuf;

use clap::Args;
use lexicon::Catalog;
use lexicon::parser::parse_po;
use miette::{Report, Result, miette};
use tracing::info;

use crate::output::diagnostic::CatalogDiagnostic;

/// Arguments for the compile command.
#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Catalog source to compile (.po)
    pub input: PathBuf,

    /// Output file. Defaults to the input with a .mo extension.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include entries flagged fuzzy
    #[arg(long)]
    pub use_fuzzy: bool,
}

/// Run the compile command.
pub fn run_compile(args: CompileArgs) -> Result<i32> {
    let content = match read_to_string(&args.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Cannot read {}: {e}", args.input.display());
            return Ok(exitcode::IOERR);
        }
    };

    let catalog = match parse_po(&content)
        .and_then(|entries| Catalog::from_po_entries(entries, args.use_fuzzy))
    {
        Ok(catalog) => catalog,
        Err(e) => {
            match CatalogDiagnostic::from_parse_error(&args.input, &content, &e) {
                Some(diagnostic) => eprintln!("{:?}", Report::new(diagnostic)),
                None => eprintln!("{:?}", miette!("{}: {e}", args.input.display())),
            }
            return Ok(exitcode::DATAERR);
        }
    };

    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("mo"));
    if let Err(e) = write(&output, catalog.to_mo_bytes()) {
        eprintln!("Cannot write {}: {e}", output.display());
        return Ok(exitcode::CANTCREAT);
    }

    info!(
        input = %args.input.display(),
        output = %output.display(),
        messages = catalog.len(),
        "compiled catalog"
    );
    println!("{} messages -> {}", catalog.len(), output.display());
    Ok(exitcode::OK)
}
