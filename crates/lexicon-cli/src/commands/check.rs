//! Implementation of the `lexicon check` command.

use clap::Args;
use lexicon::{Catalog, CatalogLoader, layer_catalogs};
use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::commands::{CatalogArgs, report_load_error};
use crate::output::table::{DirectoryReport, format_directory_table};

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for check results.
#[derive(Debug, Serialize)]
struct CheckJson {
    locale: String,
    directories: Vec<DirectoryJson>,
    merged_messages: Option<usize>,
}

#[derive(Debug, Serialize)]
struct DirectoryJson {
    directory: String,
    catalog: Option<String>,
    messages: Option<usize>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let locale = match args.catalog.resolve_locale() {
        Ok(locale) => locale,
        Err(code) => return Ok(code),
    };
    let loader = args.catalog.loader();

    let mut reports = Vec::with_capacity(args.catalog.dirs.len());
    let mut catalogs = Vec::with_capacity(args.catalog.dirs.len());
    for dir in &args.catalog.dirs {
        let catalog = match loader.load(dir, &locale) {
            Ok(catalog) => catalog,
            Err(err) => return Ok(report_load_error(err)),
        };
        reports.push(DirectoryReport {
            directory: dir.display().to_string(),
            catalog: catalog
                .as_ref()
                .and_then(|catalog| catalog.sources().last())
                .map(|path| path.display().to_string()),
            messages: catalog.as_ref().map(Catalog::len),
        });
        catalogs.extend(catalog);
    }

    let merged = layer_catalogs(catalogs);

    if args.json {
        let json_data = CheckJson {
            locale: locale.to_string(),
            directories: reports
                .into_iter()
                .map(|report| DirectoryJson {
                    directory: report.directory,
                    catalog: report.catalog,
                    messages: report.messages,
                })
                .collect(),
            merged_messages: merged.as_ref().map(Catalog::len),
        };
        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{json_output}");
    } else {
        println!("{}", format_directory_table(&reports));
        match &merged {
            Some(catalog) => println!(
                "\n{} {locale}: {} messages from {} catalog(s)",
                "ok".if_supports_color(Stream::Stdout, |text| text.green()),
                catalog.len(),
                catalog.sources().len()
            ),
            None => println!(
                "\n{} {locale}: no catalogs found, messages render untranslated",
                "note".if_supports_color(Stream::Stdout, |text| text.yellow()),
            ),
        }
    }

    Ok(exitcode::OK)
}
