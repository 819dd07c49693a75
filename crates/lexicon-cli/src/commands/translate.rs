//! Implementation of the `lexicon translate` command.

use clap::Args;
use lexicon::Translator;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::commands::{CatalogArgs, report_load_error};

/// Arguments for the translate command.
#[derive(Debug, Args)]
pub struct TranslateArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Source message (msgid) to translate
    #[arg(long, required = true)]
    pub message: String,

    /// Source plural message (msgid_plural)
    #[arg(long, requires = "count")]
    pub plural: Option<String>,

    /// Count used to pick the plural form
    #[arg(long, requires = "plural")]
    pub count: Option<u64>,

    /// Message context (msgctxt)
    #[arg(long)]
    pub context: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for translate results.
#[derive(Serialize)]
pub struct TranslateResult {
    pub locale: String,
    pub translated: bool,
    pub result: String,
}

/// Run the translate command.
pub fn run_translate(args: TranslateArgs) -> Result<i32> {
    let locale = match args.catalog.resolve_locale() {
        Ok(locale) => locale,
        Err(code) => return Ok(code),
    };

    let translator = match Translator::load(&locale, &args.catalog.dirs, &args.catalog.loader()) {
        Ok(translator) => translator,
        Err(err) => return Ok(report_load_error(err)),
    };

    let result = match (&args.plural, args.count, &args.context) {
        (Some(plural), Some(count), Some(context)) => {
            translator.npgettext(context, &args.message, plural, count)
        }
        (Some(plural), Some(count), None) => translator.ngettext(&args.message, plural, count),
        (_, _, Some(context)) => translator.pgettext(context, &args.message),
        (_, _, None) => translator.gettext(&args.message),
    };
    let translated = result != args.message && Some(result) != args.plural.as_deref();

    if args.json {
        let output = TranslateResult {
            locale: locale.to_string(),
            translated,
            result: result.to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{result}");
    }
    Ok(exitcode::OK)
}
