//! Lexicon CLI entry point.
//!
//! Provides command-line tools for working with gettext locale directories:
//! - `lexicon check` - Report which directories carry a catalog for a locale
//! - `lexicon translate` - Look up a message through the layered catalogs
//! - `lexicon compile` - Compile a .po catalog into .mo

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{CheckArgs, CompileArgs, TranslateArgs, run_check, run_compile, run_translate};
use tracing_subscriber::{EnvFilter, fmt};
use tracing_subscriber::prelude::*;

/// Gettext locale directory tools.
#[derive(Debug, Parser)]
#[command(name = "lexicon")]
#[command(about = "Gettext locale directory tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report the catalogs found for a locale in each directory
    Check(CheckArgs),
    /// Translate a message using the layered catalogs
    Translate(TranslateArgs),
    /// Compile a .po catalog into a .mo catalog
    Compile(CompileArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`.
fn setup_tracing(verbose: bool, color_when: ColorWhen) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("lexicon=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    let fmt_layer = fmt::layer()
        .with_writer(stderr)
        .with_ansi(!matches!(color_when, ColorWhen::Never))
        .with_target(verbose);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose, cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Translate(args) => run_translate(args),
        Commands::Compile(args) => run_compile(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(exitcode::SOFTWARE);
        }
    }
}
