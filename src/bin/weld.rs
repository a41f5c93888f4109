#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

use weld::driver::{self, DriverOptions};

/// Resolve the assisted-injection parameters of every binding in a model.
#[derive(Parser, Debug)]
#[command(name = "weld", version, about)]
struct CliArgs {
    /// JSON declaration model.
    model: PathBuf,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Do not reserve Java keywords in generated scopes.
    #[arg(long)]
    no_reserved_words: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    // Initialize tracing if WELD_LOG or RUST_LOG is set.
    // Supports WELD_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    weld::tracing_config::init_tracing();

    let args = CliArgs::parse();
    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<String> {
    let options = DriverOptions {
        reserved_words: !args.no_reserved_words,
    };
    let reports = driver::run_file(&args.model, &options)?;
    match args.format {
        OutputFormat::Text => Ok(driver::render_text(&reports)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&reports).context("failed to serialize report")?;
            json.push('\n');
            Ok(json)
        }
    }
}
