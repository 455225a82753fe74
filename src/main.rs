//! `values-scan`: count and preview the tuples of an SQL dump's VALUES list.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=values_scan=debug`).

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use values_scan::{OutputFormat, ScanConfig, TruncationPolicy, ValuesError, scan_file};

#[derive(Debug, Parser)]
#[command(name = "values-scan", version, about)]
struct Cli {
    /// SQL file containing an INSERT ... VALUES statement
    input: PathBuf,

    /// JSON config file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only scan the INSERT INTO statement of this table
    #[arg(long)]
    table: Option<String>,

    /// Characters of each tuple to preview
    #[arg(long)]
    preview: Option<usize>,

    /// Fail on an unbalanced trailing tuple instead of dropping it
    #[arg(long)]
    strict: bool,

    /// Split each tuple into typed fields
    #[arg(long)]
    fields: bool,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<(PathBuf, ScanConfig)> {
        let mut config = match &self.config {
            Some(path) => ScanConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ScanConfig::default(),
        };

        if let Some(table) = self.table {
            config.table = Some(table);
        }
        if let Some(preview) = self.preview {
            config.preview_chars = preview;
        }
        if self.strict {
            config.policy = TruncationPolicy::Strict;
        }
        if self.fields {
            config.include_fields = true;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config.validate()?;

        Ok((self.input, config))
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let (input, config) = cli.into_config()?;
    let summary = scan_file(&input, &config)
        .with_context(|| format!("scanning {}", input.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.format {
        OutputFormat::Text => summary.write_text(&mut out)?,
        OutputFormat::Json => summary.write_json(&mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(ValuesError::ValuesNotFound) = err.downcast_ref::<ValuesError>() {
                eprintln!("ERROR: Could not find VALUES section");
            } else {
                eprintln!("ERROR: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
