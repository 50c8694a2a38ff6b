//! ident-lint CLI tool.
//!
//! Usage:
//! ```bash
//! ident-lint [OPTIONS] <FILE>
//! ```
//!
//! Exit codes: 0 when the file is clean, 1 when violations were found,
//! 2 on usage, read, or parse errors.

use anyhow::Result;
use clap::Parser;
use ident_lint_core::{check_file, CheckError};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod output;

/// Checks a Rust source file for short, low-information variable names
#[derive(Parser)]
#[command(name = "ident-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Rust source file to check
    file: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for diagnostics.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output, one line per finding.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-finding `file:line:column` format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Diagnostics own stdout; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match check_file(&cli.file) {
        Ok(result) => result,
        Err(CheckError::Parse { message, .. }) => {
            eprintln!("Failed to parse file: {message}");
            std::process::exit(2);
        }
        Err(CheckError::Io(err)) => {
            eprintln!("Failed to read file: {err}");
            std::process::exit(2);
        }
    };

    tracing::debug!(
        "checked {}: {} diagnostic(s)",
        cli.file.display(),
        result.diagnostics.len()
    );

    output::print(&result, cli.format)?;

    if result.has_violations() {
        std::process::exit(1);
    }

    Ok(())
}
