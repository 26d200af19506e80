//! # CLI Module
//!
//! Command definitions and handlers for the `fizzbuzz` binary.
//!
//! Handlers return the rendered output instead of printing it, so they can be
//! exercised directly from tests. Only `main.rs` touches stdout.

use clap::{Parser, Subcommand, ValueEnum};
use fizzbuzz_core::{CoreError, Label, Sequence, Tally};
use serde::Serialize;
use thiserror::Error;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One label per line.
    #[default]
    Text,
    /// A JSON document.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "fizzbuzz")]
#[command(about = "Label integers as fizz, buzz, fizzbuzz, or themselves", version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, env = "FIZZBUZZ_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Label each given integer
    Classify {
        /// Integers to label
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
    /// Label every integer in an inclusive range
    Range {
        /// First integer
        #[arg(allow_negative_numbers = true)]
        start: i64,
        /// Last integer (inclusive)
        #[arg(allow_negative_numbers = true)]
        end: i64,
        /// Print per-label counts instead of the labels
        #[arg(long)]
        summary: bool,
    },
}

/// Filter directive for the log subscriber when `RUST_LOG` is unset.
///
/// `--verbose` forces `debug`; otherwise `--log-level` applies.
#[must_use]
pub fn log_level(cli: &Cli) -> &str {
    if cli.verbose { "debug" } else { &cli.log_level }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// A labeled integer, as rendered in JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub number: i64,
    pub label: Label,
}

impl Entry {
    #[must_use]
    pub fn new(number: i64) -> Self {
        Self {
            number,
            label: Label::of(number),
        }
    }
}

fn render_entries(entries: &[Entry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(entries
            .iter()
            .map(|entry| entry.label.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
    }
}

fn render_tally(tally: &Tally, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut lines: Vec<String> = tally
                .iter()
                .map(|(kind, count)| format!("{}: {}", kind, count))
                .collect();
            lines.push(format!("total: {}", tally.total()));
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tally)?),
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Label each number in input order.
pub fn cmd_classify(numbers: &[i64], format: OutputFormat) -> Result<String> {
    tracing::debug!(count = numbers.len(), ?format, "classifying numbers");
    let entries: Vec<Entry> = numbers.iter().copied().map(Entry::new).collect();
    render_entries(&entries, format)
}

/// Label the inclusive range `[start, end]`, or summarize it.
pub fn cmd_range(start: i64, end: i64, summary: bool, format: OutputFormat) -> Result<String> {
    let sequence = Sequence::new(start, end)?;
    tracing::debug!(start, end, len = sequence.len(), summary, "labeling range");

    if summary {
        let tally = Tally::from_sequence(sequence);
        tracing::info!(total = tally.total(), "range summarized");
        return render_tally(&tally, format);
    }

    let entries: Vec<Entry> = sequence
        .map(|(number, label)| Entry { number, label })
        .collect();
    render_entries(&entries, format)
}

/// Dispatch a parsed command line.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Classify { numbers } => cmd_classify(numbers, cli.format),
        Commands::Range {
            start,
            end,
            summary,
        } => cmd_range(*start, *end, *summary, cli.format),
    }
}

// =============================================================================
// TESTS
// =============================================================================
