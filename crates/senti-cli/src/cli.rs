//! CLI argument definitions for the `senti` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "senti",
    version,
    about = "Load labeled sentiment datasets and build reputation reports",
    long_about = "Load labeled sentiment messages from CSV or Excel files,\n\
                  validate and normalize them, and aggregate classifier\n\
                  predictions into a class distribution with a reputation index."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load and validate a dataset, printing load statistics.
    Load(LoadArgs),

    /// Load a dataset and build a reputation report from predictions.
    Report(ReportArgs),
}

#[derive(Parser)]
pub struct LoadArgs {
    /// Input dataset (.csv, .xlsx, or .xls).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Label vocabulary of the source file.
    #[arg(long, value_enum, default_value = "sentiment3")]
    pub vocabulary: VocabularyArg,

    /// Minimum text length for a row to be accepted (default 5).
    #[arg(long = "min-text-length", value_name = "N")]
    pub min_text_length: Option<usize>,

    /// Where record ids come from.
    ///
    /// `column` requires an id column in the source; `ordinal` uses the id
    /// column when present and falls back to the row ordinal.
    #[arg(long = "id-source", value_enum, default_value = "column")]
    pub id_source: IdSourceArg,

    /// Fill a missing date column with the fixed default date instead of
    /// leaving dates unset.
    #[arg(long = "date-default")]
    pub date_default: bool,

    /// Print machine-readable JSON instead of tables.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// File with one integer prediction per line, aligned with the accepted
    /// records.
    #[arg(long, value_name = "PATH")]
    pub predictions: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum VocabularyArg {
    /// Named labels: negative=0, neutral=1, positive=2.
    Sentiment3,
    /// Numeric codes: negative=0, positive=1.
    Polarity2,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum IdSourceArg {
    Column,
    Ordinal,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
