//! CLI argument definitions for the data readiness audit.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "data-readiness",
    version,
    about = "Audit CRM table exports against the fraud-layer field catalog",
    long_about = "Audit exported CRM tables against a catalog of required fields.\n\n\
                  Profiles each declared CSV table, resolves every required field to a\n\
                  source column, and writes mapping.json plus a markdown readiness report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Allow sample cell values in trace logs (customer data).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Profile the export folder, resolve coverage and write the outputs.
    Audit(AuditArgs),

    /// Validate and print the field catalog.
    Catalog(CatalogArgs),

    /// Print column profiles for the declared tables.
    Profile(ProfileArgs),
}

#[derive(Parser)]
pub struct AuditArgs {
    /// Folder containing the exported CSV tables.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Output directory for generated files (default: <INPUT_DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Catalog TOML replacing the built-in one.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Date printed in the report header (default: today).
    #[arg(long = "report-date", value_name = "YYYY-MM-DD")]
    pub report_date: Option<NaiveDate>,

    /// Data source line printed in the report header.
    #[arg(
        long = "data-source",
        value_name = "TEXT",
        default_value = "Salesforce Export"
    )]
    pub data_source: String,

    /// Resolve and summarize without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Catalog TOML to validate instead of the built-in one.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// Folder containing the exported CSV tables.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Catalog TOML whose declared tables are profiled.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,
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
