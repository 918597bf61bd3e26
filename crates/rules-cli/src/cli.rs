//! CLI argument definitions for the league rules transpiler.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// Default location of the Sleeper export inside the site tree.
pub const DEFAULT_INPUT: &str = "src/_content/sleeper_league.json";

/// Default location of the generated rules document.
pub const DEFAULT_OUTPUT: &str = "src/_content/rules.json";

#[derive(Parser)]
#[command(
    name = "league-rules",
    version,
    about = "Generate the league rules document from a Sleeper export",
    long_about = "Project a Sleeper league export into the display-ready rules\n\
                  document consumed by the site's templating layer: seven fixed\n\
                  sections of pre-formatted facts, regenerated in full on every run."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Transform a league export into the rules document.
    Generate(GenerateArgs),

    /// List the fixed rules sections and their anchors.
    Sections,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the Sleeper league export.
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Destination for the generated rules document.
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Provenance date embedded in the output (defaults to today, UTC).
    ///
    /// Pass a fixed date for reproducible runs.
    #[arg(long = "snapshot-date", value_name = "YYYY-MM-DD")]
    pub snapshot_date: Option<NaiveDate>,

    /// Project and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
