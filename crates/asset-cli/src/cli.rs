//! Command-line arguments for `asset-register`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "asset-register",
    version,
    about = "Group peripheral assets of the fixed-asset register into desktop sets",
    long_about = "Group peripheral assets of the fixed-asset register into desktop sets.\n\n\
                  Tags of the form SSBAS/<Mo|Ko|Ro|Co>/<YYYY-YY>/T<n> are collected into\n\
                  one set per financial year and set number. Reads CSV or JSON exports."
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

    /// Log output format.
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

    /// Settings file (default: settings.toml in the user config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Group an asset file into desktop sets.
    Sets(SetsArgs),

    /// List assets that are not desktop-set peripherals.
    Ungrouped(InputArgs),

    /// Explain how individual tags are parsed.
    Parse(ParseArgs),

    /// Find assets by tag, class, description or location.
    Search(SearchArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// Asset export (.csv or .json).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}

#[derive(Args)]
pub struct SetsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only show sets with missing components.
    #[arg(long = "incomplete")]
    pub incomplete: bool,

    /// Order set ids by number (T2 before T10) instead of as text.
    #[arg(long = "numeric-order")]
    pub numeric_order: bool,

    /// Print the grouping result as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ParseArgs {
    /// Asset tags to parse.
    #[arg(value_name = "TAG", required = true)]
    pub tags: Vec<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Case-insensitive text to look for.
    #[arg(value_name = "QUERY")]
    pub query: String,
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
