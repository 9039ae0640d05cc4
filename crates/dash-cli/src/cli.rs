//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use dash_model::Theme;
use dash_view::SortKey;

#[derive(Parser)]
#[command(
    name = "storage-dashboard",
    version,
    about = "Storage usage dashboard for the terminal",
    long_about = "Show storage usage, files and per-type breakdown.\n\n\
                  Data comes from an HTTP endpoint returning a storage snapshot, \
                  or from built-in example data when no endpoint is configured."
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

    /// Settings file (default: platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Storage endpoint URL (overrides settings).
    #[arg(long = "endpoint", value_name = "URL", global = true)]
    pub endpoint: Option<String>,

    /// Color theme (overrides settings).
    #[arg(long = "theme", value_enum, global = true)]
    pub theme: Option<ThemeArg>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show usage statistics and the per-type breakdown.
    Overview,

    /// List files.
    Files(FilesArgs),

    /// List registered dashboard tabs.
    Tabs,

    /// Validate a snapshot JSON file.
    Validate(ValidateArgs),

    /// Show the effective settings, or write them with --save.
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct FilesArgs {
    /// Sort column (default from settings).
    #[arg(long = "sort", value_enum)]
    pub sort: Option<SortArg>,

    /// Sort descending.
    #[arg(long = "desc")]
    pub desc: bool,

    /// Only show files whose name, path or type contains TEXT.
    #[arg(long = "filter", value_name = "TEXT")]
    pub filter: Option<String>,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Snapshot file in the endpoint's JSON format.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Write the effective settings (including --endpoint/--theme) to the settings file.
    #[arg(long = "save")]
    pub save: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Name,
    Size,
    Type,
    Modified,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => Self::Name,
            SortArg::Size => Self::Size,
            SortArg::Type => Self::Type,
            SortArg::Modified => Self::LastModified,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    Auto,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
            ThemeArg::Auto => Self::Auto,
        }
    }
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
