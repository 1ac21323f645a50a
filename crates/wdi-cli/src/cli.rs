//! CLI argument definitions for the WDI panel builder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use wdi_model::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};

#[derive(Parser)]
#[command(
    name = "wdi-panel",
    version,
    about = "WDI Panel Builder - Convert a World Development Indicators extract to a country-year panel",
    long_about = "Convert a wide World Development Indicators extract (one row per country and\n\
                  series, one column per year) into a tidy country-year panel of eight\n\
                  economic indicators for 1975-2023.\n\n\
                  Running without a subcommand is the same as `build` with default paths."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the country-year panel from a WDI extract.
    Build(BuildArgs),

    /// List the indicators retained in the panel.
    Indicators,
}

#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// WDI DataBank CSV extract.
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Output CSV path (overwritten if it exists).
    #[arg(long = "output", short = 'o', value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
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
