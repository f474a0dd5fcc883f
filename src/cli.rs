// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::RunConfig;

/// Command-line arguments for `rhobatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rhobatch",
    version,
    about = "Run an external factorization program once per modulus listed in a CSV table.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `Rhobatch.toml` in the current directory is used when it
    /// exists; otherwise built-in defaults apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// External program invoked as `<PROGRAM> <modulus>`.
    #[arg(long, value_name = "PROGRAM")]
    pub program: Option<PathBuf>,

    /// CSV file listing the moduli.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Number of leading data rows (after the header) to skip.
    #[arg(long, value_name = "N")]
    pub skip_rows: Option<usize>,

    /// Header of the column holding the modulus name.
    #[arg(long, value_name = "COLUMN")]
    pub name_column: Option<String>,

    /// Header of the column holding the modulus value.
    #[arg(long, value_name = "COLUMN")]
    pub value_column: Option<String>,

    /// Exit with a non-zero status if any record failed.
    #[arg(long)]
    pub strict: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RHOBATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load config and input, print the selected records, but don't run
    /// the external program.
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// Overlay any run parameters given on the command line onto `run`.
    pub fn apply_overrides(&self, run: &mut RunConfig) {
        if let Some(ref program) = self.program {
            run.program = program.clone();
        }
        if let Some(ref input) = self.input {
            run.input = input.clone();
        }
        if let Some(skip_rows) = self.skip_rows {
            run.skip_rows = skip_rows;
        }
        if let Some(ref column) = self.name_column {
            run.name_column = column.clone();
        }
        if let Some(ref column) = self.value_column {
            run.value_column = column.clone();
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(lvl: LogLevel) -> Self {
        match lvl {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
