// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [run]
/// program = "./pollards_rho"
/// input = "all-moduli.csv"
/// skip_rows = 31
/// name_column = "ModulusName"
/// value_column = "Modulus"
/// ```
///
/// Every key is optional; missing keys take the defaults shown above.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    /// Run parameters from `[run]`.
    #[serde(default)]
    pub run: RunConfig,
}

/// `[run]` section: everything a batch needs to know before it starts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// External program, invoked as `<program> <modulus>`.
    #[serde(default = "default_program")]
    pub program: PathBuf,

    /// CSV table listing the moduli.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Leading data rows (header excluded) that are never processed.
    ///
    /// The first rows of the reference table hold a separately formatted
    /// block, hence the default of 31.
    #[serde(default = "default_skip_rows")]
    pub skip_rows: usize,

    /// Header of the column holding the record name.
    #[serde(default = "default_name_column")]
    pub name_column: String,

    /// Header of the column holding the modulus, kept as text.
    #[serde(default = "default_value_column")]
    pub value_column: String,
}

fn default_program() -> PathBuf {
    PathBuf::from("./pollards_rho")
}

fn default_input() -> PathBuf {
    PathBuf::from("all-moduli.csv")
}

fn default_skip_rows() -> usize {
    31
}

fn default_name_column() -> String {
    "ModulusName".to_string()
}

fn default_value_column() -> String {
    "Modulus".to_string()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            input: default_input(),
            skip_rows: default_skip_rows(),
            name_column: default_name_column(),
            value_column: default_value_column(),
        }
    }
}

/// Validated configuration.
///
/// Only obtainable through `ConfigFile::try_from(RawConfigFile)` (see
/// `validate.rs`), so holders can rely on the run parameters being sane.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    run: RunConfig,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(run: RunConfig) -> Self {
        Self { run }
    }

    pub fn run(&self) -> &RunConfig {
        &self.run
    }

    pub fn into_run(self) -> RunConfig {
        self.run
    }
}
