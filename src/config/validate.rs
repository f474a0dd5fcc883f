// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile, RunConfig};
use crate::errors::{Result, RhobatchError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = RhobatchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_run_config(&raw.run)?;
        Ok(ConfigFile::new_unchecked(raw.run))
    }
}

/// Check the invariants every batch relies on.
pub fn validate_run_config(run: &RunConfig) -> Result<()> {
    validate_program(run)?;
    validate_columns(run)?;
    Ok(())
}

fn validate_program(run: &RunConfig) -> Result<()> {
    if run.program.as_os_str().is_empty() {
        return Err(RhobatchError::ConfigError(
            "[run].program must not be empty".to_string(),
        ));
    }
    if run.input.as_os_str().is_empty() {
        return Err(RhobatchError::ConfigError(
            "[run].input must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_columns(run: &RunConfig) -> Result<()> {
    if run.name_column.is_empty() {
        return Err(RhobatchError::ConfigError(
            "[run].name_column must not be empty".to_string(),
        ));
    }
    if run.value_column.is_empty() {
        return Err(RhobatchError::ConfigError(
            "[run].value_column must not be empty".to_string(),
        ));
    }
    if run.name_column == run.value_column {
        return Err(RhobatchError::ConfigError(format!(
            "[run].name_column and [run].value_column both refer to '{}'",
            run.name_column
        )));
    }
    Ok(())
}
