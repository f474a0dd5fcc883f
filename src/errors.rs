// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RhobatchError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input format error: {0}")]
    FormatError(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl From<csv::Error> for RhobatchError {
    /// Reader failures keep their IO category; everything else the CSV
    /// decoder reports is a format problem with the input table.
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => RhobatchError::IoError(io),
            _ => RhobatchError::FormatError(message),
        }
    }
}

pub type Result<T> = std::result::Result<T, RhobatchError>;

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn csv_io_failure_keeps_io_category() {
        let err = csv::Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        match RhobatchError::from(err) {
            RhobatchError::IoError(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("expected IoError, got {other:?}"),
        }
    }
}
