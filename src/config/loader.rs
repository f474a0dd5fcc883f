// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Build the effective configuration for a CLI invocation.
///
/// - `--config PATH` must exist.
/// - Without `--config`, `Rhobatch.toml` is read only if present.
/// - Run parameters given as flags override the file, then the merged
///   result is validated.
pub fn resolve(args: &CliArgs) -> Result<ConfigFile> {
    resolve_with_default(args, &default_config_path())
}

/// [`resolve`] with an explicit location for the implicit config file.
pub fn resolve_with_default(args: &CliArgs, default_path: &Path) -> Result<ConfigFile> {
    let mut raw = match args.config {
        Some(ref path) => load_from_path(path)?,
        None => {
            let path = default_path;
            if path.is_file() {
                load_from_path(path)?
            } else {
                debug!(path = %path.display(), "no config file found; using defaults");
                RawConfigFile::default()
            }
        }
    };

    args.apply_overrides(&mut raw.run);
    ConfigFile::try_from(raw)
}

/// Default config file location: `Rhobatch.toml` in the current directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Rhobatch.toml")
}
