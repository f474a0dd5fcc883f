// src/config/mod.rs

//! Configuration loading and validation for rhobatch.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk and merge CLI overrides (`loader.rs`).
//! - Validate the run parameters (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, resolve, resolve_with_default};
pub use model::{ConfigFile, RawConfigFile, RunConfig};
