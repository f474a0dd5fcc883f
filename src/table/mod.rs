// src/table/mod.rs

//! Input table handling.
//!
//! - [`record`] defines the `ModulusRecord` handed to the external program.
//! - [`select`] reads a CSV table and applies the row-selection rules:
//!   positional skip first, then field non-emptiness.

pub mod record;
pub mod select;

pub use record::ModulusRecord;
pub use select::{LoadReport, Selection, select_records};
