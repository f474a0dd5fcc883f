// src/batch/mod.rs

//! Batch orchestration: load the moduli table, then run the external
//! program once per record, strictly one after another.
//!
//! A failing record never stops the batch; its failure is reported and
//! collected in the [`RunSummary`].

pub mod runner;
pub mod summary;

pub use runner::BatchRunner;
pub use summary::{FailedRecord, RunSummary};
