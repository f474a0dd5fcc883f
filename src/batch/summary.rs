// src/batch/summary.rs

use std::fmt;

use crate::exec::InvocationFailure;
use crate::table::ModulusRecord;

/// A record whose invocation did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRecord {
    pub record: ModulusRecord,
    pub failure: InvocationFailure,
}

/// What happened over a whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: Vec<FailedRecord>,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} attempted, {} succeeded, {} failed",
            self.attempted,
            self.succeeded,
            self.failed.len()
        )
    }
}
