//! Stable process exit codes for the `rhobatch` binary.

/// Every selected record was attempted (and, with `--strict`, all succeeded).
pub const OK: i32 = 0;
/// Configuration or input table could not be loaded; nothing was run.
pub const INVALID: i32 = 1;
/// `--strict` was given and at least one record failed.
pub const RECORD_FAILURES: i32 = 2;
