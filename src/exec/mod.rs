// src/exec/mod.rs

//! Process execution layer.
//!
//! The batch runner talks to an [`Invoker`] rather than spawning processes
//! itself, so tests can substitute a fake that records calls.
//!
//! - [`invoker`] defines the trait and `ProcessInvoker`, which runs the
//!   external program with `tokio::process::Command`, inheriting stdio.

use std::fmt;

pub mod invoker;

pub use invoker::{Invoker, ProcessInvoker};

/// Outcome of one external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    Success,
    Failed(InvocationFailure),
}

/// Why an invocation did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationFailure {
    /// The program ran and exited with a non-zero status.
    ExitCode(i32),
    /// The program was terminated without an exit status (e.g. a signal).
    Terminated,
    /// The program could not be started or waited on.
    Launch(String),
}

impl fmt::Display for InvocationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvocationFailure::ExitCode(code) => {
                write!(f, "program returned non-zero exit status {code}")
            }
            InvocationFailure::Terminated => {
                write!(f, "program was terminated before it exited")
            }
            InvocationFailure::Launch(reason) => write!(f, "could not run program: {reason}"),
        }
    }
}
