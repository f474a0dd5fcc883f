// src/exec/invoker.rs

//! Pluggable invocation backend.
//!
//! - `ProcessInvoker` is the production implementation: it spawns
//!   `<program> <argument>` and waits for it to exit. The child's stdin,
//!   stdout and stderr are inherited, so its output reaches the console
//!   untouched.
//! - Tests provide their own `Invoker` that records calls and returns
//!   scripted outcomes without spawning anything.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::debug;

use super::{InvocationFailure, InvocationOutcome};

/// Trait abstracting how the external program is run for one record.
///
/// Implementations must not return until the invocation is over; the batch
/// runner relies on this to keep exactly one invocation in flight.
pub trait Invoker: Send {
    fn invoke<'a>(
        &'a mut self,
        program: &'a Path,
        argument: &'a str,
    ) -> Pin<Box<dyn Future<Output = InvocationOutcome> + Send + 'a>>;
}

/// Real invoker used in production.
#[derive(Debug, Clone, Default)]
pub struct ProcessInvoker;

impl ProcessInvoker {
    pub fn new() -> Self {
        Self
    }
}

impl Invoker for ProcessInvoker {
    fn invoke<'a>(
        &'a mut self,
        program: &'a Path,
        argument: &'a str,
    ) -> Pin<Box<dyn Future<Output = InvocationOutcome> + Send + 'a>> {
        Box::pin(async move {
            match run_process(program, argument).await {
                Ok(status) => outcome_from_status(status),
                Err(err) => InvocationOutcome::Failed(InvocationFailure::Launch(format!("{err:#}"))),
            }
        })
    }
}

async fn run_process(program: &Path, argument: &str) -> Result<ExitStatus> {
    debug!(program = %program.display(), argument, "spawning external program");

    let mut child = Command::new(program)
        .arg(argument)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("spawning '{}'", program.display()))?;

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for '{}'", program.display()))?;

    debug!(
        program = %program.display(),
        exit_code = status.code(),
        success = status.success(),
        "external program exited"
    );

    Ok(status)
}

fn outcome_from_status(status: ExitStatus) -> InvocationOutcome {
    if status.success() {
        return InvocationOutcome::Success;
    }
    match status.code() {
        Some(code) => InvocationOutcome::Failed(InvocationFailure::ExitCode(code)),
        None => InvocationOutcome::Failed(InvocationFailure::Terminated),
    }
}
