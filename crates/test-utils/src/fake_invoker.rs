use std::collections::HashSet;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use rhobatch::exec::{InvocationFailure, InvocationOutcome, Invoker};

/// One call observed by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub argument: String,
}

/// A fake invoker that:
/// - records every (program, argument) pair it is asked to run
/// - fails with exit status 1 for arguments listed in `failing`, or for
///   everything when built with [`FakeInvoker::always_failing`]
/// - succeeds otherwise.
#[derive(Debug, Clone, Default)]
pub struct FakeInvoker {
    calls: Arc<Mutex<Vec<Invocation>>>,
    failing: HashSet<String>,
    fail_all: bool,
}

impl FakeInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn always_failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    pub fn failing_for(mut self, argument: &str) -> Self {
        self.failing.insert(argument.to_string());
        self
    }

    /// Handle onto the call log that stays valid after the invoker is moved
    /// into a runner.
    pub fn calls(&self) -> Arc<Mutex<Vec<Invocation>>> {
        Arc::clone(&self.calls)
    }

    pub fn arguments(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.argument.clone())
            .collect()
    }
}

impl Invoker for FakeInvoker {
    fn invoke<'a>(
        &'a mut self,
        program: &'a Path,
        argument: &'a str,
    ) -> Pin<Box<dyn Future<Output = InvocationOutcome> + Send + 'a>> {
        Box::pin(async move {
            {
                let mut guard = self.calls.lock().unwrap();
                guard.push(Invocation {
                    program: program.to_path_buf(),
                    argument: argument.to_string(),
                });
            }

            if self.fail_all || self.failing.contains(argument) {
                InvocationOutcome::Failed(InvocationFailure::ExitCode(1))
            } else {
                InvocationOutcome::Success
            }
        })
    }
}
