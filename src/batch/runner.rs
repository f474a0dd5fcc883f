// src/batch/runner.rs

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::RunConfig;
use crate::errors::Result;
use crate::exec::{InvocationOutcome, Invoker};
use crate::fs::{FileSystem, RealFileSystem};
use crate::table::{LoadReport, ModulusRecord, Selection, select_records};

use super::summary::{FailedRecord, RunSummary};

/// Loads the moduli table and drives one external invocation per record.
///
/// Human-readable notices ("Running for ...", "Error processing ...") go to
/// the console writer, stdout by default, interleaved with whatever the
/// external program prints. Structured events go through `tracing`.
pub struct BatchRunner<I: Invoker> {
    config: RunConfig,
    fs: Arc<dyn FileSystem>,
    invoker: I,
    console: Box<dyn Write + Send>,
}

impl<I: Invoker> fmt::Debug for BatchRunner<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchRunner")
            .field("config", &self.config)
            .field("fs", &self.fs)
            .finish_non_exhaustive()
    }
}

impl<I: Invoker> BatchRunner<I> {
    pub fn new(config: RunConfig, invoker: I) -> Self {
        Self {
            config,
            fs: Arc::new(RealFileSystem),
            invoker,
            console: Box::new(io::stdout()),
        }
    }

    /// Read the input table through `fs` instead of the real filesystem.
    pub fn with_file_system(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    /// Send progress and failure notices to `console` instead of stdout.
    pub fn with_console<W: Write + Send + 'static>(mut self, console: W) -> Self {
        self.console = Box::new(console);
        self
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    /// Open the configured input table and select the records to run.
    ///
    /// Fails before anything is spawned if the table cannot be opened, has
    /// no header, or lacks the name/value columns.
    pub fn load(&self) -> Result<LoadReport> {
        let reader = self.fs.open_read(&self.config.input)?;
        let report = select_records(reader, &Selection::from_config(&self.config))?;

        info!(
            input = %self.config.input.display(),
            records = report.records.len(),
            "moduli table loaded"
        );

        Ok(report)
    }

    /// Invoke the external program once per record, in order.
    ///
    /// Each invocation is awaited before the next one starts. Failures are
    /// reported and recorded; the loop always reaches the last record.
    pub async fn run_all(&mut self, records: Vec<ModulusRecord>) -> RunSummary {
        self.warn_if_program_missing();

        let total = records.len();
        let mut summary = RunSummary::default();

        for (position, record) in records.into_iter().enumerate() {
            self.notice(format_args!(
                "Running for {} with modulus {}",
                record.name, record.value
            ));
            debug!(record = %record.name, position, total, "invoking external program");

            summary.attempted += 1;
            let outcome = self
                .invoker
                .invoke(&self.config.program, &record.value)
                .await;

            match outcome {
                InvocationOutcome::Success => summary.succeeded += 1,
                InvocationOutcome::Failed(failure) => {
                    self.notice(format_args!("Error processing {}: {}", record.name, failure));
                    warn!(
                        record = %record.name,
                        modulus = %record.value,
                        error = %failure,
                        "record failed; continuing with the next one"
                    );
                    summary.failed.push(FailedRecord { record, failure });
                }
            }
        }

        info!(%summary, "batch finished");
        summary
    }

    /// Paths with a directory part are checked up front; bare names are
    /// left to `PATH` lookup at spawn time.
    fn warn_if_program_missing(&self) {
        let program = &self.config.program;
        if program.components().count() > 1 && !self.fs.is_file(program) {
            warn!(
                program = %program.display(),
                "external program not found; every invocation will fail"
            );
        }
    }

    fn notice(&mut self, line: fmt::Arguments<'_>) {
        let written = writeln!(self.console, "{line}").and_then(|()| self.console.flush());
        if let Err(e) = written {
            debug!(error = %e, "failed to write console notice");
        }
    }
}
