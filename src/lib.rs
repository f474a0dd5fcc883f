// src/lib.rs

pub mod batch;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod table;

use std::io::{self, Write};

use tracing::info;

use crate::batch::{BatchRunner, RunSummary};
use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::errors::Result;
use crate::exec::{Invoker, ProcessInvoker};
use crate::table::LoadReport;

/// High-level entry point used by `main.rs`.
///
/// Runs the real external program, with notices on stdout.
pub async fn run(args: CliArgs) -> Result<i32> {
    run_with(&args, ProcessInvoker::new(), io::stdout()).await
}

/// Resolve the configuration, load the moduli table and, unless this is a
/// dry run, drive `invoker` over every selected record. Notices and dry-run
/// output go to `console`.
///
/// Returns the exit code for a completed batch; configuration and load
/// errors are returned before anything is invoked.
pub async fn run_with<I, W>(args: &CliArgs, invoker: I, mut console: W) -> Result<i32>
where
    I: Invoker,
    W: Write + Send + 'static,
{
    let cfg = config::resolve(args)?;

    let runner = BatchRunner::new(cfg.run().clone(), invoker);
    let report = runner.load()?;

    if args.dry_run {
        write_dry_run(&mut console, &cfg, &report)?;
        return Ok(exit_codes::OK);
    }

    let mut runner = runner.with_console(console);
    let summary = runner.run_all(report.records).await;
    Ok(exit_code_for(&summary, args.strict))
}

/// Turn the result of [`run`] into a process exit code, reporting errors on
/// stderr.
pub fn exit_code_from(result: Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("rhobatch error: {err:?}");
            exit_codes::INVALID
        }
    }
}

/// Map a finished batch to an exit code.
///
/// Without `--strict` the batch succeeds once every record was attempted,
/// whatever the individual outcomes.
pub fn exit_code_for(summary: &RunSummary, strict: bool) -> i32 {
    if strict && summary.has_failures() {
        info!(failed = summary.failed.len(), "strict mode: reporting failure");
        exit_codes::RECORD_FAILURES
    } else {
        exit_codes::OK
    }
}

/// Dry-run output: resolved parameters and the records that would run.
pub fn write_dry_run(out: &mut impl Write, cfg: &ConfigFile, report: &LoadReport) -> io::Result<()> {
    let run = cfg.run();
    writeln!(out, "rhobatch dry-run")?;
    writeln!(out, "  program      = {}", run.program.display())?;
    writeln!(out, "  input        = {}", run.input.display())?;
    writeln!(out, "  skip_rows    = {}", run.skip_rows)?;
    writeln!(out, "  name_column  = {}", run.name_column)?;
    writeln!(out, "  value_column = {}", run.value_column)?;
    writeln!(out)?;

    writeln!(
        out,
        "rows: {} read, {} skipped by position, {} incomplete",
        report.rows_read, report.skipped_by_position, report.skipped_incomplete
    )?;
    writeln!(out, "records ({}):", report.records.len())?;
    for record in &report.records {
        writeln!(out, "  - {record}")?;
    }
    out.flush()
}
