// tests/run_all_fake_invoker.rs

use std::path::PathBuf;
use std::sync::Arc;

use rhobatch::batch::BatchRunner;
use rhobatch::exec::InvocationFailure;
use rhobatch::exit_code_for;
use rhobatch::exit_codes;
use rhobatch::fs::mock::MockFileSystem;
use rhobatch::table::ModulusRecord;
use rhobatch_test_utils::builders::{CsvBuilder, RunConfigBuilder};
use rhobatch_test_utils::fake_invoker::FakeInvoker;
use rhobatch_test_utils::{SharedBuffer, init_tracing};

fn records(pairs: &[(&str, &str)]) -> Vec<ModulusRecord> {
    pairs
        .iter()
        .map(|(name, value)| ModulusRecord::new(*name, *value))
        .collect()
}

#[tokio::test]
async fn single_selected_record_is_invoked_once_with_its_value() {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_file(
        "all-moduli.csv",
        CsvBuilder::new()
            .filler_rows(31)
            .row(&["M1", "17"])
            .row(&["M2", ""])
            .build(),
    );
    let config = RunConfigBuilder::new()
        .program("./pollards_rho")
        .input("all-moduli.csv")
        .build();

    let invoker = FakeInvoker::new();
    let calls = invoker.calls();
    let console = SharedBuffer::new();
    let mut runner = BatchRunner::new(config, invoker)
        .with_file_system(Arc::new(fs))
        .with_console(console.clone());

    let report = runner.load().unwrap();
    let summary = runner.run_all(report.records).await;

    let calls = calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, PathBuf::from("./pollards_rho"));
    assert_eq!(calls[0].argument, "17");

    assert_eq!(console.lines(), vec!["Running for M1 with modulus 17"]);
    assert_eq!(summary.attempted, 1);
    assert_eq!(summary.succeeded, 1);
    assert!(!summary.has_failures());
}

#[tokio::test]
async fn always_failing_program_is_still_attempted_for_every_record() {
    init_tracing();

    let console = SharedBuffer::new();
    let mut runner = BatchRunner::new(RunConfigBuilder::new().build(), FakeInvoker::always_failing())
        .with_console(console.clone());

    let summary = runner
        .run_all(records(&[("A", "15"), ("B", "21"), ("C", "35")]))
        .await;

    assert_eq!(runner.invoker().arguments(), vec!["15", "21", "35"]);
    assert_eq!(summary.attempted, 3);
    assert_eq!(summary.succeeded, 0);
    assert_eq!(summary.failed.len(), 3);

    let failures: Vec<String> = console
        .lines()
        .into_iter()
        .filter(|l| l.starts_with("Error processing"))
        .collect();
    assert_eq!(
        failures,
        vec![
            "Error processing A: program returned non-zero exit status 1",
            "Error processing B: program returned non-zero exit status 1",
            "Error processing C: program returned non-zero exit status 1",
        ]
    );
}

#[tokio::test]
async fn failure_in_the_middle_does_not_skip_later_records() {
    init_tracing();

    let console = SharedBuffer::new();
    let mut runner = BatchRunner::new(
        RunConfigBuilder::new().build(),
        FakeInvoker::new().failing_for("21"),
    )
    .with_console(console.clone());

    let summary = runner
        .run_all(records(&[("A", "15"), ("B", "21"), ("C", "35")]))
        .await;

    assert_eq!(runner.invoker().arguments(), vec!["15", "21", "35"]);
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].record, ModulusRecord::new("B", "21"));
    assert_eq!(summary.failed[0].failure, InvocationFailure::ExitCode(1));

    // Progress notice precedes each invocation, failure notice follows it.
    assert_eq!(
        console.lines(),
        vec![
            "Running for A with modulus 15",
            "Running for B with modulus 21",
            "Error processing B: program returned non-zero exit status 1",
            "Running for C with modulus 35",
        ]
    );
}

#[tokio::test]
async fn empty_batch_runs_nothing() {
    init_tracing();

    let console = SharedBuffer::new();
    let mut runner =
        BatchRunner::new(RunConfigBuilder::new().build(), FakeInvoker::new()).with_console(console.clone());

    let summary = runner.run_all(Vec::new()).await;

    assert_eq!(summary.attempted, 0);
    assert!(runner.invoker().arguments().is_empty());
    assert!(console.lines().is_empty());
}

#[tokio::test]
async fn exit_code_reflects_failures_only_in_strict_mode() {
    init_tracing();

    let mut runner = BatchRunner::new(
        RunConfigBuilder::new().build(),
        FakeInvoker::new().failing_for("9"),
    )
    .with_console(SharedBuffer::new());

    let summary = runner.run_all(records(&[("A", "9"), ("B", "10")])).await;

    assert_eq!(exit_code_for(&summary, false), exit_codes::OK);
    assert_eq!(exit_code_for(&summary, true), exit_codes::RECORD_FAILURES);

    let clean = runner.run_all(records(&[("B", "10")])).await;
    assert_eq!(exit_code_for(&clean, true), exit_codes::OK);
}
