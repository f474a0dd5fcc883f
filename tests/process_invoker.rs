// tests/process_invoker.rs

#![cfg(unix)]

use std::path::Path;

use rhobatch::batch::BatchRunner;
use rhobatch::exec::{InvocationFailure, InvocationOutcome, Invoker, ProcessInvoker};
use rhobatch::table::ModulusRecord;
use rhobatch_test_utils::builders::RunConfigBuilder;
use rhobatch_test_utils::{SharedBuffer, init_tracing};

#[tokio::test]
async fn zero_exit_status_is_success() {
    init_tracing();

    let outcome = ProcessInvoker::new().invoke(Path::new("true"), "17").await;
    assert_eq!(outcome, InvocationOutcome::Success);
}

#[tokio::test]
async fn non_zero_exit_status_is_reported_with_its_code() {
    init_tracing();

    let outcome = ProcessInvoker::new().invoke(Path::new("false"), "17").await;
    assert_eq!(outcome, InvocationOutcome::Failed(InvocationFailure::ExitCode(1)));
}

#[tokio::test]
async fn missing_program_is_a_launch_failure() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let program = dir.path().join("pollards_rho");

    match ProcessInvoker::new().invoke(&program, "17").await {
        InvocationOutcome::Failed(InvocationFailure::Launch(msg)) => {
            assert!(msg.contains("spawning"));
            assert!(msg.contains("pollards_rho"));
        }
        other => panic!("Expected launch failure, got: {:?}", other),
    }
}

#[tokio::test]
async fn batch_continues_when_the_program_cannot_be_launched() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let config = RunConfigBuilder::new()
        .program(dir.path().join("pollards_rho"))
        .build();
    let console = SharedBuffer::new();
    let mut runner = BatchRunner::new(config, ProcessInvoker::new()).with_console(console.clone());

    let summary = runner
        .run_all(vec![
            ModulusRecord::new("A", "15"),
            ModulusRecord::new("B", "21"),
            ModulusRecord::new("C", "35"),
        ])
        .await;

    assert_eq!(summary.attempted, 3);
    assert_eq!(summary.failed.len(), 3);
    assert!(
        summary
            .failed
            .iter()
            .all(|f| matches!(f.failure, InvocationFailure::Launch(_)))
    );

    let lines = console.lines();
    assert_eq!(lines.len(), 6);
    assert!(lines[1].starts_with("Error processing A: could not run program"));
    assert!(lines[5].starts_with("Error processing C: could not run program"));
}
