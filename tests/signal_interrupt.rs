//! Interrupt-signal scenario, isolated in its own test binary so the
//! raised signal cannot leak into unrelated tests.

#![cfg(unix)]

mod common;

use std::time::Duration;

use common::{MockSystem, RecordingSink};
use runvisor::{ExitStatus, Runner, RunnerConfig};

#[tokio::test]
async fn interrupt_shuts_down_gracefully() {
    let (system, probe) = MockSystem::healthy();
    let sink = RecordingSink::handle();
    let runner = Runner::builder(system)
        .with_config(RunnerConfig::default())
        .with_sink(sink.clone())
        .build();

    // Signal listeners are installed by the time start() returns.
    runner.start().await.unwrap();
    unsafe {
        libc::raise(libc::SIGINT);
    }

    let status = tokio::time::timeout(Duration::from_secs(10), runner.wait())
        .await
        .expect("shutdown did not complete");

    assert_eq!(status, ExitStatus::Graceful);
    assert_eq!(status.code(), 0);
    assert_eq!(probe.stops(), 1);
    assert!(sink.has_info("Received SIGINT. Attempting to shutdown gracefully."));
}
