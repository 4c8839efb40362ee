//! Termination signal delivery tests (unix only)
//!
//! Kept in their own test binary: the signal is sent to the whole process.

#![cfg(unix)]

use orderly_core::{ShutdownConfig, TerminationSignal};
use orderly_runtime::ShutdownCoordinator;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn send_to_self(signal: &str) {
    let status = std::process::Command::new("kill")
        .arg(format!("-{}", signal))
        .arg(std::process::id().to_string())
        .status()
        .expect("kill should run");
    assert!(status.success());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_signal_requests_shutdown() {
    let coordinator = ShutdownCoordinator::with_config(
        ShutdownConfig::new()
            .with_timeout(Duration::from_secs(5))
            .with_signals([TerminationSignal::Interrupt, TerminationSignal::Terminate]),
    );
    let terminated = Arc::new(AtomicUsize::new(0));
    let terminated_clone = terminated.clone();
    coordinator.set_terminate(move || {
        terminated_clone.fetch_add(1, Ordering::SeqCst);
    });
    let cleaned = Arc::new(AtomicUsize::new(0));
    let cleaned_clone = cleaned.clone();
    coordinator.register_callback(move || {
        cleaned_clone.fetch_add(1, Ordering::SeqCst);
    });
    coordinator.start().expect("Signal handlers should install");

    tokio::spawn(async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        send_to_self("INT");
    });

    tokio::time::timeout(Duration::from_secs(2), coordinator.in_progress().wait())
        .await
        .expect("Shutdown not in progress after SIGINT");

    // The listener runs callbacks right after firing the broadcast.
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(cleaned.load(Ordering::SeqCst), 1);

    coordinator.testing_reset().await;
    assert!(!coordinator.requested());
    assert_eq!(terminated.load(Ordering::SeqCst), 0);

    // A fresh lifecycle can be wired and triggered again.
    coordinator.start().expect("Signal handlers should install again");
    tokio::spawn(async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        send_to_self("TERM");
    });

    tokio::time::timeout(Duration::from_secs(2), coordinator.in_progress().wait())
        .await
        .expect("Shutdown not in progress after SIGTERM");
    coordinator.testing_reset().await;
}
