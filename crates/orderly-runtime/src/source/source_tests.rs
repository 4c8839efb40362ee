#![allow(non_snake_case)]

use super::*;
use std::time::Duration;

#[tokio::test]
async fn SignalListener___install___empty_set_closes_immediately() {
    let mut listener = SignalListener::install(&[]).unwrap();

    let received = tokio::time::timeout(Duration::from_millis(10), listener.recv())
        .await
        .expect("Should not wait");

    assert_eq!(received, None);
}

#[cfg(unix)]
#[tokio::test]
async fn SignalListener___install___deduplicates_signals() {
    let listener = SignalListener::install(&[
        TerminationSignal::Hangup,
        TerminationSignal::Hangup,
        TerminationSignal::Quit,
    ])
    .unwrap();

    assert_eq!(listener.streams.len(), 2);
}

#[cfg(unix)]
#[tokio::test]
async fn SignalListener___recv___pending_without_delivery() {
    let mut listener = SignalListener::install(&[TerminationSignal::Hangup]).unwrap();

    let result = tokio::time::timeout(Duration::from_millis(20), listener.recv()).await;

    assert!(result.is_err());
}
