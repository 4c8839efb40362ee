#![allow(non_snake_case)]

use super::*;
use std::time::Duration;

#[test]
fn ShutdownSignal___is_triggered___reflects_token_state() {
    let token = CancellationToken::new();
    let signal = ShutdownSignal::new(token.clone());

    assert!(!signal.is_triggered());

    token.cancel();

    assert!(signal.is_triggered());
}

#[test]
fn ShutdownSignal___clone___shares_triggered_state() {
    let token = CancellationToken::new();
    let signal1 = ShutdownSignal::new(token.clone());
    let signal2 = signal1.clone();

    token.cancel();

    assert!(signal1.is_triggered());
    assert!(signal2.is_triggered());
}

#[tokio::test]
async fn ShutdownSignal___wait___blocks_until_triggered() {
    let token = CancellationToken::new();
    let signal = ShutdownSignal::new(token.clone());

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        token.cancel();
    });

    signal.wait().await;

    assert!(signal.is_triggered());
}

#[tokio::test]
async fn ShutdownSignal___wait___returns_immediately_if_already_triggered() {
    let token = CancellationToken::new();
    token.cancel();
    let signal = ShutdownSignal::new(token);

    tokio::time::timeout(Duration::from_millis(10), signal.wait())
        .await
        .expect("Should not timeout");
}

#[tokio::test]
async fn ShutdownSignal___notified___wakes_every_waiter() {
    let token = CancellationToken::new();
    let signal = ShutdownSignal::new(token.clone());

    let waiters: Vec<_> = (0..8)
        .map(|_| {
            let signal = signal.clone();
            tokio::spawn(async move { signal.notified().await })
        })
        .collect();

    token.cancel();

    for waiter in waiters {
        tokio::time::timeout(Duration::from_millis(100), waiter)
            .await
            .expect("Waiter should wake")
            .unwrap();
    }
}

#[tokio::test]
async fn ShutdownSignal___notified___pending_before_trigger() {
    let signal = ShutdownSignal::new(CancellationToken::new());

    let result = tokio::time::timeout(Duration::from_millis(20), signal.notified()).await;

    assert!(result.is_err());
}
