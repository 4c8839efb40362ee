#![allow(non_snake_case)]

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::time::Duration;

#[test]
fn Callback___debug___names_variant() {
    assert_eq!(format!("{:?}", Callback::blocking(|| {})), "Callback::Blocking");
    assert_eq!(format!("{:?}", Callback::future(async {})), "Callback::Async");
}

#[tokio::test]
async fn run_all___empty___returns_immediately() {
    tokio::time::timeout(Duration::from_millis(10), run_all(Vec::new()))
        .await
        .expect("Should not timeout");
}

#[tokio::test]
async fn run_all___mixed_callbacks___runs_each_once() {
    let count = Arc::new(AtomicUsize::new(0));
    let blocking_count = count.clone();
    let async_count = count.clone();

    run_all(vec![
        Callback::blocking(move || {
            blocking_count.fetch_add(1, Ordering::SeqCst);
        }),
        Callback::future(async move {
            async_count.fetch_add(10, Ordering::SeqCst);
        }),
    ])
    .await;

    assert_eq!(count.load(Ordering::SeqCst), 11);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn run_all___blocking_callbacks___run_concurrently() {
    // Each callback waits for the other; sequential execution would deadlock.
    let barrier = Arc::new(Barrier::new(2));
    let b1 = barrier.clone();
    let b2 = barrier.clone();

    let result = tokio::time::timeout(
        Duration::from_secs(2),
        run_all(vec![
            Callback::blocking(move || {
                b1.wait();
            }),
            Callback::blocking(move || {
                b2.wait();
            }),
        ]),
    )
    .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn run_all___panicking_callback___others_still_complete() {
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = count.clone();

    run_all(vec![
        Callback::blocking(|| panic!("cleanup failed")),
        Callback::blocking(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        }),
    ])
    .await;

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn run_all___waits_for_slow_callback() {
    let done = Arc::new(AtomicUsize::new(0));
    let done_clone = done.clone();

    run_all(vec![Callback::future(async move {
        tokio::time::sleep(Duration::from_millis(30)).await;
        done_clone.store(1, Ordering::SeqCst);
    })])
    .await;

    assert_eq!(done.load(Ordering::SeqCst), 1);
}
