//! Tests for the request throttle, on tokio's paused clock.

use std::{sync::Arc, time::Duration};
use tokio::time::Instant;
use worldtree_provider::{Throttle, throttle::MIN_INTERVAL};

#[tokio::test(start_paused = true)]
async fn first_request_is_immediate() {
    let throttle = Throttle::default();
    let start = Instant::now();
    throttle.throttle().await;
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn back_to_back_requests_are_spaced() {
    let throttle = Throttle::default();
    let start = Instant::now();
    throttle.throttle().await;
    throttle.throttle().await;
    assert_eq!(start.elapsed(), MIN_INTERVAL);
}

#[tokio::test(start_paused = true)]
async fn partial_wait_only_covers_the_remainder() {
    let throttle = Throttle::default();
    throttle.throttle().await;
    tokio::time::sleep(Duration::from_millis(500)).await;
    let start = Instant::now();
    throttle.throttle().await;
    assert_eq!(start.elapsed(), Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn idle_gap_resets_the_wait() {
    let throttle = Throttle::default();
    throttle.throttle().await;
    tokio::time::sleep(Duration::from_secs(5)).await;
    let start = Instant::now();
    throttle.throttle().await;
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn concurrent_callers_queue_one_interval_apart() {
    let throttle = Arc::new(Throttle::default());
    let start = Instant::now();
    let tasks: Vec<_> = (0..3)
        .map(|_| {
            let throttle = Arc::clone(&throttle);
            tokio::spawn(async move {
                throttle.throttle().await;
                Instant::now()
            })
        })
        .collect();

    let mut released = Vec::new();
    for task in tasks {
        released.push(task.await.expect("task") - start);
    }
    released.sort();
    assert_eq!(
        released,
        vec![Duration::ZERO, MIN_INTERVAL, MIN_INTERVAL * 2]
    );
}

#[tokio::test(start_paused = true)]
async fn custom_interval_is_honoured() {
    let throttle = Throttle::new(Duration::from_millis(250));
    assert_eq!(throttle.interval(), Duration::from_millis(250));
    let start = Instant::now();
    for _ in 0..4 {
        throttle.throttle().await;
    }
    assert_eq!(start.elapsed(), Duration::from_millis(750));
}
