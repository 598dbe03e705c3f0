//! Market feed supervision tests

use crate::test_utils::{fast_feed_config, ScriptedSource, Step};
use signal_agent::error::FeedError;
use signal_agent::metrics::Metrics;
use signal_agent::models::market::MarketSnapshot;
use signal_agent::services::market_data::MarketFeed;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

fn priced(price: f64) -> MarketSnapshot {
    MarketSnapshot::new(vec![price])
}

#[tokio::test]
async fn feed_retries_connect_then_delivers() {
    let source = Arc::new(ScriptedSource::new(
        2,
        vec![vec![
            Step::Snapshot(priced(1.0)),
            Step::Snapshot(priced(2.0)),
            Step::Hold,
        ]],
    ));
    let metrics = Arc::new(Metrics::new().unwrap());
    let feed = MarketFeed::new(source.clone(), fast_feed_config(5)).with_metrics(metrics.clone());
    let (mut rx, handle) = feed.spawn();

    assert_eq!(rx.recv().await.unwrap().latest_price(), Some(1.0));
    assert_eq!(rx.recv().await.unwrap().latest_price(), Some(2.0));
    assert_eq!(metrics.feed_reconnects_total.get(), 2);

    handle.abort();
}

#[tokio::test]
async fn feed_reconnects_after_stream_end_and_error() {
    let source = Arc::new(ScriptedSource::new(
        0,
        vec![
            vec![Step::Snapshot(priced(1.0)), Step::End],
            vec![Step::Error("reset by peer")],
            vec![Step::Snapshot(priced(3.0)), Step::Hold],
        ],
    ));
    let feed = MarketFeed::new(source.clone(), fast_feed_config(5));
    let (mut rx, handle) = feed.spawn();

    assert_eq!(rx.recv().await.unwrap().latest_price(), Some(1.0));
    assert_eq!(rx.recv().await.unwrap().latest_price(), Some(3.0));
    assert_eq!(source.attempts(), 3);

    handle.abort();
}

#[tokio::test]
async fn feed_gives_up_after_max_retries() {
    let source = Arc::new(ScriptedSource::new(usize::MAX, Vec::new()));
    let metrics = Arc::new(Metrics::new().unwrap());
    let feed = MarketFeed::new(source.clone(), fast_feed_config(2)).with_metrics(metrics.clone());
    let (tx, _rx) = mpsc::channel(1);

    let result = tokio::time::timeout(Duration::from_secs(5), feed.run(tx))
        .await
        .expect("feed should give up quickly");

    assert!(matches!(result, Err(FeedError::RetriesExhausted(_))));
    assert_eq!(source.attempts(), 3);
    assert_eq!(metrics.feed_connected.get(), 0.0);
}

#[tokio::test]
async fn feed_stops_when_subscriber_drops() {
    let source = Arc::new(ScriptedSource::endless(priced(9.0)));
    let feed = MarketFeed::new(source, fast_feed_config(1));
    let (mut rx, handle) = feed.spawn();

    assert_eq!(rx.recv().await.unwrap().latest_price(), Some(9.0));
    drop(rx);

    let outcome = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("feed should stop")
        .expect("feed task should not panic");
    assert!(outcome.is_ok());
}
