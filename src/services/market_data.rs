//! Market feed supervision: connect, forward snapshots, reconnect with bounded backoff.

use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::metrics::Metrics;
use crate::models::market::MarketSnapshot;
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Something that can open a stream of market snapshots
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    fn describe(&self) -> String;

    async fn connect(&self) -> Result<Box<dyn SnapshotStream>, FeedError>;
}

/// An open connection. `Ok(None)` means the remote side closed the stream.
#[async_trait]
pub trait SnapshotStream: Send {
    async fn next_snapshot(&mut self) -> Result<Option<MarketSnapshot>, FeedError>;
}

pub struct MarketFeed {
    source: Arc<dyn SnapshotSource>,
    config: FeedConfig,
    metrics: Option<Arc<Metrics>>,
}

impl MarketFeed {
    pub fn new(source: Arc<dyn SnapshotSource>, config: FeedConfig) -> Self {
        Self {
            source,
            config,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    fn backoff(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(self.config.min_backoff)
            .with_max_delay(self.config.max_backoff)
            .with_max_times(self.config.max_retries)
    }

    async fn connect(&self) -> Result<Box<dyn SnapshotStream>, FeedError> {
        let source = self.source.clone();
        let metrics = self.metrics.clone();
        let target = self.source.describe();

        let stream = (|| {
            let source = source.clone();
            async move { source.connect().await }
        })
        .retry(self.backoff())
        .notify(|error: &FeedError, delay: Duration| {
            warn!(
                source = %target,
                error = %error,
                retry_in_ms = delay.as_millis() as u64,
                "MarketFeed: connect failed, retrying"
            );
            if let Some(ref metrics) = metrics {
                metrics.feed_reconnects_total.inc();
            }
        })
        .await
        .map_err(|e| FeedError::RetriesExhausted(e.to_string()))?;

        if let Some(ref metrics) = self.metrics {
            metrics.feed_connected.set(1.0);
        }
        info!(source = %self.source.describe(), "MarketFeed: connected");
        Ok(stream)
    }

    fn mark_disconnected(&self) {
        if let Some(ref metrics) = self.metrics {
            metrics.feed_connected.set(0.0);
        }
    }

    /// Forward snapshots into `tx` until the receiver is dropped.
    ///
    /// A stream that ends or errors is reopened; the call only fails once
    /// reconnection has exhausted its retries.
    pub async fn run(&self, tx: mpsc::Sender<MarketSnapshot>) -> Result<(), FeedError> {
        loop {
            let mut stream = match self.connect().await {
                Ok(stream) => stream,
                Err(e) => {
                    self.mark_disconnected();
                    return Err(e);
                }
            };

            loop {
                match stream.next_snapshot().await {
                    Ok(Some(snapshot)) => {
                        debug!(
                            symbol = ?snapshot.symbol,
                            prices = snapshot.prices.len(),
                            "MarketFeed: snapshot received"
                        );
                        if tx.send(snapshot).await.is_err() {
                            info!("MarketFeed: subscriber gone, stopping");
                            self.mark_disconnected();
                            return Ok(());
                        }
                    }
                    Ok(None) => {
                        info!("MarketFeed: stream closed by remote, reconnecting");
                        break;
                    }
                    Err(e) => {
                        warn!(error = %e, "MarketFeed: stream error, reconnecting");
                        break;
                    }
                }
            }

            self.mark_disconnected();
            if tx.is_closed() {
                return Ok(());
            }
            tokio::time::sleep(self.config.min_backoff).await;
        }
    }

    /// Run the feed on its own task, returning the receiving end
    pub fn spawn(
        self,
    ) -> (
        mpsc::Receiver<MarketSnapshot>,
        tokio::task::JoinHandle<Result<(), FeedError>>,
    ) {
        let (tx, rx) = mpsc::channel(self.config.channel_capacity.max(1));
        let handle = tokio::spawn(async move { self.run(tx).await });
        (rx, handle)
    }
}
