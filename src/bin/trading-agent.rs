//! Signal Agent
//!
//! Consumes market snapshots from a WebSocket feed, evaluates the technical
//! and sentiment strategies on each one and hands trade decisions to the
//! executor.

use dotenvy::dotenv;
use signal_agent::config::AgentConfig;
use signal_agent::core::TradingAgent;
use signal_agent::logging;
use signal_agent::metrics::Metrics;
use signal_agent::services::{
    DryRunExecutor, HttpTradeJournal, MarketFeed, TradeExecutor, WebSocketSnapshotSource,
};
use signal_agent::signals::SignalEngine;
use signal_agent::strategies::{SentimentStrategy, TechnicalStrategy};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = AgentConfig::from_env()?;
    info!("Starting Signal Agent");
    info!(environment = %config.environment, "Environment");
    info!(
        policy = %config.engine.aggregation,
        timeout_ms = config.engine.strategy_timeout.as_millis() as u64,
        "Signal engine configuration"
    );

    let feed_url = config
        .feed
        .url
        .clone()
        .ok_or("MARKET_FEED_URL must be set for the agent")?;

    let metrics = Arc::new(Metrics::new()?);

    let engine = SignalEngine::new(config.engine.clone())
        .with_strategy(Arc::new(TechnicalStrategy::new(config.technical.clone())))
        .with_strategy(Arc::new(SentimentStrategy::new(config.sentiment.clone())))
        .with_metrics(metrics.clone());

    let executor: Arc<dyn TradeExecutor> = Arc::new(DryRunExecutor::new());
    let mut agent = TradingAgent::new(engine, executor).with_metrics(metrics.clone());

    match config.journal.clone() {
        Some(journal) => {
            info!(endpoint = %journal.endpoint, "Trade journal enabled");
            agent = agent.with_journal(Arc::new(HttpTradeJournal::new(journal)));
        }
        None => warn!("AUTONOME_* not set - trades will not be journaled"),
    }

    let source = Arc::new(WebSocketSnapshotSource::new(&feed_url)?);
    let feed = MarketFeed::new(source, config.feed.clone()).with_metrics(metrics.clone());
    let (snapshots, feed_handle) = feed.spawn();
    info!(url = %feed_url, "Market feed started");

    tokio::select! {
        _ = agent.run(snapshots) => {
            match feed_handle.await {
                Ok(Ok(())) => info!("Market feed stopped"),
                Ok(Err(e)) => error!(error = %e, "Market feed gave up"),
                Err(e) => error!(error = %e, "Market feed task failed"),
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutting down agent...");
            feed_handle.abort();
        }
    }

    match metrics.export() {
        Ok(report) => info!(metrics = %report, "Final metrics"),
        Err(e) => warn!(error = %e, "Failed to export metrics"),
    }
    info!("Agent stopped");

    Ok(())
}
