//! Trading agent: snapshot -> decision -> execution -> journal

use crate::error::AgentError;
use crate::metrics::Metrics;
use crate::models::market::MarketSnapshot;
use crate::models::trade::{ExecutionReceipt, TradeDecision, TradeParams};
use crate::services::execution::TradeExecutor;
use crate::services::journal::TradeJournal;
use crate::signals::engine::SignalEngine;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

pub struct TradingAgent {
    engine: SignalEngine,
    executor: Arc<dyn TradeExecutor>,
    journal: Option<Arc<dyn TradeJournal>>,
    metrics: Option<Arc<Metrics>>,
}

impl TradingAgent {
    pub fn new(engine: SignalEngine, executor: Arc<dyn TradeExecutor>) -> Self {
        Self {
            engine,
            executor,
            journal: None,
            metrics: None,
        }
    }

    pub fn with_journal(mut self, journal: Arc<dyn TradeJournal>) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn engine(&self) -> &SignalEngine {
        &self.engine
    }

    /// Evaluate one snapshot and execute the decision if it calls for a trade.
    ///
    /// Execution failures are logged and counted; the decision is returned either way.
    pub async fn process_market_update(&self, snapshot: MarketSnapshot) -> TradeDecision {
        let decision = self.engine.evaluate(Arc::new(snapshot)).await;

        if let Some(params) = decision.trade_params() {
            if let Err(e) = self.execute_trade(&params).await {
                error!(
                    symbol = %params.symbol,
                    direction = %params.direction,
                    error = %e,
                    "TradingAgent: trade execution failed"
                );
                if let Some(ref metrics) = self.metrics {
                    metrics.trades_failed_total.inc();
                }
            }
        }

        decision
    }

    /// Submit a trade to the executor, then record it in the journal if one is configured
    pub async fn execute_trade(&self, params: &TradeParams) -> Result<ExecutionReceipt, AgentError> {
        let receipt = self.executor.execute(params).await?;
        if let Some(ref metrics) = self.metrics {
            metrics.trades_executed_total.inc();
        }
        info!(
            id = %receipt.id,
            symbol = %receipt.symbol,
            direction = %receipt.direction,
            status = %receipt.status,
            "TradingAgent: trade executed"
        );

        if let Some(ref journal) = self.journal {
            journal.log_trade(&receipt).await?;
        }

        Ok(receipt)
    }

    /// Process snapshots until the feed channel closes
    pub async fn run(&self, mut snapshots: mpsc::Receiver<MarketSnapshot>) {
        info!(strategies = ?self.engine.strategy_names(), "TradingAgent: waiting for market data");
        let mut processed: u64 = 0;
        while let Some(snapshot) = snapshots.recv().await {
            self.process_market_update(snapshot).await;
            processed += 1;
        }
        warn!(processed, "TradingAgent: market feed closed");
    }
}
