//! Signal engine: fans a snapshot out to every strategy and aggregates the verdicts.

use crate::config::EngineConfig;
use crate::error::StrategyError;
use crate::metrics::Metrics;
use crate::models::market::MarketSnapshot;
use crate::models::signal::StrategyVerdict;
use crate::models::trade::TradeDecision;
use crate::signals::aggregation::AggregationPolicy;
use crate::strategies::Strategy;
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct SignalEngine {
    config: EngineConfig,
    strategies: Vec<Arc<dyn Strategy>>,
    policy: Arc<dyn AggregationPolicy>,
    metrics: Option<Arc<Metrics>>,
}

impl SignalEngine {
    /// Create an engine with no strategies and the configured aggregation method
    pub fn new(config: EngineConfig) -> Self {
        let policy: Arc<dyn AggregationPolicy> = Arc::new(config.aggregation);
        Self {
            config,
            strategies: Vec::new(),
            policy,
            metrics: None,
        }
    }

    pub fn with_strategy(mut self, strategy: Arc<dyn Strategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Replace the aggregation policy with a custom one
    pub fn with_policy(mut self, policy: Arc<dyn AggregationPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn strategy_names(&self) -> Vec<String> {
        self.strategies.iter().map(|s| s.name().to_string()).collect()
    }

    /// Evaluate every strategy concurrently and combine the results.
    ///
    /// Each strategy runs on its own task under `strategy_timeout`. A strategy
    /// that errors, panics or times out contributes a "no trade" verdict, so a
    /// decision is always produced. Verdicts keep registration order.
    pub async fn evaluate(&self, snapshot: Arc<MarketSnapshot>) -> TradeDecision {
        let timeout = self.config.strategy_timeout;

        let tasks = self.strategies.iter().map(|strategy| {
            let name = strategy.name().to_string();
            let strategy = strategy.clone();
            let task_snapshot = snapshot.clone();
            let handle = tokio::spawn(async move { strategy.evaluate(&task_snapshot).await });

            async move {
                let abort = handle.abort_handle();
                let outcome = match tokio::time::timeout(timeout, handle).await {
                    Ok(Ok(result)) => result,
                    Ok(Err(join_error)) => Err(StrategyError::Failed {
                        strategy: name.clone(),
                        reason: join_error.to_string(),
                    }),
                    Err(_) => {
                        abort.abort();
                        Err(StrategyError::Timeout {
                            strategy: name.clone(),
                            after: timeout,
                        })
                    }
                };
                (name, outcome)
            }
        });

        let outcomes = join_all(tasks).await;

        let verdicts: Vec<StrategyVerdict> = outcomes
            .into_iter()
            .map(|(name, outcome)| match outcome {
                Ok(verdict) => verdict,
                Err(error) => self.downgrade(&name, error, &snapshot),
            })
            .collect();

        let direction = self.policy.combine(&verdicts);
        let decision = TradeDecision::new(
            direction,
            self.policy.name(),
            snapshot.symbol.clone(),
            snapshot.timestamp,
            verdicts,
        );

        if let Some(ref metrics) = self.metrics {
            metrics.evaluation_cycles_total.inc();
            let label = decision.direction.map(|d| d.as_str()).unwrap_or("none");
            metrics.trade_decisions_total.with_label_values(&[label]).inc();
        }

        info!(
            symbol = ?decision.symbol,
            should_trade = decision.should_trade,
            direction = ?decision.direction,
            policy = %decision.policy,
            strategies = decision.verdicts.len(),
            "SignalEngine: decision ready"
        );

        decision
    }

    fn downgrade(
        &self,
        name: &str,
        error: StrategyError,
        snapshot: &MarketSnapshot,
    ) -> StrategyVerdict {
        match &error {
            StrategyError::Timeout { .. } => {
                warn!(strategy = %name, error = %error, "SignalEngine: strategy timed out");
                if let Some(ref metrics) = self.metrics {
                    metrics.strategy_timeouts_total.with_label_values(&[name]).inc();
                }
            }
            StrategyError::InvalidSnapshot(_) => {
                debug!(strategy = %name, error = %error, "SignalEngine: snapshot rejected");
                if let Some(ref metrics) = self.metrics {
                    metrics.strategy_failures_total.with_label_values(&[name]).inc();
                }
            }
            StrategyError::Failed { .. } => {
                warn!(strategy = %name, error = %error, "SignalEngine: strategy failed");
                if let Some(ref metrics) = self.metrics {
                    metrics.strategy_failures_total.with_label_values(&[name]).inc();
                }
            }
        }

        StrategyVerdict::no_trade(name, snapshot.timestamp).with_note(error.to_string())
    }
}
