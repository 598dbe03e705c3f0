//! Prometheus metrics for the evaluation loop

use prometheus::{Encoder, Gauge, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    pub evaluation_cycles_total: IntCounter,
    pub trade_decisions_total: IntCounterVec,
    pub strategy_timeouts_total: IntCounterVec,
    pub strategy_failures_total: IntCounterVec,
    pub trades_executed_total: IntCounter,
    pub trades_failed_total: IntCounter,
    pub feed_reconnects_total: IntCounter,
    pub feed_connected: Gauge,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let evaluation_cycles_total = IntCounter::new(
            "signal_agent_evaluation_cycles_total",
            "Snapshots evaluated by the signal engine",
        )?;
        let trade_decisions_total = IntCounterVec::new(
            Opts::new(
                "signal_agent_trade_decisions_total",
                "Aggregated decisions by direction",
            ),
            &["direction"],
        )?;
        let strategy_timeouts_total = IntCounterVec::new(
            Opts::new(
                "signal_agent_strategy_timeouts_total",
                "Strategy evaluations that exceeded their timeout",
            ),
            &["strategy"],
        )?;
        let strategy_failures_total = IntCounterVec::new(
            Opts::new(
                "signal_agent_strategy_failures_total",
                "Strategy evaluations that returned an error or panicked",
            ),
            &["strategy"],
        )?;
        let trades_executed_total = IntCounter::new(
            "signal_agent_trades_executed_total",
            "Trades accepted by the executor",
        )?;
        let trades_failed_total = IntCounter::new(
            "signal_agent_trades_failed_total",
            "Trades rejected by the executor or journal",
        )?;
        let feed_reconnects_total = IntCounter::new(
            "signal_agent_feed_reconnects_total",
            "Market feed reconnection attempts",
        )?;
        let feed_connected = Gauge::new(
            "signal_agent_feed_connected",
            "1 while the market feed is connected",
        )?;

        registry.register(Box::new(evaluation_cycles_total.clone()))?;
        registry.register(Box::new(trade_decisions_total.clone()))?;
        registry.register(Box::new(strategy_timeouts_total.clone()))?;
        registry.register(Box::new(strategy_failures_total.clone()))?;
        registry.register(Box::new(trades_executed_total.clone()))?;
        registry.register(Box::new(trades_failed_total.clone()))?;
        registry.register(Box::new(feed_reconnects_total.clone()))?;
        registry.register(Box::new(feed_connected.clone()))?;

        Ok(Self {
            registry,
            evaluation_cycles_total,
            trade_decisions_total,
            strategy_timeouts_total,
            strategy_failures_total,
            trades_executed_total,
            trades_failed_total,
            feed_reconnects_total,
            feed_connected,
        })
    }

    /// Render all metrics in the Prometheus text format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
