#![allow(dead_code)]

use async_trait::async_trait;
use signal_agent::config::{EngineConfig, FeedConfig, JournalConfig};
use signal_agent::error::{AgentError, FeedError};
use signal_agent::models::market::MarketSnapshot;
use signal_agent::models::trade::{ExecutionReceipt, TradeParams};
use signal_agent::services::execution::TradeExecutor;
use signal_agent::services::market_data::{SnapshotSource, SnapshotStream};
use signal_agent::signals::SignalEngine;
use signal_agent::strategies::{SentimentStrategy, TechnicalStrategy};
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const JOURNAL_USER: &str = "agent";
pub const JOURNAL_PASSWORD: &str = "secret";
/// base64("agent:secret")
pub const JOURNAL_AUTH_HEADER: &str = "Basic YWdlbnQ6c2VjcmV0";

pub fn journal_config(endpoint: String) -> JournalConfig {
    JournalConfig {
        endpoint,
        username: JOURNAL_USER.to_string(),
        password: JOURNAL_PASSWORD.to_string(),
    }
}

pub fn default_engine() -> SignalEngine {
    SignalEngine::new(EngineConfig::default())
        .with_strategy(Arc::new(TechnicalStrategy::default()))
        .with_strategy(Arc::new(SentimentStrategy::default()))
}

pub fn fast_feed_config(max_retries: usize) -> FeedConfig {
    FeedConfig {
        url: None,
        min_backoff: Duration::from_millis(1),
        max_backoff: Duration::from_millis(5),
        max_retries,
        channel_capacity: 8,
    }
}

pub fn bullish_sentiment(symbol: &str) -> MarketSnapshot {
    MarketSnapshot::new(Vec::new())
        .with_symbol(symbol)
        .with_sentiment("news", 0.9)
        .with_sentiment("social", 0.5)
}

/// Executor that records every request and optionally fails
#[derive(Default)]
pub struct RecordingExecutor {
    pub calls: Mutex<Vec<TradeParams>>,
    pub fail: bool,
}

impl RecordingExecutor {
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<TradeParams> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TradeExecutor for RecordingExecutor {
    async fn execute(&self, params: &TradeParams) -> Result<ExecutionReceipt, AgentError> {
        self.calls.lock().unwrap().push(params.clone());
        if self.fail {
            return Err(AgentError::Execution("wallet unavailable".to_string()));
        }
        Ok(ExecutionReceipt {
            id: format!("test-{}", self.calls.lock().unwrap().len()),
            symbol: params.symbol.clone(),
            direction: params.direction,
            size: params.size,
            price: params.price,
            status: "filled".to_string(),
            executed_at: Utc::now(),
        })
    }
}

/// One scripted step of a stream
pub enum Step {
    Snapshot(MarketSnapshot),
    Error(&'static str),
    End,
    /// Keep the connection open without delivering anything
    Hold,
}

/// Source failing its first `failures` connects, then serving one script per connection
pub struct ScriptedSource {
    failures: usize,
    attempts: AtomicUsize,
    scripts: Mutex<VecDeque<Vec<Step>>>,
    endless: Option<MarketSnapshot>,
}

impl ScriptedSource {
    pub fn new(failures: usize, scripts: Vec<Vec<Step>>) -> Self {
        Self {
            failures,
            attempts: AtomicUsize::new(0),
            scripts: Mutex::new(scripts.into()),
            endless: None,
        }
    }

    /// Source whose streams repeat the same snapshot forever
    pub fn endless(snapshot: MarketSnapshot) -> Self {
        Self {
            failures: 0,
            attempts: AtomicUsize::new(0),
            scripts: Mutex::new(VecDeque::new()),
            endless: Some(snapshot),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SnapshotSource for ScriptedSource {
    fn describe(&self) -> String {
        "scripted".to_string()
    }

    async fn connect(&self) -> Result<Box<dyn SnapshotStream>, FeedError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt < self.failures {
            return Err(FeedError::Connect(format!("refused (attempt {})", attempt + 1)));
        }
        if let Some(ref snapshot) = self.endless {
            return Ok(Box::new(EndlessStream {
                snapshot: snapshot.clone(),
            }));
        }
        match self.scripts.lock().unwrap().pop_front() {
            Some(steps) => Ok(Box::new(ScriptedStream {
                steps: steps.into(),
            })),
            None => Err(FeedError::Connect("no more scripts".to_string())),
        }
    }
}

struct ScriptedStream {
    steps: VecDeque<Step>,
}

#[async_trait]
impl SnapshotStream for ScriptedStream {
    async fn next_snapshot(&mut self) -> Result<Option<MarketSnapshot>, FeedError> {
        match self.steps.pop_front() {
            Some(Step::Snapshot(snapshot)) => Ok(Some(snapshot)),
            Some(Step::Error(reason)) => Err(FeedError::Stream(reason.to_string())),
            Some(Step::End) | None => Ok(None),
            Some(Step::Hold) => std::future::pending().await,
        }
    }
}

struct EndlessStream {
    snapshot: MarketSnapshot,
}

#[async_trait]
impl SnapshotStream for EndlessStream {
    async fn next_snapshot(&mut self) -> Result<Option<MarketSnapshot>, FeedError> {
        tokio::time::sleep(Duration::from_millis(1)).await;
        Ok(Some(self.snapshot.clone()))
    }
}
