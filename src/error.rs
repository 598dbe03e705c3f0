//! Error types shared across the agent layers

use std::time::Duration;
use thiserror::Error;

/// Failure of a single strategy evaluation.
///
/// None of these abort an evaluation cycle: the engine turns each into a
/// "no trade" verdict for the strategy that produced it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrategyError {
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("strategy {strategy} timed out after {after:?}")]
    Timeout { strategy: String, after: Duration },

    #[error("strategy {strategy} failed: {reason}")]
    Failed { strategy: String, reason: String },
}

/// Market feed errors
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("stream error: {0}")]
    Stream(String),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("reconnect attempts exhausted: {0}")]
    RetriesExhausted(String),
}

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("execution error: {0}")]
    Execution(String),

    #[error("trade journal error: {0}")]
    Journal(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("market feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

pub type Result<T> = std::result::Result<T, AgentError>;
