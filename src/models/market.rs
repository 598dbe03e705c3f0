//! Market state captured once per evaluation cycle

use crate::error::StrategyError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const SENTIMENT_MIN: f64 = -1.0;
pub const SENTIMENT_MAX: f64 = 1.0;

/// Immutable capture of market state shared read-only by every strategy.
///
/// `prices` is ordered oldest to newest. `sentiment` maps a source name
/// (e.g. `news`, `social`) to a score in [-1, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default)]
    pub prices: Vec<f64>,
    #[serde(default)]
    pub sentiment: HashMap<String, f64>,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl MarketSnapshot {
    pub fn new(prices: Vec<f64>) -> Self {
        Self {
            symbol: None,
            prices,
            sentiment: HashMap::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_sentiment(mut self, source: impl Into<String>, score: f64) -> Self {
        self.sentiment.insert(source.into(), score);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn latest_price(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    pub fn sentiment_score(&self, source: &str) -> Option<f64> {
        self.sentiment.get(source).copied()
    }

    pub fn validate_prices(&self) -> Result<(), StrategyError> {
        match self.prices.iter().position(|p| !p.is_finite()) {
            Some(index) => Err(StrategyError::InvalidSnapshot(format!(
                "price at index {} is not finite: {}",
                index, self.prices[index]
            ))),
            None => Ok(()),
        }
    }

    pub fn validate_sentiment(&self) -> Result<(), StrategyError> {
        for (source, score) in &self.sentiment {
            if !score.is_finite() || *score < SENTIMENT_MIN || *score > SENTIMENT_MAX {
                return Err(StrategyError::InvalidSnapshot(format!(
                    "sentiment score for '{}' outside [{}, {}]: {}",
                    source, SENTIMENT_MIN, SENTIMENT_MAX, score
                )));
            }
        }
        Ok(())
    }
}
