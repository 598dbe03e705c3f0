use crate::models::indicators::IndicatorSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    Buy,
    Sell,
}

impl TradeDirection {
    pub fn opposite(self) -> Self {
        match self {
            TradeDirection::Buy => TradeDirection::Sell,
            TradeDirection::Sell => TradeDirection::Buy,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeDirection::Buy => "buy",
            TradeDirection::Sell => "sell",
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One strategy's recommendation for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyVerdict {
    pub strategy: String,
    pub should_trade: bool,
    pub direction: Option<TradeDirection>,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub indicators: Option<IndicatorSet>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sentiment_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub size_hint: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price_hint: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
}

impl StrategyVerdict {
    pub fn trade(
        strategy: impl Into<String>,
        direction: TradeDirection,
        confidence: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            strategy: strategy.into(),
            should_trade: true,
            direction: Some(direction),
            confidence: confidence.clamp(0.0, 1.0),
            timestamp,
            indicators: None,
            sentiment_score: None,
            size_hint: None,
            price_hint: None,
            note: None,
        }
    }

    pub fn no_trade(strategy: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            strategy: strategy.into(),
            should_trade: false,
            direction: None,
            confidence: 0.0,
            timestamp,
            indicators: None,
            sentiment_score: None,
            size_hint: None,
            price_hint: None,
            note: None,
        }
    }

    pub fn with_indicators(mut self, indicators: IndicatorSet) -> Self {
        self.indicators = Some(indicators);
        self
    }

    pub fn with_sentiment_score(mut self, score: f64) -> Self {
        self.sentiment_score = Some(score);
        self
    }

    pub fn with_size_hint(mut self, size: f64) -> Self {
        self.size_hint = Some(size);
        self
    }

    pub fn with_price_hint(mut self, price: f64) -> Self {
        self.price_hint = Some(price);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// True when the verdict asks for a trade and names a side
    pub fn recommends(&self) -> bool {
        self.should_trade && self.direction.is_some()
    }
}
