//! Aggregated decisions and the payloads exchanged with the execution side

use crate::models::signal::{StrategyVerdict, TradeDirection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SYMBOL: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeDecision {
    pub should_trade: bool,
    pub direction: Option<TradeDirection>,
    pub policy: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub symbol: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub verdicts: Vec<StrategyVerdict>,
}

impl TradeDecision {
    pub fn new(
        direction: Option<TradeDirection>,
        policy: impl Into<String>,
        symbol: Option<String>,
        timestamp: DateTime<Utc>,
        verdicts: Vec<StrategyVerdict>,
    ) -> Self {
        Self {
            should_trade: direction.is_some(),
            direction,
            policy: policy.into(),
            symbol,
            timestamp,
            verdicts,
        }
    }

    /// Verdicts recommending the chosen direction
    pub fn supporting_verdicts(&self) -> impl Iterator<Item = &StrategyVerdict> {
        let direction = self.direction;
        self.verdicts
            .iter()
            .filter(move |v| v.recommends() && v.direction == direction)
    }

    /// Parameters for the executor, present only when a trade is recommended.
    ///
    /// Size and price come from the first supporting verdict carrying each hint.
    pub fn trade_params(&self) -> Option<TradeParams> {
        if !self.should_trade {
            return None;
        }
        let direction = self.direction?;
        let size = self.supporting_verdicts().find_map(|v| v.size_hint);
        let price = self.supporting_verdicts().find_map(|v| v.price_hint);

        Some(TradeParams {
            symbol: self
                .symbol
                .clone()
                .unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
            direction,
            size,
            price,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeParams {
    pub symbol: String,
    pub direction: TradeDirection,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionReceipt {
    pub id: String,
    pub symbol: String,
    pub direction: TradeDirection,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price: Option<f64>,
    pub status: String,
    pub executed_at: DateTime<Utc>,
}
