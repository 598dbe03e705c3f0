//! Policies combining strategy verdicts into one direction

use crate::models::signal::{StrategyVerdict, TradeDirection};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MIN_SCORE: f64 = 0.5;

/// Pluggable combination rule.
///
/// Returns the direction to trade, or `None` for no trade.
pub trait AggregationPolicy: Send + Sync {
    fn name(&self) -> &str;

    fn combine(&self, verdicts: &[StrategyVerdict]) -> Option<TradeDirection>;
}

/// Built-in aggregation methods
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AggregationMethod {
    /// Majority vote among recommending verdicts; ties mean no trade
    #[default]
    Majority,
    /// Every verdict must recommend the same direction
    Unanimous,
    /// Net signed confidence must reach `min_score`
    WeightedConfidence { min_score: f64 },
}

impl AggregationMethod {
    fn majority(verdicts: &[StrategyVerdict]) -> Option<TradeDirection> {
        let (buys, sells) = verdicts
            .iter()
            .filter(|v| v.recommends())
            .fold((0usize, 0usize), |(buys, sells), v| match v.direction {
                Some(TradeDirection::Buy) => (buys + 1, sells),
                Some(TradeDirection::Sell) => (buys, sells + 1),
                None => (buys, sells),
            });

        if buys > sells {
            Some(TradeDirection::Buy)
        } else if sells > buys {
            Some(TradeDirection::Sell)
        } else {
            None
        }
    }

    fn unanimous(verdicts: &[StrategyVerdict]) -> Option<TradeDirection> {
        let first = verdicts.first()?;
        if !first.recommends() {
            return None;
        }
        let direction = first.direction?;
        verdicts
            .iter()
            .all(|v| v.recommends() && v.direction == Some(direction))
            .then_some(direction)
    }

    fn weighted(verdicts: &[StrategyVerdict], min_score: f64) -> Option<TradeDirection> {
        let net: f64 = verdicts
            .iter()
            .filter(|v| v.recommends())
            .map(|v| match v.direction {
                Some(TradeDirection::Buy) => v.confidence,
                Some(TradeDirection::Sell) => -v.confidence,
                None => 0.0,
            })
            .sum();

        if net == 0.0 || net.abs() < min_score {
            None
        } else if net > 0.0 {
            Some(TradeDirection::Buy)
        } else {
            Some(TradeDirection::Sell)
        }
    }
}

impl AggregationPolicy for AggregationMethod {
    fn name(&self) -> &str {
        match self {
            AggregationMethod::Majority => "majority",
            AggregationMethod::Unanimous => "unanimous",
            AggregationMethod::WeightedConfidence { .. } => "weighted",
        }
    }

    fn combine(&self, verdicts: &[StrategyVerdict]) -> Option<TradeDirection> {
        match self {
            AggregationMethod::Majority => Self::majority(verdicts),
            AggregationMethod::Unanimous => Self::unanimous(verdicts),
            AggregationMethod::WeightedConfidence { min_score } => {
                Self::weighted(verdicts, *min_score)
            }
        }
    }
}

impl FromStr for AggregationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "majority" => Ok(AggregationMethod::Majority),
            "unanimous" => Ok(AggregationMethod::Unanimous),
            "weighted" => Ok(AggregationMethod::WeightedConfidence {
                min_score: DEFAULT_MIN_SCORE,
            }),
            other => Err(format!(
                "unknown aggregation policy '{}' (expected majority, unanimous or weighted)",
                other
            )),
        }
    }
}

impl fmt::Display for AggregationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
