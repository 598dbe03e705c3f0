use serde::{Deserialize, Serialize};

/// RSI value with the lookback it was computed over
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: u32,
}

impl RsiIndicator {
    pub const NEUTRAL: f64 = 50.0;

    pub fn neutral(period: u32) -> Self {
        Self {
            value: Self::NEUTRAL,
            period,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl MacdIndicator {
    pub fn new(macd: f64, signal: f64) -> Self {
        Self {
            macd,
            signal,
            histogram: macd - signal,
        }
    }

    /// Zero lines: no trade bias in either direction
    pub fn neutral() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn is_bullish(&self) -> bool {
        self.macd > self.signal
    }

    pub fn is_bearish(&self) -> bool {
        self.macd < self.signal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub period: u32,
    pub std_dev: f64,
}

impl BollingerBandsIndicator {
    /// All three bands pinned to a single price (degenerate, no-signal state)
    pub fn collapsed(price: f64, period: u32, std_dev: f64) -> Self {
        Self {
            upper: price,
            middle: price,
            lower: price,
            period,
            std_dev,
        }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Indicators derived from one snapshot's price series.
///
/// Recomputed on every evaluation; never cached between snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub rsi: RsiIndicator,
    pub macd: MacdIndicator,
    pub bollinger: BollingerBandsIndicator,
}
