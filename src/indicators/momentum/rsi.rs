//! RSI (Relative Strength Index) indicator

use crate::indicators::error::IndicatorError;
use crate::indicators::math;
use crate::models::indicators::RsiIndicator;
use tracing::debug;

pub const DEFAULT_RSI_PERIOD: u32 = 14;

/// Calculate RSI, falling back to the neutral value 50 when data is short
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
pub fn calculate_rsi(prices: &[f64], period: u32) -> RsiIndicator {
    try_calculate_rsi(prices, period).unwrap_or_else(|e| {
        debug!(error = %e, "RSI: using neutral value");
        RsiIndicator::neutral(period)
    })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(prices: &[f64]) -> RsiIndicator {
    calculate_rsi(prices, DEFAULT_RSI_PERIOD)
}

/// Strict RSI: errors instead of returning the neutral value.
///
/// Gains and losses are averaged over the last `period` deltas, or over every
/// delta when exactly `period` prices are available.
pub fn try_calculate_rsi(prices: &[f64], period: u32) -> Result<RsiIndicator, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { indicator: "rsi" });
    }
    let period_len = period as usize;
    if prices.len() < period_len || prices.len() < 2 {
        return Err(IndicatorError::InsufficientData {
            indicator: "rsi",
            required: period_len.max(2),
            available: prices.len(),
        });
    }

    let deltas: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
    let window = math::tail(&deltas, period_len);

    let gains: Vec<f64> = window.iter().map(|d| d.max(0.0)).collect();
    let losses: Vec<f64> = window.iter().map(|d| (-d).max(0.0)).collect();

    let avg_gain = math::mean(&gains).unwrap_or(0.0);
    let avg_loss = math::mean(&losses).unwrap_or(0.0);

    if avg_loss == 0.0 {
        return Ok(RsiIndicator {
            value: 100.0,
            period,
        });
    }

    let rs = avg_gain / avg_loss;
    let rsi = 100.0 - (100.0 / (1.0 + rs));

    Ok(RsiIndicator { value: rsi, period })
}
