//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::error::IndicatorError;
use crate::indicators::math;
use crate::models::indicators::MacdIndicator;
use tracing::debug;

pub const MACD_FAST_PERIOD: usize = 12;
pub const MACD_SLOW_PERIOD: usize = 26;
pub const MACD_SIGNAL_PERIOD: usize = 9;

/// Calculate MACD, zero lines when fewer than 26 prices are available
///
/// MACD = EMA(12) - EMA(26)
/// Signal = mean of the last 9 MACD values
/// Histogram = MACD - Signal
pub fn calculate_macd(prices: &[f64]) -> MacdIndicator {
    try_calculate_macd(prices).unwrap_or_else(|e| {
        debug!(error = %e, "MACD: using neutral lines");
        MacdIndicator::neutral()
    })
}

pub fn try_calculate_macd(prices: &[f64]) -> Result<MacdIndicator, IndicatorError> {
    if prices.len() < MACD_SLOW_PERIOD {
        return Err(IndicatorError::InsufficientData {
            indicator: "macd",
            required: MACD_SLOW_PERIOD,
            available: prices.len(),
        });
    }

    let fast = math::ema_series(prices, MACD_FAST_PERIOD);
    let slow = math::ema_series(prices, MACD_SLOW_PERIOD);
    let macd_values: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();

    let macd_line = *macd_values.last().ok_or(IndicatorError::InsufficientData {
        indicator: "macd",
        required: MACD_SLOW_PERIOD,
        available: 0,
    })?;
    let signal_line = math::mean(math::tail(&macd_values, MACD_SIGNAL_PERIOD)).unwrap_or(0.0);

    Ok(MacdIndicator::new(macd_line, signal_line))
}
