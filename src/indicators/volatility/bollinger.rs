//! Bollinger Bands indicator

use crate::indicators::error::IndicatorError;
use crate::indicators::math;
use crate::models::indicators::BollingerBandsIndicator;
use tracing::debug;

pub const DEFAULT_BOLLINGER_PERIOD: u32 = 20;
pub const DEFAULT_BOLLINGER_STD_DEV: f64 = 2.0;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
///
/// With fewer than `period` prices every band collapses to the latest price
/// (0 for an empty series).
pub fn calculate_bollinger_bands(
    prices: &[f64],
    period: u32,
    std_dev: f64,
) -> BollingerBandsIndicator {
    try_calculate_bollinger_bands(prices, period, std_dev).unwrap_or_else(|e| {
        debug!(error = %e, "Bollinger: collapsing bands to latest price");
        let last = prices.last().copied().unwrap_or(0.0);
        BollingerBandsIndicator::collapsed(last, period, std_dev)
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(prices: &[f64]) -> BollingerBandsIndicator {
    calculate_bollinger_bands(prices, DEFAULT_BOLLINGER_PERIOD, DEFAULT_BOLLINGER_STD_DEV)
}

pub fn try_calculate_bollinger_bands(
    prices: &[f64],
    period: u32,
    std_dev: f64,
) -> Result<BollingerBandsIndicator, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod {
            indicator: "bollinger",
        });
    }
    if prices.len() < period as usize {
        return Err(IndicatorError::InsufficientData {
            indicator: "bollinger",
            required: period as usize,
            available: prices.len(),
        });
    }

    let window = math::tail(prices, period as usize);
    let middle = math::mean(window).unwrap_or(0.0);
    let std = math::population_std_dev(window).unwrap_or(0.0);

    Ok(BollingerBandsIndicator {
        upper: middle + (std_dev * std),
        middle,
        lower: middle - (std_dev * std),
        period,
        std_dev,
    })
}
