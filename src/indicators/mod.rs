//! Indicator engine: pure functions from a price series to indicator values.

pub mod error;
pub mod math;
pub mod momentum;
pub mod volatility;

pub use error::IndicatorError;

use crate::config::TechnicalConfig;
use crate::models::indicators::IndicatorSet;

/// Compute every indicator the technical strategy consumes.
///
/// Each indicator is independent of the others; short series yield their
/// neutral defaults instead of errors.
pub fn compute_indicator_set(prices: &[f64], config: &TechnicalConfig) -> IndicatorSet {
    IndicatorSet {
        rsi: momentum::calculate_rsi(prices, config.rsi_period),
        macd: momentum::calculate_macd(prices),
        bollinger: volatility::calculate_bollinger_bands(
            prices,
            config.bollinger_period,
            config.bollinger_std_dev,
        ),
    }
}
