//! RSI + MACD strategy

use crate::config::TechnicalConfig;
use crate::error::StrategyError;
use crate::indicators::compute_indicator_set;
use crate::models::indicators::IndicatorSet;
use crate::models::market::MarketSnapshot;
use crate::models::signal::{StrategyVerdict, TradeDirection};
use crate::strategies::Strategy;
use async_trait::async_trait;
use tracing::debug;

pub const TECHNICAL_STRATEGY: &str = "technical";

pub struct TechnicalStrategy {
    config: TechnicalConfig,
}

impl TechnicalStrategy {
    pub fn new(config: TechnicalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TechnicalConfig {
        &self.config
    }
}

impl Default for TechnicalStrategy {
    fn default() -> Self {
        Self::new(TechnicalConfig::default())
    }
}

/// Conjunctive entry rule.
///
/// Buy when RSI is oversold AND the MACD line is above its signal line;
/// sell when RSI is overbought AND the MACD line is below it.
pub fn decide(indicators: &IndicatorSet, config: &TechnicalConfig) -> Option<TradeDirection> {
    let rsi = indicators.rsi.value;
    if rsi < config.rsi_oversold && indicators.macd.is_bullish() {
        Some(TradeDirection::Buy)
    } else if rsi > config.rsi_overbought && indicators.macd.is_bearish() {
        Some(TradeDirection::Sell)
    } else {
        None
    }
}

/// How far RSI sits beyond the triggered level, scaled to [0, 1]
fn confidence(direction: TradeDirection, rsi: f64, config: &TechnicalConfig) -> f64 {
    let extremity = match direction {
        TradeDirection::Buy if config.rsi_oversold > 0.0 => {
            (config.rsi_oversold - rsi) / config.rsi_oversold
        }
        TradeDirection::Sell if config.rsi_overbought < 100.0 => {
            (rsi - config.rsi_overbought) / (100.0 - config.rsi_overbought)
        }
        _ => 1.0,
    };
    extremity.clamp(0.0, 1.0)
}

#[async_trait]
impl Strategy for TechnicalStrategy {
    fn name(&self) -> &str {
        TECHNICAL_STRATEGY
    }

    async fn evaluate(&self, snapshot: &MarketSnapshot) -> Result<StrategyVerdict, StrategyError> {
        let latest = match snapshot.latest_price() {
            Some(price) => price,
            None => {
                return Ok(StrategyVerdict::no_trade(TECHNICAL_STRATEGY, snapshot.timestamp)
                    .with_note("no price data"));
            }
        };
        snapshot.validate_prices()?;

        let indicators = compute_indicator_set(&snapshot.prices, &self.config);
        debug!(
            rsi = indicators.rsi.value,
            macd = indicators.macd.macd,
            macd_signal = indicators.macd.signal,
            "TechnicalStrategy: indicators computed"
        );

        let verdict = match decide(&indicators, &self.config) {
            Some(direction) => StrategyVerdict::trade(
                TECHNICAL_STRATEGY,
                direction,
                confidence(direction, indicators.rsi.value, &self.config),
                snapshot.timestamp,
            )
            .with_price_hint(latest),
            None => StrategyVerdict::no_trade(TECHNICAL_STRATEGY, snapshot.timestamp),
        };

        Ok(verdict.with_indicators(indicators))
    }
}
