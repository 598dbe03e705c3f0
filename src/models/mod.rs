//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod market;
pub mod signal;
pub mod trade;

pub use indicators::{BollingerBandsIndicator, IndicatorSet, MacdIndicator, RsiIndicator};
pub use market::MarketSnapshot;
pub use signal::{StrategyVerdict, TradeDirection};
pub use trade::{ExecutionReceipt, TradeDecision, TradeParams};
