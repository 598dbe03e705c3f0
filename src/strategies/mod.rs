//! Strategies that turn a market snapshot into a trade verdict.

pub mod sentiment;
pub mod technical;

pub use sentiment::SentimentStrategy;
pub use technical::TechnicalStrategy;

use crate::error::StrategyError;
use crate::models::market::MarketSnapshot;
use crate::models::signal::StrategyVerdict;
use async_trait::async_trait;

/// A strategy evaluates one snapshot independently of every other strategy.
///
/// Implementations must not carry state from one snapshot to the next.
/// Missing inputs should produce a "no trade" verdict; an `Err` is reserved
/// for malformed data and is downgraded to "no trade" by the engine.
#[async_trait]
pub trait Strategy: Send + Sync {
    fn name(&self) -> &str;

    async fn evaluate(&self, snapshot: &MarketSnapshot) -> Result<StrategyVerdict, StrategyError>;
}
