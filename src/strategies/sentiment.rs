//! Weighted news/social sentiment strategy

use crate::config::SentimentConfig;
use crate::error::StrategyError;
use crate::models::market::MarketSnapshot;
use crate::models::signal::{StrategyVerdict, TradeDirection};
use crate::strategies::Strategy;
use async_trait::async_trait;
use tracing::debug;

pub const SENTIMENT_STRATEGY: &str = "sentiment";
pub const NEWS_SOURCE: &str = "news";
pub const SOCIAL_SOURCE: &str = "social";

pub struct SentimentStrategy {
    config: SentimentConfig,
}

impl SentimentStrategy {
    pub fn new(config: SentimentConfig) -> Self {
        Self { config }
    }

    /// Weighted blend of the news and social scores; an absent source counts as 0
    pub fn blend(&self, snapshot: &MarketSnapshot) -> f64 {
        let news = snapshot.sentiment_score(NEWS_SOURCE).unwrap_or(0.0);
        let social = snapshot.sentiment_score(SOCIAL_SOURCE).unwrap_or(0.0);
        news * self.config.news_weight + social * self.config.social_weight
    }
}

impl Default for SentimentStrategy {
    fn default() -> Self {
        Self::new(SentimentConfig::default())
    }
}

#[async_trait]
impl Strategy for SentimentStrategy {
    fn name(&self) -> &str {
        SENTIMENT_STRATEGY
    }

    async fn evaluate(&self, snapshot: &MarketSnapshot) -> Result<StrategyVerdict, StrategyError> {
        if snapshot.sentiment.is_empty() {
            return Ok(StrategyVerdict::no_trade(SENTIMENT_STRATEGY, snapshot.timestamp)
                .with_note("no sentiment data"));
        }
        snapshot.validate_sentiment()?;

        let score = self.blend(snapshot);
        debug!(score, threshold = self.config.threshold, "SentimentStrategy: blended score");

        let verdict = if score.abs() > self.config.threshold {
            let direction = if score > 0.0 {
                TradeDirection::Buy
            } else {
                TradeDirection::Sell
            };
            StrategyVerdict::trade(
                SENTIMENT_STRATEGY,
                direction,
                score.abs().min(1.0),
                snapshot.timestamp,
            )
        } else {
            StrategyVerdict::no_trade(SENTIMENT_STRATEGY, snapshot.timestamp)
        };

        Ok(verdict.with_sentiment_score(score))
    }
}
