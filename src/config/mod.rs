//! Runtime configuration.
//!
//! Every component receives its config at construction time; nothing here is
//! read lazily from a global.

use crate::error::AgentError;
use crate::signals::aggregation::AggregationMethod;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Deployment environment name (`ENVIRONMENT`, default `sandbox`)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct TechnicalConfig {
    pub rsi_period: u32,
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    pub bollinger_period: u32,
    pub bollinger_std_dev: f64,
}

impl Default for TechnicalConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentConfig {
    pub news_weight: f64,
    pub social_weight: f64,
    pub threshold: f64,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            news_weight: 0.7,
            social_weight: 0.3,
            threshold: 0.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub strategy_timeout: Duration,
    pub aggregation: AggregationMethod,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy_timeout: Duration::from_secs(3),
            aggregation: AggregationMethod::Majority,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub url: Option<String>,
    pub min_backoff: Duration,
    pub max_backoff: Duration,
    pub max_retries: usize,
    pub channel_capacity: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: None,
            min_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(5),
            max_retries: 10,
            channel_capacity: 64,
        }
    }
}

/// Remote trade log endpoint (basic auth)
#[derive(Debug, Clone, PartialEq)]
pub struct JournalConfig {
    pub endpoint: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct AgentConfig {
    pub environment: String,
    pub technical: TechnicalConfig,
    pub sentiment: SentimentConfig,
    pub engine: EngineConfig,
    pub feed: FeedConfig,
    pub journal: Option<JournalConfig>,
}

impl AgentConfig {
    pub fn from_env() -> Result<Self, AgentError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (unset keys keep their defaults)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AgentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let technical_defaults = TechnicalConfig::default();
        let technical = TechnicalConfig {
            rsi_period: parse_or(&lookup, "RSI_PERIOD", technical_defaults.rsi_period)?,
            rsi_oversold: parse_or(&lookup, "RSI_OVERSOLD", technical_defaults.rsi_oversold)?,
            rsi_overbought: parse_or(
                &lookup,
                "RSI_OVERBOUGHT",
                technical_defaults.rsi_overbought,
            )?,
            bollinger_period: parse_or(
                &lookup,
                "BOLLINGER_PERIOD",
                technical_defaults.bollinger_period,
            )?,
            bollinger_std_dev: parse_or(
                &lookup,
                "BOLLINGER_STD_DEV",
                technical_defaults.bollinger_std_dev,
            )?,
        };
        if technical.rsi_oversold >= technical.rsi_overbought {
            return Err(AgentError::Config(format!(
                "RSI_OVERSOLD ({}) must be below RSI_OVERBOUGHT ({})",
                technical.rsi_oversold, technical.rsi_overbought
            )));
        }

        let sentiment_defaults = SentimentConfig::default();
        let sentiment = SentimentConfig {
            news_weight: parse_or(
                &lookup,
                "SENTIMENT_NEWS_WEIGHT",
                sentiment_defaults.news_weight,
            )?,
            social_weight: parse_or(
                &lookup,
                "SENTIMENT_SOCIAL_WEIGHT",
                sentiment_defaults.social_weight,
            )?,
            threshold: parse_or(&lookup, "SENTIMENT_THRESHOLD", sentiment_defaults.threshold)?,
        };

        let engine_defaults = EngineConfig::default();
        let timeout_ms: u64 = parse_or(
            &lookup,
            "STRATEGY_TIMEOUT_MS",
            engine_defaults.strategy_timeout.as_millis() as u64,
        )?;
        let mut aggregation: AggregationMethod =
            parse_or(&lookup, "AGGREGATION_POLICY", engine_defaults.aggregation)?;
        if let AggregationMethod::WeightedConfidence { min_score } = &mut aggregation {
            *min_score = parse_or(&lookup, "AGGREGATION_MIN_SCORE", *min_score)?;
        }
        let engine = EngineConfig {
            strategy_timeout: Duration::from_millis(timeout_ms),
            aggregation,
        };

        let feed_defaults = FeedConfig::default();
        let feed = FeedConfig {
            url: lookup("MARKET_FEED_URL").filter(|v| !v.trim().is_empty()),
            min_backoff: Duration::from_millis(parse_or(
                &lookup,
                "FEED_MIN_BACKOFF_MS",
                feed_defaults.min_backoff.as_millis() as u64,
            )?),
            max_backoff: Duration::from_millis(parse_or(
                &lookup,
                "FEED_MAX_BACKOFF_MS",
                feed_defaults.max_backoff.as_millis() as u64,
            )?),
            max_retries: parse_or(&lookup, "FEED_MAX_RETRIES", feed_defaults.max_retries)?,
            channel_capacity: feed_defaults.channel_capacity,
        };

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "sandbox".to_string()),
            technical,
            sentiment,
            engine,
            feed,
            journal: journal_from_lookup(&lookup)?,
        })
    }
}

/// The journal is optional, but a partial configuration names every missing variable.
fn journal_from_lookup<F>(lookup: &F) -> Result<Option<JournalConfig>, AgentError>
where
    F: Fn(&str) -> Option<String>,
{
    const KEYS: [&str; 3] = ["AUTONOME_ENDPOINT", "AUTONOME_USERNAME", "AUTONOME_PASSWORD"];

    let values: Vec<Option<String>> = KEYS
        .iter()
        .map(|key| lookup(key).filter(|v| !v.is_empty()))
        .collect();

    if values.iter().all(Option::is_none) {
        return Ok(None);
    }

    let missing: Vec<&str> = KEYS
        .iter()
        .zip(&values)
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| *key)
        .collect();
    if !missing.is_empty() {
        return Err(AgentError::Config(format!(
            "Missing environment variables: {}",
            missing.join(", ")
        )));
    }

    let mut values = values.into_iter().flatten();
    match (values.next(), values.next(), values.next()) {
        (Some(endpoint), Some(username), Some(password)) => Ok(Some(JournalConfig {
            endpoint,
            username,
            password,
        })),
        _ => Err(AgentError::Config("incomplete journal configuration".to_string())),
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AgentError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| AgentError::Config(format!("invalid value for {}: '{}' ({})", key, raw, e))),
        _ => Ok(default),
    }
}
