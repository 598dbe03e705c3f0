//! Signal agent: technical/sentiment strategy evaluation and decision aggregation
//! feeding an external trade executor.

pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
pub mod strategies;

pub use error::{AgentError, FeedError, StrategyError};
