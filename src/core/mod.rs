//! Core application primitives (agent orchestration)

pub mod agent;

pub use agent::TradingAgent;
