//! Verdict aggregation and the evaluation engine.

pub mod aggregation;
pub mod engine;

pub use aggregation::{AggregationMethod, AggregationPolicy};
pub use engine::SignalEngine;
