//! Trade execution boundary.
//!
//! Signing and broadcasting transactions live outside this crate; the agent
//! only talks to a `TradeExecutor`.

use crate::error::AgentError;
use crate::models::trade::{ExecutionReceipt, TradeParams};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

#[async_trait]
pub trait TradeExecutor: Send + Sync {
    async fn execute(&self, params: &TradeParams) -> Result<ExecutionReceipt, AgentError>;
}

/// Executor that records the intent without touching a wallet
#[derive(Default)]
pub struct DryRunExecutor {
    sequence: AtomicU64,
}

impl DryRunExecutor {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TradeExecutor for DryRunExecutor {
    async fn execute(&self, params: &TradeParams) -> Result<ExecutionReceipt, AgentError> {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let receipt = ExecutionReceipt {
            id: format!("dry-run-{}", sequence),
            symbol: params.symbol.clone(),
            direction: params.direction,
            size: params.size,
            price: params.price,
            status: "simulated".to_string(),
            executed_at: Utc::now(),
        };

        info!(
            id = %receipt.id,
            symbol = %receipt.symbol,
            direction = %receipt.direction,
            size = ?receipt.size,
            price = ?receipt.price,
            "DryRunExecutor: trade simulated"
        );
        Ok(receipt)
    }
}
