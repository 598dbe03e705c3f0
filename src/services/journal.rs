//! Remote trade log

use crate::config::JournalConfig;
use crate::error::AgentError;
use crate::models::trade::ExecutionReceipt;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

#[async_trait]
pub trait TradeJournal: Send + Sync {
    async fn log_trade(&self, receipt: &ExecutionReceipt) -> Result<Value, AgentError>;
}

/// Posts every receipt as JSON to `{endpoint}/log` using HTTP basic auth
pub struct HttpTradeJournal {
    client: reqwest::Client,
    config: JournalConfig,
}

impl HttpTradeJournal {
    pub fn new(config: JournalConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(config: JournalConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    fn log_url(&self) -> String {
        format!("{}/log", self.config.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl TradeJournal for HttpTradeJournal {
    async fn log_trade(&self, receipt: &ExecutionReceipt) -> Result<Value, AgentError> {
        let url = self.log_url();
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .json(receipt)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::Journal(format!(
                "{} returned {}: {}",
                url, status, body
            )));
        }

        debug!(id = %receipt.id, url = %url, "HttpTradeJournal: trade logged");
        Ok(response.json::<Value>().await?)
    }
}
