//! WebSocket market feed: JSON-encoded snapshots, one per frame

use crate::error::FeedError;
use crate::models::market::MarketSnapshot;
use crate::services::market_data::{SnapshotSource, SnapshotStream};
use async_trait::async_trait;
use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, trace};
use url::Url;

pub struct WebSocketSnapshotSource {
    url: Url,
}

impl WebSocketSnapshotSource {
    pub fn new(url: &str) -> Result<Self, FeedError> {
        let url = Url::parse(url).map_err(|e| FeedError::Connect(format!("invalid feed url: {}", e)))?;
        match url.scheme() {
            "ws" | "wss" => Ok(Self { url }),
            other => Err(FeedError::Connect(format!(
                "unsupported feed scheme '{}', expected ws or wss",
                other
            ))),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl SnapshotSource for WebSocketSnapshotSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn connect(&self) -> Result<Box<dyn SnapshotStream>, FeedError> {
        let (socket, response) = connect_async(self.url.as_str())
            .await
            .map_err(|e| FeedError::Connect(e.to_string()))?;
        debug!(status = %response.status(), url = %self.url, "WebSocket: handshake complete");
        Ok(Box::new(WebSocketSnapshotStream { socket }))
    }
}

struct WebSocketSnapshotStream {
    socket: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

#[async_trait]
impl SnapshotStream for WebSocketSnapshotStream {
    async fn next_snapshot(&mut self) -> Result<Option<MarketSnapshot>, FeedError> {
        while let Some(message) = self.socket.next().await {
            let message = message.map_err(|e| FeedError::Stream(e.to_string()))?;
            match message {
                Message::Text(text) => return Ok(Some(serde_json::from_str(&text)?)),
                Message::Binary(bytes) => return Ok(Some(serde_json::from_slice(&bytes)?)),
                Message::Close(frame) => {
                    debug!(frame = ?frame, "WebSocket: close frame received");
                    return Ok(None);
                }
                other => trace!(message = ?other, "WebSocket: control frame ignored"),
            }
        }
        Ok(None)
    }
}
