//! External collaborators: market feed, trade execution, trade journal.

pub mod execution;
pub mod journal;
pub mod market_data;
pub mod websocket;

pub use execution::{DryRunExecutor, TradeExecutor};
pub use journal::{HttpTradeJournal, TradeJournal};
pub use market_data::{MarketFeed, SnapshotSource, SnapshotStream};
pub use websocket::WebSocketSnapshotSource;
