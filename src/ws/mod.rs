//! WebSocket layer — live feed events and connection config.
//!
//! The feed is receive-only: the bridge streams candle-shaped ticks for the
//! symbol named in the connection URL, so there is no outbound subscribe
//! protocol. The actual transport lives in `native.rs` behind the
//! `ws-native` feature; this module defines the shared event types the
//! session layer consumes, which keeps the pipeline testable with a fake
//! event sequence.

#[cfg(feature = "ws-native")]
pub mod native;

pub use crate::domain::candle::wire::{FeedMessage, WsServerError, WsTick};

// ─── WsEvent ─────────────────────────────────────────────────────────────────

/// High-level events emitted by the WS client to the consumer.
#[derive(Debug, Clone, PartialEq)]
pub enum WsEvent {
    /// A parsed message from the feed.
    Message(FeedMessage),
    /// Connection established.
    Connected,
    /// Connection lost (the transport may reconnect on its own).
    Disconnected { code: Option<u16>, reason: String },
    /// A deserialization or protocol error; the connection stays up.
    Error(String),
}

// ─── ReadyState ──────────────────────────────────────────────────────────────

/// Connection state of the WS client, observable across tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Connecting = 0,
    Open = 1,
    Closed = 2,
}

impl From<u16> for ReadyState {
    fn from(v: u16) -> Self {
        match v {
            0 => ReadyState::Connecting,
            1 => ReadyState::Open,
            _ => ReadyState::Closed,
        }
    }
}

// ─── WsConfig ────────────────────────────────────────────────────────────────

/// Configuration for the WS client. `url` already names the symbol
/// (`{ws_base}/{symbol}`); reconnects reuse it unchanged.
#[derive(Debug, Clone)]
pub struct WsConfig {
    pub url: String,
    pub reconnect: bool,
    pub max_reconnect_attempts: u32,
    pub base_reconnect_delay_ms: u32,
}

impl Default for WsConfig {
    fn default() -> Self {
        Self {
            url: crate::network::DEFAULT_WS_URL.to_string(),
            reconnect: true,
            max_reconnect_attempts: 10,
            base_reconnect_delay_ms: 2000,
        }
    }
}

impl WsConfig {
    /// Config for one symbol's feed under a base WS URL.
    pub fn for_symbol(ws_base: &str, symbol: &crate::shared::Symbol) -> Self {
        Self {
            url: format!(
                "{}/{}",
                ws_base.trim_end_matches('/'),
                urlencoding::encode(symbol.as_str())
            ),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Symbol;

    #[test]
    fn test_ready_state_roundtrip() {
        assert_eq!(ReadyState::from(ReadyState::Connecting as u16), ReadyState::Connecting);
        assert_eq!(ReadyState::from(ReadyState::Open as u16), ReadyState::Open);
        assert_eq!(ReadyState::from(ReadyState::Closed as u16), ReadyState::Closed);
        assert_eq!(ReadyState::from(99), ReadyState::Closed);
    }

    #[test]
    fn test_config_for_symbol_builds_url() {
        let config = WsConfig::for_symbol("ws://127.0.0.1:8000/ws/", &Symbol::from("EURUSD"));
        assert_eq!(config.url, "ws://127.0.0.1:8000/ws/EURUSD");
    }

    #[test]
    fn test_config_for_symbol_encodes() {
        let config = WsConfig::for_symbol("ws://host/ws", &Symbol::from("EUR USD"));
        assert_eq!(config.url, "ws://host/ws/EUR%20USD");
    }
}
