//! Wire types for candles (REST + WS).

use serde::{Deserialize, Serialize};

// ─── REST wire types ─────────────────────────────────────────────────────────

/// A single OHLC row from the `/ohlc` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleRow {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// REST response for `/ohlc/{symbol}`.
///
/// The bridge answers either `{"ohlc": [...]}` or `{"error": "..."}`. Both
/// fields default so either shape deserializes; an error payload simply
/// yields an empty `ohlc`.
#[derive(Debug, Clone, Deserialize)]
pub struct OhlcResponse {
    #[serde(default)]
    pub ohlc: Vec<CandleRow>,
    #[serde(default)]
    pub error: Option<String>,
}

/// REST response for `/symbols`.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolsResponse {
    #[serde(default)]
    pub symbols: Vec<crate::shared::Symbol>,
}

// ─── WS wire types ───────────────────────────────────────────────────────────

/// A candle-shaped tick from the live feed.
///
/// `time` and `close` are required; a message missing either fails to
/// deserialize and is dropped upstream. The remaining OHLC fields are
/// optional and fall back to `close` on conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WsTick {
    pub time: i64,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    pub close: f64,
}

/// An error message pushed by the feed instead of a tick.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WsServerError {
    pub error: String,
}

/// One message from the live feed: either a tick or a server-side error.
///
/// The feed sends plain objects with no type tag, so this is untagged;
/// `ServerError` is tried first because an error object can never carry
/// the `time`/`close` pair a tick requires.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FeedMessage {
    ServerError(WsServerError),
    Tick(WsTick),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ohlc_response_with_data() {
        let json = r#"{"ohlc":[{"time":1700000000,"open":1.1,"high":1.2,"low":1.0,"close":1.15}]}"#;
        let resp: OhlcResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.ohlc.len(), 1);
        assert!(resp.error.is_none());
        assert_eq!(resp.ohlc[0].close, 1.15);
    }

    #[test]
    fn test_ohlc_response_with_error() {
        let json = r#"{"error":"no data"}"#;
        let resp: OhlcResponse = serde_json::from_str(json).unwrap();
        assert!(resp.ohlc.is_empty());
        assert_eq!(resp.error.as_deref(), Some("no data"));
    }

    #[test]
    fn test_feed_message_tick() {
        let json = r#"{"time":1700000000,"open":1.1,"high":1.2,"low":1.0,"close":1.15}"#;
        let msg: FeedMessage = serde_json::from_str(json).unwrap();
        match msg {
            FeedMessage::Tick(tick) => {
                assert_eq!(tick.time, 1700000000);
                assert_eq!(tick.close, 1.15);
            }
            other => panic!("expected Tick, got: {other:?}"),
        }
    }

    #[test]
    fn test_feed_message_close_only_tick() {
        let json = r#"{"time":1700000060,"close":1.2}"#;
        let msg: FeedMessage = serde_json::from_str(json).unwrap();
        assert!(matches!(msg, FeedMessage::Tick(t) if t.open.is_none()));
    }

    #[test]
    fn test_feed_message_server_error() {
        let json = r#"{"error":"symbol not selected"}"#;
        let msg: FeedMessage = serde_json::from_str(json).unwrap();
        assert!(matches!(msg, FeedMessage::ServerError(e) if e.error == "symbol not selected"));
    }

    #[test]
    fn test_feed_message_missing_close_rejected() {
        let json = r#"{"time":1700000000,"open":1.1}"#;
        assert!(serde_json::from_str::<FeedMessage>(json).is_err());
    }

    #[test]
    fn test_feed_message_missing_time_rejected() {
        let json = r#"{"close":1.1}"#;
        assert!(serde_json::from_str::<FeedMessage>(json).is_err());
    }
}
