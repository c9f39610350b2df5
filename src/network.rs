//! Network URL constants for the ChartFeed SDK.
//!
//! The bridge runs next to the trading terminal, so the defaults point at
//! localhost. Override both via `ChartFeedClient::builder()`.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Default WebSocket base URL. The live feed is opened per symbol at
/// `{DEFAULT_WS_URL}/{symbol}`.
pub const DEFAULT_WS_URL: &str = "ws://127.0.0.1:8000/ws";
