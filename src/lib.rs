//! # ChartFeed SDK
//!
//! A Rust SDK for the ChartFeed terminal bridge: streaming OHLC candles and
//! incrementally recomputed chart indicators for a live market-data view.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared types, domain models, indicator math (always available)
//! 2. **Session** — Per-symbol pipeline: close window → RSI → reconciled series
//! 3. **HTTP API** — `ChartFeedHttp` with per-endpoint retry policies
//! 4. **WebSocket** — `tokio-tungstenite` live feed behind the `ws-native` feature
//! 5. **High-Level Client** — `ChartFeedClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chartfeed_sdk::prelude::*;
//!
//! let client = ChartFeedClient::builder()
//!     .base_url("http://127.0.0.1:8000")
//!     .build()?;
//!
//! let symbol = Symbol::from("EURUSD");
//! let config = SessionConfig::default();
//! let mut session = ChartSession::new(symbol.clone(), config, my_sink);
//!
//! let candles = client.candles().history(&symbol, config.timeframe, 100).await?;
//! session.apply_ohlc_history(&symbol, &candles);
//!
//! let baseline = client
//!     .indicators()
//!     .rsi_history(&symbol, config.timeframe, config.period, 100)
//!     .await?;
//! session.apply_rsi_history(&symbol, baseline);
//!
//! let mut ws = client.ws_native(&symbol);
//! ws.connect().await?;
//! chartfeed_sdk::session::drive(&mut session, &ws).await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Session ─────────────────────────────────────────────────────────

/// Per-symbol pipeline: window, indicator recompute, reconciliation, sink.
pub mod session;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: WebSocket ───────────────────────────────────────────────────────

/// WebSocket live feed: events, config, native transport.
pub mod ws;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `ChartFeedClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Symbol, Timeframe};

    // Domain types — candle
    pub use crate::domain::candle::{Candle, CandleHistory};

    // Domain types — indicator
    pub use crate::domain::indicator::{
        rsi, rsi_series, AppendOutcome, CloseWindow, IndicatorPoint, IndicatorSeries,
        DEFAULT_RSI_PERIOD, DEFAULT_WINDOW_CAPACITY,
    };

    // Session
    pub use crate::session::{ChartSession, ConnectionState, RenderSink, SessionConfig};

    // Errors
    pub use crate::error::SdkError;

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_WS_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{ChartFeedClient, ChartFeedClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::domain::candle::client::Candles;
    #[cfg(feature = "http")]
    pub use crate::domain::indicator::client::Indicators;
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};

    // WebSocket types
    pub use crate::ws::{FeedMessage, ReadyState, WsConfig, WsEvent, WsTick};
}
