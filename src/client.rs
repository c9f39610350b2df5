//! High-level client — `ChartFeedClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder, the symbol-list cache, and accessor methods.

use crate::domain::candle::client::Candles;
use crate::domain::indicator::client::Indicators;
use crate::error::SdkError;
use crate::http::ChartFeedHttp;
use crate::shared::Symbol;
use crate::ws::WsConfig;

use async_lock::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// The primary entry point for the ChartFeed SDK.
///
/// Provides nested sub-client accessors per domain: `client.candles()`,
/// `client.indicators()`.
pub struct ChartFeedClient {
    pub(crate) http: ChartFeedHttp,
    pub(crate) ws_url: String,
    /// Symbol-list cache: (symbols, fetched_at)
    pub(crate) symbol_cache: Arc<RwLock<Option<(Vec<Symbol>, Instant)>>>,
    /// Cache TTL for the symbol list
    pub(crate) symbol_cache_ttl: Duration,
}

impl ChartFeedClient {
    pub fn builder() -> ChartFeedClientBuilder {
        ChartFeedClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn candles(&self) -> Candles<'_> {
        Candles { client: self }
    }

    pub fn indicators(&self) -> Indicators<'_> {
        Indicators { client: self }
    }

    /// List tradable symbols. Uses a TTL cache — the list rarely changes
    /// while the terminal is up.
    pub async fn symbols(&self) -> Result<Vec<Symbol>, SdkError> {
        {
            let cache = self.symbol_cache.read().await;
            if let Some((symbols, fetched_at)) = cache.as_ref() {
                if fetched_at.elapsed() < self.symbol_cache_ttl {
                    return Ok(symbols.clone());
                }
            }
        }

        let resp = self.http.get_symbols().await?;
        *self.symbol_cache.write().await = Some((resp.symbols.clone(), Instant::now()));
        Ok(resp.symbols)
    }

    pub async fn clear_symbol_cache(&self) {
        *self.symbol_cache.write().await = None;
    }

    /// WS config for one symbol's live feed.
    ///
    /// The WS client is intentionally not embedded in `ChartFeedClient`
    /// because feed lifetimes are tied to the host's symbol selection, not
    /// to the client's.
    pub fn ws_config_for(&self, symbol: &Symbol) -> WsConfig {
        WsConfig::for_symbol(&self.ws_url, symbol)
    }

    /// Create a new native WS client for one symbol's feed.
    #[cfg(feature = "ws-native")]
    pub fn ws_native(&self, symbol: &Symbol) -> crate::ws::native::WsClient {
        crate::ws::native::WsClient::new(self.ws_config_for(symbol))
    }
}

impl Clone for ChartFeedClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            ws_url: self.ws_url.clone(),
            symbol_cache: self.symbol_cache.clone(),
            symbol_cache_ttl: self.symbol_cache_ttl,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ChartFeedClientBuilder {
    base_url: String,
    ws_url: String,
    symbol_cache_ttl: Duration,
}

impl Default for ChartFeedClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            ws_url: crate::network::DEFAULT_WS_URL.to_string(),
            symbol_cache_ttl: Duration::from_secs(60),
        }
    }
}

impl ChartFeedClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn ws_url(mut self, url: &str) -> Self {
        self.ws_url = url.to_string();
        self
    }

    pub fn symbol_cache_ttl(mut self, ttl: Duration) -> Self {
        self.symbol_cache_ttl = ttl;
        self
    }

    pub fn build(self) -> Result<ChartFeedClient, SdkError> {
        Ok(ChartFeedClient {
            http: ChartFeedHttp::new(&self.base_url),
            ws_url: self.ws_url,
            symbol_cache: Arc::new(RwLock::new(None)),
            symbol_cache_ttl: self.symbol_cache_ttl,
        })
    }
}
