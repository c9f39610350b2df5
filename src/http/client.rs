//! Low-level HTTP client — `ChartFeedHttp`.
//!
//! One method per bridge endpoint. Returns wire types (conversion to domain
//! types happens at the sub-client boundary). Internal to the SDK —
//! `ChartFeedClient` wraps this.

use crate::domain::candle::wire::{OhlcResponse, SymbolsResponse};
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::Timeframe;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the ChartFeed bridge REST API.
pub struct ChartFeedHttp {
    base_url: String,
    client: Client,
}

impl ChartFeedHttp {
    pub fn new(base_url: &str) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    // ── Symbols ──────────────────────────────────────────────────────────

    pub async fn get_symbols(&self) -> Result<SymbolsResponse, HttpError> {
        let url = format!("{}/symbols", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── OHLC history ─────────────────────────────────────────────────────

    pub async fn get_ohlc(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        count: u32,
    ) -> Result<OhlcResponse, HttpError> {
        let url = format!(
            "{}/ohlc/{}?timeframe={}&count={}",
            self.base_url,
            urlencoding::encode(symbol),
            timeframe.as_str(),
            count
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── RSI history ──────────────────────────────────────────────────────

    /// Fetch the bulk RSI series as raw JSON.
    ///
    /// The payload shape is not guaranteed, so the domain layer lenient-
    /// parses it (`indicator::wire::parse_rsi_history`).
    pub async fn get_rsi(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        period: usize,
        count: u32,
    ) -> Result<serde_json::Value, HttpError> {
        let url = format!(
            "{}/rsi/{}?timeframe={}&period={}&count={}",
            self.base_url,
            urlencoding::encode(symbol),
            timeframe.as_str(),
            period,
            count
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(url).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl Clone for ChartFeedHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
        }
    }
}
