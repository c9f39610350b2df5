//! HTTP client layer — `ChartFeedHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::ChartFeedHttp;
pub use retry::{RetryConfig, RetryPolicy};
