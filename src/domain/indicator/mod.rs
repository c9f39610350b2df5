//! Indicator domain — RSI computation, close-price window, series state.

#[cfg(feature = "http")]
pub mod client;
pub mod rsi;
pub mod state;
pub mod window;
pub mod wire;

use serde::{Deserialize, Serialize};

pub use rsi::{rsi, rsi_series, DEFAULT_RSI_PERIOD};
pub use state::{AppendOutcome, IndicatorSeries};
pub use window::{CloseWindow, DEFAULT_WINDOW_CAPACITY};

/// One indicator sample on the chart. `value` is in `[0, 100]` for RSI.
///
/// Insufficient history is represented by the absence of a point, never by
/// a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub time: i64,
    pub value: f64,
}
