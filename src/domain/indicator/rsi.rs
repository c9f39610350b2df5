//! Relative Strength Index over a window of closing prices.

use super::IndicatorPoint;
use crate::domain::candle::Candle;

/// Default look-back period, shared by the live recompute and the bulk
/// history fetch for a session.
pub const DEFAULT_RSI_PERIOD: usize = 5;

/// Compute the RSI over the last `period` price changes in `closes`.
///
/// Returns `None` when fewer than `period + 1` closes are available —
/// "no value yet", not an error. With no losing changes in the window the
/// result is exactly `100.0`; the value is always within `[0, 100]`.
///
/// Pure and re-derivable from the window alone; the session re-invokes it
/// on every tick, which is O(period) against a small bounded window.
pub fn rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;

    for i in closes.len() - period..closes.len() {
        let diff = closes[i] - closes[i - 1];
        if diff > 0.0 {
            gains += diff;
        } else {
            losses -= diff;
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

/// Compute the full RSI series over a candle history, one point per candle
/// from index `period` onward, stamped with that candle's time.
///
/// This mirrors the bridge's bulk `/rsi` computation, so a locally derived
/// series lines up with a fetched baseline point for point.
pub fn rsi_series(candles: &[Candle], period: usize) -> Vec<IndicatorPoint> {
    if period == 0 || candles.len() < period + 1 {
        return Vec::new();
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    (period..closes.len())
        .filter_map(|i| {
            rsi(&closes[..=i], period).map(|value| IndicatorPoint {
                time: candles[i].time,
                value,
            })
        })
        .collect()
}
