//! Candle state containers — app-owned, SDK-provided update logic.

use super::Candle;

/// Live candle history for one symbol + timeframe.
///
/// The app owns instances of this type (typically behind its render sink)
/// and feeds it the same full-replace / upsert-by-time contract the chart
/// surface expects. The SDK provides the update methods.
#[derive(Debug, Clone, Default)]
pub struct CandleHistory {
    candles: Vec<Candle>,
}

impl CandleHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a history snapshot (replaces all candles).
    pub fn apply_snapshot(&mut self, candles: Vec<Candle>) {
        self.candles = candles;
    }

    /// Apply a live candle (updates the forming bar or appends a new one).
    ///
    /// A candle older than the last bar would reorder the series and is
    /// ignored.
    pub fn apply_update(&mut self, candle: Candle) {
        if let Some(last) = self.candles.last_mut() {
            if last.time == candle.time {
                *last = candle;
                return;
            }
            if candle.time < last.time {
                tracing::debug!(
                    time = candle.time,
                    last = last.time,
                    "Ignoring out-of-order candle update"
                );
                return;
            }
        }
        self.candles.push(candle);
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn clear(&mut self) {
        self.candles.clear();
    }
}
