//! Conversions from wire types to domain types for candles.

use super::wire::{CandleRow, WsTick};
use super::Candle;

impl From<CandleRow> for Candle {
    fn from(r: CandleRow) -> Self {
        Self {
            time: r.time,
            open: r.open,
            high: r.high,
            low: r.low,
            close: r.close,
        }
    }
}

impl From<WsTick> for Candle {
    fn from(t: WsTick) -> Self {
        Self {
            time: t.time,
            open: t.open.unwrap_or(t.close),
            high: t.high.unwrap_or(t.close),
            low: t.low.unwrap_or(t.close),
            close: t.close,
        }
    }
}
