//! Wire parsing for the historical indicator fetch.
//!
//! The `/rsi` endpoint's shape is not guaranteed: current bridges answer
//! `{"rsi": [...]}`, older ones a bare array, and error paths an arbitrary
//! object. Anything unparseable is "no baseline", never a hard failure.

use super::IndicatorPoint;
use serde_json::Value;

/// Parse a historical RSI payload into an ordered point list.
///
/// Accepts a bare JSON array of `{time, value}` objects or an `{"rsi":
/// [...]}` envelope. A malformed payload (wrong shape, or any element
/// missing `time`/`value`) yields an empty baseline.
pub fn parse_rsi_history(payload: &Value) -> Vec<IndicatorPoint> {
    let array = match payload {
        Value::Array(_) => payload,
        Value::Object(map) => match map.get("rsi") {
            Some(inner @ Value::Array(_)) => inner,
            _ => {
                tracing::warn!("RSI history payload is not an array; treating as no baseline");
                return Vec::new();
            }
        },
        _ => {
            tracing::warn!("RSI history payload is not an array; treating as no baseline");
            return Vec::new();
        }
    };

    match serde_json::from_value::<Vec<IndicatorPoint>>(array.clone()) {
        Ok(points) => points,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed RSI history element; treating as no baseline");
            Vec::new()
        }
    }
}
