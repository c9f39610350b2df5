//! Indicators sub-client — historical RSI fetches.

use crate::client::ChartFeedClient;
use crate::domain::indicator::wire::parse_rsi_history;
use crate::domain::indicator::IndicatorPoint;
use crate::error::SdkError;
use crate::shared::{Symbol, Timeframe};

/// Sub-client for indicator operations.
pub struct Indicators<'a> {
    pub(crate) client: &'a ChartFeedClient,
}

impl<'a> Indicators<'a> {
    /// Fetch the historical RSI series for a symbol.
    ///
    /// `period` must match the period the live session computes with; the
    /// session config carries one shared value for both. A malformed
    /// payload yields an empty baseline; transport-level failures still
    /// surface as `Err`.
    pub async fn rsi_history(
        &self,
        symbol: &Symbol,
        timeframe: Timeframe,
        period: usize,
        count: u32,
    ) -> Result<Vec<IndicatorPoint>, SdkError> {
        let payload = self
            .client
            .http
            .get_rsi(symbol.as_str(), timeframe, period, count)
            .await?;

        Ok(parse_rsi_history(&payload))
    }
}
