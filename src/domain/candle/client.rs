//! Candles sub-client — historical OHLC fetches.

use crate::client::ChartFeedClient;
use crate::domain::candle::Candle;
use crate::error::SdkError;
use crate::shared::{Symbol, Timeframe};

/// Sub-client for candle operations.
pub struct Candles<'a> {
    pub(crate) client: &'a ChartFeedClient,
}

impl<'a> Candles<'a> {
    /// Fetch the most recent `count` bars for a symbol.
    ///
    /// A bridge-side error payload (`{"error": ...}`) yields an empty
    /// history rather than failing the pipeline; transport-level failures
    /// still surface as `Err`.
    pub async fn history(
        &self,
        symbol: &Symbol,
        timeframe: Timeframe,
        count: u32,
    ) -> Result<Vec<Candle>, SdkError> {
        let resp = self
            .client
            .http
            .get_ohlc(symbol.as_str(), timeframe, count)
            .await?;

        if let Some(error) = resp.error {
            tracing::warn!(%symbol, %timeframe, %error, "OHLC fetch returned an error payload");
            return Ok(Vec::new());
        }

        Ok(resp.ohlc.into_iter().map(Candle::from).collect())
    }
}
