//! Per-symbol chart session — the live OHLC + indicator pipeline.
//!
//! A [`ChartSession`] owns everything tied to one symbol selection: the
//! bounded close window, the reconciled indicator series, and the
//! connection state. It consumes [`WsEvent`]s (from the real transport or a
//! fake sequence in tests) and pushes candle/indicator updates into an
//! injected [`RenderSink`]. Selecting a new symbol means building a new
//! session; nothing is reused across symbols, so a late callback for the
//! old symbol can never leak into the new one.

use crate::domain::candle::wire::FeedMessage;
use crate::domain::candle::Candle;
use crate::domain::indicator::{
    rsi, CloseWindow, IndicatorPoint, IndicatorSeries, DEFAULT_RSI_PERIOD,
    DEFAULT_WINDOW_CAPACITY,
};
use crate::shared::{Symbol, Timeframe};
use crate::ws::WsEvent;

// ─── RenderSink ──────────────────────────────────────────────────────────────

/// The display collaborator, push model.
///
/// `set_*` replaces a whole series (history load); `update_*` upserts one
/// point by time (live tick). Implementations typically forward into the
/// chart surface or into app-owned state such as
/// [`CandleHistory`](crate::domain::candle::CandleHistory).
pub trait RenderSink {
    fn set_candles(&mut self, candles: &[Candle]);
    fn update_candle(&mut self, candle: &Candle);
    fn set_indicator(&mut self, points: &[IndicatorPoint]);
    fn update_indicator(&mut self, point: IndicatorPoint);
    fn connection_changed(&mut self, connected: bool);
}

// ─── ConnectionState ─────────────────────────────────────────────────────────

/// Lifecycle of one symbol's feed connection, as seen by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

// ─── SessionConfig ───────────────────────────────────────────────────────────

/// Per-session configuration.
///
/// `period` is the single shared RSI period: the bulk history fetch and the
/// live recompute must both use this value, so the host passes the same
/// config to both paths.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub timeframe: Timeframe,
    pub period: usize,
    pub window_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeframe: Timeframe::default(),
            period: DEFAULT_RSI_PERIOD,
            window_capacity: DEFAULT_WINDOW_CAPACITY,
        }
    }
}

// ─── ChartSession ────────────────────────────────────────────────────────────

/// Live pipeline state for one symbol + timeframe.
///
/// Single-threaded and event-driven: every mutation happens inside one of
/// the `apply_*`/`handle_event` reactions, in arrival order.
pub struct ChartSession<S: RenderSink> {
    symbol: Symbol,
    config: SessionConfig,
    window: CloseWindow,
    series: IndicatorSeries,
    state: ConnectionState,
    sink: S,
}

impl<S: RenderSink> ChartSession<S> {
    /// Build the session for a freshly selected symbol.
    ///
    /// Starts in `Connecting`: selection immediately triggers a connection
    /// attempt for the new target.
    pub fn new(symbol: Symbol, config: SessionConfig, sink: S) -> Self {
        Self {
            symbol,
            config,
            window: CloseWindow::new(config.window_capacity),
            series: IndicatorSeries::new(),
            state: ConnectionState::Connecting,
            sink,
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    /// The reconciled indicator series as currently displayed.
    pub fn indicator(&self) -> &IndicatorSeries {
        &self.series
    }

    /// Consume the session and return the sink (e.g. to rewire it into the
    /// next symbol's session).
    pub fn into_sink(self) -> S {
        self.sink
    }

    // ── Bulk seeding ─────────────────────────────────────────────────────

    /// Seed the chart and the close window from a historical OHLC fetch.
    ///
    /// `symbol` is the symbol the response was fetched for; a response that
    /// resolves after the selection moved on is stale and discarded.
    pub fn apply_ohlc_history(&mut self, symbol: &Symbol, candles: &[Candle]) {
        if symbol != &self.symbol {
            tracing::debug!(stale = %symbol, current = %self.symbol, "Discarding stale OHLC history");
            return;
        }

        self.sink.set_candles(candles);

        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        self.window.initialize(&closes);
        tracing::debug!(%symbol, bars = candles.len(), "Seeded OHLC history");
    }

    /// Seed the indicator baseline from a historical RSI fetch.
    ///
    /// Same staleness rule as [`apply_ohlc_history`](Self::apply_ohlc_history).
    /// A malformed payload arrives here as an empty vec (the wire layer
    /// already degraded it), which simply leaves the series empty.
    pub fn apply_rsi_history(&mut self, symbol: &Symbol, points: Vec<IndicatorPoint>) {
        if symbol != &self.symbol {
            tracing::debug!(stale = %symbol, current = %self.symbol, "Discarding stale RSI history");
            return;
        }

        self.series.set_baseline(points);
        self.sink.set_indicator(self.series.points());
        tracing::debug!(%symbol, points = self.series.len(), "Seeded RSI baseline");
    }

    // ── Live events ──────────────────────────────────────────────────────

    /// React to one transport event.
    ///
    /// Never fails: malformed or out-of-order data is logged and dropped,
    /// and a transport error only flips the connection state. On
    /// disconnect the window and series stay intact so a reconnect resumes
    /// where the stream left off.
    pub fn handle_event(&mut self, event: WsEvent) {
        match event {
            WsEvent::Connected => {
                self.state = ConnectionState::Connected;
                self.sink.connection_changed(true);
            }
            WsEvent::Disconnected { code, reason } => {
                tracing::info!(?code, %reason, symbol = %self.symbol, "Feed disconnected");
                self.state = ConnectionState::Disconnected;
                self.sink.connection_changed(false);
            }
            WsEvent::Error(error) => {
                tracing::warn!(%error, symbol = %self.symbol, "Dropping undecodable feed message");
            }
            WsEvent::Message(FeedMessage::ServerError(e)) => {
                tracing::warn!(error = %e.error, symbol = %self.symbol, "Feed reported an error");
            }
            WsEvent::Message(FeedMessage::Tick(tick)) => {
                let candle = Candle::from(tick);

                // Candle path first: the chart gets every well-formed bar
                // whether or not an indicator value can be derived yet.
                self.sink.update_candle(&candle);

                self.window.push(candle.close);

                if let Some(value) = rsi(&self.window.snapshot(), self.config.period) {
                    let point = IndicatorPoint {
                        time: candle.time,
                        value,
                    };
                    if self.series.append_live(point).accepted() {
                        self.sink.update_indicator(point);
                    } else {
                        tracing::debug!(
                            time = point.time,
                            symbol = %self.symbol,
                            "Rejected out-of-order indicator point"
                        );
                    }
                }
            }
        }
    }
}

// ─── Transport glue ──────────────────────────────────────────────────────────

/// Pump a native WS client's events into a session until the stream ends.
#[cfg(feature = "ws-native")]
pub async fn drive<S: RenderSink>(
    session: &mut ChartSession<S>,
    client: &crate::ws::native::WsClient,
) {
    use futures_util::StreamExt;

    let events = client.events();
    tokio::pin!(events);

    while let Some(event) = events.next().await {
        session.handle_event(event);
    }
}
