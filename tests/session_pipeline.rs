//! End-to-end tests for the per-symbol pipeline: history seeding, live
//! ticks, indicator reconciliation, and symbol-change staleness — all
//! driven through the same event interface the real transport uses, with
//! no network involved.

use chartfeed_sdk::domain::candle::wire::{WsServerError, WsTick};
use chartfeed_sdk::prelude::*;

/// Records every sink call for assertions, backing the candle path with the
/// same app-owned container a real chart host would use.
#[derive(Debug, Default)]
struct RecordingSink {
    history: CandleHistory,
    candle_snapshots: Vec<Vec<Candle>>,
    candle_updates: Vec<Candle>,
    indicator_snapshots: Vec<Vec<IndicatorPoint>>,
    indicator_updates: Vec<IndicatorPoint>,
    connection_changes: Vec<bool>,
}

impl RenderSink for RecordingSink {
    fn set_candles(&mut self, candles: &[Candle]) {
        self.history.apply_snapshot(candles.to_vec());
        self.candle_snapshots.push(candles.to_vec());
    }

    fn update_candle(&mut self, candle: &Candle) {
        self.history.apply_update(*candle);
        self.candle_updates.push(*candle);
    }

    fn set_indicator(&mut self, points: &[IndicatorPoint]) {
        self.indicator_snapshots.push(points.to_vec());
    }

    fn update_indicator(&mut self, point: IndicatorPoint) {
        self.indicator_updates.push(point);
    }

    fn connection_changed(&mut self, connected: bool) {
        self.connection_changes.push(connected);
    }
}

fn tick_event(time: i64, close: f64) -> WsEvent {
    WsEvent::Message(FeedMessage::Tick(WsTick {
        time,
        open: None,
        high: None,
        low: None,
        close,
    }))
}

fn candle(time: i64, close: f64) -> Candle {
    Candle {
        time,
        open: close,
        high: close,
        low: close,
        close,
    }
}

fn point(time: i64, value: f64) -> IndicatorPoint {
    IndicatorPoint { time, value }
}

fn session_with(period: usize, capacity: usize) -> ChartSession<RecordingSink> {
    ChartSession::new(
        Symbol::from("EURUSD"),
        SessionConfig {
            timeframe: Timeframe::M1,
            period,
            window_capacity: capacity,
        },
        RecordingSink::default(),
    )
}

// ─── Windowed RSI over the live feed ─────────────────────────────────────────

#[test]
fn five_pushes_yield_rsi_80() {
    // capacity 5, period 4, closes [10, 11, 12, 11, 13]: the last four
    // diffs are [1, 1, -1, 2] → avg gain 1.0, avg loss 0.25 → RS 4 →
    // RSI = 100 - 100/5 = 80.
    let mut session = session_with(4, 5);
    session.handle_event(WsEvent::Connected);

    for (i, close) in [10.0, 11.0, 12.0, 11.0, 13.0].into_iter().enumerate() {
        session.handle_event(tick_event(60 * (i as i64 + 1), close));
    }

    let sink = session.into_sink();
    assert_eq!(sink.candle_updates.len(), 5);
    assert_eq!(sink.indicator_updates, vec![point(300, 80.0)]);
}

#[test]
fn indicator_absent_until_window_sufficient() {
    let mut session = session_with(4, 5);
    for (i, close) in [10.0, 11.0, 12.0, 11.0].into_iter().enumerate() {
        session.handle_event(tick_event(60 * (i as i64 + 1), close));
    }

    let sink = session.into_sink();
    assert_eq!(sink.candle_updates.len(), 4);
    assert!(sink.indicator_updates.is_empty());
}

#[test]
fn window_eviction_bounds_the_lookback() {
    // Capacity 3 with period 2: only the last three closes can influence
    // the value, however long the stream runs.
    let mut session = session_with(2, 3);
    for i in 0..50 {
        session.handle_event(tick_event(60 * (i + 1), i as f64));
    }

    let sink = session.into_sink();
    // Strictly rising closes → every computed value is the 100 clamp.
    assert!(sink.indicator_updates.iter().all(|p| p.value == 100.0));
    assert_eq!(sink.indicator_updates.len(), 48);
}

// ─── Reconciliation: baseline vs. live ───────────────────────────────────────

#[test]
fn live_point_at_baseline_tail_replaces_it() {
    let mut series = IndicatorSeries::new();
    series.set_baseline(vec![point(1, 50.0), point(2, 55.0)]);

    let outcome = series.append_live(point(2, 60.0));
    assert_eq!(outcome, AppendOutcome::ReplacedLast);
    assert_eq!(series.points(), &[point(1, 50.0), point(2, 60.0)]);
}

#[test]
fn out_of_order_live_point_is_rejected() {
    let mut series = IndicatorSeries::new();
    series.set_baseline(vec![point(1, 50.0), point(2, 55.0)]);
    series.append_live(point(2, 60.0));

    let outcome = series.append_live(point(1, 70.0));
    assert_eq!(outcome, AppendOutcome::Rejected);
    assert_eq!(series.points(), &[point(1, 50.0), point(2, 60.0)]);
}

#[test]
fn session_merges_baseline_and_live_points() {
    let mut session = session_with(1, 10);
    let symbol = Symbol::from("EURUSD");

    session.apply_rsi_history(&symbol, vec![point(60, 50.0), point(120, 55.0)]);

    // The second tick lands on the baseline's last bar: its live value
    // replaces 55.0. The third opens a new bar and appends.
    session.handle_event(tick_event(60, 1.0));
    session.handle_event(tick_event(120, 1.5));
    session.handle_event(tick_event(180, 1.0));

    let displayed: Vec<IndicatorPoint> = session.indicator().points().to_vec();
    assert_eq!(displayed.len(), 3);
    assert_eq!(displayed[0], point(60, 50.0));
    assert_eq!(displayed[1], point(120, 100.0));
    assert_eq!(displayed[2].time, 180);
    assert_eq!(displayed[2].value, 0.0);

    let sink = session.into_sink();
    assert_eq!(sink.indicator_snapshots.len(), 1);
    assert_eq!(sink.indicator_updates.len(), 2);
}

// ─── Symbol change and stale responses ───────────────────────────────────────

#[test]
fn stale_bulk_fetch_never_seeds_the_new_session() {
    // The user switches from GBPUSD to EURUSD while GBPUSD's history fetch
    // is still in flight. The old response resolves afterwards and must
    // not leak into the new session.
    let old_symbol = Symbol::from("GBPUSD");
    let new_symbol = Symbol::from("EURUSD");

    let mut session = ChartSession::new(
        new_symbol.clone(),
        SessionConfig::default(),
        RecordingSink::default(),
    );

    session.apply_ohlc_history(&old_symbol, &[candle(60, 9.9)]);
    session.apply_rsi_history(&old_symbol, vec![point(60, 99.0)]);

    session.apply_ohlc_history(&new_symbol, &[candle(60, 1.0), candle(120, 1.1)]);
    session.apply_rsi_history(&new_symbol, vec![point(120, 42.0)]);

    assert_eq!(session.indicator().points(), &[point(120, 42.0)]);

    let sink = session.into_sink();
    assert_eq!(sink.candle_snapshots.len(), 1);
    assert_eq!(sink.candle_snapshots[0].len(), 2);
    assert_eq!(sink.indicator_snapshots.len(), 1);
}

#[test]
fn new_session_starts_clean() {
    let mut session = session_with(1, 10);
    session.handle_event(tick_event(60, 1.0));
    session.handle_event(tick_event(120, 1.1));
    assert_eq!(session.indicator().len(), 1);

    // Symbol change: the old session is dropped wholesale and a fresh one
    // takes over the sink.
    let sink = session.into_sink();
    let mut next = ChartSession::new(Symbol::from("USDJPY"), SessionConfig::default(), sink);
    assert!(next.indicator().is_empty());
    assert_eq!(next.connection_state(), ConnectionState::Connecting);

    next.handle_event(tick_event(60, 100.0));
    assert!(next.indicator().is_empty());
}

// ─── Failure behavior ────────────────────────────────────────────────────────

#[test]
fn malformed_and_error_messages_are_skipped() {
    let mut session = session_with(1, 10);
    session.handle_event(WsEvent::Connected);
    session.handle_event(tick_event(60, 1.0));
    session.handle_event(WsEvent::Error("Deserialization error: missing close".into()));
    session.handle_event(WsEvent::Message(FeedMessage::ServerError(WsServerError {
        error: "symbol not selected".into(),
    })));
    session.handle_event(tick_event(120, 1.1));

    // Both well-formed ticks made it through; the garbage in between
    // neither crashed nor corrupted anything.
    assert!(session.is_connected());
    let sink = session.into_sink();
    assert_eq!(sink.candle_updates.len(), 2);
    assert_eq!(sink.indicator_updates.len(), 1);
}

#[test]
fn disconnect_preserves_state_for_resumption() {
    let mut session = session_with(2, 10);
    session.handle_event(WsEvent::Connected);
    for (i, close) in [1.0, 1.1, 1.2].into_iter().enumerate() {
        session.handle_event(tick_event(60 * (i as i64 + 1), close));
    }
    let before = session.indicator().points().to_vec();
    assert!(!before.is_empty());

    session.handle_event(WsEvent::Disconnected {
        code: None,
        reason: "transport failure".into(),
    });
    assert_eq!(session.connection_state(), ConnectionState::Disconnected);
    assert_eq!(session.indicator().points(), before.as_slice());

    // On reconnect the very next tick computes against the preserved
    // window rather than starting from scratch.
    session.handle_event(WsEvent::Connected);
    session.handle_event(tick_event(240, 1.3));
    assert_eq!(session.indicator().len(), before.len() + 1);
    assert_eq!(session.indicator().last().unwrap().value, 100.0);

    let sink = session.into_sink();
    assert_eq!(sink.connection_changes, vec![true, false, true]);
}

#[test]
fn forming_bar_updates_in_place_on_the_chart_side() {
    // Several ticks inside the same bar must leave one candle on the chart,
    // carrying the latest close.
    let mut session = session_with(2, 10);
    let symbol = Symbol::from("EURUSD");
    session.apply_ohlc_history(&symbol, &[candle(60, 1.0)]);

    session.handle_event(tick_event(120, 1.10));
    session.handle_event(tick_event(120, 1.12));
    session.handle_event(tick_event(120, 1.08));

    let sink = session.into_sink();
    assert_eq!(sink.candle_updates.len(), 3);
    assert_eq!(sink.history.len(), 2);
    assert_eq!(sink.history.last().unwrap().close, 1.08);
}

#[test]
fn candle_path_is_independent_of_indicator_path() {
    // Even with a period the stream can never satisfy, every tick still
    // reaches the chart.
    let mut session = session_with(50, 10);
    for i in 0..20 {
        session.handle_event(tick_event(60 * (i + 1), 1.0 + i as f64));
    }

    let sink = session.into_sink();
    assert_eq!(sink.candle_updates.len(), 20);
    assert!(sink.indicator_updates.is_empty());
}

// ─── Bulk series parity ──────────────────────────────────────────────────────

#[test]
fn locally_derived_series_matches_live_recompute() {
    // Seeding a session with history and replaying the same closes as
    // ticks must produce the same values `rsi_series` derives in bulk.
    let closes = [10.0, 11.0, 12.0, 11.0, 13.0, 12.0, 12.5];
    let candles: Vec<Candle> = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| candle(60 * (i as i64 + 1), c))
        .collect();
    let bulk = rsi_series(&candles, 4);

    let mut session = session_with(4, 100);
    for c in &candles {
        session.handle_event(tick_event(c.time, c.close));
    }

    let live: Vec<IndicatorPoint> = session.indicator().points().to_vec();
    assert_eq!(live, bulk);
}
