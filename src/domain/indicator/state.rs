//! Indicator series state — app-owned, SDK-provided reconciliation logic.

use super::IndicatorPoint;

/// Outcome of reconciling a live point into the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The point's time was newer than the whole series; it was appended.
    Appended,
    /// The point's time matched the last point (same bar still forming);
    /// the last value was replaced in place.
    ReplacedLast,
    /// The point's time was at or before an earlier point; the series is
    /// unchanged.
    Rejected,
}

impl AppendOutcome {
    /// Whether the point is now part of the series.
    pub fn accepted(&self) -> bool {
        !matches!(self, AppendOutcome::Rejected)
    }
}

/// One reconciled indicator series for the chart: a bulk-fetched baseline
/// merged with live incrementally-computed points.
///
/// The app (or a session) owns instances of this type. Invariant after any
/// operation: times are strictly increasing with one value per time, and a
/// live value wins over a baseline value at the same timestamp.
#[derive(Debug, Clone, Default)]
pub struct IndicatorSeries {
    points: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole series with a bulk-fetched baseline.
    ///
    /// Points that violate strict time ordering relative to the previous
    /// kept point are dropped, so the ordering invariant holds even for a
    /// sloppy upstream.
    pub fn set_baseline(&mut self, points: Vec<IndicatorPoint>) {
        let total = points.len();
        self.points.clear();
        for point in points {
            match self.points.last() {
                Some(last) if point.time <= last.time => continue,
                _ => self.points.push(point),
            }
        }
        let dropped = total - self.points.len();
        if dropped > 0 {
            tracing::warn!(dropped, "Baseline contained non-increasing timestamps");
        }
    }

    /// Reconcile one live point into the series.
    ///
    /// Equal to the last time → replace (the bar is still forming); newer →
    /// append; anything else is out of order and rejected.
    pub fn append_live(&mut self, point: IndicatorPoint) -> AppendOutcome {
        match self.points.last_mut() {
            Some(last) if point.time == last.time => {
                *last = point;
                AppendOutcome::ReplacedLast
            }
            Some(last) if point.time > last.time => {
                self.points.push(point);
                AppendOutcome::Appended
            }
            Some(_) => AppendOutcome::Rejected,
            None => {
                self.points.push(point);
                AppendOutcome::Appended
            }
        }
    }

    pub fn points(&self) -> &[IndicatorPoint] {
        &self.points
    }

    pub fn last(&self) -> Option<&IndicatorPoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
