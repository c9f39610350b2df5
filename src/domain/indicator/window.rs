//! Bounded close-price window for incremental indicator recomputation.

use std::collections::VecDeque;

/// Default number of closes kept for the live indicator window.
pub const DEFAULT_WINDOW_CAPACITY: usize = 100;

/// A bounded FIFO buffer of closing prices.
///
/// Insertion order is time order; when the buffer is full the oldest close
/// is evicted first. Owned by one symbol's session and rebuilt wholesale
/// when the selected symbol changes.
#[derive(Debug, Clone)]
pub struct CloseWindow {
    closes: VecDeque<f64>,
    capacity: usize,
}

impl CloseWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            closes: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a close, evicting from the front until `len <= capacity`.
    pub fn push(&mut self, close: f64) {
        self.closes.push_back(close);
        while self.closes.len() > self.capacity {
            self.closes.pop_front();
        }
    }

    /// Replace the contents wholesale (e.g. from a history fetch),
    /// keeping the last `capacity` values if longer.
    pub fn initialize(&mut self, closes: &[f64]) {
        self.closes.clear();
        let skip = closes.len().saturating_sub(self.capacity);
        self.closes.extend(closes.iter().skip(skip).copied());
    }

    /// The buffered closes in push order.
    pub fn snapshot(&self) -> Vec<f64> {
        self.closes.iter().copied().collect()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn clear(&mut self) {
        self.closes.clear();
    }
}

impl Default for CloseWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_CAPACITY)
    }
}
