//! Lifetime counters for a sliding window
//!
//! These describe what happened to a window since it was created (or since
//! the last [`WindowMetrics::reset`]). They are independent of the window
//! contents and survive `SlidingWindow::reset`.

/// Lifetime operation counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowMetrics {
    /// Events recorded
    pub advances: u64,
    /// Entries dropped from the oldest end (overflow and shrink)
    pub evictions: u64,
    /// Successful resizes
    pub resizes: u64,
    /// Resizes rejected for an invalid capacity
    pub rejected_resizes: u64,
    /// Calls to reset
    pub resets: u64,
}

impl WindowMetrics {
    /// Create new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record_advance(&mut self, evicted: bool) {
        self.advances += 1;
        if evicted {
            self.evictions += 1;
        }
    }

    pub(crate) fn record_resize(&mut self, evicted: usize) {
        self.resizes += 1;
        self.evictions += evicted as u64;
    }

    pub(crate) fn record_rejected_resize(&mut self) {
        self.rejected_resizes += 1;
    }

    pub(crate) fn record_reset(&mut self) {
        self.resets += 1;
    }

    /// Fraction of recorded events that were later evicted (0.0 - 1.0)
    pub fn eviction_rate(&self) -> f64 {
        if self.advances == 0 {
            return 0.0;
        }
        self.evictions as f64 / self.advances as f64
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a human-readable report
    pub fn report(&self) -> String {
        let mut report = String::new();

        report.push_str("=== Sliding Window Metrics ===\n\n");
        report.push_str(&format!("Events recorded: {}\n", self.advances));
        report.push_str(&format!(
            "Evictions: {} ({:.1}%)\n",
            self.evictions,
            self.eviction_rate() * 100.0
        ));
        report.push_str(&format!("Resizes: {}\n", self.resizes));
        if self.rejected_resizes > 0 {
            report.push_str(&format!("Rejected resizes: {}\n", self.rejected_resizes));
        }
        report.push_str(&format!("Resets: {}\n", self.resets));

        report
    }
}
