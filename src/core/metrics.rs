//! Logger metrics for observability
//!
//! Sink failures are never reported to the caller of `log`; these counters
//! are the only place they show up.

use std::sync::atomic::{AtomicU64, Ordering};

/// Delivery counters for a [`Logger`](crate::Logger)
///
/// # Example
///
/// ```
/// use leveled_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_call();
/// metrics.record_written();
/// metrics.record_failed();
///
/// assert_eq!(metrics.total_calls(), 1);
/// assert_eq!(metrics.writes(), 1);
/// assert_eq!(metrics.failed_writes(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Number of `log` calls, filtered or not
    total_calls: AtomicU64,

    /// Sink writes that completed
    writes: AtomicU64,

    /// Sink writes that returned an error or panicked
    failed_writes: AtomicU64,
}

impl LoggerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_call(&self) {
        self.total_calls.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_written(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_failed(&self) {
        self.failed_writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total_calls(&self) -> u64 {
        self.total_calls.load(Ordering::Relaxed)
    }

    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    /// Percentage of attempted writes that failed
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_writes() as f64;
        let attempted = failed + self.writes() as f64;
        if attempted == 0.0 {
            0.0
        } else {
            failed / attempted * 100.0
        }
    }

    pub fn reset(&self) {
        self.total_calls.store(0, Ordering::Relaxed);
        self.writes.store(0, Ordering::Relaxed);
        self.failed_writes.store(0, Ordering::Relaxed);
    }
}
