//! Capture metrics
//!
//! Atomic counters for the capture path. All operations use relaxed
//! ordering; values are eventually consistent, not real-time. Filtered
//! events pay one counter increment and nothing else.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for an [`crate::EventLogger`]
///
/// # Thread Safety
///
/// All methods are safe to call from multiple threads concurrently.
#[derive(Debug, Default)]
pub struct CaptureMetrics {
    /// Records claimed, encoded and committed
    records_committed: AtomicU64,

    /// Records dropped because the claim was refused (backpressure)
    records_dropped: AtomicU64,

    /// Calls short-circuited by the event filter
    records_filtered: AtomicU64,

    /// Payload bytes copied into committed records
    bytes_captured: AtomicU64,

    /// Payload bytes cut by truncation (logical minus captured)
    bytes_truncated: AtomicU64,
}

impl CaptureMetrics {
    /// Create a new metrics instance with all counters at zero
    #[inline]
    pub const fn new() -> Self {
        Self {
            records_committed: AtomicU64::new(0),
            records_dropped: AtomicU64::new(0),
            records_filtered: AtomicU64::new(0),
            bytes_captured: AtomicU64::new(0),
            bytes_truncated: AtomicU64::new(0),
        }
    }

    /// Record a committed record with its captured and truncated byte counts
    #[inline]
    pub fn record_committed(&self, captured: u64, truncated: u64) {
        self.records_committed.fetch_add(1, Ordering::Relaxed);
        self.bytes_captured.fetch_add(captured, Ordering::Relaxed);
        if truncated > 0 {
            self.bytes_truncated.fetch_add(truncated, Ordering::Relaxed);
        }
    }

    /// Record a refused claim
    #[inline]
    pub fn record_dropped(&self) {
        self.records_dropped.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a call gated off by the filter
    #[inline]
    pub fn record_filtered(&self) {
        self.records_filtered.fetch_add(1, Ordering::Relaxed);
    }

    /// Consistent-enough point-in-time view of all counters
    pub fn snapshot(&self) -> CaptureSnapshot {
        CaptureSnapshot {
            records_committed: self.records_committed.load(Ordering::Relaxed),
            records_dropped: self.records_dropped.load(Ordering::Relaxed),
            records_filtered: self.records_filtered.load(Ordering::Relaxed),
            bytes_captured: self.bytes_captured.load(Ordering::Relaxed),
            bytes_truncated: self.bytes_truncated.load(Ordering::Relaxed),
        }
    }
}

/// Plain snapshot of [`CaptureMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureSnapshot {
    pub records_committed: u64,
    pub records_dropped: u64,
    pub records_filtered: u64,
    pub bytes_captured: u64,
    pub bytes_truncated: u64,
}

impl CaptureSnapshot {
    /// Fraction of non-filtered records that were dropped
    pub fn drop_rate(&self) -> f64 {
        let attempts = self.records_committed + self.records_dropped;
        if attempts == 0 {
            0.0
        } else {
            self.records_dropped as f64 / attempts as f64
        }
    }
}
