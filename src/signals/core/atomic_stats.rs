/*!
 * Atomic Dispatch Statistics
 * Counters updated through `&self` on the send path
 */

use super::types::DispatchStats;
use std::sync::atomic::{AtomicU64, Ordering};

/// Dispatch counters
///
/// `send` takes `&self`, so the counters are relaxed atomics rather than
/// plain integers. Nothing orders on them; they only feed [`snapshot`].
///
/// [`snapshot`]: AtomicDispatchStats::snapshot
#[derive(Debug, Default)]
pub struct AtomicDispatchStats {
    signals_registered: AtomicU64,
    receivers_registered: AtomicU64,
    sends_dispatched: AtomicU64,
    sends_unknown: AtomicU64,
    receivers_invoked: AtomicU64,
    duplicate_rejections: AtomicU64,
}

impl AtomicDispatchStats {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn inc_signals(&self) {
        self.signals_registered.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_receivers(&self) {
        self.receivers_registered.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one completed send and the receivers it reached
    ///
    /// # Performance
    /// Hot path - called on every successful send
    #[inline(always)]
    pub fn record_send(&self, invoked: usize) {
        self.sends_dispatched.fetch_add(1, Ordering::Relaxed);
        self.receivers_invoked
            .fetch_add(invoked as u64, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_unknown(&self) {
        self.sends_unknown.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_duplicates(&self) {
        self.duplicate_rejections.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of current stats
    ///
    /// # Note
    /// Values may not be perfectly consistent with each other when a shared
    /// manager is used from several threads, but each value is accurate.
    #[inline]
    pub fn snapshot(&self) -> DispatchStats {
        DispatchStats {
            signals_registered: self.signals_registered.load(Ordering::Relaxed),
            receivers_registered: self.receivers_registered.load(Ordering::Relaxed),
            sends_dispatched: self.sends_dispatched.load(Ordering::Relaxed),
            sends_unknown: self.sends_unknown.load(Ordering::Relaxed),
            receivers_invoked: self.receivers_invoked.load(Ordering::Relaxed),
            duplicate_rejections: self.duplicate_rejections.load(Ordering::Relaxed),
        }
    }
}
