//! Event filter - lock-free enabled-set snapshots
//!
//! The filter gates whether any capture work happens at all, so reads must
//! be as cheap as possible: one atomic pointer load plus a bit test. The set
//! itself is immutable; reconfiguration installs a fresh snapshot via
//! `ArcSwap` and readers pick it up on their next call. No locks anywhere.

use std::sync::Arc;

use arc_swap::ArcSwap;

use wiretap_protocol::{ALL_EVENT_KINDS, EventKind};

/// Bitset words covering the event id space (ids are < 256)
const WORDS: usize = 4;

/// Immutable set of enabled event kinds
///
/// Cheap to copy, never mutated after installation into an [`EventFilter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnabledSet {
    bits: [u64; WORDS],
}

impl EnabledSet {
    /// Empty set - everything filtered
    #[inline]
    pub const fn empty() -> Self {
        Self { bits: [0; WORDS] }
    }

    /// Set containing every capturable kind
    pub fn all() -> Self {
        let mut set = Self::empty();
        for kind in ALL_EVENT_KINDS {
            set.insert(*kind);
        }
        set
    }

    /// Builder-style insert
    pub fn with(mut self, kind: EventKind) -> Self {
        self.insert(kind);
        self
    }

    /// Enable a kind
    pub fn insert(&mut self, kind: EventKind) {
        let id = kind.as_u16() as usize;
        self.bits[id / 64] |= 1 << (id % 64);
    }

    /// Disable a kind
    pub fn remove(&mut self, kind: EventKind) {
        let id = kind.as_u16() as usize;
        self.bits[id / 64] &= !(1 << (id % 64));
    }

    /// O(1) membership test
    #[inline]
    pub const fn contains(&self, kind: EventKind) -> bool {
        let id = kind.as_u16() as usize;
        self.bits[id / 64] & (1 << (id % 64)) != 0
    }

    /// Number of enabled kinds
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Check if no kinds are enabled
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|w| *w == 0)
    }
}

/// Process-wide filter with lock-free reads and snapshot-swap reconfiguration
///
/// # Thread Safety
///
/// `enabled` is safe from arbitrarily many producer threads while `install`
/// replaces the snapshot concurrently. In-flight calls keep the snapshot
/// they loaded; subsequent calls see the new one.
#[derive(Debug)]
pub struct EventFilter {
    enabled: ArcSwap<EnabledSet>,
}

impl EventFilter {
    /// Create a filter with an initial enabled set
    pub fn new(set: EnabledSet) -> Self {
        Self {
            enabled: ArcSwap::from_pointee(set),
        }
    }

    /// Filter with nothing enabled
    pub fn disabled() -> Self {
        Self::new(EnabledSet::empty())
    }

    /// Check whether a kind is enabled - the hot-path gate
    #[inline]
    pub fn enabled(&self, kind: EventKind) -> bool {
        self.enabled.load().contains(kind)
    }

    /// Install a new enabled set, replacing the current snapshot
    ///
    /// Safe concurrently with readers; never called on the hot path.
    pub fn install(&self, set: EnabledSet) {
        tracing::info!(enabled_kinds = set.len(), "capture filter installed");
        self.enabled.store(Arc::new(set));
    }

    /// Current snapshot, for diagnostics
    pub fn snapshot(&self) -> EnabledSet {
        **self.enabled.load()
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::disabled()
    }
}
