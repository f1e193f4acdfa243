//! In-process record sink
//!
//! A deterministic, bounded implementation of the [`RecordSink`] contract
//! for tests and single-process embedding. Claims are carved out of one
//! byte arena with an atomic cursor, so any number of producer threads get
//! disjoint regions without locks; a claim that does not fit is refused and
//! counted, never waited on.
//!
//! This is intentionally not a ring: there is no consumer-side sequencing
//! here, just the producer contract plus a readback API for draining once
//! producers have quiesced.

use std::cell::UnsafeCell;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use super::{Claim, RecordSink};

/// Per-record framing prefix: `type_id: i32 | length: i32`
const FRAME_HEADER_LENGTH: usize = 8;

/// Claims are rounded up so every frame starts 8-byte aligned
const ALIGNMENT: usize = 8;

/// Bounded in-process sink with lock-free multi-producer claims
pub struct MemorySink {
    storage: Box<[UnsafeCell<u8>]>,
    cursor: AtomicUsize,
    claims: AtomicU64,
    commits: AtomicU64,
    refusals: AtomicU64,
}

// SAFETY: concurrent access to `storage` is confined to disjoint ranges -
// every range is reserved exactly once by the cursor's fetch_update before
// anyone writes into it.
unsafe impl Sync for MemorySink {}

impl MemorySink {
    /// Create a sink with a fixed byte capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            storage: (0..capacity).map(|_| UnsafeCell::new(0)).collect(),
            cursor: AtomicUsize::new(0),
            claims: AtomicU64::new(0),
            commits: AtomicU64::new(0),
            refusals: AtomicU64::new(0),
        }
    }

    /// Total byte capacity
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Total claim attempts, successful or refused
    pub fn claims(&self) -> u64 {
        self.claims.load(Ordering::Relaxed)
    }

    /// Commits issued against this sink
    pub fn commits(&self) -> u64 {
        self.commits.load(Ordering::Relaxed)
    }

    /// Claims refused for lack of space
    pub fn refusals(&self) -> u64 {
        self.refusals.load(Ordering::Relaxed)
    }

    /// Bytes still available for claims
    pub fn remaining(&self) -> usize {
        self.capacity() - self.cursor.load(Ordering::Acquire).min(self.capacity())
    }

    /// Copy out every claimed record in claim order
    ///
    /// Only meaningful once producer threads have quiesced; the records of
    /// uncommitted claims are included as-is (the consumer-side contract is
    /// to detect malformed content, not to hide it).
    pub fn records(&self) -> Vec<SinkRecord> {
        let end = self.cursor.load(Ordering::Acquire).min(self.capacity());
        // SAFETY: callers quiesce producers before reading; [0, end) is no
        // longer written to once the cursor has moved past it.
        let buf =
            unsafe { std::slice::from_raw_parts(self.storage.as_ptr() as *const u8, end) };

        let mut records = Vec::new();
        let mut at = 0;
        while at + FRAME_HEADER_LENGTH <= end {
            let type_id = i32::from_le_bytes(buf[at..at + 4].try_into().unwrap());
            let length =
                i32::from_le_bytes(buf[at + 4..at + 8].try_into().unwrap()) as usize;
            let data_start = at + FRAME_HEADER_LENGTH;
            if data_start + length > end {
                break;
            }
            records.push(SinkRecord {
                type_id,
                data: buf[data_start..data_start + length].to_vec(),
            });
            at += aligned_frame_length(length);
        }
        records
    }
}

impl RecordSink for MemorySink {
    fn try_claim(&self, type_id: i32, length: usize) -> Option<Claim<'_>> {
        self.claims.fetch_add(1, Ordering::Relaxed);

        let framed = FRAME_HEADER_LENGTH + length;
        let rounded = aligned_frame_length(length);

        let base = self
            .cursor
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |cur| {
                let end = cur.checked_add(rounded)?;
                (end <= self.capacity()).then_some(end)
            })
            .ok();

        let Some(base) = base else {
            self.refusals.fetch_add(1, Ordering::Relaxed);
            return None;
        };

        // SAFETY: [base, base + rounded) was exclusively reserved above; no
        // other thread can observe a claim overlapping this range. The
        // pointer derives from the whole arena, not a single element, so its
        // provenance covers the frame.
        let frame = unsafe {
            let ptr = (self.storage.as_ptr() as *mut u8).add(base);
            std::slice::from_raw_parts_mut(ptr, framed)
        };

        frame[..4].copy_from_slice(&type_id.to_le_bytes());
        frame[4..8].copy_from_slice(&(length as i32).to_le_bytes());

        let offset = (base + FRAME_HEADER_LENGTH) as i32;
        Some(Claim::new(offset, &mut frame[FRAME_HEADER_LENGTH..]))
    }

    fn commit(&self, _offset: i32) {
        // A real transport publishes the sequence here; this sink only has
        // to account for the commit.
        self.commits.fetch_add(1, Ordering::Release);
    }
}

/// A record read back from the sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkRecord {
    /// Wire type id the record was claimed with
    pub type_id: i32,
    /// Encoded record bytes, exactly as claimed
    pub data: Vec<u8>,
}

#[inline]
const fn aligned_frame_length(length: usize) -> usize {
    (FRAME_HEADER_LENGTH + length + ALIGNMENT - 1) & !(ALIGNMENT - 1)
}
