//! Capture policy - pure sizing for record claims
//!
//! A claim against the shared buffer cannot be resized, so the encoded
//! length of every record is computed here, before the claim is attempted.
//! Truncation never hides the logical length: it always survives into the
//! record header so a consumer can detect and report it.

use crate::{DEFAULT_MAX_CAPTURE_LENGTH, LOG_HEADER_LENGTH};

/// Policy computing how many bytes of a record are actually copied
///
/// # Invariants
///
/// - `capture_length(len) <= min(len, max_capture_length)`
/// - `capture_length(len) == len` whenever `len <= max_capture_length`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapturePolicy {
    max_capture_length: usize,
}

impl Default for CapturePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CAPTURE_LENGTH)
    }
}

impl CapturePolicy {
    /// Create a policy with the given ceiling on captured payload bytes
    #[inline]
    pub const fn new(max_capture_length: usize) -> Self {
        Self { max_capture_length }
    }

    /// Ceiling on captured payload bytes per record
    #[inline]
    pub const fn max_capture_length(&self) -> usize {
        self.max_capture_length
    }

    /// Bytes actually copied for a record of logical `length`
    #[inline]
    pub const fn capture_length(&self, length: usize) -> usize {
        if length < self.max_capture_length {
            length
        } else {
            self.max_capture_length
        }
    }

    /// On-wire size of a record carrying `capture_length` body bytes
    ///
    /// This is the exact claim size; the buffer does not support resizing a
    /// claimed region.
    #[inline]
    pub const fn encoded_length(&self, capture_length: usize) -> usize {
        LOG_HEADER_LENGTH + capture_length
    }
}
