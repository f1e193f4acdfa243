//! Protocol error types
//!
//! Errors that can occur when encoding records directly. The capture path
//! sizes claims exactly and never sees these; they exist for callers driving
//! the encoders against their own buffers.

use thiserror::Error;

/// Errors that can occur during record encoding
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Destination slice is too small for the sized record
    #[error("destination too small: record needs {needed} bytes, got {available}")]
    DestinationTooSmall { needed: usize, available: usize },

    /// Capture length exceeds the logical record length
    #[error("invalid capture length: {capture_length} exceeds logical length {length}")]
    InvalidCaptureLength { capture_length: usize, length: usize },

    /// Capture length cannot hold the record's fixed fields and trailers
    #[error("capture length {capture_length} below the {needed} byte fixed footprint")]
    CaptureTooSmall { capture_length: usize, needed: usize },
}

impl ProtocolError {
    /// Create a destination too small error
    #[inline]
    pub fn destination_too_small(needed: usize, available: usize) -> Self {
        Self::DestinationTooSmall { needed, available }
    }

    /// Create an invalid capture length error
    #[inline]
    pub fn invalid_capture_length(capture_length: usize, length: usize) -> Self {
        Self::InvalidCaptureLength {
            capture_length,
            length,
        }
    }

    /// Create a capture too small error
    #[inline]
    pub fn capture_too_small(capture_length: usize, needed: usize) -> Self {
        Self::CaptureTooSmall {
            capture_length,
            needed,
        }
    }
}
