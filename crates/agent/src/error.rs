//! Agent error types
//!
//! Errors here occur only at configuration time; the capture path itself
//! never surfaces an error to its caller.

use thiserror::Error;

use crate::MIN_CAPTURE_LENGTH;

/// Agent configuration errors
#[derive(Debug, Error)]
pub enum AgentError {
    /// Event name not present in the registry
    #[error("unknown event name: {0}")]
    UnknownEvent(String),

    /// Configured capture ceiling cannot hold a structured trailer
    #[error("max_capture_length {configured} below minimum {minimum}")]
    CaptureLengthTooSmall { configured: usize, minimum: usize },
}

impl AgentError {
    /// Create an unknown event error
    #[inline]
    pub fn unknown_event(name: impl Into<String>) -> Self {
        Self::UnknownEvent(name.into())
    }

    /// Create a capture length error for the given configured value
    #[inline]
    pub fn capture_length_too_small(configured: usize) -> Self {
        Self::CaptureLengthTooSmall {
            configured,
            minimum: MIN_CAPTURE_LENGTH,
        }
    }
}
