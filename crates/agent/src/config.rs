//! Capture configuration
//!
//! Declares which events are captured and how much of each payload is kept.
//! Resolution happens once at startup (or on an explicit reload); nothing
//! here runs on the hot path.

use serde::Deserialize;

use wiretap_protocol::{CapturePolicy, DEFAULT_MAX_CAPTURE_LENGTH, EventKind};

use crate::error::AgentError;
use crate::filter::EnabledSet;
use crate::{MIN_CAPTURE_LENGTH, Result};

/// Keyword enabling every capturable kind
const ALL_EVENTS: &str = "all";

/// Capture configuration
///
/// # Example
///
/// ```toml
/// [capture]
/// enabled_events = ["frame_in", "frame_out", "remove_image_cleanup"]
/// max_capture_length = 1024
/// ```
///
/// `enabled_events = ["all"]` enables every kind in the registry.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Event names to capture, or the single keyword "all"
    /// Default: empty (capture disabled)
    pub enabled_events: Vec<String>,

    /// Ceiling on captured payload bytes per record
    /// Default: 4096
    pub max_capture_length: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            enabled_events: Vec::new(),
            max_capture_length: DEFAULT_MAX_CAPTURE_LENGTH,
        }
    }
}

impl CaptureConfig {
    /// Resolve configured names into an enabled set
    ///
    /// Rejects names outside the registry so typos fail loudly at startup
    /// instead of silently capturing nothing.
    pub fn build_enabled_set(&self) -> Result<EnabledSet> {
        let mut set = EnabledSet::empty();
        for name in &self.enabled_events {
            if name == ALL_EVENTS {
                return Ok(EnabledSet::all());
            }
            let kind = EventKind::from_name(name)
                .ok_or_else(|| AgentError::unknown_event(name))?;
            set.insert(kind);
        }
        Ok(set)
    }

    /// Build the capture policy, validating the configured ceiling
    pub fn capture_policy(&self) -> Result<CapturePolicy> {
        if self.max_capture_length < MIN_CAPTURE_LENGTH {
            return Err(AgentError::capture_length_too_small(self.max_capture_length));
        }
        Ok(CapturePolicy::new(self.max_capture_length))
    }
}
