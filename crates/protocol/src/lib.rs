//! Wiretap Protocol - wire format for the trace-capture path
//!
//! This crate defines everything a producer needs to turn a trace event into
//! bytes inside a claimed region of the shared capture buffer:
//!
//! - `EventKind` / `EventCategory` - the registry of instrumentable events
//!   and the category tag that forms the wire-level type id
//! - `CapturePolicy` - pure sizing: how many payload bytes are copied and
//!   how large the encoded record is, computed before any claim
//! - `encode` - one encoding routine per record shape
//!
//! # Design Principles
//!
//! - **No allocation**: every encoder writes into a caller-provided slice
//! - **Sizes first**: `CapturePolicy::encoded_length` is exact, so claims
//!   never need resizing
//! - **Truncation is visible**: the logical length always survives into the
//!   record header even when payload bytes are cut
//!
//! The claim/commit discipline itself lives in `wiretap-agent`; encoders here
//! are pure functions and can be tested against a plain byte slice.

mod capture;
mod error;
mod event;

pub mod encode;

pub use capture::CapturePolicy;
pub use error::ProtocolError;
pub use event::{ALL_EVENT_KINDS, EventCategory, EventKind};

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Size of the common record header: `capture_length: i32 | length: i32`
pub const LOG_HEADER_LENGTH: usize = 8;

/// Default ceiling on captured payload bytes per record
pub const DEFAULT_MAX_CAPTURE_LENGTH: usize = 4096;

/// Bytes of an encoded IPv4 address
pub const IPV4_LENGTH: usize = 4;

/// Bytes of an encoded IPv6 address
pub const IPV6_LENGTH: usize = 16;

// Test modules - only compiled during testing
#[cfg(test)]
mod capture_test;
