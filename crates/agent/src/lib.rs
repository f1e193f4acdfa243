//! Wiretap Agent - the producer-side capture path
//!
//! Producer threads on a transport's hot path (frame send/receive, resource
//! teardown, control requests) emit structured trace events through
//! [`EventLogger`] without ever blocking, allocating, or taking a lock. A
//! decoupled consumer drains the shared buffer later.
//!
//! # Architecture
//!
//! ```text
//! [caller] -> [EventFilter] -> [CapturePolicy] -> [RecordSink::try_claim]
//!                                                        |
//!                                            [encoder writes claimed region]
//!                                                        |
//!                                            [commit, on every exit path]
//! ```
//!
//! # Design
//!
//! - **Zero work when disabled**: the filter is an atomically swapped
//!   immutable bitset; a disabled event costs one atomic load
//! - **Failed claim = silent drop**: backpressure never reaches the caller
//! - **Commit is guaranteed**: the claim is held by a guard that commits on
//!   drop, so a faulting encoder can never wedge the buffer's accounting

mod config;
mod error;
mod filter;
mod logger;
mod metrics;
mod sink;

pub use config::CaptureConfig;
pub use error::AgentError;
pub use filter::{EnabledSet, EventFilter};
pub use logger::EventLogger;
pub use metrics::{CaptureMetrics, CaptureSnapshot};
pub use sink::mem::{MemorySink, SinkRecord};
pub use sink::{Claim, CommitGuard, RecordSink};

/// Result type for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Smallest accepted `max_capture_length`
///
/// Large enough that structured trailers (socket address, identifier block
/// plus string prefix) always fit inside the capture budget, so truncation
/// only ever cuts raw payload bytes.
pub const MIN_CAPTURE_LENGTH: usize = 64;
