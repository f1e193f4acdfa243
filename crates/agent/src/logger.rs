//! Event logger - orchestration of the capture path
//!
//! Every operation follows the same shared algorithm:
//!
//! 1. Filter check; a disabled kind returns before any sizing work
//! 2. Compute the logical length for the shape
//! 3. Size the capture and the exact claim via [`CapturePolicy`]
//! 4. `try_claim`; a refusal is a silent, counted drop - no retry, no error
//! 5. Encode into the claimed region behind a [`CommitGuard`], which commits
//!    on every exit path including an encoder fault
//!
//! Nothing here blocks, allocates, or surfaces errors to the caller: the
//! only observable outcomes are "recorded", "filtered" and "dropped".

use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;

use wiretap_protocol::encode::{
    encode_buffer, encode_frame, encode_image_removal, encode_publication_removal,
    encode_string, encode_subscription_removal, socket_address_length,
};
use wiretap_protocol::{CapturePolicy, EventKind, ProtocolError};

use crate::filter::EventFilter;
use crate::metrics::CaptureMetrics;
use crate::sink::{CommitGuard, RecordSink};

/// Non-blocking event logger over an injected [`RecordSink`]
pub struct EventLogger<S> {
    sink: S,
    filter: Arc<EventFilter>,
    policy: CapturePolicy,
    metrics: Arc<CaptureMetrics>,
}

impl<S: RecordSink> EventLogger<S> {
    /// Create a logger over a sink with the given filter and capture policy
    ///
    /// The policy's ceiling is raised to [`MIN_CAPTURE_LENGTH`] if it is
    /// below it: structured trailers must always fit inside the capture
    /// budget, so a smaller ceiling can never be honored.
    ///
    /// [`MIN_CAPTURE_LENGTH`]: crate::MIN_CAPTURE_LENGTH
    pub fn new(sink: S, filter: Arc<EventFilter>, policy: CapturePolicy) -> Self {
        let policy =
            CapturePolicy::new(policy.max_capture_length().max(crate::MIN_CAPTURE_LENGTH));
        Self {
            sink,
            filter,
            policy,
            metrics: Arc::new(CaptureMetrics::new()),
        }
    }

    /// The filter gating this logger
    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    /// The underlying sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Handle for reading capture metrics externally
    pub fn metrics(&self) -> Arc<CaptureMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Generic raw capture of `src`
    pub fn log(&self, kind: EventKind, src: &[u8]) {
        if !self.filter.enabled(kind) {
            self.metrics.record_filtered();
            return;
        }

        let length = src.len();
        self.claim_and_write(kind, length, |capture_length, dst| {
            if let Err(err) = encode_buffer(dst, capture_length, length, src) {
                self.note_encode_fault(err);
            }
        });
    }

    /// Capture an inbound network frame plus the peer socket address
    pub fn log_frame_in(&self, src: &[u8], peer: &SocketAddr) {
        self.log_frame(EventKind::FrameIn, src, peer);
    }

    /// Capture an outbound frame from the buffer's current read position
    pub fn log_frame_out(&self, src: &Bytes, peer: &SocketAddr) {
        self.log_frame(EventKind::FrameOut, src, peer);
    }

    fn log_frame(&self, kind: EventKind, src: &[u8], peer: &SocketAddr) {
        if !self.filter.enabled(kind) {
            self.metrics.record_filtered();
            return;
        }

        let length = src.len() + socket_address_length(peer);
        self.claim_and_write(kind, length, |capture_length, dst| {
            if let Err(err) = encode_frame(dst, capture_length, length, src, peer) {
                self.note_encode_fault(err);
            }
        });
    }

    /// Record a publication teardown
    pub fn log_publication_removal(&self, uri: &str, session_id: i32, stream_id: i32) {
        let kind = EventKind::RemovePublicationCleanup;
        if !self.filter.enabled(kind) {
            self.metrics.record_filtered();
            return;
        }

        let length = 8 + 4 + uri.len();
        self.claim_and_write(kind, length, |capture_length, dst| {
            if let Err(err) = encode_publication_removal(
                dst,
                capture_length,
                length,
                uri,
                session_id,
                stream_id,
            ) {
                self.note_encode_fault(err);
            }
        });
    }

    /// Record a subscription teardown
    pub fn log_subscription_removal(&self, uri: &str, stream_id: i32, id: i64) {
        let kind = EventKind::RemoveSubscriptionCleanup;
        if !self.filter.enabled(kind) {
            self.metrics.record_filtered();
            return;
        }

        let length = 4 + 8 + 4 + uri.len();
        self.claim_and_write(kind, length, |capture_length, dst| {
            if let Err(err) =
                encode_subscription_removal(dst, capture_length, length, uri, stream_id, id)
            {
                self.note_encode_fault(err);
            }
        });
    }

    /// Record an image teardown
    pub fn log_image_removal(&self, uri: &str, session_id: i32, stream_id: i32, id: i64) {
        let kind = EventKind::RemoveImageCleanup;
        if !self.filter.enabled(kind) {
            self.metrics.record_filtered();
            return;
        }

        let length = 8 + 8 + 4 + uri.len();
        self.claim_and_write(kind, length, |capture_length, dst| {
            if let Err(err) = encode_image_removal(
                dst,
                capture_length,
                length,
                uri,
                session_id,
                stream_id,
                id,
            ) {
                self.note_encode_fault(err);
            }
        });
    }

    /// Record a length-prefixed string event
    pub fn log_string(&self, kind: EventKind, value: &str) {
        if !self.filter.enabled(kind) {
            self.metrics.record_filtered();
            return;
        }

        let length = 4 + value.len();
        self.claim_and_write(kind, length, |capture_length, dst| {
            if let Err(err) = encode_string(dst, capture_length, length, value) {
                self.note_encode_fault(err);
            }
        });
    }

    /// Claim, encode, commit - the shared tail of every operation
    ///
    /// The commit guard finalizes the claim on every exit path from `write`,
    /// including a panic; committing a malformed record is preferred over
    /// leaking the slot.
    pub(crate) fn claim_and_write<F>(&self, kind: EventKind, length: usize, write: F)
    where
        F: FnOnce(usize, &mut [u8]),
    {
        let capture_length = self.policy.capture_length(length);
        let encoded_length = self.policy.encoded_length(capture_length);

        let Some(claim) = self.sink.try_claim(kind.type_id(), encoded_length) else {
            self.metrics.record_dropped();
            return;
        };

        let mut guard = CommitGuard::new(&self.sink, claim);
        write(capture_length, guard.region_mut());
        drop(guard);

        self.metrics
            .record_committed(capture_length as u64, (length - capture_length) as u64);
    }

    /// Claims are sized exactly and the policy floor keeps trailers inside
    /// the capture budget, so a rejected encode means the record that was
    /// just committed is malformed. Surface it rather than losing it.
    #[cold]
    fn note_encode_fault(&self, err: ProtocolError) {
        debug_assert!(false, "exactly sized claim rejected by encoder: {err}");
        tracing::error!(error = %err, "record encoding failed inside a committed claim");
    }
}
