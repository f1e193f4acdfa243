//! Tests for the capture policy

use crate::{CapturePolicy, DEFAULT_MAX_CAPTURE_LENGTH, LOG_HEADER_LENGTH};

// =============================================================================
// capture_length tests
// =============================================================================

#[test]
fn test_capture_length_identity_below_cap() {
    let policy = CapturePolicy::new(64);
    for length in [0, 1, 17, 63, 64] {
        assert_eq!(policy.capture_length(length), length);
    }
}

#[test]
fn test_capture_length_clamped_above_cap() {
    let policy = CapturePolicy::new(64);
    assert_eq!(policy.capture_length(65), 64);
    assert_eq!(policy.capture_length(1 << 20), 64);
}

#[test]
fn test_capture_length_never_exceeds_min_of_length_and_cap() {
    let policy = CapturePolicy::new(128);
    for length in 0..512 {
        let capture = policy.capture_length(length);
        assert!(capture <= length);
        assert!(capture <= policy.max_capture_length());
    }
}

#[test]
fn test_default_policy_uses_default_cap() {
    let policy = CapturePolicy::default();
    assert_eq!(policy.max_capture_length(), DEFAULT_MAX_CAPTURE_LENGTH);
}

// =============================================================================
// encoded_length tests
// =============================================================================

#[test]
fn test_encoded_length_adds_header() {
    let policy = CapturePolicy::new(64);
    assert_eq!(policy.encoded_length(0), LOG_HEADER_LENGTH);
    assert_eq!(policy.encoded_length(40), LOG_HEADER_LENGTH + 40);
}

#[test]
fn test_encoded_length_of_clamped_capture() {
    let policy = CapturePolicy::new(16);
    let capture = policy.capture_length(40);
    assert_eq!(policy.encoded_length(capture), LOG_HEADER_LENGTH + 16);
}
