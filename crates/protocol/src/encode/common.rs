//! Shape-agnostic encoders: raw buffer capture and generic strings

use super::{check_record, put_header, put_trailing_string};
use crate::{LOG_HEADER_LENGTH, Result};

/// Encode a plain buffer capture
///
/// Copies the first `capture_length` bytes of `src`; the header records the
/// logical `length` so truncation is visible to the consumer. Returns total
/// bytes written.
pub fn encode_buffer(
    dst: &mut [u8],
    capture_length: usize,
    length: usize,
    src: &[u8],
) -> Result<usize> {
    check_record(dst, capture_length, length, 0)?;

    let at = put_header(dst, capture_length, length);
    let copied = capture_length.min(src.len());
    dst[at..at + copied].copy_from_slice(&src[..copied]);

    Ok(LOG_HEADER_LENGTH + capture_length)
}

/// Encode a generic string event
///
/// Body is a single trailing string; the logical `length` covers the 4-byte
/// prefix plus the full string, even when the bytes are cut.
pub fn encode_string(
    dst: &mut [u8],
    capture_length: usize,
    length: usize,
    value: &str,
) -> Result<usize> {
    // The 4-byte string prefix is a structured trailer and must fit
    check_record(dst, capture_length, length, 4)?;

    let at = put_header(dst, capture_length, length);
    let written = put_trailing_string(dst, at, capture_length, value);

    Ok(at + written)
}
