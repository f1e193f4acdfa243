//! Resource-teardown encoders: publication, subscription and image removal
//!
//! Each record carries one or more integer identifiers followed by the
//! channel URI as a trailing string. Identifiers are fixed fields and are
//! never truncated; only URI bytes are cut when the capture budget runs out.

use super::{check_record, put_header, put_i32, put_i64, put_trailing_string};
use crate::Result;

/// Encode a publication removal: `session_id:i32 | stream_id:i32 | uri`
pub fn encode_publication_removal(
    dst: &mut [u8],
    capture_length: usize,
    length: usize,
    uri: &str,
    session_id: i32,
    stream_id: i32,
) -> Result<usize> {
    // Identifiers plus the uri length prefix must fit uncut
    check_record(dst, capture_length, length, 8 + 4)?;

    let mut at = put_header(dst, capture_length, length);
    put_i32(dst, at, session_id);
    put_i32(dst, at + 4, stream_id);
    at += 8;

    let written = put_trailing_string(dst, at, capture_length.saturating_sub(8), uri);
    Ok(at + written)
}

/// Encode a subscription removal: `stream_id:i32 | id:i64 | uri`
pub fn encode_subscription_removal(
    dst: &mut [u8],
    capture_length: usize,
    length: usize,
    uri: &str,
    stream_id: i32,
    id: i64,
) -> Result<usize> {
    check_record(dst, capture_length, length, 12 + 4)?;

    let mut at = put_header(dst, capture_length, length);
    put_i32(dst, at, stream_id);
    put_i64(dst, at + 4, id);
    at += 12;

    let written = put_trailing_string(dst, at, capture_length.saturating_sub(12), uri);
    Ok(at + written)
}

/// Encode an image removal: `session_id:i32 | stream_id:i32 | id:i64 | uri`
pub fn encode_image_removal(
    dst: &mut [u8],
    capture_length: usize,
    length: usize,
    uri: &str,
    session_id: i32,
    stream_id: i32,
    id: i64,
) -> Result<usize> {
    check_record(dst, capture_length, length, 16 + 4)?;

    let mut at = put_header(dst, capture_length, length);
    put_i32(dst, at, session_id);
    put_i32(dst, at + 4, stream_id);
    put_i64(dst, at + 8, id);
    at += 16;

    let written = put_trailing_string(dst, at, capture_length.saturating_sub(16), uri);
    Ok(at + written)
}
