//! Record encoders for the capture path
//!
//! One encoding routine per record shape. Every encoder is a pure function
//! from `(header fields, source bytes, capture_length)` to bytes written
//! into a destination slice - typically the claimed region of the shared
//! buffer, but any slice works, which is how the encoders are tested.
//!
//! # Wire Format Layout
//!
//! All integers little-endian. The wire type id travels through the claim
//! and is stored by the buffer transport, not by the encoders.
//!
//! ```text
//! capture_length:i32 | length:i32 | [kind-specific fixed fields]
//!                    | [kind-specific variable fields] | payload bytes
//! ```
//!
//! # Truncation
//!
//! When `capture_length < length` only raw payload bytes are cut; fixed
//! fields and structured trailers (socket address, string length prefix) are
//! always written whole so consumer decoding stays deterministic.

mod common;
mod frame;
mod lifecycle;

pub use common::{encode_buffer, encode_string};
pub use frame::{encode_frame, socket_address_length};
pub use lifecycle::{encode_image_removal, encode_publication_removal, encode_subscription_removal};

use crate::{LOG_HEADER_LENGTH, ProtocolError, Result};

/// Write an i32 in little-endian format at `at`
#[inline]
fn put_i32(dst: &mut [u8], at: usize, value: i32) {
    dst[at..at + 4].copy_from_slice(&value.to_le_bytes());
}

/// Write an i64 in little-endian format at `at`
#[inline]
fn put_i64(dst: &mut [u8], at: usize, value: i64) {
    dst[at..at + 8].copy_from_slice(&value.to_le_bytes());
}

/// Validate sizing shared by every encoder
///
/// `capture_length` may never exceed the logical `length`, must cover the
/// shape's `fixed_length` footprint (fixed fields and structured trailers
/// are written whole, never truncated), and the destination must hold the
/// full encoded record. Nothing is written until all three checks pass.
#[inline]
fn check_record(
    dst: &[u8],
    capture_length: usize,
    length: usize,
    fixed_length: usize,
) -> Result<()> {
    if capture_length > length {
        return Err(ProtocolError::invalid_capture_length(capture_length, length));
    }
    if capture_length < fixed_length {
        return Err(ProtocolError::capture_too_small(capture_length, fixed_length));
    }
    let needed = LOG_HEADER_LENGTH + capture_length;
    if dst.len() < needed {
        return Err(ProtocolError::destination_too_small(needed, dst.len()));
    }
    Ok(())
}

/// Write the common record header, returning the body offset
#[inline]
fn put_header(dst: &mut [u8], capture_length: usize, length: usize) -> usize {
    put_i32(dst, 0, capture_length as i32);
    put_i32(dst, 4, length as i32);
    LOG_HEADER_LENGTH
}

/// Write a length-prefixed UTF-8 string, truncated to `remaining` bytes
///
/// The prefix holds the number of bytes actually written, so a truncated
/// string still decodes cleanly; the outer `length` field is what tells the
/// consumer bytes were cut. Returns bytes written including the prefix.
#[inline]
fn put_trailing_string(dst: &mut [u8], at: usize, remaining: usize, value: &str) -> usize {
    let bytes = value.as_bytes();
    let copied = bytes.len().min(remaining.saturating_sub(4));
    put_i32(dst, at, copied as i32);
    dst[at + 4..at + 4 + copied].copy_from_slice(&bytes[..copied]);
    4 + copied
}
