//! Network frame encoding: payload plus peer socket address
//!
//! The address is a structured trailer inside the capture budget:
//! `port:i32 | addr_len:i32 | addr bytes` (4 bytes IPv4, 16 bytes IPv6).
//! It is always written whole - under truncation only raw frame bytes are
//! cut, never the address.

use std::net::{IpAddr, SocketAddr};

use super::{check_record, put_header, put_i32};
use crate::{IPV4_LENGTH, IPV6_LENGTH, LOG_HEADER_LENGTH, Result};

/// Encoded size of a peer socket address
#[inline]
pub const fn socket_address_length(addr: &SocketAddr) -> usize {
    // port + addr_len prefixes
    8 + match addr.ip() {
        IpAddr::V4(_) => IPV4_LENGTH,
        IpAddr::V6(_) => IPV6_LENGTH,
    }
}

/// Encode a network frame with its peer address
///
/// The logical `length` is the frame length plus the encoded address
/// length. The address is written whole or not at all: a `capture_length`
/// too small to hold it is rejected. Returns total bytes written.
pub fn encode_frame(
    dst: &mut [u8],
    capture_length: usize,
    length: usize,
    src: &[u8],
    peer: &SocketAddr,
) -> Result<usize> {
    check_record(dst, capture_length, length, socket_address_length(peer))?;

    let mut at = put_header(dst, capture_length, length);
    at += put_socket_address(dst, at, peer);

    let budget = capture_length.saturating_sub(socket_address_length(peer));
    let copied = budget.min(src.len());
    dst[at..at + copied].copy_from_slice(&src[..copied]);

    Ok(LOG_HEADER_LENGTH + capture_length)
}

/// Write a socket address at `at`, returning bytes written
fn put_socket_address(dst: &mut [u8], at: usize, addr: &SocketAddr) -> usize {
    put_i32(dst, at, addr.port() as i32);
    match addr.ip() {
        IpAddr::V4(ip) => {
            put_i32(dst, at + 4, IPV4_LENGTH as i32);
            dst[at + 8..at + 8 + IPV4_LENGTH].copy_from_slice(&ip.octets());
            8 + IPV4_LENGTH
        }
        IpAddr::V6(ip) => {
            put_i32(dst, at + 4, IPV6_LENGTH as i32);
            dst[at + 8..at + 8 + IPV6_LENGTH].copy_from_slice(&ip.octets());
            8 + IPV6_LENGTH
        }
    }
}
