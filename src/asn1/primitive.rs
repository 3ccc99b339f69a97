use num_bigint::BigInt;

use super::integer::encode_unsigned;
use super::tag;
use crate::error::Result;

/// Encodes a definite length per DER.
///
/// Lengths up to 127 use the short form (a single byte). Longer lengths use
/// the long form: `0x80 | k` followed by the `k` minimal big-endian bytes of
/// the length.
pub fn encode_length(n: usize) -> Vec<u8> {
    if n <= 0x7F {
        return vec![n as u8];
    }
    let be = n.to_be_bytes();
    let first = be.iter().position(|b| *b != 0).unwrap_or(be.len() - 1);
    let significant = &be[first..];

    let mut out = Vec::with_capacity(1 + significant.len());
    out.push(0x80 | significant.len() as u8);
    out.extend_from_slice(significant);
    out
}

/// Encodes a single TLV node: `tag || length || value`.
pub fn node(tag: u8, value: &[u8]) -> Vec<u8> {
    let length = encode_length(value.len());
    let mut out = Vec::with_capacity(1 + length.len() + value.len());
    out.push(tag);
    out.extend_from_slice(&length);
    out.extend_from_slice(value);
    out
}

/// Encodes a non-negative INTEGER.
///
/// A `0x00` byte is prepended when the magnitude's first byte has its high bit
/// set, so the value cannot be read as negative in two's complement.
///
/// # Errors
/// Returns [`KeyDerError::InvalidInput`](crate::error::KeyDerError::InvalidInput)
/// if `magnitude` is negative.
pub fn integer(magnitude: &BigInt) -> Result<Vec<u8>> {
    let raw = encode_unsigned(magnitude)?;
    if raw[0] & 0x80 != 0 {
        let mut padded = Vec::with_capacity(raw.len() + 1);
        padded.push(0x00);
        padded.extend_from_slice(&raw);
        Ok(node(tag::INTEGER, &padded))
    } else {
        Ok(node(tag::INTEGER, &raw))
    }
}
