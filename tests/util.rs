#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use num_bigint::BigInt;

/// Decodes a base64 fixture, ignoring the whitespace used to wrap it.
pub fn fixture(encoded: &str) -> Vec<u8> {
    let compact: String = encoded.split_whitespace().collect();
    STANDARD.decode(compact).expect("fixture is valid base64")
}

/// `0x80FFFFFF` repeated 56 times, accumulated 32 bits at a time.
pub fn bignum() -> BigInt {
    (0..56).fold(BigInt::from(0), |acc, _| (acc << 32) | BigInt::from(0x80FF_FFFFu32))
}

/// `0x04 || X || Y` with both coordinates left-padded to `width` bytes.
pub fn raw_public_key(width: usize, x: u8, y: u8) -> Vec<u8> {
    let mut point = vec![0x04];
    point.extend(std::iter::repeat_n(0u8, width - 1));
    point.push(x);
    point.extend(std::iter::repeat_n(0u8, width - 1));
    point.push(y);
    point
}

/// Converts a value from the `rsa` crate's bigint type.
pub fn from_rsa(n: &rsa::BigUint) -> BigInt {
    BigInt::from_bytes_be(num_bigint::Sign::Plus, &n.to_bytes_be())
}
