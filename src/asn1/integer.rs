use num_bigint::{BigInt, Sign};

use crate::error::{KeyDerError, Result};

/// Encodes a non-negative integer as its minimal big-endian magnitude.
///
/// Zero encodes as the single byte `0x00`. No sign padding is applied here;
/// see [`integer`](crate::asn1::primitive::integer) for that.
///
/// # Errors
/// Returns [`KeyDerError::InvalidInput`] if `n` is negative.
pub fn encode_unsigned(n: &BigInt) -> Result<Vec<u8>> {
    let (sign, bytes) = n.to_bytes_be();
    match sign {
        Sign::Minus => {
            tracing::debug!("rejected negative integer");
            Err(KeyDerError::InvalidInput(
                "negative integers cannot be encoded".to_string(),
            ))
        }
        // num-bigint yields `[0]` for zero
        Sign::NoSign => Ok(vec![0]),
        Sign::Plus => Ok(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_single_byte() {
        assert_eq!(encode_unsigned(&BigInt::from(0)).unwrap(), vec![0x00]);
    }

    #[test]
    fn test_no_leading_zeros() {
        assert_eq!(encode_unsigned(&BigInt::from(1)).unwrap(), vec![0x01]);
        assert_eq!(encode_unsigned(&BigInt::from(0x80)).unwrap(), vec![0x80]);
        assert_eq!(
            encode_unsigned(&BigInt::from(0x0100)).unwrap(),
            vec![0x01, 0x00]
        );
    }

    #[test]
    fn test_wider_than_machine_word() {
        let n = BigInt::from(u128::MAX) << 64;
        let encoded = encode_unsigned(&n).unwrap();
        assert_eq!(encoded.len(), 24);
        assert!(encoded[..16].iter().all(|b| *b == 0xFF));
        assert!(encoded[16..].iter().all(|b| *b == 0x00));
    }

    #[test]
    fn test_negative_rejected() {
        let err = encode_unsigned(&BigInt::from(-1)).unwrap_err();
        assert!(matches!(err, KeyDerError::InvalidInput(_)));
    }
}
