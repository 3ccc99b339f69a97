use const_oid::ObjectIdentifier;

use super::primitive::node;
use super::tag;
use crate::error::{KeyDerError, Result};

/// Wraps already-encoded children in a SEQUENCE, preserving their order.
pub fn sequence<T: AsRef<[u8]>>(children: &[T]) -> Vec<u8> {
    let body: Vec<u8> = children
        .iter()
        .flat_map(|child| child.as_ref().iter().copied())
        .collect();
    node(tag::SEQUENCE, &body)
}

/// Encodes a BIT STRING whose final octet carries `unused_bits` padding bits.
///
/// Key material is always whole octets, so callers in this crate pass 0.
///
/// # Errors
/// Returns [`KeyDerError::InvalidInput`] if `unused_bits` exceeds 7, or is
/// non-zero for empty content.
pub fn bit_string(content: &[u8], unused_bits: u8) -> Result<Vec<u8>> {
    if unused_bits > 7 || (content.is_empty() && unused_bits != 0) {
        return Err(KeyDerError::InvalidInput(format!(
            "{unused_bits} unused bits is not valid for a {}-byte bit string",
            content.len()
        )));
    }
    let mut value = Vec::with_capacity(content.len() + 1);
    value.push(unused_bits);
    value.extend_from_slice(content);
    Ok(node(tag::BIT_STRING, &value))
}

/// Encodes an OCTET STRING holding `content` verbatim.
pub fn octet_string(content: &[u8]) -> Vec<u8> {
    node(tag::OCTET_STRING, content)
}

/// The fixed two-byte NULL, used as the RSA algorithm parameters.
pub fn null() -> Vec<u8> {
    vec![tag::NULL, 0x00]
}

/// Encodes an OBJECT IDENTIFIER from its arcs.
///
/// The first two arcs collapse into `40 * arcs[0] + arcs[1]`; every
/// subidentifier is written base-128 with the continuation bit (0x80) set on
/// all but its last byte.
///
/// # Errors
/// Returns [`KeyDerError::InvalidInput`] for fewer than two arcs, a first arc
/// above 2, or a second arc of 40 or more under roots 0 and 1.
pub fn object_identifier(arcs: &[u64]) -> Result<Vec<u8>> {
    let (first, second, rest) = match arcs {
        [first, second, rest @ ..] => (*first, *second, rest),
        _ => {
            return Err(KeyDerError::InvalidInput(
                "an object identifier needs at least two arcs".to_string(),
            ));
        }
    };
    if first > 2 || (first < 2 && second >= 40) {
        return Err(KeyDerError::InvalidInput(format!(
            "invalid leading arcs {first}.{second}"
        )));
    }
    let head = (40 * first).checked_add(second).ok_or_else(|| {
        KeyDerError::InvalidInput(format!("second arc {second} is out of range"))
    })?;

    let mut value = Vec::new();
    push_base128(&mut value, head);
    for arc in rest {
        push_base128(&mut value, *arc);
    }
    Ok(node(tag::OBJECT_IDENTIFIER, &value))
}

/// Encodes a `const_oid` identifier, whose bytes are already in DER content form.
pub fn oid_from_bytes(oid: &ObjectIdentifier) -> Vec<u8> {
    node(tag::OBJECT_IDENTIFIER, oid.as_bytes())
}

/// Encodes a constructed context-specific field `[number]`.
///
/// # Errors
/// Returns [`KeyDerError::InvalidInput`] if `number` does not fit the low-tag
/// form (0..=30).
pub fn context_tag(number: u8, content: &[u8]) -> Result<Vec<u8>> {
    if number > 30 {
        return Err(KeyDerError::InvalidInput(format!(
            "context tag number {number} needs the high-tag form"
        )));
    }
    Ok(node(tag::CONTEXT_CONSTRUCTED | number, content))
}

fn push_base128(out: &mut Vec<u8>, mut arc: u64) {
    let mut groups = [0u8; 10];
    let mut count = 0;
    loop {
        groups[count] = (arc & 0x7F) as u8;
        count += 1;
        arc >>= 7;
        if arc == 0 {
            break;
        }
    }
    for i in (0..count).rev() {
        let continuation = if i == 0 { 0x00 } else { 0x80 };
        out.push(groups[i] | continuation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_preserves_order() {
        let a = vec![0x02, 0x01, 0x01];
        let b = vec![0x02, 0x01, 0x02];
        assert_eq!(
            sequence(&[a.clone(), b.clone()]),
            vec![0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x02]
        );
        assert_eq!(
            sequence(&[b, a]),
            vec![0x30, 0x06, 0x02, 0x01, 0x02, 0x02, 0x01, 0x01]
        );
        assert_eq!(sequence::<Vec<u8>>(&[]), vec![0x30, 0x00]);
    }

    #[test]
    fn test_bit_string_prefix() {
        assert_eq!(
            bit_string(&[0xFF], 0).unwrap(),
            vec![0x03, 0x02, 0x00, 0xFF]
        );
        assert_eq!(bit_string(&[], 0).unwrap(), vec![0x03, 0x01, 0x00]);
        assert_eq!(
            bit_string(&[0xF0], 4).unwrap(),
            vec![0x03, 0x02, 0x04, 0xF0]
        );
        assert!(bit_string(&[0xF0], 8).is_err());
        assert!(bit_string(&[], 1).is_err());
    }

    #[test]
    fn test_octet_string_and_null() {
        assert_eq!(octet_string(&[0xA0]), vec![0x04, 0x01, 0xA0]);
        assert_eq!(null(), vec![0x05, 0x00]);
    }

    #[test]
    fn test_rsa_encryption_oid() {
        let encoded = object_identifier(&[1, 2, 840, 113549, 1, 1, 1]).unwrap();
        assert_eq!(
            encoded,
            vec![
                0x06, 0x09, 0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x01
            ]
        );
        assert_eq!(
            encoded,
            oid_from_bytes(&const_oid::db::rfc5912::RSA_ENCRYPTION)
        );
    }

    #[test]
    fn test_curve_oids_match_const_oid() {
        let cases: [(&[u64], ObjectIdentifier); 3] = [
            (
                &[1, 2, 840, 10045, 3, 1, 7],
                const_oid::db::rfc5912::SECP_256_R_1,
            ),
            (&[1, 3, 132, 0, 34], const_oid::db::rfc5912::SECP_384_R_1),
            (&[1, 3, 132, 0, 35], const_oid::db::rfc5912::SECP_521_R_1),
        ];
        for (arcs, oid) in cases {
            assert_eq!(object_identifier(arcs).unwrap(), oid_from_bytes(&oid));
        }
    }

    #[test]
    fn test_object_identifier_rejects_bad_arcs() {
        assert!(object_identifier(&[1]).is_err());
        assert!(object_identifier(&[3, 1]).is_err());
        assert!(object_identifier(&[1, 40]).is_err());
        // root 2 allows a large second arc
        assert_eq!(
            object_identifier(&[2, 100, 3]).unwrap(),
            vec![0x06, 0x03, 0x81, 0x34, 0x03]
        );
    }

    #[test]
    fn test_context_tag() {
        assert_eq!(context_tag(0, &[0x05, 0x00]).unwrap(), vec![0xA0, 0x02, 0x05, 0x00]);
        assert_eq!(context_tag(1, &[]).unwrap(), vec![0xA1, 0x00]);
        assert!(context_tag(31, &[]).is_err());
    }
}
