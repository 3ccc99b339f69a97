use bon::Builder;
use num_bigint::BigInt;

use crate::asn1::{
    bit_string, context_tag, encode_unsigned, integer, null, octet_string, oid_from_bytes,
    sequence,
};
use crate::curve::Curve;
use crate::error::{KeyDerError, Result};

/// PKCS#1 `RSAPrivateKey` version for the two-prime form.
const RSA_PRIVATE_KEY_VERSION: u8 = 0;
/// SEC1 `ECPrivateKey` version (ecPrivkeyVer1).
const EC_PRIVATE_KEY_VERSION: u8 = 1;
/// Leading octet of an uncompressed SEC1 point.
const UNCOMPRESSED_POINT_TAG: u8 = 0x04;
/// Coordinate width of P-521 points from producers that pad to 64 bytes
/// instead of 66. Accepted for P-521 alongside the full width.
const P521_SHORT_COORDINATE_LEN: usize = 64;

/// How the EC private scalar is written into its OCTET STRING.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalarEncoding {
    /// Minimal big-endian bytes of the scalar, with no padding.
    #[default]
    Minimal,
    /// Left-padded with zeros to the curve's coordinate length (RFC 5915).
    CurveWidth,
}

/// RSA public key components.
///
/// # Fields
/// * `modulus` - The RSA modulus `n`.
/// * `exponent` - The public exponent `e`.
#[derive(Debug, Clone, Builder)]
#[builder(on(BigInt, into))]
pub struct RsaPublicComponents {
    pub modulus: BigInt,
    pub exponent: BigInt,
}

impl RsaPublicComponents {
    /// Encodes the bare PKCS#1 `RSAPublicKey` SEQUENCE.
    pub fn to_pkcs1_der(&self) -> Result<Vec<u8>> {
        Ok(sequence(&[integer(&self.modulus)?, integer(&self.exponent)?]))
    }

    /// Encodes a `SubjectPublicKeyInfo` carrying the PKCS#1 key under
    /// `rsaEncryption` with NULL parameters.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        let algorithm = sequence(&[
            oid_from_bytes(&const_oid::db::rfc5912::RSA_ENCRYPTION),
            null(),
        ]);
        let der = sequence(&[algorithm, bit_string(&self.to_pkcs1_der()?, 0)?]);
        tracing::trace!(len = der.len(), "encoded RSA SubjectPublicKeyInfo");
        Ok(der)
    }
}

/// Two-prime RSA private key components, in PKCS#1 field order.
#[derive(Debug, Clone, Builder)]
#[builder(on(BigInt, into))]
pub struct RsaPrivateComponents {
    pub n: BigInt,
    pub e: BigInt,
    pub d: BigInt,
    pub p: BigInt,
    pub q: BigInt,
    pub dp: BigInt,
    pub dq: BigInt,
    pub qi: BigInt,
}

impl RsaPrivateComponents {
    /// Encodes the PKCS#1 `RSAPrivateKey` SEQUENCE (version 0).
    pub fn to_der(&self) -> Result<Vec<u8>> {
        let fields = [
            &BigInt::from(RSA_PRIVATE_KEY_VERSION),
            &self.n,
            &self.e,
            &self.d,
            &self.p,
            &self.q,
            &self.dp,
            &self.dq,
            &self.qi,
        ]
        .into_iter()
        .map(integer)
        .collect::<Result<Vec<_>>>()?;

        let der = sequence(fields.as_slice());
        tracing::trace!(len = der.len(), "encoded RSA private key");
        Ok(der)
    }
}

/// EC private key components for a named curve.
///
/// # Fields
/// * `curve` - The named curve.
/// * `private_scalar` - The private scalar `d`.
/// * `public_point` - The uncompressed SEC1 point, `0x04 || X || Y`.
/// * `scalar_encoding` - Width of the private key OCTET STRING.
#[derive(Debug, Clone, Builder)]
#[builder(on(BigInt, into))]
pub struct EcPrivateComponents {
    pub curve: Curve,
    pub private_scalar: BigInt,
    pub public_point: Vec<u8>,
    #[builder(default)]
    pub scalar_encoding: ScalarEncoding,
}

impl EcPrivateComponents {
    /// Encodes the SEC1 `ECPrivateKey` SEQUENCE with both the `[0]` curve
    /// parameters and the `[1]` public key present.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        let coordinate_len = self.curve.coordinate_len();
        check_point_framing(self.curve, &self.public_point)?;

        let mut scalar = encode_unsigned(&self.private_scalar)?;
        if scalar.len() > coordinate_len {
            tracing::debug!(curve = %self.curve, "rejected oversized private scalar");
            return Err(KeyDerError::InvalidInput(format!(
                "private scalar of {} bytes is too wide for {}",
                scalar.len(),
                self.curve
            )));
        }
        if self.scalar_encoding == ScalarEncoding::CurveWidth {
            scalar = left_pad(&scalar, coordinate_len);
        }

        let der = sequence(&[
            integer(&BigInt::from(EC_PRIVATE_KEY_VERSION))?,
            octet_string(&scalar),
            context_tag(0, &oid_from_bytes(&self.curve.oid()))?,
            context_tag(1, &bit_string(&self.public_point, 0)?)?,
        ]);
        tracing::trace!(curve = %self.curve, len = der.len(), "encoded EC private key");
        Ok(der)
    }
}

/// Encodes an RSA public key as a DER `SubjectPublicKeyInfo`.
///
/// The inner `RSAPublicKey` holds the modulus first and the exponent second.
///
/// # Errors
/// Returns [`KeyDerError::InvalidInput`] if either value is negative.
pub fn rsa_public_key(modulus: &BigInt, exponent: &BigInt) -> Result<Vec<u8>> {
    RsaPublicComponents {
        modulus: modulus.clone(),
        exponent: exponent.clone(),
    }
    .to_der()
}

/// Encodes the bare PKCS#1 `RSAPublicKey` SEQUENCE.
pub fn rsa_public_key_pkcs1(modulus: &BigInt, exponent: &BigInt) -> Result<Vec<u8>> {
    RsaPublicComponents {
        modulus: modulus.clone(),
        exponent: exponent.clone(),
    }
    .to_pkcs1_der()
}

/// Encodes a two-prime RSA private key as a DER PKCS#1 `RSAPrivateKey`.
///
/// # Errors
/// Returns [`KeyDerError::InvalidInput`] if any component is negative.
#[allow(clippy::too_many_arguments)]
pub fn rsa_private_key(
    n: &BigInt,
    e: &BigInt,
    d: &BigInt,
    p: &BigInt,
    q: &BigInt,
    dp: &BigInt,
    dq: &BigInt,
    qi: &BigInt,
) -> Result<Vec<u8>> {
    RsaPrivateComponents {
        n: n.clone(),
        e: e.clone(),
        d: d.clone(),
        p: p.clone(),
        q: q.clone(),
        dp: dp.clone(),
        dq: dq.clone(),
        qi: qi.clone(),
    }
    .to_der()
}

/// Encodes an EC private key as a DER SEC1 `ECPrivateKey`.
///
/// The private scalar is written with [`ScalarEncoding::Minimal`]; use
/// [`EcPrivateComponents`] to pick the curve-width form instead.
///
/// # Errors
/// * [`KeyDerError::UnsupportedCurve`] if `curve_name` is not P-256, P-384 or P-521.
/// * [`KeyDerError::InvalidInput`] for a negative or oversized scalar, or a
///   public point that is not an uncompressed point for the curve.
pub fn ec_private_key(
    curve_name: &str,
    private_scalar: &BigInt,
    public_point: &[u8],
) -> Result<Vec<u8>> {
    EcPrivateComponents {
        curve: Curve::from_name(curve_name)?,
        private_scalar: private_scalar.clone(),
        public_point: public_point.to_vec(),
        scalar_encoding: ScalarEncoding::Minimal,
    }
    .to_der()
}

/// Builds the uncompressed SEC1 point `0x04 || X || Y`, each coordinate
/// left-padded with zeros to the curve's coordinate length.
pub fn uncompressed_point(curve: Curve, x: &BigInt, y: &BigInt) -> Result<Vec<u8>> {
    let coordinate_len = curve.coordinate_len();
    let mut point = Vec::with_capacity(1 + 2 * coordinate_len);
    point.push(UNCOMPRESSED_POINT_TAG);
    for coordinate in [x, y] {
        let raw = encode_unsigned(coordinate)?;
        if raw.len() > coordinate_len {
            return Err(KeyDerError::InvalidInput(format!(
                "coordinate of {} bytes is too wide for {curve}",
                raw.len()
            )));
        }
        point.extend_from_slice(&left_pad(&raw, coordinate_len));
    }
    Ok(point)
}

/// Whether `len` is an accepted per-coordinate width for `curve`.
fn accepts_coordinate_len(curve: Curve, len: usize) -> bool {
    len == curve.coordinate_len() || (curve == Curve::P521 && len == P521_SHORT_COORDINATE_LEN)
}

fn check_point_framing(curve: Curve, point: &[u8]) -> Result<()> {
    let invalid = |reason: &str| {
        tracing::debug!(curve = %curve, reason, "rejected public point");
        Err(KeyDerError::InvalidInput(format!(
            "public point is not an uncompressed {curve} point: {reason}"
        )))
    };
    match point.split_first() {
        None => invalid("empty"),
        Some((tag, _)) if *tag != UNCOMPRESSED_POINT_TAG => invalid("missing 0x04 prefix"),
        Some((_, coordinates)) if coordinates.is_empty() || coordinates.len() % 2 != 0 => {
            invalid("coordinates are not of equal length")
        }
        Some((_, coordinates)) if !accepts_coordinate_len(curve, coordinates.len() / 2) => {
            invalid("coordinates do not match the curve width")
        }
        Some(_) => Ok(()),
    }
}

fn left_pad(bytes: &[u8], width: usize) -> Vec<u8> {
    let mut padded = vec![0u8; width.saturating_sub(bytes.len())];
    padded.extend_from_slice(bytes);
    padded
}
