use core::fmt;
use core::str::FromStr;

use const_oid::ObjectIdentifier;

use crate::error::{KeyDerError, Result};

/// The named curves an EC private key can be encoded for.
///
/// This is a closed set; any other curve name is rejected with
/// [`KeyDerError::UnsupportedCurve`] when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// NIST P-256 (secp256r1).
    P256,
    /// NIST P-384 (secp384r1).
    P384,
    /// NIST P-521 (secp521r1).
    P521,
}

/// Static description of a named curve.
///
/// # Fields
/// * `name` - The JOSE curve name, e.g. `"P-256"`.
/// * `coordinate_len` - Byte width each of X and Y occupies after padding.
/// * `oid` - The namedCurve object identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveInfo {
    pub name: &'static str,
    pub coordinate_len: usize,
    pub oid: ObjectIdentifier,
}

const P256_INFO: CurveInfo = CurveInfo {
    name: "P-256",
    coordinate_len: 32,
    oid: const_oid::db::rfc5912::SECP_256_R_1,
};

const P384_INFO: CurveInfo = CurveInfo {
    name: "P-384",
    coordinate_len: 48,
    oid: const_oid::db::rfc5912::SECP_384_R_1,
};

const P521_INFO: CurveInfo = CurveInfo {
    name: "P-521",
    coordinate_len: 66,
    oid: const_oid::db::rfc5912::SECP_521_R_1,
};

impl Curve {
    pub const ALL: [Curve; 3] = [Curve::P256, Curve::P384, Curve::P521];

    pub const fn info(self) -> &'static CurveInfo {
        match self {
            Curve::P256 => &P256_INFO,
            Curve::P384 => &P384_INFO,
            Curve::P521 => &P521_INFO,
        }
    }

    pub const fn name(self) -> &'static str {
        self.info().name
    }

    pub const fn coordinate_len(self) -> usize {
        self.info().coordinate_len
    }

    pub const fn oid(self) -> ObjectIdentifier {
        self.info().oid
    }

    /// Looks a curve up by its JOSE name (`"P-256"`, `"P-384"`, `"P-521"`).
    ///
    /// # Errors
    /// Returns [`KeyDerError::UnsupportedCurve`] for any other name.
    pub fn from_name(name: &str) -> Result<Self> {
        Curve::ALL
            .into_iter()
            .find(|curve| curve.name() == name)
            .ok_or_else(|| {
                tracing::debug!(curve = name, "rejected unsupported curve");
                KeyDerError::UnsupportedCurve(name.to_string())
            })
    }

    /// Looks a curve up by its namedCurve OID.
    pub fn from_oid(oid: &ObjectIdentifier) -> Result<Self> {
        Curve::ALL
            .into_iter()
            .find(|curve| curve.oid() == *oid)
            .ok_or_else(|| KeyDerError::UnsupportedCurve(oid.to_string()))
    }
}

/// Returns the coordinate length and OID for a curve name.
///
/// # Errors
/// Returns [`KeyDerError::UnsupportedCurve`] for names outside the table.
pub fn curve_info(name: &str) -> Result<&'static CurveInfo> {
    Curve::from_name(name).map(Curve::info)
}

impl FromStr for Curve {
    type Err = KeyDerError;

    fn from_str(s: &str) -> Result<Self> {
        Curve::from_name(s)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
