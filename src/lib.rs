//! # KeyDer - DER Encoding for RSA and EC Key Material
//!
//! KeyDer turns already-extracted key components (modulus, exponents, primes,
//! private scalars and curve points) into the exact DER byte sequences that
//! PEM writers, X.509/PKCS libraries and TLS stacks expect.
//!
//! ## Supported Structures
//!
//! - **RSA public key**: `SubjectPublicKeyInfo` wrapping a PKCS#1 `RSAPublicKey`
//! - **RSA private key**: PKCS#1 `RSAPrivateKey` (two-prime form)
//! - **EC private key**: SEC1 `ECPrivateKey` on P-256, P-384 and P-521
//!
//! ## Quick Start
//!
//! ```rust
//! use keyder::{ec_private_key, rsa_public_key, uncompressed_point, Curve};
//! use num_bigint::BigInt;
//!
//! # fn main() -> Result<(), keyder::error::KeyDerError> {
//! let spki = rsa_public_key(&BigInt::from(1), &BigInt::from(2))?;
//! assert_eq!(spki[0], 0x30);
//!
//! let point = uncompressed_point(Curve::P256, &BigInt::from(2), &BigInt::from(3))?;
//! let ec_key = ec_private_key("P-256", &BigInt::from(0xA0), &point)?;
//! println!("{}", keyder::pem_utils::der_to_pem(&ec_key, keyder::pem_utils::EC_PRIVATE_KEY));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use keyder::{ec_private_key, error::KeyDerError};
//! use num_bigint::BigInt;
//!
//! match ec_private_key("secp256k1", &BigInt::from(1), &[0x04, 0x01, 0x02]) {
//!     Err(KeyDerError::UnsupportedCurve(name)) => println!("no table entry for {}", name),
//!     Err(e) => println!("Other error: {}", e),
//!     Ok(_) => unreachable!(),
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`asn1`]: integer, TLV and composite node encoders
//! - [`curve`]: the named-curve table
//! - [`key`]: key structure assembly
//! - [`pem_utils`]: PEM wrapping of the DER output
//! - [`error`]: error types

pub mod asn1;
pub mod curve;
pub mod error;
pub mod key;
pub mod pem_utils;

pub use curve::{Curve, CurveInfo, curve_info};
pub use key::{
    EcPrivateComponents, RsaPrivateComponents, RsaPublicComponents, ScalarEncoding,
    ec_private_key, rsa_private_key, rsa_public_key, rsa_public_key_pkcs1, uncompressed_point,
};
