//! use keyder::error::KeyDerError;

use thiserror::Error;

/// Represents errors that can occur while assembling a DER key structure.
///
/// Every error aborts the whole encoding; no partial output is ever returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyDerError {
    /// A numeric argument was negative, or a byte-string argument violated
    /// the framing its field requires.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The curve name is not one of P-256, P-384 or P-521.
    #[error("Unsupported curve: {0}")]
    UnsupportedCurve(String),
}

pub type Result<T> = std::result::Result<T, KeyDerError>;
