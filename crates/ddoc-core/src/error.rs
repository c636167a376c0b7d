//! # Error Types: Structured Error Hierarchy
//!
//! Defines the error types used throughout the 2D-Doc decoder. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Header, tokenizer and assembler failures abort the whole decode and
//!   surface as [`DdocError`]. No partial document is ever returned.
//! - Unknown field identifiers are not errors: the schema registry falls
//!   back to a synthetic definition instead.
//! - Signature problems live in [`CryptoError`] and are independent of
//!   decoding: a document may decode and still fail verification.

use thiserror::Error;

/// Top-level error type for 2D-Doc decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DdocError {
    /// Input does not start with a 2D-Doc marker at all.
    #[error("not a 2D-Doc")]
    NotADocument,

    /// Bad marker, unsupported version, invalid country id length or a
    /// truncated fixed-position header.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// A field value could not be parsed or serialized.
    #[error("malformed field {field}: {reason}")]
    MalformedField {
        /// Two-character field identifier.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// C40 data could not be packed or unpacked.
    #[error("malformed C40 data: {0}")]
    Codec(#[from] CodecError),

    /// No signature boundary could be located in the message remainder.
    #[error("invalid 2D-Doc format: missing signature separator")]
    MissingSeparator,

    /// The header announced a binary-mode document.
    #[error("binary code not supported")]
    BinaryUnsupported,
}

impl DdocError {
    /// Build a [`DdocError::MalformedField`] for the given field id.
    pub fn field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error in the C40 character packing layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The active character set has no entry for the code.
    #[error("bad encoding: code {code} has no mapping in set {set}")]
    UnmappableCode {
        /// Active set index (0-3).
        set: u8,
        /// Offending small integer code.
        code: u8,
    },

    /// The character does not appear in any of the four sets.
    #[error("cannot encode character {0:?}")]
    UnencodableChar(char),
}

/// Error in one of the 2D-Doc date/time encodings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The text is not made of the expected digits.
    #[error("invalid date digits {0:?}")]
    InvalidDigits(String),

    /// The components do not form a real calendar date or time.
    #[error("invalid calendar value {0}")]
    InvalidCalendar(String),

    /// The date cannot be represented in the target encoding.
    #[error("date {0} out of encodable range")]
    OutOfRange(String),
}

/// Error in signature verification and certificate handling.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// The keychain holds no certificate for the (authority, certificate) pair.
    #[error("key not found: {ca_id}, {cert_id}")]
    KeyNotFound {
        /// Certification authority identifier from the header.
        ca_id: String,
        /// Certificate identifier from the header.
        cert_id: String,
    },

    /// The cryptographic check failed.
    #[error("signature invalid: {0}")]
    SignatureInvalid(String),

    /// A certificate could not be decoded.
    #[error("certificate error: {0}")]
    Certificate(String),

    /// A public key could not be decoded as a P-256 point.
    #[error("public key error: {0}")]
    PublicKey(String),

    /// IO error while loading certificates.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
