//! # Document
//!
//! A decoded 2D-Doc: header, tokenized message, raw signature and the exact
//! byte range the signer hashed.

use std::borrow::Cow;

use sha2::{Digest, Sha256};

use ddoc_core::CryptoError;
use ddoc_crypto::KeyChain;
use ddoc_schema::{Definitions, Doctype};

use crate::header::Header;
use crate::message::Message;

/// A decoded document.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDDoc {
    /// Parsed header.
    pub header: Header,
    /// Field list in stream order.
    pub message: Message,
    /// Base32-decoded signature bytes.
    pub signature: Vec<u8>,
    /// Header text followed by the field stream, byte for byte as
    /// received. Excludes the boundary and the signature.
    pub signed_data: Vec<u8>,
}

impl TwoDDoc {
    /// Verify the signature with the certificate the header designates.
    pub fn verify(&self, keychain: &KeyChain) -> Result<(), CryptoError> {
        let cert = keychain.lookup(&self.header.ca_id, &self.header.cert_id)?;
        cert.public_key.verify(&self.signed_data, &self.signature)
    }

    /// Signature validity. A missing key is an error, a bad signature is
    /// `Ok(false)`.
    pub fn signature_is_valid(&self, keychain: &KeyChain) -> Result<bool, CryptoError> {
        match self.verify(keychain) {
            Ok(()) => Ok(true),
            Err(CryptoError::SignatureInvalid(reason)) => {
                tracing::debug!(%reason, "signature rejected");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// SHA-256 of the signed range.
    pub fn signed_data_digest(&self) -> [u8; 32] {
        Sha256::digest(&self.signed_data).into()
    }

    /// Lowercase hex form of [`TwoDDoc::signed_data_digest`].
    pub fn signed_data_sha256(&self) -> String {
        self.signed_data_digest()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect()
    }

    /// Doctype descriptor named by the header.
    pub fn doc_type(&self, definitions: &Definitions) -> Cow<'static, Doctype> {
        definitions.doctype(self.header.perimeter_id, &self.header.doc_type_id.catalog_key())
    }
}
