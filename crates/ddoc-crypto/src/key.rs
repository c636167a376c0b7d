//! # ECDSA P-256 Public Keys
//!
//! 2D-Doc signatures are ECDSA over NIST P-256 with SHA-256, carried as
//! the raw 64-byte `r || s` concatenation (no DER wrapping).

use p256::ecdsa::signature::Verifier;
use p256::ecdsa::{Signature, VerifyingKey};
use x509_cert::der::asn1::ObjectIdentifier;
use x509_cert::spki::SubjectPublicKeyInfoOwned;

use ddoc_core::CryptoError;

const EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// Raw signature length: 32-byte `r` followed by 32-byte `s`.
pub const SIGNATURE_LEN: usize = 64;

/// A P-256 verification key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    key: VerifyingKey,
}

impl PublicKey {
    /// Wrap an existing verifying key.
    pub fn new(key: VerifyingKey) -> Self {
        Self { key }
    }

    /// Decode a SEC1 point (compressed or uncompressed).
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        VerifyingKey::from_sec1_bytes(bytes)
            .map(Self::new)
            .map_err(|e| CryptoError::PublicKey(e.to_string()))
    }

    /// Decode the subject public key of a certificate.
    pub fn from_spki(spki: &SubjectPublicKeyInfoOwned) -> Result<Self, CryptoError> {
        if spki.algorithm.oid != EC_PUBLIC_KEY {
            return Err(CryptoError::PublicKey(format!(
                "unsupported key algorithm {}",
                spki.algorithm.oid
            )));
        }
        Self::from_sec1_bytes(spki.subject_public_key.raw_bytes())
    }

    /// Uncompressed SEC1 encoding of the key.
    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        self.key.to_encoded_point(false).as_bytes().to_vec()
    }

    /// Check `signature` over `data`.
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
        if signature.len() != SIGNATURE_LEN {
            return Err(CryptoError::SignatureInvalid(format!(
                "expected {SIGNATURE_LEN} signature bytes, got {}",
                signature.len()
            )));
        }
        let signature = Signature::from_slice(signature)
            .map_err(|e| CryptoError::SignatureInvalid(e.to_string()))?;
        self.key
            .verify(data, &signature)
            .map_err(|_| CryptoError::SignatureInvalid("ECDSA verification failed".to_string()))
    }

    /// Boolean form of [`PublicKey::verify`].
    pub fn signature_is_valid(&self, data: &[u8], signature: &[u8]) -> bool {
        self.verify(data, signature).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use p256::ecdsa::signature::Signer;
    use p256::ecdsa::SigningKey;

    fn signing_key() -> SigningKey {
        SigningKey::from_slice(&[7u8; 32]).unwrap()
    }

    #[test]
    fn test_verify_raw_signature() {
        let sk = signing_key();
        let pk = PublicKey::new(*sk.verifying_key());
        let sig: Signature = sk.sign(b"DC03FR01AB12");
        let raw = sig.to_bytes();
        assert_eq!(raw.len(), SIGNATURE_LEN);
        assert!(pk.verify(b"DC03FR01AB12", &raw).is_ok());
        assert!(!pk.signature_is_valid(b"DC03FR01AB13", &raw));
    }

    #[test]
    fn test_wrong_length_is_invalid() {
        let pk = PublicKey::new(*signing_key().verifying_key());
        let err = pk.verify(b"data", &[0u8; 63]).unwrap_err();
        assert!(matches!(err, CryptoError::SignatureInvalid(_)));
    }

    #[test]
    fn test_sec1_roundtrip() {
        let pk = PublicKey::new(*signing_key().verifying_key());
        let again = PublicKey::from_sec1_bytes(&pk.to_sec1_bytes()).unwrap();
        assert_eq!(pk, again);
    }

    #[test]
    fn test_bad_point_rejected() {
        assert!(matches!(
            PublicKey::from_sec1_bytes(&[4u8; 65]),
            Err(CryptoError::PublicKey(_))
        ));
    }
}
