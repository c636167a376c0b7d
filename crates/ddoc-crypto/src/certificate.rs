//! # Certificates
//!
//! Only the parts of an X.509 certificate a 2D-Doc verifier uses: issuer
//! and subject names (to find the certificate from a header's CA and
//! certificate ids) and the subject public key. Validity periods and chain
//! policy are not checked.

use x509_cert::der::Decode;

use ddoc_core::CryptoError;

use crate::dn::Dn;
use crate::key::PublicKey;

/// A certificate reduced to what signature verification needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    /// Issuer name; its common name is the CA id (`FR01`, ...).
    pub issuer: Dn,
    /// Subject name; its common name is the certificate id.
    pub subject: Dn,
    /// Subject public key.
    pub public_key: PublicKey,
}

impl Certificate {
    /// Assemble a certificate from its parts.
    pub fn new(issuer: Dn, subject: Dn, public_key: PublicKey) -> Self {
        Self {
            issuer,
            subject,
            public_key,
        }
    }

    /// Decode a single DER certificate.
    pub fn from_der(der: &[u8]) -> Result<Self, CryptoError> {
        let cert = x509_cert::Certificate::from_der(der)
            .map_err(|e| CryptoError::Certificate(e.to_string()))?;
        Self::from_x509(&cert)
    }

    /// Reduce a parsed X.509 certificate.
    pub fn from_x509(cert: &x509_cert::Certificate) -> Result<Self, CryptoError> {
        let tbs = &cert.tbs_certificate;
        Ok(Self {
            issuer: Dn::from_name(&tbs.issuer),
            subject: Dn::from_name(&tbs.subject),
            public_key: PublicKey::from_spki(&tbs.subject_public_key_info)?,
        })
    }

    /// Issuer common name.
    pub fn ca_id(&self) -> Option<&str> {
        self.issuer.get("commonName")
    }

    /// Subject common name.
    pub fn cert_id(&self) -> Option<&str> {
        self.subject.get("commonName")
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use p256::ecdsa::SigningKey;

    #[test]
    fn test_from_der() {
        let sk = SigningKey::from_slice(&[7u8; 32]).unwrap();
        let der = fixtures::der_certificate("CN=FR01,O=ANTS,C=FR", "CN=AB12,C=FR", sk.verifying_key());
        let cert = Certificate::from_der(&der).unwrap();
        assert_eq!(cert.ca_id(), Some("FR01"));
        assert_eq!(cert.cert_id(), Some("AB12"));
        assert_eq!(cert.issuer.get("organizationName"), Some("ANTS"));
        assert_eq!(cert.public_key, PublicKey::new(*sk.verifying_key()));
    }

    #[test]
    fn test_garbage_der_rejected() {
        let err = Certificate::from_der(b"not a certificate").unwrap_err();
        assert!(matches!(err, CryptoError::Certificate(_)));
    }
}
