//! # Keychain
//!
//! The certificate store consulted for signature verification, keyed by
//! the header's certification authority id (issuer common name) and
//! certificate id (subject common name).
//!
//! A keychain is loaded once at startup and then only read.

use std::path::Path;

use x509_cert::der::{Decode, Reader, SliceReader};

use ddoc_core::CryptoError;

use crate::certificate::Certificate;

/// Built-in certification authority chains, as `<id>.der` files.
pub const BUILTIN_CHAINS: [&str; 5] = ["FR00", "FR01", "FR02", "FR03", "FR04"];

/// Ordered collection of trusted certificates.
#[derive(Debug, Clone, Default)]
pub struct KeyChain {
    certs: Vec<Certificate>,
}

impl KeyChain {
    /// Empty keychain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keychain with the built-in chains found in `dir`. Missing or
    /// unreadable chains are logged and skipped.
    pub fn builtin(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let mut chain = Self::new();
        for name in BUILTIN_CHAINS {
            let path = dir.join(format!("{name}.der"));
            if let Err(e) = chain.load_file(&path) {
                tracing::warn!(chain = name, path = %path.display(), error = %e, "failed to load chain");
            }
        }
        chain
    }

    /// Add a certificate. Later additions do not shadow earlier ones.
    pub fn add(&mut self, cert: Certificate) {
        self.certs.push(cert);
    }

    /// Decode and add one DER certificate.
    pub fn der_add(&mut self, der: &[u8]) -> Result<(), CryptoError> {
        self.add(Certificate::from_der(der)?);
        Ok(())
    }

    /// Decode and add every certificate of a concatenated DER stream.
    /// Returns how many were added. Nothing is added if any is invalid.
    pub fn der_multipart_load(&mut self, data: &[u8]) -> Result<usize, CryptoError> {
        let malformed = |e: x509_cert::der::Error| CryptoError::Certificate(e.to_string());
        let mut reader = SliceReader::new(data).map_err(malformed)?;
        let mut loaded = Vec::new();
        while !reader.is_finished() {
            let cert = x509_cert::Certificate::decode(&mut reader).map_err(malformed)?;
            loaded.push(Certificate::from_x509(&cert)?);
        }
        let count = loaded.len();
        self.certs.extend(loaded);
        Ok(count)
    }

    /// Load a file holding one or more DER certificates.
    pub fn load_file(&mut self, path: &Path) -> Result<usize, CryptoError> {
        let data = std::fs::read(path)?;
        let count = self.der_multipart_load(&data)?;
        tracing::debug!(path = %path.display(), count, "loaded certificates");
        Ok(count)
    }

    /// Load every `*.der` file in a directory, in file name order. Files
    /// that fail to decode are logged and skipped.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, CryptoError> {
        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("der")))
            .collect();
        paths.sort();

        let mut total = 0;
        for path in paths {
            match self.load_file(&path) {
                Ok(count) => total += count,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping certificate file")
                }
            }
        }
        Ok(total)
    }

    /// Certificate issued by `ca_id` with subject `cert_id`.
    pub fn lookup(&self, ca_id: &str, cert_id: &str) -> Result<&Certificate, CryptoError> {
        self.certs
            .iter()
            .find(|c| c.ca_id() == Some(ca_id) && c.cert_id() == Some(cert_id))
            .ok_or_else(|| CryptoError::KeyNotFound {
                ca_id: ca_id.to_string(),
                cert_id: cert_id.to_string(),
            })
    }

    /// Number of certificates.
    pub fn len(&self) -> usize {
        self.certs.len()
    }

    /// Whether the keychain is empty.
    pub fn is_empty(&self) -> bool {
        self.certs.is_empty()
    }

    /// All certificates in insertion order.
    pub fn certificates(&self) -> &[Certificate] {
        &self.certs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::fixtures::der_certificate;
    use crate::dn::Dn;
    use crate::key::PublicKey;
    use p256::ecdsa::SigningKey;

    fn key(seed: u8) -> SigningKey {
        SigningKey::from_slice(&[seed; 32]).unwrap()
    }

    fn cert(ca: &str, id: &str, seed: u8) -> Certificate {
        Certificate::new(
            Dn::common_name(ca),
            Dn::common_name(id),
            PublicKey::new(*key(seed).verifying_key()),
        )
    }

    #[test]
    fn test_lookup_matches_both_names() {
        let mut chain = KeyChain::new();
        chain.add(cert("FR01", "AB12", 1));
        chain.add(cert("FR02", "AB12", 2));
        let found = chain.lookup("FR02", "AB12").unwrap();
        assert_eq!(found.public_key, PublicKey::new(*key(2).verifying_key()));
    }

    #[test]
    fn test_lookup_miss_is_key_not_found() {
        let mut chain = KeyChain::new();
        chain.add(cert("FR01", "AB12", 1));
        let err = chain.lookup("FR01", "ZZZZ").unwrap_err();
        assert_eq!(err.to_string(), "key not found: FR01, ZZZZ");
    }

    #[test]
    fn test_multipart_load() {
        let mut data = der_certificate("CN=FR00", "CN=0001", key(1).verifying_key());
        data.extend(der_certificate("CN=FR00", "CN=0002", key(2).verifying_key()));
        let mut chain = KeyChain::new();
        assert_eq!(chain.der_multipart_load(&data).unwrap(), 2);
        assert!(chain.lookup("FR00", "0002").is_ok());
    }

    #[test]
    fn test_multipart_load_is_all_or_nothing() {
        let mut data = der_certificate("CN=FR00", "CN=0001", key(1).verifying_key());
        data.extend_from_slice(&[0x30, 0x03, 0x01]);
        let mut chain = KeyChain::new();
        assert!(chain.der_multipart_load(&data).is_err());
        assert!(chain.is_empty());
    }

    #[test]
    fn test_load_dir_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("FR01.der"),
            der_certificate("CN=FR01", "CN=AB12", key(3).verifying_key()),
        )
        .unwrap();
        std::fs::write(dir.path().join("broken.der"), b"junk").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"ignored").unwrap();

        let mut chain = KeyChain::new();
        assert_eq!(chain.load_dir(dir.path()).unwrap(), 1);
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_builtin_tolerates_missing_chains() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("FR03.der"),
            der_certificate("CN=FR03", "CN=0003", key(4).verifying_key()),
        )
        .unwrap();
        let chain = KeyChain::builtin(dir.path());
        assert_eq!(chain.len(), 1);
        assert!(chain.lookup("FR03", "0003").is_ok());
    }

    #[test]
    fn test_load_dir_missing_directory_is_io_error() {
        let mut chain = KeyChain::new();
        let err = chain.load_dir(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, CryptoError::Io(_)));
    }
}
