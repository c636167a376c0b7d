//! # ddoc-crypto: Certificates and Signature Verification
//!
//! The trust boundary of the decoder. A [`KeyChain`] maps a header's
//! `(ca_id, cert_id)` pair to a [`Certificate`]; the certificate's
//! [`PublicKey`] checks an ECDSA P-256/SHA-256 signature over the signed
//! byte range of a document.
//!
//! ## Crate Policy
//!
//! - Certificate chains and validity periods are not evaluated. Trust is
//!   whatever the caller loaded into the keychain.
//! - "Key not found" and "signature invalid" are distinct errors; neither
//!   affects whether a document decodes.

pub mod certificate;
pub mod dn;
pub mod key;
pub mod keychain;

pub use certificate::Certificate;
pub use dn::Dn;
pub use key::PublicKey;
pub use keychain::{KeyChain, BUILTIN_CHAINS};
