//! # Document Identifiers
//!
//! Identifier types shared between the header codec and the schema
//! registry.

use serde::{Deserialize, Serialize};

/// Document type identifier.
///
/// Character-mode headers carry a two-character code (`"01"`, `"A7"`);
/// binary-mode headers carry a single raw byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocTypeId {
    /// Two-character code from a character-mode header.
    Code(String),
    /// Raw byte from a binary-mode header.
    Byte(u8),
}

impl DocTypeId {
    /// Catalog key for this doctype: the code itself, or the byte rendered
    /// as two uppercase hex digits.
    pub fn catalog_key(&self) -> String {
        match self {
            Self::Code(code) => code.clone(),
            Self::Byte(b) => format!("{b:02X}"),
        }
    }
}

impl std::fmt::Display for DocTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Code(code) => f.write_str(code),
            Self::Byte(b) => write!(f, "0x{b:02X}"),
        }
    }
}

impl From<&str> for DocTypeId {
    fn from(code: &str) -> Self {
        Self::Code(code.to_string())
    }
}
