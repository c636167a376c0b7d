//! # Decoder
//!
//! Holds the long-lived read-only context of decoding (C40 tables and the
//! schema registry) and assembles documents from raw text.

use ddoc_core::{base32, Codec, DdocError};
use ddoc_schema::Definitions;

use crate::document::TwoDDoc;
use crate::header::{Header, HeaderMode, BINARY_MARKER};
use crate::message::Message;
use crate::scan;
use crate::separator;

/// Decoding context, built once and shared by reference.
#[derive(Debug)]
pub struct Decoder {
    c40: Codec,
    definitions: Definitions,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(Codec::c40(), Definitions::builtin())
    }
}

impl Decoder {
    /// Context from explicit parts.
    pub fn new(c40: Codec, definitions: Definitions) -> Self {
        Self { c40, definitions }
    }

    /// C40 codec used for binary headers.
    pub fn c40(&self) -> &Codec {
        &self.c40
    }

    /// Schema registry used by the tokenizer.
    pub fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    /// Normalize raw scanner output, then decode it.
    pub fn decode_scanned(&self, raw: &str) -> Result<TwoDDoc, DdocError> {
        self.decode(&scan::normalize(raw))
    }

    /// Decode raw bytes: text documents, or binary ones (header only).
    pub fn decode_bytes(&self, code: &[u8]) -> Result<TwoDDoc, DdocError> {
        if code.first() == Some(&BINARY_MARKER) {
            Header::parse_binary(code, &self.c40)?;
            return Err(DdocError::BinaryUnsupported);
        }
        let text = std::str::from_utf8(code).map_err(|_| DdocError::NotADocument)?;
        self.decode(text)
    }

    /// Decode a character-mode document.
    pub fn decode(&self, code: &str) -> Result<TwoDDoc, DdocError> {
        let header = Header::parse(code.as_bytes(), &self.c40)?;
        if header.mode()? == HeaderMode::Binary {
            return Err(DdocError::BinaryUnsupported);
        }
        let length = header.length()?;
        let (header_text, remainder) = match (code.get(..length), code.get(length..)) {
            (Some(h), Some(r)) => (h, r),
            _ => {
                return Err(DdocError::MalformedHeader(
                    "header is not plain text".to_string(),
                ))
            }
        };

        let (boundary, data, sign) = separator::split_signature(remainder)?;
        tracing::debug!(?boundary, data_len = data.len(), "located signature boundary");

        let signature = base32::decode(sign);
        let message = Message::from_code(header.perimeter_id, data, &self.definitions)?;

        let mut signed_data = Vec::with_capacity(header_text.len() + data.len());
        signed_data.extend_from_slice(header_text.as_bytes());
        signed_data.extend_from_slice(data.as_bytes());

        Ok(TwoDDoc {
            header,
            message,
            signature,
            signed_data,
        })
    }
}
