//! # Scan Report
//!
//! The structured result printed by the CLI. Building a report never
//! fails: decode errors become `success: false` with a message, signature
//! problems become `signature.valid: false` with a message.

use serde::Serialize;

use ddoc_core::DocTypeId;
use ddoc_crypto::KeyChain;
use ddoc_document::{DataEntry, Decoder, HeaderMode, TwoDDoc};
use ddoc_schema::FieldValue;

/// Top-level result document.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Whether the document decoded.
    pub success: bool,
    /// Decode error message.
    pub error: Option<String>,
    /// Header fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderReport>,
    /// Doctype descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<DoctypeReport>,
    /// Decoded fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageReport>,
    /// Signature outcome.
    pub signature: SignatureReport,
}

/// Header section.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderReport {
    /// Format version, 1 to 4.
    pub version: u8,
    /// Certification authority id.
    pub ca_id: String,
    /// Certificate id within the authority.
    pub cert_id: String,
    /// Emission date, ISO 8601.
    pub emit_date: String,
    /// Signature date, ISO 8601.
    pub sign_date: String,
    /// Doctype code or raw byte.
    pub doc_type_id: DocTypeId,
    /// Field catalog namespace.
    pub perimeter_id: u16,
    /// Issuing country code.
    pub country_id: String,
    /// Header length in characters; absent when it cannot be derived.
    pub length: Option<usize>,
    /// Physical encoding, derived from the country id.
    pub mode: Option<HeaderMode>,
}

/// Doctype section.
#[derive(Debug, Clone, Serialize)]
pub struct DoctypeReport {
    /// Doctype code.
    pub id: String,
    /// Kind of document from the holder's side.
    pub user_type: String,
    /// Kind of issuer.
    pub emitter_type: String,
}

/// One decoded field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldReport {
    /// Two-character field id.
    pub id: String,
    /// Catalog group name.
    pub group: String,
    /// Human label from the catalog.
    pub label: String,
    /// Decoded value.
    pub value: FieldValue,
    /// `fixed` or `variable`.
    pub kind: &'static str,
    /// Variable fields only: whether a terminator or the size cap closed it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
}

/// Message section.
#[derive(Debug, Clone, Serialize)]
pub struct MessageReport {
    /// Fields in stream order.
    pub fields: Vec<FieldReport>,
    /// Number of fields.
    pub count: usize,
    /// False when some field id fell back to an uncatalogued definition.
    pub schema_complete: bool,
}

/// Signature section.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignatureReport {
    /// Whether the signature verified against the keychain.
    pub valid: bool,
    /// Why verification failed, when it did.
    pub error: Option<String>,
    /// Hex SHA-256 of the signed byte range.
    pub signed_data_sha256: Option<String>,
}

impl ScanReport {
    /// Normalize, decode and verify one scanned payload.
    pub fn scan(raw: &str, decoder: &Decoder, keychain: &KeyChain) -> Self {
        match decoder.decode_scanned(raw) {
            Ok(doc) => Self::from_document(&doc, decoder, keychain),
            Err(e) => {
                tracing::info!(error = %e, "decode failed");
                Self {
                    success: false,
                    error: Some(e.to_string()),
                    header: None,
                    doc_type: None,
                    message: None,
                    signature: SignatureReport::default(),
                }
            }
        }
    }

    /// Report for an already decoded document.
    pub fn from_document(doc: &TwoDDoc, decoder: &Decoder, keychain: &KeyChain) -> Self {
        let header = &doc.header;
        let doc_type = doc.doc_type(decoder.definitions());

        let fields: Vec<FieldReport> = doc.message.dataset.iter().map(field_report).collect();
        let message = MessageReport {
            count: fields.len(),
            schema_complete: doc.message.is_schema_complete(),
            fields,
        };

        let signature = match doc.signature_is_valid(keychain) {
            Ok(valid) => SignatureReport {
                valid,
                error: (!valid).then(|| "signature invalid".to_string()),
                signed_data_sha256: Some(doc.signed_data_sha256()),
            },
            Err(e) => SignatureReport {
                valid: false,
                error: Some(e.to_string()),
                signed_data_sha256: Some(doc.signed_data_sha256()),
            },
        };

        Self {
            success: true,
            error: None,
            header: Some(HeaderReport {
                version: header.version,
                ca_id: header.ca_id.clone(),
                cert_id: header.cert_id.clone(),
                emit_date: header.emit_date.to_string(),
                sign_date: header.sign_date.to_string(),
                doc_type_id: header.doc_type_id.clone(),
                perimeter_id: header.perimeter_id,
                country_id: header.country_id.clone(),
                length: header.length().ok(),
                mode: header.mode().ok(),
            }),
            doc_type: Some(DoctypeReport {
                id: doc_type.id.to_string(),
                user_type: doc_type.user_type.to_string(),
                emitter_type: doc_type.emitter_type.to_string(),
            }),
            message: Some(message),
            signature,
        }
    }
}

fn field_report(entry: &DataEntry) -> FieldReport {
    let data = entry.data();
    FieldReport {
        id: data.definition.id.to_string(),
        group: data.group.name.to_string(),
        label: data.definition.label.to_string(),
        value: data.value.clone(),
        kind: match entry {
            DataEntry::Fixed(_) => "fixed",
            DataEntry::Variable { .. } => "variable",
        },
        complete: entry.complete(),
    }
}
