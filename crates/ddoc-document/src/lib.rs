//! # ddoc-document: 2D-Doc Decoding
//!
//! Turns raw barcode text into a [`TwoDDoc`]:
//!
//! ```text
//! raw text ─▶ Header ─▶ signature boundary ─▶ Message tokenizer ─▶ TwoDDoc
//! ```
//!
//! - [`header`]: versioned header codec, character and binary forms.
//! - [`message`]: field tokenizer and re-encoder.
//! - [`separator`]: ordered signature-boundary strategies.
//! - [`document`]: the decoded document and signature checks.
//! - [`decoder`]: the shared decoding context.
//! - [`scan`]: scanner output normalization.
//!
//! ## Crate Policy
//!
//! - Decoding is all-or-nothing: any header, boundary or field error
//!   aborts and no partial document is returned.
//! - The signed range is captured verbatim; nothing is re-encoded before
//!   it reaches the verifier.
//! - Only character-mode documents decode past the header.

pub mod decoder;
pub mod document;
pub mod header;
pub mod message;
pub mod scan;
pub mod separator;

pub use decoder::Decoder;
pub use document::TwoDDoc;
pub use header::{Header, HeaderMode};
pub use message::{Data, DataEntry, Message, GS, RS};
pub use separator::{Boundary, US};
