//! # ddoc-schema: 2D-Doc Field Catalog
//!
//! Everything the tokenizer needs to know about a field beyond its
//! identifier.
//!
//! - [`codec`]: the closed set of value sub-codecs ([`FieldCodec`]) and
//!   the typed values they produce ([`FieldValue`]).
//! - [`definition`]: [`FieldDefinition`], [`Group`] and [`Doctype`].
//! - [`registry`]: [`Definitions`], the total `(perimeter, id)` lookup.
//!
//! Only perimeter 1 is catalogued. Lookups on anything else fall back to
//! synthetic definitions and are reported as not catalogued.
//!
//! ## Crate Policy
//!
//! - Depends only on `ddoc-core` internally.
//! - The catalog is static data; the registry is built once and never
//!   mutated.

mod catalog;
pub mod codec;
pub mod definition;
pub mod registry;

pub use codec::{FieldCodec, FieldValue, TextFormat, ValueError};
pub use definition::{Doctype, FieldDefinition, Group};
pub use registry::{Definitions, Perimeter, Resolved, UNKNOWN_GROUP};
