//! # ddoc-core: Foundational Types for the 2D-Doc Decoder
//!
//! The leaf of the workspace: every other `ddoc-*` crate depends on it and
//! it depends on nothing internal.
//!
//! - [`c40`]: C40/Text character packing with its shift/lock machine.
//! - [`base32`]: lenient RFC 4648 base32 used for signatures.
//! - [`temporal`]: the hex day-offset, packed and digit date encodings.
//! - [`identity`]: identifier types shared across crates.
//! - [`error`]: the structured error hierarchy.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Everything here is pure: no I/O, no global mutable state. Character
//!   tables are plain values built once by the caller and shared by
//!   reference.

pub mod base32;
pub mod c40;
pub mod error;
pub mod identity;
pub mod temporal;

pub use c40::Codec;
pub use error::{CodecError, CryptoError, DateError, DdocError};
pub use identity::DocTypeId;
