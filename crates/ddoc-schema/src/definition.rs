//! # Field Definitions, Groups and Doctypes
//!
//! Static descriptions of what a perimeter's fields look like. Catalogued
//! entries are `const`-constructed and live for the whole process; synthetic
//! fallbacks for unknown identifiers are built on demand, hence the
//! `Cow<'static, str>` text fields.

use std::borrow::Cow;

use serde::Serialize;

use crate::codec::{FieldCodec, FieldValue, ValueError};

/// Size bounds and value sub-codec of one field identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    /// Two-character field identifier.
    pub id: Cow<'static, str>,
    /// Human-readable label (French, as published).
    pub label: Cow<'static, str>,
    /// Minimum value length in characters.
    pub size_min: usize,
    /// Maximum value length in characters, if bounded.
    pub size_max: Option<usize>,
    /// Value sub-codec.
    pub codec: FieldCodec,
}

impl FieldDefinition {
    /// Width of a fixed-size field: set only when `size_min == size_max`.
    pub fn fixed(&self) -> Option<usize> {
        (self.size_max == Some(self.size_min)).then_some(self.size_min)
    }

    /// Decode the raw value text of this field.
    pub fn parse(&self, raw: &str) -> Result<FieldValue, ValueError> {
        self.codec.parse(raw)
    }

    /// Encode a value, enforcing this field's size bounds.
    pub fn serialize(&self, value: &FieldValue) -> Result<String, ValueError> {
        self.codec.serialize(value, self.size_min, self.size_max)
    }
}

/// Catalog section grouping related field definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    /// Section title.
    pub name: &'static str,
    /// Definitions in publication order.
    #[serde(skip)]
    pub definitions: &'static [FieldDefinition],
}

impl Group {
    /// Build a group; usable in `const` context.
    pub const fn new(name: &'static str, definitions: &'static [FieldDefinition]) -> Self {
        Self { name, definitions }
    }
}

/// Kind of document named by a header doctype id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doctype {
    /// Two-character doctype code.
    pub id: Cow<'static, str>,
    /// What the document proves for its holder.
    pub user_type: Cow<'static, str>,
    /// What the emitter calls it.
    pub emitter_type: Cow<'static, str>,
}

/// `const` constructor for catalogued fields.
pub(crate) const fn field(
    id: &'static str,
    label: &'static str,
    size_min: usize,
    size_max: Option<usize>,
    codec: FieldCodec,
) -> FieldDefinition {
    FieldDefinition {
        id: Cow::Borrowed(id),
        label: Cow::Borrowed(label),
        size_min,
        size_max,
        codec,
    }
}

/// `const` constructor for catalogued doctypes.
pub(crate) const fn doctype(
    id: &'static str,
    user_type: &'static str,
    emitter_type: &'static str,
) -> Doctype {
    Doctype {
        id: Cow::Borrowed(id),
        user_type: Cow::Borrowed(user_type),
        emitter_type: Cow::Borrowed(emitter_type),
    }
}
