//! # Schema Registry
//!
//! Resolves `(perimeter, field id)` to a group and definition, and
//! `(perimeter, doctype id)` to a doctype. Both lookups are total: a miss
//! yields a synthetic "unknown" entry so that decoding stays
//! forward-compatible with catalog gaps. Misses are flagged through
//! [`Resolved::catalogued`] so callers can tell a complete decode from one
//! that leaned on fallbacks.
//!
//! The registry is built once and shared by reference; it is never mutated
//! after construction.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use crate::catalog::{PERIMETER_1_DOCTYPES, PERIMETER_1_GROUPS};
use crate::codec::{FieldCodec, TextFormat};
use crate::definition::{Doctype, FieldDefinition, Group};

/// Group reported for identifiers missing from the catalog.
pub static UNKNOWN_GROUP: Group = Group::new("Unknown group", &[]);

/// Outcome of a field lookup.
#[derive(Debug, Clone)]
pub struct Resolved<'a> {
    /// Group the definition belongs to.
    pub group: &'a Group,
    /// Definition; owned only for synthetic fallbacks.
    pub definition: Cow<'a, FieldDefinition>,
    /// False when the definition is a synthetic fallback.
    pub catalogued: bool,
}

/// One perimeter's field and doctype catalog, indexed by identifier.
#[derive(Debug)]
pub struct Perimeter {
    id: u16,
    groups: &'static [Group],
    fields: HashMap<&'static str, (&'static Group, &'static FieldDefinition)>,
    doctypes: HashMap<&'static str, &'static Doctype>,
}

impl Perimeter {
    /// Index static groups and doctypes. When an identifier appears twice
    /// the later entry wins.
    pub fn new(id: u16, groups: &'static [Group], doctypes: &'static [Doctype]) -> Self {
        let mut fields = HashMap::new();
        for group in groups {
            for definition in group.definitions {
                fields.insert(&*definition.id, (group, definition));
            }
        }
        let doctypes = doctypes.iter().map(|d| (&*d.id, d)).collect();
        Self {
            id,
            groups,
            fields,
            doctypes,
        }
    }

    /// Perimeter number.
    pub fn id(&self) -> u16 {
        self.id
    }

    /// Groups in publication order.
    pub fn groups(&self) -> &'static [Group] {
        self.groups
    }

    /// Catalogued definition for a field id.
    pub fn field(&self, id: &str) -> Option<(&'static Group, &'static FieldDefinition)> {
        self.fields.get(id).copied()
    }

    /// Catalogued doctype for a doctype id.
    pub fn doctype(&self, id: &str) -> Option<&'static Doctype> {
        self.doctypes.get(id).copied()
    }
}

/// All known perimeters.
#[derive(Debug, Default)]
pub struct Definitions {
    perimeters: BTreeMap<u16, Perimeter>,
}

impl Definitions {
    /// Empty registry: every lookup falls back.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in perimeter 1 catalog.
    pub fn builtin() -> Self {
        Self::new().with_perimeter(Perimeter::new(1, PERIMETER_1_GROUPS, PERIMETER_1_DOCTYPES))
    }

    /// Add (or replace) a perimeter.
    pub fn with_perimeter(mut self, perimeter: Perimeter) -> Self {
        self.perimeters.insert(perimeter.id(), perimeter);
        self
    }

    /// Perimeter by number.
    pub fn perimeter(&self, id: u16) -> Option<&Perimeter> {
        self.perimeters.get(&id)
    }

    /// Resolve a field id. Never fails.
    pub fn lookup(&self, perimeter: u16, id: &str) -> Resolved<'static> {
        match self.perimeter(perimeter).and_then(|p| p.field(id)) {
            Some((group, definition)) => Resolved {
                group,
                definition: Cow::Borrowed(definition),
                catalogued: true,
            },
            None => {
                tracing::debug!(perimeter, field = id, "field not catalogued, using fallback definition");
                Resolved {
                    group: &UNKNOWN_GROUP,
                    definition: Cow::Owned(unknown_field(id)),
                    catalogued: false,
                }
            }
        }
    }

    /// Resolve a doctype id. Never fails.
    pub fn doctype(&self, perimeter: u16, id: &str) -> Cow<'static, Doctype> {
        match self.perimeter(perimeter).and_then(|p| p.doctype(id)) {
            Some(doctype) => Cow::Borrowed(doctype),
            None => {
                tracing::debug!(perimeter, doctype = id, "doctype not catalogued");
                Cow::Owned(Doctype {
                    id: Cow::Owned(id.to_string()),
                    user_type: Cow::Owned(format!("Unknown {id}")),
                    emitter_type: Cow::Borrowed("Unknown"),
                })
            }
        }
    }
}

fn unknown_field(id: &str) -> FieldDefinition {
    FieldDefinition {
        id: Cow::Owned(id.to_string()),
        label: Cow::Owned(format!("Unknown {id}")),
        size_min: 0,
        size_max: None,
        codec: FieldCodec::Text(TextFormat::Any),
    }
}
