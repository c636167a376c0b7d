//! # Message Tokenizer
//!
//! Splits the field stream that follows the header into typed entries.
//! Each step reads a two-character field id, resolves its definition and
//! consumes the value:
//!
//! - **fixed** fields take exactly `fixed` characters, then an optional
//!   `GS`;
//! - **variable** fields run to the next `RS` (complete) or else the next
//!   `GS` (incomplete) or else the end of the stream (incomplete). A
//!   declared maximum caps the value at `2 + size_max` characters and marks
//!   it complete.
//!
//! Offsets are counted in characters, not bytes.

use std::borrow::Cow;

use serde::Serialize;

use ddoc_core::DdocError;
use ddoc_schema::{Definitions, FieldDefinition, FieldValue, Group};

/// Group separator: optional terminator after fixed fields, incomplete
/// terminator for variable ones.
pub const GS: char = '\x1d';
/// Record separator: complete terminator of a variable field.
pub const RS: char = '\x1e';

const ID_LEN: usize = 2;

/// One decoded field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Data {
    /// Catalog group.
    pub group: &'static Group,
    /// Resolved definition.
    pub definition: Cow<'static, FieldDefinition>,
    /// Decoded value.
    pub value: FieldValue,
    /// False when the definition is a fallback for an unknown id.
    pub catalogued: bool,
}

/// Data entry, tagged with how its extent was determined.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataEntry {
    /// Fixed-width field.
    Fixed(Data),
    /// Separator-delimited field.
    Variable {
        /// Entry contents.
        #[serde(flatten)]
        data: Data,
        /// Whether a real terminator (or the size cap) ended the value.
        complete: bool,
    },
}

impl DataEntry {
    /// Entry contents.
    pub fn data(&self) -> &Data {
        match self {
            Self::Fixed(data) | Self::Variable { data, .. } => data,
        }
    }

    /// Field id.
    pub fn id(&self) -> &str {
        &self.data().definition.id
    }

    /// Completion flag of variable entries.
    pub fn complete(&self) -> Option<bool> {
        match self {
            Self::Fixed(_) => None,
            Self::Variable { complete, .. } => Some(*complete),
        }
    }
}

/// Ordered field list of one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    /// Perimeter the fields were resolved in.
    pub perimeter_id: u16,
    /// Entries in stream order.
    pub dataset: Vec<DataEntry>,
}

impl Message {
    /// Tokenize a character-mode field stream.
    pub fn from_code(
        perimeter_id: u16,
        code: &str,
        definitions: &Definitions,
    ) -> Result<Self, DdocError> {
        let chars: Vec<char> = code.chars().collect();
        let mut rest = chars.as_slice();
        let mut dataset = Vec::new();

        while !rest.is_empty() {
            let (entry, consumed) = extract(perimeter_id, rest, definitions)?;
            tracing::debug!(
                field = entry.id(),
                consumed,
                complete = ?entry.complete(),
                "tokenized field"
            );
            dataset.push(entry);
            if consumed == 0 {
                break;
            }
            rest = &rest[consumed.min(rest.len())..];
        }

        Ok(Self {
            perimeter_id,
            dataset,
        })
    }

    /// Whether every entry came from the catalog.
    pub fn is_schema_complete(&self) -> bool {
        self.dataset.iter().all(|e| e.data().catalogued)
    }

    /// Re-emit the field stream. Fixed fields carry no terminator; variable
    /// fields are closed with `GS` except the last one.
    pub fn encode(&self) -> Result<String, DdocError> {
        let mut out = String::new();
        let last = self.dataset.len().saturating_sub(1);
        for (i, entry) in self.dataset.iter().enumerate() {
            let data = entry.data();
            let raw = FieldDefinition::serialize(&data.definition, &data.value)
                .map_err(|e| DdocError::field(&*data.definition.id, e.to_string()))?;
            out.push_str(&data.definition.id);
            out.push_str(&raw);
            if matches!(entry, DataEntry::Variable { .. }) && i != last {
                out.push(GS);
            }
        }
        Ok(out)
    }
}

/// Extract the entry at the head of `code`; returns it with the number of
/// characters consumed.
fn extract(
    perimeter_id: u16,
    code: &[char],
    definitions: &Definitions,
) -> Result<(DataEntry, usize), DdocError> {
    let id: String = code.iter().take(ID_LEN).collect();
    let resolved = definitions.lookup(perimeter_id, &id);
    let parse = |start: usize, end: usize| -> Result<Data, DdocError> {
        let start = start.min(code.len());
        let raw: String = code[start..end.clamp(start, code.len())].iter().collect();
        let value = resolved
            .definition
            .parse(&raw)
            .map_err(|e| DdocError::field(id.as_str(), e.to_string()))?;
        Ok(Data {
            group: resolved.group,
            definition: resolved.definition.clone(),
            value,
            catalogued: resolved.catalogued,
        })
    };

    if let Some(fixed) = resolved.definition.fixed() {
        let end = ID_LEN + fixed;
        let data = parse(ID_LEN, end)?;
        let consumed = if code.get(end) == Some(&GS) {
            end + 1
        } else {
            end.min(code.len())
        };
        return Ok((DataEntry::Fixed(data), consumed));
    }

    let search = |sep: char| {
        code.iter()
            .skip(ID_LEN)
            .position(|&c| c == sep)
            .map(|p| p + ID_LEN)
    };
    let (mut end, mut complete) = match search(RS) {
        Some(pos) => (Some(pos), true),
        None => (search(GS), false),
    };
    if let Some(max) = resolved.definition.size_max {
        let cap = ID_LEN + max;
        if end.map_or(true, |e| e > cap) {
            end = Some(cap.min(code.len()));
            complete = true;
        }
    }

    let (data, consumed) = match end {
        Some(end) => {
            let separator = matches!(code.get(end), Some(&RS) | Some(&GS));
            (parse(ID_LEN, end)?, if separator { end + 1 } else { end })
        }
        None => (parse(ID_LEN, code.len())?, code.len()),
    };
    Ok((DataEntry::Variable { data, complete }, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(code: &str) -> Message {
        Message::from_code(1, code, &Definitions::builtin()).unwrap()
    }

    fn text(entry: &DataEntry) -> String {
        entry.data().value.to_string()
    }

    #[test]
    fn test_fixed_field_with_and_without_gs() {
        // 24: postcode, fixed 5
        let msg = tokenize("2475001\x1d2475002");
        assert_eq!(msg.dataset.len(), 2);
        assert_eq!(text(&msg.dataset[0]), "75001");
        assert_eq!(msg.dataset[0].complete(), None);
        assert_eq!(text(&msg.dataset[1]), "75002");
    }

    #[test]
    fn test_fixed_field_back_to_back() {
        let msg = tokenize("2475001240000");
        assert_eq!(msg.dataset.len(), 2);
        // leading zeros are padding
        assert_eq!(text(&msg.dataset[1]), "");
    }

    #[test]
    fn test_variable_field_terminators() {
        // 10: address line, up to 38
        let msg = tokenize("10RUE A\x1e10RUE B\x1d10RUE C");
        let flags: Vec<_> = msg.dataset.iter().map(DataEntry::complete).collect();
        // the last one hits the end of the stream and is capped by size_max
        assert_eq!(flags, vec![Some(true), Some(false), Some(true)]);
        let values: Vec<_> = msg.dataset.iter().map(text).collect();
        assert_eq!(values, vec!["RUE A", "RUE B", "RUE C"]);
    }

    #[test]
    fn test_rs_preferred_over_earlier_gs() {
        let msg = tokenize("01AB\x1dCD\x1e");
        assert_eq!(msg.dataset.len(), 1);
        assert_eq!(text(&msg.dataset[0]), "AB\x1dCD");
        assert_eq!(msg.dataset[0].complete(), Some(true));
    }

    #[test]
    fn test_variable_field_truncated_at_size_max() {
        // 12: first name, up to 38
        let long = "x".repeat(50);
        let msg = tokenize(&format!("12{long}"));
        let first = &msg.dataset[0];
        assert_eq!(text(first).len(), 38);
        assert_eq!(first.complete(), Some(true));
        // the remaining 12 characters become an unknown field
        assert_eq!(msg.dataset.len(), 2);
        assert!(!msg.dataset[1].data().catalogued);
    }

    #[test]
    fn test_separator_at_cap_is_consumed() {
        let value = "B".repeat(38);
        let msg = tokenize(&format!("12{value}\x1d13DOE"));
        assert_eq!(msg.dataset.len(), 2);
        assert_eq!(msg.dataset[0].complete(), Some(false));
        assert_eq!(text(&msg.dataset[1]), "DOE");

        let value = "B".repeat(39);
        let msg = tokenize(&format!("12{value}\x1d13DOE"));
        assert_eq!(text(&msg.dataset[0]).len(), 38);
        assert_eq!(msg.dataset[0].complete(), Some(true));
    }

    #[test]
    fn test_unknown_field_consumes_to_separator() {
        let msg = tokenize("~~whatever\x1d2475001");
        assert_eq!(msg.dataset.len(), 2);
        assert_eq!(msg.dataset[0].id(), "~~");
        assert_eq!(msg.dataset[0].data().definition.label, "Unknown ~~");
        assert_eq!(text(&msg.dataset[0]), "whatever");
        assert!(!msg.is_schema_complete());
        assert_eq!(text(&msg.dataset[1]), "75001");
    }

    #[test]
    fn test_schema_complete() {
        assert!(tokenize("2475001").is_schema_complete());
    }

    #[test]
    fn test_single_trailing_character() {
        let msg = tokenize("2475001X");
        assert_eq!(msg.dataset.len(), 2);
        assert_eq!(msg.dataset[1].id(), "X");
    }

    #[test]
    fn test_empty_stream() {
        assert!(tokenize("").dataset.is_empty());
    }

    #[test]
    fn test_bad_value_names_field() {
        // 1C: contract date JJMMAAAA
        let err = Message::from_code(1, "1C99999999", &Definitions::builtin()).unwrap_err();
        assert!(matches!(err, DdocError::MalformedField { ref field, .. } if field == "1C"));
    }

    #[test]
    fn test_non_ascii_offsets_are_characters() {
        let msg = tokenize("13ÉLODIE\x1e2475001");
        assert_eq!(text(&msg.dataset[0]), "ÉLODIE");
        assert_eq!(text(&msg.dataset[1]), "75001");
    }

    #[test]
    fn test_encode() {
        let msg = tokenize("2475001\x1d10RUE A\x1e13DOE");
        assert_eq!(msg.encode().unwrap(), "247500110RUE A\x1d13DOE");
    }

    #[test]
    fn test_encode_uncatalogued_field() {
        let msg = tokenize("2475001\x1dZZfoo");
        assert!(!msg.is_schema_complete());
        assert_eq!(msg.encode().unwrap(), "2475001ZZfoo");
    }

    #[test]
    fn test_encode_rejects_invalid_values() {
        let msg = tokenize("13Doe");
        assert!(matches!(
            msg.encode(),
            Err(DdocError::MalformedField { field, .. }) if field == "13"
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fixed_field_consumes_exact_width(value in "[0-9]{5}", gs in any::<bool>(), tail in "[A-Z]{0,10}") {
            let defs = Definitions::builtin();
            let sep = if gs { "\x1d" } else { "" };
            let code: Vec<char> = format!("24{value}{sep}{tail}").chars().collect();
            let (entry, consumed) = extract(1, &code, &defs).unwrap();
            prop_assert!(matches!(entry, DataEntry::Fixed(_)));
            prop_assert_eq!(consumed, 7 + usize::from(gs));
        }

        #[test]
        fn variable_field_never_exceeds_cap(body in "[A-Z \x1d\x1e]{0,120}") {
            let defs = Definitions::builtin();
            let code: Vec<char> = format!("12{body}").chars().collect();
            let (entry, consumed) = extract(1, &code, &defs).unwrap();
            prop_assert!(entry.data().value.to_string().chars().count() <= 38);
            prop_assert!(consumed <= 2 + 38 + 1);
            prop_assert!(consumed > 0);
        }

        #[test]
        fn tokenizer_always_terminates(code in "\\PC{0,80}") {
            let defs = Definitions::new();
            let msg = Message::from_code(1, &code, &defs).unwrap();
            prop_assert!(msg.dataset.len() <= code.chars().count());
        }
    }
}
