//! # Field Value Sub-Codecs
//!
//! Every catalogued field carries a [`FieldCodec`] turning its raw text into
//! a typed [`FieldValue`] and back. The set is closed: text alphabets that
//! differ only by allowed characters and pad rule are folded into
//! [`TextFormat`] rather than modelled as separate codecs.
//!
//! Parsing is tolerant: it strips padding and decodes, but does not reject
//! characters outside the declared alphabet (real-world producers do not
//! respect them). Serialization is strict and enforces both the alphabet
//! and the size bounds.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ddoc_core::error::DateError;
use ddoc_core::{base32, temporal};

/// Error raised by a sub-codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The value variant does not match the codec.
    #[error("expected a {expected} value, got {actual}")]
    WrongKind {
        /// Kind the codec works with.
        expected: &'static str,
        /// Kind that was supplied.
        actual: &'static str,
    },

    /// Serialized text is shorter than the declared minimum.
    #[error("too small: {len} < {min}")]
    TooSmall {
        /// Serialized length in characters.
        len: usize,
        /// Declared minimum.
        min: usize,
    },

    /// Serialized text is longer than the declared maximum.
    #[error("too long: {len} > {max}")]
    TooLong {
        /// Serialized length in characters.
        len: usize,
        /// Declared maximum.
        max: usize,
    },

    /// Character outside the field alphabet.
    #[error("character {0:?} not allowed")]
    DisallowedChar(char),

    /// Raw text is not a number in the expected radix.
    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    /// Date or time component error.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Allowed alphabet and pad rule of a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextFormat {
    /// Any character.
    Any,
    /// `[A-Z]`
    Az,
    /// `[A-Z0-9]`
    Az09,
    /// `[A-Z ]`
    AzSp,
    /// `[A-Z0-9 ]`
    Az09Sp,
    /// `[A-Z0-9 /]`
    Az09SpSl,
    /// `[A-Z /]`
    AzSpSl,
    /// `[A-Z0-9-]`
    Az09Dash,
    /// `[A-Z0-9/-]`
    Az09DashSl,
    /// `[A-Z0-9@' -]`
    Az09SpAtDash,
    /// `[0-9]`
    Numeric,
    /// `[0-9]`, left-padded with `0`.
    NumericPadded,
    /// `[0-9 ]`
    NumericSp,
    /// `[0-9/]`
    NumericSl,
    /// `[0-9A-F -]`, left-padded with `0`.
    Hex,
    /// `[0-9.-]`, left-padded with `0`.
    Decimal,
    /// `[0-9 ]`, left-padded with spaces.
    Phone,
}

impl TextFormat {
    /// Whether `c` belongs to this alphabet.
    pub fn allows(self, c: char) -> bool {
        let upper = c.is_ascii_uppercase();
        let digit = c.is_ascii_digit();
        match self {
            Self::Any => true,
            Self::Az => upper,
            Self::Az09 => upper || digit,
            Self::AzSp => upper || c == ' ',
            Self::Az09Sp => upper || digit || c == ' ',
            Self::Az09SpSl => upper || digit || c == ' ' || c == '/',
            Self::AzSpSl => upper || c == ' ' || c == '/',
            Self::Az09Dash => upper || digit || c == '-',
            Self::Az09DashSl => upper || digit || c == '-' || c == '/',
            Self::Az09SpAtDash => upper || digit || matches!(c, '@' | '\'' | ' ' | '-'),
            Self::Numeric | Self::NumericPadded => digit,
            Self::NumericSp | Self::Phone => digit || c == ' ',
            Self::NumericSl => digit || c == '/',
            Self::Hex => matches!(c, '0'..='9' | 'A'..='F' | ' ' | '-'),
            Self::Decimal => digit || c == '.' || c == '-',
        }
    }

    /// Leading pad character, if the format is left-padded.
    pub fn pad(self) -> Option<char> {
        match self {
            Self::NumericPadded | Self::Hex | Self::Decimal => Some('0'),
            Self::Phone => Some(' '),
            _ => None,
        }
    }
}

/// Value sub-codec selected by a field definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCodec {
    /// Plain text constrained to an alphabet.
    Text(TextFormat),
    /// Four hex digits counting days since 2000-01-01.
    Date4,
    /// `"1"` is true, anything else false.
    Boolean,
    /// `JJMMAAAA`
    DayMonthYear,
    /// `JJMMAAAAHHMM`
    DateTime,
    /// Hexadecimal integer.
    HexInt,
    /// `HHMMSS`
    Time6,
    /// `HHMM`
    HourMinute,
    /// Base32-encoded text.
    Base32,
    /// Base36 integer.
    Base36,
}

/// Typed value of a decoded field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text, including decoded base32 payloads.
    Text(String),
    /// Calendar date.
    Date(NaiveDate),
    /// Date with time of day.
    DateTime(NaiveDateTime),
    /// Time of day.
    Time(NaiveTime),
    /// Flag.
    Bool(bool),
    /// Unsigned integer (hex or base36 fields).
    Integer(u64),
}

impl FieldValue {
    /// Short name of the variant, used in reports and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Date(_) => "date",
            Self::DateTime(_) => "datetime",
            Self::Time(_) => "time",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{d}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
            Self::Time(t) => write!(f, "{t}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl FieldCodec {
    /// Decode raw field text.
    pub fn parse(&self, raw: &str) -> Result<FieldValue, ValueError> {
        Ok(match self {
            Self::Text(format) => {
                let text = match format.pad() {
                    Some(pad) => raw.trim_start_matches(pad),
                    None => raw,
                };
                FieldValue::Text(text.to_string())
            }
            Self::Date4 => FieldValue::Date(temporal::day_offset_decode(raw)?),
            Self::Boolean => FieldValue::Bool(raw == "1"),
            Self::DayMonthYear => FieldValue::Date(temporal::day_month_year_decode(raw)?),
            Self::DateTime => FieldValue::DateTime(temporal::date_time_decode(raw)?),
            Self::HexInt => FieldValue::Integer(parse_radix(raw, 16)?),
            Self::Time6 => FieldValue::Time(temporal::time6_decode(raw)?),
            Self::HourMinute => FieldValue::Time(temporal::hour_minute_decode(raw)?),
            Self::Base32 => {
                FieldValue::Text(String::from_utf8_lossy(&base32::decode(raw)).into_owned())
            }
            Self::Base36 => FieldValue::Integer(parse_radix(raw, 36)?),
        })
    }

    /// Encode a value into raw field text within `size_min..=size_max`.
    pub fn serialize(
        &self,
        value: &FieldValue,
        size_min: usize,
        size_max: Option<usize>,
    ) -> Result<String, ValueError> {
        let fixed = (size_max == Some(size_min)).then_some(size_min);
        let text = match (self, value) {
            (Self::Text(format), FieldValue::Text(text)) => {
                if let Some(bad) = text.chars().find(|c| !format.allows(*c)) {
                    return Err(ValueError::DisallowedChar(bad));
                }
                match (fixed, format.pad()) {
                    (Some(width), Some(pad)) => pad_start(text, width, pad),
                    _ => text.clone(),
                }
            }
            (Self::Date4, FieldValue::Date(d)) => temporal::day_offset_encode(*d)?,
            (Self::Boolean, FieldValue::Bool(b)) => if *b { "1" } else { "0" }.to_string(),
            (Self::DayMonthYear, FieldValue::Date(d)) => temporal::day_month_year_encode(*d),
            (Self::DateTime, FieldValue::DateTime(dt)) => temporal::date_time_encode(*dt),
            (Self::HexInt, FieldValue::Integer(n)) => {
                let hex = format!("{n:X}");
                match fixed {
                    Some(width) => pad_start(&hex, width, '0'),
                    None => hex,
                }
            }
            (Self::Time6, FieldValue::Time(t)) => temporal::time6_encode(*t),
            (Self::HourMinute, FieldValue::Time(t)) => temporal::hour_minute_encode(*t),
            (Self::Base32, FieldValue::Text(text)) => base32::encode(text.as_bytes()),
            (Self::Base36, FieldValue::Integer(n)) => to_base36(*n),
            (codec, value) => {
                return Err(ValueError::WrongKind {
                    expected: codec.value_kind(),
                    actual: value.kind(),
                })
            }
        };

        let len = text.chars().count();
        if len < size_min {
            return Err(ValueError::TooSmall { len, min: size_min });
        }
        if let Some(max) = size_max {
            if len > max {
                return Err(ValueError::TooLong { len, max });
            }
        }
        Ok(text)
    }

    /// Kind of [`FieldValue`] this codec produces.
    pub fn value_kind(&self) -> &'static str {
        match self {
            Self::Text(_) | Self::Base32 => "text",
            Self::Date4 | Self::DayMonthYear => "date",
            Self::DateTime => "datetime",
            Self::Time6 | Self::HourMinute => "time",
            Self::Boolean => "bool",
            Self::HexInt | Self::Base36 => "integer",
        }
    }
}

fn parse_radix(raw: &str, radix: u32) -> Result<u64, ValueError> {
    u64::from_str_radix(raw, radix).map_err(|_| ValueError::InvalidNumber(raw.to_string()))
}

fn pad_start(text: &str, width: usize, pad: char) -> String {
    let len = text.chars().count();
    let mut out: String = std::iter::repeat(pad).take(width.saturating_sub(len)).collect();
    out.push_str(text);
    out
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn test_padded_numeric_strips_and_restores_zeros() {
        let codec = FieldCodec::Text(TextFormat::NumericPadded);
        assert_eq!(codec.parse("00042").unwrap(), text("42"));
        assert_eq!(codec.serialize(&text("42"), 5, Some(5)).unwrap(), "00042");
    }

    #[test]
    fn test_phone_pads_with_spaces() {
        let codec = FieldCodec::Text(TextFormat::Phone);
        assert_eq!(codec.parse("  0123").unwrap(), text("0123"));
        assert_eq!(codec.serialize(&text("12"), 4, Some(4)).unwrap(), "  12");
    }

    #[test]
    fn test_variable_text_is_not_padded() {
        let codec = FieldCodec::Text(TextFormat::Decimal);
        assert_eq!(codec.serialize(&text("12.5"), 0, Some(16)).unwrap(), "12.5");
    }

    #[test]
    fn test_parse_tolerates_alphabet_violations() {
        let codec = FieldCodec::Text(TextFormat::AzSp);
        assert_eq!(codec.parse("Dupont 2").unwrap(), text("Dupont 2"));
    }

    #[test]
    fn test_serialize_enforces_alphabet() {
        let codec = FieldCodec::Text(TextFormat::AzSp);
        assert_eq!(
            codec.serialize(&text("DUPONT 2"), 0, Some(38)),
            Err(ValueError::DisallowedChar('2'))
        );
        let codec = FieldCodec::Text(TextFormat::Az09SpAtDash);
        assert!(codec.serialize(&text("A@B-C'D 1"), 0, None).is_ok());
    }

    #[test]
    fn test_serialize_enforces_size_bounds() {
        let codec = FieldCodec::Text(TextFormat::Az09);
        assert_eq!(
            codec.serialize(&text("ABC"), 8, Some(11)),
            Err(ValueError::TooSmall { len: 3, min: 8 })
        );
        assert_eq!(
            codec.serialize(&text("ABCDEFGHIJKL"), 8, Some(11)),
            Err(ValueError::TooLong { len: 12, max: 11 })
        );
    }

    #[test]
    fn test_date4() {
        let value = FieldCodec::Date4.parse("122F").unwrap();
        assert_eq!(value.to_string(), "2012-09-29");
        assert_eq!(FieldCodec::Date4.serialize(&value, 4, Some(4)).unwrap(), "122F");
    }

    #[test]
    fn test_boolean() {
        assert_eq!(FieldCodec::Boolean.parse("1").unwrap(), FieldValue::Bool(true));
        assert_eq!(FieldCodec::Boolean.parse("0").unwrap(), FieldValue::Bool(false));
        assert_eq!(
            FieldCodec::Boolean.serialize(&FieldValue::Bool(true), 1, Some(1)).unwrap(),
            "1"
        );
    }

    #[test]
    fn test_day_month_year_rejects_garbage() {
        assert!(FieldCodec::DayMonthYear.parse("31022020").is_err());
        assert!(FieldCodec::DayMonthYear.parse("ABCDEFGH").is_err());
    }

    #[test]
    fn test_hex_int_pads_fixed_width() {
        let value = FieldCodec::HexInt.parse("00FF").unwrap();
        assert_eq!(value, FieldValue::Integer(255));
        assert_eq!(FieldCodec::HexInt.serialize(&value, 4, Some(4)).unwrap(), "00FF");
        assert_eq!(FieldCodec::HexInt.serialize(&value, 0, None).unwrap(), "FF");
    }

    #[test]
    fn test_base32_text() {
        assert_eq!(FieldCodec::Base32.parse("MZXW6").unwrap(), text("foo"));
        assert_eq!(FieldCodec::Base32.serialize(&text("foo"), 0, None).unwrap(), "MZXW6");
    }

    #[test]
    fn test_base36() {
        let value = FieldCodec::Base36.parse("ZZ").unwrap();
        assert_eq!(value, FieldValue::Integer(36 * 36 - 1));
        assert_eq!(FieldCodec::Base36.serialize(&value, 0, None).unwrap(), "ZZ");
        assert!(FieldCodec::Base36.parse("").is_err());
    }

    #[test]
    fn test_wrong_kind() {
        let err = FieldCodec::Date4.serialize(&text("x"), 4, Some(4)).unwrap_err();
        assert_eq!(
            err,
            ValueError::WrongKind {
                expected: "date",
                actual: "text"
            }
        );
    }

    #[test]
    fn test_values_serialize_untagged() {
        let json = serde_json::to_string(&FieldCodec::Time6.parse("143000").unwrap()).unwrap();
        assert_eq!(json, "\"14:30:00\"");
        let json = serde_json::to_string(&FieldValue::Integer(7)).unwrap();
        assert_eq!(json, "7");
    }
}
