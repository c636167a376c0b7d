//! # Signature Boundary
//!
//! The message remainder holds the field stream followed by the base32
//! signature. Producers do not agree on how to mark the boundary, so it is
//! searched with an ordered list of strategies; the first one yielding two
//! non-empty parts wins.

use serde::Serialize;

use ddoc_core::{base32, DdocError};

/// Unit separator, the explicit boundary marker.
pub const US: char = '\x1f';

/// Minimum base32 run recognised as a trailing signature.
const MIN_SIGNATURE_RUN: usize = 20;

/// One way of locating the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Explicit `0x1F`.
    UnitSeparator,
    /// A digit followed by at least 20 base32 characters up to the end;
    /// the digit opens the signature part.
    TrailingBase32,
    /// A literal `U`.
    LiteralU,
}

/// Strategies in priority order.
pub const STRATEGIES: [Boundary; 3] = [
    Boundary::UnitSeparator,
    Boundary::TrailingBase32,
    Boundary::LiteralU,
];

impl Boundary {
    /// Split `remainder` into `(data, signature)` if this strategy applies.
    /// The unit separator itself belongs to neither part, and anything after
    /// a second one is dropped.
    pub fn split(self, remainder: &str) -> Option<(&str, &str)> {
        let parts = match self {
            Self::UnitSeparator => remainder
                .split_once(US)
                .map(|(data, rest)| (data, rest.split_once(US).map_or(rest, |(sign, _)| sign))),
            Self::TrailingBase32 => trailing_base32(remainder),
            Self::LiteralU => remainder.split_once('U'),
        };
        parts.filter(|(data, sign)| !data.is_empty() && !sign.is_empty())
    }
}

fn trailing_base32(remainder: &str) -> Option<(&str, &str)> {
    let chars: Vec<(usize, char)> = remainder.char_indices().collect();
    let run_start = chars
        .iter()
        .rposition(|&(_, c)| !base32::is_alphabet(c))
        .map_or(0, |p| p + 1);
    chars
        .iter()
        .enumerate()
        .find(|&(i, &(_, c))| {
            c.is_ascii_digit() && i + 1 >= run_start && chars.len() - (i + 1) >= MIN_SIGNATURE_RUN
        })
        .map(|(_, &(offset, _))| remainder.split_at(offset))
}

/// Split with the first matching strategy.
pub fn split_signature(remainder: &str) -> Result<(Boundary, &str, &str), DdocError> {
    STRATEGIES
        .iter()
        .find_map(|&strategy| {
            strategy
                .split(remainder)
                .map(|(data, sign)| (strategy, data, sign))
        })
        .ok_or(DdocError::MissingSeparator)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIG: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

    #[test]
    fn test_unit_separator() {
        let remainder = format!("2475001\x1f{SIG}");
        assert_eq!(
            Boundary::UnitSeparator.split(&remainder),
            Some(("2475001", SIG))
        );
    }

    #[test]
    fn test_unit_separator_drops_text_after_second_separator() {
        let remainder = format!("2475001\x1f{SIG}\x1fMZXW6");
        assert_eq!(
            Boundary::UnitSeparator.split(&remainder),
            Some(("2475001", SIG))
        );
    }

    #[test]
    fn test_unit_separator_needs_both_parts() {
        assert_eq!(Boundary::UnitSeparator.split("\x1fABC"), None);
        assert_eq!(Boundary::UnitSeparator.split("ABC\x1f"), None);
    }

    #[test]
    fn test_trailing_base32_keeps_digit_in_signature() {
        let remainder = format!("10RUE A\x1d9{SIG}");
        assert_eq!(
            Boundary::TrailingBase32.split(&remainder),
            Some(("10RUE A\x1d", format!("9{SIG}").as_str()))
        );
    }

    #[test]
    fn test_trailing_base32_takes_leftmost_start() {
        // '2'..'7' are both digits and base32 letters
        let remainder = format!("ab0{SIG}");
        let (data, sign) = Boundary::TrailingBase32.split(&remainder).unwrap();
        assert_eq!(data, "ab");
        assert!(sign.starts_with('0'));

        let remainder = format!("ab3{SIG}");
        let (data, _) = Boundary::TrailingBase32.split(&remainder).unwrap();
        // '3' is itself base32; the split still lands before it
        assert_eq!(data, "ab");
    }

    #[test]
    fn test_trailing_base32_needs_twenty_characters() {
        assert_eq!(Boundary::TrailingBase32.split("xx1ABCDEFGHIJKLMNOPQRS"), None);
        assert!(Boundary::TrailingBase32.split("xx1ABCDEFGHIJKLMNOPQRST").is_some());
    }

    #[test]
    fn test_literal_u() {
        assert_eq!(Boundary::LiteralU.split("24750U01AB"), Some(("24750", "01AB")));
    }

    #[test]
    fn test_priority_order() {
        let remainder = format!("10RUE\x1f9{SIG}");
        let (strategy, data, _) = split_signature(&remainder).unwrap();
        assert_eq!(strategy, Boundary::UnitSeparator);
        assert_eq!(data, "10RUE");

        let remainder = format!("10RUE9{SIG}");
        let (strategy, data, _) = split_signature(&remainder).unwrap();
        assert_eq!(strategy, Boundary::TrailingBase32);
        assert_eq!(data, "10RUE");
    }

    #[test]
    fn test_falls_through_on_empty_part() {
        let (strategy, _, _) = split_signature("\x1f10AUBC").unwrap();
        assert_eq!(strategy, Boundary::LiteralU);
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            split_signature("2475001abc"),
            Err(DdocError::MissingSeparator)
        );
        assert_eq!(split_signature(""), Err(DdocError::MissingSeparator));
    }
}
