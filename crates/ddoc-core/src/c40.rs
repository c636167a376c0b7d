//! # C40 Character Packing
//!
//! C40 packs three small integer codes (each in `0..40`) into one 16-bit
//! codeword: `c1 * 1600 + c2 * 40 + c3 + 1`. Characters are mapped onto
//! those codes through four character sets. Set 0 is the basic set; codes
//! `0`, `1` and `2` in set 0 are one-shot shifts into sets 1, 2 and 3 for
//! the next symbol only.
//!
//! ## Decoding State Machine
//!
//! ```text
//!            code <= 2                 emit sets[s][code]
//!   Base ─────────────────▶ Shift(s) ──────────────────────▶ Base
//!     ▲                        │                      (unless locked)
//!     │   Shift(2), code 30    │
//!     └────────────────────────┘  sets the lock, emits nothing
//! ```
//!
//! Once locked, the next shift stays in effect for every following symbol.
//! The `[1, 30]` sequence is also what [`pack`] appends as tail padding, so
//! a padded stream decodes to no extra character.
//!
//! ## Byte Stream
//!
//! Codewords travel as big-endian byte pairs. The codeword `254` is an
//! explicit end-of-stream marker and never carries characters.
//!
//! Two flavours share the machine and differ only in sets 0 and 3:
//! [`Codec::c40`] is uppercase-biased, [`Codec::text`] is lowercase-biased.

use std::collections::HashMap;

use crate::error::CodecError;

/// End-of-stream codeword.
pub const TERMINATOR: u16 = 254;

/// Reserved glyph standing in for the FNC1 function character in set 2.
pub const FNC1: char = '\u{80}';

const SET0_C40: &str = " 0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SET0_OFFSET: u8 = 3;
const SET2: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_";
const SET3_C40: &str = "`abcdefghijklmnopqrstuvwxyz{|}~\x7f";

/// Shift-2 symbol that, following a shift into set 2, latches the machine.
const LOCK_CODE: u8 = 30;

/// The four ordered code → character tables of one flavour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSets {
    sets: [Vec<Option<char>>; 4],
}

impl CharacterSets {
    fn build(set0: &str, set3: &str) -> Self {
        let mut base = vec![None; SET0_OFFSET as usize];
        base.extend(set0.chars().map(Some));

        let controls = (0u8..32).map(|b| Some(char::from(b))).collect();

        let mut symbols: Vec<Option<char>> = SET2.chars().map(Some).collect();
        symbols.push(Some(FNC1));

        let shifted = set3.chars().map(Some).collect();

        Self {
            sets: [base, controls, symbols, shifted],
        }
    }

    /// Character for `code` in set `set`, if any.
    pub fn get(&self, set: u8, code: u8) -> Option<char> {
        self.sets
            .get(set as usize)
            .and_then(|s| s.get(code as usize))
            .copied()
            .flatten()
    }

    /// Inverse mapping: character → (set index, code).
    ///
    /// Later sets win on the (never occurring) duplicate.
    pub fn reverse(&self) -> HashMap<char, (u8, u8)> {
        let mut r = HashMap::new();
        for (set, table) in self.sets.iter().enumerate() {
            for (code, ch) in table.iter().enumerate() {
                if let Some(ch) = ch {
                    r.insert(*ch, (set as u8, code as u8));
                }
            }
        }
        r
    }
}

/// A C40-family codec: character sets plus their reverse mapping.
///
/// Built once and shared by reference; holds no per-call state.
#[derive(Debug, Clone)]
pub struct Codec {
    sets: CharacterSets,
    reverse: HashMap<char, (u8, u8)>,
}

impl Codec {
    fn with_sets(sets: CharacterSets) -> Self {
        let reverse = sets.reverse();
        Self { sets, reverse }
    }

    /// The C40 flavour: digits and uppercase in set 0, lowercase in set 3.
    pub fn c40() -> Self {
        Self::with_sets(CharacterSets::build(SET0_C40, SET3_C40))
    }

    /// The Text flavour: case-inverted relative to C40.
    pub fn text() -> Self {
        let set0 = SET0_C40.to_lowercase();
        let set3: String = SET3_C40.chars().map(|c| c.to_ascii_uppercase()).collect();
        Self::with_sets(CharacterSets::build(&set0, &set3))
    }

    /// The character tables of this flavour.
    pub fn sets(&self) -> &CharacterSets {
        &self.sets
    }

    /// Decode a big-endian codeword byte stream into text.
    pub fn parse(&self, bytes: &[u8]) -> Result<String, CodecError> {
        let codewords = stream_extract(bytes);
        let codes = unpack(&codewords);
        ascii_decode(&codes, &self.sets)
    }

    /// Encode text into a big-endian codeword byte stream (no terminator).
    pub fn format(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        let codes = text_encode(text, &self.reverse)?;
        Ok(stream_format(&pack(&codes)))
    }
}

/// Reinterpret byte pairs as big-endian codewords, stopping before the
/// first [`TERMINATOR`]. A dangling odd byte is ignored.
pub fn stream_extract(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .take_while(|&cw| cw != TERMINATOR)
        .collect()
}

/// Serialize codewords as big-endian byte pairs.
pub fn stream_format(codewords: &[u16]) -> Vec<u8> {
    codewords.iter().flat_map(|cw| cw.to_be_bytes()).collect()
}

/// Split each codeword into its three codes.
///
/// Codewords are expected in `1..=65533`. A zero codeword wraps around and
/// yields codes that no set maps, so the error surfaces at decode time.
pub fn unpack(codewords: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codewords.len() * 3);
    for &v in codewords {
        let v = u32::from(v.wrapping_sub(1));
        out.push((v / 1600) as u8);
        out.push(((v / 40) % 40) as u8);
        out.push((v % 40) as u8);
    }
    out
}

/// Pack codes (each below 40) three at a time into codewords.
///
/// A tail of two codes is padded with `0`; a tail of one code is padded
/// with the unlatch sequence `[1, 30]`.
pub fn pack(codes: &[u8]) -> Vec<u16> {
    let mut padded = codes.to_vec();
    match codes.len() % 3 {
        2 => padded.push(0),
        1 => padded.extend_from_slice(&[1, LOCK_CODE]),
        _ => {}
    }
    padded
        .chunks_exact(3)
        .map(|t| {
            let v = u32::from(t[0]) * 1600 + u32::from(t[1]) * 40 + u32::from(t[2]) + 1;
            v as u16
        })
        .collect()
}

/// Run the shift/lock machine over a code sequence.
pub fn ascii_decode(codes: &[u8], sets: &CharacterSets) -> Result<String, CodecError> {
    let mut shift = 0u8;
    let mut locked = false;
    let mut out = String::with_capacity(codes.len());

    for &code in codes {
        if shift == 0 && code <= 2 {
            shift = code + 1;
            continue;
        }
        if shift == 2 && code == LOCK_CODE {
            locked = true;
            shift = 0;
            continue;
        }
        let ch = sets
            .get(shift, code)
            .ok_or(CodecError::UnmappableCode { set: shift, code })?;
        out.push(ch);
        if !locked {
            shift = 0;
        }
    }

    Ok(out)
}

/// Map text onto codes, emitting a one-shot shift before every character
/// that lives outside set 0.
pub fn text_encode(text: &str, mapping: &HashMap<char, (u8, u8)>) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let &(set, code) = mapping.get(&ch).ok_or(CodecError::UnencodableChar(ch))?;
        if set != 0 {
            out.push(set - 1);
        }
        out.push(code);
    }
    Ok(out)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn encodable_char(codec: &Codec) -> impl Strategy<Value = char> {
        let pool: Vec<char> = codec.sets().reverse().into_keys().collect();
        proptest::sample::select(pool)
    }

    proptest! {
        #[test]
        fn text_encode_then_decode_is_identity(
            chars in prop::collection::vec(encodable_char(&Codec::c40()), 0..64)
        ) {
            let codec = Codec::c40();
            let text: String = chars.into_iter().collect();
            let codes = text_encode(&text, &codec.sets().reverse()).unwrap();
            prop_assert_eq!(ascii_decode(&codes, codec.sets()).unwrap(), text);
        }

        #[test]
        fn text_table_encode_then_decode_is_identity(
            chars in prop::collection::vec(encodable_char(&Codec::text()), 0..64)
        ) {
            let codec = Codec::text();
            let text: String = chars.into_iter().collect();
            let codes = text_encode(&text, &codec.sets().reverse()).unwrap();
            prop_assert_eq!(ascii_decode(&codes, codec.sets()).unwrap(), text);
        }

        #[test]
        fn lowercase_text_roundtrips_through_bytes(text in "[a-z0-9 ]{0,40}") {
            let codec = Codec::text();
            let bytes = codec.format(&text).unwrap();
            prop_assert_eq!(codec.parse(&bytes).unwrap(), text);
        }

        #[test]
        fn pack_inverts_unpack(cws in prop::collection::vec(1u16..=65533, 0..32)) {
            prop_assert_eq!(pack(&unpack(&cws)), cws);
        }

        #[test]
        fn format_inverts_extract(
            cws in prop::collection::vec(any::<u16>().prop_filter("terminator", |c| *c != TERMINATOR), 0..32)
        ) {
            let bytes = stream_format(&cws);
            prop_assert_eq!(stream_format(&stream_extract(&bytes)), bytes);
        }

        #[test]
        fn uppercase_text_roundtrips_through_bytes(text in "[A-Z0-9 ]{0,40}") {
            let codec = Codec::c40();
            let bytes = codec.format(&text).unwrap();
            prop_assert_eq!(codec.parse(&bytes).unwrap(), text);
        }
    }
}
