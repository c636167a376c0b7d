//! # Header Codec
//!
//! The fixed-position document header, in both physical forms:
//!
//! - **character mode**: `"DC"` + two version digits, then fixed-width
//!   text fields. Versions 1 to 4.
//! - **binary mode**: byte `0xDC`, a version byte (4 only), then C40-packed
//!   identifiers, packed dates and big-endian integers.
//!
//! | version | length | perimeter | country |
//! |---|---|---|---|
//! | 1, 2 | 22 | implicit 1 | implicit `FR` |
//! | 3 | 24 | 2 digits at 22 | implicit `FR` |
//! | 4, character | 26 | 2 digits at 22 | 2 chars at 24 |
//! | 4, binary | 19 bytes | `u16` at 17 | 3 C40 chars at 2 |
//!
//! [`Header::mode`] and [`Header::length`] are computed from the other
//! fields on every call and never stored.

use chrono::NaiveDate;
use serde::Serialize;

use ddoc_core::{temporal, Codec, DdocError, DocTypeId};

/// Marker opening a character-mode header.
pub const TEXT_MARKER: &str = "DC";
/// First byte of a binary-mode header.
pub const BINARY_MARKER: u8 = 0xDC;
/// Binary headers exist only in this version.
pub const BINARY_VERSION: u8 = 4;

const MAX_VERSION: u8 = 4;
const BINARY_LENGTH: usize = 19;
const DEFAULT_PERIMETER: u16 = 1;
const DEFAULT_COUNTRY: &str = "FR";

/// Physical serialization of a header and its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeaderMode {
    /// Character stream, C40-friendly text.
    #[serde(rename = "c40")]
    Character,
    /// Raw byte buffer.
    #[serde(rename = "bin")]
    Binary,
}

/// A decoded 2D-Doc header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Format version, 1 to 4.
    pub version: u8,
    /// Certification authority id (4 chars).
    pub ca_id: String,
    /// Certificate id (4 chars).
    pub cert_id: String,
    /// Document emission date.
    pub emit_date: NaiveDate,
    /// Signature creation date.
    pub sign_date: NaiveDate,
    /// Document type.
    pub doc_type_id: DocTypeId,
    /// Field catalog namespace.
    pub perimeter_id: u16,
    /// Two chars in character mode, three in binary mode.
    pub country_id: String,
}

fn malformed(reason: impl Into<String>) -> DdocError {
    DdocError::MalformedHeader(reason.into())
}

fn unsupported(version: u8) -> DdocError {
    malformed(format!("unsupported 2D-Doc version {version}"))
}

impl Header {
    /// Parse a header from the start of raw document bytes, detecting the
    /// physical form from the marker.
    pub fn parse(code: &[u8], c40: &Codec) -> Result<Self, DdocError> {
        if code.starts_with(TEXT_MARKER.as_bytes()) {
            let text = std::str::from_utf8(code)
                .map_err(|e| malformed(format!("header is not text: {e}")))?;
            Self::parse_text(text)
        } else if code.first() == Some(&BINARY_MARKER) {
            Self::parse_binary(code, c40)
        } else {
            Err(DdocError::NotADocument)
        }
    }

    /// Parse a character-mode header from the start of `code`.
    pub fn parse_text(code: &str) -> Result<Self, DdocError> {
        let slice = |start: usize, end: usize| {
            code.get(start..end)
                .ok_or_else(|| malformed(format!("header truncated before offset {end}")))
        };

        if slice(0, 2)? != TEXT_MARKER {
            return Err(DdocError::NotADocument);
        }
        let version_digits = slice(2, 4)?;
        let version: u8 = version_digits
            .parse()
            .ok()
            .filter(|_| version_digits.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| malformed(format!("invalid version {version_digits:?}")))?;
        if !(1..=MAX_VERSION).contains(&version) {
            return Err(unsupported(version));
        }

        let date = |start: usize| -> Result<NaiveDate, DdocError> {
            let digits = slice(start, start + 4)?;
            temporal::day_offset_decode(digits).map_err(|e| malformed(e.to_string()))
        };

        let perimeter_id = if version >= 3 {
            let digits = slice(22, 24)?;
            digits
                .parse()
                .ok()
                .filter(|_| digits.bytes().all(|b| b.is_ascii_digit()))
                .ok_or_else(|| malformed(format!("invalid perimeter {digits:?}")))?
        } else {
            DEFAULT_PERIMETER
        };
        let country_id = if version >= 4 {
            slice(24, 26)?.to_string()
        } else {
            DEFAULT_COUNTRY.to_string()
        };

        Ok(Self {
            version,
            ca_id: slice(4, 8)?.to_string(),
            cert_id: slice(8, 12)?.to_string(),
            emit_date: date(12)?,
            sign_date: date(16)?,
            doc_type_id: DocTypeId::Code(slice(20, 22)?.to_string()),
            perimeter_id,
            country_id,
        })
    }

    /// Parse a binary-mode header from the start of `code`.
    pub fn parse_binary(code: &[u8], c40: &Codec) -> Result<Self, DdocError> {
        if code.first() != Some(&BINARY_MARKER) {
            return Err(DdocError::NotADocument);
        }
        if code.len() < BINARY_LENGTH {
            return Err(malformed(format!(
                "binary header needs {BINARY_LENGTH} bytes, got {}",
                code.len()
            )));
        }
        let version = code[1];
        if version != BINARY_VERSION {
            return Err(unsupported(version));
        }

        let country_id = c40.parse(&code[2..4])?;
        if country_id.chars().count() != 3 {
            return Err(malformed(format!("invalid binary country id {country_id:?}")));
        }
        let ca_cert: Vec<char> = c40.parse(&code[4..10])?.chars().collect();
        if ca_cert.len() < 4 {
            return Err(malformed("truncated certificate ids"));
        }
        let date = |start: usize| {
            temporal::packed_decode([code[start], code[start + 1], code[start + 2]])
                .map_err(|e| malformed(e.to_string()))
        };

        Ok(Self {
            version,
            ca_id: ca_cert[..4].iter().collect(),
            cert_id: ca_cert[4..].iter().collect(),
            emit_date: date(10)?,
            sign_date: date(13)?,
            doc_type_id: DocTypeId::Byte(code[16]),
            perimeter_id: u16::from_be_bytes([code[17], code[18]]),
            country_id,
        })
    }

    /// Physical form, from the country id length.
    pub fn mode(&self) -> Result<HeaderMode, DdocError> {
        match self.country_id.chars().count() {
            2 => Ok(HeaderMode::Character),
            3 => Ok(HeaderMode::Binary),
            n => Err(malformed(format!("invalid country id length {n}"))),
        }
    }

    /// Header size in characters (or bytes in binary mode); the message
    /// starts right after it.
    pub fn length(&self) -> Result<usize, DdocError> {
        match (self.version, self.mode()?) {
            (1 | 2, _) => Ok(22),
            (3, _) => Ok(24),
            (4, HeaderMode::Character) => Ok(26),
            (4, HeaderMode::Binary) => Ok(BINARY_LENGTH),
            (v, _) => Err(unsupported(v)),
        }
    }

    /// Serialize a character-mode header.
    pub fn to_code(&self) -> Result<String, DdocError> {
        if self.mode()? != HeaderMode::Character {
            return Err(malformed("binary header has no text form"));
        }
        if !(1..=MAX_VERSION).contains(&self.version) {
            return Err(unsupported(self.version));
        }
        let DocTypeId::Code(doc_type) = &self.doc_type_id else {
            return Err(malformed("character header needs a two-character doctype"));
        };
        for (name, value, width) in [
            ("ca id", self.ca_id.as_str(), 4),
            ("cert id", self.cert_id.as_str(), 4),
            ("doctype", doc_type.as_str(), 2),
        ] {
            if value.chars().count() != width {
                return Err(malformed(format!("{name} must be {width} characters")));
            }
        }

        let date = |d: NaiveDate| temporal::day_offset_encode(d).map_err(|e| malformed(e.to_string()));
        let mut code = format!(
            "{TEXT_MARKER}{:02}{}{}{}{}{}",
            self.version,
            self.ca_id,
            self.cert_id,
            date(self.emit_date)?,
            date(self.sign_date)?,
            doc_type,
        );
        if self.version >= 3 {
            if self.perimeter_id > 99 {
                return Err(malformed(format!(
                    "perimeter {} does not fit two digits",
                    self.perimeter_id
                )));
            }
            code.push_str(&format!("{:02}", self.perimeter_id));
        }
        if self.version >= 4 {
            code.push_str(&self.country_id);
        }
        Ok(code)
    }

    /// Serialize in the header's own physical form.
    pub fn encode(&self, c40: &Codec) -> Result<Vec<u8>, DdocError> {
        match self.mode()? {
            HeaderMode::Character => Ok(self.to_code()?.into_bytes()),
            HeaderMode::Binary => self.encode_binary(c40),
        }
    }

    fn encode_binary(&self, c40: &Codec) -> Result<Vec<u8>, DdocError> {
        if self.version != BINARY_VERSION {
            return Err(unsupported(self.version));
        }
        let DocTypeId::Byte(doc_type) = self.doc_type_id else {
            return Err(malformed("binary header needs a one-byte doctype"));
        };
        let country = c40.format(&self.country_id)?;
        let ca_cert = c40.format(&format!("{}{}", self.ca_id, self.cert_id))?;
        if country.len() != 2 || ca_cert.len() != 6 {
            return Err(malformed("identifiers do not fit their binary slots"));
        }
        let date = |d: NaiveDate| temporal::packed_encode(d).map_err(|e| malformed(e.to_string()));

        let mut out = Vec::with_capacity(BINARY_LENGTH);
        out.push(BINARY_MARKER);
        out.push(self.version);
        out.extend_from_slice(&country);
        out.extend_from_slice(&ca_cert);
        out.extend_from_slice(&date(self.emit_date)?);
        out.extend_from_slice(&date(self.sign_date)?);
        out.push(doc_type);
        out.extend_from_slice(&self.perimeter_id.to_be_bytes());
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_version_3() {
        let header = Header::parse_text("DC03FR01AB12122F122F0101").unwrap();
        assert_eq!(header.version, 3);
        assert_eq!(header.ca_id, "FR01");
        assert_eq!(header.cert_id, "AB12");
        assert_eq!(header.emit_date, ymd(2012, 9, 29));
        assert_eq!(header.doc_type_id, DocTypeId::from("01"));
        assert_eq!(header.perimeter_id, 1);
        assert_eq!(header.country_id, "FR");
        assert_eq!(header.mode().unwrap(), HeaderMode::Character);
        assert_eq!(header.length().unwrap(), 24);
    }

    #[test]
    fn test_parse_version_2_defaults() {
        let header = Header::parse_text("DC02FR000001125E125B0126").unwrap();
        assert_eq!(header.perimeter_id, 1);
        assert_eq!(header.country_id, "FR");
        assert_eq!(header.length().unwrap(), 22);
    }

    #[test]
    fn test_parse_version_4_country() {
        let header = Header::parse_text("DC04FR05ABCD1E3C1E3CA701BE").unwrap();
        assert_eq!(header.country_id, "BE");
        assert_eq!(header.doc_type_id, DocTypeId::from("A7"));
        assert_eq!(header.length().unwrap(), 26);
    }

    #[test]
    fn test_version_09_is_malformed() {
        let err = Header::parse(b"DC09FR01AB12122F122F0101", &Codec::c40()).unwrap_err();
        assert!(matches!(err, DdocError::MalformedHeader(_)), "{err}");
    }

    #[test]
    fn test_non_digit_version_is_malformed() {
        assert!(matches!(
            Header::parse_text("DC+3FR01AB12122F122F0101"),
            Err(DdocError::MalformedHeader(_))
        ));
    }

    #[test]
    fn test_truncated_header() {
        assert!(matches!(
            Header::parse_text("DC03FR01AB12122F"),
            Err(DdocError::MalformedHeader(_))
        ));
    }

    #[test]
    fn test_not_a_document() {
        assert_eq!(
            Header::parse(b"XX03FR01", &Codec::c40()),
            Err(DdocError::NotADocument)
        );
        assert_eq!(Header::parse(b"", &Codec::c40()), Err(DdocError::NotADocument));
    }

    #[test]
    fn test_mode_rejects_bad_country_length() {
        let mut header = Header::parse_text("DC03FR01AB12122F122F0101").unwrap();
        header.country_id = "FRAN".into();
        assert!(header.mode().is_err());
        assert!(header.length().is_err());
    }

    #[test]
    fn test_length_follows_mutation() {
        let mut header = Header::parse_text("DC03FR01AB12122F122F0101").unwrap();
        header.version = 4;
        header.country_id = "FR".into();
        assert_eq!(header.length().unwrap(), 26);
        header.country_id = "FRA".into();
        assert_eq!(header.length().unwrap(), 19);
    }

    #[test]
    fn test_binary_roundtrip() {
        let c40 = Codec::c40();
        let header = Header {
            version: 4,
            ca_id: "FR03".into(),
            cert_id: "0A1B".into(),
            emit_date: ymd(2021, 3, 15),
            sign_date: ymd(2021, 3, 16),
            doc_type_id: DocTypeId::Byte(0x07),
            perimeter_id: 0x0102,
            country_id: "FRA".into(),
        };
        let bytes = header.encode(&c40).unwrap();
        assert_eq!(bytes.len(), 19);
        assert_eq!(bytes[0], BINARY_MARKER);
        assert_eq!(&bytes[17..19], &[0x01, 0x02]);
        let parsed = Header::parse(&bytes, &c40).unwrap();
        assert_eq!(parsed, header);
        assert_eq!(parsed.mode().unwrap(), HeaderMode::Binary);
    }

    #[test]
    fn test_binary_rejects_other_versions() {
        let mut bytes = vec![BINARY_MARKER, 3];
        bytes.resize(19, 0);
        assert!(matches!(
            Header::parse(&bytes, &Codec::c40()),
            Err(DdocError::MalformedHeader(_))
        ));
    }

    #[test]
    fn test_binary_too_short() {
        assert!(matches!(
            Header::parse(&[BINARY_MARKER, 4, 0], &Codec::c40()),
            Err(DdocError::MalformedHeader(_))
        ));
    }

    #[test]
    fn test_to_code_rejects_wide_perimeter() {
        let mut header = Header::parse_text("DC03FR01AB12122F122F0101").unwrap();
        header.perimeter_id = 100;
        assert!(header.to_code().is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::Days;
    use proptest::prelude::*;

    fn date(max_days: u64) -> impl Strategy<Value = NaiveDate> {
        (0..=max_days).prop_map(|d| temporal::epoch() + Days::new(d))
    }

    prop_compose! {
        fn character_header()(
            version in 1u8..=4,
            ca_id in "[A-Z0-9]{4}",
            cert_id in "[A-Z0-9]{4}",
            emit_date in date(0xFFFF),
            sign_date in date(0xFFFF),
            doc_type in "[A-Z0-9]{2}",
            perimeter in 0u16..100,
            country in "[A-Z]{2}",
        ) -> Header {
            Header {
                version,
                ca_id,
                cert_id,
                emit_date,
                sign_date,
                doc_type_id: DocTypeId::Code(doc_type),
                perimeter_id: if version >= 3 { perimeter } else { 1 },
                country_id: if version >= 4 { country } else { "FR".to_string() },
            }
        }
    }

    prop_compose! {
        fn binary_header()(
            ca_id in "[A-Z0-9]{4}",
            cert_id in "[A-Z0-9]{4}",
            emit_date in date(2_900_000),
            sign_date in date(2_900_000),
            doc_type in any::<u8>(),
            perimeter in any::<u16>(),
            country in "[A-Z0-9]{3}",
        ) -> Header {
            Header {
                version: 4,
                ca_id,
                cert_id,
                emit_date,
                sign_date,
                doc_type_id: DocTypeId::Byte(doc_type),
                perimeter_id: perimeter,
                country_id: country,
            }
        }
    }

    proptest! {
        #[test]
        fn character_header_roundtrip(header in character_header()) {
            let code = header.to_code().unwrap();
            prop_assert_eq!(code.len(), header.length().unwrap());
            prop_assert_eq!(Header::parse_text(&code).unwrap(), header);
        }

        #[test]
        fn binary_header_roundtrip(header in binary_header()) {
            let c40 = Codec::c40();
            let bytes = header.encode(&c40).unwrap();
            prop_assert_eq!(bytes.len(), header.length().unwrap());
            prop_assert_eq!(Header::parse(&bytes, &c40).unwrap(), header);
        }
    }
}
