//! # Base32 (RFC 4648 alphabet)
//!
//! Signatures and some field values travel base32-encoded. Decoding is
//! lenient the way barcode payloads need: case-insensitive, characters
//! outside the alphabet are skipped and `=` ends the data. Encoding emits
//! no padding.

/// The RFC 4648 base32 alphabet.
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Whether `c` belongs to the (uppercase) base32 alphabet.
pub fn is_alphabet(c: char) -> bool {
    c.is_ascii_uppercase() || ('2'..='7').contains(&c)
}

fn index_of(c: char) -> Option<u32> {
    let c = c.to_ascii_uppercase();
    match c {
        'A'..='Z' => Some(c as u32 - 'A' as u32),
        '2'..='7' => Some(c as u32 - '2' as u32 + 26),
        _ => None,
    }
}

/// Decode base32 text into bytes. Trailing bits that do not complete a
/// byte are dropped.
pub fn decode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits = 0u32;

    for c in text.chars() {
        if c == '=' {
            break;
        }
        let Some(index) = index_of(c) else {
            continue;
        };
        buffer = (buffer << 5) | index;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    out
}

/// Encode bytes as unpadded base32.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity((bytes.len() * 8).div_ceil(5));
    let mut buffer: u32 = 0;
    let mut bits = 0u32;

    for &b in bytes {
        buffer = (buffer << 8) | u32::from(b);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((buffer >> bits) & 0x1F) as usize] as char);
        }
        buffer &= (1 << bits) - 1;
    }
    if bits > 0 {
        out.push(ALPHABET[((buffer << (5 - bits)) & 0x1F) as usize] as char);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4648_vectors() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "MY");
        assert_eq!(encode(b"fo"), "MZXQ");
        assert_eq!(encode(b"foo"), "MZXW6");
        assert_eq!(encode(b"foob"), "MZXW6YQ");
        assert_eq!(encode(b"fooba"), "MZXW6YTB");
        assert_eq!(encode(b"foobar"), "MZXW6YTBOI");
    }

    #[test]
    fn test_decode_vectors() {
        assert_eq!(decode("MZXW6YTBOI======"), b"foobar");
        assert_eq!(decode("MZXW6YQ="), b"foob");
    }

    #[test]
    fn test_decode_is_lenient() {
        assert_eq!(decode("mzxw6"), b"foo");
        assert_eq!(decode("MZ-XW\x1f6"), b"foo");
    }

    #[test]
    fn test_decode_stops_at_padding() {
        assert_eq!(decode("MY=MZXW6"), b"f");
    }

    #[test]
    fn test_alphabet_membership() {
        assert!(is_alphabet('A'));
        assert!(is_alphabet('7'));
        assert!(!is_alphabet('1'));
        assert!(!is_alphabet('8'));
        assert!(!is_alphabet('a'));
    }

    #[test]
    fn test_roundtrip_binary() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        assert_eq!(decode(&encode(&bytes)), bytes);
    }
}
