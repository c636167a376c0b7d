//! # Temporal Encodings
//!
//! 2D-Doc carries calendar values in several compact forms:
//!
//! | form | width | meaning |
//! |------|-------|---------|
//! | day offset | 4 hex chars | days elapsed since 2000-01-01 |
//! | packed | 3 bytes, big-endian | `month * 1_000_000 + day * 10_000 + year` |
//! | `JJMMAAAA` | 8 digits | day, month, year |
//! | `JJMMAAAAHHMM` | 12 digits | day, month, year, hour, minute |
//! | `HHMMSS` / `HHMM` | 6 / 4 digits | time of day |
//!
//! All values are naive (no time zone): the format carries none.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::DateError;

/// Day zero of the hex day-offset encoding.
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Largest day offset representable with four hex digits.
const MAX_DAY_OFFSET: i64 = 0xFFFF;

/// Decode a hex day offset (`"0000"` is 2000-01-01).
pub fn day_offset_decode(text: &str) -> Result<NaiveDate, DateError> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(DateError::InvalidDigits(text.to_string()));
    }
    let days = u64::from_str_radix(text, 16).map_err(|_| DateError::InvalidDigits(text.to_string()))?;
    epoch()
        .checked_add_days(Days::new(days))
        .ok_or_else(|| DateError::OutOfRange(text.to_string()))
}

/// Encode a date as a four-digit uppercase hex day offset.
pub fn day_offset_encode(date: NaiveDate) -> Result<String, DateError> {
    let days = date.signed_duration_since(epoch()).num_days();
    if !(0..=MAX_DAY_OFFSET).contains(&days) {
        return Err(DateError::OutOfRange(date.to_string()));
    }
    Ok(format!("{days:04X}"))
}

/// Decode the three-byte packed date of binary headers.
pub fn packed_decode(bytes: [u8; 3]) -> Result<NaiveDate, DateError> {
    let v = u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]);
    let year = v % 10_000;
    let month = v / 1_000_000;
    let day = (v / 10_000) % 100;
    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| DateError::InvalidCalendar(format!("packed {v}")))
}

/// Encode a date into the three-byte packed form.
pub fn packed_encode(date: NaiveDate) -> Result<[u8; 3], DateError> {
    use chrono::Datelike;

    let year = u32::try_from(date.year())
        .ok()
        .filter(|y| *y < 10_000)
        .ok_or_else(|| DateError::OutOfRange(date.to_string()))?;
    let v = date.month() * 1_000_000 + date.day() * 10_000 + year;
    let [_, a, b, c] = v.to_be_bytes();
    Ok([a, b, c])
}

fn digits(text: &str, start: usize, len: usize) -> Result<u32, DateError> {
    let part = text
        .get(start..start + len)
        .filter(|p| p.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| DateError::InvalidDigits(text.to_string()))?;
    part.parse()
        .map_err(|_| DateError::InvalidDigits(text.to_string()))
}

fn exact_len(text: &str, len: usize) -> Result<(), DateError> {
    if text.len() == len && text.is_ascii() {
        Ok(())
    } else {
        Err(DateError::InvalidDigits(text.to_string()))
    }
}

/// Decode `JJMMAAAA`.
pub fn day_month_year_decode(text: &str) -> Result<NaiveDate, DateError> {
    exact_len(text, 8)?;
    let (d, m, y) = (digits(text, 0, 2)?, digits(text, 2, 2)?, digits(text, 4, 4)?);
    NaiveDate::from_ymd_opt(y as i32, m, d).ok_or_else(|| DateError::InvalidCalendar(text.to_string()))
}

/// Encode `JJMMAAAA`.
pub fn day_month_year_encode(date: NaiveDate) -> String {
    date.format("%d%m%Y").to_string()
}

/// Decode `JJMMAAAAHHMM`.
pub fn date_time_decode(text: &str) -> Result<NaiveDateTime, DateError> {
    exact_len(text, 12)?;
    let date = day_month_year_decode(&text[..8])?;
    let time = hour_minute_decode(&text[8..])?;
    Ok(date.and_time(time))
}

/// Encode `JJMMAAAAHHMM`.
pub fn date_time_encode(value: NaiveDateTime) -> String {
    value.format("%d%m%Y%H%M").to_string()
}

/// Decode `HHMMSS`.
pub fn time6_decode(text: &str) -> Result<NaiveTime, DateError> {
    exact_len(text, 6)?;
    let (h, m, s) = (digits(text, 0, 2)?, digits(text, 2, 2)?, digits(text, 4, 2)?);
    NaiveTime::from_hms_opt(h, m, s).ok_or_else(|| DateError::InvalidCalendar(text.to_string()))
}

/// Encode `HHMMSS`.
pub fn time6_encode(value: NaiveTime) -> String {
    value.format("%H%M%S").to_string()
}

/// Decode `HHMM`.
pub fn hour_minute_decode(text: &str) -> Result<NaiveTime, DateError> {
    exact_len(text, 4)?;
    let (h, m) = (digits(text, 0, 2)?, digits(text, 2, 2)?);
    NaiveTime::from_hms_opt(h, m, 0).ok_or_else(|| DateError::InvalidCalendar(text.to_string()))
}

/// Encode `HHMM`.
pub fn hour_minute_encode(value: NaiveTime) -> String {
    value.format("%H%M").to_string()
}
