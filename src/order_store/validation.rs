//! Field format rules for incoming orders.
//!
//! Dates are `dd-MM-yyyy` and must name a real calendar day. Times follow
//! `([0-1]?[0-9]|2[0-3]):[0-5][0-9]:[0-9][0-9]`: the seconds field is only
//! required to be two digits, so `23:45:99` is a valid time.

use chrono::{Duration, NaiveDate};

pub const DATE_FORMAT: &str = "%d-%m-%Y";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Parses a `dd-MM-yyyy` date without rolling invalid days or months over.
///
/// `%Y` alone would also take short or signed years, so the year field must
/// be exactly four digits.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let year = date.rsplit('-').next()?;
    if year.len() != 4 || !date.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        return None;
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

pub fn is_valid_date(date: &str) -> bool {
    parse_date(date).is_some()
}

fn valid_hour(hour: &[u8]) -> bool {
    match hour {
        [h] => h.is_ascii_digit(),
        [b'0' | b'1', h] => h.is_ascii_digit(),
        [b'2', b'0'..=b'3'] => true,
        _ => false,
    }
}

fn valid_minute(minute: &[u8]) -> bool {
    matches!(minute, [b'0'..=b'5', m] if m.is_ascii_digit())
}

fn valid_second(second: &[u8]) -> bool {
    matches!(second, [a, b] if a.is_ascii_digit() && b.is_ascii_digit())
}

pub fn is_valid_time(time: &str) -> bool {
    let parts: Vec<&str> = time.split(':').collect();
    match parts.as_slice() {
        [hour, minute, second] => {
            valid_hour(hour.as_bytes())
                && valid_minute(minute.as_bytes())
                && valid_second(second.as_bytes())
        }
        _ => false,
    }
}

/// Offset of a valid time from midnight.
///
/// Seconds are added as a plain duration, so `23:45:99` lands on 23:46:39.
pub fn time_offset(time: &str) -> Option<Duration> {
    if !is_valid_time(time) {
        return None;
    }
    let mut fields = time.split(':').map(|f| f.parse::<i64>());
    let hours = fields.next()?.ok()?;
    let minutes = fields.next()?.ok()?;
    let seconds = fields.next()?.ok()?;
    Some(Duration::seconds(hours * 3600 + minutes * 60 + seconds))
}
