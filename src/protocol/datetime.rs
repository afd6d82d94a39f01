//! Date/time conversions between chrono types and the wire representation.
//!
//! - DATE: signed day count since 1858-11-17 (Modified Julian Day).
//! - TIME: units of 100 microseconds since midnight.
//! - Time zones: offset zones are encoded as `offset_minutes + 1439`; id
//!   65535 is GMT. Other named zone ids are not supported.
//!
//! Canonical text forms: `YYYY-MM-DD`, `HH:MM:SS[.fffffffff]` and
//! `YYYY-MM-DD HH:MM:SS[.fffffffff]`.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike,
};

use crate::error::{Error, Result};
use crate::protocol::constants::*;

/// Date on which TIME WITH TIME ZONE values are placed when a full instant is needed.
pub fn time_tz_base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default()
}

/// 1970-01-01, the date TIME values are placed on when a timestamp is needed.
pub(crate) fn unix_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

/// Convert a date to its Modified Julian Day number.
pub fn to_modified_julian_date(date: NaiveDate) -> Result<i32> {
    let days = date.signed_duration_since(unix_epoch()).num_days() + MJD_UNIX_EPOCH_OFFSET as i64;
    i32::try_from(days).map_err(|_| Error::overflow(date, "DATE"))
}

/// Convert a Modified Julian Day number to a date.
pub fn from_modified_julian_date(mjd: i32) -> Result<NaiveDate> {
    let days = mjd as i64 - MJD_UNIX_EPOCH_OFFSET as i64;
    unix_epoch()
        .checked_add_signed(chrono::Duration::days(days))
        .ok_or_else(|| Error::malformed(format!("day number {} is out of the supported date range", mjd)))
}

/// Convert a time of day to wire time units, truncating below 100 µs.
pub fn to_time_units(time: NaiveTime) -> i32 {
    let nanos = time.nanosecond().min(999_999_999);
    let units = time.num_seconds_from_midnight() * TIME_UNITS_PER_SECOND
        + nanos / NANOS_PER_TIME_UNIT;
    units as i32
}

/// Convert wire time units to a time of day.
pub fn from_time_units(units: i32) -> Result<NaiveTime> {
    if units < 0 || units as u32 >= TIME_UNITS_PER_DAY {
        return Err(Error::malformed(format!(
            "time value {} is outside 0..{}",
            units, TIME_UNITS_PER_DAY
        )));
    }
    let units = units as u32;
    let secs = units / TIME_UNITS_PER_SECOND;
    let nanos = (units % TIME_UNITS_PER_SECOND) * NANOS_PER_TIME_UNIT;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos)
        .ok_or_else(|| Error::malformed(format!("invalid time value {}", units)))
}

/// Encode a UTC offset as a wire time zone id.
pub fn offset_to_zone_id(offset: FixedOffset) -> Result<u16> {
    let seconds = offset.local_minus_utc();
    if seconds % 60 != 0 {
        return Err(Error::type_conversion_with(
            "offset",
            "TIME ZONE",
            format!("offset {} has seconds precision", offset),
        ));
    }
    let id = seconds / 60 + TZ_OFFSET_BIAS;
    if !(0..=TZ_OFFSET_MAX_ID).contains(&id) {
        return Err(Error::overflow(offset, "TIME ZONE"));
    }
    Ok(id as u16)
}

/// Decode a wire time zone id to a UTC offset.
pub fn zone_id_to_offset(id: u16) -> Result<FixedOffset> {
    if id == TZ_ID_GMT {
        return FixedOffset::east_opt(0).ok_or_else(|| Error::malformed("invalid GMT offset"));
    }
    let id = id as i32;
    if id > TZ_OFFSET_MAX_ID {
        return Err(Error::malformed(format!(
            "time zone id {} names a region zone, only offset zones are supported",
            id
        )));
    }
    FixedOffset::east_opt((id - TZ_OFFSET_BIAS) * 60)
        .ok_or_else(|| Error::malformed(format!("invalid time zone id {}", id)))
}

/// Time of day with a fixed UTC offset (TIME WITH TIME ZONE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetTime {
    pub time: NaiveTime,
    pub offset: FixedOffset,
}

impl OffsetTime {
    pub fn new(time: NaiveTime, offset: FixedOffset) -> Self {
        Self { time, offset }
    }

    /// Place this time on `date` as a full offset date-time.
    pub fn on_date(&self, date: NaiveDate) -> Result<DateTime<FixedOffset>> {
        date.and_time(self.time)
            .and_local_timezone(self.offset)
            .single()
            .ok_or_else(|| Error::malformed(format!("invalid offset time {}", self)))
    }

    /// The same instant expressed in UTC.
    pub fn to_utc_time(&self) -> NaiveTime {
        self.time - chrono::Duration::seconds(self.offset.local_minus_utc() as i64)
    }
}

impl std::fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", format_time(self.time), self.offset)
    }
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    if (0..=9999).contains(&date.year()) {
        date.format("%Y-%m-%d").to_string()
    } else {
        format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
    }
}

/// Format a time as `HH:MM:SS`, with a fraction only when non-zero.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S%.f").to_string()
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS`, with a fraction only when non-zero.
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    format!("{} {}", format_date(ts.date()), format_time(ts.time()))
}

/// Format an offset timestamp as `YYYY-MM-DD HH:MM:SS+hh:mm`.
pub fn format_offset_timestamp(ts: DateTime<FixedOffset>) -> String {
    format!("{}{}", format_timestamp(ts.naive_local()), ts.offset())
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| Error::malformed(format!("'{}' is not a date (YYYY-MM-DD): {}", s, e)))
}

/// Parse a `HH:MM:SS[.f]` time.
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S%.f")
        .map_err(|e| Error::malformed(format!("'{}' is not a time (HH:MM:SS): {}", s, e)))
}

/// Parse a `YYYY-MM-DD HH:MM:SS[.f]` timestamp; the ISO `T` separator is also accepted.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    let format = if s.len() > 10 && matches!(s.as_bytes()[10], b'T' | b't') {
        "%Y-%m-%dT%H:%M:%S%.f"
    } else {
        "%Y-%m-%d %H:%M:%S%.f"
    };
    NaiveDateTime::parse_from_str(s, format).map_err(|e| {
        Error::malformed(format!(
            "'{}' is not a timestamp (YYYY-MM-DD HH:MM:SS): {}",
            s, e
        ))
    })
}

/// Parse a `HH:MM:SS[.f]+hh:mm` time with offset.
pub fn parse_offset_time(s: &str) -> Result<OffsetTime> {
    let s = s.trim();
    let split = s
        .rfind(|c: char| c == '+' || c == '-')
        .ok_or_else(|| Error::malformed(format!("'{}' has no UTC offset", s)))?;
    let time = parse_time(&s[..split])?;
    let offset = parse_offset(&s[split..])
        .ok_or_else(|| Error::malformed(format!("'{}' has an invalid UTC offset", s)))?;
    Ok(OffsetTime::new(time, offset))
}

fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let (hours, minutes) = rest.split_once(':').unwrap_or((rest, "0"));
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Parse a `YYYY-MM-DD HH:MM:SS[.f]+hh:mm` timestamp with offset.
pub fn parse_offset_timestamp(s: &str) -> Result<DateTime<FixedOffset>> {
    let s = s.trim();
    let format = if s.len() > 10 && matches!(s.as_bytes()[10], b'T' | b't') {
        "%Y-%m-%dT%H:%M:%S%.f%:z"
    } else {
        "%Y-%m-%d %H:%M:%S%.f%:z"
    };
    DateTime::parse_from_str(s, format).map_err(|e| {
        Error::malformed(format!(
            "'{}' is not a timestamp with offset (YYYY-MM-DD HH:MM:SS+hh:mm): {}",
            s, e
        ))
    })
}
