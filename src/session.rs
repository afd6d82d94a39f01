//! Session-level codec parameters.
//!
//! Everything here is fixed for the lifetime of a session: character set,
//! byte order of the wire buffers and the session time zone used as the
//! reference for calendar-adjusted temporal access.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeZone, Utc};

use crate::error::{Error, Result};
use crate::protocol::buffer::ByteOrder;
use crate::protocol::charset::Charset;
use crate::protocol::coder::DatatypeCoder;
use crate::protocol::constants::CS_UTF8;

/// Time zone in which raw (zone-less) temporal values are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionZone {
    /// The system local time zone, with its daylight-saving rules.
    #[default]
    Local,
    /// A fixed UTC offset.
    Fixed(FixedOffset),
}

impl SessionZone {
    /// Offset of this zone in effect at `instant`.
    pub fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        match self {
            SessionZone::Local => Local.offset_from_utc_datetime(&instant.naive_utc()).fix(),
            SessionZone::Fixed(offset) => *offset,
        }
    }

    /// Resolve a wall-clock value in this zone to an instant.
    ///
    /// Ambiguous values (clock set back) resolve to the earliest instant;
    /// values in a daylight-saving gap are rejected.
    pub fn to_instant(&self, local: NaiveDateTime) -> Result<DateTime<Utc>> {
        match self {
            SessionZone::Local => resolve_local(&Local, local),
            SessionZone::Fixed(offset) => resolve_local(offset, local),
        }
    }

    /// Wall-clock value of `instant` in this zone.
    pub fn to_local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.naive_utc() + chrono::Duration::seconds(self.offset_at(instant).local_minus_utc() as i64)
    }
}

/// Resolve `local` as a wall-clock value in `tz`.
pub(crate) fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Result<DateTime<Utc>> {
    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| Error::malformed(format!("{} does not exist in the requested time zone", local)))
}

/// Codec parameters shared by every field of a session.
#[derive(Debug, Clone)]
pub struct SessionParams {
    /// Character set id used for text without a column character set.
    pub charset_id: i32,
    /// Byte order of multi-byte integers.
    pub byte_order: ByteOrder,
    /// Reference zone for calendar-adjusted temporal access.
    pub session_zone: SessionZone,
    /// Trim trailing padding when reading CHAR columns (default: true).
    pub trim_fixed_text: bool,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionParams {
    /// Create parameters with UTF8 text, big-endian integers and the local time zone.
    pub fn new() -> Self {
        Self {
            charset_id: CS_UTF8,
            byte_order: ByteOrder::BigEndian,
            session_zone: SessionZone::Local,
            trim_fixed_text: true,
        }
    }

    /// Set the session character set.
    pub fn with_charset(mut self, charset_id: i32) -> Self {
        self.charset_id = charset_id;
        self
    }

    /// Set the wire byte order.
    ///
    /// # Example
    ///
    /// ```
    /// use fb_codec::{ByteOrder, SessionParams};
    ///
    /// let params = SessionParams::new().with_byte_order(ByteOrder::native());
    /// ```
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Set the session time zone.
    pub fn with_session_zone(mut self, zone: SessionZone) -> Self {
        self.session_zone = zone;
        self
    }

    /// Enable or disable trimming of CHAR values on read.
    pub fn with_trim_fixed_text(mut self, trim: bool) -> Self {
        self.trim_fixed_text = trim;
        self
    }

    /// Build the session datatype coder.
    ///
    /// An unknown character set id falls back to UTF8.
    pub fn coder(&self) -> DatatypeCoder {
        let charset = Charset::from_id(self.charset_id).unwrap_or_else(|| {
            tracing::warn!(
                charset_id = self.charset_id,
                "unknown session character set id, using UTF8"
            );
            Charset::utf8()
        });
        DatatypeCoder::new(charset, self.byte_order)
    }
}
