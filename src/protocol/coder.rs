//! Datatype coder: scalar values to and from their wire byte layout.
//!
//! A coder carries the two pieces of session state that affect encoding:
//! the character set for text and the byte order for integers. Both are
//! fixed at construction; no method takes them per call. Coders are `Copy`
//! and can be shared read-only by any number of fields and rows.
//!
//! | Type | Width | Layout |
//! |------|-------|--------|
//! | SMALLINT | 2 | two's complement |
//! | INTEGER | 4 | two's complement |
//! | BIGINT | 8 | two's complement |
//! | FLOAT | 4 | IEEE 754 bits as INTEGER |
//! | DOUBLE | 8 | IEEE 754 bits as BIGINT |
//! | BOOLEAN | 1 | 0 = false |
//! | DATE | 4 | Modified Julian Day |
//! | TIME | 4 | 100 µs units since midnight |
//! | TIMESTAMP | 8 | DATE then TIME |
//! | TIME WITH TIME ZONE | 6 | UTC TIME then zone id |
//! | TIMESTAMP WITH TIME ZONE | 10 | UTC TIMESTAMP then zone id |

use bytes::Bytes;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::error::Result;
use crate::protocol::buffer::{expect_len, ByteOrder, ReadBuffer, WriteBuffer};
use crate::protocol::charset::Charset;
use crate::protocol::constants::*;
use crate::protocol::datetime::{self, OffsetTime};

/// Encoder/decoder for fixed-layout wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatatypeCoder {
    charset: Charset,
    order: ByteOrder,
}

impl Default for DatatypeCoder {
    fn default() -> Self {
        Self::new(Charset::utf8(), ByteOrder::BigEndian)
    }
}

impl DatatypeCoder {
    /// Create a coder for the given character set and byte order.
    pub fn new(charset: Charset, order: ByteOrder) -> Self {
        Self { charset, order }
    }

    /// Character set used for text.
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Byte order used for multi-byte integers.
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Derive a coder for a column-specific character set.
    ///
    /// Returns `self` when the id is already this coder's character set. An
    /// unknown id keeps the current character set.
    pub fn for_charset(&self, charset_id: i32) -> DatatypeCoder {
        if charset_id == self.charset.id() {
            return *self;
        }
        match Charset::from_id(charset_id) {
            Some(charset) => {
                tracing::debug!(charset = charset.name(), "derived column datatype coder");
                DatatypeCoder { charset, ..*self }
            }
            None => {
                tracing::warn!(
                    charset_id,
                    fallback = self.charset.name(),
                    "unknown character set id, using session character set"
                );
                *self
            }
        }
    }

    fn reader<'a>(&self, buf: &'a [u8], size: usize, type_name: &'static str) -> Result<ReadBuffer<'a>> {
        ReadBuffer::exact(buf, size, self.order, type_name)
    }

    fn writer(&self, size: usize) -> WriteBuffer {
        WriteBuffer::with_capacity(size, self.order)
    }

    // Integers

    pub fn encode_short(&self, val: i16) -> Bytes {
        let mut buf = self.writer(SIZE_OF_SHORT);
        buf.write_i16(val);
        buf.freeze()
    }

    pub fn decode_short(&self, buf: &[u8]) -> Result<i16> {
        self.reader(buf, SIZE_OF_SHORT, "SMALLINT")?.read_i16()
    }

    pub fn encode_int(&self, val: i32) -> Bytes {
        let mut buf = self.writer(SIZE_OF_INT);
        buf.write_i32(val);
        buf.freeze()
    }

    pub fn decode_int(&self, buf: &[u8]) -> Result<i32> {
        self.reader(buf, SIZE_OF_INT, "INTEGER")?.read_i32()
    }

    pub fn encode_long(&self, val: i64) -> Bytes {
        let mut buf = self.writer(SIZE_OF_LONG);
        buf.write_i64(val);
        buf.freeze()
    }

    pub fn decode_long(&self, buf: &[u8]) -> Result<i64> {
        self.reader(buf, SIZE_OF_LONG, "BIGINT")?.read_i64()
    }

    // Floating point

    pub fn encode_float(&self, val: f32) -> Bytes {
        self.encode_int(val.to_bits() as i32)
    }

    pub fn decode_float(&self, buf: &[u8]) -> Result<f32> {
        let bits = self.reader(buf, SIZE_OF_FLOAT, "FLOAT")?.read_i32()?;
        Ok(f32::from_bits(bits as u32))
    }

    pub fn encode_double(&self, val: f64) -> Bytes {
        self.encode_long(val.to_bits() as i64)
    }

    pub fn decode_double(&self, buf: &[u8]) -> Result<f64> {
        let bits = self.reader(buf, SIZE_OF_DOUBLE, "DOUBLE PRECISION")?.read_i64()?;
        Ok(f64::from_bits(bits as u64))
    }

    // Boolean

    pub fn encode_boolean(&self, val: bool) -> Bytes {
        Bytes::from_static(if val { &[1] } else { &[0] })
    }

    pub fn decode_boolean(&self, buf: &[u8]) -> Result<bool> {
        expect_len(buf, SIZE_OF_BOOLEAN, "BOOLEAN")?;
        Ok(buf[0] != 0)
    }

    // Date and time

    pub fn encode_date(&self, val: NaiveDate) -> Result<Bytes> {
        Ok(self.encode_int(datetime::to_modified_julian_date(val)?))
    }

    pub fn decode_date(&self, buf: &[u8]) -> Result<NaiveDate> {
        datetime::from_modified_julian_date(self.decode_int(buf)?)
    }

    pub fn encode_time(&self, val: NaiveTime) -> Bytes {
        self.encode_int(datetime::to_time_units(val))
    }

    pub fn decode_time(&self, buf: &[u8]) -> Result<NaiveTime> {
        datetime::from_time_units(self.reader(buf, SIZE_OF_TIME, "TIME")?.read_i32()?)
    }

    pub fn encode_timestamp(&self, val: NaiveDateTime) -> Result<Bytes> {
        let mut buf = self.writer(SIZE_OF_TIMESTAMP);
        buf.write_i32(datetime::to_modified_julian_date(val.date())?);
        buf.write_i32(datetime::to_time_units(val.time()));
        Ok(buf.freeze())
    }

    pub fn decode_timestamp(&self, buf: &[u8]) -> Result<NaiveDateTime> {
        let mut read = self.reader(buf, SIZE_OF_TIMESTAMP, "TIMESTAMP")?;
        let date = datetime::from_modified_julian_date(read.read_i32()?)?;
        let time = datetime::from_time_units(read.read_i32()?)?;
        Ok(date.and_time(time))
    }

    pub fn encode_offset_time(&self, val: OffsetTime) -> Result<Bytes> {
        let zone_id = datetime::offset_to_zone_id(val.offset)?;
        let mut buf = self.writer(SIZE_OF_TIME_TZ);
        buf.write_i32(datetime::to_time_units(val.to_utc_time()));
        buf.write_u16(zone_id);
        Ok(buf.freeze())
    }

    pub fn decode_offset_time(&self, buf: &[u8]) -> Result<OffsetTime> {
        let mut read = self.reader(buf, SIZE_OF_TIME_TZ, "TIME WITH TIME ZONE")?;
        let utc_time = datetime::from_time_units(read.read_i32()?)?;
        let offset = datetime::zone_id_to_offset(read.read_u16()?)?;
        let local = utc_time + chrono::Duration::seconds(offset.local_minus_utc() as i64);
        Ok(OffsetTime::new(local, offset))
    }

    pub fn encode_offset_timestamp(&self, val: DateTime<FixedOffset>) -> Result<Bytes> {
        let zone_id = datetime::offset_to_zone_id(*val.offset())?;
        let utc = val.naive_utc();
        let mut buf = self.writer(SIZE_OF_TIMESTAMP_TZ);
        buf.write_i32(datetime::to_modified_julian_date(utc.date())?);
        buf.write_i32(datetime::to_time_units(utc.time()));
        buf.write_u16(zone_id);
        Ok(buf.freeze())
    }

    pub fn decode_offset_timestamp(&self, buf: &[u8]) -> Result<DateTime<FixedOffset>> {
        let mut read = self.reader(buf, SIZE_OF_TIMESTAMP_TZ, "TIMESTAMP WITH TIME ZONE")?;
        let date = datetime::from_modified_julian_date(read.read_i32()?)?;
        let time = datetime::from_time_units(read.read_i32()?)?;
        let offset = datetime::zone_id_to_offset(read.read_u16()?)?;
        Ok(offset.from_utc_datetime(&date.and_time(time)))
    }

    // Text

    pub fn encode_string(&self, val: &str) -> Result<Bytes> {
        Ok(Bytes::copy_from_slice(&self.charset.encode(val)?))
    }

    pub fn decode_string(&self, buf: &[u8]) -> Result<String> {
        Ok(self.charset.decode(buf)?.into_owned())
    }
}
