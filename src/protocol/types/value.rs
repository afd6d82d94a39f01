//! Typed column values.

use std::fmt;

use bytes::Bytes;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::protocol::datetime::{self, OffsetTime};

use super::lob::LobValue;

/// Opaque row identifier (`DB_KEY`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowId(Bytes);

impl RowId {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Parse an upper- or lower-case hex rendering.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.len() % 2 != 0 || !s.is_ascii() {
            return Err(Error::malformed(format!("'{}' is not a hex row id", s)));
        }
        (0..s.len())
            .step_by(2)
            .map(|i| {
                u8::from_str_radix(&s[i..i + 2], 16)
                    .map_err(|_| Error::malformed(format!("'{}' is not a hex row id", s)))
            })
            .collect::<Result<Vec<u8>>>()
            .map(|bytes| RowId(Bytes::from(bytes)))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Upper-case hex rendering.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02X}", b)).collect()
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A single column value in its natural representation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// NULL value.
    Null,
    Boolean(bool),
    SmallInt(i16),
    Integer(i32),
    BigInt(i64),
    Float(f32),
    Double(f64),
    /// NUMERIC/DECIMAL value, scale as stored.
    Decimal(Decimal),
    /// Character value (CHAR, VARCHAR).
    String(String),
    /// Binary value (BINARY, VARBINARY).
    Bytes(Bytes),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
    TimeTz(OffsetTime),
    TimestampTz(DateTime<FixedOffset>),
    RowId(RowId),
    /// Text BLOB content.
    Clob(LobValue),
    /// Binary BLOB content.
    Blob(LobValue),
}

impl FieldValue {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Name of the value's representation, as used in conversion errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "NULL",
            FieldValue::Boolean(_) => "bool",
            FieldValue::SmallInt(_) => "i16",
            FieldValue::Integer(_) => "i32",
            FieldValue::BigInt(_) => "i64",
            FieldValue::Float(_) => "f32",
            FieldValue::Double(_) => "f64",
            FieldValue::Decimal(_) => "Decimal",
            FieldValue::String(_) => "String",
            FieldValue::Bytes(_) => "bytes",
            FieldValue::Date(_) => "NaiveDate",
            FieldValue::Time(_) => "NaiveTime",
            FieldValue::Timestamp(_) => "NaiveDateTime",
            FieldValue::TimeTz(_) => "OffsetTime",
            FieldValue::TimestampTz(_) => "DateTime<FixedOffset>",
            FieldValue::RowId(_) => "RowId",
            FieldValue::Clob(_) => "CLOB",
            FieldValue::Blob(_) => "BLOB",
        }
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as raw bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Bytes(b) => Some(b),
            FieldValue::RowId(id) => Some(id.as_bytes()),
            FieldValue::Blob(lob) | FieldValue::Clob(lob) => Some(lob.as_bytes()),
            _ => None,
        }
    }

    /// Try to convert to i64.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            FieldValue::SmallInt(v) => Some(*v as i64),
            FieldValue::Integer(v) => Some(*v as i64),
            FieldValue::BigInt(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "NULL"),
            FieldValue::Boolean(v) => write!(f, "{}", v),
            FieldValue::SmallInt(v) => write!(f, "{}", v),
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::BigInt(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Double(v) => write!(f, "{}", v),
            FieldValue::Decimal(v) => write!(f, "{}", v),
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Bytes(b) => write!(f, "<BINARY: {} bytes>", b.len()),
            FieldValue::Date(d) => f.write_str(&datetime::format_date(*d)),
            FieldValue::Time(t) => f.write_str(&datetime::format_time(*t)),
            FieldValue::Timestamp(ts) => f.write_str(&datetime::format_timestamp(*ts)),
            FieldValue::TimeTz(t) => write!(f, "{}", t),
            FieldValue::TimestampTz(ts) => f.write_str(&datetime::format_offset_timestamp(*ts)),
            FieldValue::RowId(id) => write!(f, "{}", id),
            FieldValue::Clob(lob) => write!(f, "<CLOB: {} bytes>", lob.len()),
            FieldValue::Blob(lob) => write!(f, "<BLOB: {} bytes>", lob.len()),
        }
    }
}
