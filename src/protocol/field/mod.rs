//! Field accessors.
//!
//! A field accessor is the typed view of one column slot of a [`RowValue`].
//! The variant is chosen once per column from the column's standard SQL type
//! ([`FieldKind`]); every variant exposes the same get/set surface through
//! [`FieldAccess`], and representations a variant cannot convert fail with
//! [`Error::TypeConversion`].
//!
//! Getters on a NULL slot never fail because of the NULL itself: integral
//! getters return `0`, floating point getters `0.0`, [`FieldAccess::get_boolean`]
//! returns `false`, getters of owned values return `None`, and
//! [`FieldAccess::get_object`] returns [`FieldValue::Null`].
//!
//! Accessors borrow the row they are bound to, so an accessor can never
//! outlive the row or observe a row that was reset underneath it. Bind a new
//! accessor with [`RowShape::field`] for every row.
//!
//! [`RowValue`]: crate::protocol::types::RowValue

use std::io::Cursor;

use bytes::Bytes;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use rust_decimal::Decimal;
use tokio::io::AsyncRead;

use crate::error::{Error, Result};
use crate::protocol::coder::DatatypeCoder;
use crate::protocol::datetime::{self, OffsetTime};
use crate::protocol::types::{
    mapping, read_exact_from, stream_length, FieldDescriptor, FieldValue, RowId, SqlType,
};
use crate::session::{resolve_local, SessionParams};

/// Implements the slot plumbing of [`FieldAccess`] for a variant holding a
/// `core: FieldCore` field.
macro_rules! field_core {
    () => {
        fn descriptor(&self) -> &$crate::protocol::types::FieldDescriptor {
            self.core.desc
        }

        fn session(&self) -> &$crate::session::SessionParams {
            self.core.session
        }

        fn raw(&self) -> Option<&::bytes::Bytes> {
            self.core.slot.as_ref()
        }

        fn set_raw(&mut self, value: Option<::bytes::Bytes>) {
            *self.core.slot = value;
        }
    };
}

mod binary;
mod blob;
mod boolean;
mod convert;
mod float;
mod integral;
mod null;
mod numeric;
mod rowid;
mod shape;
mod string;
mod temporal;
mod tz;

pub use binary::BinaryField;
pub use blob::BlobField;
pub use boolean::BooleanField;
pub use float::FloatField;
pub use integral::IntegralField;
pub use null::NullField;
pub use numeric::NumericField;
pub use rowid::RowIdField;
pub use shape::RowShape;
pub use string::StringField;
pub use temporal::{DateField, TimeField, TimestampField};
pub use tz::{TimeTzField, TimestampTzField};

/// Column, session and slot an accessor is bound to.
pub(crate) struct FieldCore<'r> {
    pub(crate) desc: &'r FieldDescriptor,
    pub(crate) session: &'r SessionParams,
    pub(crate) slot: &'r mut Option<Bytes>,
}

impl<'r> FieldCore<'r> {
    pub(crate) fn new(
        desc: &'r FieldDescriptor,
        session: &'r SessionParams,
        slot: &'r mut Option<Bytes>,
    ) -> Self {
        Self { desc, session, slot }
    }

    pub(crate) fn coder(&self) -> &DatatypeCoder {
        self.desc.coder()
    }

    /// Decode the slot with `f`, `None` when NULL.
    pub(crate) fn read<T>(&self, f: impl FnOnce(&DatatypeCoder, &[u8]) -> Result<T>) -> Result<Option<T>> {
        match self.slot.as_deref() {
            Some(raw) => f(self.desc.coder(), raw).map(Some),
            None => Ok(None),
        }
    }

    pub(crate) fn store(&mut self, value: Bytes) {
        *self.slot = Some(value);
    }
}

/// Conversion error for reading a column as `to`.
pub(crate) fn get_error(desc: &FieldDescriptor, to: &str) -> Error {
    Error::type_conversion(desc.type_name(), to)
}

/// Conversion error for writing a `from` value to a column.
pub(crate) fn set_error(desc: &FieldDescriptor, from: &str) -> Error {
    Error::type_conversion(from, desc.type_name())
}

/// Wall-clock value in the session zone of `raw` read as a wall clock in `tz`.
fn to_session_local<Tz: TimeZone>(
    raw: NaiveDateTime,
    tz: &Tz,
    session: &SessionParams,
) -> Result<NaiveDateTime> {
    let instant = resolve_local(tz, raw)?;
    Ok(session.session_zone.to_local(instant))
}

/// Wall-clock value in `tz` of `value` read as a wall clock in the session zone.
fn from_session_local<Tz: TimeZone>(
    value: NaiveDateTime,
    tz: &Tz,
    session: &SessionParams,
) -> Result<NaiveDateTime> {
    let instant = session.session_zone.to_instant(value)?;
    Ok(instant.with_timezone(tz).naive_local())
}

/// Typed access to one column slot.
///
/// Every representation has a default implementation that fails with a
/// conversion error; variants override the representations they support.
pub trait FieldAccess {
    /// Descriptor of the bound column.
    fn descriptor(&self) -> &FieldDescriptor;

    /// Session parameters the accessor was bound with.
    fn session(&self) -> &SessionParams;

    /// Raw slot content, `None` for NULL.
    fn raw(&self) -> Option<&Bytes>;

    /// Replace the raw slot content without any conversion.
    fn set_raw(&mut self, value: Option<Bytes>);

    fn is_null(&self) -> bool {
        self.raw().is_none()
    }

    fn set_null(&mut self) {
        self.set_raw(None);
    }

    fn get_boolean(&self) -> Result<bool> {
        Err(get_error(self.descriptor(), "bool"))
    }

    fn get_short(&self) -> Result<i16> {
        Err(get_error(self.descriptor(), "i16"))
    }

    fn get_int(&self) -> Result<i32> {
        Err(get_error(self.descriptor(), "i32"))
    }

    fn get_long(&self) -> Result<i64> {
        Err(get_error(self.descriptor(), "i64"))
    }

    fn get_float(&self) -> Result<f32> {
        Err(get_error(self.descriptor(), "f32"))
    }

    fn get_double(&self) -> Result<f64> {
        Err(get_error(self.descriptor(), "f64"))
    }

    fn get_decimal(&self) -> Result<Option<Decimal>> {
        Err(get_error(self.descriptor(), "Decimal"))
    }

    fn get_string(&self) -> Result<Option<String>> {
        Err(get_error(self.descriptor(), "String"))
    }

    /// Raw bytes of the value.
    fn get_bytes(&self) -> Result<Option<Bytes>> {
        Ok(self.raw().cloned())
    }

    fn get_date(&self) -> Result<Option<NaiveDate>> {
        Err(get_error(self.descriptor(), "NaiveDate"))
    }

    fn get_time(&self) -> Result<Option<NaiveTime>> {
        Err(get_error(self.descriptor(), "NaiveTime"))
    }

    fn get_timestamp(&self) -> Result<Option<NaiveDateTime>> {
        Err(get_error(self.descriptor(), "NaiveDateTime"))
    }

    fn get_offset_time(&self) -> Result<Option<OffsetTime>> {
        Err(get_error(self.descriptor(), "OffsetTime"))
    }

    fn get_offset_timestamp(&self) -> Result<Option<DateTime<FixedOffset>>> {
        Err(get_error(self.descriptor(), "DateTime<FixedOffset>"))
    }

    fn get_row_id(&self) -> Result<Option<RowId>> {
        Err(get_error(self.descriptor(), "RowId"))
    }

    /// Value in its natural representation.
    fn get_object(&self) -> Result<FieldValue> {
        Err(get_error(self.descriptor(), "FieldValue"))
    }

    fn get_binary_stream(&self) -> Result<Option<Cursor<Bytes>>> {
        Err(get_error(self.descriptor(), "binary stream"))
    }

    /// Text of the value as a UTF-8 stream.
    fn get_character_stream(&self) -> Result<Option<Cursor<String>>> {
        Err(get_error(self.descriptor(), "character stream"))
    }

    /// Date as seen from `tz`.
    ///
    /// The raw value is read as a wall-clock value in `tz` and the returned
    /// value is the same instant on the session zone's wall clock.
    fn get_date_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<Option<NaiveDate>> {
        let Some(date) = self.get_date()? else {
            return Ok(None);
        };
        let local = to_session_local(date.and_time(NaiveTime::MIN), tz, self.session())?;
        Ok(Some(local.date()))
    }

    /// Time as seen from `tz`, see [`FieldAccess::get_date_in`].
    fn get_time_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<Option<NaiveTime>> {
        let Some(time) = self.get_time()? else {
            return Ok(None);
        };
        let local = to_session_local(datetime::unix_epoch().and_time(time), tz, self.session())?;
        Ok(Some(local.time()))
    }

    /// Timestamp as seen from `tz`, see [`FieldAccess::get_date_in`].
    fn get_timestamp_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<Option<NaiveDateTime>> {
        let Some(ts) = self.get_timestamp()? else {
            return Ok(None);
        };
        to_session_local(ts, tz, self.session()).map(Some)
    }

    fn set_boolean(&mut self, _value: bool) -> Result<()> {
        Err(set_error(self.descriptor(), "bool"))
    }

    fn set_short(&mut self, _value: i16) -> Result<()> {
        Err(set_error(self.descriptor(), "i16"))
    }

    fn set_int(&mut self, _value: i32) -> Result<()> {
        Err(set_error(self.descriptor(), "i32"))
    }

    fn set_long(&mut self, _value: i64) -> Result<()> {
        Err(set_error(self.descriptor(), "i64"))
    }

    fn set_float(&mut self, _value: f32) -> Result<()> {
        Err(set_error(self.descriptor(), "f32"))
    }

    fn set_double(&mut self, _value: f64) -> Result<()> {
        Err(set_error(self.descriptor(), "f64"))
    }

    fn set_decimal(&mut self, _value: Decimal) -> Result<()> {
        Err(set_error(self.descriptor(), "Decimal"))
    }

    fn set_string(&mut self, _value: &str) -> Result<()> {
        Err(set_error(self.descriptor(), "String"))
    }

    fn set_bytes(&mut self, _value: &[u8]) -> Result<()> {
        Err(set_error(self.descriptor(), "bytes"))
    }

    fn set_date(&mut self, _value: NaiveDate) -> Result<()> {
        Err(set_error(self.descriptor(), "NaiveDate"))
    }

    fn set_time(&mut self, _value: NaiveTime) -> Result<()> {
        Err(set_error(self.descriptor(), "NaiveTime"))
    }

    fn set_timestamp(&mut self, _value: NaiveDateTime) -> Result<()> {
        Err(set_error(self.descriptor(), "NaiveDateTime"))
    }

    fn set_offset_time(&mut self, _value: OffsetTime) -> Result<()> {
        Err(set_error(self.descriptor(), "OffsetTime"))
    }

    fn set_offset_timestamp(&mut self, _value: DateTime<FixedOffset>) -> Result<()> {
        Err(set_error(self.descriptor(), "DateTime<FixedOffset>"))
    }

    fn set_row_id(&mut self, _value: &RowId) -> Result<()> {
        Err(set_error(self.descriptor(), "RowId"))
    }

    /// Store a session-zone wall-clock date as seen from `tz`.
    fn set_date_in<Tz: TimeZone>(&mut self, tz: &Tz, value: NaiveDate) -> Result<()> {
        let raw = from_session_local(value.and_time(NaiveTime::MIN), tz, self.session())?;
        self.set_date(raw.date())
    }

    /// Store a session-zone wall-clock time as seen from `tz`.
    fn set_time_in<Tz: TimeZone>(&mut self, tz: &Tz, value: NaiveTime) -> Result<()> {
        let raw = from_session_local(datetime::unix_epoch().and_time(value), tz, self.session())?;
        self.set_time(raw.time())
    }

    /// Store a session-zone wall-clock timestamp as seen from `tz`.
    fn set_timestamp_in<Tz: TimeZone>(&mut self, tz: &Tz, value: NaiveDateTime) -> Result<()> {
        let raw = from_session_local(value, tz, self.session())?;
        self.set_timestamp(raw)
    }

    /// Store a value given in its natural representation.
    fn set_object(&mut self, value: FieldValue) -> Result<()> {
        match value {
            FieldValue::Null => {
                self.set_null();
                Ok(())
            }
            FieldValue::Boolean(v) => self.set_boolean(v),
            FieldValue::SmallInt(v) => self.set_short(v),
            FieldValue::Integer(v) => self.set_int(v),
            FieldValue::BigInt(v) => self.set_long(v),
            FieldValue::Float(v) => self.set_float(v),
            FieldValue::Double(v) => self.set_double(v),
            FieldValue::Decimal(v) => self.set_decimal(v),
            FieldValue::String(v) => self.set_string(&v),
            FieldValue::Bytes(v) => self.set_bytes(&v),
            FieldValue::Date(v) => self.set_date(v),
            FieldValue::Time(v) => self.set_time(v),
            FieldValue::Timestamp(v) => self.set_timestamp(v),
            FieldValue::TimeTz(v) => self.set_offset_time(v),
            FieldValue::TimestampTz(v) => self.set_offset_timestamp(v),
            FieldValue::RowId(v) => self.set_row_id(&v),
            FieldValue::Clob(lob) => self.set_string(&lob.as_string()?),
            FieldValue::Blob(lob) => self.set_bytes(lob.as_bytes()),
        }
    }
}

/// Accessor variant of a column, resolved once per row shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    SmallInt,
    Integer,
    BigInt,
    Numeric,
    Decimal,
    Float,
    Double,
    Boolean,
    Char,
    Varchar,
    Binary,
    Varbinary,
    Date,
    Time,
    Timestamp,
    TimeTz,
    TimestampTz,
    RowId,
    Clob,
    Blob,
    Null,
}

impl FieldKind {
    /// Resolve the accessor variant of a column.
    ///
    /// Returns `Err(Error::UnsupportedType)` for columns without an accessor
    /// (arrays, quads and wire types this codec does not know).
    pub fn resolve(desc: &FieldDescriptor) -> Result<FieldKind> {
        let unsupported = || Error::UnsupportedType {
            wire_type: desc.wire_type(),
            sub_type: desc.sub_type(),
        };
        if !desc.is_db_key() {
            // unknown wire types must not silently become OTHER
            mapping::try_sql_type(desc.wire_type(), desc.sub_type(), desc.scale())?;
        }
        Ok(match desc.sql_type() {
            SqlType::SmallInt => FieldKind::SmallInt,
            SqlType::Integer => FieldKind::Integer,
            SqlType::BigInt => FieldKind::BigInt,
            SqlType::Numeric => FieldKind::Numeric,
            SqlType::Decimal => FieldKind::Decimal,
            SqlType::Float => FieldKind::Float,
            SqlType::Double => FieldKind::Double,
            SqlType::Boolean => FieldKind::Boolean,
            SqlType::Char => FieldKind::Char,
            SqlType::Varchar => FieldKind::Varchar,
            SqlType::Binary => FieldKind::Binary,
            SqlType::Varbinary => FieldKind::Varbinary,
            SqlType::Date => FieldKind::Date,
            SqlType::Time => FieldKind::Time,
            SqlType::Timestamp => FieldKind::Timestamp,
            SqlType::TimeWithTimezone => FieldKind::TimeTz,
            SqlType::TimestampWithTimezone => FieldKind::TimestampTz,
            SqlType::RowId => FieldKind::RowId,
            SqlType::LongVarchar | SqlType::Clob => FieldKind::Clob,
            SqlType::LongVarbinary | SqlType::Blob => FieldKind::Blob,
            SqlType::Null => FieldKind::Null,
            SqlType::Array | SqlType::Other => return Err(unsupported()),
        })
    }
}

/// Accessor bound to one column slot.
pub enum Field<'r> {
    Integral(IntegralField<'r>),
    Numeric(NumericField<'r>),
    Float(FloatField<'r>),
    Boolean(BooleanField<'r>),
    String(StringField<'r>),
    Binary(BinaryField<'r>),
    Date(DateField<'r>),
    Time(TimeField<'r>),
    Timestamp(TimestampField<'r>),
    TimeTz(TimeTzField<'r>),
    TimestampTz(TimestampTzField<'r>),
    RowId(RowIdField<'r>),
    Blob(BlobField<'r>),
    Null(NullField<'r>),
}

macro_rules! dispatch {
    ($field:expr, $f:ident => $body:expr) => {
        match $field {
            Field::Integral($f) => $body,
            Field::Numeric($f) => $body,
            Field::Float($f) => $body,
            Field::Boolean($f) => $body,
            Field::String($f) => $body,
            Field::Binary($f) => $body,
            Field::Date($f) => $body,
            Field::Time($f) => $body,
            Field::Timestamp($f) => $body,
            Field::TimeTz($f) => $body,
            Field::TimestampTz($f) => $body,
            Field::RowId($f) => $body,
            Field::Blob($f) => $body,
            Field::Null($f) => $body,
        }
    };
}

impl<'r> Field<'r> {
    /// Bind the accessor of `kind` to a slot.
    pub(crate) fn bind(
        kind: FieldKind,
        desc: &'r FieldDescriptor,
        session: &'r SessionParams,
        slot: &'r mut Option<Bytes>,
    ) -> Field<'r> {
        let core = FieldCore::new(desc, session, slot);
        match kind {
            FieldKind::SmallInt | FieldKind::Integer | FieldKind::BigInt => {
                Field::Integral(IntegralField::new(core))
            }
            FieldKind::Numeric | FieldKind::Decimal => Field::Numeric(NumericField::new(core)),
            FieldKind::Float | FieldKind::Double => Field::Float(FloatField::new(core)),
            FieldKind::Boolean => Field::Boolean(BooleanField::new(core)),
            FieldKind::Char | FieldKind::Varchar => Field::String(StringField::new(core)),
            FieldKind::Binary | FieldKind::Varbinary => Field::Binary(BinaryField::new(core)),
            FieldKind::Date => Field::Date(DateField::new(core)),
            FieldKind::Time => Field::Time(TimeField::new(core)),
            FieldKind::Timestamp => Field::Timestamp(TimestampField::new(core)),
            FieldKind::TimeTz => Field::TimeTz(TimeTzField::new(core)),
            FieldKind::TimestampTz => Field::TimestampTz(TimestampTzField::new(core)),
            FieldKind::RowId => Field::RowId(RowIdField::new(core)),
            FieldKind::Clob | FieldKind::Blob => Field::Blob(BlobField::new(core)),
            FieldKind::Null => Field::Null(NullField::new(core)),
        }
    }

    /// Store exactly `length` bytes read from `reader`.
    ///
    /// Accepted by binary, text and blob columns. A source with fewer than
    /// `length` bytes fails with an I/O error and leaves the slot untouched.
    /// On text and binary columns a `length` past the declared column length
    /// is a truncation error, raised before anything is read.
    pub async fn set_binary_stream<R>(&mut self, reader: &mut R, length: i64) -> Result<()>
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        if let Field::Null(f) = self {
            f.set_null();
            return Ok(());
        }
        if !matches!(self, Field::Binary(_) | Field::String(_) | Field::Blob(_)) {
            return Err(set_error(self.descriptor(), "binary stream"));
        }
        let length = stream_length(length)?;
        if !matches!(self, Field::Blob(_)) {
            check_stream_capacity(length, self.descriptor().length())?;
        }
        let data = read_exact_from(reader, length).await?;
        self.set_bytes(&data)
    }

    /// Store text read as exactly `length` bytes of UTF-8 from `reader`.
    ///
    /// Accepted by text and blob columns; the text is re-encoded in the
    /// column character set.
    pub async fn set_character_stream<R>(&mut self, reader: &mut R, length: i64) -> Result<()>
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        if let Field::Null(f) = self {
            f.set_null();
            return Ok(());
        }
        if !matches!(self, Field::String(_) | Field::Blob(_)) {
            return Err(set_error(self.descriptor(), "character stream"));
        }
        let length = stream_length(length)?;
        if let Field::String(_) = self {
            // one column byte holds at most one character of up to four UTF-8 bytes
            let allowed = self.descriptor().length().saturating_mul(4);
            check_stream_capacity(length, allowed)?;
        }
        let data = read_exact_from(reader, length).await?;
        let text = std::str::from_utf8(&data)
            .map_err(|e| Error::malformed(format!("character stream is not UTF-8: {}", e)))?;
        self.set_string(text)
    }
}

fn check_stream_capacity(attempted: usize, allowed: usize) -> Result<()> {
    if attempted > allowed {
        return Err(Error::Truncation { attempted, allowed });
    }
    Ok(())
}

impl FieldAccess for Field<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        dispatch!(self, f => f.descriptor())
    }

    fn session(&self) -> &SessionParams {
        dispatch!(self, f => f.session())
    }

    fn raw(&self) -> Option<&Bytes> {
        dispatch!(self, f => f.raw())
    }

    fn set_raw(&mut self, value: Option<Bytes>) {
        dispatch!(self, f => f.set_raw(value))
    }

    fn is_null(&self) -> bool {
        dispatch!(self, f => f.is_null())
    }

    fn set_null(&mut self) {
        dispatch!(self, f => f.set_null())
    }

    fn get_boolean(&self) -> Result<bool> {
        dispatch!(self, f => f.get_boolean())
    }

    fn get_short(&self) -> Result<i16> {
        dispatch!(self, f => f.get_short())
    }

    fn get_int(&self) -> Result<i32> {
        dispatch!(self, f => f.get_int())
    }

    fn get_long(&self) -> Result<i64> {
        dispatch!(self, f => f.get_long())
    }

    fn get_float(&self) -> Result<f32> {
        dispatch!(self, f => f.get_float())
    }

    fn get_double(&self) -> Result<f64> {
        dispatch!(self, f => f.get_double())
    }

    fn get_decimal(&self) -> Result<Option<Decimal>> {
        dispatch!(self, f => f.get_decimal())
    }

    fn get_string(&self) -> Result<Option<String>> {
        dispatch!(self, f => f.get_string())
    }

    fn get_bytes(&self) -> Result<Option<Bytes>> {
        dispatch!(self, f => f.get_bytes())
    }

    fn get_date(&self) -> Result<Option<NaiveDate>> {
        dispatch!(self, f => f.get_date())
    }

    fn get_time(&self) -> Result<Option<NaiveTime>> {
        dispatch!(self, f => f.get_time())
    }

    fn get_timestamp(&self) -> Result<Option<NaiveDateTime>> {
        dispatch!(self, f => f.get_timestamp())
    }

    fn get_offset_time(&self) -> Result<Option<OffsetTime>> {
        dispatch!(self, f => f.get_offset_time())
    }

    fn get_offset_timestamp(&self) -> Result<Option<DateTime<FixedOffset>>> {
        dispatch!(self, f => f.get_offset_timestamp())
    }

    fn get_row_id(&self) -> Result<Option<RowId>> {
        dispatch!(self, f => f.get_row_id())
    }

    fn get_object(&self) -> Result<FieldValue> {
        dispatch!(self, f => f.get_object())
    }

    fn get_binary_stream(&self) -> Result<Option<Cursor<Bytes>>> {
        dispatch!(self, f => f.get_binary_stream())
    }

    fn get_character_stream(&self) -> Result<Option<Cursor<String>>> {
        dispatch!(self, f => f.get_character_stream())
    }

    fn get_date_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<Option<NaiveDate>> {
        dispatch!(self, f => f.get_date_in(tz))
    }

    fn get_time_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<Option<NaiveTime>> {
        dispatch!(self, f => f.get_time_in(tz))
    }

    fn get_timestamp_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<Option<NaiveDateTime>> {
        dispatch!(self, f => f.get_timestamp_in(tz))
    }

    fn set_boolean(&mut self, value: bool) -> Result<()> {
        dispatch!(self, f => f.set_boolean(value))
    }

    fn set_short(&mut self, value: i16) -> Result<()> {
        dispatch!(self, f => f.set_short(value))
    }

    fn set_int(&mut self, value: i32) -> Result<()> {
        dispatch!(self, f => f.set_int(value))
    }

    fn set_long(&mut self, value: i64) -> Result<()> {
        dispatch!(self, f => f.set_long(value))
    }

    fn set_float(&mut self, value: f32) -> Result<()> {
        dispatch!(self, f => f.set_float(value))
    }

    fn set_double(&mut self, value: f64) -> Result<()> {
        dispatch!(self, f => f.set_double(value))
    }

    fn set_decimal(&mut self, value: Decimal) -> Result<()> {
        dispatch!(self, f => f.set_decimal(value))
    }

    fn set_string(&mut self, value: &str) -> Result<()> {
        dispatch!(self, f => f.set_string(value))
    }

    fn set_bytes(&mut self, value: &[u8]) -> Result<()> {
        dispatch!(self, f => f.set_bytes(value))
    }

    fn set_date(&mut self, value: NaiveDate) -> Result<()> {
        dispatch!(self, f => f.set_date(value))
    }

    fn set_time(&mut self, value: NaiveTime) -> Result<()> {
        dispatch!(self, f => f.set_time(value))
    }

    fn set_timestamp(&mut self, value: NaiveDateTime) -> Result<()> {
        dispatch!(self, f => f.set_timestamp(value))
    }

    fn set_offset_time(&mut self, value: OffsetTime) -> Result<()> {
        dispatch!(self, f => f.set_offset_time(value))
    }

    fn set_offset_timestamp(&mut self, value: DateTime<FixedOffset>) -> Result<()> {
        dispatch!(self, f => f.set_offset_timestamp(value))
    }

    fn set_row_id(&mut self, value: &RowId) -> Result<()> {
        dispatch!(self, f => f.set_row_id(value))
    }

    fn set_date_in<Tz: TimeZone>(&mut self, tz: &Tz, value: NaiveDate) -> Result<()> {
        dispatch!(self, f => f.set_date_in(tz, value))
    }

    fn set_time_in<Tz: TimeZone>(&mut self, tz: &Tz, value: NaiveTime) -> Result<()> {
        dispatch!(self, f => f.set_time_in(tz, value))
    }

    fn set_timestamp_in<Tz: TimeZone>(&mut self, tz: &Tz, value: NaiveDateTime) -> Result<()> {
        dispatch!(self, f => f.set_timestamp_in(tz, value))
    }

    fn set_object(&mut self, value: FieldValue) -> Result<()> {
        dispatch!(self, f => f.set_object(value))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Helpers binding a single accessor to a standalone slot.

    use super::*;
    use crate::protocol::types::FieldDescriptorBuilder;

    pub(crate) fn builder() -> FieldDescriptorBuilder {
        FieldDescriptor::builder(SessionParams::new().coder())
    }

    /// A descriptor, session and slot to bind accessors against.
    pub(crate) struct Harness {
        pub desc: FieldDescriptor,
        pub session: SessionParams,
        pub slot: Option<Bytes>,
    }

    impl Harness {
        pub(crate) fn new(desc: FieldDescriptor) -> Self {
            Self {
                desc,
                session: SessionParams::new(),
                slot: None,
            }
        }

        pub(crate) fn with_session(mut self, session: SessionParams) -> Self {
            self.session = session;
            self
        }

        pub(crate) fn field(&mut self) -> Field<'_> {
            let kind = FieldKind::resolve(&self.desc).unwrap();
            Field::bind(kind, &self.desc, &self.session, &mut self.slot)
        }
    }
}
