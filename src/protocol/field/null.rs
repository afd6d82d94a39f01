//! Columns of the NULL type (untyped parameters and literal NULLs).

use std::io::Cursor;

use bytes::Bytes;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use rust_decimal::Decimal;

use crate::error::Result;
use crate::protocol::datetime::OffsetTime;
use crate::protocol::types::{FieldDescriptor, FieldValue, RowId};
use crate::session::SessionParams;

use super::{FieldAccess, FieldCore};

/// Accessor for columns that can only hold NULL.
///
/// Every write clears the slot and every read sees NULL.
pub struct NullField<'r> {
    core: FieldCore<'r>,
}

impl<'r> NullField<'r> {
    pub(crate) fn new(core: FieldCore<'r>) -> Self {
        Self { core }
    }

    fn clear(&mut self) -> Result<()> {
        *self.core.slot = None;
        Ok(())
    }
}

impl FieldAccess for NullField<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.core.desc
    }

    fn session(&self) -> &SessionParams {
        self.core.session
    }

    fn raw(&self) -> Option<&Bytes> {
        self.core.slot.as_ref()
    }

    /// Clears the slot whatever `value` holds.
    fn set_raw(&mut self, _value: Option<Bytes>) {
        *self.core.slot = None;
    }

    fn is_null(&self) -> bool {
        true
    }

    fn get_boolean(&self) -> Result<bool> {
        Ok(false)
    }

    fn get_short(&self) -> Result<i16> {
        Ok(0)
    }

    fn get_int(&self) -> Result<i32> {
        Ok(0)
    }

    fn get_long(&self) -> Result<i64> {
        Ok(0)
    }

    fn get_float(&self) -> Result<f32> {
        Ok(0.0)
    }

    fn get_double(&self) -> Result<f64> {
        Ok(0.0)
    }

    fn get_decimal(&self) -> Result<Option<Decimal>> {
        Ok(None)
    }

    fn get_string(&self) -> Result<Option<String>> {
        Ok(None)
    }

    fn get_bytes(&self) -> Result<Option<Bytes>> {
        Ok(None)
    }

    fn get_date(&self) -> Result<Option<NaiveDate>> {
        Ok(None)
    }

    fn get_time(&self) -> Result<Option<NaiveTime>> {
        Ok(None)
    }

    fn get_timestamp(&self) -> Result<Option<NaiveDateTime>> {
        Ok(None)
    }

    fn get_offset_time(&self) -> Result<Option<OffsetTime>> {
        Ok(None)
    }

    fn get_offset_timestamp(&self) -> Result<Option<DateTime<FixedOffset>>> {
        Ok(None)
    }

    fn get_row_id(&self) -> Result<Option<RowId>> {
        Ok(None)
    }

    fn get_object(&self) -> Result<FieldValue> {
        Ok(FieldValue::Null)
    }

    fn get_binary_stream(&self) -> Result<Option<Cursor<Bytes>>> {
        Ok(None)
    }

    fn get_character_stream(&self) -> Result<Option<Cursor<String>>> {
        Ok(None)
    }

    fn set_boolean(&mut self, _value: bool) -> Result<()> {
        self.clear()
    }

    fn set_short(&mut self, _value: i16) -> Result<()> {
        self.clear()
    }

    fn set_int(&mut self, _value: i32) -> Result<()> {
        self.clear()
    }

    fn set_long(&mut self, _value: i64) -> Result<()> {
        self.clear()
    }

    fn set_float(&mut self, _value: f32) -> Result<()> {
        self.clear()
    }

    fn set_double(&mut self, _value: f64) -> Result<()> {
        self.clear()
    }

    fn set_decimal(&mut self, _value: Decimal) -> Result<()> {
        self.clear()
    }

    fn set_string(&mut self, _value: &str) -> Result<()> {
        self.clear()
    }

    fn set_bytes(&mut self, _value: &[u8]) -> Result<()> {
        self.clear()
    }

    fn set_date(&mut self, _value: NaiveDate) -> Result<()> {
        self.clear()
    }

    fn set_time(&mut self, _value: NaiveTime) -> Result<()> {
        self.clear()
    }

    fn set_timestamp(&mut self, _value: NaiveDateTime) -> Result<()> {
        self.clear()
    }

    fn set_offset_time(&mut self, _value: OffsetTime) -> Result<()> {
        self.clear()
    }

    fn set_offset_timestamp(&mut self, _value: DateTime<FixedOffset>) -> Result<()> {
        self.clear()
    }

    fn set_row_id(&mut self, _value: &RowId) -> Result<()> {
        self.clear()
    }

    fn set_date_in<Tz: TimeZone>(&mut self, _tz: &Tz, _value: NaiveDate) -> Result<()> {
        self.clear()
    }

    fn set_time_in<Tz: TimeZone>(&mut self, _tz: &Tz, _value: NaiveTime) -> Result<()> {
        self.clear()
    }

    fn set_timestamp_in<Tz: TimeZone>(&mut self, _tz: &Tz, _value: NaiveDateTime) -> Result<()> {
        self.clear()
    }

    fn set_object(&mut self, _value: FieldValue) -> Result<()> {
        self.clear()
    }
}
