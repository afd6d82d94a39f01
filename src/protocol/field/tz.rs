//! TIME WITH TIME ZONE and TIMESTAMP WITH TIME ZONE columns.
//!
//! Zoned values are stored as UTC plus a zone id. Zone-less representations
//! read and write them as wall-clock values in the session zone; TIME WITH
//! TIME ZONE values are placed on [`time_tz_base_date`] whenever a full
//! instant is needed.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::Result;
use crate::protocol::datetime::{self, time_tz_base_date, OffsetTime};
use crate::protocol::types::FieldValue;
use crate::session::SessionParams;

use super::{FieldAccess, FieldCore};

/// Session wall-clock value of a zoned instant.
fn session_local(session: &SessionParams, value: DateTime<FixedOffset>) -> NaiveDateTime {
    session.session_zone.to_local(value.with_timezone(&Utc))
}

/// Zoned instant of a session wall-clock value, carrying the session offset.
fn session_instant(session: &SessionParams, value: NaiveDateTime) -> Result<DateTime<FixedOffset>> {
    let instant = session.session_zone.to_instant(value)?;
    Ok(instant.with_timezone(&session.session_zone.offset_at(instant)))
}

/// Accessor for TIME WITH TIME ZONE columns.
pub struct TimeTzField<'r> {
    core: FieldCore<'r>,
}

impl<'r> TimeTzField<'r> {
    pub(crate) fn new(core: FieldCore<'r>) -> Self {
        Self { core }
    }

    fn value(&self) -> Result<Option<OffsetTime>> {
        self.core.read(|coder, raw| coder.decode_offset_time(raw))
    }

    fn on_base_date(&self) -> Result<Option<DateTime<FixedOffset>>> {
        self.value()?
            .map(|v| v.on_date(time_tz_base_date()))
            .transpose()
    }

    fn store(&mut self, value: OffsetTime) -> Result<()> {
        let encoded = self.core.coder().encode_offset_time(value)?;
        self.core.store(encoded);
        Ok(())
    }

    fn store_instant(&mut self, value: DateTime<FixedOffset>) -> Result<()> {
        self.store(OffsetTime::new(value.time(), *value.offset()))
    }
}

impl FieldAccess for TimeTzField<'_> {
    field_core!();

    fn get_time(&self) -> Result<Option<NaiveTime>> {
        Ok(self.get_timestamp()?.map(|ts| ts.time()))
    }

    fn get_timestamp(&self) -> Result<Option<NaiveDateTime>> {
        let session = self.core.session;
        Ok(self.on_base_date()?.map(|v| session_local(session, v)))
    }

    fn get_offset_time(&self) -> Result<Option<OffsetTime>> {
        self.value()
    }

    fn get_offset_timestamp(&self) -> Result<Option<DateTime<FixedOffset>>> {
        self.on_base_date()
    }

    fn get_string(&self) -> Result<Option<String>> {
        Ok(self.value()?.map(|v| v.to_string()))
    }

    fn get_object(&self) -> Result<FieldValue> {
        Ok(self.value()?.map_or(FieldValue::Null, FieldValue::TimeTz))
    }

    fn set_time(&mut self, value: NaiveTime) -> Result<()> {
        let instant = session_instant(self.core.session, time_tz_base_date().and_time(value))?;
        self.store_instant(instant)
    }

    fn set_timestamp(&mut self, value: NaiveDateTime) -> Result<()> {
        let instant = session_instant(self.core.session, value)?;
        self.store_instant(instant)
    }

    fn set_offset_time(&mut self, value: OffsetTime) -> Result<()> {
        self.store(value)
    }

    /// Stores the time of day with the value's offset; the date is dropped.
    fn set_offset_timestamp(&mut self, value: DateTime<FixedOffset>) -> Result<()> {
        self.store_instant(value)
    }

    fn set_string(&mut self, value: &str) -> Result<()> {
        self.store(datetime::parse_offset_time(value)?)
    }
}

/// Accessor for TIMESTAMP WITH TIME ZONE columns.
pub struct TimestampTzField<'r> {
    core: FieldCore<'r>,
}

impl<'r> TimestampTzField<'r> {
    pub(crate) fn new(core: FieldCore<'r>) -> Self {
        Self { core }
    }

    fn value(&self) -> Result<Option<DateTime<FixedOffset>>> {
        self.core.read(|coder, raw| coder.decode_offset_timestamp(raw))
    }

    fn store(&mut self, value: DateTime<FixedOffset>) -> Result<()> {
        let encoded = self.core.coder().encode_offset_timestamp(value)?;
        self.core.store(encoded);
        Ok(())
    }

    fn store_local(&mut self, value: NaiveDateTime) -> Result<()> {
        let instant = session_instant(self.core.session, value)?;
        self.store(instant)
    }
}

impl FieldAccess for TimestampTzField<'_> {
    field_core!();

    fn get_date(&self) -> Result<Option<NaiveDate>> {
        Ok(self.get_timestamp()?.map(|ts| ts.date()))
    }

    fn get_time(&self) -> Result<Option<NaiveTime>> {
        Ok(self.get_timestamp()?.map(|ts| ts.time()))
    }

    fn get_timestamp(&self) -> Result<Option<NaiveDateTime>> {
        let session = self.core.session;
        Ok(self.value()?.map(|v| session_local(session, v)))
    }

    fn get_offset_time(&self) -> Result<Option<OffsetTime>> {
        Ok(self.value()?.map(|v| OffsetTime::new(v.time(), *v.offset())))
    }

    fn get_offset_timestamp(&self) -> Result<Option<DateTime<FixedOffset>>> {
        self.value()
    }

    fn get_string(&self) -> Result<Option<String>> {
        Ok(self.value()?.map(datetime::format_offset_timestamp))
    }

    fn get_object(&self) -> Result<FieldValue> {
        Ok(self.value()?.map_or(FieldValue::Null, FieldValue::TimestampTz))
    }

    fn set_date(&mut self, value: NaiveDate) -> Result<()> {
        self.store_local(value.and_time(NaiveTime::MIN))
    }

    fn set_time(&mut self, value: NaiveTime) -> Result<()> {
        self.store_local(time_tz_base_date().and_time(value))
    }

    fn set_timestamp(&mut self, value: NaiveDateTime) -> Result<()> {
        self.store_local(value)
    }

    fn set_offset_time(&mut self, value: OffsetTime) -> Result<()> {
        self.store(value.on_date(time_tz_base_date())?)
    }

    fn set_offset_timestamp(&mut self, value: DateTime<FixedOffset>) -> Result<()> {
        self.store(value)
    }

    fn set_string(&mut self, value: &str) -> Result<()> {
        self.store(datetime::parse_offset_timestamp(value)?)
    }
}
