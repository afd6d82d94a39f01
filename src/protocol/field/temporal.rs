//! DATE, TIME and TIMESTAMP columns.
//!
//! These columns carry no zone; their values are wall-clock values in the
//! session zone. The calendar-adjusted accessors (`*_in`) reinterpret them
//! relative to another zone.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::error::Result;
use crate::protocol::datetime::{self, unix_epoch};
use crate::protocol::types::FieldValue;

use super::{from_session_local, FieldAccess, FieldCore};

/// Accessor for DATE columns.
pub struct DateField<'r> {
    core: FieldCore<'r>,
}

impl<'r> DateField<'r> {
    pub(crate) fn new(core: FieldCore<'r>) -> Self {
        Self { core }
    }

    fn value(&self) -> Result<Option<NaiveDate>> {
        self.core.read(|coder, raw| coder.decode_date(raw))
    }

    fn store(&mut self, value: NaiveDate) -> Result<()> {
        let encoded = self.core.coder().encode_date(value)?;
        self.core.store(encoded);
        Ok(())
    }
}

impl FieldAccess for DateField<'_> {
    field_core!();

    fn get_date(&self) -> Result<Option<NaiveDate>> {
        self.value()
    }

    /// The date at midnight.
    fn get_timestamp(&self) -> Result<Option<NaiveDateTime>> {
        Ok(self.value()?.map(|d| d.and_time(NaiveTime::MIN)))
    }

    fn get_string(&self) -> Result<Option<String>> {
        Ok(self.value()?.map(datetime::format_date))
    }

    fn get_object(&self) -> Result<FieldValue> {
        Ok(self.value()?.map_or(FieldValue::Null, FieldValue::Date))
    }

    fn set_date(&mut self, value: NaiveDate) -> Result<()> {
        self.store(value)
    }

    /// Stores the date part; the time of day is dropped.
    fn set_timestamp(&mut self, value: NaiveDateTime) -> Result<()> {
        self.store(value.date())
    }

    fn set_string(&mut self, value: &str) -> Result<()> {
        self.store(datetime::parse_date(value)?)
    }
}

/// Accessor for TIME columns.
pub struct TimeField<'r> {
    core: FieldCore<'r>,
}

impl<'r> TimeField<'r> {
    pub(crate) fn new(core: FieldCore<'r>) -> Self {
        Self { core }
    }

    fn value(&self) -> Result<Option<NaiveTime>> {
        self.core.read(|coder, raw| coder.decode_time(raw))
    }

    fn store(&mut self, value: NaiveTime) -> Result<()> {
        let encoded = self.core.coder().encode_time(value);
        self.core.store(encoded);
        Ok(())
    }
}

impl FieldAccess for TimeField<'_> {
    field_core!();

    fn get_time(&self) -> Result<Option<NaiveTime>> {
        self.value()
    }

    /// The time on 1970-01-01.
    fn get_timestamp(&self) -> Result<Option<NaiveDateTime>> {
        Ok(self.value()?.map(|t| unix_epoch().and_time(t)))
    }

    fn get_string(&self) -> Result<Option<String>> {
        Ok(self.value()?.map(datetime::format_time))
    }

    fn get_object(&self) -> Result<FieldValue> {
        Ok(self.value()?.map_or(FieldValue::Null, FieldValue::Time))
    }

    fn set_time(&mut self, value: NaiveTime) -> Result<()> {
        self.store(value)
    }

    /// Stores the time of day; the date is dropped.
    fn set_timestamp(&mut self, value: NaiveDateTime) -> Result<()> {
        self.store(value.time())
    }

    fn set_string(&mut self, value: &str) -> Result<()> {
        self.store(datetime::parse_time(value)?)
    }
}

/// Accessor for TIMESTAMP columns.
pub struct TimestampField<'r> {
    core: FieldCore<'r>,
}

impl<'r> TimestampField<'r> {
    pub(crate) fn new(core: FieldCore<'r>) -> Self {
        Self { core }
    }

    fn value(&self) -> Result<Option<NaiveDateTime>> {
        self.core.read(|coder, raw| coder.decode_timestamp(raw))
    }

    fn store(&mut self, value: NaiveDateTime) -> Result<()> {
        let encoded = self.core.coder().encode_timestamp(value)?;
        self.core.store(encoded);
        Ok(())
    }
}

impl FieldAccess for TimestampField<'_> {
    field_core!();

    fn get_date(&self) -> Result<Option<NaiveDate>> {
        Ok(self.value()?.map(|ts| ts.date()))
    }

    fn get_time(&self) -> Result<Option<NaiveTime>> {
        Ok(self.value()?.map(|ts| ts.time()))
    }

    fn get_timestamp(&self) -> Result<Option<NaiveDateTime>> {
        self.value()
    }

    fn get_string(&self) -> Result<Option<String>> {
        Ok(self.value()?.map(datetime::format_timestamp))
    }

    fn get_object(&self) -> Result<FieldValue> {
        Ok(self.value()?.map_or(FieldValue::Null, FieldValue::Timestamp))
    }

    // the full timestamp is shifted, so a zone change can move the date

    fn get_date_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<Option<NaiveDate>> {
        Ok(self.get_timestamp_in(tz)?.map(|ts| ts.date()))
    }

    fn get_time_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<Option<NaiveTime>> {
        Ok(self.get_timestamp_in(tz)?.map(|ts| ts.time()))
    }

    fn set_date(&mut self, value: NaiveDate) -> Result<()> {
        self.store(value.and_time(NaiveTime::MIN))
    }

    fn set_time(&mut self, value: NaiveTime) -> Result<()> {
        self.store(unix_epoch().and_time(value))
    }

    fn set_timestamp(&mut self, value: NaiveDateTime) -> Result<()> {
        self.store(value)
    }

    fn set_string(&mut self, value: &str) -> Result<()> {
        self.store(datetime::parse_timestamp(value)?)
    }

    fn set_date_in<Tz: TimeZone>(&mut self, tz: &Tz, value: NaiveDate) -> Result<()> {
        let raw = from_session_local(value.and_time(NaiveTime::MIN), tz, self.session())?;
        self.store(raw)
    }

    fn set_time_in<Tz: TimeZone>(&mut self, tz: &Tz, value: NaiveTime) -> Result<()> {
        let raw = from_session_local(unix_epoch().and_time(value), tz, self.session())?;
        self.store(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{builder, Harness};
    use super::*;
    use crate::error::Error;
    use crate::protocol::constants::*;
    use crate::session::{SessionParams, SessionZone};
    use chrono::{FixedOffset, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn utc_session() -> SessionParams {
        SessionParams::new().with_session_zone(SessionZone::Fixed(FixedOffset::east_opt(0).unwrap()))
    }

    fn harness(base_type: i32) -> Harness {
        Harness::new(builder().nullable(base_type).build()).with_session(utc_session())
    }

    #[test]
    fn test_date_round_trip() {
        let mut h = harness(SQL_TYPE_DATE);
        let mut field = h.field();
        field.set_date(date(2024, 2, 29)).unwrap();
        assert_eq!(field.get_date().unwrap(), Some(date(2024, 2, 29)));
        assert_eq!(
            field.get_timestamp().unwrap(),
            Some(date(2024, 2, 29).and_time(NaiveTime::MIN))
        );
        assert_eq!(field.get_string().unwrap().as_deref(), Some("2024-02-29"));
        assert!(matches!(field.get_time(), Err(Error::TypeConversion { .. })));

        field.set_timestamp(date(2000, 1, 2).and_time(time(23, 59, 59))).unwrap();
        assert_eq!(field.get_date().unwrap(), Some(date(2000, 1, 2)));
        assert!(matches!(field.set_string("2000-02-30"), Err(Error::Malformed { .. })));
    }

    #[test]
    fn test_time_round_trip() {
        let mut h = harness(SQL_TYPE_TIME);
        let mut field = h.field();
        let t = NaiveTime::from_hms_micro_opt(13, 45, 1, 123_400).unwrap();
        field.set_time(t).unwrap();
        assert_eq!(field.get_time().unwrap(), Some(t));
        assert_eq!(field.get_timestamp().unwrap(), Some(unix_epoch().and_time(t)));
        assert_eq!(field.get_string().unwrap().as_deref(), Some("13:45:01.123400"));
        field.set_string("08:00:00").unwrap();
        assert_eq!(field.get_object().unwrap(), FieldValue::Time(time(8, 0, 0)));
    }

    #[test]
    fn test_timestamp_parts() {
        let mut h = harness(SQL_TIMESTAMP);
        let mut field = h.field();
        let ts = date(2023, 6, 30).and_time(time(22, 15, 0));
        field.set_timestamp(ts).unwrap();
        assert_eq!(field.get_date().unwrap(), Some(date(2023, 6, 30)));
        assert_eq!(field.get_time().unwrap(), Some(time(22, 15, 0)));
        field.set_time(time(1, 2, 3)).unwrap();
        assert_eq!(field.get_timestamp().unwrap(), Some(unix_epoch().and_time(time(1, 2, 3))));
        field.set_string("2023-06-30T22:15:00").unwrap();
        assert_eq!(field.get_timestamp().unwrap(), Some(ts));
    }

    #[test]
    fn test_calendar_shift_moves_date() {
        let mut h = harness(SQL_TIMESTAMP);
        let mut field = h.field();
        field.set_timestamp(date(2023, 6, 30).and_time(time(22, 0, 0))).unwrap();
        // 22:00 at -05:00 is 03:00 UTC the next day
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(
            field.get_timestamp_in(&tz).unwrap(),
            Some(date(2023, 7, 1).and_time(time(3, 0, 0)))
        );
        assert_eq!(field.get_date_in(&tz).unwrap(), Some(date(2023, 7, 1)));
        assert_eq!(field.get_time_in(&Utc).unwrap(), Some(time(22, 0, 0)));

        field.set_timestamp_in(&tz, date(2023, 7, 1).and_time(time(3, 0, 0))).unwrap();
        assert_eq!(
            field.get_timestamp().unwrap(),
            Some(date(2023, 6, 30).and_time(time(22, 0, 0)))
        );
    }

    #[test]
    fn test_calendar_shift_follows_daylight_saving() {
        use chrono_tz::Europe::Amsterdam;

        let mut h = harness(SQL_TIMESTAMP);
        let mut field = h.field();
        // winter: CET, UTC+1
        field.set_timestamp(date(2023, 1, 15).and_time(time(12, 0, 0))).unwrap();
        assert_eq!(
            field.get_timestamp_in(&Amsterdam).unwrap(),
            Some(date(2023, 1, 15).and_time(time(11, 0, 0)))
        );
        // summer: CEST, UTC+2
        field.set_timestamp(date(2023, 7, 15).and_time(time(12, 0, 0))).unwrap();
        assert_eq!(
            field.get_timestamp_in(&Amsterdam).unwrap(),
            Some(date(2023, 7, 15).and_time(time(10, 0, 0)))
        );
        field.set_timestamp_in(&Amsterdam, date(2023, 1, 15).and_time(time(11, 0, 0))).unwrap();
        assert_eq!(
            field.get_timestamp().unwrap(),
            Some(date(2023, 1, 15).and_time(time(12, 0, 0)))
        );
    }

    #[test]
    fn test_calendar_gap_and_overlap() {
        use chrono_tz::Europe::Amsterdam;

        let mut h = harness(SQL_TIMESTAMP);
        let mut field = h.field();
        // 02:30 is skipped when clocks move forward
        field.set_timestamp(date(2023, 3, 26).and_time(time(2, 30, 0))).unwrap();
        assert!(matches!(field.get_timestamp_in(&Amsterdam), Err(Error::Malformed { .. })));
        // 02:30 happens twice when clocks move back; the CEST reading comes first
        field.set_timestamp(date(2023, 10, 29).and_time(time(2, 30, 0))).unwrap();
        assert_eq!(
            field.get_timestamp_in(&Amsterdam).unwrap(),
            Some(date(2023, 10, 29).and_time(time(0, 30, 0)))
        );
    }

    #[test]
    fn test_calendar_date_column() {
        let mut h = harness(SQL_TYPE_DATE);
        let mut field = h.field();
        field.set_date(date(2023, 1, 10)).unwrap();
        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        // midnight at +02:00 is the previous day at 22:00 UTC
        assert_eq!(field.get_date_in(&east).unwrap(), Some(date(2023, 1, 9)));
        field.set_date_in(&east, date(2023, 1, 9)).unwrap();
        assert_eq!(field.get_date().unwrap(), Some(date(2023, 1, 9)));
    }

    #[test]
    fn test_null_table() {
        let mut h = harness(SQL_TIMESTAMP);
        let field = h.field();
        assert_eq!(field.get_timestamp().unwrap(), None);
        assert_eq!(field.get_date_in(&Utc).unwrap(), None);
        assert_eq!(field.get_string().unwrap(), None);
        assert_eq!(field.get_object().unwrap(), FieldValue::Null);
    }
}
