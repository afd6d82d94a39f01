//! CHAR and VARCHAR columns.
//!
//! Every scalar representation goes through the text of the value. CHAR
//! values are padded to the declared length on write and, when the session
//! asks for it, trimmed on read.

use std::io::Cursor;

use bytes::{Bytes, BytesMut};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::protocol::constants::SQL_TEXT;
use crate::protocol::datetime::{self, OffsetTime};
use crate::protocol::types::{trim_trailing_owned, FieldValue};

use super::convert;
use super::{FieldAccess, FieldCore};

/// Accessor for character columns.
pub struct StringField<'r> {
    core: FieldCore<'r>,
}

impl<'r> StringField<'r> {
    pub(crate) fn new(core: FieldCore<'r>) -> Self {
        Self { core }
    }

    fn is_fixed(&self) -> bool {
        self.core.desc.base_type() == SQL_TEXT
    }

    fn text(&self) -> Result<Option<String>> {
        let trim = self.is_fixed() && self.core.session.trim_fixed_text;
        self.core.read(|coder, raw| {
            let text = coder.decode_string(raw)?;
            Ok(if trim { trim_trailing_owned(text) } else { text })
        })
    }

    /// Store encoded text, padding CHAR values to the declared length.
    ///
    /// Nothing is written when the value exceeds the declared length.
    fn store_bytes(&mut self, value: &[u8]) -> Result<()> {
        let allowed = self.core.desc.length();
        if value.len() > allowed {
            return Err(Error::Truncation {
                attempted: value.len(),
                allowed,
            });
        }
        let encoded = if self.is_fixed() && value.len() < allowed {
            let mut buf = BytesMut::with_capacity(allowed);
            buf.extend_from_slice(value);
            buf.resize(allowed, self.core.desc.padding_byte());
            buf.freeze()
        } else {
            Bytes::copy_from_slice(value)
        };
        self.core.store(encoded);
        Ok(())
    }

    fn store_text(&mut self, value: &str) -> Result<()> {
        let encoded = self.core.coder().encode_string(value)?;
        self.store_bytes(&encoded)
    }
}

impl FieldAccess for StringField<'_> {
    field_core!();

    /// `true` for the spellings `true`, `t`, `y` and `1`; any other text
    /// reads as `false`.
    fn get_boolean(&self) -> Result<bool> {
        Ok(self
            .text()?
            .and_then(|t| convert::parse_bool(&t))
            .unwrap_or(false))
    }

    fn get_short(&self) -> Result<i16> {
        match self.text()? {
            Some(t) => convert::to_i16(convert::parse_i64(&t, "i16")?),
            None => Ok(0),
        }
    }

    fn get_int(&self) -> Result<i32> {
        match self.text()? {
            Some(t) => convert::to_i32(convert::parse_i64(&t, "i32")?),
            None => Ok(0),
        }
    }

    fn get_long(&self) -> Result<i64> {
        match self.text()? {
            Some(t) => convert::parse_i64(&t, "i64"),
            None => Ok(0),
        }
    }

    fn get_float(&self) -> Result<f32> {
        match self.text()? {
            Some(t) => convert::f64_to_f32(convert::parse_f64(&t, "f32")?),
            None => Ok(0.0),
        }
    }

    fn get_double(&self) -> Result<f64> {
        match self.text()? {
            Some(t) => convert::parse_f64(&t, "f64"),
            None => Ok(0.0),
        }
    }

    fn get_decimal(&self) -> Result<Option<Decimal>> {
        self.text()?
            .map(|t| convert::parse_decimal(&t, "Decimal"))
            .transpose()
    }

    fn get_string(&self) -> Result<Option<String>> {
        self.text()
    }

    fn get_date(&self) -> Result<Option<NaiveDate>> {
        self.text()?.map(|t| datetime::parse_date(&t)).transpose()
    }

    fn get_time(&self) -> Result<Option<NaiveTime>> {
        self.text()?.map(|t| datetime::parse_time(&t)).transpose()
    }

    fn get_timestamp(&self) -> Result<Option<NaiveDateTime>> {
        self.text()?.map(|t| datetime::parse_timestamp(&t)).transpose()
    }

    fn get_offset_time(&self) -> Result<Option<OffsetTime>> {
        self.text()?.map(|t| datetime::parse_offset_time(&t)).transpose()
    }

    fn get_offset_timestamp(&self) -> Result<Option<DateTime<FixedOffset>>> {
        self.text()?
            .map(|t| datetime::parse_offset_timestamp(&t))
            .transpose()
    }

    fn get_object(&self) -> Result<FieldValue> {
        Ok(self.text()?.map_or(FieldValue::Null, FieldValue::String))
    }

    fn get_binary_stream(&self) -> Result<Option<Cursor<Bytes>>> {
        Ok(self.raw().cloned().map(Cursor::new))
    }

    fn get_character_stream(&self) -> Result<Option<Cursor<String>>> {
        Ok(self.text()?.map(Cursor::new))
    }

    /// CHAR columns shorter than five bytes store `Y`/`N`, others
    /// `true`/`false`.
    fn set_boolean(&mut self, value: bool) -> Result<()> {
        let text = match (self.core.desc.length() < 5, value) {
            (true, true) => "Y",
            (true, false) => "N",
            (false, true) => "true",
            (false, false) => "false",
        };
        self.store_text(text)
    }

    fn set_short(&mut self, value: i16) -> Result<()> {
        self.store_text(&value.to_string())
    }

    fn set_int(&mut self, value: i32) -> Result<()> {
        self.store_text(&value.to_string())
    }

    fn set_long(&mut self, value: i64) -> Result<()> {
        self.store_text(&value.to_string())
    }

    fn set_float(&mut self, value: f32) -> Result<()> {
        self.store_text(&value.to_string())
    }

    fn set_double(&mut self, value: f64) -> Result<()> {
        self.store_text(&value.to_string())
    }

    fn set_decimal(&mut self, value: Decimal) -> Result<()> {
        self.store_text(&value.to_string())
    }

    fn set_string(&mut self, value: &str) -> Result<()> {
        self.store_text(value)
    }

    fn set_bytes(&mut self, value: &[u8]) -> Result<()> {
        self.store_bytes(value)
    }

    fn set_date(&mut self, value: NaiveDate) -> Result<()> {
        self.store_text(&datetime::format_date(value))
    }

    fn set_time(&mut self, value: NaiveTime) -> Result<()> {
        self.store_text(&datetime::format_time(value))
    }

    fn set_timestamp(&mut self, value: NaiveDateTime) -> Result<()> {
        self.store_text(&datetime::format_timestamp(value))
    }

    fn set_offset_time(&mut self, value: OffsetTime) -> Result<()> {
        self.store_text(&value.to_string())
    }

    fn set_offset_timestamp(&mut self, value: DateTime<FixedOffset>) -> Result<()> {
        self.store_text(&datetime::format_offset_timestamp(value))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{builder, Harness};
    use super::*;
    use crate::protocol::constants::*;
    use crate::session::SessionParams;
    use std::io::Read;

    fn char_field(length: usize) -> Harness {
        Harness::new(
            builder()
                .nullable(SQL_TEXT)
                .with_sub_type(CS_UTF8)
                .with_length(length)
                .build(),
        )
    }

    fn varchar_field(length: usize) -> Harness {
        Harness::new(
            builder()
                .nullable(SQL_VARYING)
                .with_sub_type(CS_UTF8)
                .with_length(length)
                .build(),
        )
    }

    #[test]
    fn test_char_pads_and_trims() {
        let mut h = char_field(5);
        let mut field = h.field();
        field.set_string("ab").unwrap();
        assert_eq!(field.get_string().unwrap().as_deref(), Some("ab"));
        assert_eq!(field.get_bytes().unwrap().as_deref(), Some(&b"ab   "[..]));
        drop(field);
        assert_eq!(h.slot.as_deref(), Some(&b"ab   "[..]));
    }

    #[test]
    fn test_char_untrimmed_when_disabled() {
        let mut h = char_field(4).with_session(SessionParams::new().with_trim_fixed_text(false));
        let mut field = h.field();
        field.set_string(" a").unwrap();
        assert_eq!(field.get_string().unwrap().as_deref(), Some(" a  "));
    }

    #[test]
    fn test_truncation_boundary() {
        let mut h = varchar_field(3);
        let mut field = h.field();
        field.set_string("abc").unwrap();
        match field.set_string("abcd") {
            Err(Error::Truncation { attempted, allowed }) => {
                assert_eq!(attempted, 4);
                assert_eq!(allowed, 3);
            }
            other => panic!("expected truncation, got {:?}", other),
        }
        // the failed write did not happen
        assert_eq!(field.get_string().unwrap().as_deref(), Some("abc"));
        field.set_string("ab").unwrap();
        assert_eq!(field.get_string().unwrap().as_deref(), Some("ab"));
    }

    #[test]
    fn test_length_counts_encoded_bytes() {
        let mut h = varchar_field(4);
        let mut field = h.field();
        field.set_string("éé").unwrap();
        assert!(matches!(field.set_string("ééé"), Err(Error::Truncation { attempted: 6, .. })));
    }

    #[test]
    fn test_empty_is_not_null() {
        let mut h = varchar_field(10);
        let mut field = h.field();
        assert_eq!(field.get_string().unwrap(), None);
        field.set_string("").unwrap();
        assert!(!field.is_null());
        assert_eq!(field.get_string().unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_numeric_conversions() {
        let mut h = varchar_field(40);
        let mut field = h.field();
        field.set_int(123).unwrap();
        assert_eq!(field.get_long().unwrap(), 123);
        assert_eq!(field.get_decimal().unwrap(), Some(Decimal::from(123)));
        field.set_string("70000").unwrap();
        assert!(matches!(field.get_short(), Err(Error::Overflow { .. })));
        field.set_string("abc").unwrap();
        assert!(matches!(field.get_int(), Err(Error::TypeConversion { .. })));
        assert_eq!(field.get_object().unwrap(), FieldValue::String("abc".into()));
    }

    #[test]
    fn test_boolean_text() {
        let mut h = char_field(1);
        let mut field = h.field();
        field.set_boolean(true).unwrap();
        assert_eq!(field.get_string().unwrap().as_deref(), Some("Y"));
        assert!(field.get_boolean().unwrap());

        let mut h = varchar_field(10);
        let mut field = h.field();
        field.set_boolean(false).unwrap();
        assert_eq!(field.get_string().unwrap().as_deref(), Some("false"));
        field.set_string("unknown").unwrap();
        assert!(!field.get_boolean().unwrap());
    }

    #[test]
    fn test_temporal_text() {
        let mut h = varchar_field(40);
        let mut field = h.field();
        let ts = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(13, 5, 0)
            .unwrap();
        field.set_timestamp(ts).unwrap();
        assert_eq!(field.get_string().unwrap().as_deref(), Some("2024-02-29 13:05:00"));
        assert_eq!(field.get_timestamp().unwrap(), Some(ts));
        field.set_string("2024-13-01").unwrap();
        assert!(matches!(field.get_date(), Err(Error::Malformed { .. })));
    }

    #[test]
    fn test_streams() {
        let mut h = varchar_field(10);
        let mut field = h.field();
        assert!(field.get_character_stream().unwrap().is_none());
        field.set_string("héllo").unwrap();
        let mut text = String::new();
        field
            .get_character_stream()
            .unwrap()
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "héllo");
        let raw = field.get_binary_stream().unwrap().unwrap().into_inner();
        assert_eq!(&raw[..], "héllo".as_bytes());
    }

    #[tokio::test]
    async fn test_set_streams() {
        let mut h = varchar_field(5);
        let mut field = h.field();
        let mut reader: &[u8] = b"hello world";
        field.set_character_stream(&mut reader, 5).await.unwrap();
        assert_eq!(field.get_string().unwrap().as_deref(), Some("hello"));

        let mut reader: &[u8] = b"abc";
        assert!(matches!(
            field.set_binary_stream(&mut reader, 4).await,
            Err(Error::Io(_))
        ));
        assert_eq!(field.get_string().unwrap().as_deref(), Some("hello"));

        let mut reader: &[u8] = b"abcdef";
        assert!(matches!(
            field.set_binary_stream(&mut reader, 6).await,
            Err(Error::Truncation { .. })
        ));
        assert!(matches!(
            field.set_binary_stream(&mut reader, -1).await,
            Err(Error::InvalidArgument { .. })
        ));
    }
}
