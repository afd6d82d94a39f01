//! SMALLINT, INTEGER and BIGINT columns.

use bytes::Bytes;
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::protocol::constants::*;
use crate::protocol::types::FieldValue;

use super::convert;
use super::{FieldAccess, FieldCore};

/// Accessor for plain integer columns of 2, 4 or 8 bytes.
pub struct IntegralField<'r> {
    core: FieldCore<'r>,
}

impl<'r> IntegralField<'r> {
    pub(crate) fn new(core: FieldCore<'r>) -> Self {
        Self { core }
    }

    fn value(&self) -> Result<Option<i64>> {
        let base_type = self.core.desc.base_type();
        self.core.read(|coder, raw| match base_type {
            SQL_SHORT => coder.decode_short(raw).map(i64::from),
            SQL_LONG => coder.decode_int(raw).map(i64::from),
            _ => coder.decode_long(raw),
        })
    }

    fn store(&mut self, value: i64) -> Result<()> {
        let coder = *self.core.coder();
        let encoded: Bytes = match self.core.desc.base_type() {
            SQL_SHORT => coder.encode_short(
                i16::try_from(value).map_err(|_| Error::overflow(value, "SMALLINT"))?,
            ),
            SQL_LONG => coder.encode_int(
                i32::try_from(value).map_err(|_| Error::overflow(value, "INTEGER"))?,
            ),
            _ => coder.encode_long(value),
        };
        self.core.store(encoded);
        Ok(())
    }
}

impl FieldAccess for IntegralField<'_> {
    field_core!();

    fn get_boolean(&self) -> Result<bool> {
        Ok(self.value()? == Some(1))
    }

    fn get_short(&self) -> Result<i16> {
        convert::to_i16(self.value()?.unwrap_or(0))
    }

    fn get_int(&self) -> Result<i32> {
        convert::to_i32(self.value()?.unwrap_or(0))
    }

    fn get_long(&self) -> Result<i64> {
        Ok(self.value()?.unwrap_or(0))
    }

    fn get_float(&self) -> Result<f32> {
        Ok(self.value()?.unwrap_or(0) as f32)
    }

    fn get_double(&self) -> Result<f64> {
        Ok(self.value()?.unwrap_or(0) as f64)
    }

    fn get_decimal(&self) -> Result<Option<Decimal>> {
        Ok(self.value()?.map(Decimal::from))
    }

    fn get_string(&self) -> Result<Option<String>> {
        Ok(self.value()?.map(|v| v.to_string()))
    }

    fn get_object(&self) -> Result<FieldValue> {
        let Some(value) = self.value()? else {
            return Ok(FieldValue::Null);
        };
        // value() decoded at the column width, so narrowing cannot fail
        Ok(match self.core.desc.base_type() {
            SQL_SHORT => FieldValue::SmallInt(value as i16),
            SQL_LONG => FieldValue::Integer(value as i32),
            _ => FieldValue::BigInt(value),
        })
    }

    fn set_boolean(&mut self, value: bool) -> Result<()> {
        self.store(i64::from(value))
    }

    fn set_short(&mut self, value: i16) -> Result<()> {
        self.store(value.into())
    }

    fn set_int(&mut self, value: i32) -> Result<()> {
        self.store(value.into())
    }

    fn set_long(&mut self, value: i64) -> Result<()> {
        self.store(value)
    }

    fn set_float(&mut self, value: f32) -> Result<()> {
        self.store(convert::f64_to_i64(value.into(), "i64")?)
    }

    fn set_double(&mut self, value: f64) -> Result<()> {
        self.store(convert::f64_to_i64(value, "i64")?)
    }

    fn set_decimal(&mut self, value: Decimal) -> Result<()> {
        self.store(convert::decimal_to_i64(value, "i64")?)
    }

    fn set_string(&mut self, value: &str) -> Result<()> {
        let type_name = self.core.desc.type_name();
        self.store(convert::parse_i64(value, &type_name)?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{builder, Harness};
    use super::*;
    use std::str::FromStr;

    fn harness(base_type: i32) -> Harness {
        Harness::new(builder().nullable(base_type).build())
    }

    #[test]
    fn test_int_max_round_trip() {
        let mut h = harness(SQL_LONG);
        let mut field = h.field();
        field.set_int(i32::MAX).unwrap();
        assert_eq!(field.get_int().unwrap(), i32::MAX);
        assert!(matches!(field.get_short(), Err(Error::Overflow { .. })));
        assert_eq!(field.get_long().unwrap(), i32::MAX as i64);
        drop(field);
        assert_eq!(h.slot.as_deref(), Some(&i32::MAX.to_be_bytes()[..]));
    }

    #[test]
    fn test_set_overflows_column_width() {
        let mut h = harness(SQL_SHORT);
        let mut field = h.field();
        field.set_short(7).unwrap();
        assert!(matches!(field.set_int(40_000), Err(Error::Overflow { .. })));
        // failed write leaves the previous value
        assert_eq!(field.get_short().unwrap(), 7);
        assert!(field.set_double(f64::NAN).is_err());
    }

    #[test]
    fn test_null_table() {
        let mut h = harness(SQL_INT64);
        let field = h.field();
        assert!(field.is_null());
        assert_eq!(field.get_long().unwrap(), 0);
        assert_eq!(field.get_double().unwrap(), 0.0);
        assert!(!field.get_boolean().unwrap());
        assert_eq!(field.get_string().unwrap(), None);
        assert_eq!(field.get_decimal().unwrap(), None);
        assert_eq!(field.get_object().unwrap(), FieldValue::Null);
    }

    #[test]
    fn test_conversions() {
        let mut h = harness(SQL_INT64);
        let mut field = h.field();
        field.set_string(" -42 ").unwrap();
        assert_eq!(field.get_long().unwrap(), -42);
        assert_eq!(field.get_string().unwrap().as_deref(), Some("-42"));
        assert_eq!(field.get_object().unwrap(), FieldValue::BigInt(-42));

        field.set_double(12.9).unwrap();
        assert_eq!(field.get_long().unwrap(), 12);
        field.set_decimal(Decimal::from_str("-7.8").unwrap()).unwrap();
        assert_eq!(field.get_long().unwrap(), -7);

        field.set_boolean(true).unwrap();
        assert!(field.get_boolean().unwrap());
        field.set_long(2).unwrap();
        assert!(!field.get_boolean().unwrap());

        assert!(matches!(field.set_string("abc"), Err(Error::TypeConversion { .. })));
        assert!(matches!(field.get_date(), Err(Error::TypeConversion { .. })));
        assert!(matches!(field.get_binary_stream(), Err(Error::TypeConversion { .. })));
    }

    #[test]
    fn test_idempotent_reads() {
        let mut h = harness(SQL_LONG);
        let mut field = h.field();
        field.set_int(5).unwrap();
        assert_eq!(field.get_int().unwrap(), field.get_int().unwrap());
        assert_eq!(field.is_null(), field.is_null());
    }
}
