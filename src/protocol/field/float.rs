//! FLOAT and DOUBLE PRECISION columns.

use bytes::Bytes;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::protocol::constants::*;
use crate::protocol::types::FieldValue;

use super::convert;
use super::{FieldAccess, FieldCore};

/// Accessor for binary floating point columns.
///
/// FLOAT columns hold 4-byte single precision values; every other base type
/// bound to this accessor is read as an 8-byte double.
pub struct FloatField<'r> {
    core: FieldCore<'r>,
}

impl<'r> FloatField<'r> {
    pub(crate) fn new(core: FieldCore<'r>) -> Self {
        Self { core }
    }

    fn is_single(&self) -> bool {
        self.core.desc.base_type() == SQL_FLOAT
    }

    fn value(&self) -> Result<Option<f64>> {
        let single = self.is_single();
        self.core.read(|coder, raw| {
            if single {
                coder.decode_float(raw).map(f64::from)
            } else {
                coder.decode_double(raw)
            }
        })
    }

    fn store(&mut self, value: f64) -> Result<()> {
        let coder = *self.core.coder();
        let encoded: Bytes = if self.is_single() {
            coder.encode_float(convert::f64_to_f32(value)?)
        } else {
            coder.encode_double(value)
        };
        self.core.store(encoded);
        Ok(())
    }

    /// Shortest text of the stored value at the column precision.
    fn text(&self, value: f64) -> String {
        if self.is_single() {
            (value as f32).to_string()
        } else {
            value.to_string()
        }
    }
}

impl FieldAccess for FloatField<'_> {
    field_core!();

    fn get_boolean(&self) -> Result<bool> {
        Ok(self.value()? == Some(1.0))
    }

    fn get_short(&self) -> Result<i16> {
        match self.value()? {
            Some(v) => convert::to_i16(convert::f64_to_i64(v, "i16")?),
            None => Ok(0),
        }
    }

    fn get_int(&self) -> Result<i32> {
        match self.value()? {
            Some(v) => convert::to_i32(convert::f64_to_i64(v, "i32")?),
            None => Ok(0),
        }
    }

    fn get_long(&self) -> Result<i64> {
        match self.value()? {
            Some(v) => convert::f64_to_i64(v, "i64"),
            None => Ok(0),
        }
    }

    fn get_float(&self) -> Result<f32> {
        match self.value()? {
            Some(v) => convert::f64_to_f32(v),
            None => Ok(0.0),
        }
    }

    fn get_double(&self) -> Result<f64> {
        Ok(self.value()?.unwrap_or(0.0))
    }

    fn get_decimal(&self) -> Result<Option<Decimal>> {
        match self.value()? {
            Some(v) if self.is_single() => {
                convert::parse_decimal(&self.text(v), "Decimal").map(Some)
            }
            Some(v) => convert::f64_to_decimal(v).map(Some),
            None => Ok(None),
        }
    }

    fn get_string(&self) -> Result<Option<String>> {
        Ok(self.value()?.map(|v| self.text(v)))
    }

    fn get_object(&self) -> Result<FieldValue> {
        Ok(match self.value()? {
            None => FieldValue::Null,
            Some(v) if self.is_single() => FieldValue::Float(v as f32),
            Some(v) => FieldValue::Double(v),
        })
    }

    fn set_boolean(&mut self, value: bool) -> Result<()> {
        self.store(if value { 1.0 } else { 0.0 })
    }

    fn set_short(&mut self, value: i16) -> Result<()> {
        self.store(value.into())
    }

    fn set_int(&mut self, value: i32) -> Result<()> {
        self.store(value.into())
    }

    fn set_long(&mut self, value: i64) -> Result<()> {
        self.store(value as f64)
    }

    fn set_float(&mut self, value: f32) -> Result<()> {
        self.store(value.into())
    }

    fn set_double(&mut self, value: f64) -> Result<()> {
        self.store(value)
    }

    fn set_decimal(&mut self, value: Decimal) -> Result<()> {
        self.store(convert::decimal_to_f64(value))
    }

    fn set_string(&mut self, value: &str) -> Result<()> {
        let type_name = self.core.desc.type_name();
        self.store(convert::parse_f64(value, &type_name)?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{builder, Harness};
    use super::*;
    use crate::error::Error;
    use std::str::FromStr;

    fn harness(base_type: i32) -> Harness {
        Harness::new(builder().nullable(base_type).build())
    }

    #[test]
    fn test_double_round_trip() {
        let mut h = harness(SQL_DOUBLE);
        let mut field = h.field();
        field.set_double(1.5e300).unwrap();
        assert_eq!(field.get_double().unwrap(), 1.5e300);
        assert!(matches!(field.get_float(), Err(Error::Overflow { .. })));
        assert!(field.get_long().is_err());
        drop(field);
        assert_eq!(h.slot.as_deref(), Some(&1.5e300f64.to_be_bytes()[..]));
    }

    #[test]
    fn test_float_column_is_single_precision() {
        let mut h = harness(SQL_FLOAT);
        let mut field = h.field();
        field.set_double(0.1).unwrap();
        assert_eq!(field.get_float().unwrap(), 0.1f32);
        assert_eq!(field.get_string().unwrap().as_deref(), Some("0.1"));
        assert_eq!(field.get_decimal().unwrap(), Some(Decimal::from_str("0.1").unwrap()));
        assert_eq!(field.get_object().unwrap(), FieldValue::Float(0.1));
        assert!(matches!(field.set_double(1e39), Err(Error::Overflow { .. })));
        drop(field);
        assert_eq!(h.slot.as_ref().map(|b| b.len()), Some(4));
    }

    #[test]
    fn test_integral_getters_truncate() {
        let mut h = harness(SQL_DOUBLE);
        let mut field = h.field();
        field.set_string("-3.99").unwrap();
        assert_eq!(field.get_int().unwrap(), -3);
        assert_eq!(field.get_short().unwrap(), -3);
        field.set_double(70_000.0).unwrap();
        assert!(matches!(field.get_short(), Err(Error::Overflow { .. })));
    }

    #[test]
    fn test_null_and_boolean() {
        let mut h = harness(SQL_DOUBLE);
        let mut field = h.field();
        assert_eq!(field.get_double().unwrap(), 0.0);
        assert_eq!(field.get_float().unwrap(), 0.0);
        assert_eq!(field.get_decimal().unwrap(), None);
        assert!(!field.get_boolean().unwrap());
        field.set_boolean(true).unwrap();
        assert!(field.get_boolean().unwrap());
        assert!(matches!(field.set_string("x1"), Err(Error::TypeConversion { .. })));
        assert!(matches!(field.get_timestamp(), Err(Error::TypeConversion { .. })));
    }
}
