//! BOOLEAN columns.

use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::protocol::types::FieldValue;

use super::convert;
use super::{FieldAccess, FieldCore};

/// Accessor for one-byte boolean columns.
///
/// Numeric representations read `1`/`0`; numeric writes store `true` for any
/// non-zero value.
pub struct BooleanField<'r> {
    core: FieldCore<'r>,
}

impl<'r> BooleanField<'r> {
    pub(crate) fn new(core: FieldCore<'r>) -> Self {
        Self { core }
    }

    fn value(&self) -> Result<Option<bool>> {
        self.core.read(|coder, raw| coder.decode_boolean(raw))
    }

    fn as_number(&self) -> Result<u8> {
        Ok(self.value()?.map_or(0, u8::from))
    }

    fn store(&mut self, value: bool) -> Result<()> {
        let encoded = self.core.coder().encode_boolean(value);
        self.core.store(encoded);
        Ok(())
    }
}

impl FieldAccess for BooleanField<'_> {
    field_core!();

    fn get_boolean(&self) -> Result<bool> {
        Ok(self.value()?.unwrap_or(false))
    }

    fn get_short(&self) -> Result<i16> {
        self.as_number().map(i16::from)
    }

    fn get_int(&self) -> Result<i32> {
        self.as_number().map(i32::from)
    }

    fn get_long(&self) -> Result<i64> {
        self.as_number().map(i64::from)
    }

    fn get_float(&self) -> Result<f32> {
        self.as_number().map(f32::from)
    }

    fn get_double(&self) -> Result<f64> {
        self.as_number().map(f64::from)
    }

    fn get_decimal(&self) -> Result<Option<Decimal>> {
        Ok(self.value()?.map(|v| Decimal::from(u8::from(v))))
    }

    fn get_string(&self) -> Result<Option<String>> {
        Ok(self.value()?.map(|v| v.to_string()))
    }

    fn get_object(&self) -> Result<FieldValue> {
        Ok(self.value()?.map_or(FieldValue::Null, FieldValue::Boolean))
    }

    fn set_boolean(&mut self, value: bool) -> Result<()> {
        self.store(value)
    }

    fn set_short(&mut self, value: i16) -> Result<()> {
        self.store(value != 0)
    }

    fn set_int(&mut self, value: i32) -> Result<()> {
        self.store(value != 0)
    }

    fn set_long(&mut self, value: i64) -> Result<()> {
        self.store(value != 0)
    }

    fn set_float(&mut self, value: f32) -> Result<()> {
        self.store(value != 0.0)
    }

    fn set_double(&mut self, value: f64) -> Result<()> {
        self.store(value != 0.0)
    }

    fn set_decimal(&mut self, value: Decimal) -> Result<()> {
        self.store(!value.is_zero())
    }

    fn set_string(&mut self, value: &str) -> Result<()> {
        match convert::parse_bool(value) {
            Some(v) => self.store(v),
            None => Err(Error::type_conversion_with(
                "String",
                "BOOLEAN",
                format!("'{}' is not a boolean", value),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{builder, Harness};
    use super::*;
    use crate::protocol::constants::SQL_BOOLEAN;

    fn harness() -> Harness {
        Harness::new(builder().nullable(SQL_BOOLEAN).build())
    }

    #[test]
    fn test_boolean_round_trip() {
        let mut h = harness();
        let mut field = h.field();
        field.set_boolean(true).unwrap();
        assert!(field.get_boolean().unwrap());
        assert_eq!(field.get_int().unwrap(), 1);
        assert_eq!(field.get_string().unwrap().as_deref(), Some("true"));
        assert_eq!(field.get_object().unwrap(), FieldValue::Boolean(true));
        drop(field);
        assert_eq!(h.slot.as_deref(), Some(&[1u8][..]));
    }

    #[test]
    fn test_numeric_writes_are_non_zero() {
        let mut h = harness();
        let mut field = h.field();
        field.set_long(-5).unwrap();
        assert!(field.get_boolean().unwrap());
        field.set_double(0.0).unwrap();
        assert!(!field.get_boolean().unwrap());
        assert_eq!(field.get_double().unwrap(), 0.0);
        assert_eq!(field.get_decimal().unwrap(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_string_spellings() {
        let mut h = harness();
        let mut field = h.field();
        field.set_string("Y").unwrap();
        assert!(field.get_boolean().unwrap());
        field.set_string(" false ").unwrap();
        assert!(!field.get_boolean().unwrap());
        assert!(matches!(field.set_string("maybe"), Err(Error::TypeConversion { .. })));
        assert!(!field.get_boolean().unwrap());
    }

    #[test]
    fn test_null_table() {
        let mut h = harness();
        let field = h.field();
        assert!(!field.get_boolean().unwrap());
        assert_eq!(field.get_short().unwrap(), 0);
        assert_eq!(field.get_string().unwrap(), None);
        assert_eq!(field.get_object().unwrap(), FieldValue::Null);
    }
}
