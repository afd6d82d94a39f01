//! NUMERIC and DECIMAL columns stored as scaled integers.

use bytes::Bytes;
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::protocol::constants::*;
use crate::protocol::types::FieldValue;

use super::convert;
use super::{FieldAccess, FieldCore};

/// Accessor for fixed-point columns: `value = raw * 10^scale`.
///
/// Writes round half away from zero to the column scale, then check the
/// raw value against the storage width.
pub struct NumericField<'r> {
    core: FieldCore<'r>,
}

impl<'r> NumericField<'r> {
    pub(crate) fn new(core: FieldCore<'r>) -> Self {
        Self { core }
    }

    fn value(&self) -> Result<Option<Decimal>> {
        let base_type = self.core.desc.base_type();
        let scale = self.core.desc.scale();
        self.core.read(|coder, raw| {
            let raw = match base_type {
                SQL_SHORT => i64::from(coder.decode_short(raw)?),
                SQL_LONG => i64::from(coder.decode_int(raw)?),
                _ => coder.decode_long(raw)?,
            };
            convert::scaled_to_decimal(raw, scale)
        })
    }

    fn store(&mut self, value: Decimal) -> Result<()> {
        let coder = *self.core.coder();
        let scale = self.core.desc.scale();
        let encoded: Bytes = match self.core.desc.base_type() {
            SQL_SHORT => {
                let raw = convert::decimal_to_scaled(value, scale, "SMALLINT")?;
                coder.encode_short(i16::try_from(raw).map_err(|_| Error::overflow(value, "SMALLINT"))?)
            }
            SQL_LONG => {
                let raw = convert::decimal_to_scaled(value, scale, "INTEGER")?;
                coder.encode_int(i32::try_from(raw).map_err(|_| Error::overflow(value, "INTEGER"))?)
            }
            _ => coder.encode_long(convert::decimal_to_scaled(value, scale, "BIGINT")?),
        };
        self.core.store(encoded);
        Ok(())
    }
}

impl FieldAccess for NumericField<'_> {
    field_core!();

    fn get_boolean(&self) -> Result<bool> {
        Ok(self.value()? == Some(Decimal::ONE))
    }

    fn get_short(&self) -> Result<i16> {
        match self.value()? {
            Some(v) => convert::to_i16(convert::decimal_to_i64(v, "i16")?),
            None => Ok(0),
        }
    }

    fn get_int(&self) -> Result<i32> {
        match self.value()? {
            Some(v) => convert::to_i32(convert::decimal_to_i64(v, "i32")?),
            None => Ok(0),
        }
    }

    fn get_long(&self) -> Result<i64> {
        match self.value()? {
            Some(v) => convert::decimal_to_i64(v, "i64"),
            None => Ok(0),
        }
    }

    fn get_float(&self) -> Result<f32> {
        Ok(self.get_double()? as f32)
    }

    fn get_double(&self) -> Result<f64> {
        Ok(self.value()?.map(convert::decimal_to_f64).unwrap_or(0.0))
    }

    fn get_decimal(&self) -> Result<Option<Decimal>> {
        self.value()
    }

    fn get_string(&self) -> Result<Option<String>> {
        Ok(self.value()?.map(|v| v.to_string()))
    }

    fn get_object(&self) -> Result<FieldValue> {
        Ok(self.value()?.map_or(FieldValue::Null, FieldValue::Decimal))
    }

    fn set_boolean(&mut self, value: bool) -> Result<()> {
        self.store(if value { Decimal::ONE } else { Decimal::ZERO })
    }

    fn set_short(&mut self, value: i16) -> Result<()> {
        self.store(value.into())
    }

    fn set_int(&mut self, value: i32) -> Result<()> {
        self.store(value.into())
    }

    fn set_long(&mut self, value: i64) -> Result<()> {
        self.store(value.into())
    }

    fn set_float(&mut self, value: f32) -> Result<()> {
        // go through the float's own shortest rendering, not its widened value
        let decimal = convert::parse_decimal(&value.to_string(), "NUMERIC")
            .map_err(|_| Error::overflow(value, "Decimal"))?;
        self.store(decimal)
    }

    fn set_double(&mut self, value: f64) -> Result<()> {
        self.store(convert::f64_to_decimal(value)?)
    }

    fn set_decimal(&mut self, value: Decimal) -> Result<()> {
        self.store(value)
    }

    fn set_string(&mut self, value: &str) -> Result<()> {
        let type_name = self.core.desc.type_name();
        self.store(convert::parse_decimal(value, &type_name)?)
    }
}
