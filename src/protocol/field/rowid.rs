//! The DB_KEY row identifier pseudo-column.

use std::io::Cursor;

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::protocol::types::{FieldValue, RowId};

use super::{FieldAccess, FieldCore};

/// Accessor for row identifiers. Text forms are uppercase hex.
pub struct RowIdField<'r> {
    core: FieldCore<'r>,
}

impl<'r> RowIdField<'r> {
    pub(crate) fn new(core: FieldCore<'r>) -> Self {
        Self { core }
    }

    fn value(&self) -> Option<RowId> {
        self.raw().cloned().map(RowId::new)
    }

    fn store(&mut self, value: Bytes) -> Result<()> {
        let allowed = self.core.desc.length();
        if value.len() > allowed {
            return Err(Error::Truncation {
                attempted: value.len(),
                allowed,
            });
        }
        self.core.store(value);
        Ok(())
    }
}

impl FieldAccess for RowIdField<'_> {
    field_core!();

    fn get_row_id(&self) -> Result<Option<RowId>> {
        Ok(self.value())
    }

    fn get_string(&self) -> Result<Option<String>> {
        Ok(self.value().map(|v| v.to_hex()))
    }

    fn get_object(&self) -> Result<FieldValue> {
        Ok(self.value().map_or(FieldValue::Null, FieldValue::RowId))
    }

    fn get_binary_stream(&self) -> Result<Option<Cursor<Bytes>>> {
        Ok(self.raw().cloned().map(Cursor::new))
    }

    fn set_row_id(&mut self, value: &RowId) -> Result<()> {
        self.store(value.clone().into_bytes())
    }

    fn set_bytes(&mut self, value: &[u8]) -> Result<()> {
        self.store(Bytes::copy_from_slice(value))
    }

    fn set_string(&mut self, value: &str) -> Result<()> {
        self.store(RowId::from_hex(value)?.into_bytes())
    }
}
