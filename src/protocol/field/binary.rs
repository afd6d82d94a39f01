//! BINARY and VARBINARY columns (text columns with the OCTETS character set).

use std::io::Cursor;

use bytes::{Bytes, BytesMut};

use crate::error::{Error, Result};
use crate::protocol::constants::SQL_TEXT;
use crate::protocol::types::FieldValue;

use super::{FieldAccess, FieldCore};

/// Accessor for binary string columns.
///
/// BINARY values are padded with NUL bytes to the declared length and are
/// never trimmed. Text conversions use the session character set.
pub struct BinaryField<'r> {
    core: FieldCore<'r>,
}

impl<'r> BinaryField<'r> {
    pub(crate) fn new(core: FieldCore<'r>) -> Self {
        Self { core }
    }

    fn store(&mut self, value: &[u8]) -> Result<()> {
        let allowed = self.core.desc.length();
        if value.len() > allowed {
            return Err(Error::Truncation {
                attempted: value.len(),
                allowed,
            });
        }
        let encoded = if self.core.desc.base_type() == SQL_TEXT && value.len() < allowed {
            let mut buf = BytesMut::zeroed(allowed);
            buf[..value.len()].copy_from_slice(value);
            buf.freeze()
        } else {
            Bytes::copy_from_slice(value)
        };
        self.core.store(encoded);
        Ok(())
    }
}

impl FieldAccess for BinaryField<'_> {
    field_core!();

    fn get_string(&self) -> Result<Option<String>> {
        let coder = self.core.session.coder();
        self.raw().map(|raw| coder.decode_string(raw)).transpose()
    }

    fn get_object(&self) -> Result<FieldValue> {
        Ok(self.raw().cloned().map_or(FieldValue::Null, FieldValue::Bytes))
    }

    fn get_binary_stream(&self) -> Result<Option<Cursor<Bytes>>> {
        Ok(self.raw().cloned().map(Cursor::new))
    }

    fn set_string(&mut self, value: &str) -> Result<()> {
        let encoded = self.core.session.coder().encode_string(value)?;
        self.store(&encoded)
    }

    fn set_bytes(&mut self, value: &[u8]) -> Result<()> {
        self.store(value)
    }
}
