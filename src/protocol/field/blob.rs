//! BLOB columns, text (CLOB) and binary.
//!
//! The slot holds the complete LOB content; there is no locator handling at
//! this level.

use std::io::Cursor;

use bytes::Bytes;

use crate::error::Result;
use crate::protocol::constants::BLOB_SUB_TYPE_TEXT;
use crate::protocol::types::{FieldValue, LobValue};

use super::{FieldAccess, FieldCore};

/// Accessor for BLOB columns of any subtype.
pub struct BlobField<'r> {
    core: FieldCore<'r>,
}

impl<'r> BlobField<'r> {
    pub(crate) fn new(core: FieldCore<'r>) -> Self {
        Self { core }
    }

    fn is_text(&self) -> bool {
        self.core.desc.sub_type() == BLOB_SUB_TYPE_TEXT
    }

    fn text(&self) -> Result<Option<String>> {
        self.core.read(|coder, raw| coder.decode_string(raw))
    }
}

impl FieldAccess for BlobField<'_> {
    field_core!();

    fn get_string(&self) -> Result<Option<String>> {
        self.text()
    }

    fn get_object(&self) -> Result<FieldValue> {
        let Some(data) = self.raw().cloned() else {
            return Ok(FieldValue::Null);
        };
        Ok(if self.is_text() {
            FieldValue::Clob(LobValue::text(data, self.core.desc.charset()))
        } else {
            FieldValue::Blob(LobValue::binary(data))
        })
    }

    fn get_binary_stream(&self) -> Result<Option<Cursor<Bytes>>> {
        Ok(self.raw().cloned().map(Cursor::new))
    }

    fn get_character_stream(&self) -> Result<Option<Cursor<String>>> {
        Ok(self.text()?.map(Cursor::new))
    }

    fn set_string(&mut self, value: &str) -> Result<()> {
        let encoded = self.core.coder().encode_string(value)?;
        self.core.store(encoded);
        Ok(())
    }

    fn set_bytes(&mut self, value: &[u8]) -> Result<()> {
        self.core.store(Bytes::copy_from_slice(value));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{builder, Harness};
    use super::*;
    use crate::error::Error;
    use crate::protocol::constants::*;
    use std::io::Read;

    fn harness(sub_type: i32, charset_id: i32) -> Harness {
        Harness::new(
            builder()
                .nullable(SQL_BLOB)
                .with_sub_type(sub_type)
                .with_scale(charset_id)
                .with_length(8)
                .build(),
        )
    }

    #[test]
    fn test_text_blob() {
        let mut h = harness(BLOB_SUB_TYPE_TEXT, CS_ISO8859_1);
        let mut field = h.field();
        field.set_string("café").unwrap();
        // ISO-8859-1 is one byte per character
        assert_eq!(field.get_bytes().unwrap().map(|b| b.len()), Some(4));
        assert_eq!(field.get_string().unwrap().as_deref(), Some("café"));
        match field.get_object().unwrap() {
            FieldValue::Clob(lob) => assert_eq!(lob.as_string().unwrap(), "café"),
            other => panic!("expected a CLOB, got {:?}", other),
        }
        let mut text = String::new();
        field
            .get_character_stream()
            .unwrap()
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "café");
    }

    #[test]
    fn test_binary_blob_has_no_length_limit() {
        let mut h = harness(BLOB_SUB_TYPE_BINARY, CS_NONE);
        let mut field = h.field();
        let data = vec![7u8; 100_000];
        field.set_bytes(&data).unwrap();
        assert_eq!(field.get_bytes().unwrap().map(|b| b.len()), Some(100_000));
        assert!(matches!(field.get_object().unwrap(), FieldValue::Blob(lob) if !lob.is_text()));
        assert!(matches!(field.get_long(), Err(Error::TypeConversion { .. })));
    }

    #[tokio::test]
    async fn test_binary_stream_round_trip() {
        let mut h = harness(BLOB_SUB_TYPE_BINARY, CS_NONE);
        let mut field = h.field();
        let mut reader = tokio_test::io::Builder::new()
            .read(b"\x00\x01")
            .read(b"\x02\x03")
            .build();
        field.set_binary_stream(&mut reader, 4).await.unwrap();
        let cursor = field.get_binary_stream().unwrap().unwrap();
        assert_eq!(&cursor.into_inner()[..], &[0, 1, 2, 3]);
    }

    #[test]
    fn test_null() {
        let mut h = harness(BLOB_SUB_TYPE_TEXT, CS_UTF8);
        let field = h.field();
        assert_eq!(field.get_string().unwrap(), None);
        assert!(field.get_character_stream().unwrap().is_none());
        assert_eq!(field.get_object().unwrap(), FieldValue::Null);
    }
}
