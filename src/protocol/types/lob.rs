//! Large object (BLOB) values.
//!
//! Blob columns are handled in cached mode: the row slot carries the
//! materialized content rather than a server-side blob id, and streams read
//! from or write to that content. Fetching content by blob id is the
//! transport's job.

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::{Error, Result};
use crate::protocol::charset::Charset;

/// Materialized content of a BLOB column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LobValue {
    data: Bytes,
    charset: Option<Charset>,
}

impl LobValue {
    /// Binary content.
    pub fn binary(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            charset: None,
        }
    }

    /// Text content encoded in `charset`.
    pub fn text(data: impl Into<Bytes>, charset: Charset) -> Self {
        Self {
            data: data.into(),
            charset: Some(charset),
        }
    }

    /// Whether this is text (CLOB) content.
    pub fn is_text(&self) -> bool {
        self.charset.is_some()
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Raw content, consuming the value.
    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    /// Decode text content.
    ///
    /// Binary content is rejected with a conversion error.
    pub fn as_string(&self) -> Result<String> {
        match &self.charset {
            Some(charset) => Ok(charset.decode(&self.data)?.into_owned()),
            None => Err(Error::type_conversion("BLOB", "String")),
        }
    }
}

/// Read exactly `length` bytes from `reader`.
///
/// A source that ends early is an error; nothing is returned in that case.
/// The buffer grows with the bytes actually read, so a declared length far
/// beyond the source fails with `UnexpectedEof` instead of allocating it.
pub async fn read_exact_from<R>(reader: &mut R, length: usize) -> Result<Bytes>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut buf = Vec::new();
    let limit = u64::try_from(length).unwrap_or(u64::MAX);
    reader.take(limit).read_to_end(&mut buf).await?;
    if buf.len() < length {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("stream ended after {} of {} bytes", buf.len(), length),
        )
        .into());
    }
    Ok(Bytes::from(buf))
}

/// Validate a caller-supplied stream length.
pub fn stream_length(length: i64) -> Result<usize> {
    usize::try_from(length)
        .map_err(|_| Error::invalid_argument(format!("stream length must be non-negative, got {}", length)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lob() {
        let value = LobValue::text(Bytes::from_static(b"hello"), Charset::utf8());
        assert!(value.is_text());
        assert_eq!(value.len(), 5);
        assert_eq!(value.as_string().unwrap(), "hello");
    }

    #[test]
    fn test_binary_lob_is_not_text() {
        let value = LobValue::binary(vec![0xDE, 0xAD]);
        assert!(!value.is_text());
        assert_eq!(value.as_bytes(), &[0xDE, 0xAD]);
        assert!(matches!(value.as_string(), Err(Error::TypeConversion { .. })));
    }

    #[tokio::test]
    async fn test_read_exact_from() {
        let mut source: &[u8] = b"abcdef";
        let data = read_exact_from(&mut source, 4).await.unwrap();
        assert_eq!(&data[..], b"abcd");
        assert_eq!(source, b"ef");
    }

    #[tokio::test]
    async fn test_read_exact_from_chunked() {
        let mut source = tokio_test::io::Builder::new()
            .read(b"ab")
            .read(b"cd")
            .build();
        let data = read_exact_from(&mut source, 4).await.unwrap();
        assert_eq!(&data[..], b"abcd");
    }

    #[tokio::test]
    async fn test_short_source() {
        let mut source: &[u8] = b"abc";
        match read_exact_from(&mut source, 4).await {
            Err(Error::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
            other => panic!("Expected I/O error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_huge_length_on_short_source() {
        let mut source: &[u8] = b"abc";
        match read_exact_from(&mut source, usize::MAX).await {
            Err(Error::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
            other => panic!("Expected I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_stream_length() {
        assert_eq!(stream_length(10).unwrap(), 10);
        assert!(matches!(stream_length(-1), Err(Error::InvalidArgument { .. })));
    }
}
