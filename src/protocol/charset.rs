//! Character sets and their text encodings.
//!
//! Maps server character-set ids onto `encoding_rs` encodings. `NONE` and
//! `OCTETS` carry no encoding: their bytes map one-to-one onto the first 256
//! code points so a round trip never loses data.

use std::borrow::Cow;

use encoding_rs::Encoding;

use crate::error::{Error, Result};
use crate::protocol::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharsetKind {
    /// Bytes pass through as code points U+0000..U+00FF.
    Octets,
    /// 7-bit ASCII, strict in both directions.
    Ascii,
    Encoded(&'static Encoding),
}

/// A server character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    id: i32,
    name: &'static str,
    max_bytes_per_char: u8,
    kind: CharsetKind,
}

impl Charset {
    /// UTF8, the default session character set.
    pub fn utf8() -> Charset {
        Charset {
            id: CS_UTF8,
            name: "UTF8",
            max_bytes_per_char: 4,
            kind: CharsetKind::Encoded(encoding_rs::UTF_8),
        }
    }

    /// OCTETS, binary data.
    pub const OCTETS: Charset = Charset {
        id: CS_BINARY,
        name: "OCTETS",
        max_bytes_per_char: 1,
        kind: CharsetKind::Octets,
    };

    /// Look up a character set by server id.
    pub fn from_id(id: i32) -> Option<Charset> {
        let (name, max_bytes_per_char, kind) = match id {
            CS_NONE => ("NONE", 1, CharsetKind::Octets),
            CS_BINARY => return Some(Charset::OCTETS),
            CS_ASCII => ("ASCII", 1, CharsetKind::Ascii),
            CS_UNICODE_FSS => ("UNICODE_FSS", 3, CharsetKind::Encoded(encoding_rs::UTF_8)),
            CS_UTF8 => return Some(Charset::utf8()),
            CS_SJIS_0208 => ("SJIS_0208", 2, CharsetKind::Encoded(encoding_rs::SHIFT_JIS)),
            CS_EUCJ_0208 => ("EUCJ_0208", 2, CharsetKind::Encoded(encoding_rs::EUC_JP)),
            CS_ISO8859_1 => ("ISO8859_1", 1, CharsetKind::Encoded(encoding_rs::WINDOWS_1252)),
            CS_ISO8859_2 => ("ISO8859_2", 1, CharsetKind::Encoded(encoding_rs::ISO_8859_2)),
            CS_ISO8859_3 => ("ISO8859_3", 1, CharsetKind::Encoded(encoding_rs::ISO_8859_3)),
            CS_ISO8859_4 => ("ISO8859_4", 1, CharsetKind::Encoded(encoding_rs::ISO_8859_4)),
            CS_ISO8859_5 => ("ISO8859_5", 1, CharsetKind::Encoded(encoding_rs::ISO_8859_5)),
            CS_ISO8859_6 => ("ISO8859_6", 1, CharsetKind::Encoded(encoding_rs::ISO_8859_6)),
            CS_ISO8859_7 => ("ISO8859_7", 1, CharsetKind::Encoded(encoding_rs::ISO_8859_7)),
            CS_ISO8859_8 => ("ISO8859_8", 1, CharsetKind::Encoded(encoding_rs::ISO_8859_8)),
            CS_ISO8859_9 => ("ISO8859_9", 1, CharsetKind::Encoded(encoding_rs::WINDOWS_1254)),
            CS_ISO8859_13 => ("ISO8859_13", 1, CharsetKind::Encoded(encoding_rs::ISO_8859_13)),
            CS_WIN1250 => ("WIN1250", 1, CharsetKind::Encoded(encoding_rs::WINDOWS_1250)),
            CS_WIN1251 => ("WIN1251", 1, CharsetKind::Encoded(encoding_rs::WINDOWS_1251)),
            CS_WIN1252 => ("WIN1252", 1, CharsetKind::Encoded(encoding_rs::WINDOWS_1252)),
            CS_WIN1253 => ("WIN1253", 1, CharsetKind::Encoded(encoding_rs::WINDOWS_1253)),
            CS_WIN1254 => ("WIN1254", 1, CharsetKind::Encoded(encoding_rs::WINDOWS_1254)),
            CS_BIG_5 => ("BIG_5", 2, CharsetKind::Encoded(encoding_rs::BIG5)),
            CS_GB_2312 => ("GB_2312", 2, CharsetKind::Encoded(encoding_rs::GBK)),
            CS_WIN1255 => ("WIN1255", 1, CharsetKind::Encoded(encoding_rs::WINDOWS_1255)),
            CS_WIN1256 => ("WIN1256", 1, CharsetKind::Encoded(encoding_rs::WINDOWS_1256)),
            CS_WIN1257 => ("WIN1257", 1, CharsetKind::Encoded(encoding_rs::WINDOWS_1257)),
            CS_KOI8R => ("KOI8R", 1, CharsetKind::Encoded(encoding_rs::KOI8_R)),
            CS_KOI8U => ("KOI8U", 1, CharsetKind::Encoded(encoding_rs::KOI8_U)),
            CS_WIN1258 => ("WIN1258", 1, CharsetKind::Encoded(encoding_rs::WINDOWS_1258)),
            _ => return None,
        };
        Some(Charset {
            id,
            name,
            max_bytes_per_char,
            kind,
        })
    }

    /// Server character-set id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Server character-set name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Maximum number of bytes a single character occupies.
    pub fn max_bytes_per_char(&self) -> u8 {
        self.max_bytes_per_char
    }

    /// Whether this is the binary (OCTETS) character set.
    pub fn is_binary(&self) -> bool {
        self.id == CS_BINARY
    }

    /// Decode bytes to text.
    ///
    /// Never substitutes: a byte sequence invalid in this character set is
    /// reported as [`Error::Malformed`].
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>> {
        match self.kind {
            CharsetKind::Octets => Ok(Cow::Owned(bytes.iter().map(|&b| b as char).collect())),
            CharsetKind::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(pos) => Err(self.invalid_byte(bytes, pos)),
                None => Ok(Cow::Owned(bytes.iter().map(|&b| b as char).collect())),
            },
            CharsetKind::Encoded(encoding) => encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .ok_or_else(|| {
                    Error::malformed(format!(
                        "byte sequence of {} bytes is not valid {}",
                        bytes.len(),
                        self.name
                    ))
                }),
        }
    }

    /// Encode text to bytes.
    ///
    /// Characters that cannot be represented in this character set are
    /// reported as [`Error::Malformed`].
    pub fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>> {
        match self.kind {
            CharsetKind::Octets => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).map_err(|_| self.unmappable(c)))
                .collect::<Result<Vec<u8>>>()
                .map(Cow::Owned),
            CharsetKind::Ascii => match text.chars().find(|c| !c.is_ascii()) {
                Some(c) => Err(self.unmappable(c)),
                None => Ok(Cow::Borrowed(text.as_bytes())),
            },
            CharsetKind::Encoded(encoding) => {
                let (bytes, _, had_errors) = encoding.encode(text);
                if had_errors {
                    return Err(Error::malformed(format!(
                        "text contains characters not representable in {}",
                        self.name
                    )));
                }
                Ok(bytes)
            }
        }
    }

    fn invalid_byte(&self, bytes: &[u8], pos: usize) -> Error {
        Error::malformed(format!(
            "byte 0x{:02X} at offset {} is not valid {}",
            bytes[pos], pos, self.name
        ))
    }

    fn unmappable(&self, c: char) -> Error {
        Error::malformed(format!(
            "character U+{:04X} is not representable in {}",
            u32::from(c),
            self.name
        ))
    }
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_round_trip() {
        let cs = Charset::utf8();
        let bytes = cs.encode("h\u{e9}llo \u{20ac}").unwrap();
        assert_eq!(cs.decode(&bytes).unwrap(), "h\u{e9}llo \u{20ac}");
    }

    #[test]
    fn test_utf8_rejects_malformed() {
        let result = Charset::utf8().decode(&[0x61, 0xC3]);
        assert!(matches!(result, Err(Error::Malformed { .. })));
    }

    #[test]
    fn test_win1252_unmappable() {
        let cs = Charset::from_id(CS_WIN1252).unwrap();
        assert_eq!(cs.encode("\u{e9}").unwrap().as_ref(), &[0xE9]);
        assert!(matches!(cs.encode("\u{4e2d}"), Err(Error::Malformed { .. })));
    }

    #[test]
    fn test_ascii_is_strict() {
        let cs = Charset::from_id(CS_ASCII).unwrap();
        assert!(cs.decode(&[0x41, 0x80]).is_err());
        assert!(cs.encode("\u{e9}").is_err());
        assert_eq!(cs.decode(b"ABC").unwrap(), "ABC");
    }

    #[test]
    fn test_octets_pass_through() {
        let cs = Charset::OCTETS;
        let bytes: Vec<u8> = (0..=255).collect();
        let text = cs.decode(&bytes).unwrap();
        assert_eq!(cs.encode(&text).unwrap().as_ref(), bytes.as_slice());
        assert!(cs.is_binary());
    }

    #[test]
    fn test_none_is_lossless() {
        let cs = Charset::from_id(CS_NONE).unwrap();
        assert!(!cs.is_binary());
        // 0x80 stays U+0080 rather than becoming a windows-1252 euro sign
        assert_eq!(cs.decode(&[0x41, 0x80, 0xFF]).unwrap(), "A\u{80}\u{ff}");
        assert_eq!(cs.encode("A\u{80}\u{ff}").unwrap().as_ref(), &[0x41u8, 0x80, 0xFF][..]);
        assert!(matches!(cs.encode("\u{20ac}"), Err(Error::Malformed { .. })));
    }

    #[test]
    fn test_unknown_id() {
        assert!(Charset::from_id(9999).is_none());
        assert_eq!(Charset::from_id(CS_UTF8).unwrap().max_bytes_per_char(), 4);
    }
}
