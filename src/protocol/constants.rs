//! Wire protocol constants.
//!
//! Wire type codes come in pairs: the even code is the NOT NULL variant and
//! the odd code (even + 1) is the nullable variant of the same type.

// Wire types
pub const SQL_VARYING: i32 = 448;
pub const SQL_TEXT: i32 = 452;
pub const SQL_DOUBLE: i32 = 480;
pub const SQL_FLOAT: i32 = 482;
pub const SQL_LONG: i32 = 496;
pub const SQL_SHORT: i32 = 500;
pub const SQL_TIMESTAMP: i32 = 510;
pub const SQL_BLOB: i32 = 520;
pub const SQL_D_FLOAT: i32 = 530;
pub const SQL_ARRAY: i32 = 540;
pub const SQL_QUAD: i32 = 550;
pub const SQL_TYPE_TIME: i32 = 560;
pub const SQL_TYPE_DATE: i32 = 570;
pub const SQL_INT64: i32 = 580;
pub const SQL_TIMESTAMP_TZ: i32 = 32754;
pub const SQL_TIME_TZ: i32 = 32756;
pub const SQL_BOOLEAN: i32 = 32764;
pub const SQL_NULL: i32 = 32766;

// Unsupported by this codec, recognised for error reporting only
pub const SQL_TIMESTAMP_TZ_EX: i32 = 32748;
pub const SQL_TIME_TZ_EX: i32 = 32750;
pub const SQL_INT128: i32 = 32752;
pub const SQL_DEC16: i32 = 32760;
pub const SQL_DEC34: i32 = 32762;

// Integer subtypes
pub const SUBTYPE_NONE: i32 = 0;
pub const SUBTYPE_NUMERIC: i32 = 1;
pub const SUBTYPE_DECIMAL: i32 = 2;

// Blob subtypes
pub const BLOB_SUB_TYPE_BINARY: i32 = 0;
pub const BLOB_SUB_TYPE_TEXT: i32 = 1;
pub const BLOB_SUB_TYPE_BLR: i32 = 2;

// Character set ids
pub const CS_NONE: i32 = 0;
pub const CS_BINARY: i32 = 1;
pub const CS_ASCII: i32 = 2;
pub const CS_UNICODE_FSS: i32 = 3;
pub const CS_UTF8: i32 = 4;
pub const CS_SJIS_0208: i32 = 5;
pub const CS_EUCJ_0208: i32 = 6;
pub const CS_ISO8859_1: i32 = 21;
pub const CS_ISO8859_2: i32 = 22;
pub const CS_ISO8859_3: i32 = 23;
pub const CS_ISO8859_4: i32 = 34;
pub const CS_ISO8859_5: i32 = 35;
pub const CS_ISO8859_6: i32 = 36;
pub const CS_ISO8859_7: i32 = 37;
pub const CS_ISO8859_8: i32 = 38;
pub const CS_ISO8859_9: i32 = 39;
pub const CS_ISO8859_13: i32 = 40;
pub const CS_WIN1250: i32 = 51;
pub const CS_WIN1251: i32 = 52;
pub const CS_WIN1252: i32 = 53;
pub const CS_WIN1253: i32 = 54;
pub const CS_WIN1254: i32 = 55;
pub const CS_BIG_5: i32 = 56;
pub const CS_GB_2312: i32 = 57;
pub const CS_WIN1255: i32 = 58;
pub const CS_WIN1256: i32 = 59;
pub const CS_WIN1257: i32 = 60;
pub const CS_KOI8R: i32 = 63;
pub const CS_KOI8U: i32 = 64;
pub const CS_WIN1258: i32 = 65;

// Catalog (RDB$FIELD_TYPE) type codes
pub const META_SMALLINT: i32 = 7;
pub const META_INTEGER: i32 = 8;
pub const META_QUAD: i32 = 9;
pub const META_FLOAT: i32 = 10;
pub const META_D_FLOAT: i32 = 11;
pub const META_DATE: i32 = 12;
pub const META_TIME: i32 = 13;
pub const META_CHAR: i32 = 14;
pub const META_INT64: i32 = 16;
pub const META_BOOLEAN: i32 = 23;
pub const META_DOUBLE: i32 = 27;
pub const META_TIME_TZ: i32 = 28;
pub const META_TIMESTAMP_TZ: i32 = 29;
pub const META_TIMESTAMP: i32 = 35;
pub const META_VARCHAR: i32 = 37;
pub const META_CSTRING: i32 = 40;
pub const META_BLOB_ID: i32 = 45;
pub const META_BLOB: i32 = 261;

/// Original column name of the row-identifier pseudo-column.
pub const DB_KEY_NAME: &str = "DB_KEY";

// Encoded widths
pub const SIZE_OF_SHORT: usize = 2;
pub const SIZE_OF_INT: usize = 4;
pub const SIZE_OF_LONG: usize = 8;
pub const SIZE_OF_FLOAT: usize = 4;
pub const SIZE_OF_DOUBLE: usize = 8;
pub const SIZE_OF_BOOLEAN: usize = 1;
pub const SIZE_OF_DATE: usize = 4;
pub const SIZE_OF_TIME: usize = 4;
pub const SIZE_OF_TIMESTAMP: usize = 8;
pub const SIZE_OF_TIME_TZ: usize = 6;
pub const SIZE_OF_TIMESTAMP_TZ: usize = 10;

// Date/time representation
/// Days between the wire date epoch (1858-11-17) and 1970-01-01.
pub const MJD_UNIX_EPOCH_OFFSET: i32 = 40587;
/// Wire time resolution: one unit is 100 microseconds.
pub const NANOS_PER_TIME_UNIT: u32 = 100_000;
pub const TIME_UNITS_PER_SECOND: u32 = 10_000;
pub const TIME_UNITS_PER_DAY: u32 = 24 * 60 * 60 * TIME_UNITS_PER_SECOND;

// Time zone ids
/// Offset zones are encoded as `offset_minutes + TZ_OFFSET_BIAS`.
pub const TZ_OFFSET_BIAS: i32 = 1439;
pub const TZ_OFFSET_MAX_ID: i32 = 2 * TZ_OFFSET_BIAS;
pub const TZ_ID_GMT: u16 = 65535;
