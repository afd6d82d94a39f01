//! Mapping between wire types, catalog types and standard SQL types.
//!
//! The forward mapping is an ordered rule table: the first rule whose wire
//! type and predicate match decides the standard type. The nullability bit of
//! the wire type is cleared before lookup, so `N` and `N + 1` always map to
//! the same standard type.

use crate::error::{Error, Result};
use crate::protocol::constants::*;

use super::descriptor::FieldDescriptor;
use super::sql_type::SqlType;

struct Rule {
    wire_types: &'static [i32],
    matches: fn(i32, i32) -> bool,
    sql_type: SqlType,
}

fn any(_sub_type: i32, _scale: i32) -> bool {
    true
}

fn binary_text(sub_type: i32, _scale: i32) -> bool {
    sub_type & 0xFF == CS_BINARY
}

fn decimal(sub_type: i32, _scale: i32) -> bool {
    sub_type == SUBTYPE_DECIMAL
}

fn numeric(sub_type: i32, scale: i32) -> bool {
    sub_type == SUBTYPE_NUMERIC || (sub_type == SUBTYPE_NONE && scale != 0)
}

fn text_blob(sub_type: i32, _scale: i32) -> bool {
    sub_type == BLOB_SUB_TYPE_TEXT
}

fn binary_blob(sub_type: i32, _scale: i32) -> bool {
    sub_type == BLOB_SUB_TYPE_BINARY || sub_type == BLOB_SUB_TYPE_BLR
}

const SCALED_INTEGERS: &[i32] = &[SQL_SHORT, SQL_LONG, SQL_INT64];

/// Forward rules, evaluated top to bottom.
const RULES: &[Rule] = &[
    Rule { wire_types: &[SQL_TEXT], matches: binary_text, sql_type: SqlType::Binary },
    Rule { wire_types: &[SQL_TEXT], matches: any, sql_type: SqlType::Char },
    Rule { wire_types: &[SQL_VARYING], matches: binary_text, sql_type: SqlType::Varbinary },
    Rule { wire_types: &[SQL_VARYING], matches: any, sql_type: SqlType::Varchar },
    Rule { wire_types: SCALED_INTEGERS, matches: decimal, sql_type: SqlType::Decimal },
    Rule { wire_types: SCALED_INTEGERS, matches: numeric, sql_type: SqlType::Numeric },
    Rule { wire_types: &[SQL_SHORT], matches: any, sql_type: SqlType::SmallInt },
    Rule { wire_types: &[SQL_LONG], matches: any, sql_type: SqlType::Integer },
    Rule { wire_types: &[SQL_INT64], matches: any, sql_type: SqlType::BigInt },
    Rule { wire_types: &[SQL_FLOAT], matches: any, sql_type: SqlType::Float },
    Rule { wire_types: &[SQL_DOUBLE, SQL_D_FLOAT], matches: any, sql_type: SqlType::Double },
    Rule { wire_types: &[SQL_TYPE_DATE], matches: any, sql_type: SqlType::Date },
    Rule { wire_types: &[SQL_TYPE_TIME], matches: any, sql_type: SqlType::Time },
    Rule { wire_types: &[SQL_TIMESTAMP], matches: any, sql_type: SqlType::Timestamp },
    Rule { wire_types: &[SQL_TIME_TZ], matches: any, sql_type: SqlType::TimeWithTimezone },
    Rule { wire_types: &[SQL_TIMESTAMP_TZ], matches: any, sql_type: SqlType::TimestampWithTimezone },
    Rule { wire_types: &[SQL_BLOB], matches: text_blob, sql_type: SqlType::LongVarchar },
    Rule { wire_types: &[SQL_BLOB], matches: binary_blob, sql_type: SqlType::LongVarbinary },
    Rule { wire_types: &[SQL_BLOB], matches: any, sql_type: SqlType::Blob },
    Rule { wire_types: &[SQL_BOOLEAN], matches: any, sql_type: SqlType::Boolean },
    Rule { wire_types: &[SQL_QUAD], matches: any, sql_type: SqlType::Other },
    Rule { wire_types: &[SQL_ARRAY], matches: any, sql_type: SqlType::Array },
    Rule { wire_types: &[SQL_NULL], matches: any, sql_type: SqlType::Null },
];

/// Map a wire type to its standard SQL type.
///
/// Returns `Err(Error::UnsupportedType)` for wire types this codec does not
/// handle.
pub fn try_sql_type(wire_type: i32, sub_type: i32, scale: i32) -> Result<SqlType> {
    let base = wire_type & !1;
    RULES
        .iter()
        .find(|rule| rule.wire_types.contains(&base) && (rule.matches)(sub_type, scale))
        .map(|rule| rule.sql_type)
        .ok_or(Error::UnsupportedType { wire_type, sub_type })
}

/// Map a wire type to its standard SQL type, `OTHER` when unknown.
pub fn sql_type(wire_type: i32, sub_type: i32, scale: i32) -> SqlType {
    try_sql_type(wire_type, sub_type, scale).unwrap_or(SqlType::Other)
}

/// Standard SQL type of a column.
///
/// Identical to [`sql_type`] except for the `DB_KEY` pseudo-column, which
/// is recognised by its name and maps to `ROWID`.
pub fn sql_type_of(desc: &FieldDescriptor) -> SqlType {
    if desc.is_db_key() {
        return SqlType::RowId;
    }
    sql_type(desc.wire_type(), desc.sub_type(), desc.scale())
}

/// Canonical (NOT NULL) wire representation of a standard type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireType {
    pub wire_type: i32,
    pub sub_type: i32,
}

impl WireType {
    const fn new(wire_type: i32, sub_type: i32) -> Self {
        Self { wire_type, sub_type }
    }
}

/// Canonical wire type a parameter of standard type `sql_type` is sent as.
///
/// NUMERIC and DECIMAL both go out as BIGINT storage with the NUMERIC subtype.
pub fn wire_type_for(sql_type: SqlType) -> WireType {
    match sql_type {
        SqlType::Char => WireType::new(SQL_TEXT, SUBTYPE_NONE),
        SqlType::Binary | SqlType::RowId => WireType::new(SQL_TEXT, CS_BINARY),
        SqlType::Varchar => WireType::new(SQL_VARYING, SUBTYPE_NONE),
        SqlType::Varbinary => WireType::new(SQL_VARYING, CS_BINARY),
        SqlType::LongVarchar | SqlType::Clob => WireType::new(SQL_BLOB, BLOB_SUB_TYPE_TEXT),
        SqlType::LongVarbinary | SqlType::Blob => WireType::new(SQL_BLOB, BLOB_SUB_TYPE_BINARY),
        SqlType::SmallInt => WireType::new(SQL_SHORT, SUBTYPE_NONE),
        SqlType::Integer => WireType::new(SQL_LONG, SUBTYPE_NONE),
        SqlType::BigInt => WireType::new(SQL_INT64, SUBTYPE_NONE),
        SqlType::Numeric | SqlType::Decimal => WireType::new(SQL_INT64, SUBTYPE_NUMERIC),
        SqlType::Float => WireType::new(SQL_FLOAT, SUBTYPE_NONE),
        SqlType::Double => WireType::new(SQL_DOUBLE, SUBTYPE_NONE),
        SqlType::Date => WireType::new(SQL_TYPE_DATE, SUBTYPE_NONE),
        SqlType::Time => WireType::new(SQL_TYPE_TIME, SUBTYPE_NONE),
        SqlType::Timestamp => WireType::new(SQL_TIMESTAMP, SUBTYPE_NONE),
        SqlType::TimeWithTimezone => WireType::new(SQL_TIME_TZ, SUBTYPE_NONE),
        SqlType::TimestampWithTimezone => WireType::new(SQL_TIMESTAMP_TZ, SUBTYPE_NONE),
        SqlType::Boolean => WireType::new(SQL_BOOLEAN, SUBTYPE_NONE),
        SqlType::Null => WireType::new(SQL_NULL, SUBTYPE_NONE),
        SqlType::Array => WireType::new(SQL_ARRAY, SUBTYPE_NONE),
        SqlType::Other => WireType::new(SQL_QUAD, SUBTYPE_NONE),
    }
}

/// Translate a catalog type code to its wire type.
pub fn meta_to_wire_type(meta_type: i32) -> Option<i32> {
    Some(match meta_type {
        META_SMALLINT => SQL_SHORT,
        META_INTEGER => SQL_LONG,
        META_INT64 => SQL_INT64,
        META_QUAD | META_BLOB_ID => SQL_QUAD,
        META_FLOAT => SQL_FLOAT,
        META_D_FLOAT => SQL_D_FLOAT,
        META_DOUBLE => SQL_DOUBLE,
        META_DATE => SQL_TYPE_DATE,
        META_TIME => SQL_TYPE_TIME,
        META_TIMESTAMP => SQL_TIMESTAMP,
        META_TIME_TZ => SQL_TIME_TZ,
        META_TIMESTAMP_TZ => SQL_TIMESTAMP_TZ,
        META_CHAR => SQL_TEXT,
        META_VARCHAR | META_CSTRING => SQL_VARYING,
        META_BOOLEAN => SQL_BOOLEAN,
        META_BLOB => SQL_BLOB,
        _ => return None,
    })
}

/// Map a catalog column type to its standard SQL type.
///
/// Catalog rows do not carry the character set in the text subtype, so the
/// column character set is passed separately: OCTETS turns CHAR and VARCHAR
/// into BINARY and VARBINARY.
pub fn sql_type_from_metadata(
    meta_type: i32,
    sub_type: i32,
    scale: i32,
    charset_id: Option<i32>,
) -> Result<SqlType> {
    let wire_type = meta_to_wire_type(meta_type).ok_or(Error::UnsupportedType {
        wire_type: meta_type,
        sub_type,
    })?;
    let sql_type = try_sql_type(wire_type, sub_type, scale)?;
    Ok(match (sql_type, charset_id) {
        (SqlType::Char, Some(CS_BINARY)) => SqlType::Binary,
        (SqlType::Varchar, Some(CS_BINARY)) => SqlType::Varbinary,
        (other, _) => other,
    })
}

/// Server type name of a wire type, e.g. `NUMERIC` or `BLOB SUB_TYPE 1`.
pub fn type_name(wire_type: i32, sub_type: i32, scale: i32) -> String {
    let base = wire_type & !1;
    let name = match base {
        SQL_BLOB => return format!("BLOB SUB_TYPE {}", sub_type),
        SQL_TEXT => "CHAR",
        SQL_VARYING => "VARCHAR",
        SQL_DOUBLE | SQL_D_FLOAT => "DOUBLE PRECISION",
        SQL_QUAD => "QUAD",
        _ => match try_sql_type(wire_type, sub_type, scale) {
            Ok(SqlType::TimeWithTimezone) => "TIME WITH TIME ZONE",
            Ok(SqlType::TimestampWithTimezone) => "TIMESTAMP WITH TIME ZONE",
            Ok(sql_type) => sql_type.name(),
            Err(_) => return format!("UNKNOWN ({})", wire_type),
        },
    };
    name.to_string()
}

/// Maximum number of digits or characters of a column.
pub fn precision(desc: &FieldDescriptor) -> usize {
    match desc.sql_type() {
        SqlType::SmallInt => 5,
        SqlType::Integer => 10,
        SqlType::BigInt => 19,
        SqlType::Numeric | SqlType::Decimal => match desc.base_type() {
            SQL_SHORT => 4,
            SQL_LONG => 9,
            _ => 18,
        },
        SqlType::Float => 7,
        SqlType::Double => 15,
        SqlType::Date => 10,
        SqlType::Time => 8,
        SqlType::Timestamp => 19,
        SqlType::TimeWithTimezone => 19,
        SqlType::TimestampWithTimezone => 30,
        SqlType::Boolean => 1,
        SqlType::Char | SqlType::Varchar => {
            desc.length() / desc.charset().max_bytes_per_char().max(1) as usize
        }
        SqlType::Binary | SqlType::Varbinary | SqlType::RowId => desc.length(),
        _ => 0,
    }
}

/// Normal maximum width of a column's text rendering.
pub fn display_size(desc: &FieldDescriptor) -> usize {
    match desc.sql_type() {
        SqlType::SmallInt | SqlType::Integer | SqlType::BigInt => precision(desc) + 1,
        SqlType::Numeric | SqlType::Decimal if desc.scale() != 0 => precision(desc) + 2,
        SqlType::Numeric | SqlType::Decimal => precision(desc) + 1,
        SqlType::Float => 13,
        SqlType::Double => 22,
        SqlType::Boolean => 5,
        SqlType::Binary | SqlType::Varbinary | SqlType::RowId => desc.length() * 2,
        _ => precision(desc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::coder::DatatypeCoder;
    use crate::protocol::types::sql_type::TypeFamily;

    #[test]
    fn test_text_rules() {
        assert_eq!(sql_type(SQL_TEXT, CS_UTF8, 0), SqlType::Char);
        assert_eq!(sql_type(SQL_TEXT, CS_BINARY, 0), SqlType::Binary);
        assert_eq!(sql_type(SQL_VARYING + 1, CS_BINARY, 0), SqlType::Varbinary);
        assert_eq!(sql_type(SQL_VARYING, CS_WIN1252, 0), SqlType::Varchar);
    }

    #[test]
    fn test_integer_rules() {
        assert_eq!(sql_type(SQL_SHORT, 0, 0), SqlType::SmallInt);
        assert_eq!(sql_type(SQL_LONG, 0, 0), SqlType::Integer);
        assert_eq!(sql_type(SQL_INT64, 0, 0), SqlType::BigInt);
        assert_eq!(sql_type(SQL_LONG, 0, -2), SqlType::Numeric);
        assert_eq!(sql_type(SQL_LONG, SUBTYPE_NUMERIC, 0), SqlType::Numeric);
        assert_eq!(sql_type(SQL_LONG, SUBTYPE_DECIMAL, -2), SqlType::Decimal);
        assert_eq!(sql_type(SQL_INT64, SUBTYPE_DECIMAL, 0), SqlType::Decimal);
    }

    #[test]
    fn test_other_rules() {
        assert_eq!(sql_type(SQL_FLOAT, 0, 0), SqlType::Float);
        assert_eq!(sql_type(SQL_D_FLOAT, 0, 0), SqlType::Double);
        assert_eq!(sql_type(SQL_DOUBLE, 0, 0), SqlType::Double);
        assert_eq!(sql_type(SQL_TIME_TZ, 0, 0), SqlType::TimeWithTimezone);
        assert_eq!(sql_type(SQL_BLOB, 1, 0), SqlType::LongVarchar);
        assert_eq!(sql_type(SQL_BLOB, 0, 0), SqlType::LongVarbinary);
        assert_eq!(sql_type(SQL_BLOB, 2, 0), SqlType::LongVarbinary);
        assert_eq!(sql_type(SQL_BLOB, -1, 0), SqlType::Blob);
        assert_eq!(sql_type(SQL_BLOB, 7, 0), SqlType::Blob);
        assert_eq!(sql_type(SQL_QUAD, 0, 0), SqlType::Other);
        assert_eq!(sql_type(SQL_NULL + 1, 0, 0), SqlType::Null);
    }

    #[test]
    fn test_unsupported() {
        match try_sql_type(SQL_DEC34, 0, 0) {
            Err(Error::UnsupportedType { wire_type, .. }) => assert_eq!(wire_type, SQL_DEC34),
            other => panic!("Expected UnsupportedType, got {:?}", other),
        }
        assert_eq!(sql_type(SQL_INT128, 0, 0), SqlType::Other);
    }

    #[test]
    fn test_nullable_bit_is_ignored() {
        for base in [SQL_TEXT, SQL_VARYING, SQL_SHORT, SQL_LONG, SQL_INT64, SQL_BLOB, SQL_TIMESTAMP] {
            for (sub, scale) in [(0, 0), (1, 0), (2, -2), (0, -4)] {
                assert_eq!(sql_type(base, sub, scale), sql_type(base + 1, sub, scale));
            }
        }
    }

    #[test]
    fn test_inverse_is_total() {
        for t in SqlType::ALL {
            let wire = wire_type_for(t);
            assert_eq!(wire.wire_type & 1, 0, "{} maps to a nullable wire type", t);
            assert!(try_sql_type(wire.wire_type, wire.sub_type, 0).is_ok());
        }
        assert_eq!(wire_type_for(SqlType::Decimal), wire_type_for(SqlType::Numeric));
    }

    #[test]
    fn test_round_trip_keeps_family() {
        let bases = [
            SQL_TEXT, SQL_VARYING, SQL_SHORT, SQL_LONG, SQL_INT64, SQL_FLOAT, SQL_DOUBLE,
            SQL_D_FLOAT, SQL_TYPE_DATE, SQL_TYPE_TIME, SQL_TIMESTAMP, SQL_TIME_TZ,
            SQL_TIMESTAMP_TZ, SQL_BLOB, SQL_BOOLEAN, SQL_QUAD, SQL_ARRAY, SQL_NULL,
        ];
        for base in bases {
            for (sub, scale) in [(0, 0), (1, 0), (2, -2), (0, -3), (-1, 0), (4, 0)] {
                let forward = sql_type(base, sub, scale);
                let wire = wire_type_for(forward);
                let back = sql_type(wire.wire_type, wire.sub_type, 0);
                assert_eq!(
                    forward.family(),
                    back.family(),
                    "{} ({}, {}) -> {} -> {}",
                    base,
                    sub,
                    scale,
                    forward,
                    back
                );
            }
        }
        assert_eq!(SqlType::Decimal.family(), TypeFamily::Numeric);
    }

    #[test]
    fn test_metadata_mapping() {
        assert_eq!(sql_type_from_metadata(META_SMALLINT, 0, 0, None).unwrap(), SqlType::SmallInt);
        assert_eq!(sql_type_from_metadata(META_INT64, 2, -4, None).unwrap(), SqlType::Decimal);
        assert_eq!(sql_type_from_metadata(META_INTEGER, 0, -2, None).unwrap(), SqlType::Numeric);
        assert_eq!(sql_type_from_metadata(META_CHAR, 0, 0, Some(CS_UTF8)).unwrap(), SqlType::Char);
        assert_eq!(sql_type_from_metadata(META_CHAR, 0, 0, Some(CS_BINARY)).unwrap(), SqlType::Binary);
        assert_eq!(sql_type_from_metadata(META_CSTRING, 0, 0, Some(CS_BINARY)).unwrap(), SqlType::Varbinary);
        assert_eq!(sql_type_from_metadata(META_BLOB, 1, 0, None).unwrap(), SqlType::LongVarchar);
        assert_eq!(sql_type_from_metadata(META_TIMESTAMP, 0, 0, None).unwrap(), SqlType::Timestamp);
        assert!(sql_type_from_metadata(999, 0, 0, None).is_err());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_name(SQL_LONG + 1, 0, 0), "INTEGER");
        assert_eq!(type_name(SQL_INT64, 0, -2), "NUMERIC");
        assert_eq!(type_name(SQL_SHORT, 2, -1), "DECIMAL");
        assert_eq!(type_name(SQL_DOUBLE, 0, 0), "DOUBLE PRECISION");
        assert_eq!(type_name(SQL_BLOB, 1, 0), "BLOB SUB_TYPE 1");
        assert_eq!(type_name(SQL_TEXT, CS_BINARY, 0), "CHAR");
        assert_eq!(type_name(SQL_TIMESTAMP_TZ, 0, 0), "TIMESTAMP WITH TIME ZONE");
    }

    #[test]
    fn test_precision_and_display_size() {
        let coder = DatatypeCoder::default();
        let numeric = FieldDescriptor::builder(coder)
            .nullable(SQL_LONG)
            .with_scale(-2)
            .build();
        assert_eq!(precision(&numeric), 9);
        assert_eq!(display_size(&numeric), 11);

        let varchar = FieldDescriptor::builder(coder)
            .nullable(SQL_VARYING)
            .with_sub_type(CS_UTF8)
            .with_length(40)
            .build();
        assert_eq!(precision(&varchar), 10);
        assert_eq!(display_size(&varchar), 10);
    }
}
