//! Integration tests for the wire type to SQL type mapping.

use fb_codec::mapping::{self, WireType};
use fb_codec::protocol::constants::*;
use fb_codec::{Error, FieldDescriptor, FieldKind, SessionParams, SqlType, TypeFamily};

#[test]
fn test_forward_mapping_table() {
    let cases = [
        (SQL_TEXT, CS_UTF8, 0, SqlType::Char),
        (SQL_TEXT, CS_BINARY, 0, SqlType::Binary),
        (SQL_VARYING, CS_NONE, 0, SqlType::Varchar),
        (SQL_VARYING, CS_BINARY, 0, SqlType::Varbinary),
        (SQL_SHORT, SUBTYPE_NONE, 0, SqlType::SmallInt),
        (SQL_LONG, SUBTYPE_NONE, 0, SqlType::Integer),
        (SQL_INT64, SUBTYPE_NONE, 0, SqlType::BigInt),
        (SQL_LONG, SUBTYPE_NONE, -2, SqlType::Numeric),
        (SQL_INT64, SUBTYPE_NUMERIC, 0, SqlType::Numeric),
        (SQL_SHORT, SUBTYPE_DECIMAL, -1, SqlType::Decimal),
        (SQL_INT64, SUBTYPE_DECIMAL, 0, SqlType::Decimal),
        (SQL_FLOAT, 0, 0, SqlType::Float),
        (SQL_DOUBLE, 0, 0, SqlType::Double),
        (SQL_D_FLOAT, 0, 0, SqlType::Double),
        (SQL_TYPE_DATE, 0, 0, SqlType::Date),
        (SQL_TYPE_TIME, 0, 0, SqlType::Time),
        (SQL_TIMESTAMP, 0, 0, SqlType::Timestamp),
        (SQL_TIME_TZ, 0, 0, SqlType::TimeWithTimezone),
        (SQL_TIMESTAMP_TZ, 0, 0, SqlType::TimestampWithTimezone),
        (SQL_BLOB, BLOB_SUB_TYPE_TEXT, CS_UTF8, SqlType::LongVarchar),
        (SQL_BLOB, BLOB_SUB_TYPE_BINARY, 0, SqlType::LongVarbinary),
        (SQL_BLOB, BLOB_SUB_TYPE_BLR, 0, SqlType::LongVarbinary),
        (SQL_BLOB, 7, 0, SqlType::Blob),
        (SQL_BLOB, -1, 0, SqlType::Blob),
        (SQL_BOOLEAN, 0, 0, SqlType::Boolean),
        (SQL_ARRAY, 0, 0, SqlType::Array),
        (SQL_QUAD, 0, 0, SqlType::Other),
        (SQL_NULL, 0, 0, SqlType::Null),
    ];
    for (wire_type, sub_type, scale, expected) in cases {
        assert_eq!(
            mapping::try_sql_type(wire_type, sub_type, scale).unwrap(),
            expected,
            "wire type {} subtype {} scale {}",
            wire_type,
            sub_type,
            scale
        );
        assert_eq!(mapping::sql_type(wire_type | 1, sub_type, scale), expected);
    }
}

#[test]
fn test_unsupported_wire_types() {
    for wire_type in [SQL_INT128, SQL_DEC16, SQL_DEC34, SQL_TIME_TZ_EX, SQL_TIMESTAMP_TZ_EX, 12] {
        assert!(matches!(
            mapping::try_sql_type(wire_type, 0, 0),
            Err(Error::UnsupportedType { .. })
        ));
        assert_eq!(mapping::sql_type(wire_type, 0, 0), SqlType::Other);
    }
}

#[test]
fn test_inverse_mapping_is_total_and_family_preserving() {
    for sql_type in SqlType::ALL {
        let WireType { wire_type, sub_type } = mapping::wire_type_for(sql_type);
        assert_eq!(wire_type & 1, 0, "{} maps to a nullable wire type", sql_type);
        let back = mapping::sql_type(wire_type, sub_type, 0);
        if sql_type == SqlType::RowId {
            // the row id is recognised by column name, not by type
            assert_eq!(back, SqlType::Binary);
        } else {
            assert_eq!(back.family(), sql_type.family(), "{} -> {}", sql_type, back);
        }
    }
    assert_eq!(
        mapping::wire_type_for(SqlType::Decimal),
        WireType { wire_type: SQL_INT64, sub_type: SUBTYPE_NUMERIC }
    );
    assert_eq!(mapping::wire_type_for(SqlType::Other).wire_type, SQL_QUAD);
}

#[test]
fn test_standard_type_codes() {
    assert_eq!(SqlType::Integer.code(), 4);
    assert_eq!(SqlType::BigInt.code(), -5);
    assert_eq!(SqlType::RowId.code(), -8);
    assert_eq!(SqlType::TimestampWithTimezone.code(), 2014);
    assert_eq!(SqlType::from_code(2005), Some(SqlType::Clob));
    assert_eq!(SqlType::from_code(424242), None);
    assert_eq!(SqlType::Numeric.family(), TypeFamily::Numeric);
}

#[test]
fn test_metadata_mapping() {
    assert_eq!(
        mapping::sql_type_from_metadata(META_CHAR, 0, 0, Some(CS_BINARY)).unwrap(),
        SqlType::Binary
    );
    assert_eq!(
        mapping::sql_type_from_metadata(META_VARCHAR, 0, 0, Some(CS_UTF8)).unwrap(),
        SqlType::Varchar
    );
    assert_eq!(
        mapping::sql_type_from_metadata(META_INT64, SUBTYPE_NUMERIC, -4, None).unwrap(),
        SqlType::Numeric
    );
    assert_eq!(
        mapping::sql_type_from_metadata(META_BLOB, BLOB_SUB_TYPE_TEXT, 0, None).unwrap(),
        SqlType::LongVarchar
    );
    assert!(mapping::sql_type_from_metadata(999, 0, 0, None).is_err());
}

#[test]
fn test_type_names() {
    assert_eq!(mapping::type_name(SQL_LONG | 1, SUBTYPE_NUMERIC, -2), "NUMERIC");
    assert_eq!(mapping::type_name(SQL_DOUBLE, 0, 0), "DOUBLE PRECISION");
    assert_eq!(mapping::type_name(SQL_BLOB, 1, 0), "BLOB SUB_TYPE 1");
    assert_eq!(mapping::type_name(SQL_TIME_TZ, 0, 0), "TIME WITH TIME ZONE");
}

#[test]
fn test_field_kind_resolution() {
    let coder = SessionParams::new().coder();
    let kind = |desc: FieldDescriptor| FieldKind::resolve(&desc);

    assert_eq!(kind(FieldDescriptor::builder(coder).nullable(SQL_SHORT).build()).unwrap(), FieldKind::SmallInt);
    assert_eq!(
        kind(
            FieldDescriptor::builder(coder)
                .nullable(SQL_BLOB)
                .with_sub_type(BLOB_SUB_TYPE_TEXT)
                .build()
        )
        .unwrap(),
        FieldKind::Clob
    );
    assert!(matches!(
        kind(FieldDescriptor::builder(coder).nullable(SQL_QUAD).build()),
        Err(Error::UnsupportedType { .. })
    ));
    assert!(matches!(
        kind(FieldDescriptor::builder(coder).nullable(SQL_DEC34).build()),
        Err(Error::UnsupportedType { .. })
    ));
}
