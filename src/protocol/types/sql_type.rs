//! Standard SQL type taxonomy.
//!
//! Codes follow the numbering generic SQL tooling expects (the
//! `java.sql.Types` constants), so they can be handed to result-set metadata
//! consumers unchanged.

/// Client-visible standard SQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    Char,
    Varchar,
    LongVarchar,
    Binary,
    Varbinary,
    LongVarbinary,
    SmallInt,
    Integer,
    BigInt,
    Numeric,
    Decimal,
    Float,
    Double,
    Date,
    Time,
    Timestamp,
    TimeWithTimezone,
    TimestampWithTimezone,
    Boolean,
    Null,
    Other,
    Array,
    Blob,
    Clob,
    RowId,
}

impl SqlType {
    /// All standard types, in code order of declaration.
    pub const ALL: [SqlType; 25] = [
        SqlType::Char,
        SqlType::Varchar,
        SqlType::LongVarchar,
        SqlType::Binary,
        SqlType::Varbinary,
        SqlType::LongVarbinary,
        SqlType::SmallInt,
        SqlType::Integer,
        SqlType::BigInt,
        SqlType::Numeric,
        SqlType::Decimal,
        SqlType::Float,
        SqlType::Double,
        SqlType::Date,
        SqlType::Time,
        SqlType::Timestamp,
        SqlType::TimeWithTimezone,
        SqlType::TimestampWithTimezone,
        SqlType::Boolean,
        SqlType::Null,
        SqlType::Other,
        SqlType::Array,
        SqlType::Blob,
        SqlType::Clob,
        SqlType::RowId,
    ];

    /// Standard type code.
    pub fn code(&self) -> i32 {
        match self {
            SqlType::Char => 1,
            SqlType::Varchar => 12,
            SqlType::LongVarchar => -1,
            SqlType::Binary => -2,
            SqlType::Varbinary => -3,
            SqlType::LongVarbinary => -4,
            SqlType::SmallInt => 5,
            SqlType::Integer => 4,
            SqlType::BigInt => -5,
            SqlType::Numeric => 2,
            SqlType::Decimal => 3,
            SqlType::Float => 6,
            SqlType::Double => 8,
            SqlType::Date => 91,
            SqlType::Time => 92,
            SqlType::Timestamp => 93,
            SqlType::TimeWithTimezone => 2013,
            SqlType::TimestampWithTimezone => 2014,
            SqlType::Boolean => 16,
            SqlType::Null => 0,
            SqlType::Other => 1111,
            SqlType::Array => 2003,
            SqlType::Blob => 2004,
            SqlType::Clob => 2005,
            SqlType::RowId => -8,
        }
    }

    /// Look up a standard type by code.
    pub fn from_code(code: i32) -> Option<SqlType> {
        Self::ALL.iter().copied().find(|t| t.code() == code)
    }

    /// Standard type name.
    pub fn name(&self) -> &'static str {
        match self {
            SqlType::Char => "CHAR",
            SqlType::Varchar => "VARCHAR",
            SqlType::LongVarchar => "LONGVARCHAR",
            SqlType::Binary => "BINARY",
            SqlType::Varbinary => "VARBINARY",
            SqlType::LongVarbinary => "LONGVARBINARY",
            SqlType::SmallInt => "SMALLINT",
            SqlType::Integer => "INTEGER",
            SqlType::BigInt => "BIGINT",
            SqlType::Numeric => "NUMERIC",
            SqlType::Decimal => "DECIMAL",
            SqlType::Float => "FLOAT",
            SqlType::Double => "DOUBLE",
            SqlType::Date => "DATE",
            SqlType::Time => "TIME",
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::TimeWithTimezone => "TIME_WITH_TIMEZONE",
            SqlType::TimestampWithTimezone => "TIMESTAMP_WITH_TIMEZONE",
            SqlType::Boolean => "BOOLEAN",
            SqlType::Null => "NULL",
            SqlType::Other => "OTHER",
            SqlType::Array => "ARRAY",
            SqlType::Blob => "BLOB",
            SqlType::Clob => "CLOB",
            SqlType::RowId => "ROWID",
        }
    }

    /// Broad category used to check that a type round-trips through the
    /// wire taxonomy without changing kind.
    pub fn family(&self) -> TypeFamily {
        match self {
            SqlType::Char | SqlType::Varchar | SqlType::LongVarchar | SqlType::Clob => {
                TypeFamily::Text
            }
            SqlType::Binary | SqlType::Varbinary | SqlType::LongVarbinary | SqlType::Blob => {
                TypeFamily::Binary
            }
            SqlType::SmallInt
            | SqlType::Integer
            | SqlType::BigInt
            | SqlType::Numeric
            | SqlType::Decimal
            | SqlType::Float
            | SqlType::Double => TypeFamily::Numeric,
            SqlType::Date
            | SqlType::Time
            | SqlType::Timestamp
            | SqlType::TimeWithTimezone
            | SqlType::TimestampWithTimezone => TypeFamily::Temporal,
            SqlType::Boolean => TypeFamily::Boolean,
            SqlType::RowId => TypeFamily::RowId,
            SqlType::Null | SqlType::Other | SqlType::Array => TypeFamily::Other,
        }
    }
}

/// Broad category of a standard type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFamily {
    Text,
    Binary,
    Numeric,
    Temporal,
    Boolean,
    RowId,
    Other,
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
