//! Wire representation of column values and typed access to it.

pub mod buffer;
pub mod charset;
pub mod coder;
pub mod constants;
pub mod datetime;
pub mod field;
pub mod types;

pub use buffer::{ByteOrder, ReadBuffer, WriteBuffer};
pub use charset::Charset;
pub use coder::DatatypeCoder;
pub use datetime::OffsetTime;
pub use field::{Field, FieldAccess, FieldKind, RowShape};
pub use types::{
    FieldDescriptor, FieldDescriptorBuilder, FieldValue, LobValue, RowDescriptor, RowId,
    RowValue, SqlType, TypeFamily,
};
