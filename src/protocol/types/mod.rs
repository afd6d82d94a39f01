//! Column metadata, row storage and value types.

mod descriptor;
mod lob;
pub mod mapping;
mod row;
mod sql_type;
mod trim;
mod value;

pub use descriptor::{FieldDescriptor, FieldDescriptorBuilder};
pub use lob::{read_exact_from, stream_length, LobValue};
pub use mapping::WireType;
pub use row::{RowDescriptor, RowValue};
pub use sql_type::{SqlType, TypeFamily};
pub use trim::trim_trailing;
pub(crate) use trim::trim_trailing_owned;
pub use value::{FieldValue, RowId};
