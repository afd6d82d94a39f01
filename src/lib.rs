//! Field codec for a Firebird-family wire protocol
//!
//! Converts between the raw column bytes a database client sends and
//! receives and typed Rust values: a per-session [`DatatypeCoder`] for the
//! primitive encodings, immutable [`FieldDescriptor`]s for column metadata,
//! a [`RowValue`] holding one raw slot per column, the mapping from wire
//! types to standard SQL types, and typed field accessors on top.
//!
//! # Example
//!
//! ```
//! use fb_codec::protocol::constants::{CS_UTF8, SQL_LONG, SQL_VARYING};
//! use fb_codec::{FieldAccess, FieldDescriptor, RowDescriptor, RowShape, SessionParams};
//!
//! # fn main() -> fb_codec::Result<()> {
//! let session = SessionParams::new();
//! let coder = session.coder();
//! let descriptor = RowDescriptor::new(vec![
//!     FieldDescriptor::builder(coder).not_null(SQL_LONG).with_field_name("ID").build(),
//!     FieldDescriptor::builder(coder)
//!         .nullable(SQL_VARYING)
//!         .with_sub_type(CS_UTF8)
//!         .with_length(40)
//!         .with_field_name("NAME")
//!         .build(),
//! ]);
//! let shape = RowShape::new(descriptor, session)?;
//!
//! let mut row = shape.create_row();
//! shape.field(0, &mut row)?.set_string("42")?;
//! shape.field(1, &mut row)?.set_string("Ada")?;
//!
//! assert_eq!(shape.field(0, &mut row)?.get_int()?, 42);
//! assert_eq!(shape.field_by_name("name", &mut row)?.get_string()?.as_deref(), Some("Ada"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod protocol;
pub mod session;

// Re-export main types
pub use error::{Error, Result};
pub use protocol::datetime::OffsetTime;
pub use protocol::types::{mapping, trim_trailing};
pub use protocol::{
    ByteOrder, Charset, DatatypeCoder, Field, FieldAccess, FieldDescriptor, FieldDescriptorBuilder,
    FieldKind, FieldValue, LobValue, RowDescriptor, RowId, RowShape, RowValue, SqlType, TypeFamily,
};
pub use session::{SessionParams, SessionZone};
