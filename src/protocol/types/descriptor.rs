//! Column descriptors.
//!
//! A [`FieldDescriptor`] is the immutable type and layout information of one
//! column, built once when the result (or parameter) shape is known.

use crate::protocol::charset::Charset;
use crate::protocol::coder::DatatypeCoder;
use crate::protocol::constants::*;

use super::mapping;
use super::sql_type::SqlType;

/// Immutable metadata of a single column.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    position: usize,
    wire_type: i32,
    sub_type: i32,
    scale: i32,
    length: usize,
    field_name: String,
    original_name: String,
    relation_name: String,
    owner_name: String,
    coder: DatatypeCoder,
}

impl FieldDescriptor {
    /// Start building a descriptor whose text is coded with `coder`.
    pub fn builder(coder: DatatypeCoder) -> FieldDescriptorBuilder {
        FieldDescriptorBuilder::new(coder)
    }

    /// 0-based position in the row.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Wire type code, including the nullability bit.
    pub fn wire_type(&self) -> i32 {
        self.wire_type
    }

    /// Wire type code with the nullability bit cleared.
    pub fn base_type(&self) -> i32 {
        self.wire_type & !1
    }

    /// Whether the wire type marks the column as nullable.
    pub fn is_nullable(&self) -> bool {
        self.wire_type & 1 == 1
    }

    pub fn sub_type(&self) -> i32 {
        self.sub_type
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Declared length in bytes.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Column label (alias), falling back to the original name.
    pub fn name(&self) -> &str {
        if self.field_name.is_empty() {
            &self.original_name
        } else {
            &self.field_name
        }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// Coder for this column's values, already bound to its character set.
    pub fn coder(&self) -> &DatatypeCoder {
        &self.coder
    }

    /// Character set of this column's text.
    pub fn charset(&self) -> Charset {
        self.coder.charset()
    }

    /// Character-set id carried by the type (text subtype, or text blob scale).
    pub fn charset_id(&self) -> Option<i32> {
        column_charset_id(self.base_type(), self.sub_type, self.scale)
    }

    /// Whether this is a text column with the binary (OCTETS) character set.
    pub fn is_binary_text(&self) -> bool {
        matches!(self.base_type(), SQL_TEXT | SQL_VARYING) && self.charset_id() == Some(CS_BINARY)
    }

    /// Whether this is the row-identifier pseudo-column.
    pub fn is_db_key(&self) -> bool {
        self.base_type() == SQL_TEXT
            && self.charset_id() == Some(CS_BINARY)
            && self.original_name == DB_KEY_NAME
    }

    /// Byte used to pad fixed-width values: NUL for binary, space for text.
    pub fn padding_byte(&self) -> u8 {
        if self.is_binary_text() {
            0x00
        } else {
            b' '
        }
    }

    /// Derived standard SQL type.
    pub fn sql_type(&self) -> SqlType {
        mapping::sql_type_of(self)
    }

    /// Server type name, e.g. `NUMERIC` or `BLOB SUB_TYPE 1`.
    pub fn type_name(&self) -> String {
        mapping::type_name(self.wire_type, self.sub_type, self.scale)
    }

    /// Copy of this descriptor with the nullability bit set or cleared.
    pub fn with_nullable(&self, nullable: bool) -> FieldDescriptor {
        let mut copy = self.clone();
        copy.wire_type = if nullable {
            self.base_type() | 1
        } else {
            self.base_type()
        };
        copy
    }
}

fn column_charset_id(base_type: i32, sub_type: i32, scale: i32) -> Option<i32> {
    match base_type {
        SQL_TEXT | SQL_VARYING => Some(sub_type & 0xFF),
        SQL_BLOB if sub_type == BLOB_SUB_TYPE_TEXT => Some(scale & 0xFF),
        _ => None,
    }
}

/// Builder for [`FieldDescriptor`].
#[derive(Debug, Clone)]
pub struct FieldDescriptorBuilder {
    coder: DatatypeCoder,
    position: usize,
    wire_type: i32,
    sub_type: i32,
    scale: i32,
    length: usize,
    field_name: String,
    original_name: String,
    relation_name: String,
    owner_name: String,
}

impl FieldDescriptorBuilder {
    /// Create a builder with the session coder.
    pub fn new(coder: DatatypeCoder) -> Self {
        Self {
            coder,
            position: 0,
            wire_type: SQL_NULL,
            sub_type: 0,
            scale: 0,
            length: 0,
            field_name: String::new(),
            original_name: String::new(),
            relation_name: String::new(),
            owner_name: String::new(),
        }
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    pub fn with_wire_type(mut self, wire_type: i32) -> Self {
        self.wire_type = wire_type;
        self
    }

    pub fn with_sub_type(mut self, sub_type: i32) -> Self {
        self.sub_type = sub_type;
        self
    }

    pub fn with_scale(mut self, scale: i32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = name.into();
        self
    }

    pub fn with_original_name(mut self, name: impl Into<String>) -> Self {
        self.original_name = name.into();
        self
    }

    pub fn with_relation_name(mut self, name: impl Into<String>) -> Self {
        self.relation_name = name.into();
        self
    }

    pub fn with_owner_name(mut self, name: impl Into<String>) -> Self {
        self.owner_name = name.into();
        self
    }

    /// Shorthand for a nullable column of the given base type.
    pub fn nullable(mut self, base_type: i32) -> Self {
        self.wire_type = (base_type & !1) | 1;
        self
    }

    /// Shorthand for a NOT NULL column of the given base type.
    pub fn not_null(mut self, base_type: i32) -> Self {
        self.wire_type = base_type & !1;
        self
    }

    /// Build the descriptor.
    ///
    /// Text columns get a coder for their own character set; `NONE` keeps
    /// the session character set.
    pub fn build(self) -> FieldDescriptor {
        let coder = match column_charset_id(self.wire_type & !1, self.sub_type, self.scale) {
            Some(CS_NONE) | None => self.coder,
            Some(id) => self.coder.for_charset(id),
        };
        FieldDescriptor {
            position: self.position,
            wire_type: self.wire_type,
            sub_type: self.sub_type,
            scale: self.scale,
            length: self.length,
            field_name: self.field_name,
            original_name: self.original_name,
            relation_name: self.relation_name,
            owner_name: self.owner_name,
            coder,
        }
    }
}
