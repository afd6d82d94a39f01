//! Row shapes: a row descriptor with the accessor variant of every column
//! resolved up front.

use crate::error::{Error, Result};
use crate::protocol::types::{RowDescriptor, RowValue, SqlType};
use crate::session::SessionParams;

use super::{Field, FieldKind};

/// Resolved shape of a result row or parameter set.
///
/// Resolving the shape fails once, up front, for columns without an
/// accessor; binding a field afterwards only checks the column index.
#[derive(Debug, Clone)]
pub struct RowShape {
    descriptor: RowDescriptor,
    kinds: Vec<FieldKind>,
    session: SessionParams,
}

impl RowShape {
    /// Resolve the accessor variant of every column of `descriptor`.
    pub fn new(descriptor: RowDescriptor, session: SessionParams) -> Result<Self> {
        let kinds = descriptor
            .iter()
            .map(|desc| {
                let kind = FieldKind::resolve(desc)?;
                tracing::trace!(
                    position = desc.position(),
                    name = desc.name(),
                    wire_type = desc.wire_type(),
                    ?kind,
                    "resolved field accessor"
                );
                Ok(kind)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            descriptor,
            kinds,
            session,
        })
    }

    pub fn descriptor(&self) -> &RowDescriptor {
        &self.descriptor
    }

    pub fn session(&self) -> &SessionParams {
        &self.session
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Accessor variant of column `index`.
    pub fn kind(&self, index: usize) -> Option<FieldKind> {
        self.kinds.get(index).copied()
    }

    /// Standard SQL type of column `index`.
    pub fn sql_type(&self, index: usize) -> Option<SqlType> {
        self.descriptor.get(index).map(|d| d.sql_type())
    }

    /// Create an all-NULL row of this shape.
    pub fn create_row(&self) -> RowValue {
        self.descriptor.create_row()
    }

    /// Bind the accessor of column `index` to its slot in `row`.
    pub fn field<'r>(&'r self, index: usize, row: &'r mut RowValue) -> Result<Field<'r>> {
        let (Some(desc), Some(kind)) = (self.descriptor.get(index), self.kind(index)) else {
            return Err(Error::ColumnIndexOutOfBounds {
                index,
                count: self.len(),
            });
        };
        let slot = row.slot_mut(index)?;
        Ok(Field::bind(kind, desc, &self.session, slot))
    }

    /// Bind the accessor of the column labelled `name`, see
    /// [`RowDescriptor::find_by_name`].
    pub fn field_by_name<'r>(&'r self, name: &str, row: &'r mut RowValue) -> Result<Field<'r>> {
        let index = self
            .descriptor
            .find_by_name(name)
            .ok_or_else(|| Error::invalid_argument(format!("no column named '{}'", name)))?;
        self.field(index, row)
    }
}
