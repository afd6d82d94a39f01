//! Row descriptors and the per-row value store.

use std::sync::Arc;

use bytes::Bytes;

use crate::error::{Error, Result};

use super::descriptor::FieldDescriptor;

/// Column descriptors of a result or parameter shape.
///
/// Cheap to clone: the descriptors are shared between all clones.
#[derive(Debug, Clone)]
pub struct RowDescriptor {
    fields: Arc<Vec<FieldDescriptor>>,
}

impl RowDescriptor {
    /// Create a row descriptor from column descriptors, in column order.
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            fields: Arc::new(fields),
        }
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get column descriptor by index.
    pub fn get(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get(index)
    }

    /// Iterate over the column descriptors.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    /// Get column names (labels).
    pub fn column_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name()).collect()
    }

    /// Find column index by name (case-insensitive).
    ///
    /// Labels are matched first, then original column names.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.name().eq_ignore_ascii_case(name))
            .or_else(|| {
                self.fields
                    .iter()
                    .position(|f| f.original_name().eq_ignore_ascii_case(name))
            })
    }

    /// Create an empty row value (all columns NULL) for this shape.
    pub fn create_row(&self) -> RowValue {
        RowValue::new(self.len())
    }
}

impl<'a> IntoIterator for &'a RowDescriptor {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Raw column values of one row.
///
/// Each slot is either `None` (SQL NULL) or the raw bytes of the column in
/// wire layout. A present empty value (`Some` of zero bytes) is not NULL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowValue {
    slots: Vec<Option<Bytes>>,
}

impl RowValue {
    /// Create a row of `count` NULL columns.
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![None; count],
        }
    }

    /// Create a row from raw slots as delivered by the transport.
    pub fn from_slots(slots: Vec<Option<Bytes>>) -> Self {
        Self { slots }
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Raw value of a column.
    pub fn get(&self, index: usize) -> Result<Option<&Bytes>> {
        self.slots
            .get(index)
            .map(Option::as_ref)
            .ok_or(self.out_of_bounds(index))
    }

    /// Replace the raw value of a column.
    pub fn set(&mut self, index: usize, value: Option<Bytes>) -> Result<()> {
        *self.slot_mut(index)? = value;
        Ok(())
    }

    /// Mutable access to a column slot.
    pub(crate) fn slot_mut(&mut self, index: usize) -> Result<&mut Option<Bytes>> {
        let count = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(Error::ColumnIndexOutOfBounds { index, count })
    }

    /// Set every column to NULL, keeping the column count.
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Raw slots, in column order.
    pub fn slots(&self) -> &[Option<Bytes>] {
        &self.slots
    }

    /// Consume the row, returning its raw slots.
    pub fn into_slots(self) -> Vec<Option<Bytes>> {
        self.slots
    }

    fn out_of_bounds(&self, index: usize) -> Error {
        Error::ColumnIndexOutOfBounds {
            index,
            count: self.slots.len(),
        }
    }
}
