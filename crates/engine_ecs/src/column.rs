//! Per-component-type columnar storage.
//!
//! A [`ComponentColumn`] holds every instance of one component type: a
//! growable buffer of values plus a parallel buffer mapping each row to its
//! owning entity. Rows are only ever appended — removing a component clears
//! the row's value but the slot is permanently retired, never compacted or
//! reclaimed. Column length is therefore a high-water mark.
//!
//! The registry stores columns type-erased behind [`ColumnHandle`] and
//! recovers the typed column through a checked [`Any`] downcast, so a type
//! mismatch surfaces as [`EcsError::ColumnTypeMismatch`] instead of
//! reinterpreting memory.

use std::any::Any;

use engine_storage::{GrowableBuffer, StorageError};

use crate::component::{Component, ComponentTypeId};
use crate::entity::{EntityId, RowIndex};
use crate::error::EcsError;

/// Typed storage for all instances of one component type.
#[derive(Debug, Clone)]
pub struct ComponentColumn<T: Component> {
    values: GrowableBuffer<T>,
    owners: GrowableBuffer<EntityId>,
}

impl<T: Component> ComponentColumn<T> {
    /// Create an empty column.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: GrowableBuffer::new(),
            owners: GrowableBuffer::new(),
        }
    }

    /// Append a default-valued row owned by `owner` and return its index.
    pub fn allocate_row(&mut self, owner: EntityId) -> RowIndex {
        let row = self.values.len();
        self.values.set(row, T::default());
        self.owners.set(row, owner);
        row
    }

    /// Returns the value at `row`.
    pub fn get(&self, row: RowIndex) -> Result<&T, StorageError> {
        self.values.get(row)
    }

    /// Write `value` into an existing `row`.
    ///
    /// Rows come into existence only through [`ComponentColumn::allocate_row`];
    /// writing past the extent is an error, not a grow.
    pub fn write_row(&mut self, row: RowIndex, value: T) -> Result<(), StorageError> {
        *self.values.get_mut(row)? = value;
        Ok(())
    }

    /// Reset the value at `row` to the default.
    ///
    /// The owner record and the slot itself stay allocated: the row is
    /// retired, not removed, and [`ComponentColumn::owner_of`] keeps
    /// reporting the entity that last held it.
    pub fn clear_row(&mut self, row: RowIndex) -> Result<(), StorageError> {
        *self.values.get_mut(row)? = T::default();
        Ok(())
    }

    /// Returns the entity owning `row`.
    pub fn owner_of(&self, row: RowIndex) -> Result<EntityId, StorageError> {
        self.owners.get(row).copied()
    }

    /// The number of rows ever allocated. Never decreases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no row was ever allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All row values in allocation order, retired rows included.
    #[must_use]
    pub fn values(&self) -> &[T] {
        self.values.as_slice()
    }

    /// Row → owner mapping, parallel to [`ComponentColumn::values`].
    #[must_use]
    pub fn owners(&self) -> &[EntityId] {
        self.owners.as_slice()
    }
}

impl<T: Component> Default for ComponentColumn<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Object-safe facade over a [`ComponentColumn`] of any component type.
///
/// The registry's column table owns `Box<dyn ColumnHandle>` entries keyed by
/// [`ComponentTypeId`]; [`downcast_column`] / [`downcast_column_mut`] recover
/// the typed column.
pub trait ColumnHandle: Any {
    /// The erased column as [`Any`], for checked downcasts.
    fn as_any(&self) -> &dyn Any;

    /// Mutable counterpart of [`ColumnHandle::as_any`].
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// The id of the component type stored in this column.
    fn component_type_id(&self) -> ComponentTypeId;

    /// The name of the component type stored in this column.
    fn component_type_name(&self) -> &'static str;

    /// The number of rows ever allocated in this column.
    fn row_count(&self) -> usize;
}

impl<T: Component> ColumnHandle for ComponentColumn<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn component_type_id(&self) -> ComponentTypeId {
        T::component_type_id()
    }

    fn component_type_name(&self) -> &'static str {
        T::type_name()
    }

    fn row_count(&self) -> usize {
        self.len()
    }
}

/// Recover the typed column behind an erased handle.
pub fn downcast_column<T: Component>(
    handle: &dyn ColumnHandle,
) -> Result<&ComponentColumn<T>, EcsError> {
    handle
        .as_any()
        .downcast_ref::<ComponentColumn<T>>()
        .ok_or(EcsError::ColumnTypeMismatch {
            type_name: T::type_name(),
        })
}

/// Mutable counterpart of [`downcast_column`].
pub fn downcast_column_mut<T: Component>(
    handle: &mut dyn ColumnHandle,
) -> Result<&mut ComponentColumn<T>, EcsError> {
    handle
        .as_any_mut()
        .downcast_mut::<ComponentColumn<T>>()
        .ok_or(EcsError::ColumnTypeMismatch {
            type_name: T::type_name(),
        })
}
