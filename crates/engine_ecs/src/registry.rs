//! The entity/component registry.
//!
//! [`EntityRegistry`] is the one owning context object of the core: it holds
//! the entity table, the type-erased column table with its type index, the
//! id counter, and the lifecycle hooks. The host application constructs it
//! once and passes it to collaborators; dropping it releases everything.
//!
//! Storage is column-oriented. Each registered component type owns one
//! [`ComponentColumn`]; an entity's component index maps the type to its row
//! in that column. Rows and entity ids are never reclaimed — removal clears
//! slots in place and extents only grow.

use engine_storage::{AssocList, GrowableBuffer};
use tracing::{debug, trace, warn};

use crate::column::{downcast_column, downcast_column_mut, ColumnHandle, ComponentColumn};
use crate::component::{Component, ComponentTypeId};
use crate::entity::{Entity, EntityId, RowIndex};
use crate::error::EcsError;
use crate::lifecycle::HookRegistry;

/// The name given to entities created without one.
pub const DEFAULT_ENTITY_NAME: &str = "NAME";

/// Owner of all entity and component state.
pub struct EntityRegistry {
    /// Entity records, addressed by id. Slot 0 is never a live entity.
    entities: GrowableBuffer<Entity>,
    /// One column per registered component type.
    columns: Vec<Box<dyn ColumnHandle>>,
    /// Component type → slot in `columns`.
    column_index: AssocList<ComponentTypeId, usize>,
    /// The most recently issued entity id.
    last_id: i32,
    /// Creation/removal observers.
    hooks: HookRegistry,
}

impl EntityRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: GrowableBuffer::new(),
            columns: Vec::new(),
            column_index: AssocList::new(),
            last_id: 0,
            hooks: HookRegistry::new(),
        }
    }

    // -- Component type registration --

    /// Register a component type, allocating its empty column.
    ///
    /// Must be called before any entity uses `T`. Registering the same type
    /// twice is an error.
    pub fn register_component_type<T: Component>(&mut self) -> Result<(), EcsError> {
        let type_id = T::component_type_id();
        if self.column_index.contains_key(&type_id) {
            return Err(EcsError::DuplicateType(T::type_name()));
        }
        self.column_index.add(type_id, self.columns.len());
        self.columns.push(Box::new(ComponentColumn::<T>::new()));
        debug!(component = T::type_name(), "registered component type");
        Ok(())
    }

    // -- Entity lifecycle --

    /// Create an entity with the default name.
    pub fn create_entity(&mut self) -> Entity {
        self.create_entity_named(DEFAULT_ENTITY_NAME)
    }

    /// Create an entity with the given name.
    ///
    /// Ids come from a monotonic counter starting at 1 and are never reused.
    /// Creation hooks fire, in registration order, after the record is
    /// stored; the returned snapshot reflects anything they attached.
    pub fn create_entity_named(&mut self, name: impl Into<String>) -> Entity {
        self.last_id += 1;
        let id = EntityId::from_raw(self.last_id);
        self.entities.set(id.id() as usize, Entity::new(id, name));

        for hook in self.hooks.creation_snapshot() {
            trace!(hook = hook.name(), entity = %id, "firing creation hook");
            hook.invoke(self, id);
        }

        self.entities
            .get(id.id() as usize)
            .cloned()
            .unwrap_or_default()
    }

    /// Remove an entity: fire every removal hook with its id, in
    /// registration order, then reset the table slot to the default record.
    ///
    /// Hooks run while the entity is still live and may read or write its
    /// components; the reset afterwards clears the component index, so
    /// `has_component` reports `false` for every type from then on. Column
    /// rows are not touched here — hooks own that cleanup. Ids that are not
    /// live (out of range, sentinel, or already removed) are a logged no-op.
    pub fn remove_entity(&mut self, id: EntityId) {
        if !self.is_live(id) {
            warn!(entity = %id, "remove_entity on a dead or out-of-range id; ignoring");
            return;
        }

        for hook in self.hooks.removal_snapshot() {
            trace!(hook = hook.name(), entity = %id, "firing removal hook");
            hook.invoke(self, id);
        }

        debug!(entity = %id, "removing entity");
        self.entities.set(id.id() as usize, Entity::default());
    }

    /// Returns `true` if `id` refers to a live entity.
    #[must_use]
    pub fn is_live(&self, id: EntityId) -> bool {
        id.is_valid()
            && self
                .entities
                .get(id.id() as usize)
                .map(|e| e.id == id)
                .unwrap_or(false)
    }

    /// Returns the stored record for a live entity.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        if self.is_live(id) {
            self.entities.get(id.id() as usize).ok()
        } else {
            None
        }
    }

    /// The number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.iter().filter(|e| e.id.is_valid()).count()
    }

    // -- Component operations --

    /// Attach a default-valued `T` to the entity.
    ///
    /// Allocates a new row in `T`'s column owned by `id` and records it in
    /// the entity's component index. Attaching a type the entity already has
    /// allocates a fresh row and points the index at it; the old row is
    /// orphaned — still allocated, no longer reachable.
    pub fn add_component<T: Component>(&mut self, id: EntityId) -> Result<(), EcsError> {
        let type_id = T::component_type_id();
        let col_slot = self.column_slot::<T>()?;
        if !self.is_live(id) {
            return Err(EcsError::InvalidEntity(id));
        }

        let column = downcast_column_mut::<T>(self.columns[col_slot].as_mut())?;
        let row = column.allocate_row(id);
        let entity = self.entities.get_mut(id.id() as usize)?;
        entity.components.upsert(type_id, row);
        Ok(())
    }

    /// Detach `T` from the entity: clear its row's value and its
    /// component-index entry. The row slot stays allocated.
    pub fn remove_component<T: Component>(&mut self, id: EntityId) -> Result<(), EcsError> {
        let type_id = T::component_type_id();
        let col_slot = self.column_slot::<T>()?;
        let row = self.component_row_of::<T>(id)?;

        let column = downcast_column_mut::<T>(self.columns[col_slot].as_mut())?;
        column.clear_row(row)?;
        let entity = self.entities.get_mut(id.id() as usize)?;
        entity.components.clear_entry(&type_id);
        Ok(())
    }

    /// Overwrite the entity's `T` with `value`.
    pub fn set_component<T: Component>(&mut self, id: EntityId, value: T) -> Result<(), EcsError> {
        let col_slot = self.column_slot::<T>()?;
        let row = self.component_row_of::<T>(id)?;
        let column = downcast_column_mut::<T>(self.columns[col_slot].as_mut())?;
        column.write_row(row, value)?;
        Ok(())
    }

    /// Returns a copy of the entity's `T`.
    pub fn get_component<T: Component>(&self, id: EntityId) -> Result<T, EcsError> {
        let column = self.column::<T>()?;
        let row = self.component_row_of::<T>(id)?;
        Ok(column.get(row)?.clone())
    }

    /// Returns `true` if `id` is a live entity currently holding a `T`.
    /// Total: unregistered types, dead entities, and out-of-range ids all
    /// report `false`.
    #[must_use]
    pub fn has_component<T: Component>(&self, id: EntityId) -> bool {
        self.entity(id)
            .is_some_and(|e| e.has_component_type(T::component_type_id()))
    }

    // -- Columnar access --

    /// Snapshot of every row of `T`'s column, in allocation order.
    ///
    /// Retired (cleared) rows are included; consumers filter, typically by
    /// checking `is_live(row_owner(..))` and `has_component`.
    pub fn get_column<T: Component>(&self) -> Result<Vec<T>, EcsError> {
        Ok(self.column::<T>()?.values().to_vec())
    }

    /// Map a row of `T`'s column back to the entity that owns (or, for a
    /// retired row, last owned) it.
    pub fn row_owner<T: Component>(&self, row: RowIndex) -> Result<EntityId, EcsError> {
        Ok(self.column::<T>()?.owner_of(row)?)
    }

    // -- Lifecycle hooks --

    /// Register a hook fired after every entity creation.
    pub fn register_creation_hook(
        &mut self,
        name: impl Into<String>,
        hook: impl Fn(&mut EntityRegistry, EntityId) + 'static,
    ) {
        self.hooks.register_creation(name, hook);
    }

    /// Register a hook fired before every entity removal.
    pub fn register_removal_hook(
        &mut self,
        name: impl Into<String>,
        hook: impl Fn(&mut EntityRegistry, EntityId) + 'static,
    ) {
        self.hooks.register_removal(name, hook);
    }

    /// The registered lifecycle hooks.
    #[must_use]
    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    // -- Internals --

    /// Column-table slot for `T`, or `UnknownComponentType`.
    fn column_slot<T: Component>(&self) -> Result<usize, EcsError> {
        self.column_index
            .try_get(&T::component_type_id())
            .copied()
            .ok_or(EcsError::UnknownComponentType(T::type_name()))
    }

    /// Typed view of `T`'s column.
    fn column<T: Component>(&self) -> Result<&ComponentColumn<T>, EcsError> {
        let slot = self.column_slot::<T>()?;
        downcast_column::<T>(self.columns[slot].as_ref())
    }

    /// Resolve `id` to its row in `T`'s column, checking liveness and
    /// presence.
    fn component_row_of<T: Component>(&self, id: EntityId) -> Result<RowIndex, EcsError> {
        let entity = self
            .entity(id)
            .ok_or(EcsError::InvalidEntity(id))?;
        entity
            .component_row(T::component_type_id())
            .ok_or(EcsError::ComponentNotPresent {
                type_name: T::type_name(),
                entity: id,
            })
    }
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
