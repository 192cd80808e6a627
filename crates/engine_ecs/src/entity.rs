//! Entity identity and the stored entity record.

use engine_storage::AssocList;
use serde::{Deserialize, Serialize};

use crate::component::ComponentTypeId;

/// Index of a row within a component column.
pub type RowIndex = usize;

/// A unique entity identifier.
///
/// Ids are 1-based and strictly increasing for the lifetime of a registry;
/// zero is the "no entity" sentinel. Ids are never reclaimed or reused, so a
/// stored id stays unambiguous even after the entity is removed.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EntityId(pub i32);

impl EntityId {
    /// The null / invalid entity sentinel.
    pub const INVALID: EntityId = EntityId(0);

    /// Create an id from a raw `i32`.
    #[must_use]
    pub const fn from_raw(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw `i32` identifier.
    #[must_use]
    pub const fn id(self) -> i32 {
        self.0
    }

    /// Returns `true` if this id could refer to a live entity (positive).
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// The stored entity record: a stable id, a name, and the component index
/// mapping each attached component type to its row in that type's column.
///
/// Records live in the registry's entity table, addressed by id. A removed
/// entity's slot is reset to `Entity::default()` in place; the default record
/// (id zero, empty name, empty index) is the sentinel for "no entity here".
#[derive(Debug, Default, Clone)]
pub struct Entity {
    /// The entity's unique id.
    pub id: EntityId,
    /// The entity's name. Not required to be unique.
    pub name: String,
    /// Component type → column row. At most one entry per type.
    pub(crate) components: AssocList<ComponentTypeId, RowIndex>,
}

impl Entity {
    pub(crate) fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            components: AssocList::new(),
        }
    }

    /// Returns the column row for `type_id`, or `None` when the entity does
    /// not have that component.
    #[must_use]
    pub fn component_row(&self, type_id: ComponentTypeId) -> Option<RowIndex> {
        self.components.try_get(&type_id).copied()
    }

    /// Returns `true` if the entity currently has a component of `type_id`.
    #[must_use]
    pub fn has_component_type(&self, type_id: ComponentTypeId) -> bool {
        self.components.contains_key(&type_id)
    }
}
