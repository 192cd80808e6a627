//! Registry-layer error types.
//!
//! Every variant is a contract violation raised synchronously at the call
//! site; nothing here is transient or retried. Callers that want to avoid
//! the risky path check [`EntityRegistry::has_component`] first.
//!
//! [`EntityRegistry::has_component`]: crate::EntityRegistry::has_component

use engine_storage::StorageError;

use crate::entity::EntityId;

/// Errors that can occur during entity/component operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EcsError {
    /// The operation referenced a component type that was never registered.
    #[error("component type '{0}' is not registered; call register_component_type first")]
    UnknownComponentType(&'static str),

    /// A component type was registered twice.
    #[error("component type '{0}' is already registered")]
    DuplicateType(&'static str),

    /// The entity does not have a component of the requested type.
    #[error("component '{type_name}' is not present on entity {entity}")]
    ComponentNotPresent {
        /// The component type name.
        type_name: &'static str,
        /// The entity the operation referenced.
        entity: EntityId,
    },

    /// The id does not refer to a live entity (out of range, sentinel, or a
    /// removed slot).
    #[error("{0} is not a live entity")]
    InvalidEntity(EntityId),

    /// The column registered under a type id holds a different component
    /// type. This replaces the unchecked cast a type-id collision would
    /// otherwise corrupt memory through.
    #[error("column for component type '{type_name}' holds a different component type")]
    ColumnTypeMismatch {
        /// The component type name the caller asked for.
        type_name: &'static str,
    },

    /// A buffer index violation in the storage substrate.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
