//! # engine_ecs
//!
//! The entity-component core of the engine: column-oriented component
//! storage with dynamic type registration, stable entity identity, and
//! lifecycle notification.
//!
//! This crate provides:
//!
//! - [`EntityId`] / [`Entity`] — stable 1-based identity plus the stored
//!   record (name and component index).
//! - [`Component`] / [`ComponentTypeId`] — the component contract and its
//!   FNV-1a name-hash type identity.
//! - [`ComponentColumn`] / [`ColumnHandle`] — per-type columnar storage and
//!   its checked type-erased facade.
//! - [`EntityRegistry`] — the owning context: create/remove entities,
//!   register component types, add/remove/get/set components, columnar
//!   queries.
//! - [`HookRegistry`] — creation/removal observers fired in registration
//!   order.
//! - [`SystemSchedule`] — the explicit, ordered list of systems the frame
//!   loop runs each tick.
//!
//! Everything is single-threaded and synchronous: operations complete or
//! fail with an [`EcsError`] before returning, and the registry performs no
//! internal locking.

pub mod column;
pub mod component;
pub mod entity;
pub mod error;
pub mod lifecycle;
pub mod registry;
pub mod schedule;

pub use column::{downcast_column, downcast_column_mut, ColumnHandle, ComponentColumn};
pub use component::{Component, ComponentTypeId};
pub use entity::{Entity, EntityId, RowIndex};
pub use error::EcsError;
pub use lifecycle::{HookRegistry, LifecycleHook};
pub use registry::{EntityRegistry, DEFAULT_ENTITY_NAME};
pub use schedule::SystemSchedule;
