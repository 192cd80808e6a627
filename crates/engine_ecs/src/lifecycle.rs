//! Entity lifecycle notification.
//!
//! Collaborators (the spatial hierarchy, the audio renderer, user systems)
//! register named hooks that the registry fires when an entity is created or
//! about to be removed. Hooks fire synchronously, in registration order.
//! Removal hooks run before the entity's slot is reset, so a hook may still
//! read and write the entity's components; each collaborator is responsible
//! for clearing its own component state there.
//!
//! Hooks are shared (`Rc`) `Fn` closures: firing hands the hook a
//! `&mut EntityRegistry` while the hook list itself stays untouched, so a
//! hook may call back into the registry — including removing further
//! entities, which fires the hooks again. Hooks registered while an event is
//! firing are appended in order and take effect from the next event on.

use std::rc::Rc;

use crate::entity::EntityId;
use crate::registry::EntityRegistry;

/// The signature of a lifecycle hook.
pub type HookFn = dyn Fn(&mut EntityRegistry, EntityId);

/// A named lifecycle hook.
pub struct LifecycleHook {
    name: String,
    callback: Box<HookFn>,
}

impl LifecycleHook {
    fn new(name: impl Into<String>, callback: impl Fn(&mut EntityRegistry, EntityId) + 'static) -> Self {
        Self {
            name: name.into(),
            callback: Box::new(callback),
        }
    }

    /// The name the hook was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn invoke(&self, registry: &mut EntityRegistry, entity: EntityId) {
        (self.callback)(registry, entity);
    }
}

impl std::fmt::Debug for LifecycleHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleHook")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered lists of creation and removal hooks.
#[derive(Debug, Default)]
pub struct HookRegistry {
    creation: Vec<Rc<LifecycleHook>>,
    removal: Vec<Rc<LifecycleHook>>,
}

impl HookRegistry {
    /// Create an empty hook registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook fired after an entity is created.
    pub fn register_creation(
        &mut self,
        name: impl Into<String>,
        hook: impl Fn(&mut EntityRegistry, EntityId) + 'static,
    ) {
        self.creation.push(Rc::new(LifecycleHook::new(name, hook)));
    }

    /// Register a hook fired before an entity is removed.
    pub fn register_removal(
        &mut self,
        name: impl Into<String>,
        hook: impl Fn(&mut EntityRegistry, EntityId) + 'static,
    ) {
        self.removal.push(Rc::new(LifecycleHook::new(name, hook)));
    }

    /// The registered creation hooks, in registration order.
    #[must_use]
    pub fn creation_hooks(&self) -> &[Rc<LifecycleHook>] {
        &self.creation
    }

    /// The registered removal hooks, in registration order.
    #[must_use]
    pub fn removal_hooks(&self) -> &[Rc<LifecycleHook>] {
        &self.removal
    }

    /// Snapshot of the creation hooks for firing.
    pub(crate) fn creation_snapshot(&self) -> Vec<Rc<LifecycleHook>> {
        self.creation.clone()
    }

    /// Snapshot of the removal hooks for firing.
    pub(crate) fn removal_snapshot(&self) -> Vec<Rc<LifecycleHook>> {
        self.removal.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hooks_keep_registration_order() {
        let mut hooks = HookRegistry::new();
        hooks.register_removal("spatial", |_, _| {});
        hooks.register_removal("audio", |_, _| {});
        hooks.register_creation("debug-overlay", |_, _| {});

        let names: Vec<&str> = hooks.removal_hooks().iter().map(|h| h.name()).collect();
        assert_eq!(names, ["spatial", "audio"]);
        assert_eq!(hooks.creation_hooks().len(), 1);
        assert_eq!(hooks.creation_hooks()[0].name(), "debug-overlay");
    }
}
