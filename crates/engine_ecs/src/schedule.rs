//! The system schedule — an explicit, ordered registration list.
//!
//! Systems are named closures over the registry with an active flag. The
//! host registers them once at startup and the frame loop calls
//! [`SystemSchedule::run_all`] each tick; active systems run in registration
//! order. Toggling a flag is how subsystems are paused without unregistering
//! them.

use tracing::trace;

use crate::registry::EntityRegistry;

struct SystemState {
    name: String,
    active: bool,
    run: Box<dyn FnMut(&mut EntityRegistry)>,
}

/// An ordered list of named systems with per-system active flags.
#[derive(Default)]
pub struct SystemSchedule {
    systems: Vec<SystemState>,
}

impl SystemSchedule {
    /// Create an empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a system in the inactive state.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        run: impl FnMut(&mut EntityRegistry) + 'static,
    ) {
        self.push(name.into(), false, Box::new(run));
    }

    /// Append a system that starts running immediately.
    pub fn register_active(
        &mut self,
        name: impl Into<String>,
        run: impl FnMut(&mut EntityRegistry) + 'static,
    ) {
        self.push(name.into(), true, Box::new(run));
    }

    /// Set the active flag on every system registered under `name`.
    pub fn set_active(&mut self, name: &str, active: bool) {
        for system in self.systems.iter_mut().filter(|s| s.name == name) {
            system.active = active;
        }
    }

    /// Returns the active flag of the first system registered under `name`,
    /// or `false` when no such system exists.
    #[must_use]
    pub fn is_active(&self, name: &str) -> bool {
        self.systems
            .iter()
            .find(|s| s.name == name)
            .is_some_and(|s| s.active)
    }

    /// Run every active system once, in registration order.
    pub fn run_all(&mut self, registry: &mut EntityRegistry) {
        for system in &mut self.systems {
            if !system.active {
                continue;
            }
            trace!(system = %system.name, "running system");
            (system.run)(registry);
        }
    }

    /// The number of registered systems.
    #[must_use]
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Returns `true` if no system is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    fn push(&mut self, name: String, active: bool, run: Box<dyn FnMut(&mut EntityRegistry)>) {
        self.systems.push(SystemState { name, active, run });
    }
}

impl std::fmt::Debug for SystemSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<(&str, bool)> = self
            .systems
            .iter()
            .map(|s| (s.name.as_str(), s.active))
            .collect();
        f.debug_struct("SystemSchedule")
            .field("systems", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_active_systems_run_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut schedule = SystemSchedule::new();

        let o = Rc::clone(&order);
        schedule.register_active("first", move |_| o.borrow_mut().push("first"));
        let o = Rc::clone(&order);
        schedule.register("paused", move |_| o.borrow_mut().push("paused"));
        let o = Rc::clone(&order);
        schedule.register_active("second", move |_| o.borrow_mut().push("second"));

        let mut registry = EntityRegistry::new();
        schedule.run_all(&mut registry);
        assert_eq!(*order.borrow(), ["first", "second"]);
    }

    #[test]
    fn test_set_active_reaches_all_entries_with_the_name() {
        let count = Rc::new(RefCell::new(0));
        let mut schedule = SystemSchedule::new();
        for _ in 0..2 {
            let c = Rc::clone(&count);
            schedule.register("tick", move |_| *c.borrow_mut() += 1);
        }

        let mut registry = EntityRegistry::new();
        schedule.run_all(&mut registry);
        assert_eq!(*count.borrow(), 0);

        schedule.set_active("tick", true);
        schedule.run_all(&mut registry);
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_is_active_reads_the_first_entry() {
        let mut schedule = SystemSchedule::new();
        assert!(!schedule.is_active("missing"));

        schedule.register("tick", |_| {});
        schedule.register_active("tick", |_| {});
        // First entry wins, same as lookups elsewhere in the engine.
        assert!(!schedule.is_active("tick"));
    }

    #[test]
    fn test_systems_receive_the_registry() {
        let mut schedule = SystemSchedule::new();
        schedule.register_active("spawner", |registry: &mut EntityRegistry| {
            registry.create_entity_named("spawned");
        });

        let mut registry = EntityRegistry::new();
        schedule.run_all(&mut registry);
        schedule.run_all(&mut registry);
        assert_eq!(registry.entity_count(), 2);
    }
}
