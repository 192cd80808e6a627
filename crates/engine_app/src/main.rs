//! # engine_app — Host application
//!
//! The host owns the entity-component context and wires the frame loop:
//!
//! 1. Initialise structured logging.
//! 2. Build the [`EntityRegistry`], register component types and the
//!    cleanup removal hook.
//! 3. Register systems on a [`SystemSchedule`].
//! 4. Drive the fixed-timestep tick loop.

mod components;
mod tick;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use engine_ecs::{EntityId, EntityRegistry, SystemSchedule};

use components::{Position, Velocity};
use tick::{TickConfig, TickLoop};

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("engine_app=info".parse()?))
        .init();

    info!("engine host starting");

    let config = TickConfig {
        tick_rate: 60.0,
        max_ticks: 60,
    };

    let mut registry = EntityRegistry::new();
    registry.register_component_type::<Position>()?;
    registry.register_component_type::<Velocity>()?;

    // Each subsystem clears its own component state when an entity goes away.
    registry.register_removal_hook("movement-cleanup", |reg, id| {
        if reg.has_component::<Velocity>(id) {
            if let Err(err) = reg.remove_component::<Velocity>(id) {
                warn!(entity = %id, %err, "failed to clear velocity");
            }
        }
        if reg.has_component::<Position>(id) {
            if let Err(err) = reg.remove_component::<Position>(id) {
                warn!(entity = %id, %err, "failed to clear position");
            }
        }
    });

    let _player = spawn_mover(
        &mut registry,
        "player",
        Position { x: 0.0, y: 0.0 },
        Velocity { x: 1.0, y: 2.0 },
    )?;
    let cloud = spawn_mover(
        &mut registry,
        "cloud",
        Position { x: 10.0, y: 5.0 },
        Velocity { x: -0.5, y: 0.0 },
    )?;

    let mut schedule = SystemSchedule::new();
    let dt = config.dt();
    schedule.register_active("movement", move |reg: &mut EntityRegistry| {
        run_movement(reg, dt);
    });

    let mut ticks = TickLoop::new(config);
    ticks.run(&mut schedule, &mut registry);

    info!(entity = %cloud, tick = ticks.current_tick(), "despawning mid-run");
    registry.remove_entity(cloud);

    ticks.run(&mut schedule, &mut registry);

    report(&registry)?;
    info!("engine host shut down");
    Ok(())
}

/// Create a named entity carrying a position and a velocity.
fn spawn_mover(
    registry: &mut EntityRegistry,
    name: &str,
    position: Position,
    velocity: Velocity,
) -> Result<EntityId> {
    let id = registry.create_entity_named(name).id;
    registry.add_component::<Position>(id)?;
    registry.set_component(id, position)?;
    registry.add_component::<Velocity>(id)?;
    registry.set_component(id, velocity)?;
    info!(entity = %id, name, "spawned");
    Ok(id)
}

/// Integrate velocities into positions for one timestep.
///
/// Walks the velocity column row by row. Retired rows still report their
/// last owner, so each row is cross-checked against entity liveness and
/// component presence before it is touched.
fn run_movement(registry: &mut EntityRegistry, dt: f32) {
    let velocities = match registry.get_column::<Velocity>() {
        Ok(column) => column,
        Err(err) => {
            warn!(%err, "movement: velocity column unavailable; skipping frame");
            return;
        }
    };

    for (row, vel) in velocities.iter().enumerate() {
        let owner = match registry.row_owner::<Velocity>(row) {
            Ok(owner) => owner,
            Err(err) => {
                warn!(row, %err, "movement: no owner for row; skipping frame");
                return;
            }
        };
        if !registry.is_live(owner)
            || !registry.has_component::<Velocity>(owner)
            || !registry.has_component::<Position>(owner)
        {
            continue;
        }

        let moved = registry.get_component::<Position>(owner).and_then(|mut pos| {
            pos.x += vel.x * dt;
            pos.y += vel.y * dt;
            registry.set_component(owner, pos)
        });
        if let Err(err) = moved {
            warn!(entity = %owner, %err, "movement: update failed; skipping frame");
            return;
        }
    }
}

/// Log the final position of every live entity.
fn report(registry: &EntityRegistry) -> Result<()> {
    let positions = registry.get_column::<Position>()?;
    for (row, pos) in positions.iter().enumerate() {
        let owner = registry.row_owner::<Position>(row)?;
        if !registry.is_live(owner) || !registry.has_component::<Position>(owner) {
            continue;
        }
        let name = registry
            .entity(owner)
            .map(|e| e.name.clone())
            .unwrap_or_default();
        info!(entity = %owner, name, x = pos.x, y = pos.y, "final position");
    }
    Ok(())
}
