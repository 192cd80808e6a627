//! Fixed-timestep tick loop.

use tracing::debug;

use engine_ecs::{EntityRegistry, SystemSchedule};

/// Configuration for the tick loop.
#[derive(Debug, Clone, Copy)]
pub struct TickConfig {
    /// Ticks per second; the timestep handed to systems is `1.0 / tick_rate`.
    pub tick_rate: f32,
    /// How many ticks one `run` call executes.
    pub max_ticks: u32,
}

impl TickConfig {
    /// The fixed timestep implied by the tick rate, in seconds.
    #[must_use]
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate
    }
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            max_ticks: 60,
        }
    }
}

/// Drives a [`SystemSchedule`] for a fixed number of ticks.
#[derive(Debug)]
pub struct TickLoop {
    config: TickConfig,
    current_tick: u64,
}

impl TickLoop {
    /// Create a tick loop with the given configuration.
    #[must_use]
    pub fn new(config: TickConfig) -> Self {
        Self {
            config,
            current_tick: 0,
        }
    }

    /// The number of ticks executed so far.
    #[must_use]
    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    /// Run `max_ticks` ticks, each executing every active system once in
    /// registration order.
    pub fn run(&mut self, schedule: &mut SystemSchedule, registry: &mut EntityRegistry) {
        for _ in 0..self.config.max_ticks {
            self.current_tick += 1;
            debug!(tick = self.current_tick, "tick");
            schedule.run_all(registry);
        }
    }
}
