use std::time::{Duration, Instant};

use super::{Settings, Status, fresh_seed};
use crate::domain::{Dialect, Universe};

/// Simulation drives a universe from an external clock.
/// The owner feeds elapsed time in through `tick`; nothing here sleeps.
pub struct Simulation {
    pub universe: Universe,
    pub is_running: bool,
    pub interval: Duration,
    pub update_timer: Duration,
    pub last_advance_time_ms: f32,  // Advance performance metric
}

impl Simulation {
    /// Create a paused simulation around `universe`
    pub fn new(universe: Universe, interval: Duration) -> Self {
        Self {
            universe,
            is_running: false,
            interval: interval.max(Duration::from_millis(1)),
            update_timer: Duration::ZERO,
            last_advance_time_ms: 0.0,
        }
    }

    /// Create a paused simulation from startup settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Universe::from_settings(settings), settings.interval())
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Change the tick interval; clamped to at least one millisecond
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.max(Duration::from_millis(1));
    }

    /// Advance exactly one generation, whether running or not
    pub fn step(mut self) -> Self {
        let start = Instant::now();
        self.universe.advance();
        self.last_advance_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self
    }

    /// Update simulation by one frame.
    /// At most one generation is produced per call, once a full interval
    /// has accumulated.
    pub fn tick(mut self, elapsed: Duration) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += elapsed;
        if self.update_timer >= self.interval {
            self = self.step();
            self.update_timer = Duration::ZERO;
        }

        self
    }

    /// Pause, kill every cell and reset the generation counter
    pub fn clear(mut self) -> Self {
        self.is_running = false;
        self.universe.clear();
        self
    }

    /// Pause and repopulate from `seed`
    pub fn randomize(mut self, seed: u64) -> Self {
        self.is_running = false;
        self.universe.randomize(seed);
        self
    }

    /// Pause and repopulate from the last seed
    pub fn randomize_current_seed(mut self) -> Self {
        self.is_running = false;
        self.universe.randomize_current_seed();
        self
    }

    /// Pause and repopulate from a wall-clock seed
    pub fn randomize_fresh(self) -> Self {
        self.randomize(fresh_seed())
    }

    /// Pause and load a pattern; an empty pattern leaves the universe as is
    pub fn import(mut self, content: &str, dialect: Dialect) -> Self {
        self.is_running = false;
        self.universe.decode_text(content, dialect);
        self
    }

    /// Current status-bar facts
    pub fn status(&self) -> Status {
        Status::capture(&self.universe, self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Topology, presets};

    fn blinker_simulation() -> Simulation {
        let mut universe = Universe::new(5, 5, Topology::Finite, 0);
        universe.place_pattern(&presets::blinker(), 1, 2);
        Simulation::new(universe, Duration::from_millis(10))
    }

    #[test]
    fn test_paused_tick_does_nothing() {
        let sim = blinker_simulation().tick(Duration::from_secs(1));
        assert_eq!(sim.universe.generation(), 0);
    }

    #[test]
    fn test_tick_waits_for_full_interval() {
        let sim = blinker_simulation().with_running(true);
        let sim = sim.tick(Duration::from_millis(4)).tick(Duration::from_millis(4));
        assert_eq!(sim.universe.generation(), 0);

        let sim = sim.tick(Duration::from_millis(4));
        assert_eq!(sim.universe.generation(), 1);
        assert_eq!(sim.update_timer, Duration::ZERO);
        assert!(sim.universe.cell_at(2, 1));
    }

    #[test]
    fn test_one_generation_per_tick() {
        let sim = blinker_simulation().with_running(true).tick(Duration::from_millis(55));
        assert_eq!(sim.universe.generation(), 1);
    }

    #[test]
    fn test_step_while_paused() {
        let sim = blinker_simulation().step().step();
        assert!(!sim.is_running);
        assert_eq!(sim.universe.generation(), 2);
        assert!(sim.universe.cell_at(1, 2));
    }

    #[test]
    fn test_toggle_running() {
        let sim = blinker_simulation().toggle_running();
        assert!(sim.is_running);
        assert!(!sim.toggle_running().is_running);
    }

    #[test]
    fn test_editing_pauses() {
        let sim = blinker_simulation().with_running(true).randomize(8);
        assert!(!sim.is_running);
        assert_eq!(sim.universe.seed(), 8);

        let sim = sim.with_running(true).clear();
        assert!(!sim.is_running);
        assert_eq!(sim.universe.living_count(), 0);

        let sim = sim.with_running(true).import("OO\nOO\n", Dialect::Plain);
        assert!(!sim.is_running);
        assert_eq!(sim.universe.living_count(), 4);
    }

    #[test]
    fn test_randomize_fresh_records_seed() {
        let sim = blinker_simulation().randomize_fresh();
        let seed = sim.universe.seed();
        let replay = sim.step().randomize_current_seed();
        assert_eq!(replay.universe.seed(), seed);
        assert_eq!(replay.universe.generation(), 0);
    }

    #[test]
    fn test_interval_clamped() {
        let mut sim = Simulation::new(Universe::new(3, 3, Topology::Toroidal, 0), Duration::ZERO);
        assert_eq!(sim.interval, Duration::from_millis(1));
        sim.set_interval(Duration::from_millis(250));
        assert_eq!(sim.status().interval, Duration::from_millis(250));
    }

    #[test]
    fn test_from_settings() {
        let sim = Simulation::from_settings(&Settings::default());
        assert!(!sim.is_running);
        assert_eq!(sim.status().to_string(),
            "Generation: 0 | Universe: 25×25 (Toroidal) | Seed: Zero | Living Cells: 0 | Time Interval: 1 ms");
    }
}
