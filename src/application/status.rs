use std::fmt;
use std::time::Duration;

use crate::domain::{Topology, Universe};

/// Snapshot of the facts a status bar shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status {
    pub generation: u64,
    pub width: usize,
    pub height: usize,
    pub topology: Topology,
    pub seed: u64,
    pub living: usize,
    pub interval: Duration,
}

impl Status {
    pub fn capture(universe: &Universe, interval: Duration) -> Self {
        Self {
            generation: universe.generation(),
            width: universe.width(),
            height: universe.height(),
            topology: universe.topology(),
            seed: universe.seed(),
            living: universe.living_count(),
            interval,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generation: {} | ", self.generation)?;
        write!(f, "Universe: {}×{} ({}) | ", self.width, self.height, self.topology.name())?;
        if self.seed == 0 {
            write!(f, "Seed: Zero | ")?;
        } else {
            write!(f, "Seed: {} | ", self.seed)?;
        }
        write!(f, "Living Cells: {} | ", self.living)?;
        write!(f, "Time Interval: {} ms", self.interval.as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_zero_seed() {
        let universe = Universe::new(25, 25, Topology::Toroidal, 0);
        let status = Status::capture(&universe, Duration::from_millis(1));
        assert_eq!(
            status.to_string(),
            "Generation: 0 | Universe: 25×25 (Toroidal) | Seed: Zero | Living Cells: 0 | Time Interval: 1 ms"
        );
    }

    #[test]
    fn test_display_after_changes() {
        let mut universe = Universe::new(10, 8, Topology::Finite, 0);
        universe.set_cell(1, 1, true);
        universe.set_cell(2, 1, true);
        universe.randomize(17);
        universe.clear();
        universe.set_cell(0, 0, true);
        universe.advance();
        universe.set_cell(3, 3, true);

        let status = Status::capture(&universe, Duration::from_millis(100));
        assert_eq!(status.generation, 1);
        assert_eq!(status.living, 1);
        assert_eq!(
            status.to_string(),
            "Generation: 1 | Universe: 10×8 (Finite) | Seed: 17 | Living Cells: 1 | Time Interval: 100 ms"
        );
    }
}
