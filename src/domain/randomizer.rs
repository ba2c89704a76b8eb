//! Deterministic seeded population of a grid.

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{Cell, Grid};

/// One in `DENSITY_DIVISOR` cells comes out alive
const DENSITY_DIVISOR: u32 = 3;

/// Seeded pseudo-random source used to populate grids.
/// Remembers the last seed so it can be replayed.
#[derive(Clone, Debug)]
pub struct Randomizer {
    seed: u64,
    rng: StdRng,
}

impl Randomizer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Last seed used
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the generator from `seed`
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Fill every cell: alive iff a draw from {0, 1, 2} is 0.
    /// Cells are drawn column by column, top to bottom.
    pub fn populate(&mut self, grid: &mut Grid) {
        let (width, height) = grid.dimensions();
        for x in 0..width {
            for y in 0..height {
                let alive = self.rng.random_range(0..DENSITY_DIVISOR) == 0;
                grid.set(x, y, Cell::from(alive));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_grid() {
        let mut a = Grid::new(40, 30);
        let mut b = Grid::new(40, 30);
        Randomizer::new(42).populate(&mut a);
        Randomizer::new(42).populate(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_reseed_replays() {
        let mut randomizer = Randomizer::new(7);
        let mut first = Grid::new(20, 20);
        randomizer.populate(&mut first);

        randomizer.reseed(7);
        let mut second = Grid::new(20, 20);
        randomizer.populate(&mut second);

        assert_eq!(first, second);
        assert_eq!(randomizer.seed(), 7);
    }

    #[test]
    fn test_density_is_about_one_third() {
        let mut grid = Grid::new(200, 200);
        Randomizer::new(1234).populate(&mut grid);
        let ratio = grid.living_count() as f64 / 40_000.0;
        assert!((0.30..0.37).contains(&ratio), "density was {ratio}");
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = Grid::new(30, 30);
        let mut b = Grid::new(30, 30);
        Randomizer::new(1).populate(&mut a);
        Randomizer::new(2).populate(&mut b);
        assert_ne!(a, b);
    }
}
