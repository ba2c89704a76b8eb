//! The universe: grid, topology, generation counter and seed in one place.
//!
//! Every operation runs to completion synchronously. Transforms that change
//! the shape or contents of the grid build a complete replacement grid and
//! swap it in, so the cell matrix and the reported dimensions always agree.

use tracing::{debug, trace};

use super::{Cell, Dialect, Direction, Grid, Pattern, Randomizer, Topology, codec};

/// Full simulation state at one point in time.
#[derive(Clone, Debug)]
pub struct Universe {
    grid: Grid,
    topology: Topology,
    generation: u64,
    randomizer: Randomizer,
}

impl Universe {
    /// Create an empty universe. Zero dimensions are raised to 1.
    /// `seed` is only stored; cells start dead.
    pub fn new(width: usize, height: usize, topology: Topology, seed: u64) -> Self {
        Self {
            grid: Grid::new(width, height),
            topology,
            generation: 0,
            randomizer: Randomizer::new(seed),
        }
    }

    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn topology(&self) -> Topology {
        self.topology
    }

    /// Seed of the most recent randomize (or the construction seed)
    pub const fn seed(&self) -> u64 {
        self.randomizer.seed()
    }

    /// Read-only view of the cells
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of live cells, counted on demand
    pub fn living_count(&self) -> usize {
        self.grid.living_count()
    }

    /// Liveness at (x, y); out of range reads as dead
    pub fn cell_at(&self, x: usize, y: usize) -> bool {
        self.grid.is_alive(x, y)
    }

    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;
    }

    pub fn toggle_topology(&mut self) {
        self.topology = self.topology.toggled();
    }

    /// Flip one cell; ignored when out of range
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        self.grid.toggle(x, y);
    }

    /// Write one cell; ignored when out of range
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) {
        self.grid.set(x, y, Cell::from(alive));
    }

    /// Stamp a pattern with its top-left corner at (x, y)
    pub fn place_pattern(&mut self, pattern: &Pattern, x: usize, y: usize) {
        pattern.place_on(&mut self.grid, x, y);
    }

    /// Advance one generation
    pub fn advance(&mut self) {
        self.grid = self.grid.evolve(self.topology);
        self.generation += 1;
        trace!(generation = self.generation, "advanced");
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Change dimensions, keeping the overlapping cells. Zero clamps to 1.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.grid = self.grid.resized(width, height);
        debug!(width = self.width(), height = self.height(), "resized universe");
    }

    pub fn add_column(&mut self) {
        self.resize(self.width() + 1, self.height());
    }

    pub fn add_row(&mut self) {
        self.resize(self.width(), self.height() + 1);
    }

    /// Drop the rightmost column; a single column is never removed
    pub fn remove_column(&mut self) {
        if self.width() > 1 {
            self.resize(self.width() - 1, self.height());
        }
    }

    /// Drop the bottom row; a single row is never removed
    pub fn remove_row(&mut self) {
        if self.height() > 1 {
            self.resize(self.width(), self.height() - 1);
        }
    }

    /// Shift all cells one step, wrapping on a torus
    pub fn translate(&mut self, direction: Direction) {
        self.grid = self.grid.translated(direction, self.topology);
        debug!(?direction, topology = self.topology.name(), "translated universe");
    }

    /// Reseed and repopulate at one-third density; resets the generation
    pub fn randomize(&mut self, seed: u64) {
        self.randomizer.reseed(seed);
        self.randomizer.populate(&mut self.grid);
        self.generation = 0;
        debug!(seed, living = self.living_count(), "randomized universe");
    }

    /// Replay the last seed
    pub fn randomize_current_seed(&mut self) {
        self.randomize(self.seed());
    }

    /// Serialize as plain text
    pub fn encode_text(&self) -> String {
        codec::encode(&self.grid)
    }

    /// Replace the grid with the pattern in `content`.
    ///
    /// Returns `false` and leaves everything untouched when the content has
    /// no pattern lines. On success the generation counter restarts at 0.
    pub fn decode_text(&mut self, content: &str, dialect: Dialect) -> bool {
        match codec::decode(content, dialect, self.grid.dimensions()) {
            Some(grid) => {
                self.grid = grid;
                self.generation = 0;
                debug!(?dialect, width = self.width(), height = self.height(), "imported pattern");
                true
            }
            None => {
                debug!(?dialect, "import skipped, no pattern lines");
                false
            }
        }
    }
}
