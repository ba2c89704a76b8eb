use super::{Cell, Direction, Topology};

/// Offsets of the eight surrounding positions, row by row.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Grid manages the 2D cellular automaton grid.
///
/// Cells are stored row-major next to the dimensions they belong to, and
/// every structural transform returns a new grid, so the two can never be
/// observed out of step. Both dimensions are at least 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    /// Zero dimensions are raised to 1.
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y).then(|| self.cells[self.get_index(x, y)])
    }

    /// Liveness at position; anything outside the grid reads as dead
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Cell::is_alive)
    }

    /// Set cell at position; out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if self.contains(x, y) {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Flip cell at position; out-of-range toggles are ignored
    pub fn toggle(&mut self, x: usize, y: usize) {
        if self.contains(x, y) {
            let idx = self.get_index(x, y);
            self.cells[idx] = self.cells[idx].toggle();
        }
    }

    /// Count live neighbors of (x, y).
    ///
    /// On a finite grid positions past an edge are skipped. On a torus each
    /// coordinate wraps, so on axes shorter than 3 the same cell may be
    /// counted more than once.
    pub fn count_live_neighbors(&self, x: usize, y: usize, topology: Topology) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = topology.offset(x, dx, self.width)?;
                let ny = topology.offset(y, dy, self.height)?;
                Some(self.cells[self.get_index(nx, ny)])
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Compute the next generation into a freshly allocated grid
    pub fn evolve(&self, topology: Topology) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.get_index(x, y)];
                current.evolve(self.count_live_neighbors(x, y, topology))
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Copy into a grid of the new size.
    /// The overlapping region is kept, the rest is dropped or left dead.
    pub fn resized(&self, width: usize, height: usize) -> Self {
        let mut next = Self::new(width, height);
        for y in 0..self.height.min(next.height) {
            for x in 0..self.width.min(next.width) {
                let idx = next.get_index(x, y);
                next.cells[idx] = self.cells[self.get_index(x, y)];
            }
        }
        next
    }

    /// Shift every cell one step in `direction`.
    ///
    /// Each target cell pulls from its source position, so the result is
    /// built in one pass without overwriting unread cells. On a finite grid
    /// the vacated edge comes out dead.
    pub fn translated(&self, direction: Direction, topology: Topology) -> Self {
        let (dx, dy) = direction.delta();
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let sx = topology.offset(x, -dx, self.width);
                let sy = topology.offset(y, -dy, self.height);
                match (sx, sy) {
                    (Some(sx), Some(sy)) => self.cells[self.get_index(sx, sy)],
                    _ => Cell::Dead,
                }
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Number of live cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }
}
