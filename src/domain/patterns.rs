use super::{Cell, Grid, codec::{self, Dialect}};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,  // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a pattern from plain-text rows (`O` alive, `.` dead)
    pub fn from_text(name: &'static str, description: &'static str, text: &str) -> Self {
        let grid = codec::decode(text, Dialect::Plain, (1, 1)).unwrap_or_else(|| Grid::new(1, 1));
        let (width, height) = grid.dimensions();
        let cells = grid
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect();
        Self { name, description, width, height, cells }
    }

    /// Place pattern on grid at specified position.
    /// Cells falling outside the grid are dropped.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        for (dx, dy) in &self.cells {
            let (Some(px), Some(py)) = (x.checked_add(*dx), y.checked_add(*dy)) else {
                continue;
            };
            grid.set(px, py, Cell::Alive);
        }
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::from_text(
            "Glider",
            "Moves diagonally (period 4)",
            ".O.\n\
             ..O\n\
             OOO",
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::from_text("Blinker", "Oscillator (period 2)", "OOO")
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::from_text(
            "Beacon",
            "Oscillator (period 2)",
            "OO..\n\
             O...\n\
             ...O\n\
             ..OO",
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::from_text("Block", "Still life", "OO\nOO")
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::from_text(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            ".O..O\n\
             O....\n\
             O...O\n\
             OOOO.",
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::from_text(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            ".OO\n\
             OO.\n\
             .O.",
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::from_text(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            "........................O...........\n\
             ......................O.O...........\n\
             ............OO......OO............OO\n\
             ...........O...O....OO............OO\n\
             OO........O.....O...OO..............\n\
             OO........O...O.OO....O.O...........\n\
             ..........O.....O.......O...........\n\
             ...........O...O....................\n\
             ............OO......................",
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            beacon(),
            block(),
            lwss(),
            r_pentomino(),
            glider_gun(),
        ]
    }
}
