/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip the cell state
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (_, 3) | (Cell::Alive, 2) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    /// Character used by the plain-text codec
    pub const fn as_char(self) -> char {
        match self {
            Cell::Alive => 'O',
            Cell::Dead => '.',
        }
    }

    /// Parse a codec character; anything other than `O` or `.` is not a cell
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'O' => Some(Cell::Alive),
            '.' => Some(Cell::Dead),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
