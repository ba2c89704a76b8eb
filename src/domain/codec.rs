//! Plain-text pattern format.
//!
//! One line per row, `O` for a live cell and `.` for a dead one. Lines
//! starting with `!` are comments. Two import dialects exist:
//!
//! - **Plain** (`.txt` and anything unrecognised): the grid is resized to
//!   the pattern's bounding box and the pattern sits at the origin.
//! - **Cells** (`.cells`, the Life Lexicon format): the pattern is centered
//!   in the current grid, which grows first if it cannot leave a 15-cell
//!   margin on every side.
//!
//! Decoding is lenient: unknown characters are skipped and short lines are
//! read only as far as they go.

use std::path::Path;

use super::{Cell, Grid};

/// Empty cells kept around a `.cells` pattern on each side
pub const CELLS_MARGIN: usize = 15;

const COMMENT_PREFIX: char = '!';

/// Import dialect, picked from the file name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    Plain,
    Cells,
}

impl Dialect {
    /// `.cells` (any case) selects the centered dialect, everything else is plain
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let is_cells = path
            .as_ref()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("cells"));
        if is_cells { Dialect::Cells } else { Dialect::Plain }
    }
}

/// Serialize a grid, one newline-terminated line per row
pub fn encode(grid: &Grid) -> String {
    let (width, height) = grid.dimensions();
    let mut out = String::with_capacity((width + 1) * height);
    for row in grid.rows() {
        out.extend(row.iter().map(|cell| cell.as_char()));
        out.push('\n');
    }
    out
}

/// Pattern lines with comments and empty lines stripped
struct TextPattern<'a> {
    lines: Vec<&'a str>,
    width: usize,
}

impl<'a> TextPattern<'a> {
    fn parse(content: &'a str) -> Self {
        let lines: Vec<&str> = content
            .lines()
            .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
            .collect();
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        Self { lines, width }
    }

    fn height(&self) -> usize {
        self.lines.len()
    }

    fn stamp(&self, grid: &mut Grid, start_x: usize, start_y: usize) {
        for (y, line) in self.lines.iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                if let Some(cell) = Cell::from_char(c) {
                    grid.set(start_x + x, start_y + y, cell);
                }
            }
        }
    }
}

/// Build the grid described by `content`.
///
/// `current` is the size of the grid being replaced; only the Cells dialect
/// looks at it. Returns `None` when the content holds no pattern lines, in
/// which case the caller should leave its grid alone.
pub fn decode(content: &str, dialect: Dialect, current: (usize, usize)) -> Option<Grid> {
    let pattern = TextPattern::parse(content);
    let (pattern_width, pattern_height) = (pattern.width, pattern.height());
    if pattern_width == 0 || pattern_height == 0 {
        return None;
    }

    let (width, height, start_x, start_y) = match dialect {
        Dialect::Plain => (pattern_width, pattern_height, 0, 0),
        Dialect::Cells => {
            let width = current.0.max(pattern_width + 2 * CELLS_MARGIN);
            let height = current.1.max(pattern_height + 2 * CELLS_MARGIN);
            // start = (dim >> 1) - (pattern >> 1), floor halving on both terms
            let start_x = (width >> 1).saturating_sub(pattern_width >> 1);
            let start_y = (height >> 1).saturating_sub(pattern_height >> 1);
            (width, height, start_x, start_y)
        }
    };

    let mut grid = Grid::new(width, height);
    pattern.stamp(&mut grid, start_x, start_y);
    Some(grid)
}
