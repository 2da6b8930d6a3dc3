use thiserror::Error;

use super::GridField;

/// Errors raised while reading an ASCII pattern picture
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("unexpected symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol { symbol: char, row: usize, column: usize },
    #[error("pattern {0:?} has no live cells")]
    Empty(String),
}

/// A seed: live-cell offsets relative to a top-left origin
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    pub fn new(name: impl Into<String>, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|&(x, _)| x).max().map_or(0, |x| x + 1);
        let height = cells.iter().map(|&(_, y)| y).max().map_or(0, |y| y + 1);
        Self { name: name.into(), width, height, cells }
    }

    /// Parse a picture where `#` or `O` marks a live cell and `.` or a space a dead one.
    pub fn from_rows(name: impl Into<String>, rows: &[&str]) -> Result<Self, PatternError> {
        let name = name.into();
        let mut cells = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            for (column, symbol) in line.chars().enumerate() {
                match symbol {
                    '#' | 'O' => cells.push((column, row)),
                    '.' | ' ' => {}
                    _ => return Err(PatternError::UnknownSymbol { symbol, row, column }),
                }
            }
        }

        if cells.is_empty() {
            return Err(PatternError::Empty(name));
        }
        Ok(Self::new(name, cells))
    }

    /// Mark the pattern's cells alive with its origin at (x, y).
    /// Any origin is accepted; cells past an edge continue on the opposite one.
    pub fn place_on(&self, field: &mut GridField, x: isize, y: isize) {
        let (width, height) = field.dimensions();
        let (ox, oy) = field.wrap(x, y);

        for &(dx, dy) in &self.cells {
            // Both terms are below the dimension, which fits in isize.
            let px = (ox + dx % width) % width;
            let py = (oy + dy % height) % height;
            field.set(px as isize, py as isize, true);
        }
    }

    /// Place the pattern with its origin on the field's center cell
    pub fn place_from_center(&self, field: &mut GridField) {
        let (width, height) = field.dimensions();
        self.place_on(field, (width / 2) as isize, (height / 2) as isize);
    }
}

/// Classic seeds used by the binary and the simulation tests
pub mod presets {
    use super::Pattern;

    const GLIDER: &[(usize, usize)] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    const BLOCK: &[(usize, usize)] = &[(0, 0), (1, 0), (0, 1), (1, 1)];
    const BLINKER: &[(usize, usize)] = &[(0, 1), (1, 1), (2, 1)];
    const TOAD: &[(usize, usize)] = &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)];
    const BEACON: &[(usize, usize)] = &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)];

    /// Spaceship moving one cell diagonally every four generations
    pub fn glider() -> Pattern {
        Pattern::new("Glider", GLIDER.to_vec())
    }

    pub fn block() -> Pattern {
        Pattern::new("Block", BLOCK.to_vec())
    }

    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", BLINKER.to_vec())
    }

    pub fn toad() -> Pattern {
        Pattern::new("Toad", TOAD.to_vec())
    }

    pub fn beacon() -> Pattern {
        Pattern::new("Beacon", BEACON.to_vec())
    }
}
