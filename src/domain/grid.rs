use std::fmt;

use rand::Rng;
use rayon::prelude::*;

use super::{ConfigError, FieldConfig, rules};

/// GridField holds the live/dead state of one generation on a torus.
/// Every coordinate query wraps, so lookups never go out of bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridField {
    config: FieldConfig,
    cells: Vec<bool>,
}

impl GridField {
    /// Create a field with all cells dead, rejecting invalid configurations
    pub fn new(config: FieldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::dead(config))
    }

    /// All-dead field sharing this field's configuration
    pub fn blank_copy(&self) -> Self {
        Self::dead(self.config)
    }

    // Only reached with validated configs, so the product cannot overflow.
    fn dead(config: FieldConfig) -> Self {
        Self {
            config,
            cells: vec![false; config.width * config.height],
        }
    }

    pub const fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.config.width, self.config.height)
    }

    /// Reduce arbitrary coordinates into the field with mathematical modulo,
    /// so -1 maps to width-1 rather than a negative remainder.
    pub(crate) fn wrap(&self, x: isize, y: isize) -> (usize, usize) {
        let w = self.config.width as isize;
        let h = self.config.height as isize;
        (x.rem_euclid(w) as usize, y.rem_euclid(h) as usize)
    }

    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.config.width + x
    }

    /// Whether the cell at (x, y) is alive, wrapping out-of-range coordinates
    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        let (x, y) = self.wrap(x, y);
        self.cells[self.get_index(x, y)]
    }

    /// Set the cell at (x, y), wrapping out-of-range coordinates
    pub fn set(&mut self, x: isize, y: isize, alive: bool) {
        let (x, y) = self.wrap(x, y);
        let idx = self.get_index(x, y);
        self.cells[idx] = alive;
    }

    /// Count live cells in the 3x3 block around (x, y), excluding the center.
    /// Always in 0..=8.
    pub fn count_alive_neighbors(&self, x: isize, y: isize) -> u8 {
        // Reduce before offsetting so extreme coordinates cannot overflow.
        let (cx, cy) = self.wrap(x, y);
        let (cx, cy) = (cx as isize, cy as isize);

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter(|&(dx, dy)| self.is_alive(cx + dx, cy + dy))
            .count() as u8
    }

    /// State of (x, y) in the following generation. Does not mutate the field.
    pub fn next_state(&self, x: isize, y: isize) -> bool {
        rules::conway(self.is_alive(x, y), self.count_alive_neighbors(x, y))
    }

    /// Write the next generation into `next`, row-major, reading only `self`.
    pub fn evolve_into(&self, next: &mut Self) {
        debug_assert_eq!(self.dimensions(), next.dimensions());
        let width = self.config.width;

        next.cells
            .chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| self.evolve_row(y, row));
    }

    /// Parallel variant of [`GridField::evolve_into`]: rows are computed on the
    /// rayon pool and the call returns only after every row is written.
    pub fn evolve_into_parallel(&self, next: &mut Self) {
        debug_assert_eq!(self.dimensions(), next.dimensions());
        let width = self.config.width;

        next.cells
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| self.evolve_row(y, row));
    }

    fn evolve_row(&self, y: usize, row: &mut [bool]) {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = self.next_state(x as isize, y as isize);
        }
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = false);
    }

    /// Fill the field at random; each cell is alive with probability `density`
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = rng.random_bool(density));
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let width = self.config.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &alive)| (idx % width, idx / width, alive))
    }

    /// Text picture of the field: one symbol per cell, one line per row,
    /// then a divider of `-` as long as the field is tall.
    pub fn render(&self) -> String {
        let FieldConfig { width, height, alive_symbol, dead_symbol } = self.config;
        let mut out = String::with_capacity((width + 1) * height + height);

        for row in self.cells.chunks(width) {
            out.extend(row.iter().map(|&alive| if alive { alive_symbol } else { dead_symbol }));
            out.push('\n');
        }
        out.extend(std::iter::repeat_n('-', height));
        out
    }
}

impl fmt::Display for GridField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
