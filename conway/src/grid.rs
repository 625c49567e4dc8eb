// grid.rs - Toroidal grid for Conway's Game of Life

use rand::Rng;

use crate::Config;
use crate::error::{LifeError, Result};

/// Offsets of the eight cells surrounding a cell.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Size of a grid. Both sides are at least one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    pub const DEFAULT: Dimensions = Dimensions {
        rows: Config::ROWS,
        cols: Config::COLS,
    };

    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::EmptyDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Moves `index` by `delta` on a ring of `len` positions.
fn wrap(index: usize, delta: isize, len: usize) -> usize {
    (index % len + len).wrapping_add_signed(delta) % len
}

/// Fixed-size grid of cells, stored row by row. Edges wrap around.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<bool>,
}

impl Grid {
    /// Grid with every cell dead.
    pub fn empty(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![false; dims.cell_count()],
        }
    }

    /// Grid where each cell is alive with probability `density`, drawn from the thread RNG.
    pub fn random(dims: Dimensions, density: f64) -> Self {
        Self::random_with(dims, density, &mut rand::thread_rng())
    }

    pub fn random_with<R: Rng + ?Sized>(dims: Dimensions, density: f64, rng: &mut R) -> Self {
        let density = if density.is_nan() {
            0.
        } else {
            density.clamp(0., 1.)
        };
        let cells = (0..dims.cell_count())
            .map(|_| rng.gen_bool(density))
            .collect();
        Self { dims, cells }
    }

    /// Builds a grid from text rows, `#`, `O` or `*` for alive and `.` for dead.
    pub fn parse(rows: &[&str]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        let dims = Dimensions::new(rows.len(), width)?;
        let mut cells = Vec::with_capacity(dims.cell_count());

        for (row_index, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LifeError::RaggedRow {
                    row: row_index,
                    expected: width,
                    found,
                });
            }
            for (col_index, marker) in row.chars().enumerate() {
                cells.push(match marker {
                    '#' | 'O' | '*' => true,
                    '.' => false,
                    _ => {
                        return Err(LifeError::InvalidCell {
                            row: row_index,
                            col: col_index,
                            found: marker,
                        });
                    }
                });
            }
        }
        Ok(Self { dims, cells })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        (row % self.dims.rows) * self.dims.cols + col % self.dims.cols
    }

    /// State of the cell at (`row`, `col`); coordinates wrap.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let index = self.index(row, col);
        self.cells[index] = alive;
    }

    /// Flips a single cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        let index = self.index(row, col);
        self.cells[index] = !self.cells[index];
        self.cells[index]
    }

    /// Rows of the grid, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.dims.cols)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    /// Counts the live cells among the eight toroidal neighbors of (`row`, `col`).
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let Dimensions { rows, cols } = self.dims;
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| self.cells[wrap(row, dr, rows) * cols + wrap(col, dc, cols)])
            .count() as u8
    }

    /// Writes the following generation into `next`, reading only from `self`.
    pub fn step_into(&self, next: &mut Grid) {
        if next.dims != self.dims {
            *next = Grid::empty(self.dims);
        }
        for row in 0..self.dims.rows {
            for col in 0..self.dims.cols {
                let index = row * self.dims.cols + col;
                next.cells[index] = next_state(self.cells[index], self.live_neighbors(row, col));
            }
        }
    }

    /// Following generation as a fresh grid.
    pub fn next_generation(&self) -> Grid {
        let mut next = Grid::empty(self.dims);
        self.step_into(&mut next);
        next
    }
}

/// B3/S23: birth on three neighbors, survival on two or three.
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}
