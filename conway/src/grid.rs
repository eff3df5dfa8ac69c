// grid.rs - Bounded grid for Conway's Game of Life

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::GridError;
use crate::rule;

/// One generation: a rectangular grid of cells stored row-major in a single
/// buffer (`row * cols + col`).
///
/// Positions outside the grid are dead. An edge cell has fewer than eight
/// neighbors; nothing wraps to the opposite edge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid.
    ///
    /// # Panics
    ///
    /// If `rows * cols` overflows `usize`. Use [`Grid::try_new`] for sizes
    /// that come from outside the program.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates an all-dead grid, failing if the cell count overflows `usize`.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    /// Builds a grid from rows of cell values. Any value other than the
    /// type's default (`0`, `false`) is alive.
    ///
    /// Every row must have the length of the first one.
    pub fn from_rows<I, R, T>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
        T: Copy + Default + PartialEq,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row, values) in rows.into_iter().enumerate() {
            let values = values.as_ref();
            let expected = *width.get_or_insert(values.len());
            if values.len() != expected {
                return Err(GridError::Shape {
                    row,
                    expected,
                    found: values.len(),
                });
            }
            cells.extend(values.iter().map(|&value| value != T::default()));
            height = row + 1;
        }

        let grid = Self {
            rows: height,
            cols: width.unwrap_or(0),
            cells,
        };
        debug!(rows = grid.rows, cols = grid.cols, "built grid");
        Ok(grid)
    }

    /// Fills a grid with roughly one live cell in three.
    ///
    /// The same seed always produces the same grid.
    ///
    /// # Panics
    ///
    /// If `rows * cols` overflows `usize`; see [`Grid::try_random`].
    pub fn random(rows: usize, cols: usize, seed: u64) -> Self {
        match Self::try_random(rows, cols, seed) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    /// Like [`Grid::random`], failing if the cell count overflows `usize`.
    pub fn try_random(rows: usize, cols: usize, seed: u64) -> Result<Self, GridError> {
        let len = cell_count(rows, cols)?;
        let mut hasher = DefaultHasher::new();
        seed.hash(&mut hasher);
        let mut state = hasher.finish();

        let cells = (0..len)
            .map(|_| {
                state = state.wrapping_mul(1103515245).wrapping_add(12345);
                state % 3 == 0
            })
            .collect();
        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Sets a cell and returns its previous value.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<bool, GridError> {
        let i = self.index(row, col)?;
        Ok(std::mem::replace(&mut self.cells[i], alive))
    }

    /// Flips a cell and returns its new value.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let i = self.index(row, col)?;
        self.cells[i] = !self.cells[i];
        Ok(self.cells[i])
    }

    /// Kills every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Counts the live cells among the up to eight cells around `(row, col)`.
    pub fn neighbor_count(&self, row: usize, col: usize) -> Result<u8, GridError> {
        self.index(row, col)?;
        Ok(self.count_neighbors(row, col))
    }

    /// The state `(row, col)` will have in the next generation.
    pub fn next_state(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let i = self.index(row, col)?;
        Ok(rule::next(self.cells[i], self.count_neighbors(row, col)))
    }

    /// Computes the next generation.
    ///
    /// Every cell is derived from `self` as it stands; no new value is read
    /// back while the rest of the generation is computed.
    pub fn advance(&self) -> Grid {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| rule::next(self.alive(row, col), self.count_neighbors(row, col)))
            .collect();
        let next = Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        };
        trace!(population = next.population(), "advanced grid");
        next
    }

    /// One line per row, cells as `0`/`1` separated by a space, no trailing
    /// newline.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(GridError::Range {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    // Caller guarantees (row, col) is inside the grid.
    fn alive(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    // Live cells at col-1, col+1 and optionally col itself on one row, clipped
    // at the left and right edges.
    fn row_neighbors(&self, row: usize, col: usize, with_center: bool) -> u8 {
        let left = col.checked_sub(1).is_some_and(|c| self.alive(row, c));
        let center = with_center && self.alive(row, col);
        let right = col + 1 < self.cols && self.alive(row, col + 1);
        u8::from(left) + u8::from(center) + u8::from(right)
    }

    fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let above = row
            .checked_sub(1)
            .map_or(0, |up| self.row_neighbors(up, col, true));
        let below = if row + 1 < self.rows {
            self.row_neighbors(row + 1, col, true)
        } else {
            0
        };
        above + below + self.row_neighbors(row, col, false)
    }
}

fn cell_count(rows: usize, cols: usize) -> Result<usize, GridError> {
    rows.checked_mul(cols).ok_or(GridError::Size { rows, cols })
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                f.write_str("\n")?;
            }
            for col in 0..self.cols {
                if col > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if self.alive(row, col) { "1" } else { "0" })?;
            }
        }
        Ok(())
    }
}

/// Parses the text produced by [`Grid::render`]. Blank lines are skipped.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                line.split_whitespace()
                    .map(|token| {
                        token.parse::<u8>().map_err(|_| GridError::Parse {
                            line: index + 1,
                            token: token.to_owned(),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_rows(rows)
    }
}
