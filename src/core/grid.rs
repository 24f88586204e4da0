//! Bordered cell grid.
//!
//! The grid stores `rows × cols` logical cells inside a one-cell dead border,
//! so physical storage is `(rows + 2) × (cols + 2)`. The border lets neighbor
//! counting read all eight neighbors of any logical cell without range checks.
//!
//! Logical cell `(i, j)` (0-based) lives at physical `(i + 1, j + 1)`.
//! All public accessors take physical coordinates.

use rustc_hash::FxHashSet;

use super::cell::{CellState, Coordinate};
use super::error::ConfigError;
use crate::history::Generation;

/// Fixed-size cell matrix with a dead border.
///
/// Cells are stored row-major in a single `Vec`. The grid is never resized
/// after construction and border cells are never written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Upper bound on physical cells, border included.
    pub const MAX_CELLS: usize = 1 << 28;

    /// Validate logical dimensions before building a grid.
    ///
    /// Returns the physical cell count.
    pub fn check_dimensions(rows: usize, cols: usize) -> Result<usize, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::ZeroDimension { rows, cols });
        }

        rows.checked_add(2)
            .zip(cols.checked_add(2))
            .and_then(|(r, c)| r.checked_mul(c))
            .filter(|&cells| cells <= Self::MAX_CELLS)
            .ok_or(ConfigError::TooLarge { rows, cols })
    }

    /// Create a grid of `rows × cols` logical cells, all dead.
    ///
    /// # Panics
    ///
    /// Panics if [`Grid::check_dimensions`] rejects the dimensions.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Grid must have at least one logical cell");
        let len = match Self::check_dimensions(rows, cols) {
            Ok(len) => len,
            Err(err) => panic!("{err}"),
        };

        Self {
            rows,
            cols,
            cells: vec![CellState::Dead; len],
        }
    }

    /// Build a grid from text lines.
    ///
    /// Every character equal to `live_char` marks that logical cell alive.
    /// Characters beyond `cols` are ignored, missing lines and short lines
    /// leave cells dead.
    ///
    /// ```
    /// use glife::core::{Coordinate, Grid};
    ///
    /// let grid = Grid::from_rows(2, 3, ["*.*", ".*"], '*');
    /// assert!(grid.is_alive(1, 1));
    /// assert!(grid.is_alive(1, 3));
    /// assert!(grid.is_alive(2, 2));
    /// assert_eq!(grid.population(), 3);
    /// ```
    #[must_use]
    pub fn from_rows<'a>(
        rows: usize,
        cols: usize,
        lines: impl IntoIterator<Item = &'a str>,
        live_char: char,
    ) -> Self {
        let mut grid = Self::new(rows, cols);

        for (row, line) in lines.into_iter().take(rows).enumerate() {
            for (col, ch) in line.chars().take(cols).enumerate() {
                if ch == live_char {
                    grid.set_alive(row + 1, col + 1);
                }
            }
        }

        grid
    }

    // === Dimensions ===

    /// Number of logical rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of logical columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of physical rows (border included).
    #[must_use]
    pub fn physical_rows(&self) -> usize {
        self.rows + 2
    }

    /// Number of physical columns (border included).
    #[must_use]
    pub fn physical_cols(&self) -> usize {
        self.cols + 2
    }

    /// Check if `(x, y)` is a logical (non-border) cell.
    #[must_use]
    pub fn is_logical(&self, x: usize, y: usize) -> bool {
        (1..=self.rows).contains(&x) && (1..=self.cols).contains(&y)
    }

    /// Iterate over all logical coordinates in row-major order.
    pub fn logical_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (1..=self.rows).flat_map(move |x| (1..=self.cols).map(move |y| Coordinate::new(x, y)))
    }

    // === Cell Access ===

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        x * (self.cols + 2) + y
    }

    /// Get the state of a physical cell.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the physical grid.
    #[must_use]
    pub fn state(&self, x: usize, y: usize) -> CellState {
        assert!(
            x < self.physical_rows() && y < self.physical_cols(),
            "cell ({x},{y}) out of range for {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[self.offset(x, y)]
    }

    /// Check if a physical cell is alive.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the physical grid.
    #[must_use]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.state(x, y).is_alive()
    }

    /// Set the state of a logical cell.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is not a logical cell. Border cells stay dead.
    pub fn set(&mut self, x: usize, y: usize, state: CellState) {
        assert!(
            self.is_logical(x, y),
            "cell ({x},{y}) out of range for {}x{} grid",
            self.rows,
            self.cols
        );
        let offset = self.offset(x, y);
        self.cells[offset] = state;
    }

    /// Mark a logical cell alive.
    pub fn set_alive(&mut self, x: usize, y: usize) {
        self.set(x, y, CellState::Alive);
    }

    /// Mark a logical cell dead.
    pub fn set_dead(&mut self, x: usize, y: usize) {
        self.set(x, y, CellState::Dead);
    }

    /// Count live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    // === Generations ===

    /// Snapshot the live cells in row-major order.
    #[must_use]
    pub fn live_cells(&self) -> Generation {
        self.logical_cells()
            .filter(|c| self.is_alive(c.x, c.y))
            .collect()
    }

    /// Bring the grid from `previous` to `generation`.
    ///
    /// Cells of `previous` missing from `generation` die first, then every
    /// cell of `generation` is marked alive. Cells present in both stay alive
    /// and are never toggled.
    pub fn sync_from_generation(&mut self, generation: &Generation, previous: &Generation) {
        let next: FxHashSet<Coordinate> = generation.iter().copied().collect();

        for cell in previous.iter().filter(|c| !next.contains(c)) {
            self.set_dead(cell.x, cell.y);
        }

        for cell in generation.iter() {
            self.set_alive(cell.x, cell.y);
        }
    }
}

impl std::fmt::Display for Grid {
    /// Plain rendering of the logical area: `*` alive, `.` dead.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for x in 1..=self.rows {
            for y in 1..=self.cols {
                let ch = if self.is_alive(x, y) { '*' } else { '.' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
