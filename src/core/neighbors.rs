//! Moore-neighborhood counting.

use super::grid::Grid;

/// Offsets of the eight Moore neighbors, row-major.
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count the live neighbors of logical cell `(x, y)`.
///
/// The dead border guarantees every neighbor read is in bounds, so the only
/// check is that `(x, y)` itself is logical. Returns a value in `[0, 8]`.
///
/// # Panics
///
/// Panics if `(x, y)` is a border cell or outside the grid.
///
/// ```
/// use glife::core::{count_live_neighbors, Grid};
///
/// let grid = Grid::from_rows(3, 3, ["***", "*.*", "***"], '*');
/// assert_eq!(count_live_neighbors(&grid, 2, 2), 8);
/// assert_eq!(count_live_neighbors(&grid, 1, 1), 2);
/// ```
#[must_use]
pub fn count_live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    assert!(
        grid.is_logical(x, y),
        "neighbor count for ({x},{y}) out of range for {}x{} grid",
        grid.rows(),
        grid.cols()
    );

    MOORE_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| {
            grid.is_alive(x.wrapping_add_signed(dx), y.wrapping_add_signed(dy))
        })
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolated_cell_has_no_neighbors() {
        let grid = Grid::from_rows(3, 3, ["...", ".*.", "..."], '*');
        assert_eq!(count_live_neighbors(&grid, 2, 2), 0);
    }

    #[test]
    fn test_cell_does_not_count_itself() {
        let grid = Grid::from_rows(3, 3, ["***", "***", "***"], '*');
        assert_eq!(count_live_neighbors(&grid, 2, 2), 8);
    }

    #[test]
    fn test_corner_sees_only_logical_neighbors() {
        let grid = Grid::from_rows(2, 2, ["**", "**"], '*');
        assert_eq!(count_live_neighbors(&grid, 1, 1), 3);
        assert_eq!(count_live_neighbors(&grid, 2, 2), 3);
    }

    #[test]
    fn test_blinker_center() {
        let grid = Grid::from_rows(3, 3, ["...", "***", "..."], '*');
        assert_eq!(count_live_neighbors(&grid, 2, 2), 2);
        assert_eq!(count_live_neighbors(&grid, 1, 2), 3);
        assert_eq!(count_live_neighbors(&grid, 2, 1), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_border_cell_panics() {
        let grid = Grid::new(3, 3);
        let _ = count_live_neighbors(&grid, 0, 2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_beyond_grid_panics() {
        let grid = Grid::new(3, 3);
        let _ = count_live_neighbors(&grid, 4, 1);
    }
}
