//! Cell state and coordinates.
//!
//! ## CellState
//!
//! Two-valued cell state. Scoped here instead of integer sentinels so a
//! cell can never hold a third value.
//!
//! ## Coordinate
//!
//! Physical position of a cell in the bordered grid. Row `x`, column `y`.
//! Logical cells occupy `[1, rows] × [1, cols]`.

use serde::{Deserialize, Serialize};

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    /// Check if the cell is alive.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// Convert a boolean into a cell state.
    #[must_use]
    pub const fn from_alive(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

/// Physical grid position of a cell.
///
/// Ordering is row-major, matching the scan order used to build
/// generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Row (physical, border included).
    pub x: usize,
    /// Column (physical, border included).
    pub y: usize,
}

impl Coordinate {
    /// Create a coordinate from physical row and column.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Create a coordinate from a 0-based logical position.
    ///
    /// ```
    /// use glife::core::Coordinate;
    ///
    /// assert_eq!(Coordinate::from_logical(0, 0), Coordinate::new(1, 1));
    /// ```
    #[must_use]
    pub const fn from_logical(row: usize, col: usize) -> Self {
        Self { x: row + 1, y: col + 1 }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_state_default_is_dead() {
        assert_eq!(CellState::default(), CellState::Dead);
        assert!(!CellState::Dead.is_alive());
        assert!(CellState::Alive.is_alive());
    }

    #[test]
    fn test_cell_state_from_alive() {
        assert_eq!(CellState::from_alive(true), CellState::Alive);
        assert_eq!(CellState::from_alive(false), CellState::Dead);
    }

    #[test]
    fn test_coordinate_ordering_is_row_major() {
        let mut coords = vec![
            Coordinate::new(2, 1),
            Coordinate::new(1, 3),
            Coordinate::new(1, 1),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![Coordinate::new(1, 1), Coordinate::new(1, 3), Coordinate::new(2, 1)]
        );
    }

    #[test]
    fn test_coordinate_display() {
        assert_eq!(format!("{}", Coordinate::new(3, 4)), "[3,4]");
    }

    #[test]
    fn test_coordinate_serde() {
        let coord = Coordinate::new(5, 7);
        let json = serde_json::to_string(&coord).unwrap();
        let deserialized: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(coord, deserialized);
    }
}
