//! Rule engine trait and the Conway rule.
//!
//! Rules implement `RuleEngine` to define:
//! - The next state of a cell given its live-neighbor count
//!
//! The provided `compute_next_generation` scans the grid and is shared by
//! every rule.

use crate::core::{count_live_neighbors, CellState, Grid};
use crate::history::{Generation, GenerationHistory};

/// Rule engine trait.
///
/// ## Implementation Notes
///
/// - `next_state` must be a pure function of its arguments
/// - `compute_next_generation` never mutates the grid or the history;
///   the caller appends the result and syncs the grid
pub trait RuleEngine {
    /// Short rule name for logs (e.g. `"B3/S23"`).
    fn name(&self) -> &str;

    /// State of a cell in the next generation.
    fn next_state(&self, current: CellState, live_neighbors: u8) -> CellState;

    // === Provided ===

    /// Compute the live cells of the next generation.
    ///
    /// With an empty history this is the seed step: the current live cells
    /// are returned unchanged. Otherwise every logical cell is evaluated in
    /// row-major order.
    fn compute_next_generation(&self, grid: &Grid, history: &GenerationHistory) -> Generation {
        if history.is_empty() {
            return grid.live_cells();
        }

        grid.logical_cells()
            .filter(|cell| {
                let current = grid.state(cell.x, cell.y);
                let n = count_live_neighbors(grid, cell.x, cell.y);
                self.next_state(current, n).is_alive()
            })
            .collect()
    }
}

/// Conway's Game of Life (B3/S23).
///
/// A live cell survives with 2 or 3 live neighbors. A dead cell is born
/// with exactly 3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConwayRules;

impl RuleEngine for ConwayRules {
    fn name(&self) -> &str {
        "B3/S23"
    }

    fn next_state(&self, current: CellState, live_neighbors: u8) -> CellState {
        let alive = match current {
            CellState::Alive => matches!(live_neighbors, 2 | 3),
            CellState::Dead => live_neighbors == 3,
        };
        CellState::from_alive(alive)
    }
}
