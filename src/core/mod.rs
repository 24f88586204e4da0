//! Core types: cells, the bordered grid, neighbor counting, configuration,
//! errors and random soups.
//!
//! Everything here is independent of rules and termination. The grid is the
//! only mutable state and is synced in place once per generation.

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod seed;

pub use cell::{CellState, Coordinate};
pub use config::SimulationConfig;
pub use error::{ConfigError, LifeError, Result};
pub use grid::Grid;
pub use neighbors::count_live_neighbors;
pub use seed::{SoupSeeder, SoupSeederState};
