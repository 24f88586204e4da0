//! # glife
//!
//! Conway's Game of Life on a finite, bordered grid, run until extinction,
//! stability or a generation cap.
//!
//! ## Design Principles
//!
//! 1. **Bordered Grid**: A one-cell dead frame around the logical area lets
//!    neighbor counting skip range checks.
//!
//! 2. **Full History**: Every generation is kept, so a repeat of *any*
//!    earlier generation ends the run, not just a repeat of the previous one.
//!
//! 3. **Pure Core**: Rules and termination checks borrow state and keep
//!    nothing between calls. Only the simulation mutates.
//!
//! ## Modules
//!
//! - `core`: Cells, grid, neighbor counting, configuration, errors, soups
//! - `rules`: RuleEngine trait and Conway's B3/S23
//! - `history`: Generations and the append-only history log
//! - `termination`: Extinction, stability and generation cap
//! - `simulation`: The generation loop and the Observer seam
//! - `io`: Configuration loader, terminal renderer, text log
//!
//! ## Example
//!
//! ```
//! use glife::{Grid, Simulation, SimulationConfig, Status};
//!
//! let grid = Grid::from_rows(4, 4, ["....", ".**.", ".**.", "...."], '*');
//! let mut sim = Simulation::new(grid, &SimulationConfig::default());
//! let outcome = sim.run(()).unwrap();
//!
//! assert_eq!(outcome.status, Status::Stable { matched: 0 });
//! assert_eq!(outcome.final_generation, 1);
//! ```

pub mod core;
pub mod history;
pub mod io;
pub mod rules;
pub mod simulation;
pub mod termination;

// Re-export commonly used types
pub use crate::core::{
    count_live_neighbors, CellState, ConfigError, Coordinate, Grid, LifeError, Result,
    SimulationConfig, SoupSeeder,
};

pub use crate::history::{Generation, GenerationHistory};

pub use crate::rules::{ConwayRules, RuleEngine};

pub use crate::termination::{Status, TerminationChecker};

pub use crate::simulation::{Frame, Observer, Outcome, Phase, Recorder, Simulation};

pub use crate::io::{load_config, parse_config, DisplayConfig, LoadedConfig, TerminalRenderer};
