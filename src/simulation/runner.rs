//! The generation loop.
//!
//! ```text
//! initialize → render → (advance → process_events → update → render)* → done
//! ```
//!
//! The simulation exclusively owns the grid and the history. Rules and the
//! termination checker only borrow them for the duration of a call.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Grid, Result, SimulationConfig};
use crate::history::GenerationHistory;
use crate::rules::{ConwayRules, RuleEngine};
use crate::termination::{Status, TerminationChecker};

use super::observer::{Frame, Observer};

/// Lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Grid loaded, generation 0 not recorded yet.
    Init,
    /// At least one generation recorded and no stop condition holds.
    Running,
    /// A stop condition holds.
    Done,
}

/// Result of a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Why the run stopped.
    pub status: Status,
    /// Index of the last generation.
    pub final_generation: usize,
    /// Live cells in the last generation.
    pub population: usize,
}

/// Game of Life simulation over a fixed grid.
#[derive(Clone, Debug)]
pub struct Simulation<R = ConwayRules> {
    grid: Grid,
    history: GenerationHistory,
    generation: usize,
    checker: TerminationChecker,
    rules: R,
    phase: Phase,
    status: Status,
}

impl Simulation<ConwayRules> {
    /// Create a Conway simulation over a loaded grid.
    #[must_use]
    pub fn new(grid: Grid, config: &SimulationConfig) -> Self {
        Self::with_rules(grid, config, ConwayRules)
    }
}

impl<R: RuleEngine> Simulation<R> {
    /// Create a simulation with a custom rule.
    #[must_use]
    pub fn with_rules(grid: Grid, config: &SimulationConfig, rules: R) -> Self {
        Self {
            grid,
            history: GenerationHistory::new(),
            generation: 0,
            checker: TerminationChecker::from_config(config),
            rules,
            phase: Phase::Init,
            status: Status::Running,
        }
    }

    // === Accessors ===

    /// Current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Recorded generations.
    #[must_use]
    pub fn history(&self) -> &GenerationHistory {
        &self.history
    }

    /// Current generation index.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Status of the current generation.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rule in use.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Check if a stop condition holds.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    // === Loop ===

    /// Record generation 0 from the loaded grid and evaluate it.
    ///
    /// # Panics
    ///
    /// Panics if called twice.
    pub fn initialize(&mut self) -> Status {
        assert_eq!(self.phase, Phase::Init, "simulation already initialized");

        let seed = self.rules.compute_next_generation(&self.grid, &self.history);
        self.history.push(seed);
        self.phase = Phase::Running;

        info!(
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            population = self.grid.population(),
            max_generations = ?self.checker.max_generations(),
            rule = self.rules.name(),
            "simulation initialized"
        );

        self.refresh_status()
    }

    /// Move the generation counter forward.
    ///
    /// # Panics
    ///
    /// Panics unless the simulation is running.
    pub fn advance(&mut self) {
        assert_eq!(self.phase, Phase::Running, "simulation is not running");
        self.generation += 1;
    }

    /// Apply the rule to the current grid and record the result.
    ///
    /// # Panics
    ///
    /// Panics unless the simulation is running and `advance` was called
    /// since the last recorded generation.
    pub fn process_events(&mut self) {
        assert_eq!(self.phase, Phase::Running, "simulation is not running");
        assert_eq!(
            self.history.len(),
            self.generation,
            "process_events called without a preceding advance"
        );

        let next = self.rules.compute_next_generation(&self.grid, &self.history);
        self.history.push(next);
    }

    /// Sync the grid from the previous generation to the current one.
    ///
    /// # Panics
    ///
    /// Panics unless the current generation has been recorded by
    /// `process_events`.
    pub fn update(&mut self) {
        assert_eq!(self.phase, Phase::Running, "simulation is not running");
        assert!(self.generation > 0, "update called before any generation was advanced");
        assert_eq!(
            self.history.len(),
            self.generation + 1,
            "update called before process_events recorded generation {}",
            self.generation
        );

        let current = self.history.generation(self.generation);
        let previous = self.history.generation(self.generation - 1);
        self.grid.sync_from_generation(current, previous);
    }

    /// Run one full transition and evaluate the new generation.
    pub fn step(&mut self) -> Status {
        self.advance();
        self.process_events();
        self.update();

        debug!(
            generation = self.generation,
            population = self.history.generation(self.generation).len(),
            "generation computed"
        );

        self.refresh_status()
    }

    /// Run until a stop condition holds, reporting every generation.
    pub fn run<O: Observer>(&mut self, mut observer: O) -> Result<Outcome> {
        if self.phase == Phase::Init {
            self.initialize();
        }

        observer.on_start(&self.grid)?;
        observer.on_generation(&self.frame())?;

        while !self.is_done() {
            self.step();
            observer.on_generation(&self.frame())?;
        }

        let outcome = self.outcome();
        observer.on_finish(&outcome)?;
        Ok(outcome)
    }

    /// Current generation as a render frame.
    ///
    /// # Panics
    ///
    /// Panics before `initialize`.
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            index: self.generation,
            generation: self.history.generation(self.generation),
            grid: &self.grid,
            max_generations: self.checker.max_generations(),
        }
    }

    /// Summary of the current generation.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome {
            status: self.status,
            final_generation: self.generation,
            population: self.history.get(self.generation).map_or(0, |g| g.len()),
        }
    }

    fn refresh_status(&mut self) -> Status {
        let status = self.checker.evaluate(&self.history, self.generation);
        self.status = status;

        if status.is_game_over() {
            self.phase = Phase::Done;
            match status {
                Status::Stable { matched } => info!(
                    generation = self.generation,
                    matched,
                    "simulation ended due to stability"
                ),
                _ => info!(
                    generation = self.generation,
                    reason = status.reason().unwrap_or_default(),
                    "simulation ended"
                ),
            }
        }

        status
    }
}
