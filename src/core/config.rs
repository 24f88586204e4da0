//! Simulation configuration.
//!
//! The only knob the core reads is the generation cap. Display pacing and
//! colors live in [`crate::io::DisplayConfig`].

use serde::{Deserialize, Serialize};

/// Core simulation configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Maximum number of generations to simulate (`None` = unbounded).
    ///
    /// Generations are indexed from 0, so a cap of `n` stops at index `n - 1`.
    pub max_generations: Option<usize>,
}

impl SimulationConfig {
    /// Create an unbounded configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of generations.
    #[must_use]
    pub fn with_max_generations(mut self, max: usize) -> Self {
        self.max_generations = Some(max);
        self
    }

    /// Remove the generation cap.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_generations = None;
        self
    }

    /// Check if the run has no generation cap.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.max_generations.is_none()
    }
}
