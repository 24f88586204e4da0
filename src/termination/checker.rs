//! Termination checks over the generation history.
//!
//! Checks run cheapest first: generation cap, then extinction, then the
//! stability scan.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::SimulationConfig;
use crate::history::GenerationHistory;

/// Simulation status after evaluating a generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// No stop condition holds.
    Running,
    /// The generation has no live cells.
    Extinct,
    /// The generation repeats generation `matched`.
    Stable { matched: usize },
    /// The generation cap was reached.
    MaxGenerationReached,
}

impl Status {
    /// Check if the simulation should stop.
    #[must_use]
    pub fn is_game_over(self) -> bool {
        !matches!(self, Status::Running)
    }

    /// Termination reason, or `None` while running.
    #[must_use]
    pub fn reason(self) -> Option<&'static str> {
        match self {
            Status::Running => None,
            Status::Extinct => Some("extinction"),
            Status::Stable { .. } => Some("stability"),
            Status::MaxGenerationReached => Some("max-generation-reached"),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Running => write!(f, "running"),
            Status::Stable { matched } => write!(f, "stability (repeats generation {matched})"),
            other => write!(f, "{}", other.reason().unwrap_or_default()),
        }
    }
}

/// Check if generation `index` has no live cells.
///
/// # Panics
///
/// Panics if `index` has no history entry.
#[must_use]
pub fn is_extinct(history: &GenerationHistory, index: usize) -> bool {
    history.generation(index).is_empty()
}

/// Earliest generation before `index` with the same live-cell set.
///
/// Generation 0 never matches since nothing precedes it.
///
/// # Panics
///
/// Panics if `index` has no history entry.
#[must_use]
pub fn stable_match(history: &GenerationHistory, index: usize) -> Option<usize> {
    let matched = history.earlier_match(index);
    if let Some(matched) = matched {
        trace!(generation = index, matched, "generation repeats an earlier one");
    }
    matched
}

/// Check if generation `index` repeats any earlier generation.
#[must_use]
pub fn is_stable(history: &GenerationHistory, index: usize) -> bool {
    stable_match(history, index).is_some()
}

/// Evaluates the stop conditions for a configured generation cap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TerminationChecker {
    max_generations: Option<usize>,
}

impl TerminationChecker {
    /// Create a checker with an optional generation cap.
    #[must_use]
    pub fn new(max_generations: Option<usize>) -> Self {
        Self { max_generations }
    }

    /// Create a checker from the simulation configuration.
    #[must_use]
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.max_generations)
    }

    /// The configured cap.
    #[must_use]
    pub fn max_generations(&self) -> Option<usize> {
        self.max_generations
    }

    /// Check if generation `index` is the last one allowed by the cap.
    ///
    /// Always false when unbounded.
    #[must_use]
    pub fn is_max_generation(&self, index: usize) -> bool {
        match self.max_generations {
            Some(max) => index >= max.saturating_sub(1),
            None => false,
        }
    }

    /// Evaluate generation `index`.
    ///
    /// Order: generation cap, extinction, stability.
    #[must_use]
    pub fn evaluate(&self, history: &GenerationHistory, index: usize) -> Status {
        if self.is_max_generation(index) {
            return Status::MaxGenerationReached;
        }
        if is_extinct(history, index) {
            return Status::Extinct;
        }
        match stable_match(history, index) {
            Some(matched) => Status::Stable { matched },
            None => Status::Running,
        }
    }

    /// Check if the simulation should stop at generation `index`.
    #[must_use]
    pub fn is_done(&self, history: &GenerationHistory, index: usize) -> bool {
        self.evaluate(history, index).is_game_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coordinate;
    use crate::history::Generation;

    fn gen(cells: &[(usize, usize)]) -> Generation {
        cells.iter().copied().map(Coordinate::from).collect()
    }

    fn history(gens: &[&[(usize, usize)]]) -> GenerationHistory {
        let mut history = GenerationHistory::new();
        for cells in gens {
            history.push(gen(cells));
        }
        history
    }

    #[test]
    fn test_extinct() {
        let h = history(&[&[(1, 1)], &[]]);
        assert!(!is_extinct(&h, 0));
        assert!(is_extinct(&h, 1));
    }

    #[test]
    fn test_generation_zero_is_checked_for_extinction() {
        let h = history(&[&[]]);
        let checker = TerminationChecker::default();
        assert_eq!(checker.evaluate(&h, 0), Status::Extinct);
    }

    #[test]
    fn test_generation_zero_is_never_stable() {
        let h = history(&[&[(1, 1)]]);
        assert!(!is_stable(&h, 0));
        assert_eq!(TerminationChecker::default().evaluate(&h, 0), Status::Running);
    }

    #[test]
    fn test_stable_reports_matched_generation() {
        let h = history(&[&[(1, 1), (1, 2)], &[(2, 2)], &[(1, 2), (1, 1)]]);
        assert_eq!(stable_match(&h, 2), Some(0));
        assert_eq!(
            TerminationChecker::default().evaluate(&h, 2),
            Status::Stable { matched: 0 }
        );
    }

    #[test]
    #[should_panic(expected = "no generation recorded")]
    fn test_unrecorded_generation_panics() {
        let h = GenerationHistory::new();
        let _ = is_extinct(&h, 0);
    }

    #[test]
    fn test_max_generation() {
        let checker = TerminationChecker::new(Some(5));
        assert!(!checker.is_max_generation(3));
        assert!(checker.is_max_generation(4));
        assert!(checker.is_max_generation(9));
    }

    #[test]
    fn test_unbounded_never_hits_cap() {
        let checker = TerminationChecker::new(None);
        assert!(!checker.is_max_generation(usize::MAX));
    }

    #[test]
    fn test_zero_cap_stops_immediately() {
        let checker = TerminationChecker::new(Some(0));
        assert!(checker.is_max_generation(0));
    }

    #[test]
    fn test_cap_checked_before_extinction() {
        let h = history(&[&[(1, 1)], &[]]);
        let checker = TerminationChecker::new(Some(2));
        assert_eq!(checker.evaluate(&h, 1), Status::MaxGenerationReached);
    }

    #[test]
    fn test_extinction_checked_before_stability() {
        let h = history(&[&[], &[]]);
        let checker = TerminationChecker::default();
        assert_eq!(checker.evaluate(&h, 1), Status::Extinct);
    }

    #[test]
    fn test_is_done() {
        let h = history(&[&[(1, 1)], &[(2, 2)]]);
        let checker = TerminationChecker::default();
        assert!(!checker.is_done(&h, 1));
        assert!(TerminationChecker::new(Some(2)).is_done(&h, 1));
    }

    #[test]
    fn test_status_reason() {
        assert_eq!(Status::Running.reason(), None);
        assert_eq!(Status::Extinct.reason(), Some("extinction"));
        assert_eq!(Status::Stable { matched: 3 }.reason(), Some("stability"));
        assert_eq!(
            Status::MaxGenerationReached.reason(),
            Some("max-generation-reached")
        );
        assert!(!Status::Running.is_game_over());
        assert!(Status::Extinct.is_game_over());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Stable { matched: 2 }.to_string(), "stability (repeats generation 2)");
        assert_eq!(Status::Extinct.to_string(), "extinction");
        assert_eq!(Status::MaxGenerationReached.to_string(), "max-generation-reached");
    }

    #[test]
    fn test_status_serde() {
        let status = Status::Stable { matched: 4 };
        let json = serde_json::to_string(&status).unwrap();
        let deserialized: Status = serde_json::from_str(&json).unwrap();
        assert_eq!(status, deserialized);
    }

    #[test]
    fn test_from_config() {
        let config = SimulationConfig::new().with_max_generations(7);
        assert_eq!(TerminationChecker::from_config(&config).max_generations(), Some(7));
    }
}
