//! Rule engine trait for cellular automaton rules.
//!
//! Rules implement `RuleEngine` to define how a cell's neighbor count maps
//! to its next state. The simulation calls into `RuleEngine` but never
//! interprets birth or survival directly.

pub mod engine;

pub use engine::{ConwayRules, RuleEngine};
