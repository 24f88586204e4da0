//! Generations and the per-run history log.
//!
//! - `Generation`: live cells of one step, compared as a set for cycles
//! - `GenerationHistory`: append-only log with a fingerprint index

pub mod generation;
pub mod log;

pub use generation::Generation;
pub use log::GenerationHistory;
