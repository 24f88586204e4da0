//! Stop conditions: generation cap, extinction and stability.

pub mod checker;

pub use checker::{is_extinct, is_stable, stable_match, Status, TerminationChecker};
