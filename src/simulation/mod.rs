//! Simulation loop and the observer seam.
//!
//! - `Simulation`: owns grid, history and generation counter
//! - `Observer`: receives each generation for rendering

pub mod observer;
pub mod runner;

pub use observer::{Frame, Observer, Recorder};
pub use runner::{Outcome, Phase, Simulation};
