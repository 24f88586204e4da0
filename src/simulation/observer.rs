//! Observer seam for render collaborators.
//!
//! The simulation hands each generation to an `Observer` right after the grid
//! has been synced. Observers never touch simulation state.

use crate::core::{Grid, Result};
use crate::history::Generation;

use super::runner::Outcome;

/// One rendered step.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// Generation index (0 = loaded seed).
    pub index: usize,
    /// Live cells of this generation.
    pub generation: &'a Generation,
    /// Grid after syncing to this generation.
    pub grid: &'a Grid,
    /// Configured generation cap.
    pub max_generations: Option<usize>,
}

/// Receives the simulation's output.
pub trait Observer {
    /// Called once before generation 0 is delivered.
    fn on_start(&mut self, _grid: &Grid) -> Result<()> {
        Ok(())
    }

    /// Called for every generation, including generation 0.
    fn on_generation(&mut self, frame: &Frame<'_>) -> Result<()>;

    /// Called once after the loop stops.
    fn on_finish(&mut self, _outcome: &Outcome) -> Result<()> {
        Ok(())
    }
}

/// Discards everything.
impl Observer for () {
    fn on_generation(&mut self, _frame: &Frame<'_>) -> Result<()> {
        Ok(())
    }
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn on_start(&mut self, grid: &Grid) -> Result<()> {
        (**self).on_start(grid)
    }

    fn on_generation(&mut self, frame: &Frame<'_>) -> Result<()> {
        (**self).on_generation(frame)
    }

    fn on_finish(&mut self, outcome: &Outcome) -> Result<()> {
        (**self).on_finish(outcome)
    }
}

impl<O: Observer> Observer for Option<O> {
    fn on_start(&mut self, grid: &Grid) -> Result<()> {
        match self {
            Some(observer) => observer.on_start(grid),
            None => Ok(()),
        }
    }

    fn on_generation(&mut self, frame: &Frame<'_>) -> Result<()> {
        match self {
            Some(observer) => observer.on_generation(frame),
            None => Ok(()),
        }
    }

    fn on_finish(&mut self, outcome: &Outcome) -> Result<()> {
        match self {
            Some(observer) => observer.on_finish(outcome),
            None => Ok(()),
        }
    }
}

/// Both observers, first then second.
impl<A: Observer, B: Observer> Observer for (A, B) {
    fn on_start(&mut self, grid: &Grid) -> Result<()> {
        self.0.on_start(grid)?;
        self.1.on_start(grid)
    }

    fn on_generation(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.0.on_generation(frame)?;
        self.1.on_generation(frame)
    }

    fn on_finish(&mut self, outcome: &Outcome) -> Result<()> {
        self.0.on_finish(outcome)?;
        self.1.on_finish(outcome)
    }
}

/// Keeps every delivered generation, mostly for tests and tooling.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    /// `(index, live cells)` in delivery order.
    pub frames: Vec<(usize, Generation)>,
    /// Final outcome, once delivered.
    pub outcome: Option<Outcome>,
}

impl Observer for Recorder {
    fn on_generation(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.frames.push((frame.index, frame.generation.clone()));
        Ok(())
    }

    fn on_finish(&mut self, outcome: &Outcome) -> Result<()> {
        self.outcome = Some(*outcome);
        Ok(())
    }
}
