//! Append-only log of every generation.
//!
//! ## Growth
//!
//! The log is never truncated: cycle detection compares the newest
//! generation against every earlier one, so memory grows linearly with the
//! length of the run.
//!
//! ## Lookup
//!
//! Each generation's order-independent fingerprint is indexed. Finding an
//! earlier match only compares generations in the same fingerprint bucket,
//! instead of scanning the whole log.
//!
//! Both structures are persistent (`im`), so cloning a history snapshot for a
//! render collaborator is O(1).

use std::hash::BuildHasherDefault;

use im::{HashMap as ImHashMap, Vector};
use rustc_hash::FxHasher;
use smallvec::{smallvec, SmallVec};

use super::generation::Generation;

type FingerprintIndex = ImHashMap<u64, SmallVec<[usize; 2]>, BuildHasherDefault<FxHasher>>;

/// Ordered log of generations, indexed from 0.
///
/// Generation 0 is the loaded seed state.
#[derive(Clone, Debug, Default)]
pub struct GenerationHistory {
    generations: Vector<Generation>,
    /// Fingerprint → indices with that fingerprint, ascending.
    index: FingerprintIndex,
}

impl GenerationHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a generation and return its index.
    pub fn push(&mut self, generation: Generation) -> usize {
        let idx = self.generations.len();
        let fingerprint = generation.fingerprint();

        match self.index.get_mut(&fingerprint) {
            Some(bucket) => bucket.push(idx),
            None => {
                self.index.insert(fingerprint, smallvec![idx]);
            }
        }

        self.generations.push_back(generation);
        idx
    }

    /// Number of recorded generations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    /// Check if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// Get a generation by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Generation> {
        self.generations.get(index)
    }

    /// Get a generation that must have been recorded.
    ///
    /// # Panics
    ///
    /// Panics if `index` has no entry. The simulation always appends before
    /// it queries, so this only fires on a broken caller.
    #[must_use]
    pub fn generation(&self, index: usize) -> &Generation {
        match self.generations.get(index) {
            Some(generation) => generation,
            None => panic!(
                "no generation recorded at index {index} (history holds {})",
                self.generations.len()
            ),
        }
    }

    /// The most recent generation.
    #[must_use]
    pub fn latest(&self) -> Option<&Generation> {
        self.generations.back()
    }

    /// Iterate over generations from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Generation> + '_ {
        self.generations.iter()
    }

    /// Find the earliest generation before `index` that is set-equal to
    /// generation `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` has no entry.
    #[must_use]
    pub fn earlier_match(&self, index: usize) -> Option<usize> {
        let current = self.generation(index);
        let bucket = self.index.get(&current.fingerprint())?;

        bucket
            .iter()
            .copied()
            .take_while(|&i| i < index)
            .find(|&i| self.generations[i].set_eq(current))
    }
}
