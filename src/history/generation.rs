//! A single generation: the live cells of one simulation step.

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashSet, FxHasher};
use serde::{Deserialize, Serialize};

use crate::core::Coordinate;

/// Live-cell coordinates of one step, in row-major scan order.
///
/// `PartialEq` compares sequences. Cycle detection uses [`Generation::set_eq`],
/// which ignores order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    cells: Vec<Coordinate>,
}

impl Generation {
    /// Create an empty generation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generation from coordinates, keeping their order.
    #[must_use]
    pub fn from_cells(cells: Vec<Coordinate>) -> Self {
        Self { cells }
    }

    /// Append a live cell.
    pub fn push(&mut self, cell: Coordinate) {
        self.cells.push(cell);
    }

    /// Number of live cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cell is alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the live cells in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.cells.iter()
    }

    /// Live cells as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Linear membership test.
    #[must_use]
    pub fn contains(&self, cell: &Coordinate) -> bool {
        self.cells.contains(cell)
    }

    /// Set equality: same cardinality and same coordinates, any order.
    ///
    /// ```
    /// use glife::core::Coordinate;
    /// use glife::history::Generation;
    ///
    /// let a: Generation = [(1, 1), (2, 2)].into_iter().map(Coordinate::from).collect();
    /// let b: Generation = [(2, 2), (1, 1)].into_iter().map(Coordinate::from).collect();
    /// assert!(a.set_eq(&b));
    /// assert_ne!(a, b);
    /// ```
    #[must_use]
    pub fn set_eq(&self, other: &Generation) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mine: FxHashSet<&Coordinate> = self.cells.iter().collect();
        other.cells.iter().all(|c| mine.contains(c))
    }

    /// Order-independent fingerprint.
    ///
    /// Set-equal generations always share a fingerprint. Different
    /// generations may collide, so a match must be confirmed with
    /// [`Generation::set_eq`].
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let sum = self.cells.iter().fold(0u64, |acc, cell| {
            let mut hasher = FxHasher::default();
            cell.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        });

        let mut hasher = FxHasher::default();
        self.cells.len().hash(&mut hasher);
        sum.hash(&mut hasher);
        hasher.finish()
    }
}

impl FromIterator<Coordinate> for Generation {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Generation {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for cell in &self.cells {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{cell}")?;
            first = false;
        }
        Ok(())
    }
}
