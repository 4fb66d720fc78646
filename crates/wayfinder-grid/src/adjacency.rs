//! Direct-lookup adjacency over a [`Level`].

use wayfinder_core::Cell;

use crate::level::Level;
use crate::neighbors::{Connectivity, Neighbors};
use crate::traits::{Pather, WeightedPather};

/// Adjacency that checks each offset straight against the level's spaces.
///
/// A neighbor exists iff it is a space, so walls and cells outside the level
/// are never produced. Moving onto a cell costs that cell's space cost.
#[derive(Debug, Clone, Copy)]
pub struct DirectAdjacency<'a> {
    level: &'a Level,
    connectivity: Connectivity,
}

impl<'a> DirectAdjacency<'a> {
    pub fn new(level: &'a Level, connectivity: Connectivity) -> Self {
        Self {
            level,
            connectivity,
        }
    }

    /// Eight-way adjacency, the production rule.
    pub fn eight(level: &'a Level) -> Self {
        Self::new(level, Connectivity::Eight)
    }

    /// Four-way (cardinal) adjacency.
    pub fn four(level: &'a Level) -> Self {
        Self::new(level, Connectivity::Four)
    }
}

impl Pather for DirectAdjacency<'_> {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        Neighbors::collect(c, self.connectivity, |n| self.level.is_space(n), buf);
    }
}

impl WeightedPather for DirectAdjacency<'_> {
    fn cost(&self, _from: Cell, to: Cell) -> u32 {
        let cost = self.level.cost(to);
        debug_assert!(cost.is_some(), "edge cost asked for {to}, which is not a space");
        // Saturate in release builds for a `to` that neighbors() would not
        // have produced.
        cost.unwrap_or(u32::MAX)
    }
}
