use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use wayfinder_core::Cell;

use crate::costtable::CostTable;
use crate::traits::WeightedPather;

/// A path between two cells together with its total edge cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPath {
    /// Every cell from source to destination, both included.
    pub cells: Vec<Cell>,
    /// Sum of the edge costs along `cells`.
    pub cost: u64,
}

impl GridPath {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Frontier entries
// ---------------------------------------------------------------------------

/// A frontier entry carrying the full path that reached `cell`.
#[derive(Eq, PartialEq)]
struct PathEntry {
    cost: u64,
    cell: Cell,
    path: Vec<Cell>,
}

impl Ord for PathEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest
        // (cost, cell, path) first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.cell.cmp(&self.cell))
            .then_with(|| other.path.cmp(&self.path))
    }
}

impl PartialOrd for PathEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A frontier entry for searches that only need costs.
#[derive(Clone, Copy, Eq, PartialEq)]
struct CostEntry {
    cost: u64,
    cell: Cell,
}

impl Ord for CostEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

impl PartialOrd for CostEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Searches
// ---------------------------------------------------------------------------

/// Compute the minimum-cost path from `source` to `destination`.
///
/// Returns the full path (including both endpoints) or `None` if the
/// destination cannot be reached. Ties between equally cheap frontier
/// entries are broken by cell, then by path, so repeated calls return the
/// same path.
pub fn shortest_path<P: WeightedPather>(
    pather: &P,
    source: Cell,
    destination: Cell,
) -> Option<GridPath> {
    let mut finalized: HashSet<Cell> = HashSet::new();
    let mut open: BinaryHeap<PathEntry> = BinaryHeap::new();
    open.push(PathEntry {
        cost: 0,
        cell: source,
        path: vec![source],
    });

    let mut nbuf = Vec::with_capacity(8);

    while let Some(PathEntry { cost, cell, path }) = open.pop() {
        if cell == destination {
            log::debug!(
                "shortest_path {source} -> {destination}: cost {cost}, {} steps, {} cells finalized",
                path.len() - 1,
                finalized.len()
            );
            return Some(GridPath { cells: path, cost });
        }

        // A cheaper entry for this cell was already expanded.
        if !finalized.insert(cell) {
            continue;
        }
        log::trace!("expand {cell} at cost {cost}");

        nbuf.clear();
        pather.neighbors(cell, &mut nbuf);

        for &n in nbuf.iter() {
            if finalized.contains(&n) {
                continue;
            }
            let mut next = Vec::with_capacity(path.len() + 1);
            next.extend_from_slice(&path);
            next.push(n);
            open.push(PathEntry {
                cost: cost + u64::from(pather.cost(cell, n)),
                cell: n,
                path: next,
            });
        }
    }

    log::debug!(
        "shortest_path {source} -> {destination}: no path, {} cells finalized",
        finalized.len()
    );
    None
}

/// Compute the minimum cost from `source` to every reachable cell.
///
/// Cells that cannot be reached are absent from the returned table.
pub fn shortest_path_to_all<P: WeightedPather>(pather: &P, source: Cell) -> CostTable {
    to_all_observed(pather, source, |_| {})
}

/// [`shortest_path_to_all`], calling `observe` after every table update.
fn to_all_observed<P: WeightedPather>(
    pather: &P,
    source: Cell,
    mut observe: impl FnMut(&CostTable),
) -> CostTable {
    let mut table = CostTable::new(source);
    let mut open: BinaryHeap<CostEntry> = BinaryHeap::new();
    open.push(CostEntry {
        cost: 0,
        cell: source,
    });

    let mut nbuf = Vec::with_capacity(8);

    while let Some(CostEntry { cost, cell }) = open.pop() {
        // Skip stale entries.
        if table.get(cell).is_some_and(|best| cost > best) {
            continue;
        }

        nbuf.clear();
        pather.neighbors(cell, &mut nbuf);

        for &n in nbuf.iter() {
            let tentative = cost + u64::from(pather.cost(cell, n));
            if table.relax(n, tentative, cell) {
                observe(&table);
                open.push(CostEntry {
                    cost: tentative,
                    cell: n,
                });
            }
        }
    }

    log::debug!("shortest_path_to_all {source}: {} cells reached", table.len());
    table
}

/// Total edge cost along `cells`.
///
/// Returns `None` for an empty sequence or if two consecutive cells are not
/// adjacent under `pather`.
pub fn path_cost<P: WeightedPather>(pather: &P, cells: &[Cell]) -> Option<u64> {
    if cells.is_empty() {
        return None;
    }
    let mut nbuf = Vec::with_capacity(8);
    let mut total = 0u64;
    for w in cells.windows(2) {
        nbuf.clear();
        pather.neighbors(w[0], &mut nbuf);
        if !nbuf.contains(&w[1]) {
            return None;
        }
        total += u64::from(pather.cost(w[0], w[1]));
    }
    Some(total)
}
