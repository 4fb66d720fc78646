use wayfinder_core::Cell;

/// Minimal adjacency interface: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `c` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    ///
    /// Only called for cells `neighbors(from)` produced.
    fn cost(&self, from: Cell, to: Cell) -> u32;
}
