use std::collections::HashMap;

use wayfinder_core::Cell;

/// Minimum accumulated cost from a fixed source to every reached cell.
///
/// Built by [`shortest_path_to_all`](crate::shortest_path_to_all). Each entry
/// also remembers the cell it was reached from, so the cheapest path to any
/// entry can be recovered with [`path_to`](Self::path_to).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    source: Cell,
    costs: HashMap<Cell, u64>,
    prev: HashMap<Cell, Cell>,
}

impl CostTable {
    /// A table holding only `source` at cost 0.
    pub fn new(source: Cell) -> Self {
        let mut costs = HashMap::new();
        costs.insert(source, 0);
        Self {
            source,
            costs,
            prev: HashMap::new(),
        }
    }

    #[inline]
    pub fn source(&self) -> Cell {
        self.source
    }

    /// Recorded cost of `c`, `None` if it was never reached.
    #[inline]
    pub fn get(&self, c: Cell) -> Option<u64> {
        self.costs.get(&c).copied()
    }

    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.costs.contains_key(&c)
    }

    /// Number of reached cells, the source included.
    #[inline]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Iterate over `(cell, cost)` in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, u64)> + '_ {
        self.costs.iter().map(|(&c, &cost)| (c, cost))
    }

    /// All entries in row-major order (by `y`, then `x`), for tabular export.
    pub fn rows(&self) -> Vec<(Cell, u64)> {
        let mut rows: Vec<_> = self.iter().collect();
        rows.sort_by_key(|&(c, _)| (c.y, c.x));
        rows
    }

    /// Cheapest path from the source to `c`, both ends included.
    pub fn path_to(&self, c: Cell) -> Option<Vec<Cell>> {
        if !self.contains(c) {
            return None;
        }
        let mut path = vec![c];
        let mut cur = c;
        while let Some(&p) = self.prev.get(&cur) {
            path.push(p);
            cur = p;
        }
        path.reverse();
        Some(path)
    }

    /// Record `cost` for `c`, reached from `via`, if it beats the current
    /// entry. Returns whether the table changed.
    ///
    /// An entry's value only ever goes down.
    pub(crate) fn relax(&mut self, c: Cell, cost: u64, via: Cell) -> bool {
        match self.costs.get(&c) {
            Some(&best) if cost >= best => false,
            _ => {
                self.costs.insert(c, cost);
                self.prev.insert(c, via);
                true
            }
        }
    }

}

#[cfg(feature = "serde")]
impl serde::Serialize for CostTable {
    /// Serialized as `{ "source": .., "rows": [{ "x", "y", "cost" }, ..] }`
    /// in [`rows`](Self::rows) order.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct Row {
            x: i32,
            y: i32,
            cost: u64,
        }
        #[derive(serde::Serialize)]
        struct Table {
            source: Cell,
            rows: Vec<Row>,
        }
        let table = Table {
            source: self.source,
            rows: self
                .rows()
                .into_iter()
                .map(|(c, cost)| Row {
                    x: c.x,
                    y: c.y,
                    cost,
                })
                .collect(),
        };
        serde::Serialize::serialize(&table, serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_holds_source() {
        let t = CostTable::new(Cell::new(2, 3));
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(Cell::new(2, 3)), Some(0));
        assert_eq!(t.path_to(Cell::new(2, 3)), Some(vec![Cell::new(2, 3)]));
        assert_eq!(t.path_to(Cell::new(0, 0)), None);
    }

    #[test]
    fn relax_only_decreases() {
        let src = Cell::new(0, 0);
        let c = Cell::new(1, 0);
        let mut t = CostTable::new(src);
        assert!(t.relax(c, 10, src));
        assert!(!t.relax(c, 12, src));
        assert!(!t.relax(c, 10, src));
        assert_eq!(t.get(c), Some(10));
        assert!(t.relax(c, 4, Cell::new(0, 1)));
        assert_eq!(t.get(c), Some(4));
        // The source itself can never be improved on.
        assert!(!t.relax(src, 0, c));
    }

    #[test]
    fn path_follows_latest_predecessor() {
        let a = Cell::new(0, 0);
        let b = Cell::new(1, 0);
        let c = Cell::new(2, 0);
        let d = Cell::new(1, 1);
        let mut t = CostTable::new(a);
        t.relax(b, 1, a);
        t.relax(d, 5, a);
        t.relax(c, 9, d);
        t.relax(c, 2, b);
        assert_eq!(t.path_to(c), Some(vec![a, b, c]));
    }

    #[test]
    fn rows_are_row_major() {
        let src = Cell::new(1, 1);
        let mut t = CostTable::new(src);
        t.relax(Cell::new(0, 2), 3, src);
        t.relax(Cell::new(2, 0), 1, src);
        t.relax(Cell::new(0, 1), 2, src);
        let order: Vec<_> = t.rows().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![
                Cell::new(2, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(0, 2),
            ]
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn table_serializes_as_rows() {
        let src = Cell::new(0, 0);
        let mut t = CostTable::new(src);
        t.relax(Cell::new(1, 0), 7, src);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["source"], serde_json::json!({"x": 0, "y": 0}));
        assert_eq!(
            json["rows"],
            serde_json::json!([
                {"x": 0, "y": 0, "cost": 0},
                {"x": 1, "y": 0, "cost": 7},
            ])
        );
    }
}
