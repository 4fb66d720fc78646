//! Dense character-grid adjacency.
//!
//! [`CharGrid`] lays a [`Level`] out as a rectangle of characters (walls as
//! [`WALL`], waypoints as their label, spaces as their cost digit, gaps as
//! [`VOID`]) and answers adjacency queries by array lookup. Every offset is
//! bounds-checked the same way, so cells on the first or last row or column
//! see exactly the neighbors that exist.

use std::fmt;

use wayfinder_core::Cell;

use crate::level::{Level, LevelError};
use crate::neighbors::{Connectivity, Neighbors};
use crate::traits::{Pather, WeightedPather};

/// Character used for walls.
pub const WALL: char = 'X';
/// Character used for cells that are neither space nor wall.
pub const VOID: char = ' ';

/// Largest grid, in cells, that [`CharGrid::from_level`] will allocate.
pub const MAX_CELLS: i64 = 1 << 24;

/// A level rasterized into a dense grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    origin: Cell,
    width: i32,
    height: i32,
    chars: Vec<char>,
    costs: Vec<Option<u32>>,
    connectivity: Connectivity,
}

impl CharGrid {
    /// Rasterize `level` over the rectangle covering its spaces and walls.
    ///
    /// Fails with [`LevelError::CostNotDigit`] if a space costs more than 9,
    /// and with [`LevelError::TooLarge`] if the rectangle holds more than
    /// [`MAX_CELLS`] cells.
    pub fn from_level(level: &Level, connectivity: Connectivity) -> Result<Self, LevelError> {
        let Some((lo, hi)) = level.bounds() else {
            return Ok(Self {
                origin: Cell::ZERO,
                width: 0,
                height: 0,
                chars: Vec::new(),
                costs: Vec::new(),
                connectivity,
            });
        };
        // Spans of up to 2^32 cells: only i64 holds them.
        let span_x = i64::from(hi.x) - i64::from(lo.x) + 1;
        let span_y = i64::from(hi.y) - i64::from(lo.y) + 1;
        let too_large = LevelError::TooLarge {
            width: span_x as u64,
            height: span_y as u64,
        };
        let len = match span_x.checked_mul(span_y) {
            Some(n) if n <= MAX_CELLS => n as usize,
            _ => return Err(too_large),
        };
        let (Ok(width), Ok(height)) = (i32::try_from(span_x), i32::try_from(span_y)) else {
            return Err(too_large);
        };
        let mut grid = Self {
            origin: lo,
            width,
            height,
            chars: vec![VOID; len],
            costs: vec![None; len],
            connectivity,
        };

        for c in level.walls() {
            if let Some(i) = grid.idx(c) {
                grid.chars[i] = WALL;
            }
        }
        for (c, cost) in level.spaces() {
            let Some(i) = grid.idx(c) else {
                continue;
            };
            grid.costs[i] = Some(cost);
            grid.chars[i] = char::from_digit(cost, 10)
                .ok_or(LevelError::CostNotDigit { cell: c, cost })?;
        }
        for (label, c) in level.waypoints() {
            if let Some(i) = grid.idx(c) {
                grid.chars[i] = label;
            }
        }
        Ok(grid)
    }

    /// Top-left cell of the grid in level coordinates.
    #[inline]
    pub fn origin(&self) -> Cell {
        self.origin
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The character drawn at `c`, `None` outside the grid.
    #[inline]
    pub fn char_at(&self, c: Cell) -> Option<char> {
        self.idx(c).map(|i| self.chars[i])
    }

    /// The traversal cost at `c`, `None` for walls, gaps and outside cells.
    #[inline]
    pub fn cost_at(&self, c: Cell) -> Option<u32> {
        self.idx(c).and_then(|i| self.costs[i])
    }

    /// Convert a level cell to a flat index. Returns `None` if out of bounds.
    #[inline]
    fn idx(&self, c: Cell) -> Option<usize> {
        let x = i64::from(c.x) - i64::from(self.origin.x);
        let y = i64::from(c.y) - i64::from(self.origin.y);
        if x < 0 || x >= i64::from(self.width) || y < 0 || y >= i64::from(self.height) {
            return None;
        }
        Some((y * i64::from(self.width) + x) as usize)
    }
}

impl Pather for CharGrid {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        Neighbors::collect(c, self.connectivity, |n| self.cost_at(n).is_some(), buf);
    }
}

impl WeightedPather for CharGrid {
    fn cost(&self, _from: Cell, to: Cell) -> u32 {
        let cost = self.cost_at(to);
        debug_assert!(cost.is_some(), "edge cost asked for {to}, which is not a space");
        cost.unwrap_or(u32::MAX)
    }
}

impl fmt::Display for CharGrid {
    /// One line per grid row, top to bottom.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.chars.chunks(self.width.max(1) as usize).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::DirectAdjacency;

    fn level() -> Level {
        Level::from_parts(
            [
                (Cell::new(1, 1), 1),
                (Cell::new(2, 1), 2),
                (Cell::new(1, 2), 3),
                (Cell::new(3, 2), 9),
            ],
            [Cell::new(2, 2), Cell::new(3, 1)],
            [('a', Cell::new(1, 1))],
        )
        .unwrap()
    }

    #[test]
    fn rasterize_and_display() {
        let grid = CharGrid::from_level(&level(), Connectivity::Eight).unwrap();
        assert_eq!(grid.origin(), Cell::new(1, 1));
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.to_string(), "a2X\n3X9");
        assert_eq!(grid.char_at(Cell::new(1, 1)), Some('a'));
        assert_eq!(grid.char_at(Cell::new(0, 0)), None);
        assert_eq!(grid.cost_at(Cell::new(1, 1)), Some(1));
        assert_eq!(grid.cost_at(Cell::new(2, 2)), None);
    }

    #[test]
    fn edge_cells_see_every_existing_neighbor() {
        // A cell on the bottom row but in the middle column, where the
        // per-edge offset sets of a special-cased scan would lose a side.
        let mut level = Level::new();
        for y in 0..3 {
            for x in 0..3 {
                level.insert_space(Cell::new(x, y), 1).unwrap();
            }
        }
        let grid = CharGrid::from_level(&level, Connectivity::Eight).unwrap();
        let mut buf = Vec::new();
        grid.neighbors(Cell::new(1, 2), &mut buf);
        buf.sort();
        assert_eq!(
            buf,
            vec![
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 1),
                Cell::new(2, 1),
                Cell::new(2, 2),
            ]
        );
        buf.clear();
        grid.neighbors(Cell::new(0, 0), &mut buf);
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn agrees_with_direct_lookup() {
        let level = level();
        let grid = CharGrid::from_level(&level, Connectivity::Eight).unwrap();
        let direct = DirectAdjacency::eight(&level);
        for (c, _) in level.spaces() {
            let mut a = Vec::new();
            let mut b = Vec::new();
            grid.neighbors(c, &mut a);
            direct.neighbors(c, &mut b);
            a.sort();
            b.sort();
            assert_eq!(a, b, "neighbors of {c}");
            for &n in &a {
                assert_eq!(grid.cost(c, n), direct.cost(c, n));
            }
        }
    }

    #[test]
    fn wide_cost_rejected() {
        let level = Level::from_parts([(Cell::new(0, 0), 12)], [], []).unwrap();
        assert_eq!(
            CharGrid::from_level(&level, Connectivity::Eight),
            Err(LevelError::CostNotDigit {
                cell: Cell::new(0, 0),
                cost: 12
            })
        );
    }

    #[test]
    fn sparse_levels_are_rejected_not_allocated() {
        let far = Level::from_parts(
            [(Cell::new(i32::MIN, 0), 1), (Cell::new(i32::MAX, 0), 1)],
            [],
            [],
        )
        .unwrap();
        assert_eq!(
            CharGrid::from_level(&far, Connectivity::Eight),
            Err(LevelError::TooLarge {
                width: 1 << 32,
                height: 1
            })
        );

        let wide = Level::from_parts(
            [(Cell::new(0, 0), 1), (Cell::new(100_000, 100_000), 1)],
            [],
            [],
        )
        .unwrap();
        let err = CharGrid::from_level(&wide, Connectivity::Eight).unwrap_err();
        assert_eq!(
            err,
            LevelError::TooLarge {
                width: 100_001,
                height: 100_001
            }
        );
        assert!(err.to_string().contains("100001"));
    }

    #[test]
    fn grid_at_the_coordinate_limit() {
        let level = Level::from_parts(
            [
                (Cell::new(i32::MAX, i32::MAX), 3),
                (Cell::new(i32::MAX - 1, i32::MAX), 1),
            ],
            [],
            [],
        )
        .unwrap();
        let grid = CharGrid::from_level(&level, Connectivity::Eight).unwrap();
        assert_eq!(grid.to_string(), "13");
        let mut buf = Vec::new();
        grid.neighbors(Cell::new(i32::MAX, i32::MAX), &mut buf);
        assert_eq!(buf, vec![Cell::new(i32::MAX - 1, i32::MAX)]);
        assert_eq!(grid.cost_at(Cell::new(i32::MIN, i32::MIN)), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not a space")]
    fn cost_onto_a_gap_is_flagged() {
        let grid = CharGrid::from_level(&level(), Connectivity::Eight).unwrap();
        grid.cost(Cell::new(1, 1), Cell::new(2, 2));
    }

    #[test]
    fn empty_level() {
        let grid = CharGrid::from_level(&Level::new(), Connectivity::Four).unwrap();
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.to_string(), "");
        let mut buf = Vec::new();
        grid.neighbors(Cell::ZERO, &mut buf);
        assert!(buf.is_empty());
    }
}
