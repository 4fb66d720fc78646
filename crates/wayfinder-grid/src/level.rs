//! Grid levels: weighted spaces, walls and labelled waypoints.
//!
//! A [`Level`] is built once (by hand or by an outer loader) and read by
//! every search. Its invariants are checked on every insertion, and again
//! when a level is deserialized.

use std::collections::{HashMap, HashSet};
use std::fmt;

use wayfinder_core::Cell;

/// A grid level.
///
/// - `spaces`: walkable cells with a positive traversal cost.
/// - `walls`: impassable cells, never also spaces.
/// - `waypoints`: single-character labels naming space cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LevelData", into = "LevelData")
)]
pub struct Level {
    spaces: HashMap<Cell, u32>,
    walls: HashSet<Cell>,
    waypoints: HashMap<char, Cell>,
}

impl Level {
    /// Create an empty level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a level from its three parts, validating every invariant.
    pub fn from_parts(
        spaces: impl IntoIterator<Item = (Cell, u32)>,
        walls: impl IntoIterator<Item = Cell>,
        waypoints: impl IntoIterator<Item = (char, Cell)>,
    ) -> Result<Self, LevelError> {
        let mut level = Self::new();
        for c in walls {
            level.insert_wall(c)?;
        }
        for (c, cost) in spaces {
            level.insert_space(c, cost)?;
        }
        for (label, c) in waypoints {
            level.set_waypoint(label, c)?;
        }
        Ok(level)
    }

    /// Mark `cell` walkable with the given traversal cost.
    ///
    /// Re-inserting an existing space overwrites its cost.
    pub fn insert_space(&mut self, cell: Cell, cost: u32) -> Result<(), LevelError> {
        if cost == 0 {
            return Err(LevelError::NonPositiveCost(cell));
        }
        if self.walls.contains(&cell) {
            return Err(LevelError::WallSpace(cell));
        }
        self.spaces.insert(cell, cost);
        Ok(())
    }

    /// Mark `cell` impassable.
    pub fn insert_wall(&mut self, cell: Cell) -> Result<(), LevelError> {
        if self.spaces.contains_key(&cell) {
            return Err(LevelError::WallSpace(cell));
        }
        self.walls.insert(cell);
        Ok(())
    }

    /// Attach `label` to an existing space cell.
    pub fn set_waypoint(&mut self, label: char, cell: Cell) -> Result<(), LevelError> {
        if !self.spaces.contains_key(&cell) {
            return Err(LevelError::DanglingWaypoint { label, cell });
        }
        self.waypoints.insert(label, cell);
        Ok(())
    }

    /// Traversal cost of a space cell, `None` for walls and unknown cells.
    #[inline]
    pub fn cost(&self, cell: Cell) -> Option<u32> {
        self.spaces.get(&cell).copied()
    }

    #[inline]
    pub fn is_space(&self, cell: Cell) -> bool {
        self.spaces.contains_key(&cell)
    }

    /// The cell named by a waypoint label.
    #[inline]
    pub fn waypoint(&self, label: char) -> Option<Cell> {
        self.waypoints.get(&label).copied()
    }

    /// Iterate over `(cell, cost)` for every space, in no particular order.
    pub fn spaces(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.spaces.iter().map(|(&c, &cost)| (c, cost))
    }

    /// Iterate over every wall cell, in no particular order.
    pub fn walls(&self) -> impl Iterator<Item = Cell> + '_ {
        self.walls.iter().copied()
    }

    /// Iterate over `(label, cell)` for every waypoint, in no particular order.
    pub fn waypoints(&self) -> impl Iterator<Item = (char, Cell)> + '_ {
        self.waypoints.iter().map(|(&l, &c)| (l, c))
    }

    /// Number of space cells.
    pub fn space_count(&self) -> usize {
        self.spaces.len()
    }

    /// Inclusive `(min, max)` corners of the rectangle covering every space
    /// and wall, or `None` for an empty level.
    pub fn bounds(&self) -> Option<(Cell, Cell)> {
        let mut cells = self.spaces.keys().chain(self.walls.iter());
        let first = *cells.next()?;
        Some(cells.fold((first, first), |(lo, hi), c| {
            (
                Cell::new(lo.x.min(c.x), lo.y.min(c.y)),
                Cell::new(hi.x.max(c.x), hi.y.max(c.y)),
            )
        }))
    }
}

/// Errors raised when a level violates one of its invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// A space was given a zero cost.
    NonPositiveCost(Cell),
    /// A cell was marked both space and wall.
    WallSpace(Cell),
    /// A waypoint names a cell that is not a space.
    DanglingWaypoint { label: char, cell: Cell },
    /// A cost too large to be drawn as a single digit in a [`CharGrid`](crate::CharGrid).
    CostNotDigit { cell: Cell, cost: u32 },
    /// The level spans too many cells for a dense [`CharGrid`](crate::CharGrid).
    TooLarge { width: u64, height: u64 },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveCost(c) => write!(f, "level: space {c} has a zero cost"),
            Self::WallSpace(c) => write!(f, "level: cell {c} is both a space and a wall"),
            Self::DanglingWaypoint { label, cell } => {
                write!(f, "level: waypoint '{label}' at {cell} is not a space")
            }
            Self::CostNotDigit { cell, cost } => {
                write!(f, "level: cost {cost} at {cell} does not fit in one digit")
            }
            Self::TooLarge { width, height } => {
                write!(f, "level: a {width}x{height} grid is too large to rasterize")
            }
        }
    }
}

impl std::error::Error for LevelError {}

// ---------------------------------------------------------------------------
// Serialized form
// ---------------------------------------------------------------------------

/// List-based mirror of [`Level`]: JSON objects cannot be keyed by cells.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct LevelData {
    spaces: Vec<(Cell, u32)>,
    #[serde(default)]
    walls: Vec<Cell>,
    #[serde(default)]
    waypoints: Vec<(char, Cell)>,
}

#[cfg(feature = "serde")]
impl TryFrom<LevelData> for Level {
    type Error = LevelError;

    fn try_from(data: LevelData) -> Result<Self, LevelError> {
        Level::from_parts(data.spaces, data.walls, data.waypoints)
    }
}

#[cfg(feature = "serde")]
impl From<Level> for LevelData {
    fn from(level: Level) -> Self {
        let mut spaces: Vec<_> = level.spaces.into_iter().collect();
        spaces.sort();
        let mut walls: Vec<_> = level.walls.into_iter().collect();
        walls.sort();
        let mut waypoints: Vec<_> = level.waypoints.into_iter().collect();
        waypoints.sort();
        Self {
            spaces,
            walls,
            waypoints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Level {
        Level::from_parts(
            [
                (Cell::new(0, 0), 1),
                (Cell::new(1, 0), 2),
                (Cell::new(2, 0), 3),
            ],
            [Cell::new(0, 1), Cell::new(3, 2)],
            [('a', Cell::new(0, 0)), ('b', Cell::new(2, 0))],
        )
        .unwrap()
    }

    #[test]
    fn from_parts_and_lookups() {
        let level = small();
        assert_eq!(level.space_count(), 3);
        assert_eq!(level.cost(Cell::new(1, 0)), Some(2));
        assert_eq!(level.cost(Cell::new(0, 1)), None);
        assert!(level.walls().any(|c| c == Cell::new(0, 1)));
        assert!(!level.is_space(Cell::new(0, 1)));
        assert_eq!(level.waypoint('b'), Some(Cell::new(2, 0)));
        assert_eq!(level.waypoint('z'), None);
    }

    #[test]
    fn bounds_cover_spaces_and_walls() {
        assert_eq!(small().bounds(), Some((Cell::new(0, 0), Cell::new(3, 2))));
        assert_eq!(Level::new().bounds(), None);
    }

    #[test]
    fn zero_cost_rejected() {
        let mut level = Level::new();
        assert_eq!(
            level.insert_space(Cell::new(4, 4), 0),
            Err(LevelError::NonPositiveCost(Cell::new(4, 4)))
        );
        assert_eq!(level.space_count(), 0);
    }

    #[test]
    fn space_and_wall_are_exclusive() {
        let mut level = small();
        assert_eq!(
            level.insert_space(Cell::new(0, 1), 1),
            Err(LevelError::WallSpace(Cell::new(0, 1)))
        );
        assert_eq!(
            level.insert_wall(Cell::new(1, 0)),
            Err(LevelError::WallSpace(Cell::new(1, 0)))
        );
        assert_eq!(level.cost(Cell::new(1, 0)), Some(2));
    }

    #[test]
    fn waypoint_must_be_a_space() {
        let mut level = small();
        let err = level.set_waypoint('w', Cell::new(0, 1)).unwrap_err();
        assert_eq!(
            err,
            LevelError::DanglingWaypoint {
                label: 'w',
                cell: Cell::new(0, 1)
            }
        );
        assert!(err.to_string().contains("not a space"));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn level_round_trip() {
        let level = Level::from_parts(
            [(Cell::new(0, 0), 1), (Cell::new(1, 0), 5)],
            [Cell::new(2, 0)],
            [('a', Cell::new(0, 0))],
        )
        .unwrap();
        let json = serde_json::to_string(&level).unwrap();
        let back: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(back, level);
    }

    #[test]
    fn invalid_level_rejected_on_load() {
        let json = r#"{
            "spaces": [[{"x":0,"y":0}, 1]],
            "waypoints": [["a", {"x":9,"y":9}]]
        }"#;
        let err = serde_json::from_str::<Level>(json).unwrap_err();
        assert!(err.to_string().contains("waypoint"));
    }
}
