//! Geometry primitives: [`Cell`], [`Point`] and [`NavBox`].

use std::fmt;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// An integer grid coordinate.
///
/// Cells order lexicographically by `(x, y)`, the same order a coordinate
/// tuple would have.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `self + offset`, or `None` if either coordinate overflows.
    #[inline]
    pub fn checked_add(self, offset: Cell) -> Option<Cell> {
        Some(Self {
            x: self.x.checked_add(offset.x)?,
            y: self.y.checked_add(offset.y)?,
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A real-valued 2D position. Not necessarily a box corner.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// NavBox
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle `[x_min, x_max] × [y_min, y_max]`.
///
/// Unlike a half-open range, both bounds are inclusive: two boxes whose edges
/// meet share that edge, and two boxes meeting at a corner share that corner.
/// A box is identified by its four bounds and serves as its own map key.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavBox {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl NavBox {
    /// Create a box from its bounds, canonicalized so that `min <= max` on
    /// each axis.
    #[inline]
    pub fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Self {
            x_min: x_min.min(x_max),
            x_max: x_min.max(x_max),
            y_min: y_min.min(y_max),
            y_max: y_min.max(y_max),
        }
    }

    /// Whether `p` lies inside the box or on its boundary.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= f64::from(self.x_min)
            && p.x <= f64::from(self.x_max)
            && p.y >= f64::from(self.y_min)
            && p.y <= f64::from(self.y_max)
    }

    /// The shared boundary of two boxes.
    ///
    /// For boxes that meet along an edge this is a segment, for boxes that
    /// meet at a corner a single point. Returns `None` when the boxes do not
    /// touch at all.
    #[inline]
    pub fn overlap(self, other: NavBox) -> Option<NavBox> {
        let r = Self {
            x_min: self.x_min.max(other.x_min),
            x_max: self.x_max.min(other.x_max),
            y_min: self.y_min.max(other.y_min),
            y_max: self.y_max.min(other.y_max),
        };
        if r.x_min > r.x_max || r.y_min > r.y_max {
            None
        } else {
            Some(r)
        }
    }

    /// Whether the two boxes share at least one point.
    #[inline]
    pub fn touches(self, other: NavBox) -> bool {
        self.overlap(other).is_some()
    }

    /// The point of the box nearest to `p` (`p` itself when it is inside).
    #[inline]
    pub fn clamp(self, p: Point) -> Point {
        // A deserialized box may be inverted, where f64::clamp would panic.
        Point::new(
            p.x.min(f64::from(self.x_max)).max(f64::from(self.x_min)),
            p.y.min(f64::from(self.y_max)).max(f64::from(self.y_min)),
        )
    }
}

impl fmt::Display for NavBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..{}, {}..{}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn navbox_json_shape() {
        let b = NavBox::new(0, 10, 2, 8);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"{"x_min":0,"x_max":10,"y_min":2,"y_max":8}"#);
        let back: NavBox = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }

    #[test]
    fn cell_json_shape() {
        let c: Cell = serde_json::from_str(r#"{"x":3,"y":-7}"#).unwrap();
        assert_eq!(c, Cell::new(3, -7));
    }
}
