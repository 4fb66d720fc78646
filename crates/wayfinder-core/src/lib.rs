//! **wayfinder-core**: geometry primitives for the wayfinder searches.
//!
//! - [`Cell`]: an integer grid coordinate, the node type of the grid engine.
//! - [`Point`]: a real-valued 2D position, the traversal unit of the mesh
//!   pathfinder.
//! - [`NavBox`]: an axis-aligned rectangle with inclusive bounds, the region
//!   type of a navigation mesh.

pub mod geom;

pub use geom::{Cell, NavBox, Point};
