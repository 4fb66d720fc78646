//! Point-to-point pathfinding across rectangular navigation meshes.
//!
//! A [`Mesh`] is a set of axis-aligned boxes ([`NavBox`]) and an adjacency
//! map between them. A query walks a point from the source through the
//! chain of shared box boundaries to the destination:
//!
//! 1. [`Mesh::locate`] finds the box holding each endpoint.
//! 2. Moving into a neighboring box, the current point is clamped onto the
//!    boundary the two boxes share ([`project`]).
//! 3. A frontier search over boxes, costed by Euclidean distance between
//!    successive points and guided by straight-line distance to the goal,
//!    picks the chain.
//!
//! [`Strategy::Unidirectional`] (the default) runs A* from the source;
//! [`Strategy::Bidirectional`] grows a second frontier from the destination
//! and joins the two where they meet. Either way the result is a
//! [`MeshPath`]: the traversal points and the boxes crossed.
//!
//! The per-edge projection is greedy, so a path is valid and usually short
//! but not guaranteed to be the geometric shortest path through the boxes.

mod astar;
mod bidirectional;
mod frontier;
mod mesh;
mod path;
mod project;
mod query;

pub use mesh::Mesh;
pub use path::MeshPath;
pub use project::project;
pub use query::{MeshError, SearchConfig, Strategy};
pub use wayfinder_core::{NavBox, Point};
