//! Shortest paths over weighted grid levels.
//!
//! A [`Level`] maps walkable cells to positive traversal costs and marks
//! walls. Searches run against an adjacency rule implementing
//! [`WeightedPather`]:
//!
//! - [`DirectAdjacency`] checks each compass offset against the level's
//!   spaces (the production rule, 8-way or 4-way).
//! - [`CharGrid`] rasterizes the level into a dense character grid and
//!   answers by bounds-checked array lookup.
//!
//! Entry points:
//!
//! - **Dijkstra** single-destination search ([`shortest_path`])
//! - **Dijkstra** all-destinations cost table ([`shortest_path_to_all`])
//!
//! Every call allocates its own frontier and tables; nothing is cached
//! between queries, so one level can serve any number of independent calls.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |

mod adjacency;
mod chargrid;
mod costtable;
mod dijkstra;
mod level;
mod neighbors;
mod traits;

pub use adjacency::DirectAdjacency;
pub use chargrid::{CharGrid, MAX_CELLS, VOID, WALL};
pub use costtable::CostTable;
pub use dijkstra::{GridPath, path_cost, shortest_path, shortest_path_to_all};
pub use level::{Level, LevelError};
pub use neighbors::{Connectivity, Neighbors};
pub use traits::{Pather, WeightedPather};
pub use wayfinder_core::Cell;
