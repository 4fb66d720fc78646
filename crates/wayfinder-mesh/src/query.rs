use std::fmt;

use wayfinder_core::Point;

use crate::astar::astar_path;
use crate::bidirectional::bidirectional_path;
use crate::mesh::Mesh;
use crate::path::MeshPath;

/// Which search shape [`Mesh::find_path_with`] runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// A* from the source until the destination's box is settled.
    #[default]
    Unidirectional,
    /// Simultaneous frontiers from both ends, joined where they meet.
    Bidirectional,
}

/// Mesh query configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub strategy: Strategy,
}

/// Errors raised for malformed mesh queries.
///
/// A well-formed query whose endpoints are simply not connected is not an
/// error; it yields `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshError {
    /// The source point lies outside every box.
    SourceOutsideMesh(Point),
    /// The destination point lies outside every box.
    DestinationOutsideMesh(Point),
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceOutsideMesh(p) => write!(f, "mesh: source point {p} is not in any box"),
            Self::DestinationOutsideMesh(p) => {
                write!(f, "mesh: destination point {p} is not in any box")
            }
        }
    }
}

impl std::error::Error for MeshError {}

impl Mesh {
    /// Find a path from `source` to `destination` with the default
    /// (unidirectional) search.
    pub fn find_path(
        &self,
        source: Point,
        destination: Point,
    ) -> Result<Option<MeshPath>, MeshError> {
        self.find_path_with(source, destination, &SearchConfig::default())
    }

    /// Find a path from `source` to `destination`.
    ///
    /// Returns `Ok(None)` when no chain of adjacent boxes connects the two
    /// points, and an error when either point is outside the mesh.
    pub fn find_path_with(
        &self,
        source: Point,
        destination: Point,
        config: &SearchConfig,
    ) -> Result<Option<MeshPath>, MeshError> {
        let source_box = self
            .locate(source)
            .ok_or(MeshError::SourceOutsideMesh(source))?;
        let dest_box = self
            .locate(destination)
            .ok_or(MeshError::DestinationOutsideMesh(destination))?;

        if source_box == dest_box {
            return Ok(Some(MeshPath::from_parts(
                vec![source, destination],
                vec![source_box],
            )));
        }

        Ok(match config.strategy {
            Strategy::Unidirectional => astar_path(self, source_box, source, dest_box, destination),
            Strategy::Bidirectional => {
                bidirectional_path(self, source_box, source, dest_box, destination)
            }
        })
    }
}
