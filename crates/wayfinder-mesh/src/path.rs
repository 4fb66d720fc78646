use wayfinder_core::{NavBox, Point};

/// A point-to-point route through a mesh.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshPath {
    /// Traversal points from source to destination, both included. Each
    /// consecutive pair lies inside a common box.
    pub points: Vec<Point>,
    /// The boxes crossed, in order, from the source's box to the
    /// destination's.
    pub boxes: Vec<NavBox>,
}

impl MeshPath {
    /// Total Euclidean length of the polyline.
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub(crate) fn from_parts(mut points: Vec<Point>, boxes: Vec<NavBox>) -> Self {
        points.dedup();
        Self { points, boxes }
    }
}
