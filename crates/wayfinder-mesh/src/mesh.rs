use std::collections::HashMap;

use wayfinder_core::{NavBox, Point};

/// A navigation mesh: rectangular regions plus which regions connect.
///
/// The mesh is read-only input to every search. Adjacency need not be
/// symmetric, and a box may lack an adjacency entry altogether; searches
/// treat such a box as a dead end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "MeshData", into = "MeshData")
)]
pub struct Mesh {
    boxes: Vec<NavBox>,
    adj: HashMap<NavBox, Vec<NavBox>>,
}

impl Mesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh from its box list and adjacency map, as handed over by
    /// a loader.
    pub fn from_parts(boxes: Vec<NavBox>, adj: HashMap<NavBox, Vec<NavBox>>) -> Self {
        Self { boxes, adj }
    }

    /// Add a box with no connections. Adding a known box does nothing.
    pub fn add_box(&mut self, b: NavBox) {
        if !self.boxes.contains(&b) {
            self.boxes.push(b);
        }
    }

    /// Connect two boxes in both directions, adding them if needed.
    pub fn connect(&mut self, a: NavBox, b: NavBox) {
        self.add_box(a);
        self.add_box(b);
        for (from, to) in [(a, b), (b, a)] {
            let list = self.adj.entry(from).or_default();
            if !list.contains(&to) {
                list.push(to);
            }
        }
    }

    /// Every box, in insertion order.
    #[inline]
    pub fn boxes(&self) -> &[NavBox] {
        &self.boxes
    }

    /// The adjacency list of `b`, `None` if the mesh has no entry for it.
    #[inline]
    pub fn neighbors(&self, b: NavBox) -> Option<&[NavBox]> {
        self.adj.get(&b).map(Vec::as_slice)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// The box containing `p` (bounds inclusive).
    ///
    /// A point on an edge shared by two boxes belongs to whichever comes
    /// first in [`boxes`](Self::boxes).
    pub fn locate(&self, p: Point) -> Option<NavBox> {
        self.boxes.iter().copied().find(|b| b.contains(p))
    }
}

// ---------------------------------------------------------------------------
// Serialized form
// ---------------------------------------------------------------------------

/// List-based mirror of [`Mesh`]: JSON objects cannot be keyed by boxes.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MeshData {
    boxes: Vec<NavBox>,
    #[serde(default)]
    adj: Vec<(NavBox, Vec<NavBox>)>,
}

#[cfg(feature = "serde")]
impl From<MeshData> for Mesh {
    fn from(data: MeshData) -> Self {
        Mesh::from_parts(data.boxes, data.adj.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl From<Mesh> for MeshData {
    fn from(mesh: Mesh) -> Self {
        let mut adj: Vec<_> = mesh.adj.into_iter().collect();
        adj.sort();
        Self {
            boxes: mesh.boxes,
            adj,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn mesh_round_trip() {
        let a = NavBox::new(0, 10, 0, 10);
        let b = NavBox::new(10, 20, 0, 10);
        let c = NavBox::new(10, 20, 10, 30);
        let mut mesh = Mesh::new();
        mesh.connect(a, b);
        mesh.connect(b, c);
        let json = serde_json::to_string(&mesh).unwrap();
        let back: Mesh = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mesh);
    }

    #[test]
    fn mesh_from_json() {
        let json = r#"{
            "boxes": [
                {"x_min":0,"x_max":10,"y_min":0,"y_max":10},
                {"x_min":10,"x_max":20,"y_min":0,"y_max":10}
            ],
            "adj": [
                [{"x_min":0,"x_max":10,"y_min":0,"y_max":10},
                 [{"x_min":10,"x_max":20,"y_min":0,"y_max":10}]]
            ]
        }"#;
        let mesh: Mesh = serde_json::from_str(json).unwrap();
        assert_eq!(mesh.len(), 2);
        let a = NavBox::new(0, 10, 0, 10);
        assert_eq!(mesh.neighbors(a).map(<[_]>::len), Some(1));
        assert_eq!(mesh.neighbors(NavBox::new(10, 20, 0, 10)), None);
    }
}
