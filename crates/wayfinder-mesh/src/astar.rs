use std::collections::BinaryHeap;

use wayfinder_core::{NavBox, Point};

use crate::frontier::{Direction, Frontier};
use crate::mesh::Mesh;
use crate::path::MeshPath;

/// A* from `source` in `source_box` to `destination` in `dest_box`.
///
/// Edge cost is the Euclidean distance between successive projected points;
/// the heuristic is the straight-line distance to `destination`. The search
/// ends when `dest_box` is settled.
pub(crate) fn astar_path(
    mesh: &Mesh,
    source_box: NavBox,
    source: Point,
    dest_box: NavBox,
    destination: Point,
) -> Option<MeshPath> {
    search(mesh, source_box, source, dest_box, destination).0
}

fn search(
    mesh: &Mesh,
    source_box: NavBox,
    source: Point,
    dest_box: NavBox,
    destination: Point,
) -> (Option<MeshPath>, Frontier) {
    let mut frontier = Frontier::new(Direction::Forward, source_box, source, destination);
    let mut open: BinaryHeap<_> = BinaryHeap::new();
    open.push(frontier.seed());

    while let Some(current) = open.pop() {
        if !frontier.settle(&current) {
            continue;
        }
        if current.nav_box == dest_box {
            let (mut boxes, mut points): (Vec<_>, Vec<_>) =
                frontier.chain(dest_box).into_iter().unzip();
            boxes.reverse();
            points.reverse();
            points.push(destination);
            log::debug!(
                "mesh astar {source} -> {destination}: {} boxes on path, {} expanded",
                boxes.len(),
                frontier.expansions
            );
            return (Some(MeshPath::from_parts(points, boxes)), frontier);
        }
        frontier.expand(mesh, &current, &mut open);
    }

    log::debug!(
        "mesh astar {source} -> {destination}: no path, {} expanded",
        frontier.expansions
    );
    (None, frontier)
}
