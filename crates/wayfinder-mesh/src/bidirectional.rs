//! Bidirectional variant of the mesh search.
//!
//! A forward frontier grows from the source towards the destination and a
//! backward frontier from the destination towards the source. Both share one
//! heap; the search ends as soon as one direction settles a box the other
//! has already settled, and the two predecessor chains are joined there.

use std::collections::BinaryHeap;

use wayfinder_core::{NavBox, Point};

use crate::frontier::{Direction, Frontier};
use crate::mesh::Mesh;
use crate::path::MeshPath;

pub(crate) fn bidirectional_path(
    mesh: &Mesh,
    source_box: NavBox,
    source: Point,
    dest_box: NavBox,
    destination: Point,
) -> Option<MeshPath> {
    let mut forward = Frontier::new(Direction::Forward, source_box, source, destination);
    let mut backward = Frontier::new(Direction::Backward, dest_box, destination, source);

    let mut open: BinaryHeap<_> = BinaryHeap::new();
    open.push(forward.seed());
    open.push(backward.seed());

    while let Some(current) = open.pop() {
        let (this, other) = match current.direction {
            Direction::Forward => (&mut forward, &backward),
            Direction::Backward => (&mut backward, &forward),
        };
        if !this.settle(&current) {
            continue;
        }
        if other.is_closed(current.nav_box) {
            let meet = current.nav_box;
            log::debug!(
                "mesh bidirectional {source} -> {destination}: met at {meet}, {} + {} expanded",
                forward.expansions,
                backward.expansions
            );
            return Some(stitch(&forward, &backward, meet));
        }
        this.expand(mesh, &current, &mut open);
    }

    log::debug!(
        "mesh bidirectional {source} -> {destination}: no path, {} + {} expanded",
        forward.expansions,
        backward.expansions
    );
    None
}

/// Join the forward chain (source → `meet`) with the backward chain
/// (`meet` → destination).
fn stitch(forward: &Frontier, backward: &Frontier, meet: NavBox) -> MeshPath {
    let mut head = forward.chain(meet);
    head.reverse();
    let tail = backward.chain(meet);

    let mut boxes = Vec::with_capacity(head.len() + tail.len());
    let mut points = Vec::with_capacity(head.len() + tail.len());
    for &(b, p) in &head {
        boxes.push(b);
        points.push(p);
    }
    for (i, &(b, p)) in tail.iter().enumerate() {
        // `meet` is already the last box of the head.
        if i > 0 {
            boxes.push(b);
        }
        points.push(p);
    }
    MeshPath::from_parts(points, boxes)
}
