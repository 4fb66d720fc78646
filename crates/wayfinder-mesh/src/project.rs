use wayfinder_core::{NavBox, Point};

/// Move `p` from `current` onto the boundary it shares with `neighbor`.
///
/// The point is clamped into the overlap of the two boxes, giving the
/// nearest point of the shared edge (or corner). Returns `None` if the boxes
/// do not touch.
#[inline]
pub fn project(p: Point, current: NavBox, neighbor: NavBox) -> Option<Point> {
    current.overlap(neighbor).map(|edge| edge.clamp(p))
}
