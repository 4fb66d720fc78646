//! Per-direction search state shared by the unidirectional and
//! bidirectional searches.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use wayfinder_core::{NavBox, Point};

use crate::mesh::Mesh;
use crate::project::project;

/// Which end of the query a frontier grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// From the source, aiming at the destination.
    Forward,
    /// From the destination, aiming at the source.
    Backward,
}

/// Best known way into a box.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Visit {
    pub(crate) point: Point,
    pub(crate) dist: f64,
    pub(crate) prev: Option<NavBox>,
}

/// Heap entry, ordered by `priority` for use in `BinaryHeap`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct QueueEntry {
    pub(crate) priority: f64,
    pub(crate) dist: f64,
    pub(crate) nav_box: NavBox,
    pub(crate) point: Point,
    pub(crate) direction: Direction,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.nav_box.cmp(&self.nav_box))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

/// One direction's bookkeeping: a canonical [`Visit`] per touched box and
/// the set of boxes already expanded.
pub(crate) struct Frontier {
    pub(crate) direction: Direction,
    start_box: NavBox,
    start: Point,
    goal: Point,
    pub(crate) visits: HashMap<NavBox, Visit>,
    pub(crate) closed: HashSet<NavBox>,
    pub(crate) expansions: usize,
}

impl Frontier {
    pub(crate) fn new(direction: Direction, start_box: NavBox, start: Point, goal: Point) -> Self {
        let mut visits = HashMap::new();
        visits.insert(
            start_box,
            Visit {
                point: start,
                dist: 0.0,
                prev: None,
            },
        );
        Self {
            direction,
            start_box,
            start,
            goal,
            visits,
            closed: HashSet::new(),
            expansions: 0,
        }
    }

    /// The entry that starts this frontier off.
    pub(crate) fn seed(&self) -> QueueEntry {
        QueueEntry {
            priority: self.start.distance(self.goal),
            dist: 0.0,
            nav_box: self.start_box,
            point: self.start,
            direction: self.direction,
        }
    }

    /// Close the entry's box if the entry is still current.
    ///
    /// Returns `false` for stale entries (the box has since been reached
    /// more cheaply) and for boxes that are already closed.
    pub(crate) fn settle(&mut self, entry: &QueueEntry) -> bool {
        match self.visits.get(&entry.nav_box) {
            Some(v) if entry.dist <= v.dist => self.closed.insert(entry.nav_box),
            _ => false,
        }
    }

    #[inline]
    pub(crate) fn is_closed(&self, b: NavBox) -> bool {
        self.closed.contains(&b)
    }

    /// Relax every neighbor of a settled entry's box, pushing improvements.
    pub(crate) fn expand(&mut self, mesh: &Mesh, entry: &QueueEntry, open: &mut BinaryHeap<QueueEntry>) {
        let current = entry.nav_box;
        let Some(neighbors) = mesh.neighbors(current) else {
            log::warn!("mesh: box {current} has no adjacency entry, treating it as a dead end");
            return;
        };
        self.expansions += 1;
        log::trace!("mesh {:?}: expand {current} at {:.2}", self.direction, entry.dist);

        for &nb in neighbors {
            if self.closed.contains(&nb) {
                continue;
            }
            let Some(np) = project(entry.point, current, nb) else {
                log::warn!("mesh: boxes {current} and {nb} are listed as adjacent but do not touch");
                continue;
            };
            let nd = entry.dist + entry.point.distance(np);
            if self.visits.get(&nb).is_none_or(|v| nd < v.dist) {
                self.visits.insert(
                    nb,
                    Visit {
                        point: np,
                        dist: nd,
                        prev: Some(current),
                    },
                );
                open.push(QueueEntry {
                    priority: nd + np.distance(self.goal),
                    dist: nd,
                    nav_box: nb,
                    point: np,
                    direction: self.direction,
                });
            }
        }
    }

    /// Boxes and entry points from `from` back to this frontier's start.
    pub(crate) fn chain(&self, from: NavBox) -> Vec<(NavBox, Point)> {
        let mut out = Vec::new();
        let mut cur = Some(from);
        while let Some(b) = cur {
            let Some(v) = self.visits.get(&b) else {
                break;
            };
            out.push((b, v.point));
            cur = v.prev;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(priority: f64, b: NavBox) -> QueueEntry {
        QueueEntry {
            priority,
            dist: 0.0,
            nav_box: b,
            point: Point::default(),
            direction: Direction::Forward,
        }
    }

    #[test]
    fn heap_pops_lowest_priority() {
        let a = NavBox::new(0, 1, 0, 1);
        let b = NavBox::new(1, 2, 0, 1);
        let mut open = BinaryHeap::new();
        open.push(entry(3.5, a));
        open.push(entry(1.25, b));
        open.push(entry(2.0, a));
        let order: Vec<f64> = std::iter::from_fn(|| open.pop().map(|e| e.priority)).collect();
        assert_eq!(order, vec![1.25, 2.0, 3.5]);
    }

    #[test]
    fn stale_entries_are_not_settled() {
        let a = NavBox::new(0, 10, 0, 10);
        let b = NavBox::new(10, 20, 0, 10);
        let mut mesh = Mesh::new();
        mesh.connect(a, b);

        let mut f = Frontier::new(Direction::Forward, a, Point::new(1.0, 5.0), Point::new(19.0, 5.0));
        let seed = f.seed();
        let mut open = BinaryHeap::new();
        assert!(f.settle(&seed));
        assert!(!f.settle(&seed), "a box settles once");
        f.expand(&mesh, &seed, &mut open);
        assert_eq!(f.expansions, 1);

        let reached = open.pop().unwrap();
        assert_eq!(reached.nav_box, b);
        assert_eq!(reached.point, Point::new(10.0, 5.0));
        assert_eq!(reached.dist, 9.0);

        let mut stale = reached;
        stale.dist += 1.0;
        assert!(!f.settle(&stale));
        assert!(f.settle(&reached));
        assert_eq!(
            f.chain(b),
            vec![(b, Point::new(10.0, 5.0)), (a, Point::new(1.0, 5.0))]
        );
    }
}
