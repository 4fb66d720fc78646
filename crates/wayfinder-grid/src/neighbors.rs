use wayfinder_core::Cell;

/// Which offsets count as adjacent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Up, right, down, left.
    Four,
    /// The four cardinal offsets plus the four diagonals.
    #[default]
    Eight,
}

const CARDINAL: [Cell; 4] = [
    Cell::new(0, -1),
    Cell::new(1, 0),
    Cell::new(0, 1),
    Cell::new(-1, 0),
];

const COMPASS: [Cell; 8] = [
    Cell::new(-1, -1),
    Cell::new(0, -1),
    Cell::new(1, -1),
    Cell::new(-1, 0),
    Cell::new(1, 0),
    Cell::new(-1, 1),
    Cell::new(0, 1),
    Cell::new(1, 1),
];

impl Connectivity {
    /// The neighbor offsets, relative to a cell.
    #[inline]
    pub fn offsets(self) -> &'static [Cell] {
        match self {
            Self::Four => &CARDINAL,
            Self::Eight => &COMPASS,
        }
    }
}

/// Neighbor enumeration helper.
///
/// Appends the cells around `c` reachable under a [`Connectivity`], keeping
/// only those for which `keep` returns `true`. Offsets that would leave the
/// `i32` coordinate range are skipped.
pub struct Neighbors;

impl Neighbors {
    /// Push every kept neighbor of `c` into `buf`.
    #[inline]
    pub fn collect(
        c: Cell,
        connectivity: Connectivity,
        keep: impl Fn(Cell) -> bool,
        buf: &mut Vec<Cell>,
    ) {
        for &d in connectivity.offsets() {
            let Some(n) = c.checked_add(d) else {
                continue;
            };
            if keep(n) {
                buf.push(n);
            }
        }
    }
}
