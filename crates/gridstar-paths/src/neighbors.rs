use gridstar_core::{Grid, Point};

/// Offsets in generation order: right, left, down, up, down-right,
/// up-left, down-left, up-right (Y grows down).
///
/// The heap does not keep equal keys in insertion order, so this order only
/// influences which of several equal-f cells is expanded first.
pub const DIRECTIONS: [Point; 8] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 1),
    Point::new(-1, -1),
    Point::new(-1, 1),
    Point::new(1, -1),
];

/// Cached neighbor computation helper.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the 8-directional neighbors of `p` for which `keep` returns
    /// `true`, in [`DIRECTIONS`] order.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in DIRECTIONS {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }

    /// Return the in-bounds, unblocked neighbors of `p` on `grid`.
    /// Anything else is silently skipped.
    pub fn passable(&mut self, grid: &Grid, p: Point) -> &[Point] {
        self.all(p, |n| grid.is_passable(n))
    }
}
