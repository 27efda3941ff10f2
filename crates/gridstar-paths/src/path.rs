use gridstar_core::{Cell, CellState, Point};

use crate::distance::step_cost;

/// An ordered start-to-goal sequence of grid positions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<Point>);

impl Path {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn start(&self) -> Option<Point> {
        self.0.first().copied()
    }

    pub fn goal(&self) -> Option<Point> {
        self.0.last().copied()
    }

    /// Sum of the step costs along the path.
    pub fn cost(&self) -> i32 {
        self.0.windows(2).map(|w| step_cost(w[0], w[1])).sum()
    }

    /// Whether every consecutive pair is 8-directionally adjacent.
    pub fn is_connected(&self) -> bool {
        self.0.windows(2).all(|w| w[0].is_adjacent_8(w[1]))
    }

    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Follow parent links from `goal` back to the root, marking every visited
/// cell [`CellState::OnPath`], and return the chain in root-to-goal order.
///
/// A goal without a parent yields a single-element path. Returns `None`,
/// leaving `cells` untouched, if `goal` or any parent link points outside
/// `cells`. The walk is capped at `cells.len()` steps so a malformed parent
/// chain cannot loop.
pub fn reconstruct(cells: &mut [Cell], goal: usize) -> Option<Path> {
    let mut chain = Vec::new();
    let mut cur = Some(goal);
    while let Some(i) = cur {
        if chain.len() >= cells.len() {
            log::warn!("parent chain from {} exceeds grid size; truncating", cells[goal].pos());
            break;
        }
        cur = cells.get(i)?.parent;
        chain.push(i);
    }
    let points = chain
        .iter()
        .rev()
        .map(|&i| {
            let cell = &mut cells[i];
            cell.state = CellState::OnPath;
            cell.pos()
        })
        .collect();
    Some(Path(points))
}
