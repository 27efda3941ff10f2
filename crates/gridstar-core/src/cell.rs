//! The [`Cell`] type: per-position search bookkeeping.

use crate::geom::Point;

/// Visitation state of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Not yet discovered by the search.
    #[default]
    Unvisited,
    /// Discovered and waiting in the open set.
    Open,
    /// Expanded; its cost is final.
    Closed,
    /// An obstacle. Never expanded.
    Blocked,
    /// Part of the reconstructed path.
    OnPath,
}

/// One grid position with its search costs.
///
/// `parent` is a flat index into the owning arena (a grid or a
/// per-run search state), never an owning link.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    pub state: CellState,
    pub g: i32,
    pub h: i32,
    pub f: i32,
    pub parent: Option<usize>,
}

impl Cell {
    /// A fresh, unvisited cell at `pos` with zero costs.
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            state: CellState::Unvisited,
            g: 0,
            h: 0,
            f: 0,
            parent: None,
        }
    }

    /// The cell's coordinate. Fixed at creation.
    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.state == CellState::Blocked
    }

    /// Set `g` and `h`, keeping `f == g + h`.
    #[inline]
    pub fn set_costs(&mut self, g: i32, h: i32) {
        self.g = g;
        self.h = h;
        self.f = g + h;
    }

    /// Clear costs, parent and visitation state. Blocked cells stay
    /// blocked.
    pub fn reset_search(&mut self) {
        self.g = 0;
        self.h = 0;
        self.f = 0;
        self.parent = None;
        if self.state != CellState::Blocked {
            self.state = CellState::Unvisited;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_costs_keeps_f_in_sync() {
        let mut c = Cell::new(Point::new(2, 3));
        c.set_costs(14, 30);
        assert_eq!(c.f, 44);
        c.set_costs(10, 30);
        assert_eq!(c.f, 40);
    }

    #[test]
    fn reset_preserves_blocked() {
        let mut c = Cell::new(Point::new(0, 0));
        c.state = CellState::Blocked;
        c.set_costs(5, 5);
        c.reset_search();
        assert!(c.is_blocked());
        assert_eq!(c.f, 0);

        let mut open = Cell::new(Point::new(1, 0));
        open.state = CellState::OnPath;
        open.parent = Some(0);
        open.reset_search();
        assert_eq!(open.state, CellState::Unvisited);
        assert_eq!(open.parent, None);
        assert_eq!(open.pos(), Point::new(1, 0));
    }
}
