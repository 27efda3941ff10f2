use gridstar_core::{Cell, CellState, Grid, Point};

use crate::heap::{ByKey, IndexedMinHeap};

/// An open-set entry: a cell index and the f-cost it was queued with.
///
/// A cell whose cost improves while queued gets a second entry; the older,
/// higher-f one is discarded when it surfaces (lazy deletion).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct OpenEntry {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

type OpenKey = fn(&OpenEntry) -> i32;

fn open_key(e: &OpenEntry) -> i32 {
    e.f
}

/// Per-run search bookkeeping, indexed in parallel with a [`Grid`].
///
/// The grid itself is only read during a search, so several states can
/// search the same grid independently. Call
/// [`write_back`](Self::write_back) to publish the final cell states to the
/// grid for rendering.
#[derive(Debug, Clone)]
pub struct SearchState {
    width: i32,
    height: i32,
    pub(crate) cells: Vec<Cell>,
    pub(crate) open: IndexedMinHeap<OpenEntry, ByKey<OpenKey>>,
    pub(crate) closed: Vec<bool>,
    pub(crate) closed_count: usize,
}

impl SearchState {
    /// A fresh state sized for `grid`.
    pub fn new(grid: &Grid) -> Self {
        let mut state = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            open: IndexedMinHeap::by_key(open_key as OpenKey),
            closed: Vec::new(),
            closed_count: 0,
        };
        state.reset(grid);
        state
    }

    /// Re-seed from `grid`: every cell unvisited with zero costs, except
    /// obstacles which stay blocked. Buffers are reused where possible.
    pub fn reset(&mut self, grid: &Grid) {
        self.width = grid.width();
        self.height = grid.height();
        self.cells.clear();
        self.cells.extend_from_slice(grid.cells());
        for c in &mut self.cells {
            c.reset_search();
        }
        self.open.clear();
        self.closed.clear();
        self.closed.resize(self.cells.len(), false);
        self.closed_count = 0;
    }

    /// Every cell in row-major order, with this run's costs and states.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Visitation state at `p`, or `None` if out of bounds.
    pub fn state_at(&self, p: Point) -> Option<CellState> {
        self.cell(p).map(|c| c.state)
    }

    /// Whether `p` has been expanded in this run.
    pub fn is_closed(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.closed[i])
    }

    /// Open-set entries currently queued, stale duplicates included.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Number of expanded cells.
    #[inline]
    pub fn closed_len(&self) -> usize {
        self.closed_count
    }

    /// Copy this run's costs, parents and states into `grid`.
    ///
    /// Obstacles are owned by the grid: cells it blocks are left as they
    /// are, and a cell this run saw as blocked but the grid no longer does
    /// is written back unvisited. Does nothing if `grid` has a different
    /// size than the grid this state was last reset from.
    pub fn write_back(&self, grid: &mut Grid) {
        if grid.width() != self.width || grid.height() != self.height {
            log::warn!(
                "write_back skipped: state is {}x{}, grid is {}x{}",
                self.width,
                self.height,
                grid.width(),
                grid.height()
            );
            return;
        }
        for (dst, src) in grid.cells_mut().iter_mut().zip(&self.cells) {
            if dst.is_blocked() {
                continue;
            }
            *dst = *src;
            if dst.is_blocked() {
                dst.state = CellState::Unvisited;
                dst.reset_search();
            }
        }
    }

    #[inline]
    pub(crate) fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    #[inline]
    pub(crate) fn close(&mut self, idx: usize) {
        if !self.closed[idx] {
            self.closed[idx] = true;
            self.closed_count += 1;
        }
        self.cells[idx].state = CellState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_copies_obstacles_and_clears_costs() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_blocked(Point::new(1, 1), true).unwrap();
        grid.cell_at_mut(Point::new(0, 0)).unwrap().set_costs(4, 4);

        let state = SearchState::new(&grid);
        assert_eq!(state.cells().len(), 6);
        assert_eq!(state.state_at(Point::new(1, 1)), Some(CellState::Blocked));
        assert_eq!(state.cell(Point::new(0, 0)).unwrap().f, 0);
        assert_eq!(state.state_at(Point::new(3, 0)), None);
        assert_eq!(state.open_len(), 0);
        assert_eq!(state.closed_len(), 0);
    }

    #[test]
    fn close_is_counted_once() {
        let grid = Grid::new(2, 2).unwrap();
        let mut state = SearchState::new(&grid);
        state.close(3);
        state.close(3);
        assert_eq!(state.closed_len(), 1);
        assert!(state.is_closed(Point::new(1, 1)));
        assert!(!state.is_closed(Point::new(0, 1)));
    }

    #[test]
    fn write_back_requires_matching_size() {
        let grid = Grid::new(2, 2).unwrap();
        let mut state = SearchState::new(&grid);
        state.close(0);

        let mut other = Grid::new(3, 3).unwrap();
        state.write_back(&mut other);
        assert_eq!(other.count(CellState::Closed), 0);

        let mut same = grid.clone();
        state.write_back(&mut same);
        assert_eq!(same.cell_at(Point::new(0, 0)).unwrap().state, CellState::Closed);
    }

    #[test]
    fn write_back_keeps_the_grid_obstacles() {
        let mut grid = Grid::new(4, 1).unwrap();
        grid.set_blocked(Point::new(3, 0), true).unwrap();
        let mut state = SearchState::new(&grid);
        state.close(1);
        state.close(2);

        // Obstacles change between the run and the copy.
        grid.set_blocked(Point::new(2, 0), true).unwrap();
        grid.set_blocked(Point::new(3, 0), false).unwrap();
        state.write_back(&mut grid);

        assert_eq!(grid.obstacles(), &[Point::new(2, 0)]);
        assert!(grid.is_obstacle(Point::new(2, 0)));
        assert!(!grid.is_passable(Point::new(2, 0)));
        assert_eq!(grid.cell_at(Point::new(1, 0)).unwrap().state, CellState::Closed);
        assert_eq!(grid.cell_at(Point::new(3, 0)).unwrap().state, CellState::Unvisited);
        assert!(grid.is_passable(Point::new(3, 0)));
        assert_eq!(grid.count(CellState::Blocked), 1);
    }
}
