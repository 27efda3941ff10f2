//! The [`Grid`] type, a fixed-size 2D arena of [`Cell`]s with obstacles.
//!
//! Cells live in one flat row-major `Vec` and refer to each other by index
//! (see [`Grid::index`] / [`Grid::point`]). Obstacles are stored twice: as
//! the `Blocked` state on the cell, for O(1) passability checks, and as an
//! ordered list of positions for display and export.

use rand::Rng;

use crate::cell::{Cell, CellState};
use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::mapgen::ObstacleSampler;

/// A rectangular grid of [`Cell`]s anchored at the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Range,
    width: usize,
    cells: Vec<Cell>,
    obstacles: Vec<Point>,
}

impl Grid {
    /// Create a `width × height` grid of unvisited cells with zero costs.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let bounds = Range::new(0, 0, width, height);
        let cells = bounds.iter().map(Cell::new).collect();
        Ok(Self {
            bounds,
            width: width as usize,
            cells,
            obstacles: Vec::new(),
        })
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    // -----------------------------------------------------------------------
    // Arena helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// Like [`index`](Self::index), but reports the offending coordinate.
    pub fn checked_index(&self, p: Point) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            width: self.width(),
            height: self.height(),
        })
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// Bounds-checked cell accessor.
    pub fn cell_at(&self, p: Point) -> Result<&Cell, GridError> {
        let i = self.checked_index(p)?;
        Ok(&self.cells[i])
    }

    /// Bounds-checked mutable cell accessor.
    pub fn cell_at_mut(&mut self, p: Point) -> Result<&mut Cell, GridError> {
        let i = self.checked_index(p)?;
        Ok(&mut self.cells[i])
    }

    /// All cells in row-major order, indexable by [`index`](Self::index).
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable view of all cells. Coordinates stay fixed; only search
    /// fields can change through it.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Row-major iterator over `(Point, &Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> + '_ {
        self.cells.iter().map(|c| (c.pos(), c))
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }

    /// True iff `p` is in bounds and not blocked.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| !self.cells[i].is_blocked())
    }

    // -----------------------------------------------------------------------
    // Obstacles
    // -----------------------------------------------------------------------

    /// Obstacle positions, in the order they were placed.
    #[inline]
    pub fn obstacles(&self) -> &[Point] {
        &self.obstacles
    }

    /// Whether `p` holds an obstacle. Out-of-bounds points never do.
    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.cells[i].is_blocked())
    }

    /// Remove every obstacle, leaving search fields untouched.
    pub fn clear_obstacles(&mut self) {
        for p in std::mem::take(&mut self.obstacles) {
            if let Some(i) = self.index(p) {
                self.cells[i].state = CellState::Unvisited;
            }
        }
    }

    /// Block or unblock a single position.
    pub fn set_blocked(&mut self, p: Point, blocked: bool) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        let cell = &mut self.cells[i];
        match (cell.is_blocked(), blocked) {
            (false, true) => {
                cell.reset_search();
                cell.state = CellState::Blocked;
                self.obstacles.push(p);
            }
            (true, false) => {
                cell.state = CellState::Unvisited;
                self.obstacles.retain(|&o| o != p);
            }
            _ => {}
        }
        Ok(())
    }

    /// Replace the current obstacles with `count` distinct random ones.
    ///
    /// Previous obstacles are cleared first, so calling this twice never
    /// leaves stale blocked cells behind. Fails if `count` is not smaller
    /// than the number of cells.
    pub fn place_obstacles<R: Rng>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<&[Point], GridError> {
        self.place_obstacles_avoiding(count, &[], rng)
    }

    /// Like [`place_obstacles`](Self::place_obstacles), but never blocks
    /// any in-bounds position listed in `keep_clear`.
    pub fn place_obstacles_avoiding<R: Rng>(
        &mut self,
        count: usize,
        keep_clear: &[Point],
        rng: &mut R,
    ) -> Result<&[Point], GridError> {
        let positions = ObstacleSampler::new(self.bounds, keep_clear).sample(count, rng)?;
        self.clear_obstacles();
        for &p in &positions {
            if let Some(i) = self.index(p) {
                self.cells[i].reset_search();
                self.cells[i].state = CellState::Blocked;
            }
        }
        self.obstacles = positions;
        log::debug!(
            "placed {} obstacles on {}x{} grid",
            self.obstacles.len(),
            self.width(),
            self.height()
        );
        Ok(&self.obstacles)
    }

    /// Reset costs, parents and visitation state on every cell. Blocked
    /// cells stay blocked.
    pub fn reset_search(&mut self) {
        for c in &mut self.cells {
            c.reset_search();
        }
    }
}
