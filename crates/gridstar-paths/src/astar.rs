use std::time::{Duration, Instant};

use gridstar_core::{CellState, Grid, Point};

use crate::distance::{STEP_SCALE, heuristic, step_cost};
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::path::{Path, reconstruct};
use crate::state::{OpenEntry, SearchState};

/// Tunables for [`AStar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Multiplier applied to the Euclidean estimate. `10` matches the
    /// step costs; `0` turns the search into uniform-cost search.
    pub heuristic_scale: i32,
    /// Report [`PathResult::Exhausted`] when another cell is due for
    /// expansion after this many. An open set that empties first still
    /// reports [`PathResult::Unreachable`]. `None` means no bound.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic_scale: STEP_SCALE,
            max_expansions: None,
        }
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathResult {
    /// The goal was reached.
    Found(Path),
    /// The open set emptied without reaching the goal.
    Unreachable,
    /// The expansion bound was hit first.
    Exhausted,
}

impl PathResult {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }
}

/// Result of one [`AStar::search`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub result: PathResult,
    /// Number of cells expanded (moved to the closed set).
    pub expanded: usize,
    /// Wall-clock time spent inside the search.
    pub elapsed: Duration,
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self.result, PathResult::Found(_))
    }

    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.result.path()
    }
}

/// A* driver over a [`Grid`].
///
/// `AStar` owns a [`SearchState`] that is reset and reused on every call,
/// so repeated searches allocate only when the grid grows.
///
/// Closed cells are never re-opened. With the default Euclidean estimate
/// this can return a slightly longer path than the optimum on grids where
/// the estimate overshoots (see [`heuristic`]).
pub struct AStar {
    config: SearchConfig,
    state: Option<SearchState>,
    nbuf: Neighbors,
}

impl Default for AStar {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl AStar {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            state: None,
            nbuf: Neighbors::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Bookkeeping from the most recent search, if any.
    pub fn state(&self) -> Option<&SearchState> {
        self.state.as_ref()
    }

    /// Find a path from `start` to `goal`.
    pub fn search(
        &mut self,
        grid: &Grid,
        start: Point,
        goal: Point,
    ) -> Result<SearchOutcome, SearchError> {
        self.search_with(grid, start, goal, |_| {})
    }

    /// Like [`search`](Self::search), calling `observe` with the current
    /// state before every extraction from the open set.
    pub fn search_with(
        &mut self,
        grid: &Grid,
        start: Point,
        goal: Point,
        mut observe: impl FnMut(&SearchState),
    ) -> Result<SearchOutcome, SearchError> {
        let started = Instant::now();
        let start_idx = grid.checked_index(start)?;
        let goal_idx = grid.checked_index(goal)?;

        let state = self.state.get_or_insert_with(|| SearchState::new(grid));
        state.reset(grid);

        let finish = |result: PathResult, expanded: usize| SearchOutcome {
            result,
            expanded,
            elapsed: started.elapsed(),
        };

        if !grid.is_passable(start) || !grid.is_passable(goal) {
            log::warn!("search {start} -> {goal}: endpoint is blocked");
            return Ok(finish(PathResult::Unreachable, 0));
        }

        let scale = self.config.heuristic_scale;
        {
            let s = &mut state.cells[start_idx];
            s.set_costs(0, heuristic(start, goal, scale));
            s.parent = None;
            s.state = CellState::Open;
            let f = s.f;
            state.open.insert(OpenEntry { idx: start_idx, f });
        }
        log::debug!("search {start} -> {goal} on {}x{} grid", grid.width(), grid.height());

        let result = loop {
            observe(&*state);

            let Ok(entry) = state.open.extract_min() else {
                break PathResult::Unreachable;
            };
            let ci = entry.idx;

            // Skip stale entries.
            if state.closed[ci] || entry.f != state.cells[ci].f {
                continue;
            }

            // The bound only applies while live work remains.
            if self
                .config
                .max_expansions
                .is_some_and(|max| state.closed_count >= max)
            {
                break PathResult::Exhausted;
            }

            state.close(ci);
            let current = state.cells[ci];
            log::trace!("expand {} g={} h={} f={}", current.pos(), current.g, current.h, current.f);

            if ci == goal_idx {
                match reconstruct(&mut state.cells, ci) {
                    Some(path) => break PathResult::Found(path),
                    None => {
                        log::warn!("search {start} -> {goal}: broken parent chain");
                        break PathResult::Unreachable;
                    }
                }
            }

            for &np in self.nbuf.passable(grid, current.pos()) {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if state.closed[ni] {
                    continue;
                }

                let tentative_g = current.g + step_cost(current.pos(), np);
                let n = &mut state.cells[ni];
                let was_open = n.state == CellState::Open;
                if was_open && tentative_g >= n.g {
                    continue;
                }

                n.parent = Some(ci);
                n.set_costs(tentative_g, heuristic(np, goal, scale));
                n.state = CellState::Open;
                let f = n.f;
                state.open.insert(OpenEntry { idx: ni, f });
            }
        };

        let outcome = finish(result, state.closed_count);
        log::debug!(
            "search {start} -> {goal}: {} after {} expansions in {:?}",
            match &outcome.result {
                PathResult::Found(p) => format!("path of {} cells", p.len()),
                PathResult::Unreachable => "unreachable".to_owned(),
                PathResult::Exhausted => "expansion bound hit".to_owned(),
            },
            outcome.expanded,
            outcome.elapsed
        );
        Ok(outcome)
    }
}
