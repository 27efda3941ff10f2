use std::fs;
use std::time::Instant;

use gridstar_core::{CellState, Grid, GridError};
use gridstar_paths::{AStar, PathResult, SearchError};
use rand::Rng;

use crate::config::{Experiment, ExperimentConfig};
use crate::render;
use crate::report::Row;

/// Failure of a single experiment. The runner logs it and moves on.
#[derive(Debug)]
pub enum ExperimentError {
    Grid(GridError),
    Search(SearchError),
    Image(image::ImageError),
    Io(std::io::Error),
}

impl std::fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid setup failed: {e}"),
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::Image(e) => write!(f, "image export failed: {e}"),
            Self::Io(e) => write!(f, "i/o error: {e}"),
        }
    }
}

impl std::error::Error for ExperimentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Image(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<GridError> for ExperimentError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError> for ExperimentError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<image::ImageError> for ExperimentError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

impl From<std::io::Error> for ExperimentError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// What one experiment produced.
#[derive(Debug)]
pub struct Report {
    pub row: Row,
    pub result: PathResult,
}

/// Build the grid, search it, and emit console/image output.
pub fn run<R: Rng>(
    index: usize,
    exp: &Experiment,
    cfg: &ExperimentConfig,
    astar: &mut AStar,
    rng: &mut R,
) -> Result<Report, ExperimentError> {
    let timer = Instant::now();
    let mut grid = Grid::new(exp.width, exp.height)?;
    grid.place_obstacles_avoiding(exp.obstacles, &[exp.start, exp.goal], rng)?;

    if cfg.console {
        println!("Initial grid:\n{}", render::grid_to_string(&grid));
    }

    let trace = cfg.trace_steps;
    let mut step = 0usize;
    let outcome = astar.search_with(&grid, exp.start, exp.goal, |s| {
        if trace {
            log::info!("step {step}: open={} closed={}", s.open_len(), s.closed_len());
        }
        step += 1;
    })?;
    if let Some(state) = astar.state() {
        state.write_back(&mut grid);
    }
    let elapsed = timer.elapsed();

    match &outcome.result {
        PathResult::Found(path) => log::info!(
            "experiment {}: path of {} cells (cost {}), {} expansions, {:.6}s",
            index + 1,
            path.len(),
            path.cost(),
            outcome.expanded,
            elapsed.as_secs_f64()
        ),
        PathResult::Unreachable => log::info!(
            "experiment {}: no path from {} to {} ({} expansions)",
            index + 1,
            exp.start,
            exp.goal,
            outcome.expanded
        ),
        PathResult::Exhausted => log::info!(
            "experiment {}: gave up after {} expansions",
            index + 1,
            outcome.expanded
        ),
    }

    if cfg.console {
        println!("{}", render::grid_to_string(&grid));
        log::debug!(
            "cells: {} closed, {} open, {} on path",
            grid.count(CellState::Closed),
            grid.count(CellState::Open),
            grid.count(CellState::OnPath)
        );
    }

    if cfg.image {
        fs::create_dir_all(&cfg.output)?;
        let path = cfg.output.join(format!("2{index:06}.ppm"));
        let scale = render::image_scale(grid.width(), grid.height(), cfg.image_min_res);
        render::save_ppm(&grid, scale, &path)?;
        log::debug!("wrote {}", path.display());
    }

    Ok(Report {
        row: Row {
            index,
            start: exp.start,
            goal: exp.goal,
            width: exp.width,
            height: exp.height,
            obstacles: exp.obstacles,
            elapsed,
        },
        result: outcome.result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::Point;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn quiet() -> ExperimentConfig {
        ExperimentConfig {
            console: false,
            image: false,
            ..ExperimentConfig::default()
        }
    }

    #[test]
    fn default_experiment_finds_path() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut astar = AStar::default();
        let exp = Experiment::default();
        let report = run(0, &exp, &quiet(), &mut astar, &mut rng).unwrap();
        let path = report.result.path().unwrap();
        assert_eq!(path.start(), Some(exp.start));
        assert_eq!(path.goal(), Some(exp.goal));
        assert!(path.is_connected());
        assert_eq!(report.row.obstacles, 20);
        assert_eq!((report.row.width, report.row.height), (50, 50));
    }

    #[test]
    fn bad_dimensions_are_reported() {
        let mut rng = StdRng::seed_from_u64(7);
        let exp = Experiment {
            width: 0,
            ..Experiment::default()
        };
        let err = run(0, &exp, &quiet(), &mut AStar::default(), &mut rng).unwrap_err();
        assert!(matches!(err, ExperimentError::Grid(_)));
    }

    #[test]
    fn out_of_bounds_start_is_reported() {
        let mut rng = StdRng::seed_from_u64(7);
        let exp = Experiment {
            width: 5,
            height: 5,
            start: Point::new(9, 9),
            goal: Point::new(0, 0),
            obstacles: 2,
        };
        let err = run(0, &exp, &quiet(), &mut AStar::default(), &mut rng).unwrap_err();
        assert!(matches!(err, ExperimentError::Search(_)));
    }
}
