use std::fmt;

use crate::geom::Point;

/// Errors raised by [`Grid`](crate::Grid) construction and access.
///
/// All of these are caller contract violations; none should be retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height was not strictly positive.
    InvalidDimensions { width: i32, height: i32 },
    /// A coordinate outside `[0, width) × [0, height)`.
    OutOfBounds { pos: Point, width: i32, height: i32 },
    /// More obstacles were requested than the grid can hold while
    /// leaving at least one free cell.
    InvalidObstacleCount { requested: usize, available: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::OutOfBounds { pos, width, height } => {
                write!(f, "coordinate {pos} lies outside the {width}x{height} grid")
            }
            Self::InvalidObstacleCount {
                requested,
                available,
            } => write!(
                f,
                "cannot place {requested} obstacles: only {available} cells are available"
            ),
        }
    }
}

impl std::error::Error for GridError {}
