use std::fmt;

use gridstar_core::GridError;

/// Errors raised by [`IndexedMinHeap`](crate::IndexedMinHeap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// Peek or extract on an empty heap.
    Underflow,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underflow => f.write_str("priority queue underflow"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Errors raised before a search can start.
///
/// An unreachable goal is not an error; see
/// [`PathResult::Unreachable`](crate::PathResult::Unreachable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start or goal is not a valid grid coordinate.
    Grid(GridError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "invalid search endpoints: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
