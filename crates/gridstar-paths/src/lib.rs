//! A* search on obstacle grids.
//!
//! This crate drives a best-first search over a [`gridstar_core::Grid`]:
//!
//! - [`IndexedMinHeap`]: array-backed binary heap with an injected
//!   [`Comparator`] and linear-scan membership testing
//! - [`Neighbors`]: 8-directional expansion filtered by passability
//! - [`AStar`]: the open/closed loop, driven by a reusable [`SearchState`]
//! - [`reconstruct`]: parent-link walk from goal back to start
//!
//! Steps cost 10 orthogonally and 14 diagonally; the estimate is ten times
//! the Euclidean distance, truncated.

mod astar;
mod distance;
mod error;
mod heap;
mod neighbors;
mod path;
mod state;

pub use astar::{AStar, PathResult, SearchConfig, SearchOutcome};
pub use distance::{STEP_SCALE, heuristic, step_cost};
pub use error::{HeapError, SearchError};
pub use heap::{ByKey, Comparator, FnOrder, IndexedMinHeap, NaturalOrder, Reversed};
pub use neighbors::{DIRECTIONS, Neighbors};
pub use path::{Path, reconstruct};
pub use state::SearchState;
