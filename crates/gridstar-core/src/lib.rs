//! **gridstar-core**: the grid model shared by the gridstar crates.
//!
//! This crate provides geometry primitives, the per-position [`Cell`]
//! record with its search bookkeeping, and the [`Grid`] arena that owns
//! every cell together with a randomly placed obstacle set.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod mapgen;

pub use cell::{Cell, CellState};
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use mapgen::ObstacleSampler;
