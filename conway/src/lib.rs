//! Conway's Game of Life on a finite, non-wrapping grid.
//!
//! A [`Grid`] is one generation. [`Grid::advance`] computes the next
//! generation from a single unmodified snapshot and returns it as a new grid;
//! cells beyond the edges count as dead instead of wrapping around.

pub mod error;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod rule;

pub use error::GridError;
pub use grid::Grid;
pub use history::History;
pub use patterns::{PATTERNS, Pattern};
