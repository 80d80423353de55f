//! Grid engine for Conway's Game of Life.
//!
//! * A live cell dies if it has fewer than two live neighbors.
//! * A live cell with two or three live neighbors lives on to the next generation.
//! * A live cell with more than three live neighbors dies.
//! * A dead cell will be brought back to live if it has exactly three live neighbors.
//!
//! The rules live in a [`RuleTable`] so other life-like automata can be
//! run on the same [`Grid`].

pub mod error;
pub mod grid;
pub mod rules;
pub mod snapshot;

pub use error::GridError;
pub use grid::Grid;
pub use rules::{Rule, RuleTable};
pub use snapshot::Snapshot;
