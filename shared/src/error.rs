//! Error types for the grid engine.

use thiserror::Error;

/// Errors returned by [`Grid`](crate::grid::Grid) and
/// [`RuleTable`](crate::rules::RuleTable) for invalid caller input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Width or height was zero.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },

    /// Linear cell index past the end of the grid.
    #[error("cell index {index} out of range for a grid of {size} cells")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of cells in the grid.
        size: usize,
    },

    /// Column or row outside the grid.
    #[error("cell ({col}, {row}) out of range for a {width}x{height} grid")]
    CoordOutOfRange {
        /// Offending column.
        col: usize,
        /// Offending row.
        row: usize,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },

    /// A rule table needs one entry per neighbour count, 0 through 8.
    #[error("rule table must have exactly 9 entries, got {0}")]
    MalformedRuleTable(usize),

    /// A birth/survival count above 8.
    #[error("neighbour count {0} out of range, expected 0..=8")]
    NeighbourCountOutOfRange(u8),

    /// Birth and death at the same count, which one table entry cannot hold.
    #[error("neighbour count {count} both births dead cells and kills live ones")]
    UnrepresentableRule {
        /// Neighbour count with conflicting outcomes.
        count: u8,
    },

    /// Rule string not in `B<digits>/S<digits>` form.
    #[error("invalid rule string {0:?}, expected B<digits>/S<digits>")]
    InvalidRuleString(String),

    /// Start population fraction outside `[0, 1]`.
    #[error("population fraction must be within [0, 1], got {0}")]
    InvalidPopulation(f64),
}
