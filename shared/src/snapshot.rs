//! Owned point-in-time copies of a grid.

use std::fmt;

/// A frozen copy of a grid's cells, detached from later mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Snapshot {
    pub(crate) fn new(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows in order, each `width` cells long.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Cell state, or `None` outside the captured area.
    pub fn get(&self, col: usize, row: usize) -> Option<bool> {
        if col < self.width && row < self.height {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.rows())
    }
}

/// Writes rows as `*` for live cells and a space for dead ones, one line per row.
pub(crate) fn write_rows<'a>(
    f: &mut fmt::Formatter<'_>,
    rows: impl Iterator<Item = &'a [bool]>,
) -> fmt::Result {
    for row in rows {
        for &alive in row {
            f.write_str(if alive { "*" } else { " " })?;
        }
        f.write_str("\n")?;
    }
    Ok(())
}
