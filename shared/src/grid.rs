use std::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::error::GridError;
use crate::rules::RuleTable;
use crate::snapshot::{write_rows, Snapshot};

/// Moore neighbourhood offsets as `(dc, dr)`.
const SURROUND: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Fixed-size, double-buffered Life grid.
///
/// Cells are addressed by linear index `row * width + col`. `current`
/// holds the visible generation; `next` is scratch space rewritten in
/// full by every [`advance`](Grid::advance) before the two are swapped.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    current: Vec<bool>,
    next: Vec<bool>,
    rules: RuleTable,
    wrap: bool,
    generation: u64,
}

impl Grid {
    /// Creates an all-dead grid with the B3/S23 rules and non-wrapping edges.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let size = width
            .checked_mul(height)
            .ok_or(GridError::InvalidDimensions { width, height })?;
        debug!("creating {width}x{height} grid");
        Ok(Grid {
            width,
            height,
            current: vec![false; size],
            next: vec![false; size],
            rules: RuleTable::default(),
            wrap: false,
            generation: 0,
        })
    }

    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, `width * height`.
    pub fn size(&self) -> usize {
        self.current.len()
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn set_rules(&mut self, rules: RuleTable) {
        self.rules = rules;
    }

    /// Whether opposite edges are adjacent.
    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    /// Number of generations advanced since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.iter().filter(|&&alive| alive).count()
    }

    pub fn index_of(&self, col: usize, row: usize) -> Result<usize, GridError> {
        if col >= self.width || row >= self.height {
            return Err(GridError::CoordOutOfRange {
                col,
                row,
                width: self.width,
                height: self.height,
            });
        }
        Ok(col + row * self.width)
    }

    pub fn coords_of(&self, idx: usize) -> Result<(usize, usize), GridError> {
        self.check_index(idx)?;
        Ok((idx % self.width, idx / self.width))
    }

    pub fn get(&self, idx: usize) -> Result<bool, GridError> {
        self.check_index(idx)?;
        Ok(self.current[idx])
    }

    pub fn set(&mut self, idx: usize, alive: bool) -> Result<(), GridError> {
        self.check_index(idx)?;
        self.current[idx] = alive;
        Ok(())
    }

    /// Flips a cell and returns its new state.
    pub fn toggle(&mut self, idx: usize) -> Result<bool, GridError> {
        self.check_index(idx)?;
        self.current[idx] = !self.current[idx];
        Ok(self.current[idx])
    }

    pub fn get_at(&self, col: usize, row: usize) -> Result<bool, GridError> {
        let idx = self.index_of(col, row)?;
        Ok(self.current[idx])
    }

    pub fn set_at(&mut self, col: usize, row: usize, alive: bool) -> Result<(), GridError> {
        let idx = self.index_of(col, row)?;
        self.current[idx] = alive;
        Ok(())
    }

    /// Kills every cell. Dimensions, rules and generation count are kept.
    pub fn clear(&mut self) {
        self.current.fill(false);
    }

    /// Live cells among the eight neighbours of `idx`.
    pub fn neighbour_count(&self, idx: usize) -> Result<u8, GridError> {
        let (col, row) = self.coords_of(idx)?;
        Ok(self.count_neighbours(col, row))
    }

    /// Computes the next generation into the scratch buffer, then swaps buffers.
    pub fn advance(&mut self) {
        for idx in 0..self.current.len() {
            let count = self.count_neighbours(idx % self.width, idx / self.width);
            self.next[idx] = self.rules.apply(count, self.current[idx]);
        }
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        trace!("advanced to generation {}", self.generation);
    }

    pub fn advance_by(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance();
        }
    }

    /// Seeds live cells at `floor(size * fraction)` uniformly drawn indices.
    ///
    /// Draws may repeat, so the resulting population can fall short of
    /// the draw count. Existing live cells are left alive. Returns the
    /// number of draws.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, fraction: f64) -> Result<usize, GridError> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(GridError::InvalidPopulation(fraction));
        }
        let size = self.current.len();
        let draws = (size as f64 * fraction) as usize;
        for _ in 0..draws {
            let idx = rng.random_range(0..size);
            self.current[idx] = true;
        }
        debug!(
            "seeded {draws} draws, population {} of {size}",
            self.population()
        );
        Ok(draws)
    }

    /// Borrowed row-major scan of the current generation.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.current.chunks_exact(self.width)
    }

    /// Owned copy of the current generation.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.width, self.height, self.current.clone())
    }

    fn check_index(&self, idx: usize) -> Result<(), GridError> {
        if idx >= self.current.len() {
            return Err(GridError::IndexOutOfRange {
                index: idx,
                size: self.current.len(),
            });
        }
        Ok(())
    }

    fn count_neighbours(&self, col: usize, row: usize) -> u8 {
        let mut count = 0;
        for &(dc, dr) in &SURROUND {
            let Some(neighbour_col) = shift(col, dc, self.width, self.wrap) else {
                continue;
            };
            let Some(neighbour_row) = shift(row, dr, self.height, self.wrap) else {
                continue;
            };
            if self.current[neighbour_col + neighbour_row * self.width] {
                count += 1;
            }
        }
        count
    }
}

/// Moves `pos` by `delta` along an axis of length `len`, wrapping around
/// when `wrap` is set and returning `None` past an edge otherwise.
fn shift(pos: usize, delta: isize, len: usize, wrap: bool) -> Option<usize> {
    let moved = pos as isize + delta;
    if (0..len as isize).contains(&moved) {
        Some(moved as usize)
    } else if wrap {
        Some(moved.rem_euclid(len as isize) as usize)
    } else {
        None
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.rows())
    }
}
