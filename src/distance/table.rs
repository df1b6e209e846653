//! Dense row-major cost table.

use std::ops::{Index, IndexMut};

/// A `rows × cols` table of costs stored in one allocation.
#[derive(Debug, Clone)]
pub(crate) struct Table {
    cells: Vec<f64>,
    cols: usize,
}

impl Table {
    /// Allocate a zeroed table.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![0.0; rows * cols],
            cols,
        }
    }
}

impl Index<(usize, usize)> for Table {
    type Output = f64;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        debug_assert!(col < self.cols);
        &self.cells[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Table {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        debug_assert!(col < self.cols);
        &mut self.cells[row * self.cols + col]
    }
}
