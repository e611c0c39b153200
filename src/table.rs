// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The full `(m+1) × (n+1)` distance table.
//!
//! The rolling engine in [`crate::osa`] throws rows away as soon as the
//! transposition can no longer reach them. Sometimes you want to look at the
//! whole thing: to check the invariants cell by cell, to print it, or to see
//! where a transposition actually paid off. This builds the same recurrence
//! into one flat row-major allocation, cell `(i, j)` at `i * (n+1) + j`.

use crate::contracts::check_table_well_formed;
use crate::error::{grid_cells, try_zeroed, DistanceError};

/// A filled restricted Damerau-Levenshtein table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    cells: Vec<usize>,
    /// Cells where the transposition branch was strictly better.
    swaps: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl DistanceTable {
    /// Fill the table for `a` (rows) against `b` (columns).
    ///
    /// Fails only if the grid does not fit in memory.
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Result<Self, DistanceError> {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let total = grid_cells(rows, cols)?;
        log::trace!("allocating {} x {} distance table", rows, cols);

        let mut cells = try_zeroed(total)?;
        let mut swaps = Vec::new();
        swaps
            .try_reserve_exact(total)
            .map_err(|source| DistanceError::Allocation {
                cells: total,
                source,
            })?;
        swaps.resize(total, false);

        for i in 0..rows {
            cells[i * cols] = i;
        }
        for j in 0..cols {
            cells[j] = j;
        }

        for i in 1..rows {
            for j in 1..cols {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                let here = i * cols + j;
                let up = (i - 1) * cols + j;
                let diag = (i - 1) * cols + (j - 1);

                let mut d = (cells[up] + 1)
                    .min(cells[here - 1] + 1)
                    .min(cells[diag] + cost);

                if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                    let swapped = cells[(i - 2) * cols + (j - 2)] + cost;
                    if swapped < d {
                        d = swapped;
                        swaps[here] = true;
                    }
                }

                cells[here] = d;
            }
        }

        check_table_well_formed(&cells, rows, cols);
        Ok(Self {
            cells,
            swaps,
            rows,
            cols,
        })
    }

    /// `m + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `n + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `D[i][j]`, or `None` outside the grid.
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> Option<&[usize]> {
        if i < self.rows {
            Some(&self.cells[i * self.cols..(i + 1) * self.cols])
        } else {
            None
        }
    }

    /// Did the transposition branch strictly improve `D[i][j]`?
    pub fn transposed(&self, i: usize, j: usize) -> bool {
        i < self.rows && j < self.cols && self.swaps[i * self.cols + j]
    }

    /// `D[m][n]`, the distance between the full sequences.
    pub fn distance(&self) -> usize {
        self.cells[self.rows * self.cols - 1]
    }
}
