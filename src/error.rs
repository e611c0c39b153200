// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Resource errors.
//!
//! Edit distance is total over finite sequences, so there is no domain error
//! here. The only thing that can go wrong is memory: the table is `O(m·n)`
//! cells (or three rows for the rolling engine) and the allocator may refuse.

use std::collections::TryReserveError;
use std::fmt;

/// Failure to obtain storage for a distance table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// `rows * cols` does not fit in `usize`.
    CapacityOverflow { rows: usize, cols: usize },
    /// The allocator refused a reservation of `cells` table cells.
    Allocation {
        cells: usize,
        source: TryReserveError,
    },
}

impl fmt::Display for DistanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceError::CapacityOverflow { rows, cols } => {
                write!(f, "distance table of {} x {} cells overflows usize", rows, cols)
            }
            DistanceError::Allocation { cells, source } => {
                write!(f, "failed to allocate {} table cells: {}", cells, source)
            }
        }
    }
}

impl std::error::Error for DistanceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DistanceError::CapacityOverflow { .. } => None,
            DistanceError::Allocation { source, .. } => Some(source),
        }
    }
}

/// Allocate a zeroed `Vec<usize>` of `cells` elements, reporting failure instead of aborting.
pub(crate) fn try_zeroed(cells: usize) -> Result<Vec<usize>, DistanceError> {
    let mut v = Vec::new();
    if let Err(source) = v.try_reserve_exact(cells) {
        log::debug!("reservation of {} cells failed: {}", cells, source);
        return Err(DistanceError::Allocation { cells, source });
    }
    v.resize(cells, 0);
    Ok(v)
}

/// Cell count of a `rows x cols` grid, or `CapacityOverflow`.
pub(crate) fn grid_cells(rows: usize, cols: usize) -> Result<usize, DistanceError> {
    rows.checked_mul(cols).ok_or_else(|| {
        log::debug!("table of {} x {} cells overflows usize", rows, cols);
        DistanceError::CapacityOverflow { rows, cols }
    })
}
