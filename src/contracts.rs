// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the distance recurrence.
//!
//! Debug-mode assertions over a filled table. They are zero-cost in release
//! builds (`debug_assert!`) and fire early during development when the
//! recurrence is broken.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                   |
//! |----------------------------|--------------------------------------------|
//! | `check_boundaries`         | `D[i][0] = i`, `D[0][j] = j`               |
//! | `check_cell_bounds`        | `|i - j| ≤ D[i][j] ≤ max(i, j)`            |
//! | `check_substitution_bound` | `D[i][j] ≤ D[i-1][j-1] + 1`                |
//! | `check_result_bounds`      | `|m - n| ≤ d ≤ max(m, n)`                  |
//! | `check_table_well_formed`  | All of the above                           |
//!
//! Tables are row-major: cell `(i, j)` lives at `i * cols + j`.

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that a final distance lies between the length gap and the longer length.
#[inline]
pub fn check_result_bounds(distance: usize, m: usize, n: usize) {
    debug_assert!(
        distance >= m.abs_diff(n),
        "distance {} below length gap |{} - {}|",
        distance,
        m,
        n
    );
    debug_assert!(
        distance <= m.max(n),
        "distance {} above max({}, {})",
        distance,
        m,
        n
    );
}

// ============================================================================
// TABLE CONTRACTS
// ============================================================================

/// Check row 0 and column 0 hold the insertion/deletion base cases.
#[inline]
pub fn check_boundaries(cells: &[usize], rows: usize, cols: usize) {
    debug_assert_eq!(cells.len(), rows * cols, "table size mismatch");
    for i in 0..rows {
        debug_assert_eq!(cells[i * cols], i, "D[{}][0] != {}", i, i);
    }
    for j in 0..cols {
        debug_assert_eq!(cells[j], j, "D[0][{}] != {}", j, j);
    }
}

/// Check every cell sits between its prefix length gap and the longer prefix.
#[inline]
pub fn check_cell_bounds(cells: &[usize], rows: usize, cols: usize) {
    for i in 0..rows {
        for j in 0..cols {
            let d = cells[i * cols + j];
            debug_assert!(
                d >= i.abs_diff(j) && d <= i.max(j),
                "D[{}][{}] = {} outside [{}, {}]",
                i,
                j,
                d,
                i.abs_diff(j),
                i.max(j)
            );
        }
    }
}

/// Check that a substitution step is never beaten by more than one.
#[inline]
pub fn check_substitution_bound(cells: &[usize], rows: usize, cols: usize) {
    for i in 1..rows {
        for j in 1..cols {
            let d = cells[i * cols + j];
            let diag = cells[(i - 1) * cols + (j - 1)];
            debug_assert!(
                d <= diag + 1,
                "D[{}][{}] = {} exceeds D[{}][{}] + 1 = {}",
                i,
                j,
                d,
                i - 1,
                j - 1,
                diag + 1
            );
        }
    }
}

/// Run every table contract.
///
/// # Panics (debug builds only)
/// Panics on the first violated invariant.
#[inline]
pub fn check_table_well_formed(cells: &[usize], rows: usize, cols: usize) {
    #[cfg(debug_assertions)]
    {
        check_boundaries(cells, rows, cols);
        check_cell_bounds(cells, rows, cols);
        check_substitution_bound(cells, rows, cols);
    }
    #[cfg(not(debug_assertions))]
    let _ = (cells, rows, cols);
}
