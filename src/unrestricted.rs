// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unrestricted Damerau-Levenshtein distance (Lowrance-Wagner).
//!
//! Unlike [`crate::osa`], a transposed pair may be edited further, so
//! `"ca" → "abc"` is 2 (swap to `"ac"`, insert `b`) rather than 3. This
//! variant is a true metric. The price is a full table plus a map from each
//! symbol to the last row it appeared in, which is why symbols must be
//! hashable here.
//!
//! The table carries a sentinel row and column holding `m + n`, so the
//! transposition lookup `D[k-1][l-1]` never needs a bounds check.

use std::hash::Hash;

use ahash::AHashMap;

use crate::contracts::check_result_bounds;
use crate::error::{grid_cells, try_zeroed, DistanceError};

fn fill<T: Eq + Hash>(a: &[T], b: &[T], cells: &mut [usize]) -> usize {
    let m = a.len();
    let n = b.len();
    let cols = n + 2;
    let inf = m + n;
    let at = |i: usize, j: usize| i * cols + j;

    cells[at(0, 0)] = inf;
    for i in 0..=m {
        cells[at(i + 1, 0)] = inf;
        cells[at(i + 1, 1)] = i;
    }
    for j in 0..=n {
        cells[at(0, j + 1)] = inf;
        cells[at(1, j + 1)] = j;
    }

    // Last row (1-based) of `a` holding each symbol.
    let mut last_row: AHashMap<&T, usize> = AHashMap::new();

    for i in 1..=m {
        // Last column (1-based) in this row where `a[i-1]` matched.
        let mut last_match_col = 0;

        for j in 1..=n {
            let k = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let l = last_match_col;

            let cost = if a[i - 1] == b[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };

            cells[at(i + 1, j + 1)] = (cells[at(i, j)] + cost) // substitution
                .min(cells[at(i + 1, j)] + 1) // insertion
                .min(cells[at(i, j + 1)] + 1) // deletion
                .min(cells[at(k, l)] + (i - k - 1) + 1 + (j - l - 1)); // transposition
        }

        last_row.insert(&a[i - 1], i);
    }

    cells[at(m + 1, n + 1)]
}

/// Unrestricted Damerau-Levenshtein distance.
///
/// Allocation failure aborts; see [`try_distance`].
///
/// # Panics
///
/// If the `(m+2) × (n+2)` cell count overflows `usize`.
///
/// ```
/// use damerau::unrestricted;
///
/// assert_eq!(unrestricted::distance(b"ca", b"abc"), 2);
/// assert_eq!(damerau::distance(b"ca", b"abc"), 3);
/// ```
pub fn distance<T: Eq + Hash>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    let total = match grid_cells(a.len() + 2, b.len() + 2) {
        Ok(total) => total,
        Err(e) => panic!("{}", e),
    };
    let mut cells = vec![0; total];
    let d = fill(a, b, &mut cells);
    check_result_bounds(d, a.len(), b.len());
    d
}

/// [`distance`] with the `(m+2) × (n+2)` table allocated fallibly.
pub fn try_distance<T: Eq + Hash>(a: &[T], b: &[T]) -> Result<usize, DistanceError> {
    if a.is_empty() {
        return Ok(b.len());
    }
    if b.is_empty() {
        return Ok(a.len());
    }
    let total = grid_cells(a.len() + 2, b.len() + 2)?;
    log::trace!("allocating {} x {} unrestricted table", a.len() + 2, b.len() + 2);
    let mut cells = try_zeroed(total)?;
    let d = fill(a, b, &mut cells);
    check_result_bounds(d, a.len(), b.len());
    Ok(d)
}

/// Unrestricted distance over Unicode scalar values.
pub fn distance_str(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance(&a, &b)
}
