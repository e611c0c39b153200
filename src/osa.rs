// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Restricted Damerau-Levenshtein distance (Optimal String Alignment).
//!
//! Levenshtein plus one extra move: swapping two *adjacent* symbols costs one
//! edit. This is the restricted variant. A transposed pair is never edited
//! again, so `"ca" → "abc"` costs 3 here even though "swap, then insert" would
//! be 2 under the unrestricted metric (see [`crate::unrestricted`]). Because of
//! that the restricted distance is not a metric: the triangle inequality fails
//! for `CA → AC → ABC`.
//!
//! # The recurrence
//!
//! ```text
//! D[i][0] = i
//! D[0][j] = j
//! cost    = A[i-1] != B[j-1]
//! D[i][j] = min(D[i-1][j] + 1, D[i][j-1] + 1, D[i-1][j-1] + cost)
//! if A[i-1] == B[j-2] && A[i-2] == B[j-1]:
//!     D[i][j] = min(D[i][j], D[i-2][j-2] + cost)
//! ```
//!
//! The transposition term reuses `cost` from the current cell. It is not
//! recomputed from the swapped pair.
//!
//! The transposition looks two rows back, so the rolling engine keeps three
//! rows instead of the two that plain Levenshtein needs.

use crate::contracts::check_result_bounds;
use crate::error::{try_zeroed, DistanceError};

/// Three rolling rows of the distance table.
struct Rows {
    prev2: Vec<usize>,
    prev: Vec<usize>,
    curr: Vec<usize>,
}

impl Rows {
    fn try_new(cols: usize) -> Result<Self, DistanceError> {
        log::trace!("allocating 3 rolling rows of {} cells", cols);
        let prev2 = try_zeroed(cols)?;
        let mut prev = try_zeroed(cols)?;
        let curr = try_zeroed(cols)?;
        for (j, cell) in prev.iter_mut().enumerate() {
            *cell = j;
        }
        Ok(Self { prev2, prev, curr })
    }

    fn new(cols: usize) -> Self {
        Self {
            prev2: vec![0; cols],
            prev: (0..cols).collect(),
            curr: vec![0; cols],
        }
    }

    /// Fill rows until done or until a whole row exceeds `max`.
    fn run_within<T: PartialEq>(mut self, a: &[T], b: &[T], max: usize) -> Option<usize> {
        for i in 1..=a.len() {
            if self.fill(a, b, i) > max {
                return None;
            }
            self.rotate();
        }
        let d = self.last();
        (d <= max).then_some(d)
    }

    /// Fill the row for prefix `A[..i]` and return its minimum.
    #[inline]
    fn fill<T: PartialEq>(&mut self, a: &[T], b: &[T], i: usize) -> usize {
        let ai = &a[i - 1];
        self.curr[0] = i;
        let mut row_min = i;

        for j in 1..=b.len() {
            let cost = usize::from(*ai != b[j - 1]);

            let mut d = (self.prev[j] + 1) // deletion
                .min(self.curr[j - 1] + 1) // insertion
                .min(self.prev[j - 1] + cost); // substitution

            if i > 1 && j > 1 && *ai == b[j - 2] && a[i - 2] == b[j - 1] {
                d = d.min(self.prev2[j - 2] + cost); // transposition
            }

            self.curr[j] = d;
            row_min = row_min.min(d);
        }

        row_min
    }

    /// Shift rows up by one: `prev` becomes `prev2`, `curr` becomes `prev`.
    #[inline]
    fn rotate(&mut self) {
        std::mem::swap(&mut self.prev2, &mut self.prev);
        std::mem::swap(&mut self.prev, &mut self.curr);
    }

    #[inline]
    fn last(&self) -> usize {
        self.prev[self.prev.len() - 1]
    }
}

/// Answers that need no table: identical inputs and an empty side.
#[inline]
fn trivial<T: PartialEq>(a: &[T], b: &[T]) -> Option<usize> {
    if a.is_empty() {
        Some(b.len())
    } else if b.is_empty() {
        Some(a.len())
    } else if a == b {
        Some(0)
    } else {
        None
    }
}

fn run<T: PartialEq>(a: &[T], b: &[T], mut rows: Rows) -> usize {
    for i in 1..=a.len() {
        rows.fill(a, b, i);
        rows.rotate();
    }
    rows.last()
}

/// Restricted Damerau-Levenshtein distance between two symbol sequences.
///
/// Symbols are compared with `==` only; what counts as a symbol (bytes, code
/// points, graphemes, tokens) is the caller's choice.
///
/// Memory is three rows of `b.len() + 1` cells. Allocation failure aborts like
/// any `Vec`; use [`try_distance`] to get it back as an error instead.
///
/// # Examples
///
/// ```
/// use damerau::distance;
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// assert_eq!(distance(&a, &b), 3);
/// assert_eq!(distance(b"ab", b"ba"), 1);
/// ```
pub fn distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if let Some(d) = trivial(a, b) {
        return d;
    }
    let d = run(a, b, Rows::new(b.len() + 1));
    check_result_bounds(d, a.len(), b.len());
    d
}

/// [`distance`] with allocation failure reported as [`DistanceError`].
pub fn try_distance<T: PartialEq>(a: &[T], b: &[T]) -> Result<usize, DistanceError> {
    if let Some(d) = trivial(a, b) {
        return Ok(d);
    }
    let d = run(a, b, Rows::try_new(b.len() + 1)?);
    check_result_bounds(d, a.len(), b.len());
    Ok(d)
}

/// Distance over Unicode scalar values.
///
/// ```
/// assert_eq!(damerau::distance_str("ca", "abc"), 3);
/// assert_eq!(damerau::distance_str("café", "caéf"), 1);
/// ```
pub fn distance_str(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance(&a, &b)
}

/// Distance over raw bytes.
pub fn distance_bytes(a: &[u8], b: &[u8]) -> usize {
    distance(a, b)
}

/// Is the distance at most `max`? Returns the distance if so.
///
/// Two early exits keep non-matches cheap:
/// 1. The length gap `|m - n|` is a lower bound, so a gap over `max` returns
///    `None` before allocating.
/// 2. Row minima never decrease (a transposition value is at least the
///    diagonal predecessor it skips, which sits in the previous row), so once a
///    whole row exceeds `max` no later row can come back under it.
///
/// ```
/// use damerau::distance_within;
///
/// assert_eq!(distance_within(b"hello", b"hlelo", 1), Some(1));
/// assert_eq!(distance_within(b"a", b"abcdef", 2), None);
/// ```
pub fn distance_within<T: PartialEq>(a: &[T], b: &[T], max: usize) -> Option<usize> {
    if a.len().abs_diff(b.len()) > max {
        return None;
    }
    if let Some(d) = trivial(a, b) {
        return (d <= max).then_some(d);
    }
    Rows::new(b.len() + 1).run_within(a, b, max)
}

/// [`distance_within`] with allocation failure reported as [`DistanceError`].
///
/// The length-gap exit still happens before anything is allocated.
pub fn try_distance_within<T: PartialEq>(
    a: &[T],
    b: &[T],
    max: usize,
) -> Result<Option<usize>, DistanceError> {
    if a.len().abs_diff(b.len()) > max {
        return Ok(None);
    }
    if let Some(d) = trivial(a, b) {
        return Ok((d <= max).then_some(d));
    }
    Ok(Rows::try_new(b.len() + 1)?.run_within(a, b, max))
}

/// [`distance_within`] over Unicode scalar values.
pub fn distance_str_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance_within(&a, &b, max)
}
