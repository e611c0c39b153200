// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain Levenshtein distance, the baseline without transpositions.
//!
//! Kept next to the Damerau engines so the one thing that separates them is
//! easy to see: `"ab" → "ba"` is 2 here and 1 there.
//!
//! The bounded form uses the same two early exits as
//! [`crate::osa::distance_within`]: the length gap is a lower bound, and row
//! minima never decrease.

/// Levenshtein distance with two rolling rows.
pub fn distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, x) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, y) in b.iter().enumerate() {
            let cost = usize::from(x != y);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Levenshtein distance if it is at most `max`.
pub fn distance_within<T: PartialEq>(a: &[T], b: &[T], max: usize) -> Option<usize> {
    if a.len().abs_diff(b.len()) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b.len()).collect();
    for (i, x) in a.iter().enumerate() {
        let mut diag = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, y) in b.iter().enumerate() {
            let up = dp[j + 1];
            let cost = usize::from(x != y);
            dp[j + 1] = (up + 1).min(dp[j] + 1).min(diag + cost);
            diag = up;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    let d = dp[b.len()];
    (d <= max).then_some(d)
}

/// Are these strings within `max` Levenshtein edits, counting Unicode scalar values?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance_within(&a, &b, max).is_some()
}
