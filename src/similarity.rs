// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Distances scaled into `[0, 1]`.
//!
//! The restricted distance never exceeds the longer length, so dividing by it
//! gives a ratio. Two empty sequences are identical: distance 0, similarity 1.

use crate::osa;

/// `distance / max(m, n)`, 0.0 when both are empty.
pub fn normalized_distance<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 0.0;
    }
    osa::distance(a, b) as f64 / max_len as f64
}

/// `1 - normalized_distance`.
pub fn similarity<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    1.0 - normalized_distance(a, b)
}

/// [`normalized_distance`] over Unicode scalar values.
pub fn normalized_distance_str(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    normalized_distance(&a, &b)
}

/// [`similarity`] over Unicode scalar values.
pub fn similarity_str(a: &str, b: &str) -> f64 {
    1.0 - normalized_distance_str(a, b)
}
