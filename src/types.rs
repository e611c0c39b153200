// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Variant selection.

use serde::Serialize;
use std::fmt;
use std::hash::Hash;

use crate::error::DistanceError;
use crate::{osa, unrestricted};

/// Which Damerau-Levenshtein distance to compute.
///
/// The two agree on most inputs and differ when a transposed pair needs a
/// further edit: `"ca" → "abc"` is 3 restricted, 2 unrestricted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Optimal String Alignment: adjacent swaps, never edited again.
    #[default]
    Restricted,
    /// Lowrance-Wagner: a swapped pair may be edited further. A true metric.
    Unrestricted,
}

impl Variant {
    /// Distance under this variant.
    pub fn distance<T: Eq + Hash>(self, a: &[T], b: &[T]) -> usize {
        match self {
            Variant::Restricted => osa::distance(a, b),
            Variant::Unrestricted => unrestricted::distance(a, b),
        }
    }

    /// Distance under this variant with allocation failure reported.
    pub fn try_distance<T: Eq + Hash>(self, a: &[T], b: &[T]) -> Result<usize, DistanceError> {
        match self {
            Variant::Restricted => osa::try_distance(a, b),
            Variant::Unrestricted => unrestricted::try_distance(a, b),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Restricted => "restricted",
            Variant::Unrestricted => "unrestricted",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
