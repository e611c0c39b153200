// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Damerau-Levenshtein edit distance over arbitrary symbol sequences.
//!
//! The distance between two sequences is the fewest single-symbol insertions,
//! deletions, substitutions and adjacent transpositions that turn one into the
//! other. Symbols are anything with `==`; splitting text into bytes, code
//! points or graphemes is the caller's call, not ours.
//!
//! # Which Damerau-Levenshtein?
//!
//! Two algorithms go by the name and they disagree. [`distance`] is the
//! *restricted* variant, also called Optimal String Alignment: a transposed
//! pair is never edited again. [`unrestricted::distance`] lifts that rule and
//! is a true metric. On `"ca" → "abc"` the first says 3, the second 2.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌───────────────┐   ┌────────────────┐
//! │    osa.rs    │   │   table.rs    │   │ unrestricted.rs│
//! │ (3 rolling   │   │ (full grid,   │   │ (Lowrance-     │
//! │  rows)       │   │  inspectable) │   │  Wagner)       │
//! └──────────────┘   └───────────────┘   └────────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    contracts.rs                      │
//! │  (boundary rows, cell bounds, substitution bound)   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! | Module          | Computes                                  | Memory        |
//! |-----------------|-------------------------------------------|---------------|
//! | `osa`           | Restricted distance, bounded form         | 3 rows        |
//! | `table`         | Restricted distance, every cell kept      | `(m+1)(n+1)`  |
//! | `unrestricted`  | Unrestricted distance                     | `(m+2)(n+2)`  |
//! | `levenshtein`   | Plain edit distance (no transpositions)   | 2 rows        |
//! | `similarity`    | Restricted distance scaled into `[0, 1]`  | 3 rows        |
//!
//! # Usage
//!
//! ```
//! use damerau::{distance, distance_str, DistanceTable};
//!
//! assert_eq!(distance_str("kitten", "sitting"), 3);
//! assert_eq!(distance(b"ab", b"ba"), 1);
//!
//! let table = DistanceTable::build(b"ab", b"ba").unwrap();
//! assert_eq!(table.get(2, 2), Some(1));
//! ```

pub mod contracts;
mod error;
pub mod levenshtein;
pub mod osa;
mod similarity;
mod table;
mod types;
pub mod unrestricted;

// Re-exports for public API
pub use error::DistanceError;
pub use levenshtein::levenshtein_within;
pub use osa::{
    distance, distance_bytes, distance_str, distance_str_within, distance_within, try_distance,
    try_distance_within,
};
pub use similarity::{normalized_distance, normalized_distance_str, similarity, similarity_str};
pub use table::DistanceTable;
pub use types::Variant;
