// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the restricted distance recurrence.
//!
//! This standalone crate extracts the recurrence from `src/osa.rs` onto
//! fixed-size stack arrays and checks it exhaustively for short inputs.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: no index is out of bounds and nothing overflows
//! 2. **Bounds**: `|m - n| <= d <= max(m, n)`
//! 3. **Identity**: `d(a, a) = 0`, and `d = 0` only for equal inputs
//! 4. **Symmetry**: `d(a, b) = d(b, a)`
//! 5. **Swap**: one adjacent swap of distinct symbols costs exactly 1

/// Longest input the proofs cover.
pub const MAX_LEN: usize = 4;

// ============================================================================
// RECURRENCE (extracted from src/osa.rs onto fixed-size arrays)
// ============================================================================

/// Restricted Damerau-Levenshtein distance over the first `m` / `n` symbols.
pub fn osa(a: &[u8; MAX_LEN], m: usize, b: &[u8; MAX_LEN], n: usize) -> usize {
    let mut d = [[0usize; MAX_LEN + 1]; MAX_LEN + 1];

    for i in 0..=m {
        d[i][0] = i;
    }
    for j in 0..=n {
        d[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut v = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                v = v.min(d[i - 2][j - 2] + cost);
            }
            d[i][j] = v;
        }
    }

    d[m][n]
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic sequence over a 3-letter alphabet, with its length.
    fn any_seq() -> ([u8; MAX_LEN], usize) {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut s = [0u8; MAX_LEN];
        for slot in s.iter_mut() {
            *slot = kani::any_where(|&c: &u8| c < 3);
        }
        (s, len)
    }

    fn prefix_eq(a: &[u8; MAX_LEN], m: usize, b: &[u8; MAX_LEN], n: usize) -> bool {
        m == n && a[..m] == b[..n]
    }

    /// Verify the distance stays between the length gap and the longer length.
    #[kani::proof]
    #[kani::unwind(6)] // MAX_LEN + 2
    fn verify_bounds() {
        let (a, m) = any_seq();
        let (b, n) = any_seq();
        let d = osa(&a, m, &b, n);

        kani::assert(d >= m.abs_diff(n), "distance below length gap");
        kani::assert(d <= m.max(n), "distance above longer length");
    }

    /// Verify d = 0 exactly for equal sequences.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_zero_iff_equal() {
        let (a, m) = any_seq();
        let (b, n) = any_seq();
        let d = osa(&a, m, &b, n);

        kani::assert((d == 0) == prefix_eq(&a, m, &b, n), "zero iff equal");
    }

    /// Verify symmetry.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_symmetry() {
        let (a, m) = any_seq();
        let (b, n) = any_seq();

        kani::assert(osa(&a, m, &b, n) == osa(&b, n, &a, m), "distance must be symmetric");
    }

    /// Verify one adjacent swap of distinct symbols costs exactly 1.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_adjacent_swap() {
        let (a, m) = any_seq();
        kani::assume(m >= 2);
        let at: usize = kani::any_where(|&k| k + 1 < m);
        kani::assume(a[at] != a[at + 1]);

        let mut b = a;
        b.swap(at, at + 1);

        kani::assert(osa(&a, m, &b, m) == 1, "adjacent swap must cost 1");
    }
}
