//! Algebraic laws of the restricted distance and its table.

use crate::common::chars;
use damerau::{distance, distance_str, distance_within, unrestricted, DistanceTable};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short strings over a small alphabet, so symbols repeat and swaps happen.
fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcd]{0,12}").unwrap()
}

/// Mixed-script words with multi-byte scalars.
fn unicode_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[aéīṣ日本]{0,8}").unwrap()
}

/// A single elementary edit applied to a non-empty word.
#[derive(Debug, Clone)]
enum Edit {
    Insert(usize, char),
    Delete(usize),
    Substitute(usize, char),
    Transpose(usize),
}

fn apply(word: &[char], edit: &Edit) -> Vec<char> {
    let mut out = word.to_vec();
    match *edit {
        Edit::Insert(at, c) => out.insert(at.min(out.len()), c),
        Edit::Delete(at) => {
            out.remove(at % out.len());
        }
        Edit::Substitute(at, c) => {
            let at = at % out.len();
            out[at] = c;
        }
        Edit::Transpose(at) => {
            if out.len() >= 2 {
                let at = at % (out.len() - 1);
                out.swap(at, at + 1);
            }
        }
    }
    out
}

fn edit() -> impl Strategy<Value = Edit> {
    let sym = prop::sample::select(vec!['a', 'b', 'c', 'd', 'x']);
    prop_oneof![
        (0..16usize, sym.clone()).prop_map(|(i, c)| Edit::Insert(i, c)),
        (0..16usize).prop_map(Edit::Delete),
        (0..16usize, sym).prop_map(|(i, c)| Edit::Substitute(i, c)),
        (0..16usize).prop_map(Edit::Transpose),
    ]
}

// ============================================================================
// DISTANCE LAWS
// ============================================================================

proptest! {
    /// Property: distance(S, S) = 0.
    #[test]
    fn prop_identity(s in word()) {
        prop_assert_eq!(distance_str(&s, &s), 0);
    }

    /// Property: distance is zero only for identical sequences.
    #[test]
    fn prop_zero_iff_equal(a in word(), b in word()) {
        prop_assert_eq!(distance_str(&a, &b) == 0, a == b);
    }

    /// Property: distance(A, B) = distance(B, A).
    #[test]
    fn prop_symmetry(a in word(), b in word()) {
        prop_assert_eq!(distance_str(&a, &b), distance_str(&b, &a));
    }

    /// Property: symmetry over multi-byte scalars too.
    #[test]
    fn prop_symmetry_unicode(a in unicode_word(), b in unicode_word()) {
        prop_assert_eq!(distance_str(&a, &b), distance_str(&b, &a));
    }

    /// Property: distance("", S) = distance(S, "") = |S|.
    #[test]
    fn prop_base_cases(s in unicode_word()) {
        let n = s.chars().count();
        prop_assert_eq!(distance_str("", &s), n);
        prop_assert_eq!(distance_str(&s, ""), n);
    }

    /// Property: |m - n| <= distance <= max(m, n).
    #[test]
    fn prop_bounds(a in word(), b in word()) {
        let (m, n) = (a.len(), b.len());
        let d = distance_str(&a, &b);
        prop_assert!(d >= m.abs_diff(n), "{} < |{} - {}|", d, m, n);
        prop_assert!(d <= m.max(n), "{} > max({}, {})", d, m, n);
    }

    /// Property: one elementary edit changes the distance by at most one,
    /// and by exactly one whenever it changes the sequence.
    #[test]
    fn prop_single_edit(s in "[abcd]{1,12}", e in edit()) {
        let original = chars(&s);
        let edited = apply(&original, &e);
        let d = distance(&original, &edited);
        if edited == original {
            prop_assert_eq!(d, 0);
        } else {
            prop_assert_eq!(d, 1, "{:?} applied to {:?} gave {:?}", e, s, edited);
        }
    }

    /// Property: swapping two adjacent distinct symbols costs exactly one.
    #[test]
    fn prop_adjacent_swap_is_one(s in "[a-z]{2,12}", at in 0..11usize) {
        let mut swapped = chars(&s);
        let at = at % (swapped.len() - 1);
        prop_assume!(swapped[at] != swapped[at + 1]);
        swapped.swap(at, at + 1);
        prop_assert_eq!(distance(&chars(&s), &swapped), 1);
    }

    /// Property: the unrestricted distance is a metric.
    #[test]
    fn prop_unrestricted_triangle(a in word(), b in word(), c in word()) {
        let ab = unrestricted::distance_str(&a, &b);
        let bc = unrestricted::distance_str(&b, &c);
        let ac = unrestricted::distance_str(&a, &c);
        prop_assert!(ac <= ab + bc, "d({:?},{:?})={} > {} + {}", a, c, ac, ab, bc);
    }

    /// Property: the unrestricted distance never exceeds the restricted one.
    #[test]
    fn prop_unrestricted_at_most_restricted(a in word(), b in word()) {
        prop_assert!(unrestricted::distance_str(&a, &b) <= distance_str(&a, &b));
    }
}

// ============================================================================
// BOUNDED ENGINE
// ============================================================================

proptest! {
    /// Property: distance_within(a, b, k) = Some(d) iff d <= k.
    #[test]
    fn prop_within_consistent(a in word(), b in word(), k in 0..14usize) {
        let (a, b) = (chars(&a), chars(&b));
        let d = distance(&a, &b);
        let bounded = distance_within(&a, &b, k);
        if d <= k {
            prop_assert_eq!(bounded, Some(d));
        } else {
            prop_assert_eq!(bounded, None);
        }
    }
}

// ============================================================================
// TABLE INVARIANTS
// ============================================================================

proptest! {
    /// Property: boundary row and column hold the base cases.
    #[test]
    fn prop_table_boundaries(a in word(), b in word()) {
        let t = DistanceTable::build(a.as_bytes(), b.as_bytes()).unwrap();
        for i in 0..t.rows() {
            prop_assert_eq!(t.get(i, 0), Some(i));
        }
        for j in 0..t.cols() {
            prop_assert_eq!(t.get(0, j), Some(j));
        }
    }

    /// Property: every cell obeys |i - j| <= D[i][j] <= max(i, j)
    /// and D[i][j] <= D[i-1][j-1] + 1.
    #[test]
    fn prop_table_cell_bounds(a in word(), b in word()) {
        let t = DistanceTable::build(a.as_bytes(), b.as_bytes()).unwrap();
        for i in 0..t.rows() {
            for j in 0..t.cols() {
                let d = t.get(i, j).unwrap();
                prop_assert!(d >= i.abs_diff(j) && d <= i.max(j));
                if i > 0 && j > 0 {
                    prop_assert!(d <= t.get(i - 1, j - 1).unwrap() + 1);
                }
            }
        }
    }

    /// Property: the table's corner is the rolling engine's answer.
    #[test]
    fn prop_table_corner_matches_engine(a in unicode_word(), b in unicode_word()) {
        let (a, b) = (chars(&a), chars(&b));
        let t = DistanceTable::build(&a, &b).unwrap();
        prop_assert_eq!(t.distance(), distance(&a, &b));
    }
}
