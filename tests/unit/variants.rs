//! Restricted vs unrestricted vs plain Levenshtein.

use crate::common::{chars, WORKED_EXAMPLES};
use damerau::{levenshtein, levenshtein_within, unrestricted, Variant};

#[test]
fn test_unrestricted_worked_examples() {
    for &(a, b, _, expected, _) in WORKED_EXAMPLES {
        assert_eq!(unrestricted::distance_str(a, b), expected, "{:?} vs {:?}", a, b);
    }
}

#[test]
fn test_levenshtein_worked_examples() {
    for &(a, b, _, _, expected) in WORKED_EXAMPLES {
        assert_eq!(levenshtein::distance(&chars(a), &chars(b)), expected, "{:?} vs {:?}", a, b);
    }
}

#[test]
fn test_ordering_between_variants() {
    // unrestricted <= restricted <= levenshtein on every example
    for &(_, _, restricted, unrestricted, lev) in WORKED_EXAMPLES {
        assert!(unrestricted <= restricted);
        assert!(restricted <= lev);
    }
}

#[test]
fn test_variant_dispatch() {
    let (a, b) = (chars("ca"), chars("abc"));
    assert_eq!(Variant::Restricted.distance(&a, &b), 3);
    assert_eq!(Variant::Unrestricted.distance(&a, &b), 2);
    assert_eq!(Variant::Unrestricted.try_distance(&a, &b), Ok(2));
}

#[test]
fn test_restricted_triangle_counterexample() {
    // CA -> AC -> ABC costs 1 + 1 but the direct restricted distance is 3.
    let restricted = |a: &str, b: &str| Variant::Restricted.distance(&chars(a), &chars(b));
    assert_eq!(restricted("CA", "AC"), 1);
    assert_eq!(restricted("AC", "ABC"), 1);
    assert_eq!(restricted("CA", "ABC"), 3);
    // The unrestricted metric respects the triangle.
    assert_eq!(unrestricted::distance_str("CA", "ABC"), 2);
}

#[test]
fn test_levenshtein_within() {
    assert!(levenshtein_within("ab", "ba", 2));
    assert!(!levenshtein_within("ab", "ba", 1));
    assert_eq!(levenshtein::distance_within(b"flaw", b"lawn", 2), Some(2));
}
