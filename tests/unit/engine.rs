//! Restricted engine: worked examples, edge cases and the bounded form.

use crate::common::{chars, WORKED_EXAMPLES};
use damerau::{distance, distance_bytes, distance_str, distance_str_within, distance_within, try_distance};

#[test]
fn test_worked_examples() {
    for &(a, b, expected, _, _) in WORKED_EXAMPLES {
        assert_eq!(distance_str(a, b), expected, "{:?} vs {:?}", a, b);
    }
}

#[test]
fn test_empty_inputs() {
    assert_eq!(distance::<u8>(&[], &[]), 0);
    assert_eq!(distance_str("", "abc"), 3);
    assert_eq!(distance_str("abc", ""), 3);
}

#[test]
fn test_transposition_beats_levenshtein() {
    // One adjacent swap; plain Levenshtein would need two substitutions.
    assert_eq!(distance_str("ab", "ba"), 1);
    assert_ne!(distance_str("ab", "ba"), 2);
}

#[test]
fn test_swap_then_edit_is_not_one_move() {
    // Restricted: "ca" -> "ac" -> "abc" would edit the swapped pair again.
    assert_eq!(distance_str("ca", "abc"), 3);
}

#[test]
fn test_non_adjacent_swap_costs_two() {
    assert_eq!(distance_str("abc", "cba"), 2);
    assert_eq!(distance_str("abcd", "dbca"), 2);
}

#[test]
fn test_repeated_symbols() {
    assert_eq!(distance_str("aaaa", "aaa"), 1);
    assert_eq!(distance_str("aabb", "abab"), 1);
    assert_eq!(distance_str("abba", "baab"), 2);
}

#[test]
fn test_unicode_scalars() {
    assert_eq!(distance_str("tōkyō", "tkōyō"), 1);
    assert_eq!(distance_str("తెలుగు", "తెలుగు"), 0);
    assert_eq!(distance_str("naïve", "naive"), 1);
}

#[test]
fn test_byte_unit_sees_encoding() {
    // ï is two bytes in UTF-8, both different from 'i'
    assert_eq!(distance_bytes("naïve".as_bytes(), b"naive"), 2);
}

#[test]
fn test_token_sequences() {
    let a = ["fn", "main", "(", ")"];
    let b = ["fn", "(", "main", ")"];
    assert_eq!(distance(&a, &b), 1);
}

#[test]
fn test_try_distance_agrees() {
    for &(a, b, expected, _, _) in WORKED_EXAMPLES {
        assert_eq!(try_distance(&chars(a), &chars(b)), Ok(expected));
    }
}

#[test]
fn test_within_exact_budget() {
    for &(a, b, expected, _, _) in WORKED_EXAMPLES {
        assert_eq!(distance_str_within(a, b, expected), Some(expected));
        if expected > 0 {
            assert_eq!(distance_str_within(a, b, expected - 1), None, "{:?} vs {:?}", a, b);
        }
    }
}

#[test]
fn test_within_zero_budget() {
    assert_eq!(distance_within(b"same", b"same", 0), Some(0));
    assert_eq!(distance_within(b"same", b"sane", 0), None);
}
