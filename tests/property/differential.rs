//! Differential tests against the literal recurrence and against `strsim`.
//!
//! The oracle in `common` fills a full `Vec<Vec<usize>>` exactly as the
//! recurrence reads. `strsim` is an independent implementation of all three
//! distances; agreeing with it catches mistakes the oracle would share.

use crate::common::{chars, oracle_distance};
use damerau::{distance, distance_str, levenshtein, unrestricted, DistanceTable};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,10}").unwrap()
}

fn unicode_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-eéü日]{0,16}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Rolling three-row engine == full-matrix oracle.
    #[test]
    fn prop_engine_matches_oracle(a in word(), b in word()) {
        let (a, b) = (chars(&a), chars(&b));
        prop_assert_eq!(distance(&a, &b), oracle_distance(&a, &b));
    }

    /// Flat table == full-matrix oracle.
    #[test]
    fn prop_table_matches_oracle(a in word(), b in word()) {
        let t = DistanceTable::build(a.as_bytes(), b.as_bytes()).unwrap();
        prop_assert_eq!(t.distance(), oracle_distance(a.as_bytes(), b.as_bytes()));
    }

    /// Restricted engine == strsim::osa_distance.
    #[test]
    fn prop_restricted_matches_strsim(a in unicode_word(), b in unicode_word()) {
        prop_assert_eq!(distance_str(&a, &b), strsim::osa_distance(&a, &b));
    }

    /// Unrestricted engine == strsim::damerau_levenshtein.
    #[test]
    fn prop_unrestricted_matches_strsim(a in unicode_word(), b in unicode_word()) {
        prop_assert_eq!(unrestricted::distance_str(&a, &b), strsim::damerau_levenshtein(&a, &b));
    }

    /// Levenshtein == strsim::levenshtein.
    #[test]
    fn prop_levenshtein_matches_strsim(a in unicode_word(), b in unicode_word()) {
        prop_assert_eq!(
            levenshtein::distance(&chars(&a), &chars(&b)),
            strsim::levenshtein(&a, &b)
        );
    }
}

#[test]
fn test_restricted_and_unrestricted_disagree_somewhere() {
    // strsim draws the same line between the two variants.
    assert_eq!(strsim::osa_distance("ca", "abc"), 3);
    assert_eq!(strsim::damerau_levenshtein("ca", "abc"), 2);
    assert_eq!(distance_str("ca", "abc"), 3);
    assert_eq!(unrestricted::distance_str("ca", "abc"), 2);
}
