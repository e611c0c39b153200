// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the distance engines.
//!
//! Arbitrary byte sequences through every engine: the rolling engine, the
//! full table, the bounded form and the unrestricted variant must all agree
//! with each other and with the distance laws. Bytes rather than strings, so
//! the fuzzer can reach every symbol.

#![no_main]

use arbitrary::Arbitrary;
use damerau::{distance, distance_within, unrestricted, DistanceTable};
use libfuzzer_sys::fuzz_target;

/// Fuzz input: two sequences and a budget
#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: Vec<u8>,
    b: Vec<u8>,
    max: u8,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to keep the O(m·n) tables small
    let a = &input.a[..input.a.len().min(64)];
    let b = &input.b[..input.b.len().min(64)];
    let (m, n) = (a.len(), b.len());

    let d = distance(a, b);

    // INVARIANT 1: |m - n| <= d <= max(m, n)
    assert!(d >= m.abs_diff(n), "d={} below length gap for {:?} / {:?}", d, a, b);
    assert!(d <= m.max(n), "d={} above max length for {:?} / {:?}", d, a, b);

    // INVARIANT 2: zero iff identical
    assert_eq!(d == 0, a == b);

    // INVARIANT 3: symmetry
    assert_eq!(d, distance(b, a), "asymmetric for {:?} / {:?}", a, b);

    // INVARIANT 4: full table agrees with the rolling rows
    let table = DistanceTable::build(a, b).expect("small table allocates");
    assert_eq!(table.distance(), d);

    // INVARIANT 5: bounded form returns d exactly when d <= max
    let max = usize::from(input.max);
    assert_eq!(distance_within(a, b, max), (d <= max).then_some(d));

    // INVARIANT 6: unrestricted never exceeds restricted
    assert!(unrestricted::distance(a, b) <= d);
});
