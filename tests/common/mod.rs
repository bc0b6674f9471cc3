//! Shared test utilities and fixtures.

#![allow(dead_code)]

use kata::DigitList;

// Re-export canonical test utilities from kata::testing
pub use kata::testing::{digit_list, nines, worst_case_pair};

// ============================================================================
// FIXTURES
// ============================================================================

/// `(nums, target, expected)` pair scenarios with a known answer.
pub const PAIR_SCENARIOS: &[(&[i64], i64, (usize, usize))] = &[
    (&[2, 7, 11, 15], 9, (1, 0)),
    (&[3, 2, 4], 6, (2, 1)),
    (&[3, 3], 6, (1, 0)),
    (&[-1, -2, -3, -4, -5], -8, (4, 2)),
    (&[0, 4, 3, 0], 0, (3, 0)),
];

/// `(a, b, sum)` digit scenarios, all least-significant first.
pub const ADD_SCENARIOS: &[(&[u8], &[u8], &[u8])] = &[
    (&[2, 4, 3], &[5, 6, 4], &[7, 0, 8]),
    (&[9, 9, 9], &[1], &[0, 0, 0, 1]),
    (&[0], &[0], &[0]),
    (&[5], &[5], &[0, 1]),
    (&[9, 9, 9, 9, 9, 9, 9], &[9, 9, 9, 9], &[8, 9, 9, 9, 0, 0, 0, 1]),
];

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert that `(i, j)` is a qualifying pair for `nums` and `target`.
pub fn assert_qualifying_pair(nums: &[i64], target: i64, pair: (usize, usize)) {
    let (i, j) = pair;
    assert_ne!(i, j, "pair repeats index {}", i);
    assert!(i < nums.len() && j < nums.len(), "pair {:?} out of bounds", pair);
    assert_eq!(
        nums[i] + nums[j],
        target,
        "nums[{}] + nums[{}] != {}",
        i,
        j,
        target
    );
}

/// Assert a chain holds only decimal digits and has no stored leading zero.
pub fn assert_canonical(list: &DigitList) {
    assert!(list.iter().all(|d| d <= 9), "non-digit in {:?}", list);
    assert!(list.is_canonical(), "stored leading zero in {:?}", list);
}
