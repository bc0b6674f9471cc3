// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benchmarks.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::DigitList;

/// Build a digit list, panicking on invalid digits.
///
/// Test-only shorthand for `DigitList::from_digits(..).unwrap()`.
pub fn digit_list(digits: &[u8]) -> DigitList {
    match DigitList::from_digits(digits) {
        Ok(list) => list,
        Err(e) => panic!("bad test digits {:?}: {}", digits, e),
    }
}

/// A chain of `len` nines, the worst case for carry propagation.
pub fn nines(len: usize) -> DigitList {
    digit_list(&vec![9; len.max(1)])
}

/// Worst-case pair input of length `n` (at least 2).
///
/// Every element is even except the last two, which are the only pair that
/// reaches the target. The scan has to reach the end, and the answer is
/// `(n - 1, n - 2)`.
pub fn worst_case_pair(n: usize) -> (Vec<i64>, i64) {
    let n = n.max(2) as i64;
    let mut nums: Vec<i64> = (0..n - 2).map(|k| 2 * k).collect();
    nums.push(10 * n + 1);
    nums.push(10 * n + 3);
    (nums, 20 * n + 4)
}
