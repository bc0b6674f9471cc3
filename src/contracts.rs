// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for both kernels.
//!
//! These are debug-mode assertions over the properties the kernels promise:
//!
//! 1. **Zero-cost in release builds** (everything is `debug_assert!`)
//! 2. **Early failure detection** while developing or fuzzing
//! 3. **One check per promise**, named after what it checks
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Property                                        |
//! |--------------------------|-------------------------------------------------|
//! | `check_pair_valid`       | `i != j`, both in bounds, `nums[i] + nums[j] == t` |
//! | `check_pair_order`       | current index first, earlier index second       |
//! | `check_digits_valid`     | every node holds `0..=9`, length matches        |
//! | `check_no_leading_zero`  | canonical operands give a canonical sum         |
//! | `check_sum_matches`      | `value(a) + value(b) == value(sum)` when it fits |
//!
//! # Usage
//!
//! ```ignore
//! use kata::contracts::*;
//!
//! // In debug builds, this panics if the pair is wrong
//! check_pair_valid(&nums, target, (i, j));
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The largest column sum is `9 + 9 + carry`. If the carry could reach 2 the
/// adder would need a wider carry register; this keeps it at one bit.
const _: () = {
    const MAX_DIGIT: u32 = 9;
    const MAX_CARRY: u32 = 1;

    // INVARIANT: carry_is_one_bit
    // (9 + 9 + 1) / 10 == 1
    const MAX_COLUMN: u32 = MAX_DIGIT + MAX_DIGIT + MAX_CARRY;
    assert!(MAX_COLUMN / 10 <= MAX_CARRY);

    // INVARIANT: column_fits_u8
    assert!(MAX_COLUMN <= u8::MAX as u32);
};

use crate::types::DigitList;

// ============================================================================
// PAIR CONTRACTS
// ============================================================================

/// Check that a returned index pair qualifies.
///
/// # Panics (debug builds only)
/// Panics if the indices coincide, fall outside `nums`, or do not sum to
/// `target`.
#[inline]
pub fn check_pair_valid(nums: &[i64], target: i64, pair: (usize, usize)) {
    let (i, j) = pair;

    // INVARIANT: pair_distinct
    debug_assert!(i != j, "Contract violation: pair ({}, {}) repeats an index", i, j);

    // INVARIANT: pair_in_bounds
    debug_assert!(
        i < nums.len() && j < nums.len(),
        "Contract violation: pair ({}, {}) outside nums.len() {}",
        i,
        j,
        nums.len()
    );

    if i < nums.len() && j < nums.len() {
        // INVARIANT: pair_sums_to_target
        debug_assert!(
            nums[i].checked_add(nums[j]) == Some(target),
            "Contract violation: nums[{}] + nums[{}] = {} + {} != {}",
            i,
            j,
            nums[i],
            nums[j],
            target
        );
    }
}

/// Check that the pair comes back as (current, earlier).
#[inline]
pub fn check_pair_order(pair: (usize, usize)) {
    debug_assert!(
        pair.0 > pair.1,
        "Contract violation: pair ({}, {}) is not (current, earlier)",
        pair.0,
        pair.1
    );
}

// ============================================================================
// DIGIT CHAIN CONTRACTS
// ============================================================================

/// Check that every node holds a decimal digit and the cached length is right.
#[inline]
pub fn check_digits_valid(list: &DigitList) {
    if cfg!(debug_assertions) {
        let mut count = 0usize;
        let mut node = Some(list.head());
        while let Some(current) = node {
            debug_assert!(
                current.digit <= 9,
                "Contract violation: node {} holds {}, not a decimal digit",
                count,
                current.digit
            );
            count += 1;
            node = current.next();
        }

        debug_assert_eq!(
            count,
            list.len(),
            "Contract violation: chain has {} nodes but len() is {}",
            count,
            list.len()
        );
    }
}

/// Check that canonical operands produce a canonical sum.
///
/// The single-node chain `0` is the one canonical value ending in zero.
/// Padded operands (`[1, 0]`) legitimately carry their padding into the sum.
#[inline]
pub fn check_no_leading_zero(a: &DigitList, b: &DigitList, sum: &DigitList) {
    if cfg!(debug_assertions) && a.is_canonical() && b.is_canonical() {
        debug_assert!(
            sum.is_canonical(),
            "Contract violation: {}-digit sum of canonical operands ends in a stored zero",
            sum.len()
        );
    }
}

/// Check `value(a) + value(b) == value(sum)` whenever all three fit in a `u128`.
#[inline]
pub fn check_sum_matches(a: &DigitList, b: &DigitList, sum: &DigitList) {
    if cfg!(debug_assertions) {
        if let (Some(x), Some(y), Some(total)) = (a.to_u128(), b.to_u128(), sum.to_u128()) {
            debug_assert_eq!(
                x.checked_add(y),
                Some(total),
                "Contract violation: {} + {} != {}",
                x,
                y,
                total
            );
        }
    }
}
