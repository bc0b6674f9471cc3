// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index-pair search: which two positions sum to the target?
//!
//! One left-to-right pass with a value-to-index map. At each position we ask
//! whether the complement was already seen; if so we are done, otherwise we
//! remember this value and move on. O(n) time, O(n) space, and the map is
//! gone when the call returns.
//!
//! The returned order is observable and fixed: `(current, earlier)`. For
//! `[2, 7, 11, 15]` and target 9 that is `(1, 0)`, not `(0, 1)`.

use std::collections::HashMap;

use crate::contracts::{check_pair_order, check_pair_valid};
use crate::error::{Error, Result};

/// Find two distinct indices whose values sum to `target`.
///
/// Returns `(i, j)` with `j < i`, where `i` is the first position at which
/// some earlier value completes the sum. When a value repeats, the map holds
/// its most recent index, so `j` is the latest qualifying partner.
///
/// Callers normally guarantee a pair exists. When none does (including inputs
/// shorter than two elements) this returns [`Error::NoQualifyingPair`].
///
/// ```
/// assert_eq!(kata::find_pair(&[2, 7, 11, 15], 9), Ok((1, 0)));
/// assert_eq!(kata::find_pair(&[3, 2, 4], 6), Ok((2, 1)));
/// ```
pub fn find_pair(nums: &[i64], target: i64) -> Result<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (i, &value) in nums.iter().enumerate() {
        // An overflowing complement is outside i64, so it was never recorded
        if let Some(&j) = target.checked_sub(value).and_then(|want| seen.get(&want)) {
            let pair = (i, j);
            check_pair_valid(nums, target, pair);
            check_pair_order(pair);
            return Ok(pair);
        }

        seen.insert(value, i);
    }

    Err(Error::NoQualifyingPair { target })
}
