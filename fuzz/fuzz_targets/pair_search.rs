// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the index-pair finder.
//!
//! Arbitrary integers, including the extremes where `target - value`
//! overflows. The finder must never panic, and any pair it returns must
//! actually qualify.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    nums: Vec<i64>,
    target: i64,
}

fuzz_target!(|input: Input| {
    // Property 1: never panics, returns Ok or Err
    if let Ok((i, j)) = kata::find_pair(&input.nums, input.target) {
        // Property 2: the pair qualifies
        assert_ne!(i, j);
        assert!(j < i, "pair ({}, {}) is not (current, earlier)", i, j);
        assert_eq!(
            input.nums[i].checked_add(input.nums[j]),
            Some(input.target),
            "nums[{}] + nums[{}] != {}",
            i,
            j,
            input.target
        );
    }
});
