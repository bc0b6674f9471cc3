// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for digit-chain addition.
//!
//! Raw bytes are folded into `0..=9` so every input is a valid operand. The
//! list adder and the slice adder must agree, and the sum must have the
//! right length.

#![no_main]

use libfuzzer_sys::fuzz_target;

use kata::{add, add_digits, DigitList};

fuzz_target!(|data: (Vec<u8>, Vec<u8>)| {
    let (raw_a, raw_b) = data;
    if raw_a.is_empty() || raw_b.is_empty() {
        return;
    }

    let a: Vec<u8> = raw_a.iter().map(|b| b % 10).collect();
    let b: Vec<u8> = raw_b.iter().map(|b| b % 10).collect();

    let x = DigitList::from_digits(&a).expect("folded digits are valid");
    let y = DigitList::from_digits(&b).expect("folded digits are valid");

    let sum = add(&x, &y);
    let slice_sum = add_digits(&a, &b).expect("folded digits are valid");

    // Property 1: both adders agree
    assert_eq!(sum.to_vec(), slice_sum);

    // Property 2: length is the longer operand, plus at most one carry column
    let longest = a.len().max(b.len());
    assert!(sum.len() == longest || sum.len() == longest + 1);

    // Property 3: commutative
    assert_eq!(add(&y, &x), sum);
});
