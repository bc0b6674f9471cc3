// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Schoolbook addition over least-significant-first digit chains.
//!
//! Both operands are walked from the head in lockstep. Each column adds the
//! two digits (a missing digit counts as 0) plus the incoming carry, emits
//! `sum % 10`, and passes `sum / 10` to the next column.
//!
//! The loop condition is the part people get wrong: running out of input is
//! not enough to stop. `5 + 5` consumes both single-digit operands and still
//! owes a `1`, so the loop runs while *either* operand has digits *or* the
//! carry is non-zero.
//!
//! `SumDigits` is that loop as an iterator. It works over any two digit
//! streams and holds nothing but the two cursors and one carry, so auxiliary
//! space is O(1) beyond whatever the caller collects into.

use std::iter::{Fuse, FusedIterator};

use crate::contracts::{check_no_leading_zero, check_sum_matches};
use crate::error::Result;
use crate::types::{validate_digits, DigitList};

/// Add two digit chains, returning a freshly allocated chain.
///
/// Neither input is modified. When both operands are canonical the result is
/// canonical too: no most-significant zero, except `0` itself as one node.
///
/// ```
/// use kata::{add, DigitList};
///
/// let a = DigitList::from_digits(&[2, 4, 3]).unwrap();
/// let b = DigitList::from_digits(&[5, 6, 4]).unwrap();
/// assert_eq!(add(&a, &b).to_vec(), vec![7, 0, 8]);
/// ```
pub fn add(a: &DigitList, b: &DigitList) -> DigitList {
    // Both chains are non-empty, so the first column always exists
    let (first, carry) = column(a.head().digit, b.head().digit, 0);
    let rest = SumDigits::with_carry(a.iter().skip(1), b.iter().skip(1), carry);
    let sum = DigitList::from_parts(first, rest);

    check_no_leading_zero(a, b, &sum);
    check_sum_matches(a, b, &sum);
    sum
}

/// Add two least-significant-first digit slices.
///
/// Same algorithm as [`add`], for callers that hold plain digit buffers.
/// Both slices are validated first, so this is fallible where `add` is not.
pub fn add_digits(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    validate_digits(a)?;
    validate_digits(b)?;
    Ok(SumDigits::new(a.iter().copied(), b.iter().copied()).collect())
}

/// One column: returns `(digit, carry_out)`.
#[inline]
fn column(x: u8, y: u8, carry: u8) -> (u8, u8) {
    let sum = x + y + carry;
    (sum % 10, sum / 10)
}

/// Digits of `a + b`, least significant first.
///
/// Yields nothing only when both inputs are empty and no carry is pending.
/// Inputs must yield digits in `0..=9`.
#[derive(Debug, Clone)]
pub struct SumDigits<A, B> {
    a: Fuse<A>,
    b: Fuse<B>,
    carry: u8,
}

impl<A, B> SumDigits<A, B>
where
    A: Iterator<Item = u8>,
    B: Iterator<Item = u8>,
{
    pub fn new(a: A, b: B) -> Self {
        Self::with_carry(a, b, 0)
    }

    pub(crate) fn with_carry(a: A, b: B, carry: u8) -> Self {
        Self {
            a: a.fuse(),
            b: b.fuse(),
            carry,
        }
    }
}

impl<A, B> Iterator for SumDigits<A, B>
where
    A: Iterator<Item = u8>,
    B: Iterator<Item = u8>,
{
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let (x, y) = (self.a.next(), self.b.next());
        if x.is_none() && y.is_none() && self.carry == 0 {
            return None;
        }

        let (digit, carry) = column(x.unwrap_or(0), y.unwrap_or(0), self.carry);
        self.carry = carry;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_low, a_high) = self.a.size_hint();
        let (b_low, b_high) = self.b.size_hint();
        let pending = usize::from(self.carry > 0);

        let low = a_low.max(b_low).max(pending);
        // One extra column for a final carry
        let high = match (a_high, b_high) {
            (Some(x), Some(y)) => x.max(y).checked_add(1),
            _ => None,
        };
        (low, high)
    }
}

impl<A, B> FusedIterator for SumDigits<A, B>
where
    A: Iterator<Item = u8>,
    B: Iterator<Item = u8>,
{
}
