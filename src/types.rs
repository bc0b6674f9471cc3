// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data structures: the digit chain the adder consumes and produces.
//!
//! A `DigitList` is an owned, singly-linked, never-empty chain of decimal
//! digits stored least-significant first. `342` is `2 -> 4 -> 3`.
//!
//! Construction is the only place digits are validated. After that, every
//! node holds `0..=9` and the chain has at least one node, so the adder has
//! no error path of its own.
//!
//! The boxed chain would normally drop (and clone, and compare) recursively,
//! one stack frame per node. Those impls are written as loops here so a
//! million-digit number is as safe to handle as a three-digit one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::contracts::check_digits_valid;
use crate::error::{Error, Result};

/// One node of a digit chain.
pub struct DigitNode {
    pub digit: u8,
    pub next: Option<Box<DigitNode>>,
}

impl DigitNode {
    pub fn new(digit: u8) -> Self {
        Self { digit, next: None }
    }

    /// The following node, if any.
    pub fn next(&self) -> Option<&DigitNode> {
        self.next.as_deref()
    }
}

/// Lists this node's digit and every digit after it: `DigitNode [4, 3]`.
impl fmt::Debug for DigitNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = std::iter::successors(Some(self), |node| node.next()).map(|node| node.digit);
        f.write_str("DigitNode ")?;
        f.debug_list().entries(digits).finish()
    }
}

/// A non-negative integer as a least-significant-digit-first chain.
pub struct DigitList {
    head: Box<DigitNode>,
    len: usize,
}

impl DigitList {
    /// Build a chain from digits given least-significant first.
    ///
    /// Rejects an empty slice and anything outside `0..=9`.
    pub fn from_digits(digits: &[u8]) -> Result<Self> {
        validate_digits(digits)?;
        let (&first, rest) = digits.split_first().ok_or(Error::EmptyDigits)?;
        Ok(Self::from_parts(first, rest.iter().copied()))
    }

    /// Build the canonical chain for `value` (no most-significant zeros).
    pub fn from_value(value: u128) -> Self {
        let first = (value % 10) as u8;
        let mut remaining = value / 10;
        let rest = std::iter::from_fn(move || {
            (remaining > 0).then(|| {
                let digit = (remaining % 10) as u8;
                remaining /= 10;
                digit
            })
        });
        Self::from_parts(first, rest)
    }

    /// The single-node chain `0`.
    pub fn zero() -> Self {
        Self::from_parts(0, std::iter::empty())
    }

    /// Append-only construction from a known head digit.
    ///
    /// Callers guarantee every digit is in `0..=9`.
    pub(crate) fn from_parts(first: u8, rest: impl IntoIterator<Item = u8>) -> Self {
        let mut head = Box::new(DigitNode::new(first));
        let mut len = 1;

        let mut tail = &mut head;
        for digit in rest {
            tail = tail.next.insert(Box::new(DigitNode::new(digit)));
            len += 1;
        }

        let list = Self { head, len };
        check_digits_valid(&list);
        list
    }

    /// The least-significant node.
    pub fn head(&self) -> &DigitNode {
        &self.head
    }

    /// Number of nodes. Always at least 1.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Digits in storage order (least significant first).
    pub fn iter(&self) -> Digits<'_> {
        Digits {
            node: Some(&self.head),
            remaining: self.len,
        }
    }

    /// True when no most-significant zero is stored (`0` itself is canonical).
    pub fn is_canonical(&self) -> bool {
        self.len == 1 || self.iter().last() != Some(0)
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }

    /// Numeric value, or `None` if it does not fit in a `u128`.
    pub fn to_u128(&self) -> Option<u128> {
        let mut value: u128 = 0;
        for (position, digit) in self.iter().enumerate() {
            if digit == 0 {
                continue;
            }
            let place = 10u128.checked_pow(u32::try_from(position).ok()?)?;
            value = value.checked_add(u128::from(digit).checked_mul(place)?)?;
        }
        Some(value)
    }

    /// Decimal rendering, most significant digit first.
    ///
    /// Works at any length, unlike `to_u128`.
    pub fn to_decimal_string(&self) -> String {
        let digits = self.to_vec();
        let significant = digits
            .iter()
            .rposition(|&d| d != 0)
            .map_or(1, |last| last + 1);
        digits[..significant]
            .iter()
            .rev()
            .map(|d| char::from(b'0' + d))
            .collect()
    }
}

/// Reject an empty digit slice or any element outside `0..=9`.
pub(crate) fn validate_digits(digits: &[u8]) -> Result<()> {
    if digits.is_empty() {
        return Err(Error::EmptyDigits);
    }
    match digits.iter().enumerate().find(|&(_, &d)| d > 9) {
        Some((position, &digit)) => Err(Error::DigitOutOfRange { position, digit }),
        None => Ok(()),
    }
}

/// Iterator over the digits of a [`DigitList`], least significant first.
pub struct Digits<'a> {
    node: Option<&'a DigitNode>,
    remaining: usize,
}

impl Iterator for Digits<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let node = self.node?;
        self.node = node.next();
        self.remaining -= 1;
        Some(node.digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Digits<'_> {}

impl<'a> IntoIterator for &'a DigitList {
    type Item = u8;
    type IntoIter = Digits<'a>;

    fn into_iter(self) -> Digits<'a> {
        self.iter()
    }
}

impl Drop for DigitList {
    fn drop(&mut self) {
        let mut next = self.head.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl Clone for DigitList {
    fn clone(&self) -> Self {
        Self::from_parts(self.head.digit, self.iter().skip(1))
    }
}

impl PartialEq for DigitList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for DigitList {}

impl fmt::Debug for DigitList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for DigitList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digit) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl TryFrom<&[u8]> for DigitList {
    type Error = Error;

    fn try_from(digits: &[u8]) -> Result<Self> {
        Self::from_digits(digits)
    }
}

/// Parses least-significant-first digits: `2,4,3`, `2 4 3`, or `243`.
impl FromStr for DigitList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let tokens: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .collect();

        let digits: Vec<u8> = match tokens.as_slice() {
            [packed] if packed.len() > 1 => packed
                .chars()
                .map(|c| {
                    c.to_digit(10)
                        .map(|d| d as u8)
                        .ok_or_else(|| Error::UnparsableDigit {
                            token: c.to_string(),
                        })
                })
                .collect::<Result<_>>()?,
            _ => tokens
                .iter()
                .map(|token| {
                    let unparsable = || Error::UnparsableDigit {
                        token: (*token).to_string(),
                    };
                    // u8::from_str would also take a leading '+'
                    if !token.bytes().all(|b| b.is_ascii_digit()) {
                        return Err(unparsable());
                    }
                    token.parse::<u8>().map_err(|_| unparsable())
                })
                .collect::<Result<_>>()?,
        };

        Self::from_digits(&digits)
    }
}

impl Serialize for DigitList {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for DigitList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let digits = Vec::<u8>::deserialize(deserializer)?;
        Self::from_digits(&digits).map_err(serde::de::Error::custom)
    }
}
