// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by both kernels.
//!
//! Every variant is an invalid-input failure. Nothing here is retryable: the
//! caller handed us something the contract rules out, and we say so.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The pair scan finished without finding two elements summing to `target`.
    #[error("invalid input: no two elements sum to {target}")]
    NoQualifyingPair { target: i64 },

    /// A number needs at least one digit (zero is the single digit `0`).
    #[error("invalid input: digit sequence is empty")]
    EmptyDigits,

    /// A node held something other than a decimal digit.
    #[error("invalid input: digit {digit} at position {position} is outside 0..=9")]
    DigitOutOfRange { position: usize, digit: u8 },

    /// Text could not be read as a digit sequence.
    #[error("invalid input: cannot parse {token:?} as a digit")]
    UnparsableDigit { token: String },
}
