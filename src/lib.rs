// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Two classic interview kernels, with their promises written down and checked.
//!
//! - [`find_pair`]: the positions of two integers that sum to a target.
//! - [`add`]: the sum of two numbers stored as least-significant-first digit
//!   chains, as a new chain.
//!
//! Both are pure functions. Neither keeps state between calls, so they can be
//! called from any number of threads at once.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   pair.rs   │     │  digits.rs   │────▶│   types.rs   │
//! │ (find_pair) │     │ (add,        │     │ (DigitList,  │
//! │             │     │  SumDigits)  │     │  DigitNode)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    contracts.rs                      │
//! │   (debug-mode checks of every promised property)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! `batch.rs` runs many cases at once for the `kata` binary.
//!
//! # Properties
//!
//! | Kernel      | Property                                               |
//! |-------------|--------------------------------------------------------|
//! | `find_pair` | `i != j` and `nums[i] + nums[j] == target`             |
//! | `find_pair` | returns `(current, earlier)` for the first completion  |
//! | `add`       | `value(add(a, b)) == value(a) + value(b)`              |
//! | `add`       | canonical operands give a canonical sum                |
//!
//! # Usage
//!
//! ```
//! use kata::{add, find_pair, DigitList};
//!
//! assert_eq!(find_pair(&[2, 7, 11, 15], 9), Ok((1, 0)));
//!
//! let a: DigitList = "2,4,3".parse().unwrap();
//! let b: DigitList = "5,6,4".parse().unwrap();
//! assert_eq!(add(&a, &b).to_string(), "7 -> 0 -> 8");
//! ```

// Module declarations
pub mod batch;
pub mod contracts;
mod digits;
mod error;
pub mod logging;
mod pair;
pub mod testing;
mod types;

// Re-exports for public API
pub use digits::{add, add_digits, SumDigits};
pub use error::{Error, Result};
pub use pair::find_pair;
pub use types::{DigitList, DigitNode, Digits};
