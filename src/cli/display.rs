// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Human-readable rendering for single-case answers.
//!
//! Plain text only: the output is meant to be read in a terminal and
//! diffed in tests, so there is no color and no box drawing.

use kata::DigitList;

/// `[1, 0]  (7 + 2 = 9)`
pub fn render_pair(nums: &[i64], target: i64, pair: (usize, usize)) -> String {
    let (i, j) = pair;
    format!(
        "[{}, {}]  ({} + {} = {})",
        i, j, nums[i], nums[j], target
    )
}

/// Operands and sum as chains, with decimal values on the right.
///
/// ```text
///   2 -> 4 -> 3  (342)
/// + 5 -> 6 -> 4  (465)
/// = 7 -> 0 -> 8  (807)
/// ```
pub fn render_sum(a: &DigitList, b: &DigitList, sum: &DigitList) -> String {
    let rows = [("  ", a), ("+ ", b), ("= ", sum)];
    let chains: Vec<String> = rows.iter().map(|(_, list)| list.to_string()).collect();
    let width = chains.iter().map(String::len).max().unwrap_or(0);

    rows.iter()
        .zip(&chains)
        .map(|((sign, list), chain)| {
            format!(
                "{}{:<width$}  ({})",
                sign,
                chain,
                list.to_decimal_string(),
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
