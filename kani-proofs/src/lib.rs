// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the kata kernels.
//!
//! This standalone crate restates the column step of the digit adder and the
//! single-pass pair scan over fixed-size buffers, then proves them for every
//! input up to the unwinding bound.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Carry is one bit**: a column never emits a digit above 9 or a carry above 1
//! 2. **Column is exact**: `digit + 10 * carry_out == x + y + carry_in`
//! 3. **Sum is exact**: short chains add to the integer sum
//! 4. **Pair qualifies**: the scan never panics and any pair it returns sums to the target

/// Longest operand the addition proof unrolls.
pub const MAX_PROOF_DIGITS: usize = 3;

/// Longest input the pair proof unrolls.
pub const MAX_PROOF_NUMS: usize = 4;

// ============================================================================
// DIGIT ADDITION (mirrors src/digits.rs)
// ============================================================================

/// One addition column: returns `(digit, carry_out)`.
pub fn column(x: u8, y: u8, carry: u8) -> (u8, u8) {
    let sum = x + y + carry;
    (sum % 10, sum / 10)
}

/// Add least-significant-first digits into `out`, returning the output length.
///
/// `out` must hold `max(a.len(), b.len()) + 1` digits.
pub fn add_into(a: &[u8], b: &[u8], out: &mut [u8]) -> usize {
    let mut carry = 0u8;
    let mut k = 0;
    while k < a.len() || k < b.len() || carry > 0 {
        let x = a.get(k).copied().unwrap_or(0);
        let y = b.get(k).copied().unwrap_or(0);
        let (digit, next) = column(x, y, carry);
        out[k] = digit;
        carry = next;
        k += 1;
    }
    k
}

/// Integer value of least-significant-first digits.
pub fn value(digits: &[u8]) -> u64 {
    digits
        .iter()
        .rev()
        .fold(0u64, |acc, &d| acc * 10 + u64::from(d))
}

// ============================================================================
// PAIR SEARCH (mirrors src/pair.rs, with a linear map)
// ============================================================================

/// Single-pass pair scan. The map is a last-write-wins association list.
pub fn find_pair(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: [(i64, usize); MAX_PROOF_NUMS] = [(0, 0); MAX_PROOF_NUMS];
    let mut seen_len = 0;

    for (i, &v) in nums.iter().enumerate().take(MAX_PROOF_NUMS) {
        if let Some(want) = target.checked_sub(v) {
            // Latest entry for a value wins
            let mut found = None;
            for &(key, idx) in &seen[..seen_len] {
                if key == want {
                    found = Some(idx);
                }
            }
            if let Some(j) = found {
                return Some((i, j));
            }
        }
        seen[seen_len] = (v, i);
        seen_len += 1;
    }
    None
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify a column never produces an out-of-range digit or carry.
    #[kani::proof]
    fn verify_column_bounds() {
        let x: u8 = kani::any_where(|&d| d <= 9);
        let y: u8 = kani::any_where(|&d| d <= 9);
        let carry: u8 = kani::any_where(|&c| c <= 1);

        let (digit, next) = column(x, y, carry);

        kani::assert(digit <= 9, "column digit must be a decimal digit");
        kani::assert(next <= 1, "carry must be 0 or 1");
        kani::assert(
            u16::from(digit) + 10 * u16::from(next)
                == u16::from(x) + u16::from(y) + u16::from(carry),
            "column must be exact",
        );
    }

    /// Verify short chains add to the integer sum.
    #[kani::proof]
    #[kani::unwind(5)] // MAX_PROOF_DIGITS + 2
    fn verify_add_exact() {
        let a_len: usize = kani::any_where(|&n| (1..=MAX_PROOF_DIGITS).contains(&n));
        let b_len: usize = kani::any_where(|&n| (1..=MAX_PROOF_DIGITS).contains(&n));

        let mut a = [0u8; MAX_PROOF_DIGITS];
        let mut b = [0u8; MAX_PROOF_DIGITS];
        for i in 0..MAX_PROOF_DIGITS {
            a[i] = kani::any_where(|&d| d <= 9);
            b[i] = kani::any_where(|&d| d <= 9);
        }

        let mut out = [0u8; MAX_PROOF_DIGITS + 1];
        let len = add_into(&a[..a_len], &b[..b_len], &mut out);

        kani::assert(len >= a_len.max(b_len), "sum is at least as long as either operand");
        kani::assert(len <= a_len.max(b_len) + 1, "at most one extra carry column");
        kani::assert(
            value(&out[..len]) == value(&a[..a_len]) + value(&b[..b_len]),
            "sum must equal integer addition",
        );
    }

    /// Verify the pair scan never panics and only returns qualifying pairs.
    #[kani::proof]
    #[kani::unwind(6)] // MAX_PROOF_NUMS + 2
    fn verify_pair_qualifies() {
        let len: usize = kani::any_where(|&n| n <= MAX_PROOF_NUMS);
        let mut nums = [0i64; MAX_PROOF_NUMS];
        for i in 0..MAX_PROOF_NUMS {
            nums[i] = kani::any();
        }
        let target: i64 = kani::any();

        if let Some((i, j)) = find_pair(&nums[..len], target) {
            kani::assert(j < i, "pair is (current, earlier)");
            kani::assert(i < len, "pair in bounds");
            kani::assert(
                nums[i].checked_add(nums[j]) == Some(target),
                "pair must sum to target",
            );
        }
    }
}

// ============================================================================
// STANDARD TESTS (run with cargo test)
// ============================================================================
