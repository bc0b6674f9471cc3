//! Reference oracles for differential testing.
//!
//! These are simple, obviously-correct implementations. They are slow on
//! purpose: nothing clever means nothing to get wrong. If an oracle and a
//! kernel disagree, the oracle is right.

/// Quadratic pair search with the same answer shape as `find_pair`.
///
/// Picks the smallest `i` for which some `j < i` completes the sum, then the
/// largest such `j`. That is exactly what a single left-to-right scan with a
/// last-write-wins map produces.
pub fn oracle_find_pair(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    for i in 0..nums.len() {
        for j in (0..i).rev() {
            if i128::from(nums[i]) + i128::from(nums[j]) == i128::from(target) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Schoolbook addition on most-significant-first decimal strings.
///
/// Works on strings so it is not bounded by any integer width.
pub fn oracle_add_decimal(x: &str, y: &str) -> String {
    let xs: Vec<u8> = x.bytes().rev().map(|b| b - b'0').collect();
    let ys: Vec<u8> = y.bytes().rev().map(|b| b - b'0').collect();

    let mut out = Vec::new();
    let mut carry = 0u8;
    for k in 0..xs.len().max(ys.len()) {
        let s = xs.get(k).copied().unwrap_or(0) + ys.get(k).copied().unwrap_or(0) + carry;
        out.push(s % 10);
        carry = s / 10;
    }
    if carry > 0 {
        out.push(carry);
    }

    let text: String = out.iter().rev().map(|d| char::from(b'0' + d)).collect();
    let trimmed = text.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Most-significant-first decimal text for least-significant-first digits.
pub fn oracle_decimal(digits: &[u8]) -> String {
    let text: String = digits.iter().rev().map(|d| char::from(b'0' + d)).collect();
    let trimmed = text.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_pair_examples() {
        assert_eq!(oracle_find_pair(&[2, 7, 11, 15], 9), Some((1, 0)));
        assert_eq!(oracle_find_pair(&[1, 1, 5], 6), Some((2, 1)));
        assert_eq!(oracle_find_pair(&[1, 2], 5), None);
    }

    #[test]
    fn oracle_add_examples() {
        assert_eq!(oracle_add_decimal("342", "465"), "807");
        assert_eq!(oracle_add_decimal("999", "1"), "1000");
        assert_eq!(oracle_add_decimal("0", "0"), "0");
        assert_eq!(oracle_decimal(&[0, 0, 1, 0]), "100");
    }
}
