//! Properties of the digit-sequence adder.

use super::common::assert_canonical;
use super::oracles::{oracle_add_decimal, oracle_decimal};
use kata::{add, add_digits, DigitList};
use proptest::prelude::*;

/// Arbitrary digit sequences, padded or not.
fn digits_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..=9, 1..80)
}

/// Canonical digit sequences: no stored leading zero.
fn canonical_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        Just(vec![0u8]),
        (prop::collection::vec(0u8..=9, 0..80), 1u8..=9).prop_map(|(mut low, top)| {
            low.push(top);
            low
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// value(add(a, b)) == value(a) + value(b), at any length.
    #[test]
    fn prop_sum_matches_oracle(a in digits_strategy(), b in digits_strategy()) {
        let sum = add(
            &DigitList::from_digits(&a).unwrap(),
            &DigitList::from_digits(&b).unwrap(),
        );
        let expected = oracle_add_decimal(&oracle_decimal(&a), &oracle_decimal(&b));
        prop_assert_eq!(sum.to_decimal_string(), expected);
    }

    /// Canonical operands give a canonical sum.
    #[test]
    fn prop_canonical_in_canonical_out(a in canonical_strategy(), b in canonical_strategy()) {
        let sum = add(
            &DigitList::from_digits(&a).unwrap(),
            &DigitList::from_digits(&b).unwrap(),
        );
        assert_canonical(&sum);
    }

    /// Output length is max(len) or max(len) + 1.
    #[test]
    fn prop_length_bound(a in digits_strategy(), b in digits_strategy()) {
        let sum = add_digits(&a, &b).unwrap();
        let longest = a.len().max(b.len());
        prop_assert!(sum.len() == longest || sum.len() == longest + 1);
    }

    /// Addition commutes.
    #[test]
    fn prop_commutative(a in digits_strategy(), b in digits_strategy()) {
        prop_assert_eq!(add_digits(&a, &b).unwrap(), add_digits(&b, &a).unwrap());
    }

    /// Adding zero changes nothing.
    #[test]
    fn prop_zero_identity(a in digits_strategy()) {
        prop_assert_eq!(add_digits(&a, &[0]).unwrap(), a);
    }

    /// Inputs are left exactly as they were.
    #[test]
    fn prop_inputs_unchanged(a in digits_strategy(), b in digits_strategy()) {
        let x = DigitList::from_digits(&a).unwrap();
        let y = DigitList::from_digits(&b).unwrap();
        let _ = add(&x, &y);
        prop_assert_eq!(x.to_vec(), a);
        prop_assert_eq!(y.to_vec(), b);
    }
}
