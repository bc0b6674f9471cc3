//! Digit-sequence adder against fixed scenarios.

use super::common::{assert_canonical, digit_list, nines, ADD_SCENARIOS};
use kata::{add, add_digits, DigitList, SumDigits};

#[test]
fn test_known_scenarios() {
    for &(a, b, expected) in ADD_SCENARIOS {
        let sum = add(&digit_list(a), &digit_list(b));
        assert_eq!(sum.to_vec(), expected, "{:?} + {:?}", a, b);
        assert_canonical(&sum);

        assert_eq!(add_digits(a, b).unwrap(), expected);
    }
}

#[test]
fn test_operand_order_does_not_matter() {
    for &(a, b, _) in ADD_SCENARIOS {
        assert_eq!(add(&digit_list(a), &digit_list(b)), add(&digit_list(b), &digit_list(a)));
    }
}

#[test]
fn test_beyond_u128() {
    // 10^60 - 1 plus 1 is 10^60: far past anything a primitive holds
    let sum = add(&nines(60), &digit_list(&[1]));
    assert_eq!(sum.len(), 61);
    assert_eq!(sum.to_u128(), None);

    let mut expected = "1".to_string();
    expected.push_str(&"0".repeat(60));
    assert_eq!(sum.to_decimal_string(), expected);
}

#[test]
fn test_result_is_independent_of_inputs() {
    let a = digit_list(&[1, 2]);
    let b = digit_list(&[3]);
    let sum = add(&a, &b);
    drop(a);
    drop(b);
    assert_eq!(sum.to_vec(), vec![4, 2]);
}

#[test]
fn test_sum_digits_over_arbitrary_iterators() {
    // 342 + 465 from an array and a Vec, no DigitList involved
    let a = [2u8, 4, 3];
    let b = vec![5u8, 6, 4];
    let digits: Vec<u8> = SumDigits::new(a.iter().copied(), b.into_iter()).collect();
    assert_eq!(digits, vec![7, 0, 8]);
}

#[test]
fn test_million_digit_addition() {
    let big = nines(1_000_000);
    let sum = add(&big, &DigitList::from_value(1));
    assert_eq!(sum.len(), 1_000_001);
    assert_eq!(sum.iter().last(), Some(1));
    assert!(sum.iter().take(1_000_000).all(|d| d == 0));
}
