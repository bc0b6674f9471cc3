//! Index-pair finder against fixed scenarios.

use super::common::{assert_qualifying_pair, worst_case_pair, PAIR_SCENARIOS};
use kata::{find_pair, Error};

#[test]
fn test_known_scenarios() {
    for &(nums, target, expected) in PAIR_SCENARIOS {
        let pair = find_pair(nums, target).unwrap();
        assert_eq!(pair, expected, "nums={:?} target={}", nums, target);
        assert_qualifying_pair(nums, target, pair);
    }
}

#[test]
fn test_worst_case_scans_to_the_end() {
    let (nums, target) = worst_case_pair(10_000);
    assert_eq!(find_pair(&nums, target), Ok((9_999, 9_998)));
}

#[test]
fn test_first_completion_wins_over_later_ones() {
    // (1, 0) and (3, 2) both sum to 10; the scan stops at index 1
    assert_eq!(find_pair(&[4, 6, 1, 9], 10), Ok((1, 0)));
}

#[test]
fn test_error_variants() {
    assert_eq!(find_pair(&[], 1), Err(Error::NoQualifyingPair { target: 1 }));
    assert_eq!(find_pair(&[1], 2), Err(Error::NoQualifyingPair { target: 2 }));
    assert_eq!(
        find_pair(&[1, 2, 4], 8),
        Err(Error::NoQualifyingPair { target: 8 })
    );
}

#[test]
fn test_error_is_a_std_error() {
    let err: Box<dyn std::error::Error + Send + Sync> =
        Box::new(find_pair(&[1, 2], 5).unwrap_err());
    assert!(err.to_string().contains("invalid input"));
}

#[test]
fn test_concurrent_calls_agree() {
    let (nums, target) = worst_case_pair(2_000);
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| find_pair(&nums, target)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results.iter().all(|r| *r == Ok((1_999, 1_998))));
}
