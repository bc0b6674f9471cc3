// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for digit-list parsing.
//!
//! Garbage text must produce an error, never a panic. Anything that parses
//! must hold only decimal digits and print back to something that parses to
//! the same list.

#![no_main]

use libfuzzer_sys::fuzz_target;

use kata::DigitList;

fuzz_target!(|text: &str| {
    if let Ok(list) = text.parse::<DigitList>() {
        assert!(list.iter().all(|d| d <= 9));

        let csv: Vec<String> = list.iter().map(|d| d.to_string()).collect();
        let reparsed: DigitList = csv.join(",").parse().expect("printed digits reparse");
        assert_eq!(reparsed, list);
    }
});
