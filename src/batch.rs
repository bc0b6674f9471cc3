// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Batch solving: many independent cases, one JSON document in, one out.
//!
//! A batch file is a JSON array of tagged cases:
//!
//! ```json
//! [
//!   {"kind": "pair", "nums": [2, 7, 11, 15], "target": 9},
//!   {"kind": "add", "a": [2, 4, 3], "b": [5, 6, 4]}
//! ]
//! ```
//!
//! and the answer is an array of outcomes in the same order:
//!
//! ```json
//! [
//!   {"kind": "pair", "indices": [1, 0]},
//!   {"kind": "add", "digits": [7, 0, 8]}
//! ]
//! ```
//!
//! Both kernels are pure, so cases are embarrassingly parallel. With the
//! `parallel` feature, rayon fans them out; `collect` on an indexed parallel
//! iterator keeps input order.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::digits::add;
use crate::pair::find_pair;
use crate::types::DigitList;

/// One problem instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Case {
    Pair { nums: Vec<i64>, target: i64 },
    Add { a: DigitList, b: DigitList },
}

/// The answer to one [`Case`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Outcome {
    Pair { indices: [usize; 2] },
    Add { digits: DigitList },
    Error { message: String },
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error { .. })
    }
}

/// Failure to read or decode a batch file.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid batch JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Solve a single case. Kernel failures become [`Outcome::Error`].
pub fn solve(case: &Case) -> Outcome {
    match case {
        Case::Pair { nums, target } => match find_pair(nums, *target) {
            Ok((i, j)) => Outcome::Pair { indices: [i, j] },
            Err(e) => Outcome::Error {
                message: e.to_string(),
            },
        },
        Case::Add { a, b } => Outcome::Add { digits: add(a, b) },
    }
}

/// Solve every case, preserving order.
#[cfg(feature = "parallel")]
pub fn solve_all(cases: &[Case]) -> Vec<Outcome> {
    let outcomes: Vec<Outcome> = cases.par_iter().map(solve_logged).collect();
    log_summary(&outcomes);
    outcomes
}

/// Solve every case, preserving order.
#[cfg(not(feature = "parallel"))]
pub fn solve_all(cases: &[Case]) -> Vec<Outcome> {
    let outcomes: Vec<Outcome> = cases.iter().map(solve_logged).collect();
    log_summary(&outcomes);
    outcomes
}

fn solve_logged(case: &Case) -> Outcome {
    let outcome = solve(case);
    debug!(?case, ?outcome, "solved case");
    outcome
}

fn log_summary(outcomes: &[Outcome]) {
    let failed = outcomes.iter().filter(|o| o.is_error()).count();
    info!(total = outcomes.len(), failed, "batch complete");
}

/// Decode a JSON array of cases.
pub fn parse_cases(json: &str) -> Result<Vec<Case>, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Read cases from `path`, or from stdin when `path` is `-`.
pub fn load_cases(path: &Path) -> Result<Vec<Case>, LoadError> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?
    };

    let cases = parse_cases(&content)?;
    debug!(path = %path.display(), count = cases.len(), "loaded batch");
    Ok(cases)
}
