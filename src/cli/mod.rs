// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the kata command-line interface.
//!
//! Three subcommands: `pair` and `add` run one kernel on arguments from the
//! command line, and `batch` solves a JSON file of cases. `--json` switches
//! the single-case commands to the same tagged JSON the batch runner emits.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kata::DigitList;

#[derive(Parser)]
#[command(
    name = "kata",
    about = "Contract-checked pair-sum and digit-list addition kernels",
    version
)]
pub struct Cli {
    /// Print answers as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log filter, overrides RUST_LOG (e.g. "debug", "kata=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find two indices whose values sum to a target
    Pair {
        /// Target sum
        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,

        /// Integers to search
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        nums: Vec<i64>,
    },

    /// Add two numbers written least-significant digit first
    ///
    /// Digits may be packed ("243"), comma separated ("2,4,3") or quoted
    /// with spaces ("2 4 3"). All three mean 342.
    Add {
        /// First operand
        a: DigitList,

        /// Second operand
        b: DigitList,
    },

    /// Solve a JSON array of cases
    Batch {
        /// Path to the batch file, or - for stdin
        file: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}
