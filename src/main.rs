// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, warn};

use kata::batch::{self, Outcome};
use kata::{add, find_pair, logging};

mod cli;
use cli::display::{render_pair, render_sum};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_with_level(cli.log_level.as_deref());

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Pair { target, nums } => {
            debug!(len = nums.len(), target, "searching for pair");
            let (i, j) = find_pair(&nums, target)?;

            if cli.json {
                print_json(&Outcome::Pair { indices: [i, j] }, false)?;
            } else {
                println!("{}", render_pair(&nums, target, (i, j)));
            }
        }

        Commands::Add { a, b } => {
            debug!(a_len = a.len(), b_len = b.len(), "adding digit lists");
            let sum = add(&a, &b);

            if cli.json {
                print_json(&Outcome::Add { digits: sum }, false)?;
            } else {
                println!("{}", render_sum(&a, &b, &sum));
            }
        }

        Commands::Batch { file, pretty } => {
            let cases = batch::load_cases(&file)
                .with_context(|| format!("loading batch {}", file.display()))?;
            let outcomes = batch::solve_all(&cases);

            let failed = outcomes.iter().filter(|o| o.is_error()).count();
            if failed > 0 {
                warn!(failed, total = outcomes.len(), "some cases had no answer");
            }

            print_json(&outcomes, pretty)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("serializing output")?;

    println!("{}", json);
    Ok(())
}
