// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Diagnostic logging for the `kata` binary and anything embedding the batch
//! runner.
//!
//! Kernels never log. The CLI and the batch runner emit `tracing` events,
//! which go to stderr so stdout stays clean for answers and JSON.
//!
//! Level precedence: explicit `--log-level`, then `RUST_LOG`, then `warn`.
//!
//! ```bash
//! RUST_LOG=kata=debug kata batch cases.json
//! ```
//!
//! Library users that want the same output call [`init`] once at startup.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber with the level taken from `RUST_LOG`.
pub fn init() {
    init_with_level(None);
}

/// Install the stderr subscriber, preferring `level` over `RUST_LOG`.
///
/// Only the first call has any effect, and none at all if the host already
/// set a global subscriber.
pub fn init_with_level(level: Option<&str>) {
    INIT.call_once(|| {
        if tracing::dispatcher::has_been_set() {
            return;
        }

        let env = std::env::var("RUST_LOG").ok();
        let directives = pick_directives(level, env.as_deref());
        let filter = EnvFilter::try_new(directives).unwrap_or_else(|e| {
            eprintln!("kata: ignoring log filter {directives:?} ({e}), using {DEFAULT_FILTER:?}");
            EnvFilter::new(DEFAULT_FILTER)
        });

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
            .try_init();
    });
}

/// First non-blank of `level` and `env`, else [`DEFAULT_FILTER`].
fn pick_directives<'a>(level: Option<&'a str>, env: Option<&'a str>) -> &'a str {
    [level, env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|directives| !directives.is_empty())
        .unwrap_or(DEFAULT_FILTER)
}
