//! Custom cargo commands for the kata crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target briefly
//!   cargo xtask kani      - Run Kani model checking proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets under fuzz/fuzz_targets.
const FUZZ_TARGETS: &[&str] = &["pair_search", "digit_addition", "digit_parsing"];

/// Seconds per fuzz target in `cargo xtask fuzz`.
const FUZZ_SECONDS: u32 = 30;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + tests + clippy + release tests)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run each fuzz target for {FUZZ_SECONDS}s (requires cargo-fuzz, nightly)
  kani      Run Kani proofs (requires cargo-kani)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Kata Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests (contracts on)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running Rust tests in release (contracts off)...");
    run_cargo(&["test", "--quiet", "--release"])?;
    println!("✓ Release tests passed\n");

    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run every fuzz target for a fixed time budget
fn fuzz() -> Result<()> {
    let root = project_root()?;
    let max_time = format!("-max_total_time={FUZZ_SECONDS}");

    for target in FUZZ_TARGETS {
        println!("Fuzzing {target} for {FUZZ_SECONDS}s...");
        run_in(
            &root,
            "cargo",
            &["+nightly", "fuzz", "run", target, "--", &max_time],
        )?;
    }

    println!("\n✓ No fuzz failures");
    Ok(())
}

/// Run Kani proofs in the standalone proof crate
fn kani() -> Result<()> {
    let proofs = project_root()?.join("kani-proofs");
    if !proofs.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }

    run_in(&proofs, "cargo", &["kani"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    run_in(&project_root()?, "cargo", args)
}

fn run_in(dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run {} {:?}", program, args))?;

    if !status.success() {
        bail!("{} {:?} failed", program, args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let contracts = project_root()?.join("src/contracts.rs");
    let source = std::fs::read_to_string(&contracts).context("Failed to read contracts.rs")?;

    let count = source.matches("INVARIANT:").count();
    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers in contracts.rs, found {}. Someone may have removed safety checks!",
            count
        );
    }

    Ok(())
}
