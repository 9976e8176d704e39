//! Custom cargo commands for flank.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests (default and no-default features)
//!   cargo xtask kani      - Run Kani proofs
//!   cargo xtask fuzz      - Short fuzzing session on the search target
//!   cargo xtask check     - Quick check (no Kani, no fuzzing)
//!   cargo xtask bench     - Run criterion benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Seconds a `cargo xtask fuzz` session runs for.
const FUZZ_SECONDS: u32 = 60;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("kani") => kani()?,
        Some("fuzz") => fuzz()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contracts + tests + clippy + Kani)
  test      Run all Rust tests, with and without the parallel feature
  kani      Run Kani proofs only
  fuzz      Fuzz the search target for {FUZZ_SECONDS}s (needs cargo-fuzz, nightly)
  check     Quick check (cargo check + test + clippy, no Kani)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("flank Verification Suite");
    println!("==========================================\n");

    // Step 1: Contract call sites
    println!("[1/4] Checking contract call sites...");
    check_contract_calls()?;
    println!("✓ Search loops still call their contracts\n");

    // Step 2: Tests
    println!("[2/4] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Clippy
    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    // Step 4: Kani
    println!("[4/4] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs hold\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests, both feature configurations
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])
}

/// Run Kani proofs, skipping when cargo-kani is not installed
fn kani() -> Result<()> {
    if !tool_available("cargo-kani") {
        println!("  (cargo-kani not installed, skipping)");
        return Ok(());
    }
    run_cargo(&["kani", "--no-default-features"])
}

/// Short fuzzing session
fn fuzz() -> Result<()> {
    if !tool_available("cargo-fuzz") {
        bail!("cargo-fuzz not installed (cargo install cargo-fuzz)");
    }
    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);
    run_cargo(&["+nightly", "fuzz", "run", "search_properties", "--", &max_time])
}

/// Quick check (no Kani)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

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
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn tool_available(binary: &str) -> bool {
    Command::new(binary)
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// The search loops and dataset generation must keep calling their contracts.
fn check_contract_calls() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    for (file, min_calls) in [
        ("search/neighbor.rs", 3),
        ("search/classic.rs", 1),
        ("compare/dataset.rs", 1),
    ] {
        let source = std::fs::read_to_string(src_dir.join(file))
            .with_context(|| format!("Failed to read src/{}", file))?;
        let count = source.matches("contracts::check_").count();
        if count < min_calls {
            bail!(
                "Expected at least {} contract calls in src/{}, found {}. Someone may have removed a check!",
                min_calls,
                file,
                count
            );
        }
    }

    Ok(())
}
