//! Custom cargo commands for the damerau crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (tests + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Fuzz the distance laws for a minute
//!   cargo xtask kani      - Run the Kani model checking proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Contract functions that must stay in src/contracts.rs.
const REQUIRED_CONTRACTS: &[&str] = &[
    "check_result_bounds",
    "check_boundaries",
    "check_cell_bounds",
    "check_substitution_bound",
    "check_table_well_formed",
];

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
  verify    Run full verification suite (contracts + tests + clippy + release tests)
  test      Run all Rust tests
  check     Quick check (cargo test + clippy)
  bench     Run benchmarks
  fuzz      Run the distance_laws fuzz target for 60 seconds (needs cargo-fuzz)
  kani      Run Kani proofs (needs cargo-kani)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Damerau Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract functions...");
    check_contracts()?;
    println!("✓ All contracts present\n");

    println!("[2/4] Running Rust tests (debug, contracts on)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy clean\n");

    println!("[4/4] Running Rust tests (release, contracts off)...");
    run_cargo(&["test", "--quiet", "--release"])?;
    println!("✓ Release tests passed\n");

    println!("==========================================");
    println!("All verification checks passed!");
    println!("==========================================");
    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn check() -> Result<()> {
    println!("Running quick check...\n");
    run_cargo(&["check"])?;
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("\n✓ Quick check passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn fuzz() -> Result<()> {
    let root = project_root()?;
    run_in(
        &root.join("fuzz"),
        "cargo",
        &["+nightly", "fuzz", "run", "distance_laws", "--", "-max_total_time=60"],
    )
}

fn kani() -> Result<()> {
    let root = project_root()?;
    run_in(&root.join("kani-proofs"), "cargo", &["kani"])
}

// ============================================================================
// HELPERS
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
    run_in(&root, "cargo", args)
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

fn check_contracts() -> Result<()> {
    let root = project_root()?;
    let contracts = std::fs::read_to_string(root.join("src/contracts.rs"))
        .context("Failed to read src/contracts.rs")?;

    let missing: Vec<&str> = REQUIRED_CONTRACTS
        .iter()
        .copied()
        .filter(|name| !contracts.contains(&format!("pub fn {}(", name)))
        .collect();

    if !missing.is_empty() {
        bail!(
            "Missing contract functions: {}. Someone may have removed safety checks!",
            missing.join(", ")
        );
    }

    Ok(())
}
