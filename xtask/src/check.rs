use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::cargo::{step, OnFailure, EMBEDDED_TARGET, LIBRARIES};

pub fn run(host_only: bool) -> Result<()> {
    println!();
    println!("{}", "🔍 Checking board support crates...".cyan().bold());
    println!();

    let total_start = Instant::now();

    // Check 1: Host build with every feature (mocks, tracing)
    step(
        "Checking workspace (host, all features)",
        &[
            "check",
            "--workspace",
            "--all-targets",
            "--features",
            "circuit-playground/std,circuit-playground/tracing",
        ],
        OnFailure::Abort,
    )?;

    // Check 2: no_std builds for the SAMD21, with and without defmt
    if host_only {
        println!("{}", "  ⚠ Skipping thumbv6m-none-eabi checks".yellow());
        println!();
    } else {
        for package in LIBRARIES {
            step(
                &format!("Checking {package} ({EMBEDDED_TARGET}, no_std)"),
                &["check", "-p", package, "--target", EMBEDDED_TARGET],
                OnFailure::Abort,
            )?;
            step(
                &format!("Checking {package} ({EMBEDDED_TARGET}, defmt)"),
                &[
                    "check",
                    "-p",
                    package,
                    "--target",
                    EMBEDDED_TARGET,
                    "--features",
                    "defmt",
                ],
                OnFailure::Abort,
            )?;
        }
    }

    // Check 3: Clippy lints (reported, not fatal)
    step(
        "Running clippy lints",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        OnFailure::Warn,
    )?;

    // Check 4: Format check (reported, not fatal)
    let fmt = step(
        "Checking code formatting",
        &["fmt", "--all", "--check"],
        OnFailure::Warn,
    )?;
    if fmt.is_none() {
        eprintln!("     Run 'cargo fmt --all' to fix");
        println!();
    }

    println!(
        "{}",
        format!(
            "✓ All checks completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}
