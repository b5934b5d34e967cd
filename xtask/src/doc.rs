use anyhow::Result;
use colored::Colorize;

use crate::cargo::{step, OnFailure};

pub fn run(open: bool) -> Result<()> {
    println!();
    println!("{}", "📚 Building documentation...".cyan().bold());
    println!();

    let mut args = vec![
        "doc",
        "-p",
        "playground-hal",
        "-p",
        "circuit-playground",
        "--no-deps",
        "--features",
        "circuit-playground/std",
    ];
    if open {
        args.push("--open");
    }

    step("Building documentation", &args, OnFailure::Abort)?;

    if !open {
        println!(
            "   {}",
            "Open target/doc/circuit_playground/index.html in your browser".dimmed()
        );
        println!(
            "   {}",
            "Or run 'cargo run -p xtask -- doc --open'".dimmed()
        );
        println!();
    }

    Ok(())
}
