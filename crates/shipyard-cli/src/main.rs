use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use shipyard_core::{load_lines, render, Result, ShipAssembly};

mod args;
use args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let parts = load_lines(&cli.input)?;
    println!("Parts loaded from: {}", cli.input.display());

    let assembly = match cli.seed {
        Some(seed) => ShipAssembly::assemble(parts, &mut StdRng::seed_from_u64(seed)),
        None => ShipAssembly::assemble(parts, &mut rand::thread_rng()),
    };

    let report = render(&assembly)?;
    print!("\n{}", report);

    Ok(())
}
