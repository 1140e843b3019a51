//! Balance simulator CLI.
//!
//! Plays full games headlessly with the autopilot and reports the score
//! distribution.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                 # Default: 1000 games
//!   cargo run --bin simulate -- -n 100      # 100 games
//!   cargo run --bin simulate -- --seed 42   # Reproducible batch

use birb::sim::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔══════════════════════════════════════╗");
    println!("║        BIRB BALANCE SIMULATOR        ║");
    println!("╚══════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Games:      {}", config.num_runs);
    println!("  Max Ticks:  {}", config.max_ticks_per_run);
    println!(
        "  Playfield:  {}x{}",
        config.playfield_width, config.playfield_height
    );
    if let Some(seed) = config.seed {
        println!("  Seed:       {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_run = args[i + 1].parse().unwrap_or(100_000);
                    i += 1;
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Usage: simulate [-n RUNS] [--ticks MAX] [--seed SEED]");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}
