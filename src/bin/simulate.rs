//! Game balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze game balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # Default: 1000 runs
//!   cargo run --bin simulate -- -n 100 --accuracy 0.7
//!   cargo run --bin simulate -- --seed 42         # Reproducible run

use math_legends::core::GameConfig;
use math_legends::simulator::{run_simulation, SimConfig};
use std::env;
use std::path::Path;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              MATH LEGENDS BALANCE SIMULATOR                   ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Accuracy:       {:.0}%", config.accuracy * 100.0);
    println!("  Starting Level: {}", config.starting_level);
    println!("  Max Turns:      {}", config.max_turns_per_run);
    println!("  Monster HP/Lvl: {}", config.game.monster_hp_per_level);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => eprintln!("Failed to write JSON report: {}", e),
        }
    }
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
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-a" | "--accuracy" => {
                if i + 1 < args.len() {
                    if let Ok(accuracy) = args[i + 1].parse::<f64>() {
                        config.accuracy = accuracy.clamp(0.0, 1.0);
                    }
                    i += 1;
                }
            }
            "-t" | "--max-turns" => {
                if i + 1 < args.len() {
                    config.max_turns_per_run = args[i + 1].parse().unwrap_or(2_000);
                    i += 1;
                }
            }
            "-l" | "--level" => {
                if i + 1 < args.len() {
                    config.starting_level = args[i + 1].parse::<u32>().unwrap_or(1).max(1);
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    match GameConfig::load(Path::new(&args[i + 1])) {
                        Ok(game) => config.game = game,
                        Err(e) => {
                            eprintln!("Error: {}", e);
                            std::process::exit(1);
                        }
                    }
                    i += 1;
                }
            }
            "--gentle" => {
                config.game = GameConfig::gentle();
            }
            "--struggling" => {
                config.accuracy = SimConfig::struggling_student().accuracy;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig {
                    game: config.game,
                    seed: config.seed,
                    ..SimConfig::quick()
                };
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Math Legends Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of simulation runs (default: 1000)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -a, --accuracy <P>    Chance of a correct answer, 0-1 (default: 0.85)");
    println!("    -t, --max-turns <T>   Max answers per run (default: 2,000)");
    println!("    -l, --level <L>       Starting hero level (default: 1)");
    println!("    -c, --config <PATH>   Load game rules from a JSON file");
    println!("    --gentle              Use the gentle rule set");
    println!("    --struggling          Player misses one answer in three");
    println!("    -v, --verbose         Verbose output");
    println!("    --json                Save JSON report");
    println!("    --quick               Quick test (100 runs, 500 turns)");
    println!("    -h, --help            Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                       # Default run");
    println!("    cargo run --bin simulate -- -n 100 -a 0.7     # Weaker player");
    println!("    cargo run --bin simulate -- --seed 42         # Reproducible");
    println!("    cargo run --bin simulate -- --quick --gentle  # Quick check of gentle rules");
}
