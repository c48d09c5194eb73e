//! u-evolver CLI - Run the string evolver from a JSON configuration.

use std::fs;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;
use u_evolver::evolver::{Evolver, EvolverConfig, GenerationStats, RunSummary};

#[derive(Serialize)]
struct Report<'a> {
    converged: bool,
    elapsed_ms: u128,
    summary: &'a RunSummary,
    series: &'a [GenerationStats],
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [max_generations]", args[0]);
        eprintln!();
        eprintln!("Evolve random strings toward the configured goal until the best");
        eprintln!("distance plateaus, then print the summary and series as JSON.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json      Path to evolver configuration file");
        eprintln!("  max_generations  Optional cap on the history length");
        eprintln!();
        eprintln!("Run with --example to print an example configuration.");
        std::process::exit(1);
    }

    let config_path = PathBuf::from(&args[1]);
    let cap: Option<usize> = args.get(2).map(|s| {
        s.parse().unwrap_or_else(|e| {
            eprintln!("Invalid max_generations {s:?}: {e}");
            std::process::exit(1);
        })
    });

    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: EvolverConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    let evolver = Evolver::new(config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let start = Instant::now();
    let result = evolver
        .run_with_observer(|_, len| match cap {
            Some(cap) if len >= cap => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        })
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    let report = Report {
        converged: result.converged,
        elapsed_ms: start.elapsed().as_millis(),
        summary: &result.summary,
        series: &result.series,
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing report: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_example_config() {
    let config = EvolverConfig::new("hello world")
        .with_population_size(100)
        .with_survival_rate(0.2)
        .with_mutation_rate(0.05)
        .with_converged_limit(10)
        .with_seed(42);

    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error serializing example config: {}", e),
    }
}
