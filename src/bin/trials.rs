//! Measurement driver: runs randomized locate trials and prints a JSON
//! report.
//!
//! Usage: `trials [pool_size] [iterations] [seed]` — omitted arguments fall
//! back to the defaults (pool of 100, 100 iterations, fixed seed).

use std::env;
use std::process::ExitCode;

use first_free::{run_trials, TrialConfig};

fn main() -> ExitCode {
    let mut config = TrialConfig::default();
    let args: Vec<String> = env::args().skip(1).collect();

    if args.len() > 3 {
        eprintln!("usage: trials [pool_size] [iterations] [seed]");
        return ExitCode::FAILURE;
    }

    for (slot, raw) in args.iter().enumerate() {
        match (slot, raw.parse::<u64>()) {
            (0, Ok(v)) => config.pool_size = v as usize,
            (1, Ok(v)) => config.iterations = v,
            (2, Ok(v)) => config.seed = v,
            (_, _) => {
                eprintln!("invalid argument: {raw}");
                return ExitCode::FAILURE;
            }
        }
    }

    let report = run_trials(&config);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{json}");
            if report.correct {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("failed to serialize report: {err}");
            ExitCode::FAILURE
        }
    }
}
