//! Guarded Buffer - Lock Exercise Demo
//!
//! Usage:
//!   cargo run --release -- [workers] [memory_size_bytes]
//!
//! Log level via `RUST_LOG` (default: info).

use std::env;
use std::process;

use guarded_buffer::{LockExercise, DEFAULT_MEMORY_SIZE_IN_BYTES};
use tracing_subscriber::EnvFilter;

const DEFAULT_DEMO_MEMORY: usize = 256 * 1024 * 1024;
const ROUNDS: usize = 5;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let exercise = match parse_args(env::args().skip(1).collect()) {
        Ok(exercise) => exercise,
        Err(msg) => {
            eprintln!("error: {}", msg);
            eprintln!("usage: guarded-buffer [workers] [memory_size_bytes]");
            process::exit(2);
        }
    };

    println!("🔒 Guarded Buffer - Lock Exercise");
    println!("=================================\n");
    println!("  Workers:      {} finders + {} replacers", exercise.workers, exercise.workers);
    println!(
        "  Memory size:  {} bytes (default init: {} bytes)\n",
        exercise.memory_size, DEFAULT_MEMORY_SIZE_IN_BYTES
    );

    let buffer = match exercise.prepare() {
        Ok(buffer) => buffer,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };

    let mut total_ns = 0u128;
    for round in 0..ROUNDS {
        let report = exercise.run(&buffer);
        total_ns += report.elapsed.as_nanos();

        println!(
            "  Round {}: {:>10} replaced, {} probe hits, len {} ({:.3} ms)",
            round + 1,
            report.replacements,
            report.finder_hits,
            report.final_len,
            report.elapsed.as_secs_f64() * 1000.0
        );

        if report.finder_hits != 0 || report.final_len != exercise.memory_size {
            eprintln!("\n⚠️  Buffer integrity violated in round {}", round + 1);
            process::exit(1);
        }
    }

    let avg_ms = total_ns as f64 / ROUNDS as f64 / 1_000_000.0;
    println!("\n  Avg round latency: {:.3} ms", avg_ms);
    println!(
        "  Scan throughput:   {:.2} MB/sec",
        (exercise.memory_size * exercise.workers * 2) as f64 / (avg_ms / 1000.0) / 1_000_000.0
    );
    println!("\n✅ Lock exercise complete!");
}

fn parse_args(args: Vec<String>) -> Result<LockExercise, String> {
    let mut exercise = LockExercise {
        memory_size: DEFAULT_DEMO_MEMORY,
        ..LockExercise::default()
    };

    if let Some(workers) = args.first() {
        exercise.workers = workers
            .parse()
            .map_err(|_| format!("invalid worker count: {}", workers))?;
    }
    if let Some(size) = args.get(1) {
        exercise.memory_size = size
            .parse()
            .map_err(|_| format!("invalid memory size: {}", size))?;
    }
    if args.len() > 2 {
        return Err(format!("unexpected argument: {}", args[2]));
    }

    Ok(exercise)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        let exercise = parse_args(vec![]).unwrap();
        assert_eq!(exercise.workers, 5);
        assert_eq!(exercise.memory_size, DEFAULT_DEMO_MEMORY);
    }

    #[test]
    fn test_parse_explicit() {
        let exercise = parse_args(args(&["8", "4096"])).unwrap();
        assert_eq!(exercise.workers, 8);
        assert_eq!(exercise.memory_size, 4096);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_args(args(&["many"])).is_err());
        assert!(parse_args(args(&["4", "-1"])).is_err());
        assert!(parse_args(args(&["4", "10", "extra"])).is_err());
    }
}
