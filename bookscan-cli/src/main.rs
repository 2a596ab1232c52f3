//! Book scanning CLI - scores solution files against their instance files

mod aggregator;
mod cli;
mod config;
mod discovery;
mod error;
mod executor;
mod output;

use clap::Parser;
use cli::Args;
use config::Config;
use discovery::Discovery;
use executor::Executor;
use output::OutputFormatter;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

fn main() {
    init_logging();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays the score report; `RUST_LOG` overrides the default
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;

    let discovery = Discovery::scan(
        &config.instances_dir,
        &config.instance_ext,
        &config.solutions_dir,
        &config.solution_ext,
    )?;

    for name in &discovery.unmatched_instances {
        warn!("No solution found for instance {}", name);
    }
    for name in &discovery.unmatched_solutions {
        warn!("No instance found for solution {}", name);
    }

    if discovery.pairs.is_empty() {
        return Err(error::CliError::NoPairs);
    }

    let executor = Executor::new(discovery.pairs, &config)
        .map_err(|e| error::CliError::Executor(e.into()))?;

    run_executor(executor, &config)
}

/// Run the executor and print results in discovery order
fn run_executor(executor: Executor, config: &Config) -> Result<(), error::CliError> {
    let pair_count = executor.pairs().len();
    info!(
        pairs = pair_count,
        threads = config.thread_count,
        execution = ?config.execution,
        "scoring pairs"
    );

    // Set up result channel
    let (tx, rx) = std::sync::mpsc::channel();

    // Run executor in background thread
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(config.quiet, config.verbose);
    formatter.print_header();

    let mut aggregator = aggregator::ResultAggregator::new(pair_count);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    // Drain any remaining buffered results (shouldn't happen if all results arrived)
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        warn!("Not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| error::CliError::ExecutorPanicked)?
        .map_err(error::CliError::Executor)?;

    formatter.print_summary(&results);

    Ok(())
}
