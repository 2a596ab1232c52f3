//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How scoring work is spread across threads
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Execution {
    /// Score pairs one after another in discovery order
    Sequential,
    /// Score pairs concurrently on the thread pool (default)
    #[default]
    Parallel,
}

/// Book scanning solution scorer
#[derive(Parser, Debug)]
#[command(
    name = "bookscan",
    about = "Score Hash Code 2020 book scanning solutions against their instances",
    version
)]
pub struct Args {
    /// Directory holding instance files
    #[arg(long, default_value = "instances")]
    pub instances: PathBuf,

    /// Directory holding solution files
    #[arg(long, default_value = "output/two_phase_approach_1010_seed")]
    pub solutions: PathBuf,

    /// Extension of instance files
    #[arg(long, default_value = "txt")]
    pub instance_ext: String,

    /// Extension of solution files
    #[arg(long, default_value = "out")]
    pub solution_ext: String,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Execution mode: sequential or parallel
    #[arg(long, value_enum, default_value = "parallel")]
    pub execution: Execution,

    /// Accept declared book counts that disagree with the IDs listed after them,
    /// and ignore input after the last declared block. Blocks declaring zero
    /// books still must not carry an ID line.
    #[arg(long)]
    pub lenient: bool,

    /// Verbose mode - show books scanned, signup outcome and timing per pair
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode - only output scores
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["bookscan"]).unwrap();
        assert_eq!(args.instances, PathBuf::from("instances"));
        assert_eq!(
            args.solutions,
            PathBuf::from("output/two_phase_approach_1010_seed")
        );
        assert_eq!(args.instance_ext, "txt");
        assert_eq!(args.solution_ext, "out");
        assert_eq!(args.execution, Execution::Parallel);
        assert!(!args.lenient);
        assert!(args.threads.is_none());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Args::try_parse_from(["bookscan", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_sequential_execution() {
        let args =
            Args::try_parse_from(["bookscan", "--execution", "sequential", "--threads", "2"])
                .unwrap();
        assert_eq!(args.execution, Execution::Sequential);
        assert_eq!(args.threads, Some(2));
    }
}
