//! Configuration resolution from CLI args

use crate::cli::{Args, Execution};
use crate::error::CliError;
use bookscan_scorer::ParseOptions;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Instance directory path
    pub instances_dir: PathBuf,
    /// Solution directory path
    pub solutions_dir: PathBuf,
    /// Instance file extension, without the dot
    pub instance_ext: String,
    /// Solution file extension, without the dot
    pub solution_ext: String,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Execution mode
    pub execution: Execution,
    /// Loader options applied to every pair
    pub parse_options: ParseOptions,
    /// Verbose mode
    pub verbose: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, failing if either directory is missing
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        // Resolve directories (expand ~)
        let instances_dir = existing_dir("Instances", &args.instances)?;
        let solutions_dir = existing_dir("Solutions", &args.solutions)?;

        let thread_count = match args.threads {
            Some(0) => {
                return Err(CliError::Config(
                    "Thread count must be at least 1".to_string(),
                ));
            }
            Some(n) => n,
            None => num_cpus(),
        };

        let parse_options = if args.lenient {
            ParseOptions::lenient()
        } else {
            ParseOptions::strict()
        };

        Ok(Config {
            instances_dir,
            solutions_dir,
            instance_ext: trim_dot(args.instance_ext),
            solution_ext: trim_dot(args.solution_ext),
            thread_count,
            execution: args.execution,
            parse_options,
            verbose: args.verbose,
            quiet: args.quiet,
        })
    }
}

/// Expand `~` and check the directory exists
fn existing_dir(kind: &'static str, path: &Path) -> Result<PathBuf, CliError> {
    let path = expand_tilde(path);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(CliError::MissingDirectory { kind, path })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.get(2..).unwrap_or_default());
    }
    path.to_path_buf()
}

/// Accept both `txt` and `.txt`
fn trim_dot(ext: String) -> String {
    match ext.strip_prefix('.') {
        Some(stripped) => stripped.to_string(),
        None => ext,
    }
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn args_for(instances: &Path, solutions: &Path, extra: &[&str]) -> Args {
        let mut argv = vec![
            "bookscan".to_string(),
            "--instances".to_string(),
            instances.display().to_string(),
            "--solutions".to_string(),
            solutions.display().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_resolves_existing_directories() {
        let instances = TempDir::new().unwrap();
        let solutions = TempDir::new().unwrap();
        let config = Config::from_args(args_for(
            instances.path(),
            solutions.path(),
            &["--threads", "3", "--instance-ext", ".in", "--lenient"],
        ))
        .unwrap();

        assert_eq!(config.instances_dir, instances.path());
        assert_eq!(config.thread_count, 3);
        assert_eq!(config.instance_ext, "in");
        assert_eq!(config.solution_ext, "out");
        assert_eq!(config.parse_options, ParseOptions::lenient());
    }

    #[test]
    fn test_missing_directory_fails() {
        let instances = TempDir::new().unwrap();
        let missing = instances.path().join("missing");
        let err = Config::from_args(args_for(instances.path(), &missing, &[])).unwrap_err();
        assert!(matches!(
            err,
            CliError::MissingDirectory {
                kind: "Solutions",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let dir = TempDir::new().unwrap();
        let err =
            Config::from_args(args_for(dir.path(), dir.path(), &["--threads", "0"])).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde(Path::new("instances")), PathBuf::from("instances"));
    }
}
