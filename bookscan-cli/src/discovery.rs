//! Matching instance files to solution files by base name

use crate::error::CliError;
use itertools::{EitherOrBoth, Itertools};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// An instance file and the solution file sharing its base name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    /// Position in discovery order, used to report results in order
    pub index: usize,
    /// Shared file stem
    pub name: String,
    pub instance: PathBuf,
    pub solution: PathBuf,
}

/// Result of scanning both directories
#[derive(Debug, Default)]
pub struct Discovery {
    /// Matched pairs, sorted by name
    pub pairs: Vec<FilePair>,
    /// Instance stems with no solution
    pub unmatched_instances: Vec<String>,
    /// Solution stems with no instance
    pub unmatched_solutions: Vec<String>,
}

impl Discovery {
    /// Scan both directories and match files by stem
    ///
    /// Directory layout: `{instances_dir}/{name}.{instance_ext}` pairs with
    /// `{solutions_dir}/{name}.{solution_ext}`.
    pub fn scan(
        instances_dir: &Path,
        instance_ext: &str,
        solutions_dir: &Path,
        solution_ext: &str,
    ) -> Result<Self, CliError> {
        let instances = files_by_stem(instances_dir, instance_ext)?;
        let solutions = files_by_stem(solutions_dir, solution_ext)?;
        Ok(Self::match_files(instances, solutions))
    }

    fn match_files(
        instances: BTreeMap<String, PathBuf>,
        solutions: BTreeMap<String, PathBuf>,
    ) -> Self {
        let mut discovery = Self::default();

        for entry in instances
            .into_iter()
            .merge_join_by(solutions, |(a, _), (b, _)| a.cmp(b))
        {
            match entry {
                EitherOrBoth::Both((name, instance), (_, solution)) => {
                    discovery.pairs.push(FilePair {
                        index: discovery.pairs.len(),
                        name,
                        instance,
                        solution,
                    });
                }
                EitherOrBoth::Left((name, _)) => discovery.unmatched_instances.push(name),
                EitherOrBoth::Right((name, _)) => discovery.unmatched_solutions.push(name),
            }
        }

        discovery
    }
}

/// Regular files in `dir` with extension `ext`, keyed by stem
fn files_by_stem(dir: &Path, ext: &str) -> Result<BTreeMap<String, PathBuf>, CliError> {
    let mut files = BTreeMap::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().is_none_or(|e| e != ext) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            files.insert(stem.to_string(), path.clone());
        }
    }
    Ok(files)
}
