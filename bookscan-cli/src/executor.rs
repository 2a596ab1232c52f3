//! Parallel executor for scoring file pairs

use crate::cli::Execution;
use crate::config::Config;
use crate::discovery::FilePair;
use crate::error::{ArcExecutorError, ExecutorError, PairError};
use bookscan_scorer::{Evaluation, ParseOptions, ScoreReport};
use chrono::TimeDelta;
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::sync::mpsc::Sender;
use tracing::debug;

/// Successful score of one pair with timing
#[derive(Debug, Clone)]
pub struct PairScore {
    pub report: ScoreReport,
    pub parse_duration: TimeDelta,
    pub score_duration: TimeDelta,
}

/// Result from scoring a single pair
#[derive(Debug)]
pub struct PairResult {
    pub index: usize,
    pub name: String,
    pub outcome: Result<PairScore, PairError>,
}

/// Parallel executor for scoring pairs
pub struct Executor {
    pairs: Vec<FilePair>,
    parse_options: ParseOptions,
    execution: Execution,
    thread_pool: rayon::ThreadPool,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(pairs: Vec<FilePair>, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            pairs,
            parse_options: config.parse_options,
            execution: config.execution,
            thread_pool,
        })
    }

    pub fn pairs(&self) -> &[FilePair] {
        &self.pairs
    }

    /// Score all pairs and send results to channel
    pub fn execute(&self, tx: Sender<PairResult>) -> Result<(), ArcExecutorError> {
        match self.execution {
            Execution::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for pair in &self.pairs {
                    if let Err(e) = send_result(&tx, score_pair(pair, self.parse_options)) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            Execution::Parallel => self.execute_parallel(&tx),
        }
    }

    /// Score pairs in parallel, collecting errors
    fn execute_parallel(&self, tx: &Sender<PairResult>) -> Result<(), ArcExecutorError> {
        let parse_options = self.parse_options;

        self.thread_pool.install(|| {
            self.pairs
                .par_iter()
                .map_with(tx.clone(), |tx, pair| {
                    send_result(tx, score_pair(pair, parse_options)).err()
                })
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), e2) => Some(ArcExecutorError::combine_opt(e2, e1)),
                    (None, e2) => e2,
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }
}

fn send_result(tx: &Sender<PairResult>, result: PairResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Read, parse and score a single pair
fn score_pair(pair: &FilePair, parse_options: ParseOptions) -> PairResult {
    debug!(pair = %pair.name, "scoring pair");
    PairResult {
        index: pair.index,
        name: pair.name.clone(),
        outcome: evaluate_files(&pair.instance, &pair.solution, parse_options),
    }
}

fn evaluate_files(
    instance: &Path,
    solution: &Path,
    parse_options: ParseOptions,
) -> Result<PairScore, PairError> {
    let instance_text = read_file(instance)?;
    let solution_text = read_file(solution)?;

    let evaluation = Evaluation::new(&instance_text, &solution_text, parse_options)?;
    let result = evaluation
        .score()
        .map_err(|e| PairError::Evaluation(e.into()))?;

    Ok(PairScore {
        report: result.report,
        parse_duration: evaluation.parse_duration(),
        score_duration: result.duration(),
    })
}

fn read_file(path: &Path) -> Result<String, PairError> {
    fs::read_to_string(path).map_err(|source| PairError::Read {
        path: path.to_path_buf(),
        source,
    })
}
