//! Timed evaluation of one instance/solution pair

use crate::error::{EvaluationError, ScoringError};
use crate::parser::{ModelParser, ParseOptions};
use crate::problem::ProblemInstance;
use crate::scoring::{ScoreReport, score};
use crate::solution::CandidateSolution;
use chrono::{DateTime, TimeDelta, Utc};

/// Score of a pair, including timing information
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub report: ScoreReport,
    /// When scoring started (UTC)
    pub score_start: DateTime<Utc>,
    /// When scoring completed (UTC)
    pub score_end: DateTime<Utc>,
}

impl ScoreResult {
    /// Get the scoring duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.score_end - self.score_start
    }
}

/// Both models of a pair, parsed and ready to score
///
/// Holds fresh, unshared models for exactly one pair. Parse timing covers
/// both loaders.
pub struct Evaluation {
    instance: ProblemInstance,
    solution: CandidateSolution,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl Evaluation {
    /// Parse the instance and solution text
    ///
    /// # Returns
    /// * `Ok(Evaluation)` - Both models parsed
    /// * `Err(EvaluationError::Instance)` - The instance text is malformed
    /// * `Err(EvaluationError::Solution)` - The solution text is malformed
    pub fn new(
        instance_text: &str,
        solution_text: &str,
        options: ParseOptions,
    ) -> Result<Self, EvaluationError> {
        let parse_start = Utc::now();
        let instance = ProblemInstance::parse_with(instance_text, options)
            .map_err(EvaluationError::Instance)?;
        let solution = CandidateSolution::parse_with(solution_text, options)
            .map_err(EvaluationError::Solution)?;
        let parse_end = Utc::now();

        Ok(Self {
            instance,
            solution,
            parse_start,
            parse_end,
        })
    }

    /// Replay the solution with timing
    pub fn score(&self) -> Result<ScoreResult, ScoringError> {
        let score_start = Utc::now();
        let report = score(&self.instance, &self.solution)?;
        let score_end = Utc::now();

        Ok(ScoreResult {
            report,
            score_start,
            score_end,
        })
    }

    pub fn instance(&self) -> &ProblemInstance {
        &self.instance
    }

    pub fn solution(&self) -> &CandidateSolution {
        &self.solution
    }

    /// Convenience: get parse duration as TimeDelta
    pub fn parse_duration(&self) -> TimeDelta {
        self.parse_end - self.parse_start
    }
}

/// Parse and score a pair in one call
pub fn evaluate(
    instance_text: &str,
    solution_text: &str,
    options: ParseOptions,
) -> Result<ScoreReport, EvaluationError> {
    let evaluation = Evaluation::new(instance_text, solution_text, options)?;
    Ok(evaluation.score()?.report)
}
