//! Book Scanning Scorer Library
//!
//! Loads Hash Code 2020 "book scanning" problem instances and candidate
//! solutions, then replays a solution's timeline to compute its score.
//!
//! # Overview
//!
//! This library provides:
//! - A loader for instance text ([`ProblemInstance`])
//! - A loader for solution text ([`CandidateSolution`])
//! - The scoring engine ([`score`]) with sequential signup and rate-limited scanning
//! - A timed wrapper for evaluating one pair ([`Evaluation`])
//!
//! # Quick Example
//!
//! ```
//! use bookscan_scorer::{ParseOptions, evaluate};
//!
//! let instance = "6 2 7\n1 2 3 6 5 4\n5 2 2\n0 1 2 3 4\n4 3 1\n3 2 5 0\n";
//! let solution = "2\n1 3\n5 2 3\n0 5\n0 1 2 3 4\n";
//!
//! let report = evaluate(instance, solution, ParseOptions::default()).unwrap();
//! assert_eq!(report.score, 16);
//! assert_eq!(report.distinct_books, 5);
//! ```
//!
//! # Key Concepts
//!
//! ## Truncation is not failure
//!
//! A library whose signup finishes after the deadline, and every library after
//! it, simply contributes nothing. Likewise a scan list is cut at the first
//! position whose scan day is not strictly before the deadline.
//!
//! ## Failures
//!
//! Malformed text yields a [`ParseError`]. A solution that references a
//! missing library, declares more scans than a library holds, or scans a book
//! the library does not have yields a [`ScoringError`] and no score.

mod error;
mod evaluation;
mod lines;
mod parser;
mod problem;
mod scoring;
mod solution;

// Re-export public API
pub use error::{EvaluationError, ParseError, ScoringError};
pub use evaluation::{Evaluation, ScoreResult, evaluate};
pub use parser::{ModelParser, ParseOptions};
pub use problem::{BookId, Library, ProblemInstance};
pub use scoring::{ScoreReport, score};
pub use solution::{Activation, CandidateSolution, ScanEntry};
