//! Scoring engine: replays a solution's signup and scan timeline
//!
//! Libraries sign up one at a time in solution order, so signup delays
//! accumulate. Once signed up, a library scans `scan_rate` books per day in
//! scan-list order: the book at position `i` is scanned on day
//! `i / scan_rate` after signup, and only days strictly before the deadline
//! count. A book is credited at most once across the whole solution.

use crate::error::ScoringError;
use crate::problem::{BookId, Library, ProblemInstance};
use crate::solution::{Activation, CandidateSolution, ScanEntry};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Outcome of replaying a solution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreReport {
    /// Sum of values of every credited book
    pub score: u64,
    /// Number of distinct books credited
    pub distinct_books: usize,
    /// Activations whose signup finished by the deadline
    pub libraries_signed_up: usize,
    /// Activations ignored because signup would finish after the deadline
    pub libraries_skipped: usize,
    /// Scan-list entries that fell on or after the deadline
    pub books_truncated: usize,
}

/// Whether an activation got to scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signup {
    Scanned,
    PastDeadline,
}

/// Replay `solution` against `instance` and compute its score
///
/// Deadline cutoffs are normal truncation, not errors. Invalid library
/// references, over-declared scan counts and books missing from their library
/// abort scoring entirely.
///
/// # Example
///
/// ```
/// use bookscan_scorer::{CandidateSolution, ModelParser, ProblemInstance, score};
///
/// let instance = ProblemInstance::parse("2 1 2\n1 2\n2 0 1\n0 1\n").unwrap();
/// let solution = CandidateSolution::parse("1\n0 2\n0 1\n").unwrap();
///
/// let report = score(&instance, &solution).unwrap();
/// assert_eq!(report.score, 3);
/// assert_eq!(report.distinct_books, 2);
/// ```
pub fn score(
    instance: &ProblemInstance,
    solution: &CandidateSolution,
) -> Result<ScoreReport, ScoringError> {
    let mut simulation = Simulation::new(instance);
    let activations = solution.activations();

    for (position, activation) in activations.iter().enumerate() {
        if simulation.activate(activation)? == Signup::PastDeadline {
            simulation.report.libraries_skipped = activations.len() - position;
            break;
        }
    }

    Ok(simulation.finish())
}

/// Mutable state of one scoring run
struct Simulation<'a> {
    instance: &'a ProblemInstance,
    elapsed_signup_days: u64,
    scanned_books: FxHashSet<BookId>,
    report: ScoreReport,
}

impl<'a> Simulation<'a> {
    fn new(instance: &'a ProblemInstance) -> Self {
        Self {
            instance,
            elapsed_signup_days: 0,
            scanned_books: FxHashSet::default(),
            report: ScoreReport::default(),
        }
    }

    fn activate(&mut self, activation: &Activation) -> Result<Signup, ScoringError> {
        let instance = self.instance;
        let library_id = activation.library_id();
        let library = instance
            .library(library_id)
            .ok_or(ScoringError::InvalidLibraryReference {
                library_id,
                library_count: instance.library_count(),
            })?;

        if library.declared_book_count() < activation.declared_scan_count() {
            return Err(ScoringError::DeclaredCountExceedsLibraryCapacity {
                library_id,
                capacity: library.declared_book_count(),
                requested: activation.declared_scan_count(),
            });
        }

        self.elapsed_signup_days = self
            .elapsed_signup_days
            .saturating_add(library.signup_days());

        let deadline = instance.deadline_days();
        if self.elapsed_signup_days > deadline {
            debug!(
                library_id,
                signup_done = self.elapsed_signup_days,
                deadline,
                "signup finishes after deadline, ignoring remaining activations"
            );
            return Ok(Signup::PastDeadline);
        }

        self.report.libraries_signed_up += 1;
        let remaining_days = deadline - self.elapsed_signup_days;
        debug!(
            library_id,
            signup_done = self.elapsed_signup_days,
            remaining_days,
            "library signed up"
        );
        self.scan(library_id, library, activation.scan_list(), remaining_days)?;
        Ok(Signup::Scanned)
    }

    fn scan(
        &mut self,
        library_id: usize,
        library: &Library,
        scan_list: &[ScanEntry],
        remaining_days: u64,
    ) -> Result<(), ScoringError> {
        for (position, &entry) in scan_list.iter().enumerate() {
            let book_id = BookId::try_from(entry)
                .ok()
                .filter(|&book| library.contains(book))
                .ok_or(ScoringError::BookNotInLibrary {
                    book_id: entry,
                    library_id,
                })?;

            let day_needed = position as u64 / library.scan_rate();
            if day_needed >= remaining_days {
                let truncated = scan_list.len() - position;
                debug!(library_id, position, truncated, "scan list truncated at deadline");
                self.report.books_truncated += truncated;
                break;
            }

            if self.scanned_books.insert(book_id) {
                self.report.score = self
                    .report
                    .score
                    .saturating_add(self.instance.book_value(book_id));
            }
        }
        Ok(())
    }

    fn finish(self) -> ScoreReport {
        ScoreReport {
            distinct_books: self.scanned_books.len(),
            ..self.report
        }
    }
}
