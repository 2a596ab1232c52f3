//! Error types for the scorer library

use crate::problem::BookId;
use crate::solution::ScanEntry;
use thiserror::Error;

/// Error type for reading instance or solution text into a model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input ended before every declared line was read
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: &'static str },
    /// A token is not a non-negative integer that fits the target type
    #[error("Invalid token '{token}' on line {line}: expected a non-negative integer")]
    InvalidToken { line: usize, token: String },
    /// A fixed-width line has the wrong number of fields
    #[error("Line {line}: expected {expected} field(s) for {what}, found {found}")]
    FieldCount {
        line: usize,
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// A declared count disagrees with the number of IDs that follow it
    #[error("Line {line}: {what} declares {declared} book(s) but lists {found}")]
    CountMismatch {
        line: usize,
        what: &'static str,
        declared: usize,
        found: usize,
    },
    /// A library holds a book ID that has no value
    #[error("Line {line}: book {book} is out of range for {book_count} books")]
    BookOutOfRange {
        line: usize,
        book: BookId,
        book_count: usize,
    },
    /// Non-blank text follows the last declared block
    #[error("Line {line}: unexpected input after the last declared block")]
    TrailingInput { line: usize },
    /// A library can never scan anything
    #[error("Library {library} has a scan rate of zero")]
    ZeroScanRate { library: usize },
}

/// Error type for replaying a solution against an instance
///
/// Each variant aborts scoring of the whole solution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// The solution activates a library the instance does not have
    #[error("Invalid library ID: {library_id} (instance has {library_count} libraries)")]
    InvalidLibraryReference {
        library_id: usize,
        library_count: usize,
    },
    /// The solution declares more scans than the library holds books
    #[error("Library {library_id} has only {capacity} books, but solution requests {requested}")]
    DeclaredCountExceedsLibraryCapacity {
        library_id: usize,
        capacity: usize,
        requested: usize,
    },
    /// The solution scans a book from a library that does not hold it
    #[error("Book {book_id} not available in library {library_id}")]
    BookNotInLibrary {
        book_id: ScanEntry,
        library_id: usize,
    },
}

/// Error type for a full instance/solution evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The instance text could not be read
    #[error("Instance parse error: {0}")]
    Instance(#[source] ParseError),
    /// The solution text could not be read
    #[error("Solution parse error: {0}")]
    Solution(#[source] ParseError),
    /// The solution failed validation while being replayed
    #[error("{0}")]
    Scoring(#[from] ScoringError),
}
