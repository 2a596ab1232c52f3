//! Core loader trait and options

use crate::error::ParseError;

/// Options controlling how strictly text is read into a model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Require the ID line after each `N`/`K` header to hold exactly that many
    /// IDs, and reject input left over after the last declared block
    pub check_declared_counts: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::strict()
    }
}

impl ParseOptions {
    /// Validate declared counts against the IDs that follow them
    pub fn strict() -> Self {
        Self {
            check_declared_counts: true,
        }
    }

    /// Accept declared counts as given, whatever the ID line holds
    ///
    /// Layout is still driven by the declared counts: a block declaring zero
    /// IDs has no ID line, so IDs listed under it are read as the next
    /// block's header.
    pub fn lenient() -> Self {
        Self {
            check_declared_counts: false,
        }
    }
}

/// Trait for reading a line-oriented text blob into an immutable model
///
/// # Example
///
/// ```
/// use bookscan_scorer::{CandidateSolution, ModelParser, ParseOptions};
///
/// let solution = CandidateSolution::parse("1\n0 2\n0 1\n").unwrap();
/// assert_eq!(solution.activations().len(), 1);
///
/// // The scan line lists one book but declares two
/// assert!(CandidateSolution::parse("1\n0 2\n0\n").is_err());
/// assert!(CandidateSolution::parse_with("1\n0 2\n0\n", ParseOptions::lenient()).is_ok());
/// ```
pub trait ModelParser: Sized {
    /// Parse the input with explicit options.
    fn parse_with(input: &str, options: ParseOptions) -> Result<Self, ParseError>;

    /// Parse the input with default (strict) options.
    fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, ParseOptions::default())
    }
}
