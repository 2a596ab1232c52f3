//! Line-oriented integer reader shared by both loaders
//!
//! Blank and whitespace-only lines are skipped. Every returned line keeps its
//! 1-based position in the original text so errors can point at it.

use crate::error::ParseError;
use std::iter::Enumerate;
use std::str::{FromStr, Lines};

/// Reader over the non-blank lines of a text blob
pub(crate) struct LineReader<'a> {
    lines: Enumerate<Lines<'a>>,
}

/// A single non-blank line
#[derive(Debug, Clone, Copy)]
pub(crate) struct Line<'a> {
    pub number: usize,
    text: &'a str,
}

impl<'a> LineReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
        }
    }

    /// Return the next non-blank line, or `UnexpectedEof` naming what was expected
    pub fn next_line(&mut self, expected: &'static str) -> Result<Line<'a>, ParseError> {
        self.next_non_blank()
            .ok_or(ParseError::UnexpectedEof { expected })
    }

    /// Fail with `TrailingInput` if any non-blank line is left
    pub fn expect_end(&mut self) -> Result<(), ParseError> {
        match self.next_non_blank() {
            Some(line) => Err(ParseError::TrailingInput { line: line.number }),
            None => Ok(()),
        }
    }

    fn next_non_blank(&mut self) -> Option<Line<'a>> {
        self.lines
            .by_ref()
            .map(|(idx, text)| (idx + 1, text.trim()))
            .find(|(_, text)| !text.is_empty())
            .map(|(number, text)| Line { number, text })
    }
}

impl Line<'_> {
    /// Number of whitespace-separated tokens on this line
    pub fn len(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Parse every token on the line
    pub fn values<T: FromStr>(&self) -> Result<Vec<T>, ParseError> {
        self.text
            .split_whitespace()
            .map(|token| self.parse_token(token))
            .collect()
    }

    /// Parse a line that must hold exactly `N` tokens
    pub fn fields<T: FromStr, const N: usize>(
        &self,
        what: &'static str,
    ) -> Result<[T; N], ParseError> {
        let found = self.len();
        if found != N {
            return Err(ParseError::FieldCount {
                line: self.number,
                what,
                expected: N,
                found,
            });
        }
        <[T; N]>::try_from(self.values::<T>()?).map_err(|_| ParseError::FieldCount {
            line: self.number,
            what,
            expected: N,
            found,
        })
    }

    fn parse_token<T: FromStr>(&self, token: &str) -> Result<T, ParseError> {
        token.parse().map_err(|_| ParseError::InvalidToken {
            line: self.number,
            token: token.to_string(),
        })
    }
}
