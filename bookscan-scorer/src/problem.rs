//! Problem instance model and its loader
//!
//! Instance text layout (whitespace-separated integers, blank lines ignored):
//!
//! ```text
//! B L D
//! v_0 v_1 ... v_{B-1}
//! N T M              (repeated L times, each followed by:)
//! id_0 id_1 ... id_{N-1}
//! ```

use crate::error::ParseError;
use crate::lines::{Line, LineReader};
use crate::parser::{ModelParser, ParseOptions};
use rustc_hash::FxHashSet;

/// Identifier of a book, valid in `[0, book_count)`
pub type BookId = u32;

/// A library: signup delay, daily scan rate and the books it holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    signup_days: u64,
    scan_rate: u64,
    declared_book_count: usize,
    books: FxHashSet<BookId>,
}

impl Library {
    /// Days of signup before this library can scan
    pub fn signup_days(&self) -> u64 {
        self.signup_days
    }

    /// Books this library can scan per day once signed up
    pub fn scan_rate(&self) -> u64 {
        self.scan_rate
    }

    /// The `N` from the library header, used to cap a solution's declared scans
    pub fn declared_book_count(&self) -> usize {
        self.declared_book_count
    }

    pub fn contains(&self, book: BookId) -> bool {
        self.books.contains(&book)
    }

    pub fn books(&self) -> &FxHashSet<BookId> {
        &self.books
    }
}

/// A parsed, validated problem instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemInstance {
    deadline_days: u64,
    book_values: Vec<u64>,
    libraries: Vec<Library>,
}

impl ProblemInstance {
    /// Total number of distinct book IDs (`B`)
    pub fn book_count(&self) -> usize {
        self.book_values.len()
    }

    /// Number of libraries (`L`)
    pub fn library_count(&self) -> usize {
        self.libraries.len()
    }

    /// Days available for signup and scanning (`D`)
    pub fn deadline_days(&self) -> u64 {
        self.deadline_days
    }

    /// Score of a book. Every book held by a library has a value.
    pub fn book_value(&self, book: BookId) -> u64 {
        self.book_values[book as usize]
    }

    pub fn book_values(&self) -> &[u64] {
        &self.book_values
    }

    pub fn library(&self, id: usize) -> Option<&Library> {
        self.libraries.get(id)
    }

    pub fn libraries(&self) -> &[Library] {
        &self.libraries
    }
}

impl ModelParser for ProblemInstance {
    fn parse_with(input: &str, options: ParseOptions) -> Result<Self, ParseError> {
        let mut reader = LineReader::new(input);

        let header = reader.next_line("instance header")?;
        let [book_count, library_count, deadline_days] =
            header.fields::<u64, 3>("instance header")?;
        let book_count = to_usize(book_count, &header)?;
        let library_count = to_usize(library_count, &header)?;

        let book_values = if book_count == 0 {
            Vec::new()
        } else {
            let line = reader.next_line("book values")?;
            if line.len() != book_count {
                return Err(ParseError::FieldCount {
                    line: line.number,
                    what: "book values",
                    expected: book_count,
                    found: line.len(),
                });
            }
            line.values::<u64>()?
        };

        let libraries = (0..library_count)
            .map(|library| parse_library(&mut reader, library, book_count, options))
            .collect::<Result<Vec<_>, _>>()?;

        if options.check_declared_counts {
            reader.expect_end()?;
        }

        Ok(Self {
            deadline_days,
            book_values,
            libraries,
        })
    }
}

fn parse_library(
    reader: &mut LineReader<'_>,
    library: usize,
    book_count: usize,
    options: ParseOptions,
) -> Result<Library, ParseError> {
    let header = reader.next_line("library header")?;
    let [declared, signup_days, scan_rate] = header.fields::<u64, 3>("library header")?;
    let declared_book_count = to_usize(declared, &header)?;

    if scan_rate == 0 {
        return Err(ParseError::ZeroScanRate { library });
    }

    let books = if declared_book_count == 0 {
        FxHashSet::default()
    } else {
        let line = reader.next_line("library books")?;
        check_declared(&line, "library", declared_book_count, options)?;
        let ids = line.values::<BookId>()?;
        if let Some(&book) = ids.iter().find(|&&b| b as usize >= book_count) {
            return Err(ParseError::BookOutOfRange {
                line: line.number,
                book,
                book_count,
            });
        }
        ids.into_iter().collect()
    };

    Ok(Library {
        signup_days,
        scan_rate,
        declared_book_count,
        books,
    })
}

/// Compare a declared count against the IDs on its line when strict
pub(crate) fn check_declared(
    line: &Line<'_>,
    what: &'static str,
    declared: usize,
    options: ParseOptions,
) -> Result<(), ParseError> {
    if options.check_declared_counts && line.len() != declared {
        return Err(ParseError::CountMismatch {
            line: line.number,
            what,
            declared,
            found: line.len(),
        });
    }
    Ok(())
}

pub(crate) fn to_usize(value: u64, line: &Line<'_>) -> Result<usize, ParseError> {
    usize::try_from(value).map_err(|_| ParseError::InvalidToken {
        line: line.number,
        token: value.to_string(),
    })
}
