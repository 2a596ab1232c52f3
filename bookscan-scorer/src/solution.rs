//! Candidate solution model and its loader
//!
//! Solution text layout:
//!
//! ```text
//! A
//! Y K               (repeated A times, each followed by:)
//! id_0 ... id_{K-1}
//! ```

use crate::error::ParseError;
use crate::lines::LineReader;
use crate::parser::{ModelParser, ParseOptions};
use crate::problem::{check_declared, to_usize};

/// A book ID as written in a scan list
///
/// Wider than [`BookId`](crate::BookId) and signed: only scan positions the
/// timeline reaches are checked against the library, so an entry may name a
/// book that does not exist.
pub type ScanEntry = i64;

/// One library signup with the books it should scan, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    library_id: usize,
    declared_scan_count: usize,
    scan_list: Vec<ScanEntry>,
}

impl Activation {
    pub fn library_id(&self) -> usize {
        self.library_id
    }

    /// The `K` from the activation header, as written
    pub fn declared_scan_count(&self) -> usize {
        self.declared_scan_count
    }

    /// Books in scan submission order
    pub fn scan_list(&self) -> &[ScanEntry] {
        &self.scan_list
    }
}

/// A parsed candidate solution: activations in signup order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSolution {
    activations: Vec<Activation>,
}

impl CandidateSolution {
    pub fn activations(&self) -> &[Activation] {
        &self.activations
    }
}

impl ModelParser for CandidateSolution {
    fn parse_with(input: &str, options: ParseOptions) -> Result<Self, ParseError> {
        let mut reader = LineReader::new(input);

        let header = reader.next_line("solution header")?;
        let [activation_count] = header.fields::<u64, 1>("solution header")?;
        let activation_count = to_usize(activation_count, &header)?;

        let activations = (0..activation_count)
            .map(|_| parse_activation(&mut reader, options))
            .collect::<Result<Vec<_>, _>>()?;

        if options.check_declared_counts {
            reader.expect_end()?;
        }

        Ok(Self { activations })
    }
}

fn parse_activation(
    reader: &mut LineReader<'_>,
    options: ParseOptions,
) -> Result<Activation, ParseError> {
    let header = reader.next_line("activation header")?;
    let [library_id, declared] = header.fields::<u64, 2>("activation header")?;
    let library_id = to_usize(library_id, &header)?;
    let declared_scan_count = to_usize(declared, &header)?;

    let scan_list = if declared_scan_count == 0 {
        Vec::new()
    } else {
        let line = reader.next_line("scan list")?;
        check_declared(&line, "activation", declared_scan_count, options)?;
        line.values::<ScanEntry>()?
    };

    Ok(Activation {
        library_id,
        declared_scan_count,
        scan_list,
    })
}
