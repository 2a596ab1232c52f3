//! Output formatting for scoring results

use crate::executor::{PairResult, PairScore};
use chrono::TimeDelta;
use num_format::{Locale, ToFormattedString};

const RULE_WIDTH: usize = 60;

/// Totals across every pair of a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Pairs attempted, scored or not
    pub pairs: usize,
    /// Pairs scored successfully
    pub scored: usize,
    pub total_score: u64,
    pub total_books: usize,
}

impl BatchSummary {
    /// Sum up results; failed pairs count as attempted and add nothing else
    pub fn from_results(results: &[PairResult]) -> Self {
        results
            .iter()
            .fold(Self::default(), |mut summary, result| {
                summary.pairs += 1;
                if let Ok(score) = &result.outcome {
                    summary.scored += 1;
                    summary.total_score = summary.total_score.saturating_add(score.report.score);
                    summary.total_books += score.report.distinct_books;
                }
                summary
            })
    }

    /// Average score per successfully scored pair
    pub fn average_score(&self) -> Option<f64> {
        (self.scored > 0).then(|| self.total_score as f64 / self.scored as f64)
    }
}

/// Output formatter for scoring results
pub struct OutputFormatter {
    quiet: bool,
    verbose: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            start_time: std::time::Instant::now(),
        }
    }

    /// Print the banner before any result
    pub fn print_header(&self) {
        if self.quiet {
            return;
        }
        println!("Hash Code 2020 Book Scanning - Score Calculator");
        println!("{}", "=".repeat(RULE_WIDTH));
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &PairResult) {
        match (&result.outcome, self.quiet) {
            (Ok(score), true) => println!("{}", score.report.score),
            (Ok(score), false) if self.verbose => {
                println!("{}", format_verbose(&result.name, score))
            }
            (Ok(score), false) => println!("{} {}", result.name, score.report.score),
            (Err(e), true) => eprintln!("Error: {}: {}", result.name, e),
            (Err(e), false) => println!("Error: {}: {}", result.name, e),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[PairResult]) {
        if self.quiet {
            return;
        }

        let summary = BatchSummary::from_results(results);
        println!("{}", "=".repeat(RULE_WIDTH));
        for line in summary_lines(&summary) {
            println!("{}", line);
        }
        if self.verbose {
            println!(
                "Elapsed wall-clock time: {}",
                format_std_duration(self.start_time.elapsed())
            );
        }
    }
}

fn format_verbose(name: &str, score: &PairScore) -> String {
    let report = &score.report;
    format!(
        "{}: {} (books scanned: {}, libraries signed up: {}, skipped: {}, scans cut at deadline: {}; parse: {}, score: {})",
        name,
        report.score.to_formatted_string(&Locale::en),
        report.distinct_books.to_formatted_string(&Locale::en),
        report.libraries_signed_up,
        report.libraries_skipped,
        report.books_truncated,
        format_duration(score.parse_duration),
        format_duration(score.score_duration),
    )
}

/// Summary lines in print order
fn summary_lines(summary: &BatchSummary) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Files processed successfully: {}/{}",
            summary.scored, summary.pairs
        ),
        format!(
            "Total books scanned: {}",
            summary.total_books.to_formatted_string(&Locale::en)
        ),
        format!(
            "Total score: {}",
            summary.total_score.to_formatted_string(&Locale::en)
        ),
    ];
    if let Some(average) = summary.average_score() {
        lines.push(format!(
            "Average score per instance: {}",
            format_decimal(average)
        ));
    }
    lines
}

/// Format with thousands separators and one decimal place
fn format_decimal(value: f64) -> String {
    let tenths = (value * 10.0).round() as u64;
    format!(
        "{}.{}",
        (tenths / 10).to_formatted_string(&Locale::en),
        tenths % 10
    )
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PairError;
    use bookscan_scorer::{EvaluationError, ScoreReport, ScoringError};

    fn scored(index: usize, score: u64, books: usize) -> PairResult {
        PairResult {
            index,
            name: format!("pair_{}", index),
            outcome: Ok(PairScore {
                report: ScoreReport {
                    score,
                    distinct_books: books,
                    ..ScoreReport::default()
                },
                parse_duration: TimeDelta::microseconds(250),
                score_duration: TimeDelta::milliseconds(12),
            }),
        }
    }

    fn failed(index: usize) -> PairResult {
        PairResult {
            index,
            name: format!("pair_{}", index),
            outcome: Err(PairError::Evaluation(EvaluationError::Scoring(
                ScoringError::BookNotInLibrary {
                    book_id: 3,
                    library_id: 0,
                },
            ))),
        }
    }

    #[test]
    fn test_summary_counts_failures_as_attempted() {
        let results = vec![scored(0, 1_000_000, 10), failed(1), scored(2, 500, 3)];
        let summary = BatchSummary::from_results(&results);
        assert_eq!(
            summary,
            BatchSummary {
                pairs: 3,
                scored: 2,
                total_score: 1_000_500,
                total_books: 13,
            }
        );
        assert_eq!(summary.average_score(), Some(500_250.0));
    }

    #[test]
    fn test_summary_total_score_saturates() {
        let summary = BatchSummary::from_results(&[scored(0, u64::MAX, 1), scored(1, 5, 1)]);
        assert_eq!(summary.total_score, u64::MAX);
        assert_eq!(summary.total_books, 2);
    }

    #[test]
    fn test_summary_lines() {
        let summary = BatchSummary::from_results(&[scored(0, 1_234_567, 4_321), failed(1)]);
        assert_eq!(
            summary_lines(&summary),
            vec![
                "Files processed successfully: 1/2".to_string(),
                "Total books scanned: 4,321".to_string(),
                "Total score: 1,234,567".to_string(),
                "Average score per instance: 1,234,567.0".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_average_without_successes() {
        let summary = BatchSummary::from_results(&[failed(0)]);
        assert_eq!(summary.average_score(), None);
        assert_eq!(summary_lines(&summary).len(), 3);
    }

    #[test]
    fn test_format_decimal_rounds() {
        assert_eq!(format_decimal(2.25), "2.3");
        assert_eq!(format_decimal(1234.04), "1,234.0");
        assert_eq!(format_decimal(0.0), "0.0");
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(250)), "250µs");
        assert_eq!(format_duration(TimeDelta::milliseconds(12)), "12.00ms");
        assert_eq!(format_duration(TimeDelta::seconds(3)), "3.00s");
    }

    #[test]
    fn test_verbose_line() {
        let result = scored(0, 16, 5);
        let Ok(score) = &result.outcome else {
            unreachable!()
        };
        let line = format_verbose("a_example", score);
        assert!(line.starts_with("a_example: 16 (books scanned: 5,"));
        assert!(line.contains("parse: 250µs"));
    }
}
