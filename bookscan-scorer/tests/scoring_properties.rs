//! Property-based tests for the scoring engine
//!
//! Random instances and solutions are rendered to text, loaded through the
//! public loaders and scored, then checked against a day-by-day replay.

use bookscan_scorer::{
    CandidateSolution, ModelParser, ParseOptions, ProblemInstance, ScoringError, evaluate, score,
};
use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
struct GenLibrary {
    signup: u64,
    rate: u64,
    books: Vec<u32>,
}

#[derive(Debug, Clone)]
struct Case {
    deadline: u64,
    values: Vec<u64>,
    libraries: Vec<GenLibrary>,
    activations: Vec<(usize, Vec<u32>)>,
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl Case {
    fn instance_text(&self) -> String {
        let mut text = format!(
            "{} {} {}\n{}\n",
            self.values.len(),
            self.libraries.len(),
            self.deadline,
            join(&self.values)
        );
        for library in &self.libraries {
            text.push_str(&format!(
                "{} {} {}\n{}\n",
                library.books.len(),
                library.signup,
                library.rate,
                join(&library.books)
            ));
        }
        text
    }

    fn solution_text(&self) -> String {
        render_solution(&self.activations)
    }
}

fn render_solution(activations: &[(usize, Vec<u32>)]) -> String {
    let mut text = format!("{}\n", activations.len());
    for (library, scans) in activations {
        text.push_str(&format!("{} {}\n{}\n", library, scans.len(), join(scans)));
    }
    text
}

fn case_strategy() -> impl Strategy<Value = Case> {
    (1usize..12, 1usize..5, 0u64..15)
        .prop_flat_map(|(book_count, library_count, deadline)| {
            let values = prop::collection::vec(0u64..100, book_count);
            let libraries = prop::collection::vec(
                (
                    0u64..5,
                    1u64..4,
                    prop::collection::vec(0..book_count as u32, 1..=book_count),
                ),
                library_count,
            );
            let activations = prop::collection::vec(
                (0..library_count, prop::collection::vec(any::<Index>(), 0..8)),
                0..6,
            );
            (Just(deadline), values, libraries, activations)
        })
        .prop_map(|(deadline, values, libraries, activations)| {
            let libraries: Vec<GenLibrary> = libraries
                .into_iter()
                .map(|(signup, rate, books)| GenLibrary {
                    signup,
                    rate,
                    books,
                })
                .collect();
            let activations = activations
                .into_iter()
                .map(|(library, picks)| {
                    let books = &libraries[library].books;
                    let scans = picks
                        .iter()
                        .take(books.len())
                        .map(|pick| books[pick.index(books.len())])
                        .collect();
                    (library, scans)
                })
                .collect();
            Case {
                deadline,
                values,
                libraries,
                activations,
            }
        })
}

/// Day-by-day replay: each signed-up library scans `rate` books per day
fn reference_score(case: &Case) -> (u64, usize) {
    let mut credited = BTreeSet::new();
    let mut day = 0;
    for (library, scans) in &case.activations {
        let library = &case.libraries[*library];
        day += library.signup;
        if day > case.deadline {
            break;
        }
        let scanning_days = case.deadline - day;
        for (scan_day, batch) in scans.chunks(library.rate as usize).enumerate() {
            if scan_day as u64 >= scanning_days {
                break;
            }
            credited.extend(batch.iter().copied());
        }
    }
    let total = credited.iter().map(|&b| case.values[b as usize]).sum();
    (total, credited.len())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// **Property 1: Score is explained by the credited set**
    /// *For any* valid pair, the score and distinct count equal the value sum
    /// and size of the set of books a day-by-day replay credits.
    #[test]
    fn prop_matches_day_by_day_replay(case in case_strategy()) {
        let report = evaluate(&case.instance_text(), &case.solution_text(), ParseOptions::default())
            .unwrap();
        let (expected_score, expected_books) = reference_score(&case);
        prop_assert_eq!(report.score, expected_score);
        prop_assert_eq!(report.distinct_books, expected_books);
        prop_assert!(
            report.libraries_signed_up + report.libraries_skipped <= case.activations.len()
        );
    }

    /// **Property 2: Idempotent crediting**
    /// *For any* valid pair, repeating one of its activations at the end never
    /// changes the score: the copy starts later and so reaches no new books.
    #[test]
    fn prop_repeated_activation_adds_nothing(case in case_strategy(), pick in any::<Index>()) {
        prop_assume!(!case.activations.is_empty());
        let instance = ProblemInstance::parse(&case.instance_text()).unwrap();
        let original = CandidateSolution::parse(&case.solution_text()).unwrap();

        let mut activations = case.activations.clone();
        activations.push(activations[pick.index(activations.len())].clone());
        let repeated = CandidateSolution::parse(&render_solution(&activations)).unwrap();

        let before = score(&instance, &original).unwrap();
        let after = score(&instance, &repeated).unwrap();
        prop_assert_eq!(before.score, after.score);
        prop_assert_eq!(before.distinct_books, after.distinct_books);
    }

    /// **Property 3: Invalid first reference aborts**
    /// *For any* instance, a solution whose first activation names library `L`
    /// fails with `InvalidLibraryReference` regardless of what follows.
    #[test]
    fn prop_out_of_range_library_aborts(case in case_strategy()) {
        let library_count = case.libraries.len();
        let mut activations = vec![(library_count, Vec::new())];
        activations.extend(case.activations.iter().cloned());

        let instance = ProblemInstance::parse(&case.instance_text()).unwrap();
        let solution = CandidateSolution::parse(&render_solution(&activations)).unwrap();
        let err = score(&instance, &solution).unwrap_err();
        prop_assert_eq!(err, ScoringError::InvalidLibraryReference {
            library_id: library_count,
            library_count,
        });
    }

    /// **Property 4: Zero deadline scores nothing**
    /// *For any* valid pair scored with `D = 0`, no book is credited.
    #[test]
    fn prop_zero_deadline_scores_zero(case in case_strategy()) {
        let case = Case { deadline: 0, ..case };
        let report = evaluate(&case.instance_text(), &case.solution_text(), ParseOptions::default())
            .unwrap();
        prop_assert_eq!(report.score, 0);
        prop_assert_eq!(report.distinct_books, 0);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    const BASE: &str = "2 1 2\n1 2\n2 {T} 1\n0 1\n";

    fn with_signup(signup: u64) -> String {
        BASE.replace("{T}", &signup.to_string())
    }

    #[test]
    fn test_no_truncation() {
        let report = evaluate(&with_signup(0), "1\n0 2\n0 1\n", ParseOptions::default()).unwrap();
        assert_eq!((report.score, report.distinct_books), (3, 2));
    }

    #[test]
    fn test_truncated_at_signup_deadline() {
        let report = evaluate(&with_signup(2), "1\n0 2\n0 1\n", ParseOptions::default()).unwrap();
        assert_eq!((report.score, report.distinct_books), (0, 0));
    }

    #[test]
    fn test_skipped_past_deadline() {
        let report = evaluate(&with_signup(3), "1\n0 2\n0 1\n", ParseOptions::default()).unwrap();
        assert_eq!((report.score, report.distinct_books), (0, 0));
        assert_eq!(report.libraries_skipped, 1);
    }
}
