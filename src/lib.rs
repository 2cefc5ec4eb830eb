//! `cryptogram_solver` is a constraint-propagation solver for monoalphabetic
//! substitution cryptograms.
// Warns in case we forget to include documentation
#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

/// Fixed-size letter sets and the ciphertext/plaintext alphabet they range over.
pub mod alphabet;
/// CLI argument definitions, shared by the `cryptogram-solver` binary.
pub mod cli;
/// Layered configuration: built-in defaults, an optional TOML file, CLI flags.
pub mod config;
/// The read-only `Dictionary` the solver consults, plus loaders for it.
pub mod dictionary;
/// The `SolverError` type returned by fallible operations in this crate.
pub mod error;
/// Canonical word patterns ("deed" -> "abba") used to group same-shape words.
pub mod pattern;
/// The constraint-propagation search: the hard part of this crate.
pub mod solver;
/// Splits raw text into the deduplicated set of alphabet-only words it contains.
pub mod tokenizer;

pub use config::SolveConfig;
pub use dictionary::Dictionary;
pub use error::SolverError;
pub use solver::{solve, Solution};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn solves_trivial_identity_cryptogram() {
        let dict = Dictionary::from_word_frequencies([
            ("cat".to_string(), 1.0),
            ("dog".to_string(), 1.0),
        ]);
        let config = SolveConfig::default();

        let solutions = solve("cat", &dict, &config).unwrap();

        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].plaintext, "cat");
        let expected: BTreeMap<char, char> =
            [('c', 'c'), ('a', 'a'), ('t', 't')].into_iter().collect();
        assert_eq!(solutions[0].cipher, expected);
    }

    #[test]
    fn rejects_invalid_input() {
        let dict = Dictionary::from_word_frequencies([("cat".to_string(), 1.0)]);
        let config = SolveConfig::default();

        let err = solve("   ", &dict, &config).unwrap_err();
        assert!(matches!(err, SolverError::InvalidInput(_)));

        let err = solve("cat", &dict, &SolveConfig::new(0, None)).unwrap_err();
        assert!(matches!(err, SolverError::InvalidInput(_)));
    }

    #[test]
    fn empty_dictionary_returns_no_solutions() {
        let dict = Dictionary::from_word_frequencies(Vec::<(String, f64)>::new());
        let config = SolveConfig::default();

        let solutions = solve("cat", &dict, &config).unwrap();
        assert!(solutions.is_empty());
    }
}
