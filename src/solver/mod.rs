//! The constraint-propagation search: the hard part of this crate.
//!
//! The search keeps narrowing two linked maps until either a fully-solved
//! [`WordCandidates`] falls out (every ciphertext word has exactly one
//! candidate) or the search space is exhausted:
//!
//! - a **word-candidates map** (`WC`, [`WordCandidates`]): ciphertext word ->
//!   the dictionary words that could still be its plaintext;
//! - a **letter-candidates map** (`LC`, [`LetterCandidates`]): ciphertext
//!   letter -> the plaintext letters it could still map to, derived from the
//!   current `WC` by arc consistency plus pigeonhole closure.
//!
//! [`driver::solve`] is the depth-first search loop tying the other modules
//! together; [`candidates`], [`letter_domains`], [`partition`], and
//! [`solution`] are its leaf routines.

mod candidates;
mod driver;
mod letter_domains;
mod partition;
mod solution;

pub use driver::solve;
pub use solution::Solution;

use crate::alphabet::LetterSet;
use std::collections::BTreeMap;

/// Ciphertext word -> the (shrinking, never-empty-while-feasible) set of
/// dictionary words that could still be its plaintext.
///
/// A `BTreeMap` keyed by the ciphertext word gives deterministic iteration
/// order "for free" everywhere the search needs to pick a word
/// deterministically (the branching partitioner's "first word with more
/// than one candidate").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCandidates(BTreeMap<String, Vec<String>>);

impl WordCandidates {
    /// Builds a `WordCandidates` from already-computed per-word candidate
    /// lists.
    pub fn new(entries: BTreeMap<String, Vec<String>>) -> Self {
        Self(entries)
    }

    /// Iterates over `(ciphertext word, candidates)` pairs in ciphertext-word
    /// ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(w, c)| (w.as_str(), c.as_slice()))
    }

    /// The candidate list for `word`, if that word is part of this map.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.0.get(word).map(Vec::as_slice)
    }

    /// Whether every word's candidate list is nonempty. A `WordCandidates`
    /// that fails this is infeasible and must be discarded, never searched
    /// further.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.0.values().all(|c| !c.is_empty())
    }

    /// Whether every word has exactly one remaining candidate — the search
    /// is done once this holds (and the map is feasible).
    #[must_use]
    pub fn is_fully_determined(&self) -> bool {
        self.0.values().all(|c| c.len() == 1)
    }

    /// Replaces the candidate list for `word` with `candidates`.
    ///
    /// # Panics
    ///
    /// Panics if `word` is not already a key — this is only ever called to
    /// narrow an existing entry, never to introduce a new ciphertext word.
    pub fn set(&mut self, word: &str, candidates: Vec<String>) {
        *self.0.get_mut(word).expect("word must already be tracked") = candidates;
    }
}

/// Ciphertext letter -> the plaintext letters ([`LetterSet`] indices into
/// the dictionary's [`crate::alphabet::Alphabet`]) it could still map to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCandidates(BTreeMap<char, LetterSet>);

impl LetterCandidates {
    /// Builds a `LetterCandidates` from already-computed per-letter domains.
    pub fn new(entries: BTreeMap<char, LetterSet>) -> Self {
        Self(entries)
    }

    /// The allowed plaintext letters for ciphertext letter `c`, or `None` if
    /// `c` never appeared in the ciphertext this map was derived from.
    #[must_use]
    pub fn get(&self, c: char) -> Option<LetterSet> {
        self.0.get(&c).copied()
    }

    /// Iterates over `(ciphertext letter, allowed plaintext letters)` pairs
    /// in ciphertext-letter ascending order — the deterministic order the
    /// pigeonhole closure (§4.3) iterates in.
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterSet)> + '_ {
        self.0.iter().map(|(&c, &set)| (c, set))
    }

    /// Whether every ciphertext letter still has at least one allowed
    /// plaintext letter.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.0.values().all(|set| !set.is_empty())
    }
}
