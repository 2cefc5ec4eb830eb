//! Letter-domain computation (§4.3): arc consistency over per-word
//! candidates, followed by Hall-style pigeonhole closure to fixpoint.

use super::{LetterCandidates, WordCandidates};
use crate::alphabet::{Alphabet, LetterSet};
use std::collections::{BTreeMap, BTreeSet};

/// Derives the letter-candidates map `LC` from `wc`.
///
/// Step 1/2 (arc consistency): for each ciphertext letter, intersects the
/// per-word allowed-letter sets across every word it appears in. Step 3/4
/// (pigeonhole closure): iterates to fixpoint, removing any plaintext
/// letters exclusively claimed by a group of ciphertext letters whose
/// shared domain is no larger than the group itself.
#[must_use]
pub fn compute_letter_candidates(wc: &WordCandidates, alphabet: &Alphabet) -> LetterCandidates {
    let mut domains: BTreeMap<char, LetterSet> = BTreeMap::new();

    for (word, candidates) in wc.iter() {
        let mut seen_letters = BTreeSet::new();
        for (position, cipher_letter) in word.chars().enumerate() {
            // Pattern equivalence guarantees every occurrence of the same
            // ciphertext letter in this word sees the same allowed set, so
            // the first position we meet it at is enough.
            if !seen_letters.insert(cipher_letter) {
                continue;
            }

            let mut allowed = LetterSet::EMPTY;
            for candidate in candidates {
                if let Some(plain_letter) = candidate.chars().nth(position) {
                    if let Some(index) = alphabet.index_of(plain_letter) {
                        allowed.insert(index);
                    }
                }
            }

            domains
                .entry(cipher_letter)
                .and_modify(|existing| *existing = existing.intersection(&allowed))
                .or_insert(allowed);
        }
    }

    pigeonhole_closure(&mut domains);

    LetterCandidates::new(domains)
}

/// Repeatedly claims plaintext letters for groups of ciphertext letters that
/// share an identically-sized-or-smaller domain, removing the claimed
/// letters from every other ciphertext letter's domain, until nothing
/// changes. Bounded by `domains.len()` iterations (a testable property):
/// each pass either changes something or terminates the loop, and there are
/// only finitely many strictly-shrinking states a domain can pass through.
fn pigeonhole_closure(domains: &mut BTreeMap<char, LetterSet>) {
    loop {
        let mut groups: BTreeMap<LetterSet, Vec<char>> = BTreeMap::new();
        for (&letter, &set) in domains.iter() {
            groups.entry(set).or_default().push(letter);
        }

        let mut changed = false;
        for (claimed, sharers) in &groups {
            if claimed.is_empty() {
                continue;
            }
            // Hall-style claim: `sharers.len()` ciphertext letters confined
            // to a domain no larger than themselves exclusively own it.
            // `< sharers.len()` is the strict pigeonhole violation (§9): it
            // proves infeasibility, but we still remove the claim and let
            // word-candidate pruning reject the map, rather than special
            // casing the failure here.
            if (claimed.len() as usize) > sharers.len() {
                continue;
            }
            for (letter, domain) in domains.iter_mut() {
                if sharers.contains(letter) {
                    continue;
                }
                let narrowed = domain.difference(claimed);
                if narrowed != *domain {
                    *domain = narrowed;
                    changed = true;
                }
            }
        }

        if !changed {
            break;
        }
    }
}
