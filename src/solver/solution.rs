//! Solution assembly and ranking (§4.6): turning a fully-determined
//! `WordCandidates` into a `Solution`, and sorting a batch of them.

use super::WordCandidates;
use crate::dictionary::Dictionary;
use crate::error::SolverError;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// A candidate plaintext for a solved cryptogram: the decoded text, the
/// cipher mapping that produced it (ciphertext letter -> plaintext letter,
/// ordered ascending by ciphertext letter), and its mean dictionary
/// frequency, used to rank solutions against each other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// The ciphertext with the cipher applied to its alphabet letters.
    /// Non-alphabet characters are copied through unchanged, and each
    /// letter's original case is preserved (§9's casing policy decision).
    pub plaintext: String,
    /// The cipher: ciphertext letter -> plaintext letter, injective,
    /// ordered by ciphertext letter ascending.
    pub cipher: BTreeMap<char, char>,
    /// The mean dictionary frequency of this solution's plaintext words;
    /// the sort key solutions are ranked by, descending.
    pub mean_frequency: f64,
}

/// Assembles a [`Solution`] from a fully-determined `wc` (every word has
/// exactly one remaining candidate).
///
/// # Errors
///
/// Returns [`SolverError::Internal`] if zipping a ciphertext word against
/// its sole candidate reveals a length mismatch or a non-injective letter
/// mapping. Neither can happen against a well-formed dictionary — pattern
/// matching guarantees equal length, and the letter-domain propagator
/// guarantees a consistent mapping — so reaching either branch indicates a
/// bug in the search itself, not a property of the caller's input.
pub fn assemble(ciphertext: &str, wc: &WordCandidates, dictionary: &Dictionary) -> Result<Solution, SolverError> {
    let mut cipher: BTreeMap<char, char> = BTreeMap::new();
    let mut claimed_plaintext_letters: HashSet<char> = HashSet::new();

    for (word, candidates) in wc.iter() {
        let candidate = candidates.first().ok_or_else(|| {
            SolverError::Internal(format!("word {word:?} has no candidate at assembly time"))
        })?;

        if word.chars().count() != candidate.chars().count() {
            return Err(SolverError::Internal(format!(
                "ciphertext word {word:?} and candidate {candidate:?} have different lengths"
            )));
        }

        for (cipher_letter, plain_letter) in word.chars().zip(candidate.chars()) {
            match cipher.get(&cipher_letter) {
                Some(&existing) if existing != plain_letter => {
                    return Err(SolverError::Internal(format!(
                        "ciphertext letter {cipher_letter:?} maps to both {existing:?} and {plain_letter:?}"
                    )));
                }
                Some(_) => {}
                None => {
                    if !claimed_plaintext_letters.insert(plain_letter) {
                        return Err(SolverError::Internal(format!(
                            "plaintext letter {plain_letter:?} is claimed by two ciphertext letters"
                        )));
                    }
                    cipher.insert(cipher_letter, plain_letter);
                }
            }
        }
    }

    let plaintext = apply_cipher_preserving_case(ciphertext, &cipher);
    let mean_frequency = mean_frequency(wc, dictionary);

    Ok(Solution {
        plaintext,
        cipher,
        mean_frequency,
    })
}

/// Maps every alphabet letter of `text` through `cipher`, preserving the
/// original upper/lowercase of each letter and copying every other
/// character through unchanged at its original position.
fn apply_cipher_preserving_case(text: &str, cipher: &BTreeMap<char, char>) -> String {
    text.chars()
        .map(|c| match cipher.get(&c.to_ascii_lowercase()) {
            Some(&mapped) if c.is_ascii_uppercase() => mapped.to_ascii_uppercase(),
            Some(&mapped) => mapped,
            None => c,
        })
        .collect()
}

/// `Σ freq(w) / count(w)` over the fully-determined `wc`'s chosen
/// candidate for each ciphertext word (§3's `Solution.mean_frequency`).
fn mean_frequency(wc: &WordCandidates, dictionary: &Dictionary) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    for (_, candidates) in wc.iter() {
        if let Some(word) = candidates.first() {
            total += dictionary.frequency(word);
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap as Map;

    fn solved_wc(entries: &[(&str, &str)]) -> WordCandidates {
        let map = entries
            .iter()
            .map(|(word, candidate)| ((*word).to_string(), vec![(*candidate).to_string()]))
            .collect::<Map<_, _>>();
        WordCandidates::new(map)
    }

    #[test]
    fn assembles_identity_solution() {
        let dict = Dictionary::from_word_frequencies([("cat".to_string(), 4.0)]);
        let wc = solved_wc(&[("cat", "cat")]);
        let solution = assemble("cat", &wc, &dict).unwrap();
        assert_eq!(solution.plaintext, "cat");
        assert_eq!(solution.mean_frequency, 4.0);
        assert_eq!(solution.cipher.len(), 3);
    }

    #[test]
    fn preserves_non_alphabet_characters_and_case() {
        let dict = Dictionary::from_word_frequencies([
            ("hello".to_string(), 5.0),
            ("world".to_string(), 4.0),
        ]);
        let wc = solved_wc(&[("ifmmp", "hello"), ("xpsme", "world")]);
        let solution = assemble("Ifmmp, Xpsme!", &wc, &dict).unwrap();
        assert_eq!(solution.plaintext, "Hello, World!");
    }

    #[test]
    fn rejects_non_injective_cipher_as_internal_error() {
        // Two different ciphertext letters both claiming 'a' — cannot arise
        // from a correctly pruned WC, but assembly must still catch it.
        let dict = Dictionary::from_word_frequencies([
            ("ab".to_string(), 1.0),
            ("cb".to_string(), 1.0),
        ]);
        let entries = [
            ("xy".to_string(), vec!["ab".to_string()]),
            ("zy".to_string(), vec!["cb".to_string()]),
        ]
        .into_iter()
        .collect::<Map<_, _>>();
        // 'y' maps to 'b' from both words (fine, consistent); but force a
        // clash by also mapping 'x' and 'z' to the same plaintext letter.
        let mut entries = entries;
        entries.insert("xy".to_string(), vec!["ab".to_string()]);
        entries.insert("zy".to_string(), vec!["ab".to_string()]);
        let wc = WordCandidates::new(entries);

        let err = assemble("xy zy", &wc, &dict).unwrap_err();
        assert!(matches!(err, SolverError::Internal(_)));
    }

    #[test]
    fn mean_frequency_averages_over_every_word() {
        let dict = Dictionary::from_word_frequencies([
            ("cat".to_string(), 10.0),
            ("dog".to_string(), 0.0),
        ]);
        let wc = solved_wc(&[("cat", "cat"), ("dog", "dog")]);
        let solution = assemble("cat dog", &wc, &dict).unwrap();
        assert_eq!(solution.mean_frequency, 5.0);
    }
}
