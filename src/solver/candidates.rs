//! Word-candidate initialization (§4.2) and pruning (§4.4).

use super::{LetterCandidates, WordCandidates};
use crate::alphabet::Alphabet;
use crate::dictionary::Dictionary;
use crate::pattern::pattern;
use std::collections::{BTreeMap, BTreeSet};

/// Builds `WC₀`: for each ciphertext word, the dictionary words sharing its
/// pattern (empty if the pattern is unknown to the dictionary).
#[must_use]
pub fn initial_candidates(words: &BTreeSet<String>, dictionary: &Dictionary) -> WordCandidates {
    let entries = words
        .iter()
        .map(|word| {
            let candidates = dictionary
                .words_with_pattern(&pattern(word))
                .into_iter()
                .map(str::to_string)
                .collect();
            (word.clone(), candidates)
        })
        .collect::<BTreeMap<_, _>>();
    WordCandidates::new(entries)
}

/// Narrows `wc` to `wc'` by dropping, from every word's candidate list, any
/// candidate whose letters fall outside `lc`'s domain at the corresponding
/// position (§4.4). Returns `None` if any word's candidate list becomes
/// empty — the `WordCandidates` is infeasible and must be discarded.
#[must_use]
pub fn prune(
    wc: &WordCandidates,
    lc: &LetterCandidates,
    alphabet: &Alphabet,
) -> Option<WordCandidates> {
    let mut entries = BTreeMap::new();

    for (word, candidates) in wc.iter() {
        let kept: Vec<String> = candidates
            .iter()
            .filter(|candidate| candidate_fits(word, candidate, lc, alphabet))
            .cloned()
            .collect();

        if kept.is_empty() {
            return None;
        }
        entries.insert(word.to_string(), kept);
    }

    Some(WordCandidates::new(entries))
}

/// Whether every letter of `candidate` lies inside the current domain of the
/// ciphertext letter at the same position in `word`.
fn candidate_fits(word: &str, candidate: &str, lc: &LetterCandidates, alphabet: &Alphabet) -> bool {
    word.chars().zip(candidate.chars()).all(|(cipher_letter, plain_letter)| {
        let Some(domain) = lc.get(cipher_letter) else {
            // Every ciphertext letter in `word` must have an LC entry,
            // since LC is derived from a WC containing `word`.
            return true;
        };
        match alphabet.index_of(plain_letter) {
            Some(index) => domain.contains(index),
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::LetterSet;
    use std::collections::BTreeSet;

    #[test]
    fn initial_candidates_groups_by_pattern() {
        let dict = Dictionary::from_word_frequencies([
            ("noon".to_string(), 10.0),
            ("peep".to_string(), 3.0),
            ("cat".to_string(), 1.0),
        ]);
        let words = BTreeSet::from(["xyyx".to_string()]);
        let wc = initial_candidates(&words, &dict);

        let mut candidates = wc.get("xyyx").unwrap().to_vec();
        candidates.sort();
        assert_eq!(candidates, vec!["noon".to_string(), "peep".to_string()]);
    }

    #[test]
    fn unknown_pattern_yields_empty_candidates() {
        let dict = Dictionary::from_word_frequencies([("cat".to_string(), 1.0)]);
        let words = BTreeSet::from(["abba".to_string()]);
        let wc = initial_candidates(&words, &dict);
        assert!(wc.get("abba").unwrap().is_empty());
        assert!(!wc.is_feasible());
    }

    #[test]
    fn prune_drops_candidates_outside_letter_domain() {
        let alphabet = Alphabet::english();
        let mut wc = BTreeMap::new();
        wc.insert(
            "cat".to_string(),
            vec!["cat".to_string(), "dog".to_string()],
        );
        let wc = WordCandidates::new(wc);

        // Restrict ciphertext letter 'c' to only plaintext 'c' (index 2),
        // which rules out "dog" ('d' at the same position).
        let mut lc = BTreeMap::new();
        lc.insert('c', LetterSet::singleton(alphabet.index_of('c').unwrap()));
        lc.insert('a', LetterSet::full(26));
        lc.insert('t', LetterSet::full(26));
        let lc = LetterCandidates::new(lc);

        let pruned = prune(&wc, &lc, &alphabet).unwrap();
        assert_eq!(pruned.get("cat").unwrap(), &["cat".to_string()]);
    }

    #[test]
    fn prune_returns_none_when_a_word_has_no_surviving_candidates() {
        let alphabet = Alphabet::english();
        let mut wc = BTreeMap::new();
        wc.insert("cat".to_string(), vec!["cat".to_string()]);
        let wc = WordCandidates::new(wc);

        let mut lc = BTreeMap::new();
        lc.insert('c', LetterSet::EMPTY);
        lc.insert('a', LetterSet::full(26));
        lc.insert('t', LetterSet::full(26));
        let lc = LetterCandidates::new(lc);

        assert!(prune(&wc, &lc, &alphabet).is_none());
    }

    #[test]
    fn prune_is_idempotent() {
        let dict = Dictionary::from_word_frequencies([
            ("cat".to_string(), 1.0),
            ("dog".to_string(), 1.0),
        ]);
        let words = BTreeSet::from(["cat".to_string()]);
        let wc = initial_candidates(&words, &dict);
        let lc = super::super::letter_domains::compute_letter_candidates(&wc, &alphabet_for(&dict));

        let once = prune(&wc, &lc, &alphabet_for(&dict)).unwrap();
        let lc_again =
            super::super::letter_domains::compute_letter_candidates(&once, &alphabet_for(&dict));
        let twice = prune(&once, &lc_again, &alphabet_for(&dict)).unwrap();
        assert_eq!(once, twice);
    }

    fn alphabet_for(dict: &Dictionary) -> Alphabet {
        dict.alphabet().clone()
    }
}
