//! The read-only `Dictionary` the solver consults (§3, §6a): an alphabet, a
//! pattern-to-words multimap, and a word-to-frequency table.

use crate::alphabet::Alphabet;
use crate::error::SolverError;
use crate::pattern::pattern;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

/// The wordlist compiled into the binary, used when no `--dictionary` file
/// is given. A convenience default, not a substitute for a real corpus.
const EMBEDDED_WORDLIST: &str = include_str!("../assets/default_wordlist.txt");

/// A read-only index over a set of dictionary words: which letters make up
/// its alphabet, which words share each canonical [`pattern`], and how
/// frequent each word is.
///
/// Immutable for the lifetime of a solve; the same `Dictionary` may be
/// shared by reference (or `Arc`) across concurrent `solve` calls.
#[derive(Debug, Clone)]
pub struct Dictionary {
    alphabet: Alphabet,
    pattern_words: BTreeMap<String, BTreeSet<String>>,
    word_frequencies: HashMap<String, f64>,
}

impl Dictionary {
    /// Builds a dictionary from `(word, frequency)` pairs.
    ///
    /// Words are lowercased; any entry containing a character outside
    /// [`Alphabet::english`] is skipped (`log::warn!`-reported by the CLI
    /// layer, not here, since the core should not assume a logger is
    /// installed). The grouping into `pattern_words` happens exactly once,
    /// here, so no caller needs to recompute patterns for loaded data.
    pub fn from_word_frequencies(entries: impl IntoIterator<Item = (String, f64)>) -> Self {
        let alphabet = Alphabet::english();
        let mut pattern_words: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut word_frequencies = HashMap::new();

        for (word, frequency) in entries {
            let word = word.to_lowercase();
            if word.is_empty() || !word.chars().all(|c| alphabet.contains(c)) {
                log::trace!("dictionary: skipping non-alphabetic entry {word:?}");
                continue;
            }
            pattern_words
                .entry(pattern(&word))
                .or_default()
                .insert(word.clone());
            word_frequencies
                .entry(word)
                .and_modify(|f: &mut f64| *f = f64::max(*f, frequency))
                .or_insert(frequency);
        }

        Self {
            alphabet,
            pattern_words,
            word_frequencies,
        }
    }

    /// Loads a dictionary from a wordlist file.
    ///
    /// Each line is either a bare word (frequency is a descending
    /// rank-based weight — earlier lines count as more frequent) or a
    /// `word,count`/`word count` pair. Blank lines and lines starting with
    /// `#` are skipped.
    pub fn load_wordlist(path: &Path) -> Result<Self, SolverError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_word_frequencies(parse_wordlist(&text)))
    }

    /// The small wordlist compiled into the binary. Lazily built once per
    /// process and shared by reference thereafter.
    pub fn embedded_default() -> &'static Self {
        static DEFAULT: Lazy<Dictionary> =
            Lazy::new(|| Dictionary::from_word_frequencies(parse_wordlist(EMBEDDED_WORDLIST)));
        &DEFAULT
    }

    /// The alphabet this dictionary's words are drawn from.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The dictionary words sharing `pattern`, in ascending order, or an
    /// empty slice-equivalent if no word has that pattern.
    #[must_use]
    pub fn words_with_pattern(&self, pattern: &str) -> Vec<&str> {
        self.pattern_words
            .get(pattern)
            .map(|words| words.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// The frequency of `word` (already lowercased), or `0.0` if absent.
    #[must_use]
    pub fn frequency(&self, word: &str) -> f64 {
        self.word_frequencies.get(word).copied().unwrap_or(0.0)
    }

    /// Whether this dictionary has a frequency entry for `word`.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.word_frequencies.contains_key(word)
    }

    /// Whether the dictionary has no words at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_frequencies.is_empty()
    }
}

/// Parses wordlist text into `(word, frequency)` pairs, assigning
/// descending rank-based weights to bare words.
fn parse_wordlist(text: &str) -> Vec<(String, f64)> {
    let mut entries = Vec::new();
    let mut next_rank_weight = text.lines().count() as f64 + 1.0;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (word, frequency) = match line.split_once(|c: char| c == ',' || c.is_whitespace()) {
            Some((word, rest)) => {
                let rest = rest.trim();
                match rest.parse::<f64>() {
                    Ok(freq) => (word, freq),
                    Err(_) => (line, next_rank_weight),
                }
            }
            None => (line, next_rank_weight),
        };

        entries.push((word.to_string(), frequency));
        next_rank_weight -= 1.0;
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_words_by_pattern() {
        let dict = Dictionary::from_word_frequencies([
            ("noon".to_string(), 10.0),
            ("peep".to_string(), 3.0),
            ("deed".to_string(), 1.0),
            ("cat".to_string(), 1.0),
        ]);

        let mut abba = dict.words_with_pattern("abba");
        abba.sort_unstable();
        assert_eq!(abba, vec!["deed", "noon", "peep"]);
        assert_eq!(dict.words_with_pattern("abc"), vec!["cat"]);
        assert!(dict.words_with_pattern("abccba").is_empty());
    }

    #[test]
    fn frequency_lookup_defaults_to_zero() {
        let dict = Dictionary::from_word_frequencies([("cat".to_string(), 5.0)]);
        assert_eq!(dict.frequency("cat"), 5.0);
        assert_eq!(dict.frequency("dog"), 0.0);
    }

    #[test]
    fn non_alphabetic_entries_are_skipped() {
        let dict = Dictionary::from_word_frequencies([
            ("cat3".to_string(), 1.0),
            ("".to_string(), 1.0),
            ("cat".to_string(), 2.0),
        ]);
        assert!(!dict.contains_word("cat3"));
        assert!(dict.contains_word("cat"));
    }

    #[test]
    fn duplicate_entries_keep_the_max_frequency() {
        let dict = Dictionary::from_word_frequencies([
            ("cat".to_string(), 1.0),
            ("cat".to_string(), 9.0),
            ("cat".to_string(), 4.0),
        ]);
        assert_eq!(dict.frequency("cat"), 9.0);
    }

    #[test]
    fn parse_wordlist_assigns_descending_rank_weights_to_bare_words() {
        let entries = parse_wordlist("the\nand\nfor\n");
        assert_eq!(entries.len(), 3);
        assert!(entries[0].1 > entries[1].1);
        assert!(entries[1].1 > entries[2].1);
    }

    #[test]
    fn parse_wordlist_honours_explicit_counts() {
        let entries = parse_wordlist("cat,42\ndog 7\n# comment\n\nbird\n");
        assert_eq!(entries[0], ("cat".to_string(), 42.0));
        assert_eq!(entries[1], ("dog".to_string(), 7.0));
        assert_eq!(entries[2].0, "bird");
    }

    #[test]
    fn embedded_default_is_nonempty_and_contains_expected_words() {
        let dict = Dictionary::embedded_default();
        assert!(!dict.is_empty());
        assert!(dict.contains_word("hello"));
        assert!(dict.contains_word("world"));
        assert!(!dict.words_with_pattern("abba").is_empty());
    }
}
