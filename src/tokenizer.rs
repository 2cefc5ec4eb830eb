//! Splits raw ciphertext into the deduplicated set of words it contains.
//!
//! This is the tokenizer contract (§6b): `parse_words(text, alphabet)`
//! extracts maximal runs of alphabet characters, treats everything else as a
//! separator, and returns a deterministically ordered, deduplicated set —
//! deterministic because a `BTreeSet` makes that a structural guarantee
//! rather than a convention every caller has to remember.

use crate::alphabet::Alphabet;
use std::collections::BTreeSet;

/// Extracts the set of alphabet-only words in `text`, lowercased.
///
/// Non-alphabet characters (punctuation, digits, whitespace) act purely as
/// separators; they never appear inside a returned word.
#[must_use]
pub fn parse_words(text: &str, alphabet: &Alphabet) -> BTreeSet<String> {
    let mut words = BTreeSet::new();
    let mut current = String::new();
    for c in text.chars() {
        if alphabet.contains(c) {
            current.push(c.to_ascii_lowercase());
        } else if !current.is_empty() {
            words.insert(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.insert(current);
    }
    words
}
