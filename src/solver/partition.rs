//! The branching partitioner (§4.5): splits a locally-consistent,
//! not-yet-determined `WordCandidates` into a spanning set of children.

use super::WordCandidates;

/// Partitions `wc` over every ciphertext word with more than one remaining
/// candidate.
///
/// For each such word (in iteration order), emits a child that fixes that
/// word to its first candidate and leaves every other word untouched. A
/// final "remainder" child removes the first candidate from every
/// undetermined word simultaneously. The emitted order is fix-word-1,
/// fix-word-2, ..., fix-word-m, remainder — callers that want a
/// left-most/greedy depth-first dive push these in reverse, so
/// fix-word-1 is explored first.
///
/// # Panics
///
/// Panics if `wc` has no word with more than one candidate — callers must
/// only partition a `WordCandidates` that is locally consistent and not yet
/// fully determined.
#[must_use]
pub fn partition(wc: &WordCandidates) -> Vec<WordCandidates> {
    let undetermined: Vec<(&str, &[String])> =
        wc.iter().filter(|(_, candidates)| candidates.len() > 1).collect();
    assert!(
        !undetermined.is_empty(),
        "partition called on a fully-determined WordCandidates"
    );

    let mut children = Vec::with_capacity(undetermined.len() + 1);

    for (fixed_word, _) in &undetermined {
        let mut child = wc.clone();
        let first_candidate = child.get(fixed_word).unwrap()[0].clone();
        child.set(fixed_word, vec![first_candidate]);
        children.push(child);
    }

    let mut remainder = wc.clone();
    for (word, _) in &undetermined {
        let mut remaining = remainder.get(word).unwrap().to_vec();
        remaining.remove(0);
        remainder.set(word, remaining);
    }
    children.push(remainder);

    children
}
