//! The search driver (§4.7): a depth-first stack walk over `WordCandidates`
//! states, tying pruning, letter-domain computation, branching, and solution
//! assembly together into the crate's single public entry point.

use super::letter_domains::compute_letter_candidates;
use super::{candidates, partition, solution};
use crate::config::SolveConfig;
use crate::dictionary::Dictionary;
use crate::error::SolverError;
use crate::tokenizer::parse_words;
use std::collections::BTreeSet;
use std::time::Instant;

pub use super::solution::Solution;

/// Solves `ciphertext` against `dictionary`, returning up to
/// `config.max_solutions` ranked candidate plaintexts.
///
/// # Errors
///
/// Returns [`SolverError::InvalidInput`] if `ciphertext` tokenizes to no
/// alphabet words, or if `config.max_solutions` is zero. See
/// [`solution::assemble`] for the [`SolverError::Internal`] case, which
/// indicates a bug rather than a property of the input.
pub fn solve(
    ciphertext: &str,
    dictionary: &Dictionary,
    config: &SolveConfig,
) -> Result<Vec<Solution>, SolverError> {
    if config.max_solutions == 0 {
        return Err(SolverError::InvalidInput(
            "max_solutions must be greater than zero".to_string(),
        ));
    }

    let words = parse_words(ciphertext, dictionary.alphabet());
    if words.is_empty() {
        return Err(SolverError::InvalidInput(
            "ciphertext contains no alphabet words".to_string(),
        ));
    }

    let deadline = config.timeout.map(|timeout| Instant::now() + timeout);
    let wc0 = candidates::initial_candidates(&words, dictionary);
    log::debug!(
        "solve: {} distinct ciphertext word(s), {} with at least one candidate",
        words.len(),
        wc0.iter().filter(|(_, c)| !c.is_empty()).count()
    );

    let mut stack = vec![wc0];
    let mut solutions = Vec::new();
    let mut seen_plaintexts = BTreeSet::new();

    while let Some(wc) = stack.pop() {
        if solutions.len() >= config.max_solutions {
            log::debug!("solve: max_solutions reached, stopping search");
            break;
        }
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            log::debug!("solve: timeout reached with {} solution(s) found", solutions.len());
            break;
        }

        let lc = compute_letter_candidates(&wc, dictionary.alphabet());
        if log::log_enabled!(log::Level::Trace) {
            // Walked in ciphertext-letter ascending order (§4.3's
            // deterministic order), so repeated runs log identically.
            for (letter, domain) in lc.iter() {
                log::trace!("solve: letter domain {letter:?} -> {} candidate(s)", domain.len());
            }
        }
        if !lc.is_feasible() {
            log::trace!("solve: discarding branch, a ciphertext letter has no candidates left");
            continue;
        }

        let Some(pruned) = candidates::prune(&wc, &lc, dictionary.alphabet()) else {
            log::trace!("solve: discarding branch, pruning emptied a word's candidates");
            continue;
        };

        if pruned.is_fully_determined() {
            let solved = solution::assemble(ciphertext, &pruned, dictionary)?;
            if seen_plaintexts.insert(solved.plaintext.clone()) {
                log::trace!("solve: found solution {:?}", solved.plaintext);
                solutions.push(solved);
            }
            continue;
        }

        let children = partition::partition(&pruned);
        stack.extend(children.into_iter().rev());
    }

    solutions.sort_by(|a, b| {
        b.mean_frequency
            .partial_cmp(&a.mean_frequency)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(solutions)
}
