//! Error type shared by the solver core, dictionary loaders, and config layer.

/// Every fallible operation this crate exposes returns `Result<_, SolverError>`.
///
/// Per the outcome classes of the solver core: a solve that simply finds no
/// cipher is `Ok(vec![])`, not an error. Only malformed input, a genuine bug
/// in the search's own invariants, or a failed file read produce an `Err`.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The caller passed something the solver cannot act on at all: an empty
    /// ciphertext (after tokenization) or a non-positive `max_solutions`.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A search invariant was violated. This should never happen against a
    /// well-formed dictionary; it indicates a bug in the pruning/assembly
    /// logic, not a property of the caller's input.
    #[error("internal solver error: {0}")]
    Internal(String),

    /// Reading a dictionary or config file failed. Always originates before
    /// any call to [`crate::solve`], never from the search itself.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
