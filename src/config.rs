//! Layered configuration: built-in defaults, an optional TOML file, then CLI
//! flags, in that precedence order. The core search only ever sees the
//! resolved [`SolveConfig`]; it has no notion of files or flags.

use crate::error::SolverError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// The options the solver core itself accepts: how many distinct plaintexts
/// to stop after, and how long to search before giving up.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveConfig {
    /// Stop after this many distinct plaintexts have been found. Must be
    /// greater than zero; `solve` rejects zero as `InvalidInput`.
    pub max_solutions: usize,
    /// Wall-clock search budget. `None` means search until the space is
    /// exhausted.
    pub timeout: Option<Duration>,
}

impl SolveConfig {
    /// Builds a config directly, bypassing the file/CLI layering in [`AppConfig`].
    #[must_use]
    pub fn new(max_solutions: usize, timeout: Option<Duration>) -> Self {
        Self {
            max_solutions,
            timeout,
        }
    }
}

impl Default for SolveConfig {
    /// 10 solutions, no timeout — a reasonable default for interactive use
    /// that still won't search forever against a pathological cryptogram if
    /// the caller forgets to set a timeout. (The CLI's `--timeout-ms 0`
    /// still means "infinite" as documented, matching the external contract.)
    fn default() -> Self {
        Self {
            max_solutions: 10,
            timeout: None,
        }
    }
}

/// The optional TOML config file shape. Every field is optional; only the
/// fields present in the file override [`SolveConfig::default`] and, later,
/// the CLI flag defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// See [`SolveConfig::max_solutions`].
    pub max_solutions: Option<usize>,
    /// Timeout in milliseconds; `0` means infinite, matching the CLI flag.
    pub timeout_ms: Option<u64>,
    /// Path to a wordlist to load instead of the embedded default dictionary.
    pub dictionary: Option<String>,
    /// Output format: `"text"` or `"json"`.
    pub format: Option<String>,
}

impl FileConfig {
    /// Loads a `FileConfig` from a TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, SolverError> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| SolverError::InvalidInput(format!("invalid config file: {e}")))
    }

    /// Merges `self` (the file) with `other` (CLI-flag-derived overrides),
    /// with `other`'s `Some` values winning — CLI flags take precedence over
    /// the file, per the configuration layering order.
    #[must_use]
    pub fn merged_with(self, other: Self) -> Self {
        Self {
            max_solutions: other.max_solutions.or(self.max_solutions),
            timeout_ms: other.timeout_ms.or(self.timeout_ms),
            dictionary: other.dictionary.or(self.dictionary),
            format: other.format.or(self.format),
        }
    }

    /// Resolves this layered config into a concrete [`SolveConfig`], falling
    /// back to [`SolveConfig::default`] for anything left unset.
    #[must_use]
    pub fn into_solve_config(self) -> SolveConfig {
        let defaults = SolveConfig::default();
        SolveConfig {
            max_solutions: self.max_solutions.unwrap_or(defaults.max_solutions),
            timeout: match self.timeout_ms {
                None => defaults.timeout,
                Some(0) => None,
                Some(ms) => Some(Duration::from_millis(ms)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_solve_config_has_no_timeout() {
        let config = SolveConfig::default();
        assert_eq!(config.max_solutions, 10);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn file_config_merge_prefers_cli_overrides() {
        let file = FileConfig {
            max_solutions: Some(5),
            timeout_ms: Some(1000),
            dictionary: Some("file-dict.txt".to_string()),
            format: None,
        };
        let cli = FileConfig {
            max_solutions: Some(20),
            timeout_ms: None,
            dictionary: None,
            format: Some("json".to_string()),
        };

        let merged = file.merged_with(cli);
        assert_eq!(merged.max_solutions, Some(20));
        assert_eq!(merged.timeout_ms, Some(1000));
        assert_eq!(merged.dictionary, Some("file-dict.txt".to_string()));
        assert_eq!(merged.format, Some("json".to_string()));
    }

    #[test]
    fn zero_timeout_ms_means_infinite() {
        let file = FileConfig {
            timeout_ms: Some(0),
            ..Default::default()
        };
        assert_eq!(file.into_solve_config().timeout, None);
    }

    #[test]
    fn unset_fields_fall_back_to_defaults() {
        let resolved = FileConfig::default().into_solve_config();
        assert_eq!(resolved, SolveConfig::default());
    }
}
