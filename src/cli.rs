//! Command-line argument definitions for the `cryptogram-solver` binary
//! (§11). Kept as a library module, like the teacher crate's own `cli`
//! module, so the argument shape is testable without spawning a process.

use clap::Parser;
use std::path::PathBuf;

/// Cracks monoalphabetic substitution cryptograms by constraint propagation.
#[derive(Parser, Debug)]
#[command(name = "cryptogram-solver", version, about, long_about = None)]
pub struct Args {
    /// Ciphertext to solve. Read from stdin if omitted (and `--batch` is
    /// not given).
    pub ciphertext: Option<String>,

    /// A file of one ciphertext per line, solved concurrently and printed
    /// in input order. Mutually exclusive with the positional ciphertext.
    #[arg(long)]
    pub batch: Option<PathBuf>,

    /// Wordlist file to load instead of the embedded default dictionary.
    #[arg(long, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Stop after this many distinct plaintexts have been found.
    #[arg(long, value_name = "N")]
    pub max_solutions: Option<usize>,

    /// Wall-clock search budget in milliseconds; 0 means infinite.
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Optional TOML config file layered beneath these flags (§10).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Thread pool size for `--batch` mode. Defaults to the number of
    /// logical CPUs.
    #[arg(long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Increase log verbosity (`-v` for info, `-vv` for debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// The two output shapes the binary can print solutions in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, one solution per block.
    Text,
    /// A JSON array of solutions.
    Json,
}

impl OutputFormat {
    /// Parses a `--format`/config-file string, case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}
