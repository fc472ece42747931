// Runtime configuration for a scan; the CLI in main.rs fills this in.

use std::path::PathBuf;

/// Input file read when no path is given on the command line.
pub const DEFAULT_INPUT: &str = "tokens.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    /// File to tokenize (default `tokens.txt`, relative to the working directory)
    pub input: PathBuf,

    /// Log per-token debug events
    pub verbose: bool,
}

impl ScanConfig {
    pub fn with_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Default tracing filter directive when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            verbose: false,
        }
    }
}
