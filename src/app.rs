// App: drives a single scan from input file to token sink.
use crate::engine::config::ScanConfig;
use crate::engine::error::ScanError;
use crate::engine::Tokenizer;
use crate::input;
use crate::output::TokenSink;
use tracing::{debug, info};

/// Outcome of a completed scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    pub tokens: usize,
    pub bytes: usize,
}

pub struct App {
    pub config: ScanConfig,
}

impl App {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Tokenize the configured input, handing each token to `sink` as soon as
    /// it is read.
    pub fn run(&self, sink: &mut impl TokenSink) -> Result<ScanSummary, ScanError> {
        let path = &self.config.input;
        let reader = input::open(path)?;

        info!(path = %path.display(), "processing tokens");

        let mut tokenizer = Tokenizer::new(reader);
        let mut summary = ScanSummary::default();

        for token in tokenizer.by_ref() {
            let token = token.map_err(|source| ScanError::Read {
                path: path.clone(),
                source,
            })?;
            debug!(offset = token.offset, text = %token.text, "token");
            sink.emit(&token).map_err(ScanError::Output)?;
            summary.tokens += 1;
        }

        summary.bytes = tokenizer.offset();
        info!(tokens = summary.tokens, bytes = summary.bytes, "scan complete");
        Ok(summary)
    }
}
