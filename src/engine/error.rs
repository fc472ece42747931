use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot open input {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed writing output: {0}")]
    Output(#[source] io::Error),
}

impl ScanError {
    /// Process exit status for this error. Success is always 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScanError::InputUnavailable { .. } => 1,
            ScanError::Read { .. } | ScanError::Output(_) => 2,
        }
    }
}
