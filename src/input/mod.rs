use crate::engine::error::ScanError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Open the input file for scanning.
///
/// Purpose: Acquires the single input source as a buffered reader.
/// Big Picture: `App::run` calls this before any token is produced, so an
/// unavailable file stops the run with nothing printed.
/// Connections: Feeds `engine::Tokenizer`. The file handle is owned by the
/// reader and closed when it is dropped, on every exit path.
pub fn open(path: &Path) -> Result<BufReader<File>, ScanError> {
    let file = File::open(path).map_err(|source| ScanError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    // Opening a directory succeeds on unix; reading it does not.
    let metadata = file
        .metadata()
        .map_err(|source| ScanError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
    if metadata.is_dir() {
        return Err(ScanError::InputUnavailable {
            path: path.to_path_buf(),
            source: std::io::Error::other("is a directory"),
        });
    }

    Ok(BufReader::new(file))
}
