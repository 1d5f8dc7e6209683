// crates/infra/src/persistence/file_reader.rs
use std::{fs::File, io::BufReader, path::Path};

use league_table_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> InfraResult<File> {
        File::open(path).map_err(|source| unavailable(path, source))
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }
}

pub(crate) fn unavailable(path: &Path, source: std::io::Error) -> InfrastructureError {
    InfrastructureError::SourceUnavailable { path: path.to_path_buf(), source }
}
