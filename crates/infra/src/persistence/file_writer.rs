// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use league_table_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`.
    pub fn create(path: &Path) -> InfraResult<BufWriter<File>> {
        File::create(path)
            .map(BufWriter::new)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })
    }
}

/// Report destination: a file when a path is given, stdout otherwise.
pub struct OutputWriter {
    inner: Box<dyn Write>,
    path: Option<PathBuf>,
}

impl OutputWriter {
    pub fn create(path: Option<&Path>) -> InfraResult<Self> {
        let inner: Box<dyn Write> = match path {
            Some(path) => Box::new(FileWriter::create(path)?),
            None => Box::new(BufWriter::new(io::stdout())),
        };
        Ok(Self { inner, path: path.map(Path::to_path_buf) })
    }

    pub fn is_stdout(&self) -> bool {
        self.path.is_none()
    }

    /// Flush buffered output, naming the file on failure.
    pub fn finish(mut self) -> InfraResult<()> {
        self.inner.flush().map_err(|source| match self.path.take() {
            Some(path) => InfrastructureError::FileWrite { path, source },
            None => source.into(),
        })
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
