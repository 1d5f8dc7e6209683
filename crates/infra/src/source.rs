// crates/infra/src/source.rs
use std::{
    collections::VecDeque,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use league_table_ports::{LineSource, SourceLine};
use league_table_shared_kernel::Result;

use crate::persistence::{FileReader, file_reader::unavailable};

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Buffered line source over a file or stdin.
///
/// The underlying handle is dropped with the source, so it is closed on every
/// exit path including parse failures further up.
pub struct FileLineSource {
    path: PathBuf,
    reader: Box<dyn BufRead>,
    number: usize,
    buf: String,
}

impl FileLineSource {
    /// Open `path`, or stdin when `path` is `-`.
    pub fn open(path: &Path) -> Result<Self> {
        if path.as_os_str() == STDIN_PATH {
            return Ok(Self::stdin());
        }
        let reader = FileReader::open_buffered(path)?;
        log::debug!("opened match file {}", path.display());
        Ok(Self::from_reader(path, reader))
    }

    pub fn stdin() -> Self {
        Self::from_reader(Path::new("<stdin>"), BufReader::new(io::stdin()))
    }

    pub fn from_reader(path: impl Into<PathBuf>, reader: impl BufRead + 'static) -> Self {
        Self { path: path.into(), reader: Box::new(reader), number: 0, buf: String::new() }
    }
}

impl LineSource for FileLineSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn next_line(&mut self) -> Result<Option<SourceLine>> {
        self.buf.clear();
        let read = self.reader.read_line(&mut self.buf).map_err(|source| unavailable(&self.path, source))?;
        if read == 0 {
            return Ok(None);
        }
        self.number += 1;
        let text = self.buf.strip_suffix('\n').unwrap_or(self.buf.as_str());
        let text = text.strip_suffix('\r').unwrap_or(text);
        Ok(Some(SourceLine { number: self.number, text: text.to_string() }))
    }
}

/// In-memory line source, handy for tests and benchmarks.
#[derive(Debug, Clone, Default)]
pub struct MemoryLineSource {
    name: String,
    lines: VecDeque<String>,
    number: usize,
}

impl MemoryLineSource {
    pub fn new<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { name: name.into(), lines: lines.into_iter().map(Into::into).collect(), number: 0 }
    }
}

impl LineSource for MemoryLineSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn next_line(&mut self) -> Result<Option<SourceLine>> {
        Ok(self.lines.pop_front().map(|text| {
            self.number += 1;
            SourceLine { number: self.number, text }
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn drain(source: &mut dyn LineSource) -> Vec<SourceLine> {
        std::iter::from_fn(|| source.next_line().expect("readable")).collect()
    }

    #[test]
    fn strips_unix_and_windows_line_endings() {
        let mut source = FileLineSource::from_reader("mem", Cursor::new("A 1, B 0\r\nB 2, A 2\nC 0, A 1"));
        let texts: Vec<_> = drain(&mut source).into_iter().map(|l| l.text).collect();
        assert_eq!(texts, vec!["A 1, B 0", "B 2, A 2", "C 0, A 1"]);
    }

    #[test]
    fn numbers_lines_from_one() {
        let mut source = FileLineSource::from_reader("mem", Cursor::new("x\n\ny\n"));
        let numbers: Vec<_> = drain(&mut source).into_iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn opens_real_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("matches.txt");
        std::fs::write(&path, "Liverpool 3, ManchesterUnited 1\n").expect("write");

        let mut source = FileLineSource::open(&path).expect("opens");
        assert_eq!(source.name(), path.display().to_string());
        assert_eq!(drain(&mut source).len(), 1);
    }

    #[test]
    fn missing_file_fails_as_unavailable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = FileLineSource::open(&dir.path().join("absent.txt")).err().expect("must fail");
        assert!(err.is_source_unavailable());
    }

    #[test]
    fn invalid_utf8_is_a_read_failure() {
        let mut source = FileLineSource::from_reader("bin", Cursor::new(vec![0xff, 0xfe, b'\n']));
        let err = source.next_line().expect_err("not utf-8");
        assert!(err.is_source_unavailable());
    }

    #[test]
    fn memory_source_yields_in_order() {
        let mut source = MemoryLineSource::new("mem", ["a", "b"]);
        let lines = drain(&mut source);
        assert_eq!(lines[1], SourceLine { number: 2, text: "b".into() });
        assert_eq!(source.name(), "mem");
    }
}
