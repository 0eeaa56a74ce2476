use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::FIELD_SEPARATOR;

/// Tokens of one input line, separator dropped. The final token keeps the line ending.
pub type RawRow = Vec<String>;

#[derive(Debug, Error)]
pub enum RowReadError {
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read line {line} of {}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Lazily splits a text file into rows of `;`-separated tokens.
///
/// The file handle lives inside the iterator, so it is closed as soon as the
/// reader is dropped, whether iteration finished, failed or was abandoned.
/// After the first read error the iterator is exhausted.
pub struct RowReader {
    path: PathBuf,
    reader: BufReader<File>,
    line_buf: String,
    lines_read: usize,
    finished: bool,
}

impl RowReader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RowReadError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| RowReadError::Open {
            path: path.clone(),
            source,
        })?;
        log::info!("Reading rows from {}", path.display());

        Ok(Self {
            path,
            reader: BufReader::new(file),
            line_buf: String::new(),
            lines_read: 0,
            finished: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

impl Iterator for RowReader {
    type Item = Result<RawRow, RowReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.line_buf.clear();
        match self.reader.read_line(&mut self.line_buf) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(_) => {
                self.lines_read += 1;
                Some(Ok(split_row(&self.line_buf)))
            }
            Err(source) => {
                self.finished = true;
                Some(Err(RowReadError::Read {
                    path: self.path.clone(),
                    line: self.lines_read + 1,
                    source,
                }))
            }
        }
    }
}

/// Split one line on `;`. Tokens are not trimmed.
pub fn split_row(line: &str) -> RawRow {
    line.split(FIELD_SEPARATOR).map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_row_keeps_trailing_newline() {
        let row = split_row("a;DIs20230101;b\n");
        assert_eq!(row, vec!["a", "DIs20230101", "b\n"]);
    }

    #[test]
    fn test_split_row_keeps_empty_tokens() {
        let row = split_row(";;x");
        assert_eq!(row, vec!["", "", "x"]);
    }

    #[test]
    fn test_reads_rows_lazily_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.txt");
        std::fs::write(&path, "a;b\nc;d;e\nlast").unwrap();

        let mut reader = RowReader::open(&path).unwrap();
        assert_eq!(reader.path(), path.as_path());
        assert_eq!(reader.next().unwrap().unwrap(), vec!["a", "b\n"]);
        assert_eq!(reader.lines_read(), 1);

        let rest: Vec<RawRow> = reader.map(Result::unwrap).collect();
        assert_eq!(rest, vec![vec!["c", "d", "e\n"], vec!["last"]]);
    }

    #[test]
    fn test_missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.txt");

        match RowReader::open(&path) {
            Err(RowReadError::Open { path: p, .. }) => assert_eq!(p, path),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("opening a missing file should fail"),
        }
    }

    #[test]
    fn test_invalid_utf8_stops_iteration_with_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"ok;row\n\xff\xfe;bad\nnever;seen\n").unwrap();
        drop(file);

        let mut reader = RowReader::open(&path).unwrap();
        assert!(reader.next().unwrap().is_ok());
        match reader.next() {
            Some(Err(RowReadError::Read { line, .. })) => assert_eq!(line, 2),
            other => panic!("expected read error, got {other:?}"),
        }
        assert!(reader.next().is_none());
    }
}
