//! Line-oriented document sources.

use crate::error::IndexError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// What to do when a read fails after the document was opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanPolicy {
    /// Fail construction and discard everything read so far.
    #[default]
    Strict,
    /// Log the failure, stop reading, and keep the lines read so far.
    BestEffort,
}

/// Feeds every line of `reader` to `sink`, applying `policy` to read errors.
///
/// Lines end at `\n` or `\r\n`. Bytes that are not valid UTF-8 are replaced
/// with U+FFFD rather than failing the read, so only real I/O errors reach
/// `policy`. Returns the number of lines delivered.
pub(crate) fn scan_lines<R, F>(
    mut reader: R,
    policy: ScanPolicy,
    mut sink: F,
) -> Result<usize, IndexError>
where
    R: BufRead,
    F: FnMut(&str),
{
    let mut count = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                sink(&String::from_utf8_lossy(strip_terminator(&buf)));
                count += 1;
            }
            Err(source) => match policy {
                ScanPolicy::Strict => {
                    return Err(IndexError::Scan {
                        line: count + 1,
                        source,
                    });
                }
                ScanPolicy::BestEffort => {
                    tracing::warn!(
                        "Stopped reading document at line {}: {}; keeping {} lines",
                        count + 1,
                        source,
                        count
                    );
                    break;
                }
            },
        }
    }

    Ok(count)
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Opens `path` for buffered line reading.
pub(crate) fn open(path: &Path) -> Result<BufReader<File>, IndexError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| IndexError::Open {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use std::io::{self, Cursor, Read};

    /// Reader that fails with `ErrorKind::Other` once its prefix is exhausted.
    pub(crate) struct FailingReader {
        prefix: Cursor<Vec<u8>>,
    }

    impl FailingReader {
        pub(crate) fn new(prefix: &str) -> BufReader<Self> {
            BufReader::new(Self {
                prefix: Cursor::new(prefix.as_bytes().to_vec()),
            })
        }
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.prefix.read(buf)? {
                0 => Err(io::Error::other("disk went away")),
                n => Ok(n),
            }
        }
    }

    fn collect(reader: impl BufRead, policy: ScanPolicy) -> Result<Vec<String>, IndexError> {
        let mut lines = Vec::new();
        scan_lines(reader, policy, |line| lines.push(line.to_string()))?;
        Ok(lines)
    }

    #[test]
    fn test_strips_line_terminators() {
        let lines = collect(Cursor::new("one\r\ntwo\nthree"), ScanPolicy::Strict).unwrap();
        check!(lines == ["one", "two", "three"]);
    }

    #[test]
    fn test_strict_surfaces_scan_error() {
        let result = collect(FailingReader::new("one\ntwo\n"), ScanPolicy::Strict);
        let_assert!(Err(IndexError::Scan { line, .. }) = result);
        check!(line == 3);
    }

    #[test]
    fn test_best_effort_keeps_prefix() {
        let lines = collect(FailingReader::new("one\ntwo\n"), ScanPolicy::BestEffort).unwrap();
        check!(lines == ["one", "two"]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_fatal() {
        let bytes: &[u8] = b"fine\ncaf\xe9 \xff broken\r\nafter\n";
        let lines = collect(Cursor::new(bytes), ScanPolicy::Strict).unwrap();
        check!(lines == ["fine", "caf\u{FFFD} \u{FFFD} broken", "after"]);
    }

    #[test]
    fn test_lone_carriage_return_is_kept() {
        let lines = collect(Cursor::new("a\rb\n\n"), ScanPolicy::Strict).unwrap();
        check!(lines == ["a\rb", ""]);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let_assert!(Err(IndexError::Open { path: reported, .. }) = open(&path));
        check!(reported == path);
    }

    #[test]
    fn test_policy_deserializes_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: ScanPolicy,
        }
        let parsed: Wrapper = toml::from_str("policy = \"best-effort\"").unwrap();
        check!(parsed.policy == ScanPolicy::BestEffort);
    }
}
