//! Line-list adapters and the environment source.
//!
//! The codec proper reads from any [`BufRead`] and writes to any [`Write`].
//! Sources and sinks that naturally deal in ordered lists of `KEY=VALUE`
//! strings, like the process environment, go through the thin shims here:
//!
//! - [`LineReader`]: ordered line list → byte stream (joined with `\n`)
//! - [`LineWriter`]: byte stream → ordered line list (`\n` or `\r\n` framed)
//! - [`env_lines`]: snapshot of the process environment as `KEY=VALUE` lines
//!
//! None of these make codec decisions; they only carry lines.

use std::io::{self, BufRead, Cursor, Read, Write};

/// Presents an ordered list of lines as a byte stream.
///
/// Entries are joined with `\n` and no trailing newline is added, matching
/// what the encoder emits.
///
/// # Examples
///
/// ```rust
/// use envcodec::lines::LineReader;
/// use std::io::Read;
///
/// let mut reader = LineReader::new(["A=1", "B=2"]);
/// let mut out = String::new();
/// reader.read_to_string(&mut out).unwrap();
/// assert_eq!(out, "A=1\nB=2");
/// ```
pub struct LineReader {
    inner: Cursor<Vec<u8>>,
}

impl LineReader {
    /// Creates a reader over `lines`, preserving their order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buf = Vec::new();
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                buf.push(b'\n');
            }
            buf.extend_from_slice(line.as_ref().as_bytes());
        }

        LineReader {
            inner: Cursor::new(buf),
        }
    }
}

impl Read for LineReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for LineReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

/// Collects a byte stream back into an ordered list of lines.
///
/// Handles `\n` and `\r\n` terminators and writes split at arbitrary byte
/// boundaries. An unterminated trailing fragment becomes the final line when
/// the writer is consumed with [`into_lines`](LineWriter::into_lines).
///
/// # Examples
///
/// ```rust
/// use envcodec::lines::LineWriter;
/// use std::io::Write;
///
/// let mut writer = LineWriter::new();
/// writer.write_all(b"A=1\r\nB=").unwrap();
/// writer.write_all(b"2").unwrap();
/// assert_eq!(writer.into_lines(), vec!["A=1".to_string(), "B=2".to_string()]);
/// ```
#[derive(Default)]
pub struct LineWriter {
    lines: Vec<String>,
    partial: Vec<u8>,
}

impl LineWriter {
    /// Creates an empty line sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The complete lines collected so far, excluding any unterminated
    /// trailing fragment.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the writer, flushing an unterminated trailing fragment as the
    /// final line.
    pub fn into_lines(mut self) -> Vec<String> {
        if !self.partial.is_empty() {
            self.lines
                .push(String::from_utf8_lossy(&self.partial).into_owned());
        }
        self.lines
    }
}

impl Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &byte in buf {
            if byte == b'\n' {
                if self.partial.last() == Some(&b'\r') {
                    self.partial.pop();
                }
                self.lines
                    .push(String::from_utf8_lossy(&self.partial).into_owned());
                self.partial.clear();
            } else {
                self.partial.push(byte);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Snapshots the process environment as `KEY=VALUE` lines, in platform order.
///
/// Entries whose key or value is not valid Unicode are skipped; everything
/// downstream works in `str` terms, and a dropped entry beats an aborted
/// process. Duplicate keys, if the platform produces any, resolve by the
/// decoder's last-write-wins rule.
pub fn env_lines() -> Vec<String> {
    std::env::vars_os()
        .filter_map(|(key, value)| {
            let key = key.into_string().ok()?;
            let value = value.into_string().ok()?;
            Some(format!("{key}={value}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_joins_without_trailing_newline() {
        let mut reader = LineReader::new(["a", "b", "c"]);
        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        assert_eq!(out, "a\nb\nc");
    }

    #[test]
    fn reader_over_empty_list_is_empty() {
        let mut reader = LineReader::new(Vec::<String>::new());
        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn writer_splits_lines_across_writes() {
        let mut writer = LineWriter::new();
        writer.write_all(b"one=").unwrap();
        writer.write_all(b"1\ntwo=2\nthr").unwrap();
        writer.write_all(b"ee=3").unwrap();
        assert_eq!(writer.lines(), &["one=1".to_string(), "two=2".to_string()]);
        assert_eq!(
            writer.into_lines(),
            vec!["one=1".to_string(), "two=2".to_string(), "three=3".to_string()]
        );
    }

    #[test]
    fn writer_strips_carriage_returns() {
        let mut writer = LineWriter::new();
        writer.write_all(b"a=1\r\nb=2\r\n").unwrap();
        assert_eq!(writer.into_lines(), vec!["a=1".to_string(), "b=2".to_string()]);
    }

    #[test]
    fn roundtrip_through_reader_and_writer() {
        let lines = vec!["A=1".to_string(), "B=two".to_string(), "C=".to_string()];
        let mut reader = LineReader::new(&lines);
        let mut writer = LineWriter::new();
        io::copy(&mut reader, &mut writer).unwrap();
        assert_eq!(writer.into_lines(), lines);
    }

    #[test]
    fn env_lines_are_key_value_shaped() {
        std::env::set_var("ENVCODEC_LINES_TEST", "value");
        let lines = env_lines();
        assert!(lines.iter().any(|l| l == "ENVCODEC_LINES_TEST=value"));
    }

    #[cfg(unix)]
    #[test]
    fn env_lines_skips_non_unicode_entries() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        std::env::set_var(
            "ENVCODEC_BAD_VALUE_TEST",
            OsStr::from_bytes(&[0xff, 0xfe]),
        );
        std::env::set_var("ENVCODEC_GOOD_VALUE_TEST", "ok");

        let lines = env_lines();
        assert!(!lines
            .iter()
            .any(|l| l.starts_with("ENVCODEC_BAD_VALUE_TEST=")));
        assert!(lines.iter().any(|l| l == "ENVCODEC_GOOD_VALUE_TEST=ok"));

        std::env::remove_var("ENVCODEC_BAD_VALUE_TEST");
    }
}
