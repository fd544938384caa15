//! Env decoding.
//!
//! [`Decoder`] consumes `KEY=VALUE` lines one at a time and writes each value
//! into a destination record in place. Decoding is incremental: the caller
//! drives it with a [`more`](Decoder::more)/[`decode`](Decoder::decode) loop
//! and owns the destination for the duration, so the input never needs to be
//! materialized as a whole.
//!
//! Entries accumulate in the destination: distinct keys fill distinct fields,
//! and a repeated key overwrites the earlier value (last write wins). Unknown
//! keys, keys missing the configured prefix, and unparseable values are all
//! handled leniently; none of them stops the loop.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use envcodec::{from_str, impl_record};
//!
//! #[derive(Default)]
//! struct Config {
//!     host: String,
//!     port: u16,
//! }
//!
//! impl_record! {
//!     Config {
//!         "Host" => scalar host,
//!         "Port" => scalar port,
//!     }
//! }
//!
//! let config: Config = from_str("Host=localhost\nPort=8080").unwrap();
//! assert_eq!(config.host, "localhost");
//! assert_eq!(config.port, 8080);
//! ```
//!
//! ## Direct decoder usage
//!
//! The decoder itself is useful for cumulative decoding, for example layering
//! a `.env` file under the process environment:
//!
//! ```rust
//! use envcodec::{Decoder, Options};
//! # use envcodec::impl_record;
//! # #[derive(Default)]
//! # struct Config { host: String }
//! # impl_record! { Config { "Host" => scalar host } }
//! use std::io::Cursor;
//!
//! let mut config = Config::default();
//! let mut decoder = Decoder::new(Cursor::new("Host=a\nHost=b"), Options::new());
//! while decoder.more() {
//!     decoder.decode(&mut config).unwrap();
//! }
//! assert_eq!(config.host, "b");
//! ```

use std::io::BufRead;

use crate::record::resolve;
use crate::{Options, Record, Result};

/// Reads `key=value` pairs from an input stream into a record.
///
/// Created via [`Decoder::new`]; options are defaulted once at construction
/// and immutable afterwards.
pub struct Decoder<R> {
    reader: R,
    options: Options,
    more: bool,
}

impl<R: BufRead> Decoder<R> {
    /// Returns a decoder reading from `reader` with defaulted `options`.
    pub fn new(reader: R, options: Options) -> Self {
        Decoder {
            reader,
            options: options.with_defaults(),
            more: true,
        }
    }

    /// Whether another [`decode`](Decoder::decode) step may be attempted.
    ///
    /// Turns false only once the final input line has been consumed.
    pub fn more(&self) -> bool {
        self.more
    }

    /// Consumes exactly one input line and decodes it into `record`.
    ///
    /// Line terminators (`\n` or `\r\n`) are stripped. Entries whose key does
    /// not carry the configured prefix, or whose path resolves to no
    /// registered field, are skipped silently. Only I/O failures from the
    /// underlying reader are reported.
    pub fn decode(&mut self, record: &mut dyn Record) -> Result<()> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;

        if read == 0 {
            self.more = false;
            return Ok(());
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        } else {
            // A line without a terminator is the final one.
            self.more = false;
        }

        self.decode_entry(record, &line);
        Ok(())
    }

    fn decode_entry(&self, record: &mut dyn Record, line: &str) {
        let (key, value) = match line.split_once('=') {
            Some((key, value)) => (key, value),
            None => (line, ""),
        };

        let key = if self.options.prefix.is_empty() {
            key
        } else {
            match key.strip_prefix(self.options.prefix.as_str()) {
                Some(stripped) => stripped,
                None => return,
            }
        };

        let value = value.trim();
        let path: Vec<&str> = key.split(self.options.separator.as_str()).collect();

        if let Some(target) = resolve(record, &path, &self.options) {
            target.decode_text(value, &self.options);
        }
    }

    /// The options this decoder runs with, after defaulting.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Consumes the decoder, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}
