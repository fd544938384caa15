//! Env encoding.
//!
//! [`Encoder`] walks a record depth-first in declaration order and writes one
//! `key=value` line per leaf field. Nested records contribute no line of
//! their own; their mapped name joins the accumulated key with the configured
//! separator. Sequence leaves encode as a single line with elements joined by
//! the slice separator. Unset `Option` fields, leaf or record, emit nothing.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use envcodec::{impl_record, to_string};
//!
//! #[derive(Default)]
//! struct Config {
//!     host: String,
//!     ports: Vec<u16>,
//! }
//!
//! impl_record! {
//!     Config {
//!         "Host" => scalar host,
//!         "Ports" => scalar ports,
//!     }
//! }
//!
//! let config = Config { host: "localhost".to_string(), ports: vec![80, 443] };
//! assert_eq!(to_string(&config).unwrap(), "Host=localhost\nPorts=80,443");
//! ```
//!
//! ## Direct encoder usage
//!
//! ```rust
//! use envcodec::{Encoder, Options};
//! # use envcodec::impl_record;
//! # #[derive(Default)]
//! # struct Config { host: String }
//! # impl_record! { Config { "Host" => scalar host } }
//!
//! let config = Config { host: "a".to_string() };
//! let mut encoder = Encoder::new(Vec::new(), Options::new());
//! encoder.encode(&config).unwrap();
//! assert_eq!(encoder.into_inner(), b"Host=a");
//! ```

use std::io::Write;

use crate::{FieldRef, Options, Record, Result};

/// Writes env `key=value` lines for a record to an output stream.
///
/// Created via [`Encoder::new`]; options are defaulted once at construction
/// and immutable afterwards.
pub struct Encoder<W> {
    writer: W,
    options: Options,
}

impl<W: Write> Encoder<W> {
    /// Returns an encoder writing to `writer` with defaulted `options`.
    pub fn new(writer: W, options: Options) -> Self {
        Encoder {
            writer,
            options: options.with_defaults(),
        }
    }

    /// Encodes `record` as newline-separated `key=value` lines.
    ///
    /// The configured prefix is prepended verbatim to every top-level key.
    /// Output carries no trailing newline. Only write failures are reported.
    pub fn encode(&mut self, record: &dyn Record) -> Result<()> {
        let parent = self.options.prefix.clone();
        let mut first = true;
        self.encode_record(record, &parent, &mut first)
    }

    fn encode_record(&mut self, record: &dyn Record, parent: &str, first: &mut bool) -> Result<()> {
        for name in record.field_names() {
            let key = format!("{parent}{}", (self.options.mapper)(name));

            match record.field(name) {
                Some(FieldRef::Scalar(scalar)) => {
                    if let Some(value) = scalar.encode_text(&self.options) {
                        if !*first {
                            self.writer.write_all(b"\n")?;
                        }
                        *first = false;
                        write!(self.writer, "{key}={value}")?;
                    }
                }
                Some(FieldRef::Record(nested)) => {
                    let child = format!("{key}{}", self.options.separator);
                    self.encode_record(nested, &child, first)?;
                }
                Some(FieldRef::OptRecord(Some(nested))) => {
                    let child = format!("{key}{}", self.options.separator);
                    self.encode_record(nested, &child, first)?;
                }
                Some(FieldRef::OptRecord(None)) | None => {}
            }
        }

        Ok(())
    }

    /// The options this encoder runs with, after defaulting.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Consumes the encoder, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
