//! # envcodec
//!
//! A bidirectional codec between flat, line-oriented `KEY=VALUE` text (the
//! shape of process environment variables and simple `.env` files) and
//! arbitrarily nested Rust structs.
//!
//! ## How it works
//!
//! Nested fields compose into delimited external keys: with the default `__`
//! separator, a field `x` inside a nested record registered as `Inside`
//! becomes the key `Inside__X`. Sequences encode as a single value with
//! elements joined by the slice separator (default `,`). A pluggable naming
//! policy maps registered field names to key fragments, including a
//! CamelCase→snake_case transducer with acronym handling.
//!
//! Types participate by registering their fields with
//! [`impl_record!`]; unregistered fields are invisible to both
//! directions.
//!
//! ## Key properties
//!
//! - **Incremental decoding**: the decoder consumes one `key=value` line per
//!   step under caller control; the input is never materialized as a whole
//! - **Lenient by contract**: unknown keys are dropped and unparseable
//!   scalars decode to the zero value, favoring forward compatibility over
//!   strict validation
//! - **Lazy allocation**: `Option`-wrapped nested records materialize only
//!   when a key path actually traverses them
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick start
//!
//! ```rust
//! use envcodec::{from_str, impl_record, to_string};
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct Database {
//!     url: String,
//!     pool: u32,
//! }
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct Config {
//!     name: String,
//!     database: Database,
//!     retries: Vec<u32>,
//! }
//!
//! impl_record! {
//!     Database {
//!         "Url" => scalar url,
//!         "Pool" => scalar pool,
//!     }
//! }
//!
//! impl_record! {
//!     Config {
//!         "Name" => scalar name,
//!         "Database" => record database,
//!         "Retries" => scalar retries,
//!     }
//! }
//!
//! let config: Config = from_str(
//!     "Name=app\nDatabase__Url=postgres://localhost\nDatabase__Pool=10\nRetries=1,2,3",
//! )
//! .unwrap();
//! assert_eq!(config.database.pool, 10);
//! assert_eq!(config.retries, vec![1, 2, 3]);
//!
//! let encoded = to_string(&config).unwrap();
//! let back: Config = from_str(&encoded).unwrap();
//! assert_eq!(back, config);
//! ```
//!
//! ## Reading the process environment
//!
//! ```rust,no_run
//! use envcodec::{from_env_with_options, mapper, Options};
//! # use envcodec::impl_record;
//! # #[derive(Default)]
//! # struct Config { name: String }
//! # impl_record! { Config { "Name" => scalar name } }
//!
//! let options = Options::new()
//!     .with_prefix("APP__")
//!     .with_mapper(mapper::underscore);
//! let config: Config = from_env_with_options(options).unwrap();
//! ```
//!
//! ## Incremental decoding
//!
//! [`Decoder`] exposes the line-at-a-time state machine directly. Every
//! `decode` call mutates the same destination cumulatively, so repeated keys
//! are last-write-wins and multiple sources can layer into one record:
//!
//! ```rust
//! use envcodec::{Decoder, Options};
//! # use envcodec::impl_record;
//! # #[derive(Default)]
//! # struct Config { name: String, pool: u32 }
//! # impl_record! { Config { "Name" => scalar name, "Pool" => scalar pool } }
//! use std::io::Cursor;
//!
//! let mut config = Config::default();
//! for source in ["Name=defaults\nPool=5", "Name=local"] {
//!     let mut decoder = Decoder::new(Cursor::new(source), Options::new());
//!     while decoder.more() {
//!         decoder.decode(&mut config).unwrap();
//!     }
//! }
//! assert_eq!(config.name, "local");
//! assert_eq!(config.pool, 5);
//! ```
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`**: encode and decode a flat record
//! - **`nested_config.rs`**: nested and optional records
//! - **`custom_options.rs`**: prefixes, separators, and naming policies
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod lines;
pub mod macros;
pub mod mapper;
pub mod options;
pub mod record;
pub mod scalar;
pub mod ser;

pub use de::Decoder;
pub use error::{Error, Result};
pub use mapper::NamingPolicy;
pub use options::Options;
pub use record::{FieldMut, FieldRef, Record, RecordSlot};
pub use scalar::{FromText, Scalar};
pub use ser::Encoder;

use std::io::{self, BufRead, Cursor, Write};

use lines::{env_lines, LineReader, LineWriter};

/// Encodes `record` as newline-separated `KEY=VALUE` text.
///
/// # Examples
///
/// ```rust
/// use envcodec::{impl_record, to_string};
///
/// #[derive(Default)]
/// struct Point { x: i32, y: i32 }
///
/// impl_record! {
///     Point {
///         "X" => scalar x,
///         "Y" => scalar y,
///     }
/// }
///
/// let text = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(text, "X=1\nY=2");
/// ```
///
/// # Errors
///
/// Never fails in practice; the signature matches the writer-backed variants.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T: Record>(record: &T) -> Result<String> {
    to_string_with_options(record, Options::new())
}

/// Encodes `record` as `KEY=VALUE` text with custom options.
///
/// # Errors
///
/// Never fails in practice; the signature matches the writer-backed variants.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T: Record>(record: &T, options: Options) -> Result<String> {
    let mut encoder = Encoder::new(Vec::new(), options);
    encoder.encode(record)?;
    Ok(String::from_utf8_lossy(&encoder.into_inner()).into_owned())
}

/// Encodes `record` as `KEY=VALUE` lines written to `writer`.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: Write, T: Record>(writer: W, record: &T) -> Result<()> {
    to_writer_with_options(writer, record, Options::new())
}

/// Encodes `record` to `writer` with custom options.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W: Write, T: Record>(
    writer: W,
    record: &T,
    options: Options,
) -> Result<()> {
    Encoder::new(writer, options).encode(record)
}

/// Encodes `record` as an ordered list of `KEY=VALUE` strings.
///
/// # Examples
///
/// ```rust
/// use envcodec::{impl_record, to_lines};
///
/// #[derive(Default)]
/// struct Point { x: i32, y: i32 }
///
/// impl_record! {
///     Point {
///         "X" => scalar x,
///         "Y" => scalar y,
///     }
/// }
///
/// let lines = to_lines(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(lines, vec!["X=1".to_string(), "Y=2".to_string()]);
/// ```
///
/// # Errors
///
/// Never fails in practice; the signature matches the writer-backed variants.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_lines<T: Record>(record: &T) -> Result<Vec<String>> {
    to_lines_with_options(record, Options::new())
}

/// Encodes `record` as an ordered list of lines with custom options.
///
/// # Errors
///
/// Never fails in practice; the signature matches the writer-backed variants.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_lines_with_options<T: Record>(record: &T, options: Options) -> Result<Vec<String>> {
    let mut encoder = Encoder::new(LineWriter::new(), options);
    encoder.encode(record)?;
    Ok(encoder.into_inner().into_lines())
}

/// Decodes a fresh `T` from `KEY=VALUE` text.
///
/// # Examples
///
/// ```rust
/// use envcodec::{from_str, impl_record};
///
/// #[derive(Default, Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// impl_record! {
///     Point {
///         "X" => scalar x,
///         "Y" => scalar y,
///     }
/// }
///
/// let point: Point = from_str("X=1\nY=2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Never fails in practice; the signature matches the reader-backed variants.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T: Record + Default>(text: &str) -> Result<T> {
    from_str_with_options(text, Options::new())
}

/// Decodes a fresh `T` from `KEY=VALUE` text with custom options.
///
/// # Errors
///
/// Never fails in practice; the signature matches the reader-backed variants.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T: Record + Default>(text: &str, options: Options) -> Result<T> {
    decode_from(Cursor::new(text.as_bytes()), options)
}

/// Decodes a fresh `T` from an I/O stream of `KEY=VALUE` lines.
///
/// # Errors
///
/// Returns an error if reading from the reader fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read, T: Record + Default>(reader: R) -> Result<T> {
    from_reader_with_options(reader, Options::new())
}

/// Decodes a fresh `T` from an I/O stream with custom options.
///
/// # Errors
///
/// Returns an error if reading from the reader fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R: io::Read, T: Record + Default>(
    reader: R,
    options: Options,
) -> Result<T> {
    decode_from(io::BufReader::new(reader), options)
}

/// Decodes a fresh `T` from bytes of `KEY=VALUE` text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T: Record + Default>(bytes: &[u8]) -> Result<T> {
    from_slice_with_options(bytes, Options::new())
}

/// Decodes a fresh `T` from bytes with custom options.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice_with_options<T: Record + Default>(bytes: &[u8], options: Options) -> Result<T> {
    let text = std::str::from_utf8(bytes)?;
    from_str_with_options(text, options)
}

/// Decodes a fresh `T` from an ordered list of `KEY=VALUE` strings.
///
/// Duplicate keys resolve last-write-wins, in list order.
///
/// # Errors
///
/// Never fails in practice; the signature matches the reader-backed variants.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_lines<I, S, T>(lines: I) -> Result<T>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    T: Record + Default,
{
    from_lines_with_options(lines, Options::new())
}

/// Decodes a fresh `T` from an ordered list of lines with custom options.
///
/// # Errors
///
/// Never fails in practice; the signature matches the reader-backed variants.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_lines_with_options<I, S, T>(lines: I, options: Options) -> Result<T>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    T: Record + Default,
{
    decode_from(LineReader::new(lines), options)
}

/// Decodes a fresh `T` from the process environment.
///
/// Usually combined with a prefix and the
/// [`underscore`](crate::mapper::underscore) policy so `APP__DATABASE__POOL`
/// style variables land in `database.pool` style fields.
///
/// # Errors
///
/// Never fails in practice; the signature matches the reader-backed variants.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_env<T: Record + Default>() -> Result<T> {
    from_env_with_options(Options::new())
}

/// Decodes a fresh `T` from the process environment with custom options.
///
/// # Errors
///
/// Never fails in practice; the signature matches the reader-backed variants.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_env_with_options<T: Record + Default>(options: Options) -> Result<T> {
    from_lines_with_options(env_lines(), options)
}

fn decode_from<R: BufRead, T: Record + Default>(reader: R, options: Options) -> Result<T> {
    let mut record = T::default();
    let mut decoder = Decoder::new(reader, options);
    while decoder.more() {
        decoder.decode(&mut record)?;
    }
    Ok(record)
}
