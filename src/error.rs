//! Error types for env encoding and decoding.
//!
//! The error surface is deliberately narrow. The codec's leniency policy means
//! value-level problems never become errors:
//!
//! - Unknown keys and unmapped path segments are dropped silently
//! - Unparseable scalar text decodes to the target type's zero value
//!
//! What remains is the transport layer: reading lines from the input or writing
//! lines to the output can fail, and raw bytes handed to [`crate::from_slice`]
//! may not be UTF-8. There is no "destination is not a record" error class:
//! the [`Record`](crate::Record) bound enforces that at compile time.

use thiserror::Error;

/// All errors the codec can produce at runtime.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading from the input source or writing to the output sink failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes were not valid UTF-8.
    #[error("invalid utf-8 in input: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
