//! Configuration options for env encoding and decoding.
//!
//! [`Options`] controls how external keys are formed and how leaf values are
//! split:
//!
//! - `prefix`: stripped from keys on decode, prepended to keys on encode
//! - `separator`: joins nested field names into one key (default `__`)
//! - `slice_separator`: joins sequence elements inside one value (default `,`)
//! - `mapper`: the naming policy applied to every field name (default
//!   [`identity`](crate::mapper::identity))
//!
//! ## Examples
//!
//! ```rust
//! use envcodec::{mapper, Options};
//!
//! let options = Options::new()
//!     .with_prefix("APP__")
//!     .with_separator("__")
//!     .with_slice_separator(";")
//!     .with_mapper(mapper::underscore);
//! assert_eq!(options.prefix, "APP__");
//! ```

use crate::mapper::{self, NamingPolicy};

/// Default separator between nested key segments.
pub const DEFAULT_SEPARATOR: &str = "__";

/// Default separator between sequence elements within one value.
pub const DEFAULT_SLICE_SEPARATOR: &str = ",";

/// Configuration shared by the encoder and the decoder.
///
/// Construct with [`Options::new`] and the `with_*` builders. An empty
/// `separator` or `slice_separator` counts as unset and falls back to the
/// default when the codec starts; values the caller did set are never
/// overwritten.
#[derive(Clone)]
pub struct Options {
    /// Key prefix. Decoding ignores entries whose key lacks it; encoding
    /// prepends it verbatim to every top-level key.
    pub prefix: String,
    /// Joiner between nested field names in an external key.
    pub separator: String,
    /// Joiner between sequence elements inside one leaf value.
    pub slice_separator: String,
    /// Naming policy mapping a field name to its external key fragment.
    pub mapper: NamingPolicy,
}

// Hand-written because `Debug` does not cover the higher-ranked fn pointer
// behind `NamingPolicy`.
impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("prefix", &self.prefix)
            .field("separator", &self.separator)
            .field("slice_separator", &self.slice_separator)
            .field("mapper", &(self.mapper as usize as *const ()))
            .finish()
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            prefix: String::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            slice_separator: DEFAULT_SLICE_SEPARATOR.to_string(),
            mapper: mapper::identity,
        }
    }
}

impl Options {
    /// Creates default options: no prefix, `__` separator, `,` slice
    /// separator, identity mapper.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the key prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the separator joining nested key segments.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the separator joining sequence elements within one value.
    #[must_use]
    pub fn with_slice_separator(mut self, slice_separator: impl Into<String>) -> Self {
        self.slice_separator = slice_separator.into();
        self
    }

    /// Sets the naming policy applied to field names on both directions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use envcodec::{mapper, Options};
    ///
    /// let options = Options::new().with_mapper(mapper::underscore);
    /// assert_eq!((options.mapper)("OneTwo"), "one_two");
    /// ```
    #[must_use]
    pub fn with_mapper(mut self, mapper: NamingPolicy) -> Self {
        self.mapper = mapper;
        self
    }

    /// Fills unset fields with their defaults, leaving set fields alone.
    ///
    /// Idempotent. Called once when an encoder or decoder is constructed, so
    /// a traversal always runs against fully defaulted, immutable options.
    #[must_use]
    pub(crate) fn with_defaults(mut self) -> Self {
        if self.separator.is_empty() {
            self.separator = DEFAULT_SEPARATOR.to_string();
        }
        if self.slice_separator.is_empty() {
            self.slice_separator = DEFAULT_SLICE_SEPARATOR.to_string();
        }
        self
    }
}
