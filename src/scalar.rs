//! Leaf value transcoding.
//!
//! [`Scalar`] is the capability every leaf field kind implements: decode a
//! textual value into `self`, or encode `self` back to text. Implementations
//! exist for strings, booleans, integers, floats, `Vec<T>` of any scalar, and
//! `Option<T>` of any scalar.
//!
//! Decoding is lenient by contract: text that fails to parse produces the
//! target type's zero value, never an error. This mirrors the original codec's
//! forward-compatibility policy and is asserted by the test suite; do not
//! tighten it.
//!
//! Types with their own textual form opt into [`FromText`] and register the
//! hook with [`text_scalar!`](crate::text_scalar), which takes precedence over
//! every built-in rule, including through `Option` indirection.
//!
//! ## Examples
//!
//! ```rust
//! use envcodec::{Options, Scalar};
//!
//! let options = Options::new();
//!
//! let mut port: u16 = 0;
//! port.decode_text("8080", &options);
//! assert_eq!(port, 8080);
//!
//! let mut retries: Vec<u32> = Vec::new();
//! retries.decode_text("10, 20, 30", &options);
//! assert_eq!(retries, vec![10, 20, 30]);
//! assert_eq!(retries.encode_text(&options).as_deref(), Some("10,20,30"));
//! ```

use crate::Options;

/// A leaf field that can transcode itself to and from text.
pub trait Scalar {
    /// Decodes `text` into `self`, replacing the previous value.
    ///
    /// Unparseable text leaves the zero value behind; it never fails.
    fn decode_text(&mut self, text: &str, options: &Options);

    /// Encodes `self` as the value half of a `key=value` line.
    ///
    /// `None` means the field contributes no line (an unset `Option`).
    fn encode_text(&self, options: &Options) -> Option<String>;
}

/// Opt-in custom textual parse for leaf types.
///
/// Checked before any built-in rule once wired up with
/// [`text_scalar!`](crate::text_scalar); the built-in numeric and boolean
/// rules never see the text.
///
/// Implementations follow the same leniency contract as [`Scalar`]: parse
/// best-effort, fall back to a zero-ish value, never fail.
pub trait FromText {
    /// Replaces `self` with the value parsed from `text`.
    fn from_text(&mut self, text: &str);
}

impl Scalar for String {
    fn decode_text(&mut self, text: &str, _options: &Options) {
        *self = text.to_string();
    }

    fn encode_text(&self, _options: &Options) -> Option<String> {
        Some(self.clone())
    }
}

impl Scalar for bool {
    fn decode_text(&mut self, text: &str, _options: &Options) {
        *self = parse_bool(text);
    }

    fn encode_text(&self, _options: &Options) -> Option<String> {
        Some(self.to_string())
    }
}

/// Conventional truthy spellings; everything else is the zero value.
fn parse_bool(text: &str) -> bool {
    matches!(text, "1" | "t" | "T" | "true" | "True" | "TRUE")
}

/// Splits an optional `0x`/`0o`/`0b` radix prefix (sign first, either case)
/// off an integer literal. Plain decimal returns `None`.
fn radix_split(text: &str) -> Option<(u32, String)> {
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'+') => ("+", &text[1..]),
        Some(b'-') => ("-", &text[1..]),
        _ => ("", text),
    };

    let bytes = rest.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    Some((radix, format!("{sign}{}", &rest[2..])))
}

macro_rules! int_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl Scalar for $ty {
            fn decode_text(&mut self, text: &str, _options: &Options) {
                *self = match radix_split(text) {
                    Some((radix, digits)) => {
                        <$ty>::from_str_radix(&digits, radix).unwrap_or_default()
                    }
                    None => text.parse().unwrap_or_default(),
                };
            }

            fn encode_text(&self, _options: &Options) -> Option<String> {
                Some(self.to_string())
            }
        }
    )*};
}

int_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl Scalar for $ty {
            fn decode_text(&mut self, text: &str, _options: &Options) {
                *self = text.parse().unwrap_or_default();
            }

            fn encode_text(&self, _options: &Options) -> Option<String> {
                Some(self.to_string())
            }
        }
    )*};
}

float_scalar!(f32, f64);

impl<T: Scalar + Default> Scalar for Vec<T> {
    /// An empty or all-whitespace value decodes to an empty sequence; anything
    /// else splits on the slice separator with each part trimmed.
    fn decode_text(&mut self, text: &str, options: &Options) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.clear();
            return;
        }

        let mut elements = Vec::new();
        for part in trimmed.split(options.slice_separator.as_str()) {
            let mut element = T::default();
            element.decode_text(part.trim(), options);
            elements.push(element);
        }
        *self = elements;
    }

    fn encode_text(&self, options: &Options) -> Option<String> {
        let parts: Vec<String> = self
            .iter()
            .map(|element| element.encode_text(options).unwrap_or_default())
            .collect();
        Some(parts.join(&options.slice_separator))
    }
}

impl<T: Scalar + Default> Scalar for Option<T> {
    /// Materializes a default inner value if unset, then decodes into it.
    /// Any [`FromText`] hook on `T` therefore still takes precedence after
    /// the unwrap.
    fn decode_text(&mut self, text: &str, options: &Options) {
        self.get_or_insert_with(T::default).decode_text(text, options);
    }

    fn encode_text(&self, options: &Options) -> Option<String> {
        self.as_ref().and_then(|value| value.encode_text(options))
    }
}
