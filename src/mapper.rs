//! Naming policies.
//!
//! A naming policy maps a registered field name to its external key fragment.
//! Policies are plain function pointers: pure, total, and deterministic, so a
//! traversal can apply them to every field without side effects.
//!
//! Two policies ship with the crate:
//!
//! - [`identity`]: the field name unchanged (default)
//! - [`underscore`]: CamelCase to snake_case, with acronym-aware splitting
//!
//! ## Examples
//!
//! ```rust
//! use envcodec::mapper::{identity, underscore};
//!
//! assert_eq!(identity("DatabaseURL"), "DatabaseURL");
//! assert_eq!(underscore("DatabaseURL"), "database_url");
//! assert_eq!(underscore("ONETwo"), "one_two");
//! ```

/// A pure field-name to key-fragment mapping.
pub type NamingPolicy = fn(&str) -> String;

/// Returns the field name unchanged.
pub fn identity(name: &str) -> String {
    name.to_string()
}

/// Converts a mixed/camel-case identifier to a lowercase underscore-joined
/// form.
///
/// Single left-to-right scan keeping the last two consumed characters. An
/// uppercase character after a lowercase one closes the current segment. A
/// non-uppercase character after two uppercase ones is the tail of an acronym
/// run; the previous character starts the new segment (`"ONETwo"` splits as
/// `one` + `two`, not `onet` + `wo`).
pub fn underscore(name: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut cur = String::new();
    let mut last2: [Option<char>; 2] = [None, None];

    for c in name.chars() {
        if c.is_uppercase() {
            if last2[1].is_some_and(char::is_lowercase) {
                parts.push(std::mem::take(&mut cur));
            }
            cur.push(c.to_lowercase().next().unwrap_or(c));
        } else {
            if last2[0].is_some_and(char::is_uppercase) && last2[1].is_some_and(char::is_uppercase)
            {
                // The previous character already starts the next word.
                let head = cur.pop();
                parts.push(std::mem::take(&mut cur));
                cur.extend(head);
            }
            cur.push(c);
        }

        last2[0] = last2[1];
        last2[1] = Some(c);
    }

    if !cur.is_empty() {
        parts.push(cur);
    }

    parts.join("_")
}
