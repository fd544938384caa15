//! Property-based tests covering the round-trip guarantee for every leaf kind
//! whose textual form is exact: strings, integers, booleans, canonically
//! formatted floats, and sequences of those.

use envcodec::{from_str_with_options, impl_record, mapper, to_string_with_options, Options};
use proptest::prelude::*;

#[derive(Default, Debug, Clone, PartialEq)]
struct Inner {
    label: String,
    weight: f64,
}

impl_record! {
    Inner {
        "Label" => scalar label,
        "Weight" => scalar weight,
    }
}

#[derive(Default, Debug, Clone, PartialEq)]
struct Subject {
    name: String,
    signed: i64,
    unsigned: u32,
    flag: bool,
    ratio: f64,
    ints: Vec<i32>,
    words: Vec<String>,
    maybe: Option<i64>,
    inner: Inner,
    extra: Option<Inner>,
}

impl_record! {
    Subject {
        "Name" => scalar name,
        "Signed" => scalar signed,
        "Unsigned" => scalar unsigned,
        "Flag" => scalar flag,
        "Ratio" => scalar ratio,
        "Ints" => scalar ints,
        "Words" => scalar words,
        "Maybe" => scalar maybe,
        "Inner" => record inner,
        "Extra" => opt_record extra,
    }
}

// Values must survive the line format: no '=', '\n', separators, or edge
// whitespace the decoder trims away.
fn safe_string() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.:-]{0,24}"
}

// Sequence elements additionally must not be empty, since an all-empty value
// decodes to an empty sequence.
fn safe_word() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.:-]{1,12}"
}

fn inner() -> impl Strategy<Value = Inner> {
    (safe_string(), -1.0e9..1.0e9f64).prop_map(|(label, weight)| Inner { label, weight })
}

fn subject() -> impl Strategy<Value = Subject> {
    (
        (
            safe_string(),
            any::<i64>(),
            any::<u32>(),
            any::<bool>(),
            -1.0e9..1.0e9f64,
        ),
        (
            prop::collection::vec(any::<i32>(), 0..8),
            prop::collection::vec(safe_word(), 0..8),
            proptest::option::of(any::<i64>()),
            inner(),
            proptest::option::of(inner()),
        ),
    )
        .prop_map(
            |((name, signed, unsigned, flag, ratio), (ints, words, maybe, inner, extra))| {
                Subject {
                    name,
                    signed,
                    unsigned,
                    flag,
                    ratio,
                    ints,
                    words,
                    maybe,
                    inner,
                    extra,
                }
            },
        )
}

fn roundtrip(value: &Subject, options: Options) -> bool {
    match to_string_with_options(value, options.clone()) {
        Ok(encoded) => match from_str_with_options::<Subject>(&encoded, options) {
            Ok(decoded) => *value == decoded,
            Err(e) => {
                eprintln!("decode failed: {e}");
                eprintln!("encoded was: {encoded}");
                false
            }
        },
        Err(e) => {
            eprintln!("encode failed: {e}");
            false
        }
    }
}

proptest! {
    #[test]
    fn prop_roundtrip_default_options(value in subject()) {
        prop_assert!(roundtrip(&value, Options::new()));
    }

    #[test]
    fn prop_roundtrip_underscore_mapper(value in subject()) {
        prop_assert!(roundtrip(&value, Options::new().with_mapper(mapper::underscore)));
    }

    #[test]
    fn prop_roundtrip_custom_separators(value in subject()) {
        let options = Options::new()
            .with_prefix("P__")
            .with_separator("::")
            .with_slice_separator(";");
        prop_assert!(roundtrip(&value, options));
    }

    #[test]
    fn prop_unknown_keys_never_fail(key in "[A-Za-z][A-Za-z0-9]{0,12}", value in "[A-Za-z0-9]{0,12}") {
        let line = format!("{key}__Unknown={value}");
        let decoded = from_str_with_options::<Subject>(&line, Options::new());
        prop_assert!(decoded.is_ok());
    }

    #[test]
    fn prop_garbage_integers_decode_to_zero(text in "[a-z]{1,16}") {
        let decoded: Subject = from_str_with_options(
            &format!("Signed={text}\nUnsigned={text}"),
            Options::new(),
        ).unwrap();
        prop_assert_eq!(decoded.signed, 0);
        prop_assert_eq!(decoded.unsigned, 0);
    }
}
