//! Customizing the codec: prefixes, separators, and naming policies.
//!
//! Run with: cargo run --example custom_options

use envcodec::{from_str_with_options, impl_record, mapper, to_string_with_options, Options};

#[derive(Default, Debug, PartialEq)]
struct Logger {
    level: String,
}

#[derive(Default, Debug, PartialEq)]
struct Config {
    app_name: String,
    logger: Logger,
    feature_flags: Vec<String>,
}

impl_record! {
    Logger {
        "Level" => scalar level,
    }
}

impl_record! {
    Config {
        "AppName" => scalar app_name,
        "Logger" => record logger,
        "FeatureFlags" => scalar feature_flags,
    }
}

fn main() -> envcodec::Result<()> {
    let config = Config {
        app_name: "demo".to_string(),
        logger: Logger {
            level: "info".to_string(),
        },
        feature_flags: vec!["tracing".to_string(), "cache".to_string()],
    };

    // snake_case keys under an application prefix, semicolon-joined slices.
    let options = Options::new()
        .with_prefix("APP__")
        .with_mapper(mapper::underscore)
        .with_slice_separator(";");

    let encoded = to_string_with_options(&config, options.clone())?;
    println!("encoded:\n{encoded}\n");
    // APP__app_name=demo
    // APP__logger__level=info
    // APP__feature_flags=tracing;cache

    let decoded: Config = from_str_with_options(&encoded, options)?;
    assert_eq!(decoded, config);

    // Entries without the prefix are ignored entirely.
    let partial: Config = from_str_with_options(
        "APP__app_name=kept\napp_name=ignored",
        Options::new()
            .with_prefix("APP__")
            .with_mapper(mapper::underscore),
    )?;
    assert_eq!(partial.app_name, "kept");
    println!("prefix filtering kept: {:?}", partial.app_name);

    Ok(())
}
