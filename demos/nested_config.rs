//! Nested and optional records: delimited keys compose from the field path,
//! and `Option` records allocate only when a key traverses them.
//!
//! Run with: cargo run --example nested_config

use envcodec::{from_str, impl_record, to_string};

#[derive(Default, Debug, PartialEq)]
struct Credentials {
    username: String,
    password: String,
}

#[derive(Default, Debug, PartialEq)]
struct Database {
    url: String,
    pool: u32,
    credentials: Credentials,
}

#[derive(Default, Debug, PartialEq)]
struct Config {
    env: String,
    database: Database,
    replica: Option<Database>,
}

impl_record! {
    Credentials {
        "Username" => scalar username,
        "Password" => scalar password,
    }
}

impl_record! {
    Database {
        "Url" => scalar url,
        "Pool" => scalar pool,
        "Credentials" => record credentials,
    }
}

impl_record! {
    Config {
        "Env" => scalar env,
        "Database" => record database,
        "Replica" => opt_record replica,
    }
}

fn main() -> envcodec::Result<()> {
    let input = "\
Env=staging
Database__Url=postgres://primary.internal
Database__Pool=10
Database__Credentials__Username=svc
Replica__Url=postgres://replica.internal";

    let config: Config = from_str(input)?;
    println!("decoded:\n{config:#?}\n");

    // Replica was allocated because a key traversed it; its other fields hold
    // their defaults.
    let replica = config.replica.as_ref().expect("replica allocated");
    assert_eq!(replica.url, "postgres://replica.internal");
    assert_eq!(replica.pool, 0);

    println!("re-encoded:\n{}", to_string(&config)?);
    Ok(())
}
