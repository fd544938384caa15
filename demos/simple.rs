//! Your first envcodec experience: encode and decode a flat record.
//!
//! Run with: cargo run --example simple

use envcodec::{from_str, impl_record, to_string};

#[derive(Default, Debug, PartialEq)]
struct Server {
    host: String,
    port: u16,
    debug: bool,
    allowed_origins: Vec<String>,
}

impl_record! {
    Server {
        "Host" => scalar host,
        "Port" => scalar port,
        "Debug" => scalar debug,
        "AllowedOrigins" => scalar allowed_origins,
    }
}

fn main() -> envcodec::Result<()> {
    let server = Server {
        host: "0.0.0.0".to_string(),
        port: 8080,
        debug: true,
        allowed_origins: vec!["localhost".to_string(), "app.internal".to_string()],
    };

    let encoded = to_string(&server)?;
    println!("encoded:\n{encoded}\n");

    let decoded: Server = from_str(&encoded)?;
    println!("decoded:\n{decoded:#?}");
    assert_eq!(decoded, server);

    Ok(())
}
