use criterion::{black_box, criterion_group, criterion_main, Criterion};
use envcodec::{from_str, impl_record, to_string};

#[derive(Default, Debug, Clone, PartialEq)]
struct Connection {
    pool: u32,
    timeout: u32,
    retries: Vec<u32>,
}

#[derive(Default, Debug, Clone, PartialEq)]
struct Database {
    name: String,
    username: String,
    connection: Connection,
}

#[derive(Default, Debug, Clone, PartialEq)]
struct Config {
    env: String,
    debug: bool,
    database: Database,
    replica: Option<Database>,
    hosts: Vec<String>,
}

impl_record! {
    Connection {
        "Pool" => scalar pool,
        "Timeout" => scalar timeout,
        "Retries" => scalar retries,
    }
}

impl_record! {
    Database {
        "Name" => scalar name,
        "Username" => scalar username,
        "Connection" => record connection,
    }
}

impl_record! {
    Config {
        "Env" => scalar env,
        "Debug" => scalar debug,
        "Database" => record database,
        "Replica" => opt_record replica,
        "Hosts" => scalar hosts,
    }
}

fn sample() -> Config {
    let database = Database {
        name: "app".to_string(),
        username: "service".to_string(),
        connection: Connection {
            pool: 10,
            timeout: 30,
            retries: vec![10, 20, 30],
        },
    };

    Config {
        env: "production".to_string(),
        debug: false,
        replica: Some(database.clone()),
        database,
        hosts: vec![
            "a.internal".to_string(),
            "b.internal".to_string(),
            "c.internal".to_string(),
        ],
    }
}

fn benchmark_encode(c: &mut Criterion) {
    let config = sample();
    c.bench_function("encode_nested_config", |b| {
        b.iter(|| to_string(black_box(&config)).unwrap())
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let text = to_string(&sample()).unwrap();
    c.bench_function("decode_nested_config", |b| {
        b.iter(|| from_str::<Config>(black_box(&text)).unwrap())
    });
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let config = sample();
    c.bench_function("roundtrip_nested_config", |b| {
        b.iter(|| {
            let text = to_string(black_box(&config)).unwrap();
            from_str::<Config>(&text).unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_decode,
    benchmark_roundtrip
);
criterion_main!(benches);
