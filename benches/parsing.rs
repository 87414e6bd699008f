use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_json5::{from_str, parse, parse_with_options, stringify, to_string, Json5Options};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

const HANDWRITTEN: &str = r#"
// Service configuration
{
    name: 'gateway',
    listen: ["0.0.0.0:8080", '[::]:8080',],
    timeouts: {connect: 2.5, read: 30, write: .5},
    retries: +3,
    mask: 0xFF00,
    /* feature switches */
    features: {compression: true, tracing: false, limit: Infinity},
    motd: 'Welcome \
to the gateway',
}
"#;

fn products(count: u32) -> Vec<Product> {
    (0..count)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("Product {}", i),
            price: 9.99 + f64::from(i),
            quantity: i,
        })
        .collect()
}

fn benchmark_parse_handwritten(c: &mut Criterion) {
    c.bench_function("parse_handwritten_config", |b| {
        b.iter(|| parse(black_box(HANDWRITTEN)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let text = "{id: 123, name: 'Alice', email: 'alice@example.com', active: true}";

    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_str::<User>(black_box(text)))
    });
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_array_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_of_objects");

    for size in [10, 100, 1000].iter() {
        let text = to_string(&products(*size)).unwrap();
        let value = parse(&text).unwrap();
        let options = Json5Options::new();

        group.bench_with_input(BenchmarkId::new("parse", size), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("stringify", size), &value, |b, value| {
            b.iter(|| stringify(black_box(value), 0, &options))
        });
        group.bench_with_input(BenchmarkId::new("stringify_pretty", size), &value, |b, value| {
            b.iter(|| stringify(black_box(value), 2, &options))
        });
    }
    group.finish();
}

fn benchmark_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("numbers");

    let integers = to_string(&(0..500).collect::<Vec<i64>>()).unwrap();
    let decimals = to_string(&(0..500).map(|i| f64::from(i) * 1.25).collect::<Vec<f64>>()).unwrap();
    let big = format!("[{}]", vec!["123456789012345678901234567890.123456789"; 200].join(","));
    let extended = format!("[{}]", vec!["0x1.8p3, 0b1010_1010, 1_000_000"; 100].join(","));
    let options = Json5Options::all_extensions();

    group.bench_function("integers", |b| b.iter(|| parse(black_box(&integers))));
    group.bench_function("decimals", |b| b.iter(|| parse(black_box(&decimals))));
    group.bench_function("big_decimals", |b| b.iter(|| parse(black_box(&big))));
    group.bench_function("extended_literals", |b| {
        b.iter(|| parse_with_options(black_box(&extended), &options))
    });
    group.finish();
}

fn benchmark_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("strings");

    let plain = to_string(&vec!["plain ascii text"; 200]).unwrap();
    let escaped = to_string(&vec!["tab\tquote\"newline\nunicode é 😀 \u{200B}"; 200]).unwrap();
    let ascii_only = Json5Options::new().with_stringify_ascii(true);
    let escaped_value = parse(&escaped).unwrap();

    group.bench_function("parse_plain", |b| b.iter(|| parse(black_box(&plain))));
    group.bench_function("parse_escaped", |b| b.iter(|| parse(black_box(&escaped))));
    group.bench_function("stringify_ascii", |b| {
        b.iter(|| stringify(black_box(&escaped_value), 0, &ascii_only))
    });
    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let data = products(100);
    let json_text = serde_json::to_string(&data).unwrap();

    let mut group = c.benchmark_group("comparison");

    group.bench_function("json5_deserialize", |b| {
        b.iter(|| serde_json5::from_str::<Vec<Product>>(black_box(&json_text)))
    });

    group.bench_function("json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<Vec<Product>>(black_box(&json_text)))
    });

    group.bench_function("json5_serialize", |b| {
        b.iter(|| serde_json5::to_string(black_box(&data)))
    });

    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&data)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse_handwritten,
    benchmark_deserialize_simple,
    benchmark_serialize_simple,
    benchmark_array_sizes,
    benchmark_numbers,
    benchmark_strings,
    benchmark_comparison_with_json
);
criterion_main!(benches);
