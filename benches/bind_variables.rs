//! Bind variable benchmarks
//!
//! Measures the hot paths a query layer pays per statement: inferring bind
//! variables from native values, validating a received map, framing it for
//! the wire, and rendering it for logs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sqlbind::config::FormatOptions;
use sqlbind::encoding::varint::{put_varint, read_varint};
use sqlbind::encoding::{decode_bind_vars, encode_bind_vars};
use sqlbind::{build_bind_variables, format_bind_variables, validate_bind_variables, BindVars, NativeValue};

fn sample_vars(width: usize) -> BindVars {
    let entries = (0..width).map(|i| {
        let native = match i % 4 {
            0 => NativeValue::from(i as i64 * 1_000_003),
            1 => NativeValue::from(format!("name-{}", i)),
            2 => NativeValue::from(i as f64 / 7.0),
            _ => NativeValue::from(vec![1i64, 2, 3, 4, 5, 6, 7, 8]),
        };
        (format!("v{}", i), native)
    });
    build_bind_variables(entries).unwrap()
}

fn bench_varint(c: &mut Criterion) {
    let mut group = c.benchmark_group("varint");

    let test_values: Vec<(u64, &str)> = vec![
        (0, "zero"),
        (240, "1_byte_max"),
        (2287, "2_byte_max"),
        (67823, "3_byte_max"),
        (u64::MAX, "max_u64"),
    ];

    for (value, name) in test_values {
        group.bench_with_input(BenchmarkId::new("put", name), &value, |b, &value| {
            let mut buf = Vec::with_capacity(9);
            b.iter(|| {
                buf.clear();
                put_varint(black_box(value), &mut buf);
                black_box(buf.len())
            });
        });

        let mut encoded = Vec::new();
        put_varint(value, &mut encoded);
        group.bench_with_input(BenchmarkId::new("read", name), &encoded, |b, data| {
            b.iter(|| {
                let mut cursor = black_box(data.as_slice());
                black_box(read_varint(&mut cursor).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_bind_variables");

    for width in [1usize, 8, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| black_box(sample_vars(black_box(width))));
        });
    }

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_bind_variables");

    for width in [1usize, 8, 64] {
        let vars = sample_vars(width);
        group.bench_with_input(BenchmarkId::from_parameter(width), &vars, |b, vars| {
            b.iter(|| black_box(validate_bind_variables(black_box(vars)).is_ok()));
        });
    }

    group.finish();
}

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("frames");

    for width in [1usize, 8, 64] {
        let vars = sample_vars(width);
        let encoded = encode_bind_vars(&vars).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", width), &vars, |b, vars| {
            b.iter(|| black_box(encode_bind_vars(black_box(vars)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("decode", width), &encoded, |b, data| {
            b.iter(|| black_box(decode_bind_vars(black_box(data)).unwrap()));
        });
    }

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_bind_variables");
    let vars = sample_vars(16);

    let modes = [
        ("text_full", FormatOptions::text().with_full(true)),
        ("text_elided", FormatOptions::text()),
        ("json_full", FormatOptions::json().with_full(true)),
        ("json_elided", FormatOptions::json()),
    ];
    for (name, opts) in modes {
        group.bench_with_input(BenchmarkId::from_parameter(name), &opts, |b, opts| {
            b.iter(|| black_box(format_bind_variables(black_box(&vars), opts)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_varint,
    bench_build,
    bench_validate,
    bench_frames,
    bench_format,
);
criterion_main!(benches);
