// Formatter benchmarks

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use epoch_exhibit::model::BitWidth;
use epoch_exhibit::util::{format_bits, safe_calendar_string};

mod common;

fn bench_format_bits(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_bits");
    let values = common::generate_values(1_000);
    for width in [BitWidth::W32, BitWidth::W64, BitWidth::new(128).unwrap()] {
        group.bench_with_input(
            BenchmarkId::new("width", width.bits()),
            &width,
            |b, &width| {
                b.iter(|| {
                    for &value in &values {
                        black_box(format_bits(value, width));
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_safe_calendar_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("safe_calendar_string");

    let exact: Vec<i64> = (0..1_000).map(|i| i * 1_000_003).collect();
    group.bench_function("exact", |b| {
        b.iter(|| {
            for &ts in &exact {
                black_box(safe_calendar_string(ts));
            }
        });
    });

    let mixed = common::generate_timestamps(1_000);
    group.bench_function("mixed", |b| {
        b.iter(|| {
            for &ts in &mixed {
                black_box(safe_calendar_string(ts));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_format_bits, bench_safe_calendar_string);
criterion_main!(benches);
