//! Benchmark for single conversions and batch evaluation
//!
//! Run with: cargo bench --bench convert_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand::SeedableRng;

use tempconv::cli::evaluate_batch;
use tempconv::converter::{convert, Mode};

/// Generate batch lines with a mix of valid, empty and invalid readings
fn generate_lines(n: usize, seed: u64) -> Vec<String> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    (0..n)
        .map(|i| match i % 10 {
            0 => String::new(),
            1 => "not a number".to_string(),
            _ => format!("{:.2}", rng.gen_range(-100.0..150.0)),
        })
        .collect()
}

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for (name, input) in [("integer", "37"), ("decimal", "98.6"), ("invalid", "abc")] {
        group.bench_with_input(BenchmarkId::new("to_fahrenheit", name), input, |b, input| {
            b.iter(|| convert(black_box(input), black_box(Mode::ToFahrenheit)));
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for n in [100, 10_000] {
        let lines = generate_lines(n, 42);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("to_celsius", n), &lines, |b, lines| {
            b.iter(|| evaluate_batch(black_box(lines), black_box(Mode::ToCelsius), None));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
