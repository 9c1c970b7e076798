//! Benchmark comparing `how_long::Stopwatch` overhead with raw
//! `std::time::Instant` arithmetic, plus the cost of rendering.

#![expect(missing_docs, reason = "benchmarks do not require API documentation")]

use std::hint::black_box;
use std::time::Instant;

use criterion::{Criterion, criterion_group, criterion_main};
use how_long::{Measurement, Stopwatch, TimeFormat};

fn stopwatch_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("elapsed_time_capture");

    group.bench_function("std_instant", |b| {
        b.iter(|| {
            let start = Instant::now();
            black_box(start.elapsed());
        });
    });

    group.bench_function("stopwatch", |b| {
        b.iter(|| {
            let mut stopwatch = Stopwatch::start_new();
            black_box(stopwatch.finish().unwrap());
        });
    });

    group.finish();
}

fn rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let measurement = Measurement::from_nanos(3_665_500_000_000);

    group.bench_function("human", |b| {
        b.iter(|| black_box(measurement.to_string_as(TimeFormat::Human)));
    });

    group.bench_function("condensed", |b| {
        b.iter(|| black_box(measurement.to_string_as(TimeFormat::Condensed)));
    });

    group.finish();
}

criterion_group!(benches, stopwatch_overhead, rendering);
criterion_main!(benches);
