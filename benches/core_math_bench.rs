use barchart_rs::core::{analyze, calculate_gutter_widths, generate_ticks, size_in_percentages};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_analyze_10k(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000)
        .map(|i| {
            let v = i as f64;
            if i % 3 == 0 { -v * 0.5 } else { v }
        })
        .collect();

    c.bench_function("analyze_10k", |b| {
        b.iter(|| analyze(black_box(&values)))
    });
}

fn bench_generate_ticks(c: &mut Criterion) {
    c.bench_function("generate_ticks_default", |b| {
        b.iter(|| generate_ticks(black_box(-5_000_001.0), black_box(7_982_368.0), 5, 0.5))
    });
}

fn bench_bar_sizing_10k(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000).map(|i| (i as f64) - 5_000.0).collect();

    c.bench_function("bar_sizing_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &value in &values {
                acc += size_in_percentages(black_box(value), -5_000.0, 5_000.0);
            }
            acc
        })
    });
}

fn bench_gutter_widths(c: &mut Criterion) {
    let widths: Vec<f64> = (0..64).map(|i| 20.0 + (i as f64) * 3.0).collect();

    c.bench_function("calculate_gutter_widths_64", |b| {
        b.iter(|| calculate_gutter_widths(black_box(&widths), black_box(1_440.0)))
    });
}

criterion_group!(
    benches,
    bench_analyze_10k,
    bench_generate_ticks,
    bench_bar_sizing_10k,
    bench_gutter_widths
);
criterion_main!(benches);
