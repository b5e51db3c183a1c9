//! Benchmarks for the signal synthesis engine.
//!
//! Run with: cargo bench
//!
//! Generation is a single pass of closed-form trig per sample; these
//! benchmarks track the per-sample cost of the three waveform kinds and the
//! time-axis builder across typical request sizes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use signalscope::dsp::SignalGenerator;

/// Request sizes in samples (duration × sample rate).
const SAMPLE_COUNTS: &[usize] = &[1_000, 10_000, 100_000];

const SAMPLE_RATE: u32 = 48_000;

fn duration_for(count: usize) -> f64 {
    count as f64 / SAMPLE_RATE as f64
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator");
    let generator = SignalGenerator::new();

    for &count in SAMPLE_COUNTS {
        let duration = duration_for(count);

        group.bench_with_input(BenchmarkId::new("sine", count), &count, |b, _| {
            b.iter(|| {
                generator
                    .generate_sine(
                        black_box(1.0),
                        black_box(440.0),
                        black_box(0.0),
                        black_box(duration),
                        black_box(SAMPLE_RATE),
                    )
                    .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("am", count), &count, |b, _| {
            b.iter(|| {
                generator
                    .generate_am(
                        black_box(1.0),
                        black_box(440.0),
                        black_box(0.5),
                        black_box(10.0),
                        black_box(duration),
                        black_box(SAMPLE_RATE),
                    )
                    .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("fm", count), &count, |b, _| {
            b.iter(|| {
                generator
                    .generate_fm(
                        black_box(1.0),
                        black_box(440.0),
                        black_box(2.0),
                        black_box(10.0),
                        black_box(duration),
                        black_box(SAMPLE_RATE),
                    )
                    .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("time_array", count), &count, |b, _| {
            b.iter(|| {
                SignalGenerator::time_array(black_box(duration), black_box(SAMPLE_RATE)).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
