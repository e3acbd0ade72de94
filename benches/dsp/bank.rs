//! Benchmarks for the 20-mode bank.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonerig_modal::dsp::bank::ResonatorBank;

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

fn run(bank: &mut ResonatorBank, input: &[f32], fundamental: f32, inharmonicity: f32) -> f32 {
    let mut acc = 0.0;
    for &x in input {
        acc += bank.produce_sample(black_box(x), fundamental, 0.5, inharmonicity, SAMPLE_RATE);
    }
    acc
}

pub fn bench_bank(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/bank");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| if i == 0 { 1.0 } else { 0.0 }).collect();

        // Low note: all 20 modes below the cutoff
        let mut bank = ResonatorBank::new();
        group.bench_with_input(BenchmarkId::new("all_modes", size), &size, |b, _| {
            b.iter(|| black_box(run(&mut bank, &input, 110.0, 0.0)))
        });

        // High note: cutoff leaves a handful of modes
        let mut bank = ResonatorBank::new();
        group.bench_with_input(BenchmarkId::new("few_modes", size), &size, |b, _| {
            b.iter(|| black_box(run(&mut bank, &input, 4_186.0, 0.0)))
        });

        // Bell-like detuning
        let mut bank = ResonatorBank::new();
        group.bench_with_input(BenchmarkId::new("inharmonic", size), &size, |b, _| {
            b.iter(|| black_box(run(&mut bank, &input, 261.63, 0.8)))
        });
    }

    group.finish();
}
