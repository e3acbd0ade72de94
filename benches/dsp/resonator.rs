//! Benchmarks for a single damped mode.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonerig_modal::dsp::resonator::{Resonator, OVERSAMPLING};

use crate::BLOCK_SIZES;

pub fn bench_resonator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/resonator");

    for &size in BLOCK_SIZES {
        // Single impulse at the head of the block, silence after
        let input: Vec<f32> = (0..size).map(|i| if i == 0 { 1.0 } else { 0.0 }).collect();

        let mut mode = Resonator::default();
        mode.set_sample_rate(48_000.0 * OVERSAMPLING as f32);
        mode.set_angular_frequency(std::f32::consts::TAU * 440.0);
        mode.set_damping(1.0);
        group.bench_with_input(BenchmarkId::new("advance", size), &size, |b, _| {
            b.iter(|| {
                let mut acc = 0.0;
                for &x in &input {
                    acc += mode.advance(black_box(x));
                }
                black_box(acc)
            })
        });

        // Silenced mode (inverse mass 0) still pays for the update
        let mut silent = Resonator::default();
        silent.set_sample_rate(48_000.0 * OVERSAMPLING as f32);
        silent.set_inverse_mass(0.0);
        group.bench_with_input(BenchmarkId::new("silenced", size), &size, |b, _| {
            b.iter(|| {
                let mut acc = 0.0;
                for &x in &input {
                    acc += silent.advance(black_box(x));
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}
