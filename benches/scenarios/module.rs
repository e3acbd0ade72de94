//! Benchmarks for the host-facing module.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonerig_modal::{CvInputs, ModalModule, ModalParam, ModuleConfig};

use crate::BLOCK_SIZES;

pub fn bench_module(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/module");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| if i == 0 { 10.0 } else { 0.0 }).collect();
        let mut out = vec![0.0f32; size];

        // Knobs only
        let mut module = ModalModule::new(ModuleConfig::default());
        let cv = CvInputs::default();
        group.bench_with_input(BenchmarkId::new("knobs", size), &size, |b, _| {
            b.iter(|| {
                module.process_block(black_box(&input), &cv, &mut out);
                black_box(&out);
            })
        });

        // Every CV input patched
        let mut module = ModalModule::new(ModuleConfig::default());
        module.set_knob(ModalParam::Damping, 3.0);
        let cv = CvInputs {
            pitch: 1.0,
            damping: -2.5,
            inharmonicity: 1.5,
        };
        group.bench_with_input(BenchmarkId::new("patched_cv", size), &size, |b, _| {
            b.iter(|| {
                module.process_block(black_box(&input), &cv, &mut out);
                black_box(&out);
            })
        });
    }

    group.finish();
}
