//! Benchmarks for strike → resonator graph chains.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonerig_modal::graph::{
    extensions::NodeExt,
    modal::ModalNode,
    node::{GraphNode, RenderCtx},
    strike::StrikeNode,
};

use crate::BLOCK_SIZES;

pub fn bench_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/graph");
    let ctx = RenderCtx::from_note(48_000.0, 60, 100.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // === BAR: impulse into a harmonic bank ===
        let mut bar = StrikeNode::impulse().through(ModalNode::new().with_damping(1.0));
        group.bench_with_input(BenchmarkId::new("bar", size), &size, |b, _| {
            b.iter(|| {
                bar.note_on(&ctx);
                bar.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });

        // === BELL: noise burst into a detuned bank ===
        let mut bell = StrikeNode::noise_burst(96)
            .through(ModalNode::new().with_inharmonicity(0.9));
        group.bench_with_input(BenchmarkId::new("bell", size), &size, |b, _| {
            b.iter(|| {
                bell.note_on(&ctx);
                bell.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });

        // === COUPLED: two banks in series ===
        let mut coupled = StrikeNode::impulse()
            .through(ModalNode::new().with_pitch(-12.0))
            .through(ModalNode::new().with_pitch(7.0));
        group.bench_with_input(BenchmarkId::new("coupled", size), &size, |b, _| {
            b.iter(|| {
                coupled.note_on(&ctx);
                coupled.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });
    }

    group.finish();
}
