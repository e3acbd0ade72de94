//! Real-world scenario benchmarks.
//!
//! These benchmarks model how hosts drive the resonator: a module fed with
//! CV per block, and graph chains rendering struck voices.

mod graph;
mod module;

pub use graph::bench_graph;
pub use module::bench_module;
