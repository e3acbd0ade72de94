//! Low-level DSP primitives used by the module layer and the graph nodes.
//!
//! These components are allocation-free and realtime-safe. They stay focused on
//! the resonator math so the layers above can handle controls, scaling and
//! block rendering.

/// Bank of tuned, damped resonators summed into one output.
pub mod bank;
/// Seeded pseudo random generator for the inharmonicity table and noise.
pub mod random;
/// Single damped oscillator with an oversampled implicit integrator.
pub mod resonator;
/// Range mapping, pitch conversion and clamping.
pub mod units;

pub use bank::{damping_growth, ResonatorBank, NUM_MODES};
pub use resonator::Resonator;
