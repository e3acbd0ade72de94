use std::f32::consts::TAU;

use crate::dsp::random::Random;
use crate::dsp::resonator::Resonator;
use crate::dsp::units::map_range;

/*
Resonator Bank
==============

A struck bell, bar or plate doesn't ring at one frequency. It rings at many at
once, its modes, and the mix of those modes is what makes a bell sound like a
bell instead of a sine wave. The bank models an object as NUM_MODES resonators
sharing one excitation, each tuned near a harmonic of the fundamental.

Mode Frequencies
----------------

Mode i (0-based) sits near harmonic i+1:

    f_i = (1 + inharm · table[i]) · (i + 1) · f0

  table[i]   A fixed random offset in [-1, 1), drawn once when the bank is
             built. table[0] is exactly 0, so the fundamental never drifts.

  inharm     How far the modes stray from the harmonic series.
               0.0:  perfectly harmonic, string-like
               0.3:  slightly off, like a tuned bar
               1.0:  wildly inharmonic, bells and metal plates

Damping Across Modes
--------------------

Real materials lose energy faster at high frequencies. The base damping is
applied to the fundamental and then compounds from mode to mode:

    σ_0 = damping
    σ_i = σ_(i-1) · growth

    growth = max(map(damping, 5..10 → 1.0..1.1), 1.0)

So below damping 5 every mode has the same damping, and at damping 10 the
twentieth mode is damped 1.1^19 ≈ 6x more than the fundamental.

Mass
----

Each mode's inverse mass is tied to its stiffness:

    m⁻¹ = ω0² / K,   K = 7643.022

which puts every mode's static response to a unit force at 1/K. The exact value
of K is carried over unchanged; it has no documented derivation.

Mode Cutoff
-----------

Modes at or above 20 kHz are inaudible and would push the integrator towards
instability, so the bank stops there. The frequencies are scanned in order and
the first mode that reaches the cutoff ends the scan:

    active = first i with f_i ≥ 20000, or NUM_MODES

The cutoff mode has its inverse mass zeroed and modes [0, active) are the only
ones advanced this frame. Because inharmonicity can push a low mode above a
higher one, a mode past the cutoff index can sit below 20 kHz and still be
skipped.

Oversampled Rate
----------------

Modes are configured with twice the host rate, and each resonator oversamples
again internally, so the integrator steps at 4x the host rate.

The step size is the oversampled period, but the sub-step loop only runs twice
per output sample:

  k = 1 / (2 * 2 * fs)       two sub-steps  →  time covered = fs⁻¹ / 2

Each output sample advances the oscillators by half a host period, so a mode
tuned to f rings at f / 2 in the output. The mode frequencies reported by
`mode_frequency` (and the 20 kHz cutoff) are the tuned values, not the
perceived ones.
*/

/// Number of resonators in the bank.
pub const NUM_MODES: usize = 20;

/// Modes at or above this frequency (Hz) end the bank for the frame.
pub const MODE_CUTOFF_HZ: f32 = 20_000.0;

/// Stiffness-to-mass constant shared by every mode.
pub const STIFFNESS: f32 = 7643.022;

/// Seed used for the inharmonicity table by [`ResonatorBank::new`].
pub const INHARMONICITY_SEED: u32 = 42;

/// Rate multiplier handed to each resonator.
const MODE_RATE_MULTIPLIER: f32 = 2.0;

/// Per-mode damping multiplier derived from the base damping.
///
/// Linearly maps `[5, 10]` onto `[1.0, 1.1]` and never drops below 1.0.
#[inline]
pub fn damping_growth(damping_base: f32) -> f32 {
    map_range(damping_base, 5.0, 10.0, 1.0, 1.1).max(1.0)
}

#[derive(Debug, Clone)]
pub struct ResonatorBank {
    modes: [Resonator; NUM_MODES],
    inharmonicity: [f32; NUM_MODES],
    active_modes: usize,
}

impl Default for ResonatorBank {
    fn default() -> Self {
        Self::new()
    }
}

impl ResonatorBank {
    pub fn new() -> Self {
        Self::with_seed(INHARMONICITY_SEED)
    }

    /// Build a bank whose inharmonicity table is drawn from `seed`.
    pub fn with_seed(seed: u32) -> Self {
        let mut rng = Random::new(seed);
        let mut inharmonicity = [0.0; NUM_MODES];
        for coefficient in inharmonicity.iter_mut().skip(1) {
            *coefficient = rng.next_bipolar();
        }

        Self {
            modes: std::array::from_fn(|_| Resonator::new()),
            inharmonicity,
            active_modes: 0,
        }
    }

    pub fn inharmonicity_table(&self) -> &[f32; NUM_MODES] {
        &self.inharmonicity
    }

    pub fn modes(&self) -> &[Resonator; NUM_MODES] {
        &self.modes
    }

    /// Number of modes advanced by the most recent [`produce_sample`](Self::produce_sample).
    pub fn active_modes(&self) -> usize {
        self.active_modes
    }

    /// Frequency in Hz of mode `index` for the given fundamental and inharmonicity.
    #[inline]
    pub fn mode_frequency(&self, index: usize, fundamental: f32, inharmonicity: f32) -> f32 {
        (1.0 + inharmonicity * self.inharmonicity[index]) * (index + 1) as f32 * fundamental
    }

    /// Number of modes below the cutoff, scanning upward from the fundamental
    /// and stopping at the first mode that reaches [`MODE_CUTOFF_HZ`].
    pub fn active_mode_count(&self, fundamental: f32, inharmonicity: f32) -> usize {
        (0..NUM_MODES)
            .find(|&i| self.mode_frequency(i, fundamental, inharmonicity) >= MODE_CUTOFF_HZ)
            .unwrap_or(NUM_MODES)
    }

    /// Advance every active mode by one frame and return the summed output.
    ///
    /// The result is unscaled; `ModalModule` applies the output gain.
    pub fn produce_sample(
        &mut self,
        excitation: f32,
        fundamental: f32,
        damping_base: f32,
        inharmonicity: f32,
        sample_rate: f32,
    ) -> f32 {
        let growth = damping_growth(damping_base);
        let active = self.active_mode_count(fundamental, inharmonicity);
        if let Some(cutoff_mode) = self.modes.get_mut(active) {
            cutoff_mode.set_inverse_mass(0.0);
        }

        let mode_rate = MODE_RATE_MULTIPLIER * sample_rate;
        let mut damping = damping_base;
        let mut y = 0.0;

        for i in 0..active {
            let frequency = self.mode_frequency(i, fundamental, inharmonicity);
            let omega = TAU * frequency;

            let mode = &mut self.modes[i];
            mode.set_sample_rate(mode_rate);
            mode.set_angular_frequency(omega);
            mode.set_damping(damping);
            mode.set_inverse_mass(omega * omega / STIFFNESS);
            damping *= growth;

            y += mode.advance(excitation);
        }

        self.active_modes = active;
        y
    }
}
