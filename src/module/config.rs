#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::bank::INHARMONICITY_SEED;

/// Output voltage per unit of bank output (modular ±5 V audio convention).
pub const DEFAULT_OUTPUT_GAIN: f32 = 5.0;

/// Construction-time settings for a [`ModalModule`](super::ModalModule).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleConfig {
    /// Host sample rate in Hz
    pub sample_rate: f32,
    /// Multiplier applied to the summed bank output
    pub output_gain: f32,
    /// Seed for the inharmonicity table
    pub seed: u32,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000.0,
            output_gain: DEFAULT_OUTPUT_GAIN,
            seed: INHARMONICITY_SEED,
        }
    }
}

impl ModuleConfig {
    pub fn with_sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_output_gain(mut self, gain: f32) -> Self {
        self.output_gain = gain;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}
