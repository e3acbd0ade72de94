use crate::{
    dsp::random::Random,
    graph::node::{GraphNode, RenderCtx},
};

/*
Strike (Excitation Source)
==========================

A resonator bank is silent until something pushes it. StrikeNode is that push:
on note_on it emits a short excitation, then zeros until the next strike.

  impulse        One sample at full strength. The "cleanest" hit: every mode
                 gets the same kick, so the object's own tuning decides the
                 timbre.

  noise burst    A few milliseconds of noise fading out linearly. Softer, more
                 like a mallet or a scrape than a pin prick.

Strength scales with velocity (0-127), so ctx.velocity = 127 hits at `gain`.
The noise comes from a seeded generator, so two bursts from the same seed are
identical.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeShape {
    Impulse,
    NoiseBurst { length: usize },
}

pub struct StrikeNode {
    shape: StrikeShape,
    gain: f32,
    rng: Random,
    amplitude: f32,
    length: usize,
    remaining: usize,
}

impl StrikeNode {
    fn new(shape: StrikeShape) -> Self {
        Self {
            shape,
            gain: 1.0,
            rng: Random::new(1),
            amplitude: 0.0,
            length: 0,
            remaining: 0,
        }
    }

    pub fn impulse() -> Self {
        Self::new(StrikeShape::Impulse)
    }

    /// Decaying noise burst lasting `length` samples.
    pub fn noise_burst(length: usize) -> Self {
        Self::new(StrikeShape::NoiseBurst {
            length: length.max(1),
        })
    }

    /// Strength of a full-velocity strike.
    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.rng = Random::new(seed);
        self
    }

    pub fn shape(&self) -> StrikeShape {
        self.shape
    }
}

impl GraphNode for StrikeNode {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        for sample in out.iter_mut() {
            if self.remaining == 0 {
                *sample = 0.0;
                continue;
            }

            *sample = match self.shape {
                StrikeShape::Impulse => self.amplitude,
                StrikeShape::NoiseBurst { .. } => {
                    let fade = self.remaining as f32 / self.length as f32;
                    self.amplitude * fade * self.rng.next_bipolar()
                }
            };
            self.remaining -= 1;
        }
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.amplitude = self.gain * (ctx.velocity / 127.0).clamp(0.0, 1.0);
        self.length = match self.shape {
            StrikeShape::Impulse => 1,
            StrikeShape::NoiseBurst { length } => length,
        };
        self.remaining = self.length;
    }

    fn is_active(&self) -> bool {
        self.remaining > 0
    }
}
