use crate::{
    dsp::{bank::ResonatorBank, units::pitch_to_freq},
    graph::node::{GraphNode, Modulatable, RenderCtx},
    module::params::{ModalParam, BASE_NOTE},
};

/*
Modal Node
==========

Wraps a ResonatorBank so it can sit in a graph. Like a filter, it processes the
buffer in place: whatever is in `out` when render_block is called is the
excitation, and it is replaced by the ringing of the bank.

  let bell = StrikeNode::impulse()
      .through(ModalNode::new().with_inharmonicity(0.8).with_damping(1.0));

Pitch
-----

By default the fundamental follows ctx.frequency, so the node plays whatever
note the caller renders. `with_pitch(semitones)` pins it to a fixed pitch
relative to middle C instead, the way a knob on the front panel would.

Levels
------

Graph nodes work with the raw modal sum. No voltage scaling happens here; that
belongs to ModalModule.

Activity
--------

A struck object is "active" until it has decayed 60 dB below the loudest block
since the last strike.
*/

/// Level, relative to the peak since the last strike, below which the node
/// reports itself silent (-60 dB).
const DECAY_FLOOR: f32 = 1e-3;

pub struct ModalNode {
    bank: ResonatorBank,
    /// Fixed pitch in semitones from middle C. None tracks ctx.frequency.
    pitch: Option<f32>,
    damping: f32,
    inharmonicity: f32,

    // Unmodulated values, reported by get_param
    base_pitch: f32,
    base_damping: f32,
    base_inharmonicity: f32,

    strike_pending: bool,
    strike_peak: f32,
    block_peak: f32,
}

impl Default for ModalNode {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalNode {
    pub fn new() -> Self {
        Self::with_bank(ResonatorBank::new())
    }

    pub fn with_bank(bank: ResonatorBank) -> Self {
        let damping = ModalParam::Damping.default_value();
        let inharmonicity = ModalParam::Inharmonicity.default_value();

        Self {
            bank,
            pitch: None,
            damping,
            inharmonicity,
            base_pitch: ModalParam::Pitch.default_value(),
            base_damping: damping,
            base_inharmonicity: inharmonicity,
            strike_pending: false,
            strike_peak: 0.0,
            block_peak: 0.0,
        }
    }

    /// Pin the fundamental to `semitones` from middle C, ignoring ctx.frequency.
    pub fn with_pitch(mut self, semitones: f32) -> Self {
        let pitch = ModalParam::Pitch.clamp(semitones);
        self.pitch = Some(pitch);
        self.base_pitch = pitch;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = ModalParam::Damping.clamp(damping);
        self.base_damping = self.damping;
        self
    }

    pub fn with_inharmonicity(mut self, inharmonicity: f32) -> Self {
        self.inharmonicity = ModalParam::Inharmonicity.clamp(inharmonicity);
        self.base_inharmonicity = self.inharmonicity;
        self
    }

    pub fn bank(&self) -> &ResonatorBank {
        &self.bank
    }

    /// Fundamental in Hz for the given context.
    pub fn fundamental(&self, ctx: &RenderCtx) -> f32 {
        match self.pitch {
            Some(semitones) => pitch_to_freq(BASE_NOTE + semitones),
            None => ctx.frequency,
        }
    }
}

impl Modulatable for ModalNode {
    type Param = ModalParam;

    fn get_param(&self, param: Self::Param) -> f32 {
        match param {
            ModalParam::Pitch => self.base_pitch,
            ModalParam::Damping => self.base_damping,
            ModalParam::Inharmonicity => self.base_inharmonicity,
        }
    }

    fn apply_modulation(&mut self, param: Self::Param, base: f32, modulation: f32) {
        let final_value = param.clamp(base + modulation);
        match param {
            ModalParam::Pitch => {
                self.base_pitch = base;
                self.pitch = Some(final_value);
            }
            ModalParam::Damping => {
                self.base_damping = base;
                self.damping = final_value;
            }
            ModalParam::Inharmonicity => {
                self.base_inharmonicity = base;
                self.inharmonicity = final_value;
            }
        }
    }
}

impl GraphNode for ModalNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let fundamental = self.fundamental(ctx);
        let mut peak = 0.0f32;

        for sample in out.iter_mut() {
            *sample = self.bank.produce_sample(
                *sample,
                fundamental,
                self.damping,
                self.inharmonicity,
                ctx.sample_rate,
            );
            peak = peak.max(sample.abs());
        }

        self.block_peak = peak;
        self.strike_peak = self.strike_peak.max(peak);
        self.strike_pending = false;
    }

    fn note_on(&mut self, _ctx: &RenderCtx) {
        self.strike_pending = true;
        self.strike_peak = 0.0;
    }

    fn is_active(&self) -> bool {
        self.strike_pending
            || (self.strike_peak > 0.0 && self.block_peak > self.strike_peak * DECAY_FLOOR)
    }
}
