// Purpose: caller-facing layer between the host (knobs, CV jacks, sample rate)
// and the resonator bank. One call per output frame.

pub mod config;
pub mod message;
pub mod params;

pub use config::ModuleConfig;
pub use message::{ControlMessage, MessageReceiver};
pub use params::{Controls, CvInputs, Knobs, ModalParam};

use crate::dsp::bank::ResonatorBank;

/// The modal resonator as a host sees it: an audio input, three knobs, three
/// CV inputs and one output in volts.
///
/// Output scaling lives here and only here: [`ResonatorBank::produce_sample`]
/// returns the raw modal sum and `process` multiplies it by
/// [`ModuleConfig::output_gain`] (5.0 by default).
pub struct ModalModule {
    bank: ResonatorBank,
    knobs: Knobs,
    config: ModuleConfig,
}

impl ModalModule {
    pub fn new(config: ModuleConfig) -> Self {
        log::debug!(
            "modal module: sample_rate={} output_gain={} seed={}",
            config.sample_rate,
            config.output_gain,
            config.seed
        );

        Self {
            bank: ResonatorBank::with_seed(config.seed),
            knobs: Knobs::default(),
            config,
        }
    }

    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    pub fn bank(&self) -> &ResonatorBank {
        &self.bank
    }

    pub fn knobs(&self) -> &Knobs {
        &self.knobs
    }

    pub fn knob(&self, param: ModalParam) -> f32 {
        self.knobs.get(param)
    }

    /// Set a knob position. Values outside the parameter range are clamped.
    pub fn set_knob(&mut self, param: ModalParam, value: f32) {
        self.knobs.set(param, value);
    }

    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        log::debug!("modal module: sample rate {} -> {}", self.config.sample_rate, sample_rate);
        self.config.sample_rate = sample_rate;
    }

    pub fn apply(&mut self, msg: ControlMessage) {
        match msg {
            ControlMessage::SetKnob { param, value } => self.set_knob(param, value),
            ControlMessage::SetSampleRate(sample_rate) => self.set_sample_rate(sample_rate),
        }
    }

    /// Drain pending control messages. Call between blocks, never mid-frame.
    pub fn poll<R: MessageReceiver + ?Sized>(&mut self, rx: &mut R) {
        while let Some(msg) = rx.pop() {
            self.apply(msg);
        }
    }

    /// Render one frame. Returns the output in volts.
    #[inline]
    pub fn process(&mut self, input: f32, cv: &CvInputs) -> f32 {
        let controls = Controls::derive(&self.knobs, cv);
        let y = self.bank.produce_sample(
            input,
            controls.fundamental,
            controls.damping,
            controls.inharmonicity,
            self.config.sample_rate,
        );

        self.config.output_gain * y
    }

    /// Render `out.len()` frames with CV held constant across the block.
    pub fn process_block(&mut self, input: &[f32], cv: &CvInputs, out: &mut [f32]) {
        for (o, &x) in out.iter_mut().zip(input) {
            *o = self.process(x, cv);
        }
    }
}
