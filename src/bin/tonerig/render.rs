//! Offline rendering: strike the module once and collect its output.

use std::{fs, path::Path};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use hound::{SampleFormat, WavSpec, WavWriter};
use tonerig_modal::{
    graph::{GraphNode, RenderCtx, StrikeNode},
    module::Controls,
    CvInputs, ModalModule, ModalParam, ModuleConfig, MAX_BLOCK_SIZE,
};

/// Eurorack full scale: +/-10 V maps to +/-1.0.
const FULL_SCALE_VOLTS: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strike {
    Impulse,
    Noise { length: usize },
}

#[derive(Debug, Clone)]
pub struct VoiceSettings {
    pub sample_rate: f32,
    pub pitch: f32,
    pub damping: f32,
    pub inharmonicity: f32,
    pub frames: usize,
    pub seed: u32,
    pub strike: Strike,
    pub strike_volts: f32,
}

pub struct Rendered {
    /// Module output in volts
    pub samples: Vec<f32>,
    pub fundamental: f32,
    pub active_modes: usize,
    /// Tuned frequency of every mode below the cutoff
    pub mode_frequencies: Vec<f32>,
}

impl Rendered {
    pub fn volts_to_full_scale(&self) -> Vec<f32> {
        self.samples.iter().map(|v| v / FULL_SCALE_VOLTS).collect()
    }

    /// Scale so the loudest sample lands at `peak`. Silent renders stay silent.
    pub fn normalized(&self, peak: f32) -> Vec<f32> {
        let max = self.samples.iter().fold(0.0f32, |m, v| m.max(v.abs()));
        if max == 0.0 || !max.is_finite() {
            return self.samples.clone();
        }

        let scale = peak / max;
        self.samples.iter().map(|v| v * scale).collect()
    }
}

pub fn render(settings: &VoiceSettings) -> Rendered {
    let config = ModuleConfig::default()
        .with_sample_rate(settings.sample_rate)
        .with_seed(settings.seed);
    let mut module = ModalModule::new(config);
    module.set_knob(ModalParam::Pitch, settings.pitch);
    module.set_knob(ModalParam::Damping, settings.damping);
    module.set_knob(ModalParam::Inharmonicity, settings.inharmonicity);

    let mut exciter = match settings.strike {
        Strike::Impulse => StrikeNode::impulse(),
        Strike::Noise { length } => StrikeNode::noise_burst(length).with_seed(settings.seed),
    }
    .with_gain(settings.strike_volts);

    let ctx = RenderCtx::from_freq(settings.sample_rate, 0.0, 127.0);
    exciter.note_on(&ctx);

    let cv = CvInputs::default();
    let mut input = vec![0.0; MAX_BLOCK_SIZE];
    let mut block = vec![0.0; MAX_BLOCK_SIZE];
    let mut samples = Vec::with_capacity(settings.frames);

    while samples.len() < settings.frames {
        let n = (settings.frames - samples.len()).min(MAX_BLOCK_SIZE);
        exciter.render_block(&mut input[..n], &ctx);
        module.process_block(&input[..n], &cv, &mut block[..n]);
        samples.extend_from_slice(&block[..n]);
    }

    let controls = Controls::derive(module.knobs(), &cv);
    let bank = module.bank();
    let active_modes = bank.active_mode_count(controls.fundamental, controls.inharmonicity);
    let mode_frequencies = (0..active_modes)
        .map(|i| bank.mode_frequency(i, controls.fundamental, controls.inharmonicity))
        .collect();

    log::debug!(
        "render: pitch={} damping={} inharmonicity={} strike={:?}",
        controls.pitch,
        controls.damping,
        controls.inharmonicity,
        settings.strike
    );

    Rendered {
        samples,
        fundamental: controls.fundamental,
        active_modes,
        mode_frequencies,
    }
}

/// Write mono 32-bit float WAV, creating parent directories as needed.
pub fn write_wav(path: &Path, samples: &[f32], sample_rate: f32) -> EyreResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate: sample_rate.round() as u32,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)
        .wrap_err_with(|| format!("failed to create {}", path.display()))?;
    for &sample in samples {
        writer.write_sample(sample).wrap_err("failed to write sample")?;
    }
    writer.finalize().wrap_err("failed to finalize WAV")?;

    Ok(())
}
