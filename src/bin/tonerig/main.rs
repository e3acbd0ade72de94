//! tonerig - offline renderer and analyzer for the modal resonator
//!
//! Run with: cargo run -- render --pitch 9 --inharmonicity 0.6 --out bell.wav

mod render;
mod spectrum;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, Result as EyreResult};

use render::{render, write_wav, Strike, VoiceSettings};
use spectrum::SpectrumAnalyzer;

/// Strike the modal resonator bank and listen to (or measure) the result
#[derive(Parser)]
#[command(name = "tonerig")]
#[command(about = "Offline renderer for the modal resonator bank")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Strike the resonator and write the result to a WAV file
    Render {
        #[command(flatten)]
        voice: VoiceArgs,

        /// Output WAV path
        #[arg(short, long)]
        out: PathBuf,

        /// Write raw volts / 10 instead of peak-normalizing
        #[arg(long)]
        raw: bool,
    },

    /// Strike the resonator and print the strongest spectral peaks
    Analyze {
        #[command(flatten)]
        voice: VoiceArgs,

        /// Number of peaks to report
        #[arg(short = 'n', long, default_value_t = 12)]
        peaks: usize,
    },
}

#[derive(Args, Clone, Debug)]
struct VoiceArgs {
    /// Host sample rate in Hz
    #[arg(long, default_value_t = 48_000.0)]
    sample_rate: f32,

    /// Pitch knob in semitones from middle C [-48, 48]
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pitch: f32,

    /// Damping knob [0, 10]
    #[arg(long, default_value_t = 0.5)]
    damping: f32,

    /// Inharmonicity knob [-1, 1]
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    inharmonicity: f32,

    /// Length of the render in seconds
    #[arg(long, default_value_t = 2.0)]
    duration: f32,

    /// Seed for the inharmonicity table
    #[arg(long, default_value_t = 42)]
    seed: u32,

    /// Excitation shape
    #[arg(long, value_enum, default_value_t = StrikeKind::Impulse)]
    strike: StrikeKind,

    /// Strike strength in volts
    #[arg(long, default_value_t = 10.0)]
    strike_volts: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StrikeKind {
    Impulse,
    Noise,
}

impl VoiceArgs {
    fn settings(&self) -> EyreResult<VoiceSettings> {
        if self.sample_rate.is_nan() || self.sample_rate <= 0.0 {
            return Err(eyre!("sample rate must be positive, got {}", self.sample_rate));
        }
        if self.duration.is_nan() || self.duration <= 0.0 {
            return Err(eyre!("duration must be positive, got {}", self.duration));
        }

        let strike = match self.strike {
            StrikeKind::Impulse => Strike::Impulse,
            // ~2 ms burst
            StrikeKind::Noise => Strike::Noise {
                length: ((self.sample_rate * 0.002) as usize).max(1),
            },
        };

        Ok(VoiceSettings {
            sample_rate: self.sample_rate,
            pitch: self.pitch,
            damping: self.damping,
            inharmonicity: self.inharmonicity,
            frames: (self.duration * self.sample_rate) as usize,
            seed: self.seed,
            strike,
            strike_volts: self.strike_volts,
        })
    }
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { voice, out, raw } => {
            let settings = voice.settings()?;
            let rendered = render(&settings);
            log::info!(
                "rendered {} frames, fundamental {:.2} Hz, {} active modes",
                rendered.samples.len(),
                rendered.fundamental,
                rendered.active_modes
            );

            let samples = if raw {
                rendered.volts_to_full_scale()
            } else {
                rendered.normalized(0.9)
            };
            write_wav(&out, &samples, settings.sample_rate)?;
            log::info!("wrote {}", out.display());
        }
        Commands::Analyze { voice, peaks } => {
            let settings = voice.settings()?;
            let rendered = render(&settings);

            println!("=== tonerig analyze ===");
            println!("Fundamental:  {:.2} Hz", rendered.fundamental);
            println!("Active modes: {}", rendered.active_modes);
            println!();
            println!("Tuned modes (Hz):");
            for (i, f) in rendered.mode_frequencies.iter().enumerate() {
                println!("  {:>2}  {:>10.2}", i + 1, f);
            }
            println!();

            let analyzer = SpectrumAnalyzer::new(rendered.samples.len(), settings.sample_rate);
            let found = analyzer.peaks(&rendered.samples, peaks);
            if found.is_empty() {
                println!("No spectral peaks (silent render)");
            } else {
                println!("Spectral peaks:");
                for peak in found {
                    println!("  {:>10.2} Hz  {:>7.1} dB", peak.frequency_hz, peak.magnitude_db);
                }
            }
        }
    }

    Ok(())
}
