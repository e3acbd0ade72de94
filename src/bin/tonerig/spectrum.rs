//! Spectrum peaks
//!
//! Single-frame FFT over a whole render, with peak picking on the magnitude
//! spectrum.

use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// Peaks quieter than this relative to the loudest are ignored.
const PEAK_FLOOR_DB: f32 = -80.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    pub frequency_hz: f32,
    /// Relative to the loudest bin
    pub magnitude_db: f32,
}

pub struct SpectrumAnalyzer {
    /// Hann window coefficients
    window: Vec<f32>,
    fft: Arc<dyn Fft<f32>>,
    sample_rate: f32,
}

impl SpectrumAnalyzer {
    /// # Arguments
    /// * `buffer_len` - FFT size (should match the render length)
    /// * `sample_rate` - Audio sample rate in Hz
    pub fn new(buffer_len: usize, sample_rate: f32) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(buffer_len.max(1));

        // Hann window - reduces spectral leakage
        let window: Vec<f32> = (0..buffer_len)
            .map(|i| {
                if buffer_len > 1 {
                    let denom = (buffer_len - 1) as f32;
                    0.5 * (1.0 - (2.0 * std::f32::consts::PI * i as f32 / denom).cos())
                } else {
                    1.0
                }
            })
            .collect();

        Self {
            window,
            fft,
            sample_rate,
        }
    }

    /// Power spectrum in dB for bins `0..len/2`.
    fn power_db(&self, buffer: &[f32]) -> Vec<f32> {
        let mut scratch: Vec<Complex<f32>> = self
            .window
            .iter()
            .zip(buffer)
            .map(|(w, s)| Complex::new(s * w, 0.0))
            .collect();
        scratch.resize(self.window.len().max(1), Complex::new(0.0, 0.0));

        self.fft.process(&mut scratch);

        let half = scratch.len() / 2;
        scratch[..half]
            .iter()
            .map(|bin| {
                let power = (bin.re * bin.re + bin.im * bin.im).max(1e-30);
                10.0 * power.log10()
            })
            .collect()
    }

    /// The `count` strongest local maxima, loudest first.
    ///
    /// Frequencies are refined with parabolic interpolation over the three
    /// bins around each maximum.
    pub fn peaks(&self, buffer: &[f32], count: usize) -> Vec<Peak> {
        if buffer.iter().all(|&s| s == 0.0) {
            return Vec::new();
        }

        let db = self.power_db(buffer);
        if db.len() < 3 {
            return Vec::new();
        }

        let loudest = db.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let bin_hz = self.sample_rate / self.window.len() as f32;

        let mut found: Vec<Peak> = (1..db.len() - 1)
            .filter(|&i| db[i] > db[i - 1] && db[i] >= db[i + 1])
            .filter(|&i| db[i] - loudest > PEAK_FLOOR_DB)
            .map(|i| {
                let (a, b, c) = (db[i - 1], db[i], db[i + 1]);
                let denom = a - 2.0 * b + c;
                let offset = if denom.abs() > f32::EPSILON {
                    (0.5 * (a - c) / denom).clamp(-0.5, 0.5)
                } else {
                    0.0
                };
                Peak {
                    frequency_hz: (i as f32 + offset) * bin_hz,
                    magnitude_db: b - loudest,
                }
            })
            .collect();

        found.sort_by(|x, y| y.magnitude_db.total_cmp(&x.magnitude_db));
        found.truncate(count);
        found
    }
}
