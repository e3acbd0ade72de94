//! Knob positions, control-voltage inputs and the per-frame values derived from them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::units::{constrain, map_range, pitch_to_freq};

/*
Knobs + CV
==========

Each parameter has a knob (a position inside its native range) and a CV input
(a voltage, 0 V when nothing is patched in). Every frame the CV is converted to
the parameter's units, added to the knob, and the sum is clamped back to the
native range:

  parameter      knob range       CV conversion
  -------------  ---------------  ------------------------------
  pitch          [-48, 48] st     volts / 12
  damping        [0, 10]          map(volts / 5, -1..1 → -10..10)
  inharmonicity  [-1, 1]          volts / 5

The fundamental is then pitch_to_freq(60 + pitch): knob at 0 is middle C.
*/

/// MIDI pitch that pitch 0 maps to (middle C).
pub const BASE_NOTE: f32 = 60.0;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalParam {
    /// Semitones relative to middle C
    Pitch,
    /// Base damping of the fundamental
    Damping,
    /// Spread of the modes away from the harmonic series
    Inharmonicity,
}

impl ModalParam {
    pub const ALL: [ModalParam; 3] = [
        ModalParam::Pitch,
        ModalParam::Damping,
        ModalParam::Inharmonicity,
    ];

    /// Native `(min, max)` range of the parameter.
    pub fn range(self) -> (f32, f32) {
        match self {
            ModalParam::Pitch => (-48.0, 48.0),
            ModalParam::Damping => (0.0, 10.0),
            ModalParam::Inharmonicity => (-1.0, 1.0),
        }
    }

    pub fn default_value(self) -> f32 {
        match self {
            ModalParam::Pitch => 0.0,
            ModalParam::Damping => 0.5,
            ModalParam::Inharmonicity => 0.0,
        }
    }

    pub fn clamp(self, value: f32) -> f32 {
        let (min, max) = self.range();
        constrain(value, min, max)
    }

    /// Convert a CV input in volts into this parameter's units.
    pub fn cv_offset(self, volts: f32) -> f32 {
        match self {
            ModalParam::Pitch => volts / 12.0,
            ModalParam::Damping => map_range(volts / 5.0, -1.0, 1.0, -10.0, 10.0),
            ModalParam::Inharmonicity => volts / 5.0,
        }
    }
}

/// Knob positions, always inside their native ranges.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knobs {
    pitch: f32,
    damping: f32,
    inharmonicity: f32,
}

impl Default for Knobs {
    fn default() -> Self {
        Self {
            pitch: ModalParam::Pitch.default_value(),
            damping: ModalParam::Damping.default_value(),
            inharmonicity: ModalParam::Inharmonicity.default_value(),
        }
    }
}

impl Knobs {
    pub fn get(&self, param: ModalParam) -> f32 {
        match param {
            ModalParam::Pitch => self.pitch,
            ModalParam::Damping => self.damping,
            ModalParam::Inharmonicity => self.inharmonicity,
        }
    }

    /// Set a knob, clamping to the parameter's range.
    pub fn set(&mut self, param: ModalParam, value: f32) {
        let value = param.clamp(value);
        match param {
            ModalParam::Pitch => self.pitch = value,
            ModalParam::Damping => self.damping = value,
            ModalParam::Inharmonicity => self.inharmonicity = value,
        }
    }

    pub fn with(mut self, param: ModalParam, value: f32) -> Self {
        self.set(param, value);
        self
    }
}

/// Control voltages in volts. Unpatched inputs stay at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CvInputs {
    pub pitch: f32,
    pub damping: f32,
    pub inharmonicity: f32,
}

impl CvInputs {
    pub fn get(&self, param: ModalParam) -> f32 {
        match param {
            ModalParam::Pitch => self.pitch,
            ModalParam::Damping => self.damping,
            ModalParam::Inharmonicity => self.inharmonicity,
        }
    }
}

/// Values handed to the resonator bank for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    pub pitch: f32,
    pub damping: f32,
    pub inharmonicity: f32,
    /// Fundamental frequency in Hz
    pub fundamental: f32,
}

impl Controls {
    pub fn derive(knobs: &Knobs, cv: &CvInputs) -> Self {
        let value = |param: ModalParam| {
            param.clamp(knobs.get(param) + param.cv_offset(cv.get(param)))
        };

        let pitch = value(ModalParam::Pitch);

        Self {
            pitch,
            damping: value(ModalParam::Damping),
            inharmonicity: value(ModalParam::Inharmonicity),
            fundamental: pitch_to_freq(BASE_NOTE + pitch),
        }
    }
}
