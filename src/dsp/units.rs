//! Parameter mapping helpers shared by the bank and the module layer.

/// Linearly remap `x` from `[old_min, old_max]` onto `[new_min, new_max]`.
///
/// No clamping is applied; values outside the old range extrapolate.
#[inline]
pub fn map_range(x: f32, old_min: f32, old_max: f32, new_min: f32, new_max: f32) -> f32 {
    let r = (x - old_min) / (old_max - old_min);
    new_min + r * (new_max - new_min)
}

/// Convert a (fractional) MIDI pitch to frequency in Hz.
/// A4 = 440 Hz = pitch 69
#[inline]
pub fn pitch_to_freq(pitch: f32) -> f32 {
    440.0 * 2.0_f32.powf((pitch - 69.0) / 12.0)
}

/// Constrain `x` to `[min, max]`.
///
/// Unlike `f32::clamp` this never panics on an inverted range. NaN passes
/// through untouched.
#[inline]
pub fn constrain(x: f32, min: f32, max: f32) -> f32 {
    if x < min {
        return min;
    }
    if x > max {
        return max;
    }
    x
}
