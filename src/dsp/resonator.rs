use std::f32::consts::TAU;

/*
Modal Resonator
===============

One "mode" of a vibrating object: a mass on a spring with some friction,
pushed around by an input force. Strike it and it rings at its resonance
frequency, dying away at a rate set by the damping.

Vocabulary
----------

  u, up         Displacement now and one sub-step ago. Together they are the
                oscillator's memory: the scheme is a two-step recurrence, so
                velocity is implied by (u - up) rather than stored.

  ω0            Angular frequency in rad/s (2π · Hz). The "stiffness".

  σ0            Damping coefficient. 0 rings forever, larger dies faster.

  inverse mass  How hard the input force pushes. A heavy mode (small inverse
                mass) barely moves; inverse mass 0 silences the mode.

  k             Sub-step period in seconds.


The Equation
------------

    u'' + 2σ0·u' + ω0²·u = m⁻¹ · f(t)

discretised with centred differences and an implicit (backward) damping term:

              1
    un = ─────────── · ( -k²ω0²·u + σ0·k·up + 2u - up + k²·m⁻¹·f )
          1 + k·σ0

Keeping the damping on the left-hand side (the 1/(1 + kσ0) factor) is what
makes the update stable for every σ0 ≥ 0. The undamped part is stable as long
as k·ω0 < 2, which the bank guarantees by never running a mode at or above
20 kHz.

Oversampling
------------

Each call to `advance` runs OVERSAMPLING sub-steps with the same input force.
High modes sit much closer to the Nyquist limit of the integrator than low
ones, and the extra steps keep their tuning honest without any anti-aliasing
filters.

DC Tracker
----------

An impulse can leave the integrator sitting slightly off zero. A very slow
one-pole low-pass follows u:

    lp = 0.9999·lp + 0.0001·u          (time constant ≈ 10000 frames)

and the output is the distance from that average, scaled by (1 + σ0) so that
heavily damped modes don't vanish entirely:

    out = (1 + σ0) · (u - lp)
*/

/// Sub-steps per call to [`Resonator::advance`].
pub const OVERSAMPLING: usize = 2;

const DC_TRACKER_KEEP: f32 = 0.9999;
const DC_TRACKER_FOLLOW: f32 = 0.0001;

#[derive(Debug, Clone)]
pub struct Resonator {
    u: f32,  // current displacement
    up: f32, // previous displacement
    lp: f32, // DC tracker

    inverse_mass: f32,
    angular_frequency: f32,
    damping: f32,

    sample_period: f32,
}

impl Default for Resonator {
    fn default() -> Self {
        Self::new()
    }
}

impl Resonator {
    pub fn new() -> Self {
        Self {
            u: 0.0,
            up: 0.0,
            lp: 0.0,
            inverse_mass: 2000.0,
            angular_frequency: TAU * 440.0,
            damping: 2.0,
            sample_period: 1.0 / 44_100.0,
        }
    }

    /// Set the integration step from a sample rate in Hz.
    ///
    /// The step is `1 / (OVERSAMPLING * sample_rate)`. Must be called before the
    /// next [`advance`](Self::advance) whenever the rate changes.
    #[inline]
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_period = 1.0 / (OVERSAMPLING as f32 * sample_rate);
    }

    #[inline]
    pub fn set_angular_frequency(&mut self, omega: f32) {
        self.angular_frequency = omega;
    }

    #[inline]
    pub fn set_damping(&mut self, damping: f32) {
        self.damping = damping;
    }

    #[inline]
    pub fn set_inverse_mass(&mut self, inverse_mass: f32) {
        self.inverse_mass = inverse_mass;
    }

    pub fn angular_frequency(&self) -> f32 {
        self.angular_frequency
    }

    pub fn damping(&self) -> f32 {
        self.damping
    }

    pub fn inverse_mass(&self) -> f32 {
        self.inverse_mass
    }

    pub fn sample_period(&self) -> f32 {
        self.sample_period
    }

    /// Current displacement `u`.
    pub fn displacement(&self) -> f32 {
        self.u
    }

    /// Discrete energy of the undamped scheme.
    ///
    /// For σ0 = 0 and no forcing this quantity is an exact invariant of the
    /// recurrence (up to rounding):
    ///
    /// ```text
    /// E = ((u - up) / k)² + ω0² · u · up
    /// ```
    pub fn energy(&self) -> f32 {
        let k = self.sample_period;
        let velocity = (self.u - self.up) / k;
        velocity * velocity
            + self.angular_frequency * self.angular_frequency * self.u * self.up
    }

    /// Advance by one output frame under the force `f`, returning the
    /// DC-removed, damping-compensated displacement.
    #[inline]
    pub fn advance(&mut self, f: f32) -> f32 {
        let k = self.sample_period;
        let k2 = k * k;
        let sigma = self.damping;
        let omega2 = self.angular_frequency * self.angular_frequency;
        let norm = 1.0 / (1.0 + k * sigma);

        for _ in 0..OVERSAMPLING {
            let un = norm
                * (-k2 * omega2 * self.u + sigma * k * self.up + 2.0 * self.u - self.up
                    + k2 * self.inverse_mass * f);
            self.up = self.u;
            self.u = un;
        }

        self.lp = DC_TRACKER_KEEP * self.lp + DC_TRACKER_FOLLOW * self.u;

        (1.0 + sigma) * (self.u - self.lp)
    }
}
