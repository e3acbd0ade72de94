//! Deterministic pseudo random number generator.

/*
Additive Lagged-Fibonacci Generator
===================================

The inharmonicity table of the resonator bank is "random", but it must come
out identical every time a bank is built. So the generator is an ordinary value
that the bank owns and seeds once, never a process-wide source.

The scheme is the one behind the common C library `rand()` (degree 31,
separation 3). Using it means a bank seeded with 42 carries the same detuning
table as any host that seeded `rand()` with 42.

Seeding
-------

  state[0]      = seed            (0 is promoted to 1)
  state[i]      = 16807 * state[i-1] mod (2^31 - 1)     for i in 1..31

  The multiplication uses Schrage's trick (hi/lo split) so it never overflows
  an i32.

Stepping
--------

Two cursors walk the 31-word ring, three words apart:

  state[front] += state[rear]      (wrapping, 32 bits)
  output        = state[front] >> 1 (31-bit word, 0 ..= RAND_MAX)

The first 310 outputs are discarded to decorrelate the output from the seed.
*/

const DEGREE: usize = 31;
const SEPARATION: usize = 3;
const WARMUP_DRAWS: usize = DEGREE * 10;

/// Largest word returned by [`Random::next_word`].
pub const RAND_MAX: u32 = 0x7fff_ffff;

#[derive(Debug, Clone)]
pub struct Random {
    state: [u32; DEGREE],
    front: usize,
    rear: usize,
}

impl Random {
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; DEGREE];
        state[0] = if seed == 0 { 1 } else { seed };

        for i in 1..DEGREE {
            let word = state[i - 1] as i32;
            let hi = word / 127_773;
            let lo = word % 127_773;
            let mut next = 16_807_i32.wrapping_mul(lo).wrapping_sub(2_836_i32.wrapping_mul(hi));
            if next < 0 {
                next = next.wrapping_add(RAND_MAX as i32);
            }
            state[i] = next as u32;
        }

        let mut rng = Self {
            state,
            front: SEPARATION,
            rear: 0,
        };
        for _ in 0..WARMUP_DRAWS {
            rng.next_word();
        }
        rng
    }

    /// Next 31-bit word in `0..=RAND_MAX`.
    #[inline]
    pub fn next_word(&mut self) -> u32 {
        let sum = self.state[self.front].wrapping_add(self.state[self.rear]);
        self.state[self.front] = sum;

        self.front = (self.front + 1) % DEGREE;
        self.rear = (self.rear + 1) % DEGREE;

        sum >> 1
    }

    /// Next value in `[0.0, 1.0]`.
    #[inline]
    pub fn next_unit(&mut self) -> f32 {
        (self.next_word() as f64 / RAND_MAX as f64) as f32
    }

    /// Next value in `[-1.0, 1.0)`.
    ///
    /// Mirrors the unit draw as `1 - 2u`. The top end is pulled just below
    /// 1.0 so a zero word cannot land on the excluded bound.
    #[inline]
    pub fn next_bipolar(&mut self) -> f32 {
        let unit = self.next_word() as f64 / RAND_MAX as f64;
        let value = (1.0 - 2.0 * unit) as f32;
        value.min(BELOW_ONE)
    }
}

/// Largest f32 strictly below 1.0.
const BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;
