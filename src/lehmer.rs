use crate::error::{Error, Result};
use crate::jump::{mul_mod, JUMP};
use crate::seed;
use arrayvec::ArrayVec;
use std::time::SystemTime;

// Park-Miller "minimal standard" constants
pub const MODULUS: u32 = 0x7FFF_FFFF; // 2^31 - 1, prime
pub const MULTIPLIER: u32 = 16807; // primitive root mod MODULUS

/// Lehmer generator `x' = a * x mod m`.
///
/// Not cryptographically secure. The state is always in `[1, m-1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generator {
    state: u32,
}

impl Generator {
    /// Any integer is accepted; it is folded onto `[1, m-1]` first.
    pub fn new(seed: impl Into<i128>) -> Self {
        let seed: i128 = seed.into();
        let state = seed::normalize(seed);
        if state as i128 != seed {
            log::debug!("seed {} normalized to {}", seed, state);
        }
        Generator { state }
    }

    pub fn from_time(time: SystemTime) -> Self {
        Self::new(seed::millis_since_epoch(time))
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advances one step and returns the new state, in `[1, 2^31 - 2]`.
    pub fn next(&mut self) -> u32 {
        // a * x < 2^46, needs 64 bits before reducing
        self.state = ((MULTIPLIER as u64 * self.state as u64) % MODULUS as u64) as u32;
        self.state
    }

    /// Uniform integer in `[min, max]`, consuming exactly one step.
    ///
    /// Fails with [`Error::InvalidRange`] when `min > max`; the state is left
    /// untouched in that case.
    pub fn next_in_range(&mut self, min: i64, max: i64) -> Result<i64> {
        if min > max {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(scale_into(self.next(), min, max))
    }

    // Value in [0, scale)
    pub fn next_f64(&mut self, scale: f64) -> f64 {
        const INV_MODULUS: f64 = 1.0 / (MODULUS as f64);
        let s = self.next();
        (s as f64) * (INV_MODULUS * scale)
    }

    /// Same as calling [`Generator::next`] `steps` times.
    pub fn skip(&mut self, steps: u64) {
        self.state = mul_mod(self.state, JUMP.multiplier_for(steps));
    }

    /// `N` pairwise distinct values from `[min, max]`, in draw order.
    ///
    /// Repeats are rejected and redrawn, each candidate costing one step.
    /// Nothing is consumed when the range is inverted or narrower than `N`.
    pub fn unique_in_range<const N: usize>(
        &mut self,
        min: i64,
        max: i64,
    ) -> Result<ArrayVec<i64, N>> {
        if min > max {
            return Err(Error::InvalidRange { min, max });
        }
        let span = max as i128 - min as i128 + 1;
        if span < N as i128 {
            return Err(Error::InsufficientSpan { min, max, count: N });
        }

        let mut values = ArrayVec::<i64, N>::new();
        while !values.is_full() {
            let v = scale_into(self.next(), min, max);
            if !values.contains(&v) {
                values.push(v);
            }
        }
        Ok(values)
    }
}

// floor(r * span / m) + min, exact. r < m keeps the offset below span.
fn scale_into(r: u32, min: i64, max: i64) -> i64 {
    debug_assert!(min <= max);
    let span = max as i128 - min as i128 + 1;
    let offset = (r as i128 * span) / MODULUS as i128;
    (min as i128 + offset) as i64
}
