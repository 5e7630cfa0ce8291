use crate::lehmer::{MODULUS, MULTIPLIER};

// Exponents are reduced modulo the period, so 31 bits of steps cover everything.
pub const JUMP_BITS: usize = 31;

pub fn mul_mod(x: u32, y: u32) -> u32 {
    ((x as u64 * y as u64) % MODULUS as u64) as u32
}

pub fn pow_mod(base: u32, mut exp: u64) -> u32 {
    let mut base = base % MODULUS;
    let mut acc = 1u32;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base);
        }
        base = mul_mod(base, base);
        exp >>= 1;
    }
    acc
}

// JumpTable[k] = a^(2^k) mod m
pub struct JumpTable {
    powers: [u32; JUMP_BITS],
}

impl JumpTable {
    pub fn new() -> Self {
        let mut table = JumpTable {
            powers: [0; JUMP_BITS],
        };

        // Repeated squaring: a^(2^(k+1)) = (a^(2^k))^2
        let mut p = MULTIPLIER;
        for k in 0..JUMP_BITS {
            table.powers[k] = p;
            p = mul_mod(p, p);
        }

        table
    }

    pub fn power(&self, k: usize) -> u32 {
        self.powers[k]
    }

    // a^steps mod m
    pub fn multiplier_for(&self, steps: u64) -> u32 {
        let steps = steps % (MODULUS - 1) as u64;
        let mut acc = 1u32;
        for k in 0..JUMP_BITS {
            if steps & (1 << k) != 0 {
                acc = mul_mod(acc, self.powers[k]);
            }
        }
        acc
    }
}

// Global jump table instance
lazy_static::lazy_static! {
    pub static ref JUMP: JumpTable = JumpTable::new();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_pow_mod() {
        for k in 0..JUMP_BITS {
            assert_eq!(JUMP.power(k), pow_mod(MULTIPLIER, 1u64 << k), "k = {}", k);
        }
    }

    #[test]
    fn test_multiplier_for_small_steps() {
        assert_eq!(JUMP.multiplier_for(0), 1);
        assert_eq!(JUMP.multiplier_for(1), 16807);
        assert_eq!(JUMP.multiplier_for(2), 282475249);
        assert_eq!(JUMP.multiplier_for(12345), pow_mod(MULTIPLIER, 12345));
    }

    #[test]
    fn test_multiplier_for_period_is_identity() {
        let period = (MODULUS - 1) as u64;
        assert_eq!(JUMP.multiplier_for(period), 1);
        assert_eq!(JUMP.multiplier_for(period + 7), JUMP.multiplier_for(7));
        assert_eq!(JUMP.multiplier_for(u64::MAX), pow_mod(MULTIPLIER, u64::MAX));
    }

    // m - 1 = 2 * 3^2 * 7 * 11 * 31 * 151 * 331
    const PERIOD_PRIME_FACTORS: [u64; 7] = [2, 3, 7, 11, 31, 151, 331];

    #[test]
    fn test_multiplier_is_primitive_root() {
        let period = (MODULUS - 1) as u64;
        assert_eq!(PERIOD_PRIME_FACTORS.iter().product::<u64>() * 3, period);
        for q in PERIOD_PRIME_FACTORS {
            assert_ne!(pow_mod(MULTIPLIER, period / q), 1, "order divides (m-1)/{}", q);
        }
        assert_eq!(pow_mod(MULTIPLIER, period), 1);
    }
}
