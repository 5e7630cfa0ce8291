use crate::lehmer::Generator;
use rand_core::{impls, Error, RngCore, SeedableRng};

// Each draw carries 31 bits, so wider words fold several draws together.
impl RngCore for Generator {
    fn next_u32(&mut self) -> u32 {
        self.next() ^ (self.next() << 16)
    }

    fn next_u64(&mut self) -> u64 {
        (self.next() as u64) << (0 * 16)
            ^ (self.next() as u64) << (1 * 16)
            ^ (self.next() as u64) << (2 * 16)
            ^ (self.next() as u64) << (3 * 16)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Generator {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Generator::new(i64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Generator::new(state)
    }
}
