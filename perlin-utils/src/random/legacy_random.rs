//! 48-bit linear congruential pseudo-random source.

use super::Random;

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// Linear congruential generator with a 48-bit state.
///
/// Each step computes `seed = (seed * 0x5DEECE66D + 0xB) mod 2^48` and hands out the
/// high bits of the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyRandom {
    seed: u64,
}

impl LegacyRandom {
    /// Create a generator from a 64-bit seed. Only the low 48 bits are kept.
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        Self {
            seed: (seed ^ MULTIPLIER) & MASK,
        }
    }

    /// Advance the state and return its top `bits` bits, sign-extended from bit 31.
    #[inline]
    const fn next_bits(&mut self, bits: u32) -> i32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) & MASK;
        (self.seed >> (48 - bits)) as i32
    }

    /// Returns the next 32-bit signed integer.
    #[inline]
    pub const fn next_i32(&mut self) -> i32 {
        self.next_bits(32)
    }

    /// Returns the next 64-bit signed integer, built from two 32-bit draws.
    #[inline]
    pub const fn next_i64(&mut self) -> i64 {
        let hi = self.next_bits(32) as i64;
        let lo = self.next_bits(32) as i64;
        (hi << 32).wrapping_add(lo)
    }
}

impl Random for LegacyRandom {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next_i64() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequence_seed_one() {
        let mut rng = LegacyRandom::from_seed(1);
        assert_eq!(rng.next_i32(), -1_155_869_325);
        assert_eq!(rng.next_i32(), 431_529_176);
    }

    #[test]
    fn test_next_i64_combines_two_draws() {
        let mut words = LegacyRandom::from_seed(1);
        let hi = i64::from(words.next_i32());
        let lo = i64::from(words.next_i32());

        let mut rng = LegacyRandom::from_seed(1);
        assert_eq!(rng.next_i64(), (hi << 32).wrapping_add(lo));
    }

    #[test]
    fn test_only_low_48_bits_of_seed_matter() {
        let mut a = LegacyRandom::from_seed(7);
        let mut b = LegacyRandom::from_seed(7 | (0xABCD << 48));
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }
}
