//! Seeded pseudo-random sources.
//!
//! Noise tables are built from a deterministic stream of integers, so the same
//! seed must always yield the same sequence. Two sources are provided:
//!
//! - [`xoroshiro::Xoroshiro`] - xoroshiro128++ with a SplitMix64-mixed seed
//! - [`legacy_random::LegacyRandom`] - the classic 48-bit linear congruential generator

pub mod legacy_random;
pub mod xoroshiro;

/// A seeded source of pseudo-random integers.
pub trait Random {
    /// Returns the next 64 random bits.
    fn next_u64(&mut self) -> u64;

    /// Returns a non-negative 63-bit integer.
    #[inline]
    fn next_int(&mut self) -> u64 {
        self.next_u64() >> 1
    }

    /// Returns `next_int() % bound`.
    ///
    /// This is a plain modulo reduction and carries the usual small bias for bounds
    /// that don't divide `2^63`; table building depends on that exact mapping.
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    #[inline]
    fn next_bounded(&mut self, bound: u64) -> u64 {
        self.next_int() % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts upwards, so draw results are predictable.
    struct Counter(u64);

    impl Random for Counter {
        fn next_u64(&mut self) -> u64 {
            self.0 += 1;
            self.0
        }
    }

    #[test]
    fn test_next_int_is_non_negative_63_bit() {
        let mut rng = Counter(u64::MAX - 1);
        assert_eq!(rng.next_int(), u64::MAX >> 1);
    }

    #[test]
    fn test_next_bounded_reduces_modulo() {
        let mut rng = Counter(0);
        // Draws 1 and 2 shift down to 0 and 1
        assert_eq!(rng.next_bounded(512), 0);
        assert_eq!(rng.next_bounded(512), 1);
        let mut rng = Counter(12);
        // Draw 13 shifts to 6
        assert_eq!(rng.next_bounded(5), 1);
    }
}
