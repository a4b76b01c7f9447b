//! Random message selection.

/// Source of indices into the message collection.
pub trait IndexSource {
    /// Returns an index in `[0, bound)`, or 0 when `bound` is 0.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Xorshift32 generator. Small and good enough for picking messages.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    // xorshift never leaves zero
    const FALLBACK_SEED: u32 = 0x9E37_79B9;

    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { Self::FALLBACK_SEED } else { seed };
        Self { state }
    }

    /// Seeds from a stream of random bits, e.g. ring oscillator samples.
    pub fn from_bits(mut bit: impl FnMut() -> bool) -> Self {
        let seed = (0..32).fold(0u32, |acc, _| (acc << 1) | u32::from(bit()));
        Self::new(seed)
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl IndexSource for XorShift32 {
    fn next_index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.next_u32() as usize) % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_is_replaced() {
        let mut rng = XorShift32::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = XorShift32::new(42);
        let mut b = XorShift32::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn indices_stay_in_bounds() {
        let mut rng = XorShift32::new(7);
        for bound in 1..20 {
            for _ in 0..100 {
                assert!(rng.next_index(bound) < bound);
            }
        }
        assert_eq!(rng.next_index(0), 0);
    }

    #[test]
    fn indices_cover_small_range() {
        let mut rng = XorShift32::new(12345);
        let mut seen = [false; 5];
        for _ in 0..200 {
            seen[rng.next_index(5)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn seed_from_bits_is_msb_first() {
        let mut bits = [true, false].into_iter().cycle();
        let rng = XorShift32::from_bits(|| bits.next().unwrap_or(false));
        assert_eq!(rng.state, 0xAAAA_AAAA);
    }
}
