//! Implementation of Mersenne Twister MT19937 based on the reference code and paper:
//!
//! http://www.math.sci.hiroshima-u.ac.jp/~m-mat/MT/emt.html
//! https://en.wikipedia.org/wiki/Mersenne_Twister

use core::fmt;

use rand::RngCore;

pub const W: u32 = 32;
pub const N: usize = 624;
pub const M: usize = 397;

pub const A: u32 = 0x9908_b0df;

pub const U: u32 = 11;

pub const S: u32 = 7;
pub const B: u32 = 0x9d2c_5680;

pub const T: u32 = 15;
pub const C: u32 = 0xefc6_0000;

pub const L: u32 = 18;

pub const F: u32 = 1812433253;

pub const LOWER_MASK: u32 = 0x7fff_ffff;
pub const UPPER_MASK: u32 = 0x8000_0000;

// Seed expanded by init_by_array before the key is mixed in
const KEY_SEED: u32 = 19650218;
const KEY_MULT_MIX: u32 = 1664525;
const KEY_MULT_FINAL: u32 = 1566083941;

/// MT19937 PRNG (32-bit)
///
/// A plain value: clone it to fork the sequence, drop it when done.
/// There is no shared state between instances.
#[derive(Clone, PartialEq, Eq)]
pub struct Mt19937 {
    pub(crate) state: [u32; N],
    pub(crate) index: usize,
}

impl Mt19937 {
    /// Create an MT19937 PRNG from a single seed word
    ///
    /// Uses the reference `init_genrand` expansion, so seed 5489 reproduces the published outputs
    pub fn new(seed: u32) -> Self {
        Self::from_seed(&Self::expand_seed(seed))
    }

    /// Create an MT19937 PRNG from a full 624-word seed
    ///
    /// The seed is copied verbatim and marked as exhausted, so the state is
    /// regenerated before the first output is read. Until then `save_state`
    /// returns the seed unchanged.
    pub fn from_seed(seed: &[u32; N]) -> Self {
        Self {
            state: *seed,
            index: N,
        }
    }

    /// Create an MT19937 PRNG from a seed slice
    ///
    /// Panics if the slice is not exactly N words long
    pub fn from_slice(seed: &[u32]) -> Self {
        assert_eq!(seed.len(), N, "seed must be exactly {} words", N);

        let mut state = [0_u32; N];
        state.copy_from_slice(seed);

        Self::from_seed(&state)
    }

    /// Create an MT19937 PRNG from a key of arbitrary length
    ///
    /// Uses the reference `init_by_array` expansion. Panics on an empty key.
    pub fn from_key(key: &[u32]) -> Self {
        assert!(!key.is_empty(), "key must contain at least one word");

        let mut state = Self::expand_seed(KEY_SEED);
        let mut i = 1;
        let mut j = 0;

        for _ in 0..core::cmp::max(N, key.len()) {
            let prev = state[i - 1] ^ (state[i - 1] >> (W - 2));
            state[i] = (state[i] ^ prev.wrapping_mul(KEY_MULT_MIX))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);

            i += 1;
            j += 1;

            if i >= N {
                state[0] = state[N - 1];
                i = 1;
            }

            if j >= key.len() {
                j = 0;
            }
        }

        for _ in 0..N - 1 {
            let prev = state[i - 1] ^ (state[i - 1] >> (W - 2));
            state[i] = (state[i] ^ prev.wrapping_mul(KEY_MULT_FINAL)).wrapping_sub(i as u32);

            i += 1;

            if i >= N {
                state[0] = state[N - 1];
                i = 1;
            }
        }

        // MSB is set, so the initial state is never all zeroes
        state[0] = UPPER_MASK;

        Self::from_seed(&state)
    }

    /// Expand a single seed word into a full state (k-distribution)
    pub fn expand_seed(seed: u32) -> [u32; N] {
        let mut state = [0_u32; N];
        state[0] = seed;

        for i in 1..N {
            // xi = f × (xi−1 ⊕ (xi−1 >> (w−2))) + i
            state[i] = F
                .wrapping_mul(state[i - 1] ^ (state[i - 1] >> (W - 2)))
                .wrapping_add(i as u32);
        }

        state
    }

    /// Resume an MT19937 PRNG from a saved state and cursor
    ///
    /// Unlike seeding, the state is taken as-is: the next output is the one
    /// the saved generator would have produced.
    ///
    /// Panics if `index` is greater than N
    pub fn restore(state: &[u32; N], index: usize) -> Self {
        assert!(index <= N, "index out of range: {} > {}", index, N);

        Self {
            state: *state,
            index: index,
        }
    }

    /// Snapshot of the current state words (not the original seed once numbers are drawn)
    pub fn save_state(&self) -> [u32; N] {
        self.state
    }

    /// Position of the next word to temper, N when a regeneration is due
    pub fn index(&self) -> usize {
        self.index
    }

    /// Extract a tempered value based on MT[index]
    /// regenerating the state every N numbers
    pub fn extract_number(&mut self) -> u32 {
        if self.index >= N {
            self.regenerate();
        }

        let z = temper(self.state[self.index]);
        self.index += 1;

        z
    }

    // Twist every word of the state in place
    //
    // Lags past the end wrap around, reading words already twisted in this pass
    fn regenerate(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            self.state[i] = self.state[(i + M) % N] ^ (y >> 1) ^ (A * (y & 1));
        }

        self.index = 0;

        log::trace!("regenerated MT19937 state");
    }
}

// Tempering transform applied to a state word on output
fn temper(mut z: u32) -> u32 {
    z ^= z >> U;
    z ^= (z << S) & B;
    z ^= (z << T) & C;

    z ^ (z >> L)
}

impl fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt19937")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.extract_number()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.extract_number() as u64;
        let hi = self.extract_number() as u64;

        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let num = self.extract_number().to_le_bytes();
            chunk.copy_from_slice(&num[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
