use super::mt19937::Mt19937;

// Bit pattern of 1.0_f32
const ONE_F32_BITS: u32 = 0x3f80_0000;
// Mantissa bits of an f32
const MANTISSA_MASK: u32 = 0x007f_ffff;

// Number of distinct 32-bit outputs (2^32)
const WORD_SPAN: u64 = 1 << 32;

impl Mt19937 {
    /// Generate in range [0, max]
    ///
    /// The output space is split into max + 1 equal buckets,
    /// draws past the last whole bucket are rejected to avoid modulo bias
    fn next_zero_range(&mut self, max: u32) -> u32 {
        let divisor = WORD_SPAN / (max as u64 + 1);

        loop {
            let res = self.extract_number() as u64 / divisor;

            if res <= max as u64 {
                return res as u32;
            }
        }
    }

    /// Generate an unsigned integer in the inclusive range [m, n]
    ///
    /// Panics if m > n
    pub fn next_u32_range(&mut self, m: u32, n: u32) -> u32 {
        assert!(m <= n, "invalid range: {} > {}", m, n);

        m + self.next_zero_range(n - m)
    }

    /// Generate a signed integer in the inclusive range [m, n]
    ///
    /// Panics if m > n
    pub fn next_i32_range(&mut self, m: i32, n: i32) -> i32 {
        assert!(m <= n, "invalid range: {} > {}", m, n);

        // width of the range fits in a u32 even when it crosses zero
        let span = (n as u32).wrapping_sub(m as u32);

        m.wrapping_add(self.next_zero_range(span) as i32)
    }

    /// Generate a float in [0, 1)
    ///
    /// The low 23 bits of one output become the mantissa of a float in [1, 2),
    /// which is shifted down by one. Results are multiples of 2^-23.
    pub fn next_f32(&mut self) -> f32 {
        f32::from_bits(ONE_F32_BITS | (self.extract_number() & MANTISSA_MASK)) - 1.0
    }

    /// Generate a double in [0, 1) with 53-bit resolution
    ///
    /// Consumes two outputs (reference `genrand_res53`)
    pub fn next_f64(&mut self) -> f64 {
        let a = (self.extract_number() >> 5) as f64;
        let b = (self.extract_number() >> 6) as f64;

        (a * 67108864.0 + b) * (1.0 / 9007199254740992.0)
    }
}
