use super::mt19937::{Mt19937, N};
use super::Error;

// Words requested from the OS per call
#[cfg(feature = "getrandom")]
const CHUNK_WORDS: usize = 64;

/// Source of seed words for an MT19937 PRNG
///
/// Implementations must not wait for entropy to become available,
/// they return `Error::EntropyUnavailable` instead.
pub trait EntropySource {
    /// Fill every word in `words`
    fn fill_words(&mut self, words: &mut [u32]) -> Result<(), Error>;
}

/// Operating system entropy, read through `rand::rngs::OsRng`
#[cfg(feature = "getrandom")]
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

#[cfg(feature = "getrandom")]
impl EntropySource for OsEntropy {
    fn fill_words(&mut self, words: &mut [u32]) -> Result<(), Error> {
        use rand::RngCore;

        let mut bytes = [0_u8; CHUNK_WORDS * 4];

        for chunk in words.chunks_mut(CHUNK_WORDS) {
            let buf = &mut bytes[..chunk.len() * 4];

            rand::rngs::OsRng.try_fill_bytes(buf).map_err(|e| {
                log::warn!("OS entropy unavailable: {}", e);
                Error::EntropyUnavailable
            })?;

            for (word, b) in chunk.iter_mut().zip(buf.chunks(4)) {
                *word = u32::from_le_bytes([b[0], b[1], b[2], b[3]]);
            }
        }

        Ok(())
    }
}

impl Mt19937 {
    /// Create an MT19937 PRNG seeded with N words from an entropy source
    ///
    /// Errors from the source are returned as-is, no retry is attempted
    pub fn from_source<E: EntropySource + ?Sized>(source: &mut E) -> Result<Self, Error> {
        let mut seed = [0_u32; N];
        source.fill_words(&mut seed)?;

        Ok(Self::from_seed(&seed))
    }

    /// Create an MT19937 PRNG seeded from operating system entropy
    #[cfg(feature = "getrandom")]
    pub fn from_entropy() -> Result<Self, Error> {
        let generator = Self::from_source(&mut OsEntropy)?;
        log::debug!("seeded MT19937 from OS entropy");
        Ok(generator)
    }
}
