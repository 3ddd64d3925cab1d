pub mod derived;
pub mod entropy;
pub mod mt19937;

pub use entropy::EntropySource;
#[cfg(feature = "getrandom")]
pub use entropy::OsEntropy;

/// Errors for seeding an MT19937 PRNG
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The entropy source could not fill the state without blocking
    #[error("entropy unavailable: the source could not supply seed words without blocking")]
    EntropyUnavailable,
}
