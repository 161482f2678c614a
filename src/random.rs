//! Secure random index generation.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// A source of uniformly distributed, unpredictable indices.
pub trait RandomSource {
    /// Return a value drawn uniformly from `[0, bound)`.
    ///
    /// Fails if `bound` is zero or if the underlying entropy source cannot be read.
    fn random_index(&mut self, bound: usize) -> Result<usize, RngError>;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn random_index(&mut self, bound: usize) -> Result<usize, RngError> {
        (**self).random_index(bound)
    }
}

/// A [`RandomSource`] backed by a cryptographically secure RNG.
///
/// Indices are produced by rejection sampling over 64-bit draws, so no index is favoured over
/// another regardless of `bound`.
pub struct SecureRandom<R> {
    rng: R,
}

impl SecureRandom<OsRng> {
    /// Draw from the operating system's entropy source.
    pub fn os() -> SecureRandom<OsRng> {
        SecureRandom { rng: OsRng }
    }
}

impl<R> SecureRandom<R>
where
    R: RngCore + CryptoRng,
{
    pub fn new(rng: R) -> SecureRandom<R> {
        SecureRandom { rng }
    }

    fn next_u64(&mut self) -> Result<u64, RngError> {
        let mut buf = [0u8; 8];
        self.rng.try_fill_bytes(&mut buf).map_err(|err| {
            log::error!("entropy source failed: {err}");
            RngErrorRepr::Entropy(err)
        })?;
        Ok(u64::from_le_bytes(buf))
    }
}

impl<R> RandomSource for SecureRandom<R>
where
    R: RngCore + CryptoRng,
{
    fn random_index(&mut self, bound: usize) -> Result<usize, RngError> {
        if bound == 0 {
            return Err(RngErrorRepr::ZeroBound.into());
        }
        let bound = bound as u64;
        // 2^64 mod bound: the size of the partial window at the top of the u64 range.
        let excess = (u64::MAX % bound + 1) % bound;
        let limit = u64::MAX - excess;
        loop {
            let value = self.next_u64()?;
            if value <= limit {
                return Ok((value % bound) as usize);
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct RngError(RngErrorRepr);

impl From<RngErrorRepr> for RngError {
    fn from(err: RngErrorRepr) -> RngError {
        RngError(err)
    }
}

impl From<rand::Error> for RngError {
    fn from(err: rand::Error) -> RngError {
        RngError(RngErrorRepr::Entropy(err))
    }
}

#[derive(Debug, thiserror::Error)]
enum RngErrorRepr {
    #[error("the upper bound of a random index must be positive")]
    ZeroBound,
    #[error("failed to read from the entropy source: {0}")]
    Entropy(#[source] rand::Error),
}
