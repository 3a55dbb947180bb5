//! ChaCha20-based CSPRNG
//!
//! Thin wrapper around `rand_chacha::ChaCha20Rng` that:
//! - relies on the operating system for initial entropy
//! - can be seeded explicitly for deterministic share generation
//! - wipes caller-provided seed material once consumed

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use zeroize::Zeroize;

/// Cryptographically secure pseudorandom number generator.
///
/// The generator is initialized from OS-provided entropy and then expands
/// randomness with the ChaCha20 stream cipher.
pub struct Csprng {
    inner: ChaCha20Rng,
}

impl Csprng {
    /// Creates a new CSPRNG seeded from the operating system.
    ///
    /// This is equivalent to calling [`Csprng::from_os`].
    pub fn new() -> Result<Self, rand::Error> {
        Self::from_os()
    }

    /// Creates a new CSPRNG using entropy provided by the operating system.
    ///
    /// # Errors
    ///
    /// Fails if the operating system entropy source is unavailable.
    pub fn from_os() -> Result<Self, rand::Error> {
        let inner = ChaCha20Rng::from_rng(OsRng)?;
        Ok(Self { inner })
    }

    /// Creates a new CSPRNG from a user-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable for production
    /// use. After being consumed, the seed buffer is wiped.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let inner = ChaCha20Rng::from_seed(seed);
        seed.zeroize();

        Self { inner }
    }
}

impl RngCore for Csprng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

impl CryptoRng for Csprng {}
