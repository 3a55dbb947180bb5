//! Random number generation module
//!
//! This module provides the cryptographically secure randomness used to
//! draw polynomial coefficients.
//!
//! Splitting accepts any `rand::RngCore + rand::CryptoRng` source, so callers
//! can inject their own generator. [`Csprng`] is the default: a ChaCha20
//! stream seeded from the operating system, or from an explicit seed when
//! reproducible shares are needed in tests.

mod csprng;

/// Cryptographically secure pseudorandom number generator.
pub use csprng::Csprng;
