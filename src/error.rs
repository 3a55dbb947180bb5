//! Error types shared by every Shamir operation.

use crate::field::FieldError;

/// Errors that may occur while splitting or combining secrets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed parameters or shares. The caller must fix its inputs.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The reconstructed tag bytes were not all zero.
    ///
    /// Too few shares, shares split over a different field, or corrupted
    /// share data.
    #[error("tag verification failed")]
    TagVerificationFailed,

    /// The field engine could not interpolate the supplied points.
    #[error("secret reconstruction failed: {0}")]
    ReconstructionFailed(#[from] FieldError),

    /// The random source could not provide coefficients.
    #[error("generating polynomial: {0}")]
    Random(#[from] rand::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
