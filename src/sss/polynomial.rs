use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Builds a random polynomial of the given degree with a fixed constant
/// term.
///
/// The returned coefficients are in increasing degree order:
/// `coefficients[0] == constant`, and `coefficients[1..=degree]` are drawn
/// uniformly from `rng`. The buffer is wiped when dropped.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if `degree` is zero
/// - [`Error::Random`] if the random source fails
pub fn make_polynomial<R>(constant: u8, degree: usize, rng: &mut R) -> Result<Zeroizing<Vec<u8>>>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if degree == 0 {
        return Err(Error::InvalidInput("degree must be at least 1"));
    }

    let mut coefficients = Zeroizing::new(vec![0u8; degree + 1]);
    fill_polynomial(&mut coefficients, constant, rng)?;

    Ok(coefficients)
}

/// Writes one polynomial into `out`, whose length is `degree + 1`.
pub(crate) fn fill_polynomial<R>(out: &mut [u8], constant: u8, rng: &mut R) -> Result<()>
where
    R: RngCore + CryptoRng + ?Sized,
{
    out[0] = constant;
    rng.try_fill_bytes(&mut out[1..])?;
    Ok(())
}
