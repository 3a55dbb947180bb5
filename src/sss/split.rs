use std::iter;

use rand::{CryptoRng, RngCore};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;
use zeroize::Zeroizing;

use super::options::Options;
use super::polynomial::fill_polynomial;
use super::share::ShareSet;
use crate::error::{Error, Result};
use crate::rng::Csprng;

/// Largest share index, and therefore largest share count, representable
/// as a single-byte x-coordinate.
const MAX_SHARES: usize = u8::MAX as usize;

/// Splits a secret into `n` shares, any `k` of which recover it.
///
/// Shares are keyed `1..=n`. The key is the x-coordinate the share was
/// evaluated at, so a share must always be combined under the key it was
/// issued with. Key `0` is never used: that is where the secret lies.
///
/// Coefficients are drawn from a fresh OS-seeded [`Csprng`]. Use
/// [`split_with_rng`] to supply another source.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if the secret is empty, `k < 2`, `n < k` or
///   `n > 255`
/// - [`Error::Random`] if the random source fails
///
/// # Example
///
/// ```
/// use shamir::{Options, combine, split};
///
/// let mut shares = split(b"Hello, World!", 3, 5, &Options::new()).unwrap();
/// shares.remove(&2);
/// shares.remove(&4);
///
/// let secret = combine(&shares, &Options::new()).unwrap();
/// assert_eq!(secret, b"Hello, World!");
/// ```
pub fn split(secret: &[u8], k: usize, n: usize, options: &Options<'_>) -> Result<ShareSet> {
    let mut rng = Csprng::new()?;
    split_with_rng(secret, k, n, options, &mut rng)
}

/// Same as [`split`], drawing polynomial coefficients from `rng`.
///
/// Exactly `(k - 1) * (secret.len() + tag_len)` random bytes are consumed,
/// tag positions first, then secret positions in order.
pub fn split_with_rng<R>(
    secret: &[u8],
    k: usize,
    n: usize,
    options: &Options<'_>,
    rng: &mut R,
) -> Result<ShareSet>
where
    R: RngCore + CryptoRng + ?Sized,
{
    validate(secret, k, n)?;

    let degree = k - 1;
    let tag_len = options.tag_len();
    let share_len = tag_len + secret.len();

    debug!(k, n, secret_len = secret.len(), tag = options.tag, "splitting secret");

    let mut shares: Vec<(u8, Vec<u8>)> = (1..=n as u8)
        .map(|x| (x, vec![0u8; share_len]))
        .collect();

    let field = options.field;
    let mut poly = Zeroizing::new(vec![0u8; degree + 1]);

    // One polynomial per share byte: tag bytes share the constant 0.
    let constants = iter::repeat_n(0u8, tag_len).chain(secret.iter().copied());
    for (index, constant) in constants.enumerate() {
        fill_polynomial(&mut poly, constant, rng)?;

        let evaluate = |(x, share): &mut (u8, Vec<u8>)| {
            share[index] = field.evaluate(&poly, *x);
        };

        #[cfg(feature = "parallel")]
        shares.par_iter_mut().for_each(evaluate);
        #[cfg(not(feature = "parallel"))]
        shares.iter_mut().for_each(evaluate);
    }

    Ok(shares.into_iter().collect())
}

/// UTF-8 encodes `secret` and splits it. See [`split`].
pub fn split_str(secret: &str, k: usize, n: usize, options: &Options<'_>) -> Result<ShareSet> {
    split(secret.as_bytes(), k, n, options)
}

fn validate(secret: &[u8], k: usize, n: usize) -> Result<()> {
    if secret.is_empty() {
        return Err(Error::InvalidInput("secret is empty"));
    }

    if k < 2 {
        return Err(Error::InvalidInput("k must be at least 2"));
    }

    if n < k {
        return Err(Error::InvalidInput("n must not be less than k"));
    }

    if n > MAX_SHARES {
        return Err(Error::InvalidInput("n must not exceed 255"));
    }

    Ok(())
}
