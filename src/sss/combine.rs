#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::options::Options;
use super::share::ShareSet;
use crate::error::{Error, Result};
use crate::field::{GaloisField, Point};

/// Reconstructs a secret from a set of shares.
///
/// Each byte is recovered by Lagrange interpolation at `x = 0` over one
/// point per share. With tagging enabled, the tag bytes are interpolated
/// first and must all come out zero.
///
/// Combining fewer than `k` shares is **not** detected without tagging:
/// interpolation still succeeds and returns bytes of the right length that
/// are not the secret. The same holds for shares split under a different
/// field. Enable tagging when failures must be detected.
///
/// An empty share set yields an empty secret.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if a share is keyed `0`, shares differ in
///   length, or a tagged share is shorter than the tag
/// - [`Error::TagVerificationFailed`] if a reconstructed tag byte is not zero
/// - [`Error::ReconstructionFailed`] if the field cannot interpolate the
///   points
pub fn combine(shares: &ShareSet, options: &Options<'_>) -> Result<Vec<u8>> {
    let Some(first) = shares.values().next() else {
        return Ok(Vec::new());
    };

    let tag_len = options.tag_len();
    let secret_len = first
        .len()
        .checked_sub(tag_len)
        .ok_or(Error::InvalidInput("share is shorter than the tag"))?;

    if secret_len == 0 {
        return Ok(Vec::new());
    }

    validate(shares, first.len())?;

    debug!(shares = shares.len(), secret_len, tag = options.tag, "combining shares");

    let field = options.field;

    for position in 0..tag_len {
        if interpolate_at(field, shares, position)? != 0 {
            warn!(position, shares = shares.len(), "tag mismatch");
            return Err(Error::TagVerificationFailed);
        }
    }

    let mut secret = vec![0u8; secret_len];
    let recover = |(i, byte): (usize, &mut u8)| -> Result<()> {
        *byte = interpolate_at(field, shares, tag_len + i)?;
        Ok(())
    };

    #[cfg(feature = "parallel")]
    secret.par_iter_mut().enumerate().try_for_each(recover)?;
    #[cfg(not(feature = "parallel"))]
    secret.iter_mut().enumerate().try_for_each(recover)?;

    Ok(secret)
}

/// Combines shares and decodes the result as UTF-8. See [`combine`].
///
/// Invalid UTF-8 sequences, typically the product of insufficient shares,
/// are replaced with `U+FFFD` rather than reported.
pub fn combine_string(shares: &ShareSet, options: &Options<'_>) -> Result<String> {
    let bytes = combine(shares, options)?;

    Ok(String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()))
}

fn validate(shares: &ShareSet, share_len: usize) -> Result<()> {
    if shares.contains_key(&0) {
        return Err(Error::InvalidInput("share index must not be zero"));
    }

    if shares.values().any(|share| share.len() != share_len) {
        return Err(Error::InvalidInput("shares must have equal length"));
    }

    Ok(())
}

/// Interpolates at zero the points found at `position` across all shares.
fn interpolate_at(field: &dyn GaloisField, shares: &ShareSet, position: usize) -> Result<u8> {
    let points: Zeroizing<Vec<Point>> = Zeroizing::new(
        shares
            .iter()
            .map(|(&x, share)| Point::new(x, share[position]))
            .collect(),
    );

    Ok(field.interpolate(&points, 0)?)
}
