//! Share collections and the single-byte index serialization convention.
//!
//! A share's index is its x-coordinate and must travel with it. When a
//! share is persisted outside a [`ShareSet`], the convention is to prepend
//! the index as one byte, so the share can be placed back under the right
//! key regardless of external naming:
//!
//! ```text
//! [index (1..=255)] [share bytes ...]
//! ```

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Shares keyed by index (x-coordinate).
///
/// Order is irrelevant to reconstruction; the ordered map only makes
/// iteration deterministic.
pub type ShareSet = BTreeMap<u8, Vec<u8>>;

/// Prepends `index` to `share`.
///
/// # Errors
///
/// [`Error::InvalidInput`] if `index` is zero.
pub fn encode(index: u8, share: &[u8]) -> Result<Vec<u8>> {
    if index == 0 {
        return Err(Error::InvalidInput("share index must be between 1 and 255"));
    }

    let mut out = Vec::with_capacity(share.len() + 1);
    out.push(index);
    out.extend_from_slice(share);
    Ok(out)
}

/// Splits an encoded share into its index and share bytes.
///
/// # Errors
///
/// [`Error::InvalidInput`] if `bytes` is empty or carries index zero.
pub fn decode(bytes: &[u8]) -> Result<(u8, &[u8])> {
    let (&index, share) = bytes
        .split_first()
        .ok_or(Error::InvalidInput("share is empty"))?;

    if index == 0 {
        return Err(Error::InvalidInput("share index must be between 1 and 255"));
    }

    Ok((index, share))
}
