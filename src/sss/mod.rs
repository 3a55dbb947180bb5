//! Shamir Secret Sharing (SSS) over GF(2^8).
//!
//! A secret is divided into `n` *shares* such that:
//!
//! - Any subset of at least `k` shares reconstructs the secret.
//! - Any subset of fewer than `k` shares reveals nothing about it.
//!
//! The secret is treated as a sequence of independent bytes, each protected
//! by its own random polynomial of degree `k - 1`. Share `x` holds the
//! evaluations of every polynomial at `x`, so shares are exactly as long as
//! the secret (plus the tag, see below).
//!
//! ## Provided operations
//!
//! - [`split`] / [`split_with_rng`] / [`split_str`]
//!   Split a secret into shares keyed `1..=n`.
//!
//! - [`combine`] / [`combine_string`]
//!   Reconstruct the secret by Lagrange interpolation at zero.
//!
//! - [`make_polynomial`]
//!   Build one random polynomial with a fixed constant term.
//!
//! - [`share::encode`] / [`share::decode`]
//!   Prefix a share with its index for storage outside a [`ShareSet`].
//!
//! ## Tagging
//!
//! Interpolation cannot tell when it was given too few shares: it simply
//! reconstructs a different polynomial. With [`Options::tag`] set, an
//! all-zero prefix of [`TAG_LENGTH`] bytes is shared alongside the secret.
//! Since the constant term of every tag polynomial is zero, genuine shares
//! interpolate the tag back to zero. Anything else fails with
//! [`Error::TagVerificationFailed`](crate::Error::TagVerificationFailed)
//! before any secret byte is recovered.
//!
//! The tag is a best-effort sufficiency and corruption check, not an
//! authenticator.
//!
//! ## Scope
//!
//! This module provides confidentiality through threshold secrecy only. It
//! does not store, transport or authenticate shares, and makes no attempt
//! at side-channel resistance.

mod combine;
mod options;
mod polynomial;
pub mod share;
mod split;

pub use combine::{combine, combine_string};
pub use options::{Options, TAG_LENGTH};
pub use polynomial::make_polynomial;
pub use share::ShareSet;
pub use split::{split, split_str, split_with_rng};
