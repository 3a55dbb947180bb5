//! Shamir Secret Sharing over GF(2^8)
//!
//! This crate splits a secret byte sequence into `n` shares such that any
//! `k` of them reconstruct it exactly, and provides an optional integrity
//! tag that turns reconstruction from too few (or corrupted) shares into a
//! detectable error.
//!
//! # Module overview
//!
//! - `field`
//!   Finite field arithmetic. Defines the [`GaloisField`] capability
//!   consumed by splitting and combining, the table-driven [`Gf256`]
//!   implementation, and the AES and Reed–Solomon presets.
//!
//! - `rng`
//!   Cryptographically secure randomness for polynomial coefficients. Any
//!   `rand::CryptoRng` source can be injected; [`Csprng`] is the default.
//!
//! - `sss`
//!   The Shamir scheme itself: [`split`], [`combine`], their string
//!   variants, tagging, and the single-byte index share encoding.
//!
//! # Example
//!
//! ```
//! use shamir::{FIELD_REED_SOLOMON, Options, combine, split};
//!
//! let options = Options::new().with_field(&FIELD_REED_SOLOMON).with_tag(true);
//!
//! let mut shares = split(b"correct horse battery staple", 3, 5, &options).unwrap();
//! shares.retain(|index, _| [2, 4, 5].contains(index));
//!
//! let secret = combine(&shares, &options).unwrap();
//! assert_eq!(secret, b"correct horse battery staple");
//! ```
//!
//! # Design goals
//!
//! - Field arithmetic behind a trait, so parameterizations are drop-in
//! - Injected randomness, so share generation is reproducible under test
//! - Coefficient material wiped after use
//! - Explicit, synchronous errors; no partial results
//!
//! Shares are plain bytes. Storage, transport and access policy are left to
//! the caller.

mod error;

pub mod field;
pub mod rng;
pub mod sss;

pub use error::{Error, Result};
pub use field::{FIELD_AES, FIELD_REED_SOLOMON, FieldError, GaloisField, Gf256, Point};
pub use rng::Csprng;
pub use sss::{
    Options, ShareSet, TAG_LENGTH, combine, combine_string, make_polynomial, share, split,
    split_str, split_with_rng,
};
