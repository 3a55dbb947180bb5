//! Finite field arithmetic for Shamir Secret Sharing.
//!
//! The splitter and combiner never perform field arithmetic themselves.
//! They consume it through the [`GaloisField`] capability, which exposes
//! exactly what Shamir needs from GF(2^8):
//!
//! - addition and multiplication of field elements
//! - evaluation of a polynomial at a point
//! - Lagrange interpolation of a set of points at a given `x`
//!
//! [`Gf256`] is the concrete implementation, parameterized by an irreducible
//! polynomial and a generator. Two presets are provided:
//!
//! - [`FIELD_AES`]
//!   Polynomial `0x11B`, generator `0x03`. The most common field found in
//!   other Shamir libraries and the default used by this crate.
//!
//! - [`FIELD_REED_SOLOMON`]
//!   Polynomial `0x11D`, generator `0x02`, as used by Reed–Solomon codecs.
//!
//! Both presets are drop-in instances of the same trait. Shares produced
//! under one field are meaningless under the other.

mod gf256;

use zeroize::Zeroize;

pub use gf256::{FIELD_AES, FIELD_REED_SOLOMON, Gf256, generators, polynomials};

/// A sample `(x, y)` of a polynomial over GF(2^8).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// Errors reported by a field engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Two points share the same x-coordinate, so interpolation is undefined.
    #[error("duplicate x-coordinate {0} among points")]
    DuplicatePoint(u8),

    /// Interpolation was requested over an empty set of points.
    #[error("no points to interpolate")]
    NoPoints,

    /// The reduction polynomial is not of degree 8.
    #[error("polynomial {0:#x} is not of degree 8")]
    InvalidPolynomial(u16),

    /// The generator does not span the multiplicative group of the field.
    #[error("{0:#04x} does not generate the multiplicative group")]
    InvalidGenerator(u8),
}

/// Arithmetic over a GF(2^8) instance.
///
/// Implementations must be immutable once built: the same instance is
/// shared read-only by every split and combine call, possibly across
/// threads.
pub trait GaloisField: Send + Sync {
    /// Field addition. In characteristic 2 this is XOR, and subtraction is
    /// the same operation.
    #[inline]
    fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Field multiplication under the configured reduction polynomial.
    fn multiply(&self, a: u8, b: u8) -> u8;

    /// Evaluates a polynomial at `x`.
    ///
    /// Coefficients are given in increasing degree order:
    ///
    /// ```text
    /// f(x) = coefficients[0] + coefficients[1]·x + coefficients[2]·x² + ...
    /// ```
    fn evaluate(&self, coefficients: &[u8], x: u8) -> u8;

    /// Evaluates at `at` the unique polynomial of minimal degree passing
    /// through `points`.
    ///
    /// # Errors
    ///
    /// - [`FieldError::NoPoints`] if `points` is empty
    /// - [`FieldError::DuplicatePoint`] if two points share an x-coordinate
    fn interpolate(&self, points: &[Point], at: u8) -> Result<u8, FieldError>;
}
