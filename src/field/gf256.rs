//! Table-driven GF(2^8) arithmetic.
//!
//! A [`Gf256`] instance is defined by an irreducible polynomial of degree 8
//! and a generator of the multiplicative group. Exponent and logarithm
//! tables are derived from that pair once, after which multiplication,
//! division and inversion are table lookups.
//!
//! Table construction multiplies by the generator using the classic
//! shift-and-reduce method, so the same code serves every parameterization.

use std::fmt;

use super::{FieldError, GaloisField, Point};

/// Well-known reduction polynomials.
pub mod polynomials {
    /// x⁸ + x⁴ + x³ + x + 1, the AES (Rijndael) polynomial.
    pub const AES: u16 = 0x11B;

    /// x⁸ + x⁴ + x³ + x² + 1, the polynomial common in Reed–Solomon codecs.
    pub const REED_SOLOMON: u16 = 0x11D;
}

/// Well-known generators.
pub mod generators {
    /// Smallest generator of the AES field.
    pub const AES: u8 = 0x03;

    /// `x` itself. Generates the Reed–Solomon field.
    pub const FAST: u8 = 0x02;
}

/// GF(2^8) with the AES polynomial (`0x11B`) and generator (`0x03`).
///
/// This is the default field for splitting and combining.
pub static FIELD_AES: Gf256 = Gf256::preset(polynomials::AES, generators::AES);

/// GF(2^8) with the Reed–Solomon polynomial (`0x11D`) and generator (`0x02`).
pub static FIELD_REED_SOLOMON: Gf256 =
    Gf256::preset(polynomials::REED_SOLOMON, generators::FAST);

/// A concrete GF(2^8) instance.
#[derive(Clone)]
pub struct Gf256 {
    polynomial: u16,
    generator: u8,
    /// `exp[i] = generator^i`, doubled so that `log a + log b` never wraps.
    exp: [u8; 512],
    /// `log[generator^i] = i`. `log[0]` is unused.
    log: [u8; 256],
}

impl Gf256 {
    /// Builds a field from a reduction polynomial and a generator.
    ///
    /// # Errors
    ///
    /// - [`FieldError::InvalidPolynomial`] if `polynomial` is not of degree 8
    /// - [`FieldError::InvalidGenerator`] if successive powers of `generator`
    ///   do not visit all 255 non-zero elements. This also rejects reducible
    ///   polynomials, whose quotient ring has no element of order 255.
    pub fn new(polynomial: u16, generator: u8) -> Result<Self, FieldError> {
        if !(0x100..=0x1FF).contains(&polynomial) {
            return Err(FieldError::InvalidPolynomial(polynomial));
        }

        let (field, spans) = Self::build(polynomial, generator);
        if !spans {
            return Err(FieldError::InvalidGenerator(generator));
        }

        Ok(field)
    }

    /// Compile-time constructor for known-good parameter pairs.
    const fn preset(polynomial: u16, generator: u8) -> Self {
        let (field, spans) = Self::build(polynomial, generator);
        assert!(spans, "preset generator does not span the field");
        field
    }

    const fn build(polynomial: u16, generator: u8) -> (Self, bool) {
        let reduction = (polynomial & 0xFF) as u8;

        let mut exp = [0u8; 512];
        let mut log = [0u8; 256];
        let mut seen = [false; 256];
        let mut spans = true;

        let mut x = 1u8;
        let mut i = 0;
        while i < 255 {
            if x == 0 || seen[x as usize] {
                spans = false;
            }
            seen[x as usize] = true;

            exp[i] = x;
            log[x as usize] = i as u8;
            x = shift_multiply(x, generator, reduction);
            i += 1;
        }

        // generator^255 must close the cycle
        if x != 1 {
            spans = false;
        }

        while i < 512 {
            exp[i] = exp[i - 255];
            i += 1;
        }

        (
            Self {
                polynomial,
                generator,
                exp,
                log,
            },
            spans,
        )
    }

    /// The reduction polynomial, including the x⁸ term.
    #[inline]
    pub fn polynomial(&self) -> u16 {
        self.polynomial
    }

    /// The generator the exponent and logarithm tables are built from.
    #[inline]
    pub fn generator(&self) -> u8 {
        self.generator
    }

    /// Returns `generator^power`.
    #[inline]
    pub fn exp(&self, power: u8) -> u8 {
        self.exp[power as usize]
    }

    /// Discrete logarithm to the base of the generator. `None` for zero.
    #[inline]
    pub fn log(&self, a: u8) -> Option<u8> {
        (a != 0).then(|| self.log[a as usize])
    }

    /// Multiplicative inverse. `None` for zero.
    #[inline]
    pub fn inverse(&self, a: u8) -> Option<u8> {
        self.log(a).map(|l| self.exp[255 - l as usize])
    }

    /// Field division. `None` when dividing by zero.
    #[inline]
    pub fn divide(&self, a: u8, b: u8) -> Option<u8> {
        let lb = self.log(b)?;
        match self.log(a) {
            None => Some(0),
            Some(la) => Some(self.exp[la as usize + 255 - lb as usize]),
        }
    }
}

impl GaloisField for Gf256 {
    #[inline]
    fn multiply(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }

    /// Horner's method.
    fn evaluate(&self, coefficients: &[u8], x: u8) -> u8 {
        coefficients
            .iter()
            .rev()
            .fold(0, |acc, &c| self.add(self.multiply(acc, x), c))
    }

    fn interpolate(&self, points: &[Point], at: u8) -> Result<u8, FieldError> {
        if points.is_empty() {
            return Err(FieldError::NoPoints);
        }

        let mut acc = 0u8;

        for (i, pi) in points.iter().enumerate() {
            let mut num = 1u8;
            let mut den = 1u8;

            for (j, pj) in points.iter().enumerate() {
                if i == j {
                    continue;
                }
                if pi.x == pj.x {
                    return Err(FieldError::DuplicatePoint(pi.x));
                }

                // subtraction is addition in characteristic 2
                num = self.multiply(num, self.add(at, pj.x));
                den = self.multiply(den, self.add(pi.x, pj.x));
            }

            let basis = self
                .divide(num, den)
                .ok_or(FieldError::DuplicatePoint(pi.x))?;
            acc = self.add(acc, self.multiply(basis, pi.y));
        }

        Ok(acc)
    }
}

impl PartialEq for Gf256 {
    fn eq(&self, other: &Self) -> bool {
        self.polynomial == other.polynomial && self.generator == other.generator
    }
}

impl Eq for Gf256 {}

impl fmt::Debug for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gf256")
            .field("polynomial", &format_args!("{:#x}", self.polynomial))
            .field("generator", &format_args!("{:#04x}", self.generator))
            .finish()
    }
}

/// Multiplication by repeated doubling, reducing by the low byte of the
/// polynomial whenever x⁸ is produced.
const fn shift_multiply(mut a: u8, mut b: u8, reduction: u8) -> u8 {
    let mut res = 0u8;

    while b != 0 {
        if b & 1 != 0 {
            res ^= a;
        }

        let carry = a & 0x80;
        a <<= 1;

        if carry != 0 {
            a ^= reduction;
        }

        b >>= 1;
    }

    res
}
