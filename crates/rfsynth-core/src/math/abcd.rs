//! Complex 2x2 chain (ABCD) matrix
//!
//! Cascading two-port networks multiplies their chain matrices, so the
//! whole analysis engine only ever needs a fixed-size complex 2x2 type.

use num_complex::Complex64;
use std::ops::{Index, IndexMut, Mul};

/// A 2x2 matrix of complex numbers `[[A, B], [C, D]]` holding the chain
/// parameters of a two-port network at one frequency.
///
/// For a reciprocal network `A*D - B*C = 1` (exactly when lossless).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Abcd {
    pub a: Complex64,
    pub b: Complex64,
    pub c: Complex64,
    pub d: Complex64,
}

impl Abcd {
    /// Create from the four chain parameters
    pub fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { a, b, c, d }
    }

    /// The identity matrix (a zero-length, transparent two-port)
    pub fn identity() -> Self {
        Self {
            a: Complex64::new(1.0, 0.0),
            b: Complex64::new(0.0, 0.0),
            c: Complex64::new(0.0, 0.0),
            d: Complex64::new(1.0, 0.0),
        }
    }

    /// Determinant `A*D - B*C`
    pub fn det(&self) -> Complex64 {
        self.a * self.d - self.b * self.c
    }

    /// Multiply every entry by a complex scalar
    pub fn scale(&self, k: Complex64) -> Self {
        Self {
            a: k * self.a,
            b: k * self.b,
            c: k * self.c,
            d: k * self.d,
        }
    }

    /// True when all four entries are finite
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite() && self.d.is_finite()
    }
}

impl Index<(usize, usize)> for Abcd {
    type Output = Complex64;

    fn index(&self, idx: (usize, usize)) -> &Complex64 {
        match idx {
            (0, 0) => &self.a,
            (0, 1) => &self.b,
            (1, 0) => &self.c,
            (1, 1) => &self.d,
            _ => panic!("Abcd index out of bounds: {:?}", idx),
        }
    }
}

impl IndexMut<(usize, usize)> for Abcd {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Complex64 {
        match idx {
            (0, 0) => &mut self.a,
            (0, 1) => &mut self.b,
            (1, 0) => &mut self.c,
            (1, 1) => &mut self.d,
            _ => panic!("Abcd index out of bounds: {:?}", idx),
        }
    }
}

impl Mul for Abcd {
    type Output = Abcd;

    /// Standard complex matrix product; `lhs * rhs` cascades `lhs`
    /// (port-1 side) with `rhs` (port-2 side).
    fn mul(self, rhs: Abcd) -> Abcd {
        Abcd {
            a: self.a * rhs.a + self.b * rhs.c,
            b: self.a * rhs.b + self.b * rhs.d,
            c: self.c * rhs.a + self.d * rhs.c,
            d: self.c * rhs.b + self.d * rhs.d,
        }
    }
}

impl Default for Abcd {
    fn default() -> Self {
        Self::identity()
    }
}
