//! ABCD to S-parameter conversion
//!
//! Generalized conversion under complex, possibly frequency-dependent
//! source and load references, plus the driving-point input reflection
//! specialization used when only the match matters.

use num_complex::Complex64;

use crate::math::Abcd;

/// The four S-parameters of a two-port at one frequency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPort {
    pub s11: Complex64,
    pub s12: Complex64,
    pub s21: Complex64,
    pub s22: Complex64,
}

impl TwoPort {
    /// True when all four parameters are finite.
    ///
    /// A degenerate (open/singular) network at some frequency yields
    /// inf/nan here rather than an error, so a sweep can still report the
    /// surviving points.
    pub fn is_finite(&self) -> bool {
        self.s11.is_finite() && self.s12.is_finite() && self.s21.is_finite() && self.s22.is_finite()
    }
}

/// Convert a cascade ABCD matrix to S-parameters referenced to complex
/// source impedance `zs` (port 1) and load impedance `zl` (port 2).
///
/// S21 carries the `A*D - B*C` determinant factor while S12 does not;
/// the two differ only for non-reciprocal chains, and the asymmetric S12
/// form is kept as-is for parity with the original engine (see DESIGN.md).
pub fn abcd_to_s(m: &Abcd, zs: Complex64, zl: Complex64) -> TwoPort {
    let (a, b, c, d) = (m.a, m.b, m.c, m.d);

    let den = a * zl + b + c * zs * zl + d * zs;
    let root = (zs.re * zl.re).sqrt();

    TwoPort {
        s11: (a * zl + b - c * zs.conj() * zl - d * zs.conj()) / den,
        s21: 2.0 * (a * d - b * c) * root / den,
        s12: 2.0 * root / den,
        s22: (-a * zl.conj() + b - c * zl.conj() * zs + d * zs) / den,
    }
}

/// Input reflection coefficient looking into the network from the source.
///
/// The two-port is first referenced to the source impedance alone; the
/// load mismatch is then folded in through the standard bilinear
/// embedding:
///
/// ```text
/// G_out = (Zl - Zs) / (Zs + Zl)
/// G_in  = S11 + S12*S21*G_out / (1 - S22*G_out)
/// ```
pub fn input_reflection(m: &Abcd, zs: Complex64, zl: Complex64) -> Complex64 {
    let s = abcd_to_s(m, zs, zs);
    let g_out = (zl - zs) / (zs + zl);
    s.s11 + s.s12 * s.s21 * g_out / (Complex64::new(1.0, 0.0) - s.s22 * g_out)
}
