//! Chain-to-ABCD reduction
//!
//! Maps each chain element to its canonical ABCD contribution and
//! multiplies left-to-right. Grounds are layout artifacts and contribute
//! nothing; port markers and 4-port elements abort the reduction.

use num_complex::Complex64;
use std::f64::consts::PI;

use super::AnalysisError;
use crate::constants::C0;
use crate::element::{Element, Orientation};
use crate::math::Abcd;

/// Reduce an ordered element chain to its cascade ABCD matrix at one
/// frequency.
///
/// The chain represents signal flow from port 1 to port 2, terminators
/// already stripped. Pure function of `(chain, f_hz)`.
///
/// # Errors
/// [`AnalysisError::UnsupportedElement`] for terminators/couplers in the
/// chain, [`AnalysisError::InvalidElementValue`] for non-positive or
/// non-finite element values.
pub fn cascade(chain: &[Element], f_hz: f64) -> Result<Abcd, AnalysisError> {
    let w = 2.0 * PI * f_hz;
    let mut m = Abcd::identity();

    for (index, elem) in chain.iter().enumerate() {
        let m_elem = match *elem {
            Element::Ground => continue,
            Element::Resistor { r, orientation } => {
                check_value(index, elem, r)?;
                lumped_series_shunt(orientation, Complex64::new(r, 0.0))
            }
            Element::Inductor { l, orientation } => {
                check_value(index, elem, l)?;
                // Z = jwL
                lumped_series_shunt(orientation, Complex64::new(0.0, w * l))
            }
            Element::Capacitor { c, orientation } => {
                check_value(index, elem, c)?;
                // Z = -j/(wC)
                lumped_series_shunt(orientation, Complex64::new(0.0, -1.0 / (w * c)))
            }
            Element::Line { z0, len, alpha } => {
                check_value(index, elem, z0)?;
                check_length(index, elem, len)?;
                check_length(index, elem, alpha)?;
                let gl = gamma(w, alpha) * len;
                let z0 = Complex64::new(z0, 0.0);
                Abcd::new(gl.cosh(), z0 * gl.sinh(), gl.sinh() / z0, gl.cosh())
            }
            Element::OpenStub { z0, len } => {
                check_value(index, elem, z0)?;
                check_length(index, elem, len)?;
                let gl = gamma(w, 0.0) * len;
                shunt_admittance(gl.tanh() / z0)
            }
            Element::ShortStub { z0, len } => {
                check_value(index, elem, z0)?;
                check_length(index, elem, len)?;
                let gl = gamma(w, 0.0) * len;
                shunt_admittance(1.0 / (z0 * gl.tanh()))
            }
            Element::Terminator { .. } | Element::Coupler { .. } => {
                return Err(AnalysisError::UnsupportedElement {
                    index,
                    kind: elem.kind_name(),
                });
            }
        };

        m = m * m_elem;
    }

    Ok(m)
}

/// Propagation constant `gamma = alpha + j*beta` with `beta = w/c0`
#[inline]
fn gamma(w: f64, alpha: f64) -> Complex64 {
    Complex64::new(alpha, w / C0)
}

/// ABCD of a lumped impedance placed series or shunt
fn lumped_series_shunt(orientation: Orientation, z: Complex64) -> Abcd {
    let one = Complex64::new(1.0, 0.0);
    let zero = Complex64::new(0.0, 0.0);
    match orientation {
        // [[1, Z], [0, 1]]
        Orientation::Series => Abcd::new(one, z, zero, one),
        // [[1, 0], [1/Z, 1]]
        Orientation::Shunt => Abcd::new(one, zero, one / z, one),
    }
}

/// ABCD of a shunt admittance: [[1, 0], [Y, 1]]
fn shunt_admittance(y: Complex64) -> Abcd {
    let one = Complex64::new(1.0, 0.0);
    let zero = Complex64::new(0.0, 0.0);
    Abcd::new(one, zero, y, one)
}

fn check_value(index: usize, elem: &Element, value: f64) -> Result<(), AnalysisError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AnalysisError::InvalidElementValue {
            index,
            kind: elem.kind_name(),
            value,
        });
    }
    Ok(())
}

/// Lengths and attenuation constants may be zero, but not negative
fn check_length(index: usize, elem: &Element, value: f64) -> Result<(), AnalysisError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AnalysisError::InvalidElementValue {
            index,
            kind: elem.kind_name(),
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_chain_is_identity() {
        for f in [1e6, 1e9, 30e9] {
            let m = cascade(&[], f).unwrap();
            assert_eq!(m, Abcd::identity());
        }
    }

    #[test]
    fn test_ground_markers_are_skipped() {
        let chain = [Element::Ground, Element::series_r(10.0), Element::Ground];
        let m = cascade(&chain, 1e9).unwrap();

        assert_relative_eq!(m.b.re, 10.0, epsilon = 1e-12);
        assert_relative_eq!(m.b.im, 0.0, epsilon = 1e-12);
        assert_relative_eq!(m.a.re, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_series_inductor() {
        let l = 1e-9;
        let f = 1e9;
        let m = cascade(&[Element::series_l(l)], f).unwrap();

        assert_relative_eq!(m.b.im, 2.0 * PI * f * l, epsilon = 1e-12);
        assert_relative_eq!(m.b.re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(m.c.norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_shunt_capacitor() {
        let c = 1e-12;
        let f = 2e9;
        let m = cascade(&[Element::shunt_c(c)], f).unwrap();

        assert_relative_eq!(m.c.im, 2.0 * PI * f * c, epsilon = 1e-20);
        assert_relative_eq!(m.b.norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lossless_det_is_one() {
        // Reciprocal lossless chain: det(ABCD) = 1
        let chain = [
            Element::series_l(2.2e-9),
            Element::shunt_c(1.5e-12),
            Element::line(75.0, 0.012),
            Element::open_stub(60.0, 0.008),
            Element::short_stub(40.0, 0.005),
            Element::series_c(0.8e-12),
            Element::shunt_l(3.9e-9),
        ];
        for f in [0.5e9, 1e9, 2.4e9, 10e9] {
            let m = cascade(&chain, f).unwrap();
            let det = m.det();
            assert_relative_eq!(det.re, 1.0, epsilon = 1e-9);
            assert_relative_eq!(det.im, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_quarter_wave_line_abcd() {
        // At its design frequency a quarter-wave line has A = D = 0,
        // B = jZ0, C = j/Z0
        let f = 1e9;
        let len = C0 / (4.0 * f);
        let m = cascade(&[Element::line(50.0, len)], f).unwrap();

        assert_relative_eq!(m.a.norm(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(m.d.norm(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(m.b.im, 50.0, epsilon = 1e-6);
        assert_relative_eq!(m.c.im, 1.0 / 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_terminator_in_chain_is_rejected() {
        let chain = [Element::series_r(50.0), Element::Terminator { z: 50.0 }];
        let err = cascade(&chain, 1e9).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::UnsupportedElement {
                index: 1,
                kind: "Terminator"
            }
        );
    }

    #[test]
    fn test_coupler_in_chain_is_rejected() {
        let chain = [Element::Coupler { coupling_db: 10.0 }];
        assert!(matches!(
            cascade(&chain, 1e9),
            Err(AnalysisError::UnsupportedElement { index: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        let err = cascade(&[Element::shunt_c(-1e-12)], 1e9).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidElementValue { index: 0, .. }
        ));

        assert!(cascade(&[Element::line(50.0, -0.01)], 1e9).is_err());
        assert!(cascade(&[Element::series_r(f64::NAN)], 1e9).is_err());
    }

    #[test]
    fn test_lossy_line_det_near_one() {
        // Small attenuation keeps the chain nearly reciprocal-lossless
        let m = cascade(&[Element::lossy_line(50.0, 0.01, 0.05)], 5e9).unwrap();
        let det = m.det();
        assert_relative_eq!(det.re, 1.0, epsilon = 1e-6);
    }
}
