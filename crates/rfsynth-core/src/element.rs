//! Two-port circuit element primitives
//!
//! A chain of these elements, ordered from port 1 to port 2, is the input
//! to the cascade reducer. All values are SI base units: ohms, henries,
//! farads, meters. Unit scaling (pF, mm, GHz, ...) is the concern of the
//! layers that construct elements, never of this crate.

/// Placement of a lumped element relative to the signal path.
///
/// The legacy schematic format encoded this in the component's rotation
/// angle; here it is an explicit field set directly by the synthesis
/// routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// In the signal path
    Series,
    /// From the signal path to ground
    Shunt,
}

impl Orientation {
    /// Classify a schematic rotation angle in degrees.
    ///
    /// Preserves the legacy rule verbatim: a non-zero exact multiple of
    /// 90 degrees means series, anything else (typically 0) means shunt.
    pub fn from_rotation(deg: f64) -> Self {
        if deg != 0.0 && deg % 90.0 == 0.0 {
            Orientation::Series
        } else {
            Orientation::Shunt
        }
    }
}

/// One element of a cascaded two-port chain.
///
/// `Ground` and `Terminator` are layout/port markers: grounds are skipped
/// by the reducer, terminators must be stripped before reduction (their
/// impedances travel separately as the source/load references).
/// `Coupler` is a 4-port primitive that cannot participate in a simple
/// cascade; the reducer rejects it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    Resistor {
        /// Resistance in ohms
        r: f64,
        orientation: Orientation,
    },
    Inductor {
        /// Inductance in henries
        l: f64,
        orientation: Orientation,
    },
    Capacitor {
        /// Capacitance in farads
        c: f64,
        orientation: Orientation,
    },
    /// Ideal transmission line section
    Line {
        /// Characteristic impedance in ohms
        z0: f64,
        /// Physical length in meters
        len: f64,
        /// Attenuation constant in Np/m (0.0 = lossless)
        alpha: f64,
    },
    /// Shunt open-circuited stub
    OpenStub {
        z0: f64,
        len: f64,
    },
    /// Shunt short-circuited stub
    ShortStub {
        z0: f64,
        len: f64,
    },
    /// Reference/ground marker, no electrical contribution in a cascade
    Ground,
    /// Port marker carrying its termination impedance in ohms (real part
    /// only here; complex terminations are passed to the analysis request)
    Terminator {
        z: f64,
    },
    /// 4-port directional coupler, not cascadable
    Coupler {
        coupling_db: f64,
    },
}

impl Element {
    /// Series resistor of `r` ohms
    pub fn series_r(r: f64) -> Self {
        Element::Resistor {
            r,
            orientation: Orientation::Series,
        }
    }

    /// Shunt resistor of `r` ohms
    pub fn shunt_r(r: f64) -> Self {
        Element::Resistor {
            r,
            orientation: Orientation::Shunt,
        }
    }

    /// Series inductor of `l` henries
    pub fn series_l(l: f64) -> Self {
        Element::Inductor {
            l,
            orientation: Orientation::Series,
        }
    }

    /// Shunt inductor of `l` henries
    pub fn shunt_l(l: f64) -> Self {
        Element::Inductor {
            l,
            orientation: Orientation::Shunt,
        }
    }

    /// Series capacitor of `c` farads
    pub fn series_c(c: f64) -> Self {
        Element::Capacitor {
            c,
            orientation: Orientation::Series,
        }
    }

    /// Shunt capacitor of `c` farads
    pub fn shunt_c(c: f64) -> Self {
        Element::Capacitor {
            c,
            orientation: Orientation::Shunt,
        }
    }

    /// Lossless ideal transmission line
    pub fn line(z0: f64, len: f64) -> Self {
        Element::Line {
            z0,
            len,
            alpha: 0.0,
        }
    }

    /// Transmission line with a propagation-constant attenuation term
    pub fn lossy_line(z0: f64, len: f64, alpha: f64) -> Self {
        Element::Line { z0, len, alpha }
    }

    /// Shunt open-circuited stub
    pub fn open_stub(z0: f64, len: f64) -> Self {
        Element::OpenStub { z0, len }
    }

    /// Shunt short-circuited stub
    pub fn short_stub(z0: f64, len: f64) -> Self {
        Element::ShortStub { z0, len }
    }

    /// Short display name of the element kind, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Element::Resistor { .. } => "Resistor",
            Element::Inductor { .. } => "Inductor",
            Element::Capacitor { .. } => "Capacitor",
            Element::Line { .. } => "Line",
            Element::OpenStub { .. } => "OpenStub",
            Element::ShortStub { .. } => "ShortStub",
            Element::Ground => "Ground",
            Element::Terminator { .. } => "Terminator",
            Element::Coupler { .. } => "Coupler",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_from_rotation() {
        // Legacy rule: non-zero multiple of 90 deg is series
        assert_eq!(Orientation::from_rotation(90.0), Orientation::Series);
        assert_eq!(Orientation::from_rotation(180.0), Orientation::Series);
        assert_eq!(Orientation::from_rotation(270.0), Orientation::Series);
        assert_eq!(Orientation::from_rotation(-90.0), Orientation::Series);

        assert_eq!(Orientation::from_rotation(0.0), Orientation::Shunt);
        assert_eq!(Orientation::from_rotation(45.0), Orientation::Shunt);
        assert_eq!(Orientation::from_rotation(91.0), Orientation::Shunt);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(
            Element::series_l(1e-9),
            Element::Inductor {
                l: 1e-9,
                orientation: Orientation::Series
            }
        );
        assert_eq!(Element::line(50.0, 0.01).kind_name(), "Line");
        match Element::line(50.0, 0.01) {
            Element::Line { alpha, .. } => assert_eq!(alpha, 0.0),
            _ => unreachable!(),
        }
    }
}
