//! Component-value synthesis mathematics
//!
//! Closed-form derivations that feed the element chains consumed by the
//! analysis engine: Chebyshev impedance tapers for multi-stage
//! combiners/transformers, lowpass prototype coefficients, and
//! Matthaei-Young-Jones direct-coupled resonator filters.

pub mod chebyshev;
pub mod coupling;
pub mod prototype;

use thiserror::Error;

/// Synthesis math errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SynthesisError {
    #[error("stage count {0} outside the supported range 1..=7")]
    UnsupportedOrder(usize),

    #[error("prototype coefficient vector has invalid length {0}")]
    InvalidPrototype(usize),

    #[error("parameter {name} = {value} is out of range")]
    InvalidParameter { name: &'static str, value: f64 },

    /// The requested passband ripple meets or exceeds the total
    /// reflection budget, so no multi-stage taper exists
    #[error("ripple parameter {gamma} too large for total reflection {total}")]
    RippleTooLarge { gamma: f64, total: f64 },

    /// An end inverter value reached its termination bound, so no
    /// physical coupling element realizes it
    #[error("end coupling inverter {value} exceeds the termination bound {bound}")]
    CouplingTooStrong { value: f64, bound: f64 },
}

/// Fractional bandwidth `(f2 - f1) / sqrt(f1 * f2)` of a passband
pub fn fractional_bandwidth(f1_hz: f64, f2_hz: f64) -> f64 {
    (f2_hz - f1_hz) / (f1_hz * f2_hz).sqrt()
}
