//! Scalar conversion functions
//!
//! Magnitude/dB/angle conversions shared by the analysis engine, the
//! synthesis math and the tests.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Convert complex number to dB (20*log10(|z|))
pub fn complex_2_db(z: Complex64) -> f64 {
    20.0 * z.norm().log10()
}

/// Convert magnitude to dB (20*log10(mag))
pub fn mag_2_db(mag: f64) -> f64 {
    20.0 * mag.log10()
}

/// Convert dB to magnitude (10^(dB/20))
pub fn db_2_mag(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Convert degrees to radians
pub fn degree_2_radian(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
pub fn radian_2_degree(rad: f64) -> f64 {
    rad * 180.0 / PI
}
