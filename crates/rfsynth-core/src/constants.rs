//! Numerical constants for network analysis
//!
//! Provides physical constants and standardized tolerance values used
//! throughout the library.

/// Speed of light in vacuum, m/s.
/// Used for the propagation constant of ideal transmission lines.
pub const C0: f64 = 299_792_458.0;

/// Tolerance for detecting near-zero values in division and singularity checks.
pub const NEAR_ZERO: f64 = 1e-15;

/// Tolerance for the ABCD determinant check (A*D - B*C = 1 for reciprocal
/// lossless chains).
pub const DET_TOL: f64 = 1e-9;

/// Number of points used when a sweep is re-gridded against a load
/// impedance table that does not cover the requested range.
pub const REGRID_POINTS: usize = 500;

/// Default system reference impedance, ohms.
pub const Z0_DEFAULT: f64 = 50.0;
