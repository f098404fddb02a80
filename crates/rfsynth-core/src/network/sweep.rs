//! Frequency sweep driver
//!
//! Iterates a linear frequency grid, reconciling it against any measured
//! load-impedance table first, then runs cascade reduction and ABCD->S
//! conversion at every point.
//!
//! The output grid is authoritative: when the requested range does not
//! fit inside a load table, the sweep is silently re-gridded (and a
//! warning logged), so callers must read the frequency axis back from the
//! result rather than assume it equals the request.

use ndarray::{Array1, Array3};
use num_complex::Complex64;
use tracing::{debug, warn};

use super::cascade::cascade;
use super::sparams::abcd_to_s;
use super::AnalysisError;
use crate::constants::REGRID_POINTS;
use crate::element::Element;
use crate::frequency::{Frequency, FrequencyUnit};

/// A port termination: either a constant impedance or a measured
/// frequency-dependent impedance table.
#[derive(Debug, Clone, PartialEq)]
pub enum Termination {
    /// Same complex impedance at every frequency
    Constant(Complex64),
    /// Impedance sampled on its own frequency axis, resampled onto the
    /// analysis grid by linear interpolation
    Table(ImpedanceTable),
}

impl Termination {
    /// Real constant impedance of `r` ohms
    pub fn real(r: f64) -> Self {
        Termination::Constant(Complex64::new(r, 0.0))
    }

    /// Impedance values on the given grid
    fn resample(&self, f: &[f64]) -> Vec<Complex64> {
        match self {
            Termination::Constant(z) => vec![*z; f.len()],
            Termination::Table(table) => table.resample(f),
        }
    }
}

/// A measured impedance dataset: complex impedance on a strictly
/// increasing frequency axis in Hz.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpedanceTable {
    f: Vec<f64>,
    z: Vec<Complex64>,
}

impl ImpedanceTable {
    /// Create a table; the axis must be non-empty, strictly increasing
    /// and the same length as the impedance column.
    pub fn new(f: Vec<f64>, z: Vec<Complex64>) -> Result<Self, AnalysisError> {
        if f.is_empty() || f.len() != z.len() {
            return Err(AnalysisError::InvalidTable);
        }
        if f.windows(2).any(|w| w[1] <= w[0]) {
            return Err(AnalysisError::InvalidTable);
        }
        Ok(Self { f, z })
    }

    /// Lowest frequency covered by the table, Hz
    pub fn fmin(&self) -> f64 {
        self.f[0]
    }

    /// Highest frequency covered by the table, Hz
    pub fn fmax(&self) -> f64 {
        *self.f.last().unwrap()
    }

    /// Frequency axis in Hz
    pub fn f(&self) -> &[f64] {
        &self.f
    }

    /// Impedance at one frequency by piecewise-linear interpolation of
    /// the real and imaginary channels independently. Outside the table
    /// range the end values are held.
    pub fn sample(&self, f_hz: f64) -> Complex64 {
        let n = self.f.len();
        if n == 1 || f_hz <= self.f[0] {
            return self.z[0];
        }
        if f_hz >= self.f[n - 1] {
            return self.z[n - 1];
        }

        // Binary search for the bracketing interval
        let idx = match self.f.partition_point(|&f| f < f_hz) {
            0 => 0,
            i if i >= n => n - 2,
            i => i - 1,
        };

        let t = (f_hz - self.f[idx]) / (self.f[idx + 1] - self.f[idx]);
        let re = self.z[idx].re * (1.0 - t) + self.z[idx + 1].re * t;
        let im = self.z[idx].im * (1.0 - t) + self.z[idx + 1].im * t;
        Complex64::new(re, im)
    }

    /// Resample the table onto a new grid
    pub fn resample(&self, f: &[f64]) -> Vec<Complex64> {
        f.iter().map(|&fi| self.sample(fi)).collect()
    }
}

/// One complete analysis job: a chain, its two terminations and the
/// requested frequency grid (linearly spaced, Hz).
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Ordered elements from port 1 to port 2, terminators stripped
    pub chain: Vec<Element>,
    /// Source (port 1) reference impedance
    pub zs: Termination,
    /// Load (port 2) reference impedance
    pub zl: Termination,
    /// Requested start frequency, Hz
    pub fstart: f64,
    /// Requested stop frequency, Hz
    pub fstop: f64,
    /// Number of linearly spaced points
    pub npoints: usize,
}

/// Swept S-parameters of a two-port, stored `[nfreq, 2, 2]`.
#[derive(Debug, Clone)]
pub struct SParameterSet {
    /// The final analysis grid; may differ from the requested one when
    /// the sweep was re-gridded against a load impedance table
    pub frequency: Frequency,
    /// S-parameter data `[nfreq, 2, 2]`
    pub s: Array3<Complex64>,
    /// True when the requested grid was replaced per the table policy
    pub regridded: bool,
}

impl SParameterSet {
    /// Number of frequency points
    #[inline]
    pub fn npoints(&self) -> usize {
        self.s.shape()[0]
    }

    /// One S-parameter across the sweep, 1-based port indices
    /// (`s(2, 1)` is S21).
    pub fn s(&self, i: usize, j: usize) -> Array1<Complex64> {
        assert!(
            (1..=2).contains(&i) && (1..=2).contains(&j),
            "S-parameter indices must be 1 or 2"
        );
        self.s.slice(ndarray::s![.., i - 1, j - 1]).to_owned()
    }

    /// S11 across the sweep
    pub fn s11(&self) -> Array1<Complex64> {
        self.s(1, 1)
    }

    /// S12 across the sweep
    pub fn s12(&self) -> Array1<Complex64> {
        self.s(1, 2)
    }

    /// S21 across the sweep
    pub fn s21(&self) -> Array1<Complex64> {
        self.s(2, 1)
    }

    /// S22 across the sweep
    pub fn s22(&self) -> Array1<Complex64> {
        self.s(2, 2)
    }

    /// One S-parameter in dB magnitude across the sweep
    pub fn s_db(&self, i: usize, j: usize) -> Vec<f64> {
        self.s(i, j)
            .iter()
            .map(|&c| crate::math::conversions::complex_2_db(c))
            .collect()
    }
}

/// Run a full sweep: reconcile the grid, resample terminations, then
/// reduce and convert at every frequency point.
///
/// Degenerate frequency points produce non-finite S-parameters and are
/// kept in the output; structural problems (unsupported element, invalid
/// value, bad grid) abort the whole request.
pub fn run(request: &AnalysisRequest) -> Result<SParameterSet, AnalysisError> {
    if request.npoints == 0 || !request.fstart.is_finite() || !request.fstop.is_finite() {
        return Err(AnalysisError::InvalidGrid {
            fstart: request.fstart,
            fstop: request.fstop,
            npoints: request.npoints,
        });
    }
    if request.npoints > 1 && request.fstop <= request.fstart {
        return Err(AnalysisError::InvalidGrid {
            fstart: request.fstart,
            fstop: request.fstop,
            npoints: request.npoints,
        });
    }

    let (frequency, regridded) = reconcile_grid(request);
    let f = frequency.f().to_vec();

    let zs = request.zs.resample(&f);
    let zl = request.zl.resample(&f);

    let mut s = Array3::<Complex64>::zeros((f.len(), 2, 2));
    for (fi, &f_hz) in f.iter().enumerate() {
        let m = cascade(&request.chain, f_hz)?;
        let tp = abcd_to_s(&m, zs[fi], zl[fi]);
        if !tp.is_finite() {
            debug!(f_hz, "degenerate network at frequency point, S-parameters non-finite");
        }
        s[[fi, 0, 0]] = tp.s11;
        s[[fi, 0, 1]] = tp.s12;
        s[[fi, 1, 0]] = tp.s21;
        s[[fi, 1, 1]] = tp.s22;
    }

    Ok(SParameterSet {
        frequency,
        s,
        regridded,
    })
}

/// Reconcile the requested grid with the load impedance table, if any.
///
/// Policy when the table does not cover the request:
/// - lower bound below the table, upper bound inside: `[table.fmin, fstop]`
/// - upper bound above the table, lower bound inside: `[fstart, table.fmax]`
/// - both bounds outside, or a non-positive lower bound: the full table
///   range
/// Each re-grid uses [`REGRID_POINTS`] points. A grid fully inside the
/// table passes through unchanged.
fn reconcile_grid(request: &AnalysisRequest) -> (Frequency, bool) {
    let table = match &request.zl {
        Termination::Table(t) => t,
        Termination::Constant(_) => {
            return (
                Frequency::linear(
                    request.fstart,
                    request.fstop,
                    request.npoints,
                    FrequencyUnit::Hz,
                ),
                false,
            )
        }
    };

    let (lo, hi) = (request.fstart, request.fstop);
    let (tlo, thi) = (table.fmin(), table.fmax());
    let lo_inside = lo >= tlo && lo <= thi;
    let hi_inside = hi >= tlo && hi <= thi;

    let bounds = if lo < tlo && hi_inside {
        Some((tlo, hi))
    } else if hi > thi && lo_inside {
        Some((lo, thi))
    } else if (!lo_inside && !hi_inside) || lo <= 0.0 {
        Some((tlo, thi))
    } else {
        None
    };

    match bounds {
        Some((new_lo, new_hi)) => {
            warn!(
                requested_start = lo,
                requested_stop = hi,
                start = new_lo,
                stop = new_hi,
                "requested sweep range not covered by load impedance table, re-gridding"
            );
            (
                Frequency::linear(new_lo, new_hi, REGRID_POINTS, FrequencyUnit::Hz),
                true,
            )
        }
        None => (
            Frequency::linear(lo, hi, request.npoints, FrequencyUnit::Hz),
            false,
        ),
    }
}
