//! Frequency module - represents an analysis frequency grid
//!
//! Internally frequencies are always stored in Hz; the unit is kept only
//! for display scaling. Sweeps are linearly spaced (the legacy analysis
//! engine never used log grids).

/// Frequency unit enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrequencyUnit {
    Hz,
    KHz,
    MHz,
    #[default]
    GHz,
}

impl FrequencyUnit {
    /// Get the multiplier to convert to Hz
    pub fn multiplier(&self) -> f64 {
        match self {
            FrequencyUnit::Hz => 1.0,
            FrequencyUnit::KHz => 1e3,
            FrequencyUnit::MHz => 1e6,
            FrequencyUnit::GHz => 1e9,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hz" => Some(FrequencyUnit::Hz),
            "khz" => Some(FrequencyUnit::KHz),
            "mhz" => Some(FrequencyUnit::MHz),
            "ghz" => Some(FrequencyUnit::GHz),
            _ => None,
        }
    }
}

/// A linearly-spaced frequency grid
#[derive(Debug, Clone, PartialEq)]
pub struct Frequency {
    /// Frequency vector in Hz
    f: Vec<f64>,
    /// Display unit
    unit: FrequencyUnit,
}

impl Frequency {
    /// Create a linear grid of `npoints` values from `start` to `stop`
    /// inclusive, in the given unit.
    ///
    /// # Example
    /// ```
    /// use rfsynth_core::frequency::{Frequency, FrequencyUnit};
    /// let freq = Frequency::linear(1.0, 10.0, 10, FrequencyUnit::GHz);
    /// assert_eq!(freq.npoints(), 10);
    /// ```
    pub fn linear(start: f64, stop: f64, npoints: usize, unit: FrequencyUnit) -> Self {
        let mult = unit.multiplier();
        let start_hz = start * mult;
        let stop_hz = stop * mult;

        let f = if npoints == 1 {
            vec![start_hz]
        } else {
            let step = (stop_hz - start_hz) / (npoints - 1) as f64;
            (0..npoints).map(|i| start_hz + i as f64 * step).collect()
        };

        Self { f, unit }
    }

    /// Create from a frequency vector in the given unit
    pub fn from_f(f: Vec<f64>, unit: FrequencyUnit) -> Self {
        let mult = unit.multiplier();
        let f_hz: Vec<f64> = f.iter().map(|&x| x * mult).collect();
        Self { f: f_hz, unit }
    }

    /// Get frequency vector in Hz
    #[inline]
    pub fn f(&self) -> &[f64] {
        &self.f
    }

    /// Get frequency vector in the display unit
    pub fn f_scaled(&self) -> Vec<f64> {
        let mult = self.unit.multiplier();
        self.f.iter().map(|&x| x / mult).collect()
    }

    /// Get the number of frequency points
    #[inline]
    pub fn npoints(&self) -> usize {
        self.f.len()
    }

    /// Get the start frequency in Hz
    #[inline]
    pub fn start(&self) -> f64 {
        *self.f.first().unwrap_or(&0.0)
    }

    /// Get the stop frequency in Hz
    #[inline]
    pub fn stop(&self) -> f64 {
        *self.f.last().unwrap_or(&0.0)
    }

    /// Get the center frequency in Hz
    pub fn center(&self) -> f64 {
        (self.start() + self.stop()) / 2.0
    }

    /// Get the frequency span in Hz
    #[inline]
    pub fn span(&self) -> f64 {
        self.stop() - self.start()
    }

    /// Get the display unit
    #[inline]
    pub fn unit(&self) -> FrequencyUnit {
        self.unit
    }
}
