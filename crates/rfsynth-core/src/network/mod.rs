//! Cascaded two-port network analysis
//!
//! - `cascade` - reduce an ordered element chain to a single ABCD matrix
//! - `sparams` - convert ABCD parameters to S-parameters under complex
//!   source/load references
//! - `sweep` - drive the above over a frequency grid

pub mod cascade;
pub mod sparams;
pub mod sweep;

use thiserror::Error;

/// Network analysis errors
///
/// A degenerate network (zero S-parameter denominator) is deliberately not
/// an error: it produces non-finite values for that frequency point so the
/// rest of the sweep survives. Callers detect it with
/// [`sparams::TwoPort::is_finite`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// A chain element has no ABCD representation (port markers, 4-port
    /// couplers). The legacy engine silently substituted an identity
    /// matrix here, corrupting every downstream S-parameter; this variant
    /// surfaces the condition instead.
    #[error("chain element {index} ({kind}) cannot be cascaded as a two-port")]
    UnsupportedElement { index: usize, kind: &'static str },

    /// An element carries a non-positive or non-finite electrical value
    #[error("chain element {index} ({kind}) has invalid value {value}")]
    InvalidElementValue {
        index: usize,
        kind: &'static str,
        value: f64,
    },

    /// The requested frequency grid is empty or inverted
    #[error("invalid frequency grid: start {fstart} Hz, stop {fstop} Hz, {npoints} points")]
    InvalidGrid {
        fstart: f64,
        fstop: f64,
        npoints: usize,
    },

    /// A load/source impedance table has no points or mismatched columns
    #[error("impedance table is empty or malformed")]
    InvalidTable,
}
