//! rfsynth-core: Network analysis engine for RF circuit synthesis
//!
//! Analyzes cascaded two-port ladder networks built from canonical RF
//! primitives (series/shunt R, L, C, ideal transmission lines and stubs)
//! and provides the coupled-resonator/taper mathematics used to derive
//! component values for attenuator, combiner and filter synthesis.
//!
//! ## Modules
//!
//! - `frequency` - Frequency grid representation
//! - `math` - ABCD chain matrix and scalar conversions
//! - `element` - Two-port circuit element primitives
//! - `network` - Cascade reduction, S-parameter conversion, sweep driver
//! - `synthesis` - Chebyshev taper and Matthaei-Young-Jones coupling math

pub mod constants;
pub mod element;
pub mod frequency;
pub mod math;
pub mod network;
pub mod synthesis;

pub use element::{Element, Orientation};
pub use frequency::Frequency;
pub use network::sweep::{AnalysisRequest, SParameterSet};
