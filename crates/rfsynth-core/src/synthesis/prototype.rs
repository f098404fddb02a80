//! Lowpass prototype coefficients
//!
//! Normalized element values `g0..g_{n+1}` of the reference lowpass
//! filter, from which bandpass designs are derived by frequency
//! transformation. Standard closed forms for Butterworth and Chebyshev
//! responses.

use super::SynthesisError;
use std::f64::consts::PI;

/// Lowpass reference response shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    Butterworth,
    /// Equal-ripple response with the passband ripple in dB
    Chebyshev { ripple_db: f64 },
}

/// Compute the `n + 2` prototype coefficients `g0..g_{n+1}` for an
/// order-`n` lowpass response.
///
/// `g0` is always 1 (normalized source); for an even-order Chebyshev
/// response `g_{n+1}` differs from 1, reflecting the unequal termination
/// such filters require.
pub fn lowpass_prototype(response: Response, n: usize) -> Result<Vec<f64>, SynthesisError> {
    if n == 0 {
        return Err(SynthesisError::UnsupportedOrder(n));
    }

    let mut g = Vec::with_capacity(n + 2);
    g.push(1.0);

    match response {
        Response::Butterworth => {
            for k in 1..=n {
                g.push(2.0 * ((2 * k - 1) as f64 * PI / (2 * n) as f64).sin());
            }
            g.push(1.0);
        }
        Response::Chebyshev { ripple_db } => {
            if !ripple_db.is_finite() || ripple_db <= 0.0 {
                return Err(SynthesisError::InvalidParameter {
                    name: "ripple_db",
                    value: ripple_db,
                });
            }
            let beta = (1.0 / (ripple_db / 17.37).tanh()).ln();
            let gam = (beta / (2 * n) as f64).sinh();

            let a = |k: usize| ((2 * k - 1) as f64 * PI / (2 * n) as f64).sin();
            let b = |k: usize| gam * gam + (k as f64 * PI / n as f64).sin().powi(2);

            g.push(2.0 * a(1) / gam);
            for k in 2..=n {
                let prev = *g.last().unwrap();
                g.push(4.0 * a(k - 1) * a(k) / (b(k - 1) * prev));
            }
            if n % 2 == 1 {
                g.push(1.0);
            } else {
                g.push(1.0 / (beta / 4.0).tanh().powi(2));
            }
        }
    }

    Ok(g)
}
