//! Chebyshev impedance taper
//!
//! Multi-stage quarter-wave impedance tapers weighted so the total
//! reflection response follows an equal-ripple Chebyshev characteristic.
//! Used by multi-stage combiner and matching synthesis to grade the line
//! impedances between the reference and the load.

use super::SynthesisError;

/// Maximum taper stage count with a closed-form weighting
pub const MAX_STAGES: usize = 7;

/// Compute the `n` section impedances of an `n`-stage Chebyshev taper
/// from reference `z0` toward load `rl`.
///
/// `gamma` is the passband ripple of the reflection coefficient; it must
/// be smaller than the total reflection budget `|ln(rl/z0)| / 2`.
/// Impedances are returned ordered from the `z0` (source) end toward the
/// load end and step monotonically: decreasing when `rl < z0`,
/// increasing when `rl > z0`.
///
/// The per-stage weights come from expanding the Chebyshev polynomial
/// `T_n(sec(theta_m) * cos(theta))` into a cosine series and equating it
/// with the Fourier series of the small-reflection response; each stage
/// then multiplies the running impedance by `exp(+/- gamma * w_i)`.
pub fn chebyshev_taper(
    rl: f64,
    z0: f64,
    gamma: f64,
    n: usize,
) -> Result<Vec<f64>, SynthesisError> {
    if n == 0 || n > MAX_STAGES {
        return Err(SynthesisError::UnsupportedOrder(n));
    }
    for (name, value) in [("rl", rl), ("z0", z0), ("gamma", gamma)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(SynthesisError::InvalidParameter { name, value });
        }
    }

    // Total reflection exponent; its sign selects the taper direction.
    let total = 0.5 * (rl / z0).ln();
    let ratio = total.abs() / gamma;
    if ratio <= 1.0 {
        return Err(SynthesisError::RippleTooLarge {
            gamma,
            total: total.abs(),
        });
    }

    // T_n(x0) = ratio fixes the band-edge parameter x0 = sec(theta_m).
    let x0 = ((ratio.acosh()) / n as f64).cosh();
    let coef = chebyshev_cos_series(n, x0);

    // Step reflections G_0..G_n (symmetric, n+1 junctions for n stages):
    // 2*G_m = A * c[n - 2m], middle term of even n taken once.
    let a = gamma * total.signum();
    let mut steps = vec![0.0; n + 1];
    for m in 0..=n / 2 {
        let k = n - 2 * m;
        let g = if k == 0 { a * coef[0] } else { a * coef[k] / 2.0 };
        steps[m] = g;
        steps[n - m] = g;
    }

    // Accumulate ln Z from the source end; the n interior values are the
    // stage impedances, the final product lands exactly on rl.
    let mut z = Vec::with_capacity(n);
    let mut ln_z = z0.ln();
    for &g in steps.iter().take(n) {
        ln_z += 2.0 * g;
        z.push(ln_z.exp());
    }

    Ok(z)
}

/// Expand `T_n(x0 * cos(theta))` into its cosine series.
///
/// Returns `c` with `c[k]` the coefficient of `cos(k*theta)`; only
/// entries with `k = n, n-2, ...` are non-zero. Uses the Chebyshev
/// recurrence `T_m = 2*x0*cos(theta)*T_{m-1} - T_{m-2}` carried out
/// directly in the cosine basis, which reproduces the closed-form weight
/// tables exactly for every supported order.
fn chebyshev_cos_series(n: usize, x0: f64) -> Vec<f64> {
    let mut t_prev = vec![0.0; n + 1];
    let mut t_curr = vec![0.0; n + 1];
    t_prev[0] = 1.0; // T_0 = 1
    if n == 0 {
        return t_prev;
    }
    t_curr[1] = x0; // T_1 = x0 * cos(theta)

    for _ in 2..=n {
        // 2 * x0 * cos(theta) * T_{m-1}, using
        // cos(theta)*cos(k*theta) = (cos((k+1)theta) + cos(|k-1|theta)) / 2
        let mut next = vec![0.0; n + 1];
        for k in 0..=n {
            let c = t_curr[k];
            if c == 0.0 {
                continue;
            }
            if k + 1 <= n {
                next[k + 1] += x0 * c;
            }
            if k >= 1 {
                next[k - 1] += x0 * c;
            } else {
                // cos(theta) * cos(0) folds onto cos(theta)
                next[1] += x0 * c;
            }
        }
        for k in 0..=n {
            next[k] -= t_prev[k];
        }
        t_prev = t_curr;
        t_curr = next;
    }

    t_curr
}
