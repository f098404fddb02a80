//! Matthaei-Young-Jones direct-coupled resonator synthesis
//!
//! Computes the inter-resonator coupling coefficients (K for series
//! resonators, J for shunt resonators) of a direct-coupled bandpass
//! filter from its lowpass prototype, converts them to physical coupling
//! reactances/susceptances, and absorbs the excess reactance into the
//! adjacent resonators. All four topology variants are covered:
//! capacitive/inductive coupling with series/shunt resonators.

use std::f64::consts::PI;

use super::SynthesisError;

/// Resonator topology of a direct-coupled filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResonatorForm {
    /// Series LC resonators linked by impedance (K) inverters
    Series,
    /// Shunt LC resonators linked by admittance (J) inverters
    Shunt,
}

/// Physical realization of the inverters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouplingKind {
    Capacitive,
    Inductive,
}

/// A synthesized direct-coupled bandpass filter
#[derive(Debug, Clone, PartialEq)]
pub struct DirectCoupledFilter {
    /// Inverter parameters `K0..Kn` (ohms) or `J0..Jn` (siemens),
    /// one per coupling, ends included
    pub inverters: Vec<f64>,
    /// Physical coupling element values realizing the inverters:
    /// henries for inductive coupling, farads for capacitive
    pub couplings: Vec<f64>,
    /// Net resonator inductances after excess-reactance absorption, henries
    pub resonator_l: Vec<f64>,
    /// Net resonator capacitances after excess-reactance absorption, farads
    pub resonator_c: Vec<f64>,
}

/// Synthesize an order-`n` direct-coupled bandpass filter.
///
/// * `g` - lowpass prototype coefficients `g0..g_{n+1}` (`n = g.len() - 2`)
/// * `fbw` - fractional bandwidth `(f2 - f1) / sqrt(f1 * f2)`
/// * `f0_hz` - center frequency
/// * `rs`, `rl` - source and load termination resistances, ohms
/// * `resonator` - the free design value shared by all resonators before
///   absorption: the resonator capacitance in farads for the shunt form,
///   the resonator inductance in henries for the series form
#[allow(clippy::too_many_arguments)]
pub fn direct_coupled(
    g: &[f64],
    fbw: f64,
    f0_hz: f64,
    rs: f64,
    rl: f64,
    form: ResonatorForm,
    coupling: CouplingKind,
    resonator: f64,
) -> Result<DirectCoupledFilter, SynthesisError> {
    if g.len() < 3 {
        return Err(SynthesisError::InvalidPrototype(g.len()));
    }
    for &gi in g {
        if !gi.is_finite() || gi <= 0.0 {
            return Err(SynthesisError::InvalidParameter {
                name: "g",
                value: gi,
            });
        }
    }
    for (name, value) in [
        ("fbw", fbw),
        ("f0_hz", f0_hz),
        ("rs", rs),
        ("rl", rl),
        ("resonator", resonator),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(SynthesisError::InvalidParameter { name, value });
        }
    }

    let n = g.len() - 2;
    let w0 = 2.0 * PI * f0_hz;

    match form {
        ResonatorForm::Shunt => shunt_form(g, n, fbw, w0, rs, rl, coupling, resonator),
        ResonatorForm::Series => series_form(g, n, fbw, w0, rs, rl, coupling, resonator),
    }
}

/// Shunt resonators with admittance (J) inverters.
///
/// Susceptance slope parameter `b = w0 * Cr` is common to all nodes:
///
/// ```text
/// J0 = sqrt(GA * b * w / (g0 * g1))
/// Jk = w * b / sqrt(gk * g_{k+1})        k = 1..n-1
/// Jn = sqrt(GB * b * w / (gn * g_{n+1}))
/// ```
#[allow(clippy::too_many_arguments)]
fn shunt_form(
    g: &[f64],
    n: usize,
    fbw: f64,
    w0: f64,
    rs: f64,
    rl: f64,
    coupling: CouplingKind,
    c_res: f64,
) -> Result<DirectCoupledFilter, SynthesisError> {
    let ga = 1.0 / rs;
    let gb = 1.0 / rl;
    let b = w0 * c_res;
    let l_res = 1.0 / (w0 * w0 * c_res);

    let mut j = vec![0.0; n + 1];
    j[0] = (ga * b * fbw / (g[0] * g[1])).sqrt();
    for k in 1..n {
        j[k] = fbw * b / (g[k] * g[k + 1]).sqrt();
    }
    j[n] = (gb * b * fbw / (g[n] * g[n + 1])).sqrt();

    check_end(j[0], ga)?;
    check_end(j[n], gb)?;

    match coupling {
        CouplingKind::Capacitive => {
            // Series coupling capacitors, J = w0*C for the interior,
            // end sections corrected for the termination loading.
            let mut c = vec![0.0; n + 1];
            c[0] = j[0] / (w0 * (1.0 - (j[0] / ga).powi(2)).sqrt());
            for k in 1..n {
                c[k] = j[k] / w0;
            }
            c[n] = j[n] / (w0 * (1.0 - (j[n] / gb).powi(2)).sqrt());

            // Effective capacitance the end sections present to the
            // first/last resonator node
            let c0e = c[0] / (1.0 + (w0 * c[0] / ga).powi(2));
            let cne = c[n] / (1.0 + (w0 * c[n] / gb).powi(2));

            let mut res_c = vec![0.0; n];
            for i in 0..n {
                let left = if i == 0 { c0e } else { c[i] };
                let right = if i == n - 1 { cne } else { c[i + 1] };
                let net = c_res - left - right;
                check_positive(net, c_res)?;
                res_c[i] = net;
            }

            Ok(DirectCoupledFilter {
                inverters: j,
                couplings: c,
                resonator_l: vec![l_res; n],
                resonator_c: res_c,
            })
        }
        CouplingKind::Inductive => {
            // Series coupling inductors, J = 1/(w0*L) for the interior
            let mut l = vec![0.0; n + 1];
            l[0] = (1.0 - (j[0] / ga).powi(2)).sqrt() / (w0 * j[0]);
            for k in 1..n {
                l[k] = 1.0 / (w0 * j[k]);
            }
            l[n] = (1.0 - (j[n] / gb).powi(2)).sqrt() / (w0 * j[n]);

            // Effective shunt inductance presented to the end nodes
            let l0e = l[0] * (1.0 + (1.0 / (w0 * l[0] * ga)).powi(2));
            let lne = l[n] * (1.0 + (1.0 / (w0 * l[n] * gb)).powi(2));

            let mut res_l = vec![0.0; n];
            for i in 0..n {
                let left = if i == 0 { l0e } else { l[i] };
                let right = if i == n - 1 { lne } else { l[i + 1] };
                // Negative shunt inductors of the inverters combine in
                // parallel with the resonator inductance
                let inv = 1.0 / l_res - 1.0 / left - 1.0 / right;
                check_positive(inv, 1.0 / l_res)?;
                res_l[i] = 1.0 / inv;
            }

            Ok(DirectCoupledFilter {
                inverters: j,
                couplings: l,
                resonator_l: res_l,
                resonator_c: vec![c_res; n],
            })
        }
    }
}

/// Series resonators with impedance (K) inverters.
///
/// Reactance slope parameter `x = w0 * Lr` is common to all resonators:
///
/// ```text
/// K0 = sqrt(RA * x * w / (g0 * g1))
/// Kk = w * x / sqrt(gk * g_{k+1})        k = 1..n-1
/// Kn = sqrt(RB * x * w / (gn * g_{n+1}))
/// ```
#[allow(clippy::too_many_arguments)]
fn series_form(
    g: &[f64],
    n: usize,
    fbw: f64,
    w0: f64,
    rs: f64,
    rl: f64,
    coupling: CouplingKind,
    l_res: f64,
) -> Result<DirectCoupledFilter, SynthesisError> {
    let x = w0 * l_res;
    let c_res = 1.0 / (w0 * w0 * l_res);

    let mut k_inv = vec![0.0; n + 1];
    k_inv[0] = (rs * x * fbw / (g[0] * g[1])).sqrt();
    for k in 1..n {
        k_inv[k] = fbw * x / (g[k] * g[k + 1]).sqrt();
    }
    k_inv[n] = (rl * x * fbw / (g[n] * g[n + 1])).sqrt();

    check_end(k_inv[0], rs)?;
    check_end(k_inv[n], rl)?;

    match coupling {
        CouplingKind::Inductive => {
            // Shunt coupling inductors, K = w0*L for the interior
            let mut l = vec![0.0; n + 1];
            l[0] = k_inv[0] / (w0 * (1.0 - (k_inv[0] / rs).powi(2)).sqrt());
            for k in 1..n {
                l[k] = k_inv[k] / w0;
            }
            l[n] = k_inv[n] / (w0 * (1.0 - (k_inv[n] / rl).powi(2)).sqrt());

            let l0e = l[0] / (1.0 + (w0 * l[0] / rs).powi(2));
            let lne = l[n] / (1.0 + (w0 * l[n] / rl).powi(2));

            let mut res_l = vec![0.0; n];
            for i in 0..n {
                let left = if i == 0 { l0e } else { l[i] };
                let right = if i == n - 1 { lne } else { l[i + 1] };
                let net = l_res - left - right;
                check_positive(net, l_res)?;
                res_l[i] = net;
            }

            Ok(DirectCoupledFilter {
                inverters: k_inv,
                couplings: l,
                resonator_l: res_l,
                resonator_c: vec![c_res; n],
            })
        }
        CouplingKind::Capacitive => {
            // Shunt coupling capacitors, K = 1/(w0*C) for the interior
            let mut c = vec![0.0; n + 1];
            c[0] = (1.0 - (k_inv[0] / rs).powi(2)).sqrt() / (w0 * k_inv[0]);
            for k in 1..n {
                c[k] = 1.0 / (w0 * k_inv[k]);
            }
            c[n] = (1.0 - (k_inv[n] / rl).powi(2)).sqrt() / (w0 * k_inv[n]);

            // Effective series capacitance presented by the end sections
            let q0 = w0 * rs * c[0];
            let qn = w0 * rl * c[n];
            let c0e = c[0] * (1.0 + q0 * q0) / (q0 * q0);
            let cne = c[n] * (1.0 + qn * qn) / (qn * qn);

            let mut res_c = vec![0.0; n];
            for i in 0..n {
                let left = if i == 0 { c0e } else { c[i] };
                let right = if i == n - 1 { cne } else { c[i + 1] };
                // Negative series capacitors of the inverters combine in
                // series with the resonator capacitance
                let inv = 1.0 / c_res - 1.0 / left - 1.0 / right;
                check_positive(inv, 1.0 / c_res)?;
                res_c[i] = 1.0 / inv;
            }

            Ok(DirectCoupledFilter {
                inverters: k_inv,
                couplings: c,
                resonator_l: vec![l_res; n],
                resonator_c: res_c,
            })
        }
    }
}

/// End inverters must stay below the termination conductance/resistance
/// or the correction square roots go imaginary
fn check_end(value: f64, bound: f64) -> Result<(), SynthesisError> {
    if value >= bound {
        return Err(SynthesisError::CouplingTooStrong { value, bound });
    }
    Ok(())
}

/// Absorption must leave a positive net resonator element
fn check_positive(value: f64, bound: f64) -> Result<(), SynthesisError> {
    if value <= 0.0 {
        return Err(SynthesisError::CouplingTooStrong {
            value: bound - value,
            bound,
        });
    }
    Ok(())
}
