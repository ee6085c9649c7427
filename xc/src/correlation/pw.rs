//! Perdew-Wang 92 correlation components.

use xcconsts::FZETA_DD0;

/// Parameters of the PW92 fit, indexed paramagnetic / ferromagnetic /
/// spin stiffness.
#[derive(Debug, Clone, Copy)]
pub struct PwParams {
    pub a: [f64; 3],
    pub alpha1: [f64; 3],
    pub beta1: [f64; 3],
    pub beta2: [f64; 3],
    pub beta3: [f64; 3],
    pub beta4: [f64; 3],
    /// f''(0) used by the spin interpolation
    pub fz20: f64,
}

pub const PW92: PwParams = PwParams {
    a: [0.031091, 0.015545, 0.016887],
    alpha1: [0.21370, 0.20548, 0.11125],
    beta1: [7.5957, 14.1189, 10.357],
    beta2: [3.5876, 6.1977, 3.6231],
    beta3: [1.6382, 3.3662, 0.88026],
    beta4: [0.49294, 0.62517, 0.49671],
    fz20: 1.709921,
};

/// Same fit with the higher-precision constants.
pub const PW92_MOD: PwParams = PwParams {
    a: [0.0310907, 0.01554535, 0.0168869],
    alpha1: [0.21370, 0.20548, 0.11125],
    beta1: [7.5957, 14.1189, 10.357],
    beta2: [3.5876, 6.1977, 3.6231],
    beta3: [1.6382, 3.3662, 0.88026],
    beta4: [0.49294, 0.62517, 0.49671],
    fz20: FZETA_DD0,
};

/// `G(rs) = -2A (1 + alpha1 rs) ln(1 + 1 / Q1)` and `dG/drs`.
pub fn pw_g(rs: f64, p: &PwParams, k: usize) -> (f64, f64) {
    let a = p.a[k];
    let srs = rs.sqrt();

    let q0 = -2.0 * a * (1.0 + p.alpha1[k] * rs);
    let q1 = 2.0
        * a
        * (p.beta1[k] * srs + p.beta2[k] * rs + p.beta3[k] * rs * srs + p.beta4[k] * rs * rs);
    let dq1 = a
        * (p.beta1[k] / srs + 2.0 * p.beta2[k] + 3.0 * p.beta3[k] * srs + 4.0 * p.beta4[k] * rs);

    let l = (1.0 / q1).ln_1p();

    let g = q0 * l;
    let dg = -2.0 * a * p.alpha1[k] * l - q0 * dq1 / (q1 * q1 + q1);

    (g, dg)
}
