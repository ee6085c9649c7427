//! Perdew-Zunger 1981 fit of the Ceperley-Alder correlation energy.
//!
//! Two branches meet at rs = 1: a Pade form in sqrt(rs) for dilute gases
//! and a logarithmic expansion for dense ones.

#[derive(Debug, Clone, Copy)]
pub struct PZParams {
    // rs >= 1
    pub gamma: f64,
    pub beta1: f64,
    pub beta2: f64,
    // rs < 1
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// Paramagnetic gas.
pub const PZ_UNPOLARIZED: PZParams = PZParams {
    gamma: -0.1423,
    beta1: 1.0529,
    beta2: 0.3334,
    a: 0.0311,
    b: -0.048,
    c: 0.0020,
    d: -0.0116,
};

/// Ferromagnetic gas.
pub const PZ_POLARIZED: PZParams = PZParams {
    gamma: -0.0843,
    beta1: 1.3981,
    beta2: 0.2611,
    a: 0.01555,
    b: -0.0269,
    c: 0.0007,
    d: -0.0048,
};

/// Correlation energy per particle and its derivative with respect to rs.
#[inline]
pub fn pz_eps(rs: f64, params: &PZParams) -> (f64, f64) {
    if rs >= 1.0 {
        let rroot = rs.sqrt();
        let dt = 1.0 + params.beta1 * rroot + params.beta2 * rs;

        let ec = params.gamma / dt;
        let dec = -params.gamma * (0.5 * params.beta1 / rroot + params.beta2) / (dt * dt);

        (ec, dec)
    } else {
        let rln = rs.ln();

        let ec = params.a * rln + params.b + params.c * rs * rln + params.d * rs;
        let dec = params.a / rs + params.c * (rln + 1.0) + params.d;

        (ec, dec)
    }
}
