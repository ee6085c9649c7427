//! Vosko-Wilk-Nusair correlation components.

use xcconsts::PI2;

#[derive(Debug, Clone, Copy)]
pub struct VwnParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub x0: f64,
}

pub const VWN5_PARA: VwnParams = VwnParams {
    a: 0.0310907,
    b: 3.72744,
    c: 12.9352,
    x0: -0.10498,
};

pub const VWN5_FERRO: VwnParams = VwnParams {
    a: 0.01554535,
    b: 7.06042,
    c: 18.0578,
    x0: -0.32500,
};

/// Spin stiffness fit
pub const VWN5_STIFF: VwnParams = VwnParams {
    a: -1.0 / (6.0 * PI2),
    b: 1.13107,
    c: 13.0045,
    x0: -0.0047584,
};

pub const VWN_RPA_PARA: VwnParams = VwnParams {
    a: 0.0310907,
    b: 13.0720,
    c: 42.7198,
    x0: -0.409286,
};

pub const VWN_RPA_FERRO: VwnParams = VwnParams {
    a: 0.01554535,
    b: 20.1231,
    c: 101.578,
    x0: -0.743294,
};

/// VWN interpolation formula in `x = sqrt(rs)`, returning the energy per
/// particle and its derivative with respect to rs.
pub fn vwn_eps(rs: f64, p: &VwnParams) -> (f64, f64) {
    let x = rs.sqrt();
    let xx = rs + p.b * x + p.c;
    let xx0 = p.x0 * p.x0 + p.b * p.x0 + p.c;
    let q = (4.0 * p.c - p.b * p.b).sqrt();

    let tx = 2.0 * x + p.b;
    let at = (q / tx).atan();
    let dx = x - p.x0;
    let bx0 = p.b * p.x0 / xx0;

    let ec = p.a
        * ((rs / xx).ln() + 2.0 * p.b / q * at
            - bx0 * ((dx * dx / xx).ln() + 2.0 * (p.b + 2.0 * p.x0) / q * at));

    let tq = tx * tx + q * q;
    let dec_dx = p.a
        * (2.0 / x - tx / xx - 4.0 * p.b / tq
            - bx0 * (2.0 / dx - tx / xx - 4.0 * (p.b + 2.0 * p.x0) / tq));

    (ec, 0.5 * dec_dx / x)
}
