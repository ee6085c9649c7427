//! Local functionals written as energies per volume.

use crate::dual::Dual;
use crate::{Screen, Vars};
use num_traits::Zero;
use xcconsts::*;

pub(crate) struct PzParams {
    gamma: f64,
    beta1: f64,
    beta2: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

pub(crate) const PZ_PARA: PzParams = PzParams {
    gamma: -0.1423,
    beta1: 1.0529,
    beta2: 0.3334,
    a: 0.0311,
    b: -0.048,
    c: 0.0020,
    d: -0.0116,
};

pub(crate) const PZ_FERRO: PzParams = PzParams {
    gamma: -0.0843,
    beta1: 1.3981,
    beta2: 0.2611,
    a: 0.01555,
    b: -0.0269,
    c: 0.0007,
    d: -0.0048,
};

pub(crate) struct VwnParams {
    a: f64,
    b: f64,
    c: f64,
    x0: f64,
}

pub(crate) const VWN_PARA: VwnParams = VwnParams {
    a: 0.0310907,
    b: 3.72744,
    c: 12.9352,
    x0: -0.10498,
};

pub(crate) const VWN_FERRO: VwnParams = VwnParams {
    a: 0.01554535,
    b: 7.06042,
    c: 18.0578,
    x0: -0.32500,
};

pub(crate) const VWN_STIFF: VwnParams = VwnParams {
    a: -1.0 / (6.0 * PI2),
    b: 1.13107,
    c: 13.0045,
    x0: -0.0047584,
};

pub(crate) const VWN_RPA_PARA: VwnParams = VwnParams {
    a: 0.0310907,
    b: 13.0720,
    c: 42.7198,
    x0: -0.409286,
};

pub(crate) const VWN_RPA_FERRO: VwnParams = VwnParams {
    a: 0.01554535,
    b: 20.1231,
    c: 101.578,
    x0: -0.743294,
};

pub(crate) struct PwParams {
    a: [f64; 3],
    alpha1: [f64; 3],
    beta1: [f64; 3],
    beta2: [f64; 3],
    beta3: [f64; 3],
    beta4: [f64; 3],
    fz20: f64,
}

pub(crate) const PW: PwParams = PwParams {
    a: [0.031091, 0.015545, 0.016887],
    alpha1: [0.21370, 0.20548, 0.11125],
    beta1: [7.5957, 14.1189, 10.357],
    beta2: [3.5876, 6.1977, 3.6231],
    beta3: [1.6382, 3.3662, 0.88026],
    beta4: [0.49294, 0.62517, 0.49671],
    fz20: 1.709921,
};

pub(crate) const PW_MOD: PwParams = PwParams {
    a: [0.0310907, 0.01554535, 0.0168869],
    alpha1: [0.21370, 0.20548, 0.11125],
    beta1: [7.5957, 14.1189, 10.357],
    beta2: [3.5876, 6.1977, 3.6231],
    beta3: [1.6382, 3.3662, 0.88026],
    beta4: [0.49294, 0.62517, 0.49671],
    fz20: FZETA_DD0,
};

/// Total density, Wigner-Seitz radius and clamped polarization.
pub(crate) fn rs_zeta(v: &Vars, s: &Screen) -> (Dual, Dual, Dual) {
    let rho = v.ra + v.rb;
    let rs = rho.powf(-T13) * (3.0 / FOURPI).powf(T13);
    let zeta = ((v.ra - v.rb) / rho).clamp_value(-1.0 + s.zeta, 1.0 - s.zeta);

    (rho, rs, zeta)
}

fn fz(zeta: Dual) -> Dual {
    ((1.0 + zeta).powf(T43) + (1.0 - zeta).powf(T43) - 2.0) / FZETA_DENOM
}

pub(crate) fn slater(v: &Vars, s: &Screen) -> Dual {
    let cx = 0.75 * (6.0 / PI).powf(T13);

    let mut e = Dual::zero();
    for r in [v.ra, v.rb] {
        if r.v > s.dens {
            e = e - cx * r.powf(T43);
        }
    }
    e
}

fn pz_eps(rs: Dual, p: &PzParams) -> Dual {
    if rs.v >= 1.0 {
        p.gamma / (1.0 + p.beta1 * rs.sqrt() + p.beta2 * rs)
    } else {
        let l = rs.ln();
        p.a * l + p.b + p.c * rs * l + p.d * rs
    }
}

pub(crate) fn pz81(v: &Vars, s: &Screen) -> Dual {
    let (rho, rs, zeta) = rs_zeta(v, s);
    let ep = pz_eps(rs, &PZ_PARA);
    let ef = pz_eps(rs, &PZ_FERRO);

    rho * (ep + fz(zeta) * (ef - ep))
}

fn vwn_aux(rs: Dual, p: &VwnParams) -> Dual {
    let x = rs.sqrt();
    let xx = rs + p.b * x + p.c;
    let q = (4.0 * p.c - p.b * p.b).sqrt();
    let xx0 = p.x0 * p.x0 + p.b * p.x0 + p.c;
    let at = (q / (2.0 * x + p.b)).atan();
    let dx = x - p.x0;

    p.a * ((rs / xx).ln() + 2.0 * p.b / q * at
        - p.b * p.x0 / xx0 * ((dx * dx / xx).ln() + 2.0 * (p.b + 2.0 * p.x0) / q * at))
}

pub(crate) fn vwn_rpa(v: &Vars, s: &Screen) -> Dual {
    let (rho, rs, zeta) = rs_zeta(v, s);
    let ep = vwn_aux(rs, &VWN_RPA_PARA);
    let ef = vwn_aux(rs, &VWN_RPA_FERRO);

    rho * (ep + fz(zeta) * (ef - ep))
}

/// eps = ep + ac f(z) (1 - z^4) / f''(0) + (ef - ep) f(z) z^4
fn stiffness_interp(ep: Dual, ef: Dual, ac: Dual, zeta: Dual, fz20: f64) -> Dual {
    let f = fz(zeta);
    let z2 = zeta * zeta;
    let z4 = z2 * z2;

    ep + ac * f * (1.0 - z4) / fz20 + (ef - ep) * f * z4
}

pub(crate) fn vwn5(v: &Vars, s: &Screen) -> Dual {
    let (rho, rs, zeta) = rs_zeta(v, s);
    let ep = vwn_aux(rs, &VWN_PARA);
    let ef = vwn_aux(rs, &VWN_FERRO);
    let ac = vwn_aux(rs, &VWN_STIFF);

    rho * stiffness_interp(ep, ef, ac, zeta, FZETA_DD0)
}

fn pw_g(rs: Dual, p: &PwParams, k: usize) -> Dual {
    let srs = rs.sqrt();
    let den = 2.0
        * p.a[k]
        * (p.beta1[k] * srs + p.beta2[k] * rs + p.beta3[k] * rs * srs + p.beta4[k] * rs * rs);

    -2.0 * p.a[k] * (1.0 + p.alpha1[k] * rs) * (1.0 / den).ln_1p()
}

/// PW92 correlation energy per particle.
pub(crate) fn pw_eps(rs: Dual, zeta: Dual, p: &PwParams) -> Dual {
    let ep = pw_g(rs, p, 0);
    let ef = pw_g(rs, p, 1);
    let ac = -pw_g(rs, p, 2);

    stiffness_interp(ep, ef, ac, zeta, p.fz20)
}

pub(crate) fn pw92(v: &Vars, s: &Screen, p: &PwParams) -> Dual {
    let (rho, rs, zeta) = rs_zeta(v, s);
    rho * pw_eps(rs, zeta, p)
}
