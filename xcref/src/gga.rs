//! Gradient-corrected functionals written as energies per volume.

use crate::dual::Dual;
use crate::lda::{pw_eps, rs_zeta, PW_MOD};
use crate::{Screen, Vars};
use num_traits::Zero;
use xcconsts::*;

const B88_BETA: f64 = 0.0042;

const PBE_MU: f64 = 0.2195149727645171;
pub(crate) const PBE_KAPPA: f64 = 0.804;
pub(crate) const REVPBE_KAPPA: f64 = 1.245;

const PBE_BETA: f64 = 0.06672455060314922;

const LYP_A: f64 = 0.04918;
const LYP_B: f64 = 0.132;
const LYP_C: f64 = 0.2533;
const LYP_D: f64 = 0.349;

fn channels(v: &Vars) -> [(Dual, Dual); 2] {
    [
        (v.ra, v.saa.clamp_value(0.0, f64::INFINITY)),
        (v.rb, v.sbb.clamp_value(0.0, f64::INFINITY)),
    ]
}

pub(crate) fn b88(v: &Vars, s: &Screen) -> Dual {
    let cx = 1.5 * (3.0 / FOURPI).powf(T13);

    let mut e = Dual::zero();
    for (r, sig) in channels(v) {
        if r.v <= s.dens {
            continue;
        }

        let r43 = r.powf(T43);
        let x2 = sig / (r43 * r43);
        let g = B88_BETA * x2 / (1.0 + 6.0 * B88_BETA * x2.x_asinh_x_of_square());

        e = e - r43 * (cx + g);
    }
    e
}

/// Spin-scaled PBE exchange: E[ra, rb] = (E[2 ra] + E[2 rb]) / 2.
pub(crate) fn pbe_x(v: &Vars, s: &Screen, kappa: f64) -> Dual {
    let ax = -0.75 * (3.0 / PI).powf(T13);
    let s2_pref = 1.0 / (4.0 * (3.0 * PI2).powf(T23));

    let mut e = Dual::zero();
    for (r, sig) in channels(v) {
        if r.v <= s.dens {
            continue;
        }

        let n = 2.0 * r;
        let s2 = 4.0 * sig * s2_pref / n.powf(T83);
        let fx = 1.0 + kappa - kappa / (1.0 + PBE_MU * s2 / kappa);

        e += 0.5 * ax * n.powf(T43) * fx;
    }
    e
}

pub(crate) fn lyp(v: &Vars, _s: &Screen) -> Dual {
    let cf = 0.3 * (3.0 * PI2).powf(T23);

    let rho = v.ra + v.rb;
    let rm13 = rho.powf(-T13);
    let y = LYP_D * rm13;
    let denom = 1.0 + y;

    let omega = (-LYP_C * rm13).exp() / denom * rho.powf(-11.0 / 3.0);
    let delta = LYP_C * rm13 + y / denom;

    let grad = v.saa + v.sbb + 2.0 * v.sab;
    let ab = v.ra * v.rb;
    let rho2 = rho * rho;

    let t1 = -4.0 * LYP_A * ab / (rho * denom);

    let bracket = 2f64.powf(11.0 / 3.0) * cf * (v.ra.powf(T83) + v.rb.powf(T83))
        + (47.0 / 18.0 - 7.0 / 18.0 * delta) * grad
        - (2.5 - delta / 18.0) * (v.saa + v.sbb)
        - (delta - 11.0) / 9.0 * (v.ra / rho * v.saa + v.rb / rho * v.sbb);

    let q = ab * bracket - T23 * rho2 * grad
        + (T23 * rho2 - v.ra * v.ra) * v.sbb
        + (T23 * rho2 - v.rb * v.rb) * v.saa;

    t1 - LYP_A * LYP_B * omega * q
}

pub(crate) fn pbe_c(v: &Vars, s: &Screen) -> Dual {
    let gamma = (1.0 - 2f64.ln()) / PI2;

    let (rho, rs, zeta) = rs_zeta(v, s);
    let ec = pw_eps(rs, zeta, &PW_MOD);

    let phi = 0.5 * ((1.0 + zeta).powf(T23) + (1.0 - zeta).powf(T23));
    let sig = (v.saa + v.sbb + 2.0 * v.sab).clamp_value(0.0, f64::INFINITY);

    let kf = (3.0 * PI2 * rho).powf(T13);
    let ks2 = 4.0 * kf / PI;
    let t2 = sig / (4.0 * phi * phi * ks2 * rho * rho);

    let g3 = gamma * phi * phi * phi;
    let aa = (PBE_BETA / gamma) / ((-ec / g3).exp() - 1.0);
    let at2 = aa * t2;

    let h = g3 * (1.0 + PBE_BETA / gamma * t2 * (1.0 + at2) / (1.0 + at2 + at2 * at2)).ln();

    rho * (ec + h)
}
