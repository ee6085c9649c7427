//! PBE correlation: PW92 local part plus the gradient correction H.

use super::{SpinDensity, PW91_LDA_MOD};
use crate::families::{GgaKernel, GgaPoint, Screening};
use xcconsts::*;

const BETA: f64 = 0.06672455060314922;

pub struct PbeCorrelation;

pub static PBE_C: PbeCorrelation = PbeCorrelation;

/// Gradient correction and its partials.
struct H {
    h: f64,
    /// with respect to the local energy per particle
    deps: f64,
    /// with respect to t^2
    du: f64,
    /// with respect to phi at fixed t^2 and eps
    dphi: f64,
}

fn gradient_correction(eps: f64, phi: f64, u: f64) -> H {
    let gamma = (1.0 - 2f64.ln()) / PI2;
    let bg = BETA / gamma;

    let g = gamma * phi * phi * phi;
    let em1 = (-eps / g).exp_m1();
    let ex = em1 + 1.0;

    let a = bg / em1;
    let num = 1.0 + a * u;
    let den = 1.0 + a * u + a * a * u * u;
    let r = bg * u * num / den;

    let dr_du = bg * ((num + u * a) / den - u * num * (a + 2.0 * a * a * u) / (den * den));
    let dr_da = bg * u * u * (1.0 / den - num * (1.0 + 2.0 * a * u) / (den * den));

    let da_deps = bg * ex / (g * em1 * em1);
    let da_dg = -bg * ex * eps / (g * g * em1 * em1);

    let l = r.ln_1p();
    let gr = g / (1.0 + r);

    let dh_dg = l + gr * dr_da * da_dg;
    let dh_du = gr * dr_du;

    H {
        h: g * l,
        deps: gr * dr_da * da_deps,
        du: dh_du,
        dphi: dh_dg * 3.0 * g / phi - 2.0 * u / phi * dh_du,
    }
}

impl GgaKernel for PbeCorrelation {
    fn polarized(&self, rho: [f64; 2], sigma: [f64; 3], scr: &Screening) -> GgaPoint {
        let sd = SpinDensity::new(rho, scr);
        let r = sd.rho;
        let eps = PW91_LDA_MOD.eps(sd.rs, sd.zeta);

        let opz = 1.0 + sd.zeta;
        let omz = 1.0 - sd.zeta;
        let phi = 0.5 * (opz.powf(T23) + omz.powf(T23));
        let dphi = T13 * (opz.powf(-T13) - omz.powf(-T13));

        // u = t^2 = cu * sigma_total
        let cu = PI / (16.0 * phi * phi * (3.0 * PI2).powf(T13) * r.powf(T73));
        let sig = (sigma[0] + sigma[2] + 2.0 * sigma[1]).max(0.0);
        let u = cu * sig;

        let hc = gradient_correction(eps.e, phi, u);

        let deps_drho = -sd.rs / (3.0 * r) * eps.drs;
        let dh_drho = hc.deps * deps_drho - T73 * u / r * hc.du;
        let dh_dzeta = hc.deps * eps.dzeta + hc.dphi * dphi;

        let v = eps.e + hc.h + r * (deps_drho + dh_drho);
        let vz = r * (eps.dzeta + dh_dzeta);
        let vs = r * hc.du * cu;

        GgaPoint {
            e: r * (eps.e + hc.h),
            vrho: [v + vz * sd.dzeta[0], v + vz * sd.dzeta[1]],
            vsigma: [vs, 2.0 * vs, vs],
        }
    }
}
