//! PBE exchange and its revPBE reparametrization.

use super::{spin_scaled_polarized, spin_scaled_unpolarized};
use crate::families::{GgaKernel, GgaPoint, Screening};
use xcconsts::*;

const MU: f64 = 0.2195149727645171;

pub struct PbeExchange {
    kappa: f64,
}

pub static PBE_X: PbeExchange = PbeExchange { kappa: 0.804 };
pub static REVPBE_X: PbeExchange = PbeExchange { kappa: 1.245 };

impl PbeExchange {
    /// Unpolarized energy per volume at density `n` and contraction `sigma`,
    /// returning `(e, de/dn, de/dsigma)`.
    fn unpolarized_gas(&self, n: f64, sigma: f64) -> (f64, f64, f64) {
        let ax = -0.75 * (3.0 / PI).powf(T13);
        let s2_pref = 1.0 / (4.0 * (3.0 * PI2).powf(T23));

        let n13 = n.cbrt();
        let n43 = n * n13;
        let s2 = sigma * s2_pref / (n43 * n43);

        let den = 1.0 + MU * s2 / self.kappa;
        let fx = 1.0 + self.kappa - self.kappa / den;
        let dfx = MU / (den * den);

        let e = ax * n43 * fx;
        let vn = ax * n13 * (T43 * fx - T83 * s2 * dfx);
        let vs = ax * dfx * s2_pref / n43;

        (e, vn, vs)
    }

    fn channel(&self, rho: f64, sigma: f64) -> (f64, f64, f64) {
        let (e, vn, vs) = self.unpolarized_gas(2.0 * rho, 4.0 * sigma);
        (0.5 * e, vn, 2.0 * vs)
    }
}

impl GgaKernel for PbeExchange {
    fn polarized(&self, rho: [f64; 2], sigma: [f64; 3], scr: &Screening) -> GgaPoint {
        spin_scaled_polarized(rho, sigma, scr, |r, s| self.channel(r, s))
    }

    fn unpolarized(&self, rho: f64, sigma: f64, scr: &Screening) -> GgaPoint {
        spin_scaled_unpolarized(rho, sigma, scr, |r, s| self.channel(r, s))
    }
}
