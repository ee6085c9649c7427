//! Slater exchange functional
//!
//! The Slater exchange is the simplest local exchange approximation,
//! derived from the uniform electron gas model.

use crate::families::{LdaKernel, LdaPoint, Screening};
use xcconsts::*;

pub struct Slater;

pub static SLATER: Slater = Slater;

/// Computes the Slater exchange potential and energy density (unpolarized)
///
/// Returns `(vx, ex)` with `vx = cx * rho^(1/3)`, `cx = -(3/pi)^(1/3)` and
/// `ex = (3/4) * vx` the energy per particle.
#[inline]
pub fn slater_unpolarized(rho: f64) -> (f64, f64) {
    let cx = -(3.0 / PI).powf(T13);

    let vx = cx * rho.powf(T13);
    let ex = 0.75 * vx;

    (vx, ex)
}

/// One spin channel: energy per volume and its derivative.
#[inline]
pub fn slater_channel(rho: f64) -> (f64, f64) {
    let cx = -(6.0 / PI).powf(T13);

    let v = cx * rho.powf(T13);
    let e = 0.75 * v * rho;

    (e, v)
}

impl LdaKernel for Slater {
    fn polarized(&self, rho: [f64; 2], scr: &Screening) -> LdaPoint {
        let mut out = LdaPoint::default();

        for s in 0..2 {
            if rho[s] > scr.dens {
                let (e, v) = slater_channel(rho[s]);
                out.e += e;
                out.vrho[s] = v;
            }
        }

        out
    }

    fn unpolarized(&self, rho: f64, scr: &Screening) -> LdaPoint {
        if 0.5 * rho <= scr.dens {
            return LdaPoint::default();
        }

        let (vx, ex) = slater_unpolarized(rho);

        LdaPoint {
            e: rho * ex,
            vrho: [vx, 0.0],
        }
    }
}
