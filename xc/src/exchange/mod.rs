//! Spin-scaled exchange.
//!
//! Exchange separates exactly over spin channels,
//! `Ex[rho_up, rho_dn] = (Ex[2 rho_up] + Ex[2 rho_dn]) / 2`, so every
//! functional here is written for one channel `(rho_s, sigma_ss)` and
//! returns `(e, de/drho_s, de/dsigma_ss)`. Channels at or below the density
//! threshold contribute nothing.

pub mod b88;
pub mod pbe;
pub mod slater;

use crate::families::{GgaPoint, Screening};

#[inline]
fn screened<F>(rho: f64, sigma: f64, scr: &Screening, channel: &F) -> (f64, f64, f64)
where
    F: Fn(f64, f64) -> (f64, f64, f64),
{
    if rho <= scr.dens {
        (0.0, 0.0, 0.0)
    } else {
        channel(rho, sigma.max(0.0))
    }
}

pub(crate) fn spin_scaled_polarized<F>(
    rho: [f64; 2],
    sigma: [f64; 3],
    scr: &Screening,
    channel: F,
) -> GgaPoint
where
    F: Fn(f64, f64) -> (f64, f64, f64),
{
    let (ea, va, sa) = screened(rho[0], sigma[0], scr, &channel);
    let (eb, vb, sb) = screened(rho[1], sigma[2], scr, &channel);

    GgaPoint {
        e: ea + eb,
        vrho: [va, vb],
        vsigma: [sa, 0.0, sb],
    }
}

pub(crate) fn spin_scaled_unpolarized<F>(
    rho: f64,
    sigma: f64,
    scr: &Screening,
    channel: F,
) -> GgaPoint
where
    F: Fn(f64, f64) -> (f64, f64, f64),
{
    let (e, v, s) = screened(0.5 * rho, 0.25 * sigma, scr, &channel);

    GgaPoint {
        e: 2.0 * e,
        vrho: [v, 0.0],
        vsigma: [0.5 * s, 0.0, 0.0],
    }
}
