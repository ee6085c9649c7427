//! Becke 88 gradient-corrected exchange.

use super::{spin_scaled_polarized, spin_scaled_unpolarized};
use crate::families::{GgaKernel, GgaPoint, Screening};
use xcconsts::*;

const BETA: f64 = 0.0042;

pub struct B88;

pub static B88_X: B88 = B88;

/// One spin channel, with `x = |grad rho_s| / rho_s^(4/3)`:
/// `e = -rho_s^(4/3) (Cx + beta x^2 / (1 + 6 beta x asinh x))`.
pub fn b88_channel(rho: f64, sigma: f64) -> (f64, f64, f64) {
    let cx = 1.5 * (3.0 / FOURPI).powf(T13);

    let r13 = rho.cbrt();
    let r43 = rho * r13;
    let x2 = sigma / (r43 * r43);
    let x = x2.sqrt();

    let ash = x.asinh();
    let d = 1.0 + 6.0 * BETA * x * ash;
    let dd = 6.0 * BETA * (ash + x / (1.0 + x2).sqrt());

    let g = BETA * x2 / d;
    // g'(x) / x, regular at x = 0
    let gpx = BETA * (2.0 * d - x * dd) / (d * d);

    let e = -r43 * (cx + g);
    let vrho = -T43 * r13 * (cx + g - gpx * x2);
    let vsigma = -0.5 * gpx / r43;

    (e, vrho, vsigma)
}

impl GgaKernel for B88 {
    fn polarized(&self, rho: [f64; 2], sigma: [f64; 3], scr: &Screening) -> GgaPoint {
        spin_scaled_polarized(rho, sigma, scr, b88_channel)
    }

    fn unpolarized(&self, rho: f64, sigma: f64, scr: &Screening) -> GgaPoint {
        spin_scaled_unpolarized(rho, sigma, scr, b88_channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_b88_reduces_to_slater_without_gradient() {
        let (e, v, _) = b88_channel(0.2, 0.0);
        let (es, vs) = crate::exchange::slater::slater_channel(0.2);

        assert!((e - es).abs() < EPS12);
        assert!((v - vs).abs() < EPS12);
    }

    #[test]
    fn test_b88_sigma_derivative() {
        let (rho, sigma, h) = (0.3, 0.07, 1E-6);
        let (_, _, vs) = b88_channel(rho, sigma);
        let (ep, _, _) = b88_channel(rho, sigma + h);
        let (em, _, _) = b88_channel(rho, sigma - h);

        assert!((vs - (ep - em) / (2.0 * h)).abs() < EPS8);
    }
}
