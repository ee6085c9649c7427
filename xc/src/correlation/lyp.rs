//! Lee-Yang-Parr correlation in the Miehlich form.

use crate::families::{GgaKernel, GgaPoint, Screening};
use xcconsts::*;

const A: f64 = 0.04918;
const B: f64 = 0.132;
const C: f64 = 0.2533;
const D: f64 = 0.349;

pub struct Lyp;

pub static LYP: Lyp = Lyp;

/// Density-only quantities shared by both spin treatments.
struct Shape {
    /// d rho^(-1/3)
    y: f64,
    omega: f64,
    delta: f64,
    /// d omega / d rho
    domega: f64,
    /// d delta / d rho
    ddelta: f64,
}

impl Shape {
    fn new(rho: f64) -> Shape {
        let rm13 = rho.powf(-T13);
        let y = D * rm13;
        let opy = 1.0 + y;

        let omega = (-C * rm13).exp() / opy * rho.powf(-11.0 / 3.0);
        let delta = C * rm13 + y / opy;

        Shape {
            y,
            omega,
            delta,
            domega: omega * (delta - 11.0) / (3.0 * rho),
            ddelta: -(C * rm13 + y / (opy * opy)) / (3.0 * rho),
        }
    }
}

fn cf() -> f64 {
    0.3 * (3.0 * PI2).powf(T23)
}

impl GgaKernel for Lyp {
    fn polarized(&self, rho: [f64; 2], sigma: [f64; 3], _scr: &Screening) -> GgaPoint {
        let [ra, rb] = rho;
        let [saa, sab, sbb] = sigma;

        let r = ra + rb;
        let sh = Shape::new(r);
        let opy = 1.0 + sh.y;
        let (omega, delta) = (sh.omega, sh.delta);

        let c11 = 2f64.powf(11.0 / 3.0) * cf();
        let grad = saa + sbb + 2.0 * sab;
        let rab = ra * rb;
        let r2 = r * r;

        let g47 = 47.0 / 18.0 - 7.0 / 18.0 * delta;
        let g52 = 2.5 - delta / 18.0;
        let g11 = (delta - 11.0) / 9.0;

        let bracket = c11 * (ra.powf(T83) + rb.powf(T83)) + g47 * grad
            - g52 * (saa + sbb)
            - g11 * (ra * saa + rb * sbb) / r;

        let q = rab * bracket - T23 * r2 * grad
            + (T23 * r2 - ra * ra) * sbb
            + (T23 * r2 - rb * rb) * saa;

        // first term: -4a rho_a rho_b K, K = 1 / (rho (1 + y))
        let k = 1.0 / (r * opy);
        let dk = (-1.0 / opy + sh.y / (3.0 * opy * opy)) / r2;

        let e = -4.0 * A * rab * k - A * B * omega * q;

        let dq_ddelta = rab * (-7.0 / 18.0 * grad + (saa + sbb) / 18.0 - (ra * saa + rb * sbb) / (9.0 * r));

        let dq_dra = rb * bracket
            + rab * (c11 * T83 * ra.powf(T53) - g11 * rb * (saa - sbb) / r2)
            - T43 * r * grad
            + (T43 * r - 2.0 * ra) * sbb
            + T43 * r * saa;

        let dq_drb = ra * bracket
            + rab * (c11 * T83 * rb.powf(T53) - g11 * ra * (sbb - saa) / r2)
            - T43 * r * grad
            + (T43 * r - 2.0 * rb) * saa
            + T43 * r * sbb;

        let common = sh.domega * q + omega * dq_ddelta * sh.ddelta;

        let va = -4.0 * A * (rb * k + rab * dk) - A * B * (common + omega * dq_dra);
        let vb = -4.0 * A * (ra * k + rab * dk) - A * B * (common + omega * dq_drb);

        let dq_dsaa = rab * (g47 - g52 - g11 * ra / r) - rb * rb;
        let dq_dsbb = rab * (g47 - g52 - g11 * rb / r) - ra * ra;
        let dq_dsab = 2.0 * rab * g47 - T43 * r2;

        GgaPoint {
            e,
            vrho: [va, vb],
            vsigma: [
                -A * B * omega * dq_dsaa,
                -A * B * omega * dq_dsab,
                -A * B * omega * dq_dsbb,
            ],
        }
    }

    fn unpolarized(&self, rho: f64, sigma: f64, scr: &Screening) -> GgaPoint {
        if rho <= scr.dens {
            return GgaPoint::default();
        }

        let sh = Shape::new(rho);
        let opy = 1.0 + sh.y;
        let cf = cf();

        let t = 3.0 + 7.0 * sh.delta;
        let p = cf * rho.powf(14.0 / 3.0) - rho * rho * sigma * t / 72.0;
        let dp = 14.0 / 3.0 * cf * rho.powf(11.0 / 3.0)
            - 2.0 * rho * sigma * t / 72.0
            - rho * rho * sigma * 7.0 * sh.ddelta / 72.0;

        let e = -A * rho / opy - A * B * sh.omega * p;
        let vrho = -A * (1.0 / opy + sh.y / (3.0 * opy * opy)) - A * B * (sh.domega * p + sh.omega * dp);
        let vsigma = A * B * sh.omega * rho * rho * t / 72.0;

        GgaPoint {
            e,
            vrho: [vrho, 0.0],
            vsigma: [vsigma, 0.0, 0.0],
        }
    }
}
