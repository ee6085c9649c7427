//! Point-kernel traits of the functional families.
//!
//! Kernels return the energy per volume `e` and its partial derivatives.
//! The driver divides by the total density to obtain the energy per
//! particle and takes care of the total-density screening.

/// Numerical thresholds a kernel honours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screening {
    pub dens: f64,
    pub zeta: f64,
}

/// LDA result at one point. Unpolarized results use `vrho[0]` only.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LdaPoint {
    pub e: f64,
    pub vrho: [f64; 2],
}

/// GGA result at one point. `vsigma` is ordered `(uu, ud, dd)`;
/// unpolarized results use index 0 of each array.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GgaPoint {
    pub e: f64,
    pub vrho: [f64; 2],
    pub vsigma: [f64; 3],
}

impl LdaPoint {
    pub fn axpy(&mut self, w: f64, x: &LdaPoint) {
        self.e += w * x.e;
        self.vrho[0] += w * x.vrho[0];
        self.vrho[1] += w * x.vrho[1];
    }
}

impl GgaPoint {
    pub fn axpy(&mut self, w: f64, x: &GgaPoint) {
        self.e += w * x.e;
        for s in 0..2 {
            self.vrho[s] += w * x.vrho[s];
        }
        for s in 0..3 {
            self.vsigma[s] += w * x.vsigma[s];
        }
    }
}

impl From<LdaPoint> for GgaPoint {
    fn from(p: LdaPoint) -> GgaPoint {
        GgaPoint {
            e: p.e,
            vrho: p.vrho,
            vsigma: [0.0; 3],
        }
    }
}

/// Kernel of the LDA family
pub trait LdaKernel: Send + Sync {
    fn polarized(&self, rho: [f64; 2], scr: &Screening) -> LdaPoint;

    /// Evaluates the symmetric split `rho_up = rho_dn = rho / 2`.
    fn unpolarized(&self, rho: f64, scr: &Screening) -> LdaPoint {
        let p = self.polarized([0.5 * rho, 0.5 * rho], scr);

        LdaPoint {
            e: p.e,
            vrho: [0.5 * (p.vrho[0] + p.vrho[1]), 0.0],
        }
    }
}

/// Kernel of the GGA family
pub trait GgaKernel: Send + Sync {
    fn polarized(&self, rho: [f64; 2], sigma: [f64; 3], scr: &Screening) -> GgaPoint;

    /// Evaluates the symmetric split `rho_s = rho / 2`, `sigma_ss' = sigma / 4`.
    fn unpolarized(&self, rho: f64, sigma: f64, scr: &Screening) -> GgaPoint {
        let q = 0.25 * sigma;
        let p = self.polarized([0.5 * rho, 0.5 * rho], [q, q, q], scr);

        GgaPoint {
            e: p.e,
            vrho: [0.5 * (p.vrho[0] + p.vrho[1]), 0.0],
            vsigma: [0.25 * (p.vsigma[0] + p.vsigma[1] + p.vsigma[2]), 0.0, 0.0],
        }
    }
}

/// An LDA kernel taking part in a gradient-corrected mix.
pub struct LdaAsGga(pub &'static dyn LdaKernel);

impl GgaKernel for LdaAsGga {
    fn polarized(&self, rho: [f64; 2], _sigma: [f64; 3], scr: &Screening) -> GgaPoint {
        self.0.polarized(rho, scr).into()
    }

    fn unpolarized(&self, rho: f64, _sigma: f64, scr: &Screening) -> GgaPoint {
        self.0.unpolarized(rho, scr).into()
    }
}

/// Weighted sum of GGA kernels.
pub struct GgaMix {
    pub parts: &'static [(f64, &'static dyn GgaKernel)],
}

impl GgaKernel for GgaMix {
    fn polarized(&self, rho: [f64; 2], sigma: [f64; 3], scr: &Screening) -> GgaPoint {
        let mut out = GgaPoint::default();
        for (w, k) in self.parts {
            out.axpy(*w, &k.polarized(rho, sigma, scr));
        }
        out
    }

    fn unpolarized(&self, rho: f64, sigma: f64, scr: &Screening) -> GgaPoint {
        let mut out = GgaPoint::default();
        for (w, k) in self.parts {
            out.axpy(*w, &k.unpolarized(rho, sigma, scr));
        }
        out
    }
}
