#![allow(dead_code)]

use xc::*;

pub const FILL_EXC: f64 = 2.0;
pub const FILL_VRHO: f64 = 10.0;
pub const FILL_VSIGMA: f64 = 50.0;
pub const ALPHA: f64 = 3.14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    Regular,
    Small,
    Zero,
}

pub const REGIMES: [Regime; 3] = [Regime::Regular, Regime::Small, Regime::Zero];
pub const SPINS: [Spin; 2] = [Spin::Unpolarized, Spin::Polarized];

/// Densities and contractions in the interleaved layout of `kernel`.
pub fn inputs(kernel: &XCKernel, npts: usize, regime: Regime) -> (Vec<f64>, Vec<f64>) {
    let nrho = kernel.rho_buffer_len(npts);
    let nsigma = kernel.sigma_buffer_len(npts);

    match regime {
        Regime::Small => (vec![1E-13; nrho], vec![1E-14; nsigma]),
        Regime::Zero => (vec![0.0; nrho], vec![0.0; nsigma]),
        Regime::Regular => {
            let mut rho = Vec::with_capacity(nrho);
            let mut sigma = Vec::with_capacity(nsigma);

            for i in 0..npts {
                let t = (i as f64 + 0.5) / npts as f64;
                let r = 0.02 + 0.9 * t * t;
                let g = 0.002 + 0.4 * (1.0 - t) * t;

                if kernel.is_polarized() {
                    // polarization sweeps from strongly up to strongly down
                    let z = 0.998 * (1.0 - 2.0 * t);
                    let (ru, rd) = (0.5 * r * (1.0 + z), 0.5 * r * (1.0 - z));
                    rho.extend([ru, rd]);

                    let (suu, sdd) = (g * (1.0 + z) * (1.0 + z), g * (1.0 - z) * (1.0 - z));
                    let sud = 0.5 * (suu * sdd).sqrt() * if i % 2 == 0 { 1.0 } else { -1.0 };
                    if nsigma > 0 {
                        sigma.extend([suu, sud, sdd]);
                    }
                } else {
                    rho.push(r);
                    if nsigma > 0 {
                        sigma.push(g);
                    }
                }
            }

            (rho, sigma)
        }
    }
}

pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1E-8 * a.abs().max(b.abs()) + 1E-12
}

pub fn assert_all_close(a: &[f64], b: &[f64], what: &str) {
    assert_eq!(a.len(), b.len(), "{}: length", what);
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert!(close(*x, *y), "{}[{}]: {} vs {}", what, i, x, y);
    }
}

/// Outputs of one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Outputs {
    pub exc: Vec<f64>,
    pub vrho: Vec<f64>,
    pub vsigma: Vec<f64>,
}

impl Outputs {
    pub fn filled(kernel: &XCKernel, npts: usize) -> Outputs {
        Outputs {
            exc: vec![FILL_EXC; kernel.exc_buffer_len(npts)],
            vrho: vec![FILL_VRHO; kernel.vrho_buffer_len(npts)],
            vsigma: vec![FILL_VSIGMA; kernel.vsigma_buffer_len(npts)],
        }
    }
}

/// `eval_exc_vxc` in whichever shape the kernel's family takes.
pub fn eval_exc_vxc(kernel: &XCKernel, npts: usize, rho: &[f64], sigma: &[f64]) -> Outputs {
    let mut out = Outputs::filled(kernel, npts);

    if kernel.is_lda() {
        kernel
            .eval_exc_vxc(npts, rho, &mut out.exc, &mut out.vrho)
            .unwrap();
    } else {
        kernel
            .eval_exc_vxc_gga(npts, rho, sigma, &mut out.exc, &mut out.vrho, &mut out.vsigma)
            .unwrap();
    }

    out
}

pub fn eval_exc(kernel: &XCKernel, npts: usize, rho: &[f64], sigma: &[f64]) -> Vec<f64> {
    let mut exc = vec![FILL_EXC; kernel.exc_buffer_len(npts)];

    if kernel.is_lda() {
        kernel.eval_exc(npts, rho, &mut exc).unwrap();
    } else {
        kernel.eval_exc_gga(npts, rho, sigma, &mut exc).unwrap();
    }

    exc
}
