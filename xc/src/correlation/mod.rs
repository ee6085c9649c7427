//! Local correlation and its spin interpolation.
//!
//! Each component is a fit `eps(rs)` returning the energy per particle and
//! `d eps / d rs`. A functional combines a paramagnetic and a ferromagnetic
//! component, and optionally a spin-stiffness one, through the f(zeta)
//! interpolation.

pub mod lyp;
pub mod pbe_c;
pub mod pw;
pub mod pz;
pub mod vwn;

use crate::families::{LdaKernel, LdaPoint, Screening};
use pw::{pw_g, PwParams, PW92, PW92_MOD};
use pz::{pz_eps, PZParams, PZ_POLARIZED, PZ_UNPOLARIZED};
use vwn::{vwn_eps, VwnParams, VWN5_FERRO, VWN5_PARA, VWN5_STIFF, VWN_RPA_FERRO, VWN_RPA_PARA};
use xcconsts::*;

#[derive(Debug, Clone, Copy)]
pub enum Component {
    Pz(&'static PZParams),
    Vwn(&'static VwnParams),
    /// `-G_k`, the sign convention of the PW92 stiffness fit
    PwNeg(&'static PwParams, usize),
    Pw(&'static PwParams, usize),
}

impl Component {
    #[inline]
    pub fn eps(&self, rs: f64) -> (f64, f64) {
        match *self {
            Component::Pz(p) => pz_eps(rs, p),
            Component::Vwn(p) => vwn_eps(rs, p),
            Component::Pw(p, k) => pw_g(rs, p, k),
            Component::PwNeg(p, k) => {
                let (g, dg) = pw_g(rs, p, k);
                (-g, -dg)
            }
        }
    }
}

/// Correlation energy per particle with its partial derivatives.
#[derive(Debug, Default, Clone, Copy)]
pub struct Eps {
    pub e: f64,
    pub drs: f64,
    pub dzeta: f64,
}

/// Density, Wigner-Seitz radius and spin polarization of one point.
#[derive(Debug, Clone, Copy)]
pub struct SpinDensity {
    pub rho: f64,
    pub rs: f64,
    /// clamped to `[-1 + zeta_thr, 1 - zeta_thr]`
    pub zeta: f64,
    /// `d zeta / d rho_up`, `d zeta / d rho_dn`
    pub dzeta: [f64; 2],
}

impl SpinDensity {
    pub fn new(rho: [f64; 2], scr: &Screening) -> SpinDensity {
        let tot = rho[0] + rho[1];
        let z = (rho[0] - rho[1]) / tot;

        SpinDensity {
            rho: tot,
            rs: wigner_seitz_radius(tot),
            zeta: z.max(-1.0 + scr.zeta).min(1.0 - scr.zeta),
            dzeta: [(1.0 - z) / tot, -(1.0 + z) / tot],
        }
    }
}

pub struct LdaCorrelation {
    para: Component,
    ferro: Component,
    /// spin stiffness and the f''(0) it is scaled by
    stiff: Option<(Component, f64)>,
}

pub static PZ81: LdaCorrelation = LdaCorrelation {
    para: Component::Pz(&PZ_UNPOLARIZED),
    ferro: Component::Pz(&PZ_POLARIZED),
    stiff: None,
};

pub static VWN_RPA: LdaCorrelation = LdaCorrelation {
    para: Component::Vwn(&VWN_RPA_PARA),
    ferro: Component::Vwn(&VWN_RPA_FERRO),
    stiff: None,
};

pub static VWN5: LdaCorrelation = LdaCorrelation {
    para: Component::Vwn(&VWN5_PARA),
    ferro: Component::Vwn(&VWN5_FERRO),
    stiff: Some((Component::Vwn(&VWN5_STIFF), FZETA_DD0)),
};

pub static PW91_LDA: LdaCorrelation = LdaCorrelation {
    para: Component::Pw(&PW92, 0),
    ferro: Component::Pw(&PW92, 1),
    stiff: Some((Component::PwNeg(&PW92, 2), PW92.fz20)),
};

pub static PW91_LDA_MOD: LdaCorrelation = LdaCorrelation {
    para: Component::Pw(&PW92_MOD, 0),
    ferro: Component::Pw(&PW92_MOD, 1),
    stiff: Some((Component::PwNeg(&PW92_MOD, 2), PW92_MOD.fz20)),
};

impl LdaCorrelation {
    /// Interpolated energy per particle at `(rs, zeta)`.
    pub fn eps(&self, rs: f64, zeta: f64) -> Eps {
        let (ep, dep) = self.para.eps(rs);
        let (ef, def) = self.ferro.eps(rs);
        let (f, df) = fzeta(zeta);

        match self.stiff {
            None => Eps {
                e: ep + f * (ef - ep),
                drs: dep + f * (def - dep),
                dzeta: df * (ef - ep),
            },

            Some((stiff, fz20)) => {
                let (ac, dac) = stiff.eps(rs);
                let z3 = zeta * zeta * zeta;
                let z4 = z3 * zeta;

                Eps {
                    e: ep + ac * f * (1.0 - z4) / fz20 + (ef - ep) * f * z4,
                    drs: dep + dac * f * (1.0 - z4) / fz20 + (def - dep) * f * z4,
                    dzeta: ac / fz20 * (df * (1.0 - z4) - 4.0 * z3 * f)
                        + (ef - ep) * (df * z4 + 4.0 * z3 * f),
                }
            }
        }
    }
}

impl LdaKernel for LdaCorrelation {
    fn polarized(&self, rho: [f64; 2], scr: &Screening) -> LdaPoint {
        let sd = SpinDensity::new(rho, scr);
        let eps = self.eps(sd.rs, sd.zeta);

        let v = eps.e - sd.rs / 3.0 * eps.drs;

        LdaPoint {
            e: sd.rho * eps.e,
            vrho: [
                v + sd.rho * eps.dzeta * sd.dzeta[0],
                v + sd.rho * eps.dzeta * sd.dzeta[1],
            ],
        }
    }

    fn unpolarized(&self, rho: f64, scr: &Screening) -> LdaPoint {
        if rho <= scr.dens {
            return LdaPoint::default();
        }

        let rs = wigner_seitz_radius(rho);
        let (ep, dep) = self.para.eps(rs);

        LdaPoint {
            e: rho * ep,
            vrho: [ep - rs / 3.0 * dep, 0.0],
        }
    }
}
