use crate::dual::Dual;
use crate::error::{RefError, RefResult};
use crate::gga::{self, PBE_KAPPA, REVPBE_KAPPA};
use crate::lda::{self, PW, PW_MOD};
use crate::{Screen, Vars};
use num_traits::Zero;
use xcconsts::{DENS_THRESHOLD, ZETA_THRESHOLD};

pub const XC_UNPOLARIZED: i32 = 1;
pub const XC_POLARIZED: i32 = 2;

pub const XC_LDA_X: i32 = 1;
pub const XC_LDA_C_VWN: i32 = 7;
pub const XC_LDA_C_VWN_RPA: i32 = 8;
pub const XC_LDA_C_PZ: i32 = 9;
pub const XC_LDA_C_PW: i32 = 12;
pub const XC_LDA_C_PW_MOD: i32 = 13;
pub const XC_GGA_X_PBE: i32 = 101;
pub const XC_GGA_X_PBE_R: i32 = 102;
pub const XC_GGA_X_B88: i32 = 106;
pub const XC_GGA_C_PBE: i32 = 130;
pub const XC_GGA_C_LYP: i32 = 131;
pub const XC_HYB_GGA_XC_B3LYP: i32 = 402;
pub const XC_HYB_GGA_XC_PBEH: i32 = 406;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuncKind {
    Lda,
    Gga,
    HybGga,
}

#[derive(Debug, Clone, Copy)]
enum Term {
    Slater,
    Pz81,
    VwnRpa,
    Vwn5,
    Pw,
    PwMod,
    B88,
    PbeX,
    RevPbeX,
    Lyp,
    PbeC,
}

impl Term {
    fn energy(self, v: &Vars, s: &Screen) -> Dual {
        match self {
            Term::Slater => lda::slater(v, s),
            Term::Pz81 => lda::pz81(v, s),
            Term::VwnRpa => lda::vwn_rpa(v, s),
            Term::Vwn5 => lda::vwn5(v, s),
            Term::Pw => lda::pw92(v, s, &PW),
            Term::PwMod => lda::pw92(v, s, &PW_MOD),
            Term::B88 => gga::b88(v, s),
            Term::PbeX => gga::pbe_x(v, s, PBE_KAPPA),
            Term::RevPbeX => gga::pbe_x(v, s, REVPBE_KAPPA),
            Term::Lyp => gga::lyp(v, s),
            Term::PbeC => gga::pbe_c(v, s),
        }
    }
}

/// Static information about a functional code.
#[derive(Debug, Clone, Copy)]
pub struct FuncInfo {
    pub code: i32,
    pub name: &'static str,
    pub kind: FuncKind,
    pub exx: f64,
    terms: &'static [(f64, Term)],
}

const TABLE: &[FuncInfo] = &[
    FuncInfo {
        code: XC_LDA_X,
        name: "lda_x",
        kind: FuncKind::Lda,
        exx: 0.0,
        terms: &[(1.0, Term::Slater)],
    },
    FuncInfo {
        code: XC_LDA_C_VWN,
        name: "lda_c_vwn",
        kind: FuncKind::Lda,
        exx: 0.0,
        terms: &[(1.0, Term::Vwn5)],
    },
    FuncInfo {
        code: XC_LDA_C_VWN_RPA,
        name: "lda_c_vwn_rpa",
        kind: FuncKind::Lda,
        exx: 0.0,
        terms: &[(1.0, Term::VwnRpa)],
    },
    FuncInfo {
        code: XC_LDA_C_PZ,
        name: "lda_c_pz",
        kind: FuncKind::Lda,
        exx: 0.0,
        terms: &[(1.0, Term::Pz81)],
    },
    FuncInfo {
        code: XC_LDA_C_PW,
        name: "lda_c_pw",
        kind: FuncKind::Lda,
        exx: 0.0,
        terms: &[(1.0, Term::Pw)],
    },
    FuncInfo {
        code: XC_LDA_C_PW_MOD,
        name: "lda_c_pw_mod",
        kind: FuncKind::Lda,
        exx: 0.0,
        terms: &[(1.0, Term::PwMod)],
    },
    FuncInfo {
        code: XC_GGA_X_PBE,
        name: "gga_x_pbe",
        kind: FuncKind::Gga,
        exx: 0.0,
        terms: &[(1.0, Term::PbeX)],
    },
    FuncInfo {
        code: XC_GGA_X_PBE_R,
        name: "gga_x_pbe_r",
        kind: FuncKind::Gga,
        exx: 0.0,
        terms: &[(1.0, Term::RevPbeX)],
    },
    FuncInfo {
        code: XC_GGA_X_B88,
        name: "gga_x_b88",
        kind: FuncKind::Gga,
        exx: 0.0,
        terms: &[(1.0, Term::B88)],
    },
    FuncInfo {
        code: XC_GGA_C_PBE,
        name: "gga_c_pbe",
        kind: FuncKind::Gga,
        exx: 0.0,
        terms: &[(1.0, Term::PbeC)],
    },
    FuncInfo {
        code: XC_GGA_C_LYP,
        name: "gga_c_lyp",
        kind: FuncKind::Gga,
        exx: 0.0,
        terms: &[(1.0, Term::Lyp)],
    },
    FuncInfo {
        code: XC_HYB_GGA_XC_B3LYP,
        name: "hyb_gga_xc_b3lyp",
        kind: FuncKind::HybGga,
        exx: 0.20,
        terms: &[
            (0.08, Term::Slater),
            (0.72, Term::B88),
            (0.19, Term::VwnRpa),
            (0.81, Term::Lyp),
        ],
    },
    FuncInfo {
        code: XC_HYB_GGA_XC_PBEH,
        name: "hyb_gga_xc_pbeh",
        kind: FuncKind::HybGga,
        exx: 0.25,
        terms: &[(0.75, Term::PbeX), (1.0, Term::PbeC)],
    },
];

/// Looks up the static information of a functional code.
pub fn func_info(code: i32) -> RefResult<&'static FuncInfo> {
    TABLE
        .iter()
        .find(|info| info.code == code)
        .ok_or(RefError::UnknownCode(code))
}

/// Every functional code known to the library.
pub fn available_codes() -> Vec<i32> {
    TABLE.iter().map(|info| info.code).collect()
}

// variable slots of the dual numbers
const RA: usize = 0;
const RB: usize = 1;
const SAA: usize = 2;
const SBB: usize = 3;
const SAB: usize = 4;

/// An initialized functional.
///
/// Buffers follow this library's layout. Polarized densities are stored
/// channel-blocked, `[up_0 .. up_np | dn_0 .. dn_np]`, and the three
/// polarized gradient contractions as blocks `[uu | dd | ud]`. `zk` is the
/// energy per particle.
#[derive(Debug, Clone)]
pub struct XcFunc {
    info: &'static FuncInfo,
    nspin: i32,
    screen: Screen,
}

impl XcFunc {
    pub fn init(code: i32, nspin: i32) -> RefResult<XcFunc> {
        if nspin != XC_UNPOLARIZED && nspin != XC_POLARIZED {
            return Err(RefError::InvalidSpin(nspin));
        }

        let info = func_info(code)?;

        log::debug!("xcref: initialized {} (nspin = {})", info.name, nspin);

        Ok(XcFunc {
            info,
            nspin,
            screen: Screen {
                dens: DENS_THRESHOLD,
                zeta: ZETA_THRESHOLD,
            },
        })
    }

    pub fn info(&self) -> &'static FuncInfo {
        self.info
    }

    pub fn family(&self) -> FuncKind {
        self.info.kind
    }

    pub fn nspin(&self) -> i32 {
        self.nspin
    }

    pub fn dens_threshold(&self) -> f64 {
        self.screen.dens
    }

    pub fn set_dens_threshold(&mut self, thr: f64) -> RefResult<()> {
        if !(thr.is_finite() && thr > 0.0) {
            return Err(RefError::Threshold(thr));
        }
        self.screen.dens = thr;
        Ok(())
    }

    pub fn set_zeta_threshold(&mut self, thr: f64) -> RefResult<()> {
        if !(thr.is_finite() && thr > 0.0) {
            return Err(RefError::Threshold(thr));
        }
        self.screen.zeta = thr;
        Ok(())
    }

    fn needs_sigma(&self) -> bool {
        self.family() != FuncKind::Lda
    }

    fn check(&self, what: &'static str, np: usize, per_point: usize, found: usize) -> RefResult<()> {
        let expected = np * per_point;
        if found != expected {
            return Err(RefError::Dimension {
                what,
                np,
                expected,
                found,
            });
        }
        Ok(())
    }

    fn check_inputs(&self, np: usize, rho: &[f64], sigma: &[f64]) -> RefResult<()> {
        let ns = self.nspin as usize;
        self.check("rho", np, ns, rho.len())?;
        if self.needs_sigma() {
            self.check("sigma", np, 2 * ns - 1, sigma.len())?;
        }
        Ok(())
    }

    pub fn exc(&self, np: usize, rho: &[f64], sigma: &[f64], zk: &mut [f64]) -> RefResult<()> {
        self.check_inputs(np, rho, sigma)?;
        self.check("zk", np, 1, zk.len())?;

        for (ip, zk) in zk.iter_mut().enumerate() {
            *zk = self.point(np, ip, rho, sigma).map_or(0.0, |(e, rho)| e.v / rho);
        }

        Ok(())
    }

    pub fn exc_vxc(
        &self,
        np: usize,
        rho: &[f64],
        sigma: &[f64],
        zk: &mut [f64],
        vrho: &mut [f64],
        vsigma: &mut [f64],
    ) -> RefResult<()> {
        let ns = self.nspin as usize;

        self.check_inputs(np, rho, sigma)?;
        self.check("zk", np, 1, zk.len())?;
        self.check("vrho", np, ns, vrho.len())?;
        if self.needs_sigma() {
            self.check("vsigma", np, 2 * ns - 1, vsigma.len())?;
        }

        for ip in 0..np {
            let point = self.point(np, ip, rho, sigma);

            let (e, rho_tot) = match point {
                Some(p) => p,
                None => (Dual::zero(), 1.0),
            };

            zk[ip] = e.v / rho_tot;

            if self.nspin == XC_UNPOLARIZED {
                vrho[ip] = e.d[RA];
                if self.needs_sigma() {
                    vsigma[ip] = e.d[SAA];
                }
            } else {
                vrho[ip] = e.d[RA];
                vrho[np + ip] = e.d[RB];
                if self.needs_sigma() {
                    vsigma[ip] = e.d[SAA];
                    vsigma[np + ip] = e.d[SBB];
                    vsigma[2 * np + ip] = e.d[SAB];
                }
            }
        }

        Ok(())
    }

    /// Energy per volume at one point together with the total density, or
    /// `None` for a screened point.
    fn point(&self, np: usize, ip: usize, rho: &[f64], sigma: &[f64]) -> Option<(Dual, f64)> {
        let gga = self.needs_sigma();

        let vars = if self.nspin == XC_UNPOLARIZED {
            // unpolarized: slot RA holds rho, slot SAA holds sigma
            let r = Dual::var(rho[ip].max(0.0), RA);
            let s = if gga {
                Dual::var(sigma[ip], SAA)
            } else {
                Dual::zero()
            };
            let half = 0.5 * r;
            let quarter = 0.25 * s;
            Vars {
                ra: half,
                rb: half,
                saa: quarter,
                sbb: quarter,
                sab: quarter,
            }
        } else {
            let (saa, sbb, sab) = if gga {
                (
                    Dual::var(sigma[ip], SAA),
                    Dual::var(sigma[np + ip], SBB),
                    Dual::var(sigma[2 * np + ip], SAB),
                )
            } else {
                (Dual::zero(), Dual::zero(), Dual::zero())
            };
            Vars {
                ra: Dual::var(rho[ip].max(0.0), RA),
                rb: Dual::var(rho[np + ip].max(0.0), RB),
                saa,
                sbb,
                sab,
            }
        };

        let rho_tot = vars.ra.v + vars.rb.v;
        if rho_tot <= self.screen.dens {
            return None;
        }

        let mut e = Dual::zero();
        for (w, term) in self.info.terms {
            e += *w * term.energy(&vars, &self.screen);
        }

        Some((e, rho_tot))
    }
}
