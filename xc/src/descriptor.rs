//! Static description of a functional: family, hybrid mixing, numerical
//! thresholds and the builtin point kernel.

use crate::correlation::{self, lyp, pbe_c};
use crate::error::{XcError, XcResult};
use crate::exchange::{b88, pbe, slater};
use crate::families::{GgaKernel, LdaKernel, Screening};
use crate::functional::Functional;
use crate::hybrid;
use crate::traits::XCFamily;
use std::fmt;
use xcconsts::{DENS_THRESHOLD, ZETA_THRESHOLD};

/// Tagged handle to the builtin point kernel.
#[derive(Clone, Copy)]
pub enum KernelImpl {
    Lda(&'static dyn LdaKernel),
    Gga(&'static dyn GgaKernel),
}

#[derive(Clone, Copy)]
pub struct FunctionalDescriptor {
    pub functional: Functional,
    pub family: XCFamily,
    /// exact-exchange fraction, 0 for non-hybrids
    pub exx: f64,
    pub dens_threshold: f64,
    pub zeta_threshold: f64,
    pub kernel: KernelImpl,
}

impl FunctionalDescriptor {
    pub fn new(functional: Functional) -> FunctionalDescriptor {
        use Functional::*;

        let (kernel, exx) = match functional {
            SlaterExchange => (KernelImpl::Lda(&slater::SLATER), 0.0),
            VWN_RPA => (KernelImpl::Lda(&correlation::VWN_RPA), 0.0),
            VWN5 => (KernelImpl::Lda(&correlation::VWN5), 0.0),
            PZ81 => (KernelImpl::Lda(&correlation::PZ81), 0.0),
            PW91_LDA => (KernelImpl::Lda(&correlation::PW91_LDA), 0.0),
            PW91_LDA_MOD => (KernelImpl::Lda(&correlation::PW91_LDA_MOD), 0.0),
            B88 => (KernelImpl::Gga(&b88::B88_X), 0.0),
            LYP => (KernelImpl::Gga(&lyp::LYP), 0.0),
            PBE_X => (KernelImpl::Gga(&pbe::PBE_X), 0.0),
            RevPBE_X => (KernelImpl::Gga(&pbe::REVPBE_X), 0.0),
            PBE_C => (KernelImpl::Gga(&pbe_c::PBE_C), 0.0),
            B3LYP => (KernelImpl::Gga(&hybrid::B3LYP), hybrid::B3LYP_EXX),
            PBE0 => (KernelImpl::Gga(&hybrid::PBE0), hybrid::PBE0_EXX),
        };

        let family = match kernel {
            KernelImpl::Lda(_) => XCFamily::LDA,
            KernelImpl::Gga(_) => XCFamily::GGA,
        };

        FunctionalDescriptor {
            functional,
            family,
            exx,
            dens_threshold: DENS_THRESHOLD,
            zeta_threshold: ZETA_THRESHOLD,
            kernel,
        }
    }

    /// Same descriptor with another density threshold.
    pub fn with_dens_threshold(mut self, thr: f64) -> FunctionalDescriptor {
        self.dens_threshold = thr;
        self
    }

    /// Density threshold must be finite and positive, the zeta threshold
    /// finite and in `[0, 1)`.
    pub fn check_thresholds(&self) -> XcResult<()> {
        let thr = self.dens_threshold;
        if !(thr.is_finite() && thr > 0.0) {
            return Err(XcError::InvalidArgument(format!(
                "{}: density threshold must be finite and positive, got {}",
                self.functional, thr
            )));
        }

        let zthr = self.zeta_threshold;
        if !(zthr.is_finite() && (0.0..1.0).contains(&zthr)) {
            return Err(XcError::InvalidArgument(format!(
                "{}: zeta threshold must lie in [0, 1), got {}",
                self.functional, zthr
            )));
        }

        Ok(())
    }

    pub fn is_lda(&self) -> bool {
        self.family == XCFamily::LDA
    }

    pub fn is_gga(&self) -> bool {
        self.family == XCFamily::GGA
    }

    pub fn is_mgga(&self) -> bool {
        self.family == XCFamily::MetaGGA
    }

    pub fn is_hyb(&self) -> bool {
        self.exx != 0.0
    }

    pub fn screening(&self) -> Screening {
        Screening {
            dens: self.dens_threshold,
            zeta: self.zeta_threshold,
        }
    }
}

impl fmt::Debug for FunctionalDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionalDescriptor")
            .field("functional", &self.functional)
            .field("family", &self.family)
            .field("exx", &self.exx)
            .field("dens_threshold", &self.dens_threshold)
            .field("zeta_threshold", &self.zeta_threshold)
            .finish()
    }
}
