//! External backend: adapter over the `xcref` reference library.
//!
//! The library keeps its own conventions. Polarized densities are stored
//! channel-blocked and the gradient contractions as blocks `(uu, dd, ud)`,
//! while this crate interleaves them per point as `(up, dn)` and
//! `(uu, ud, dd)`. The adapter converts in both directions around every
//! call.

use crate::backend::{Write, XcBackend};
use crate::descriptor::FunctionalDescriptor;
use crate::error::{XcError, XcResult};
use crate::functional::Functional;
use crate::layout::BufferLayout;
use crate::traits::{Backend, Spin, XCFamily};
use xcref::{FuncKind, RefError, XcFunc};

/// Library code of each functional.
pub fn external_code(functional: Functional) -> i32 {
    use Functional::*;

    match functional {
        SlaterExchange => xcref::XC_LDA_X,
        VWN_RPA => xcref::XC_LDA_C_VWN_RPA,
        VWN5 => xcref::XC_LDA_C_VWN,
        PZ81 => xcref::XC_LDA_C_PZ,
        PW91_LDA => xcref::XC_LDA_C_PW,
        PW91_LDA_MOD => xcref::XC_LDA_C_PW_MOD,
        B88 => xcref::XC_GGA_X_B88,
        LYP => xcref::XC_GGA_C_LYP,
        PBE_X => xcref::XC_GGA_X_PBE,
        RevPBE_X => xcref::XC_GGA_X_PBE_R,
        PBE_C => xcref::XC_GGA_C_PBE,
        B3LYP => xcref::XC_HYB_GGA_XC_B3LYP,
        PBE0 => xcref::XC_HYB_GGA_XC_PBEH,
    }
}

fn external_spin(spin: Spin) -> i32 {
    match spin {
        Spin::Unpolarized => xcref::XC_UNPOLARIZED,
        Spin::Polarized => xcref::XC_POLARIZED,
    }
}

pub struct ExternalBackend {
    desc: FunctionalDescriptor,
    layout: BufferLayout,
    func: XcFunc,
}

impl ExternalBackend {
    pub fn new(desc: FunctionalDescriptor, spin: Spin) -> XcResult<ExternalBackend> {
        let wrap = |call: &'static str| {
            move |e: RefError| XcError::BackendFailure {
                functional: desc.functional.to_string(),
                backend: Backend::External,
                call,
                source: Box::new(e),
            }
        };

        let mut func = XcFunc::init(external_code(desc.functional), external_spin(spin))
            .map_err(wrap("init"))?;
        func.set_dens_threshold(desc.dens_threshold)
            .map_err(wrap("set_dens_threshold"))?;
        func.set_zeta_threshold(desc.zeta_threshold)
            .map_err(wrap("set_zeta_threshold"))?;

        let family = match func.family() {
            FuncKind::Lda => XCFamily::LDA,
            FuncKind::Gga | FuncKind::HybGga => XCFamily::GGA,
        };
        assert_eq!(family, desc.family, "family of {}", desc.functional);
        assert_eq!(func.info().exx, desc.exx, "exx of {}", desc.functional);

        Ok(ExternalBackend {
            desc,
            layout: BufferLayout::new(desc.family, spin),
            func,
        })
    }

    fn failure(&self, call: &'static str, e: RefError) -> XcError {
        XcError::BackendFailure {
            functional: self.desc.functional.to_string(),
            backend: Backend::External,
            call,
            source: Box::new(e),
        }
    }

    fn is_polarized(&self) -> bool {
        self.layout.spin == Spin::Polarized
    }

    /// Interleaved `(up, dn)` pairs to `[up.. | dn..]`.
    fn rho_to_external(&self, npts: usize, rho: &[f64]) -> Vec<f64> {
        assert_eq!(rho.len(), self.layout.rho_len(npts));

        if !self.is_polarized() {
            return rho.to_vec();
        }

        let mut out = vec![0.0; rho.len()];
        for (ip, r) in rho.chunks_exact(2).enumerate() {
            out[ip] = r[0];
            out[npts + ip] = r[1];
        }
        out
    }

    /// Interleaved `(uu, ud, dd)` triples to `[uu.. | dd.. | ud..]`.
    fn sigma_to_external(&self, npts: usize, sigma: &[f64]) -> Vec<f64> {
        assert_eq!(sigma.len(), self.layout.sigma_len(npts));

        if !self.is_polarized() {
            return sigma.to_vec();
        }

        let mut out = vec![0.0; sigma.len()];
        for (ip, s) in sigma.chunks_exact(3).enumerate() {
            out[ip] = s[0];
            out[npts + ip] = s[2];
            out[2 * npts + ip] = s[1];
        }
        out
    }

    fn vrho_from_external(&self, npts: usize, ext: &[f64], vrho: &mut [f64], write: Write) {
        assert_eq!(ext.len(), vrho.len());

        if !self.is_polarized() {
            for (o, x) in vrho.iter_mut().zip(ext) {
                write.apply(o, *x);
            }
            return;
        }

        for (ip, v) in vrho.chunks_exact_mut(2).enumerate() {
            write.apply(&mut v[0], ext[ip]);
            write.apply(&mut v[1], ext[npts + ip]);
        }
    }

    fn vsigma_from_external(&self, npts: usize, ext: &[f64], vsigma: &mut [f64], write: Write) {
        assert_eq!(ext.len(), vsigma.len());

        if !self.is_polarized() {
            for (o, x) in vsigma.iter_mut().zip(ext) {
                write.apply(o, *x);
            }
            return;
        }

        for (ip, v) in vsigma.chunks_exact_mut(3).enumerate() {
            write.apply(&mut v[0], ext[ip]);
            write.apply(&mut v[1], ext[2 * npts + ip]);
            write.apply(&mut v[2], ext[npts + ip]);
        }
    }
}

impl XcBackend for ExternalBackend {
    fn kind(&self) -> Backend {
        Backend::External
    }

    fn descriptor(&self) -> &FunctionalDescriptor {
        &self.desc
    }

    fn layout(&self) -> &BufferLayout {
        &self.layout
    }

    fn exc(
        &self,
        npts: usize,
        rho: &[f64],
        sigma: &[f64],
        exc: &mut [f64],
        write: Write,
    ) -> XcResult<()> {
        assert_eq!(exc.len(), self.layout.exc_len(npts));

        let rho = self.rho_to_external(npts, rho);
        let sigma = self.sigma_to_external(npts, sigma);
        let mut zk = vec![0.0; npts];

        self.func
            .exc(npts, &rho, &sigma, &mut zk)
            .map_err(|e| self.failure("exc", e))?;

        for (o, x) in exc.iter_mut().zip(&zk) {
            write.apply(o, *x);
        }

        Ok(())
    }

    fn exc_vxc(
        &self,
        npts: usize,
        rho: &[f64],
        sigma: &[f64],
        exc: &mut [f64],
        vrho: &mut [f64],
        vsigma: &mut [f64],
        write: Write,
    ) -> XcResult<()> {
        assert_eq!(exc.len(), self.layout.exc_len(npts));
        assert_eq!(vrho.len(), self.layout.vrho_len(npts));
        assert_eq!(vsigma.len(), self.layout.vsigma_len(npts));

        let rho = self.rho_to_external(npts, rho);
        let sigma = self.sigma_to_external(npts, sigma);
        let mut zk = vec![0.0; npts];
        let mut ext_vrho = vec![0.0; vrho.len()];
        let mut ext_vsigma = vec![0.0; vsigma.len()];

        self.func
            .exc_vxc(npts, &rho, &sigma, &mut zk, &mut ext_vrho, &mut ext_vsigma)
            .map_err(|e| self.failure("exc_vxc", e))?;

        for (o, x) in exc.iter_mut().zip(&zk) {
            write.apply(o, *x);
        }
        self.vrho_from_external(npts, &ext_vrho, vrho, write);
        self.vsigma_from_external(npts, &ext_vsigma, vsigma, write);

        Ok(())
    }
}
