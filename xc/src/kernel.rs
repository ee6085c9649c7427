//! `XCKernel`: the user-facing handle binding a backend, a functional and
//! a spin treatment.

use crate::backend::{Write, XcBackend};
use crate::builtin::BuiltinBackend;
use crate::descriptor::FunctionalDescriptor;
use crate::error::{XcError, XcResult};
use crate::functional::Functional;
use crate::layout::BufferLayout;
use crate::libref::ExternalBackend;
use crate::traits::{Backend, Spin, XCFamily};
use std::fmt;
use std::sync::Arc;

/// Immutable, cheaply clonable XC kernel.
///
/// Host calls block until every point is evaluated. Buffers follow the
/// interleaved layout described by [`BufferLayout`]; any slice may be longer
/// than required, only the leading part is read or written.
#[derive(Clone)]
pub struct XCKernel {
    pub(crate) backend: Arc<dyn XcBackend>,
}

impl fmt::Debug for XCKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XCKernel")
            .field("backend", &self.backend())
            .field("functional", &self.functional())
            .field("spin", &self.spin())
            .finish()
    }
}

/// Which of the two call shapes a caller used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    Lda,
    Gga,
}

impl XCKernel {
    pub fn new(backend: Backend, functional: Functional, spin: Spin) -> XcResult<XCKernel> {
        XCKernel::with_descriptor(backend, FunctionalDescriptor::new(functional), spin)
    }

    pub fn from_name(backend: Backend, name: &str, spin: Spin) -> XcResult<XCKernel> {
        XCKernel::new(backend, name.parse()?, spin)
    }

    /// Binds a possibly customized descriptor.
    pub fn with_descriptor(
        backend: Backend,
        desc: FunctionalDescriptor,
        spin: Spin,
    ) -> XcResult<XCKernel> {
        desc.check_thresholds().map_err(|e| {
            log::error!("{}", e);
            e
        })?;

        let backend: Arc<dyn XcBackend> = match backend {
            Backend::Builtin => Arc::new(BuiltinBackend::new(desc, spin)),
            Backend::External => Arc::new(ExternalBackend::new(desc, spin).map_err(|e| {
                log::error!("{}", e);
                e
            })?),
        };

        Ok(XCKernel::from_backend(backend))
    }

    pub fn from_backend(backend: Arc<dyn XcBackend>) -> XCKernel {
        log::debug!(
            "xc kernel: {} via {} backend, {}",
            backend.descriptor().functional,
            backend.kind(),
            backend.layout().spin
        );

        XCKernel { backend }
    }

    pub(crate) fn descriptor(&self) -> &FunctionalDescriptor {
        self.backend.descriptor()
    }

    pub(crate) fn layout(&self) -> &BufferLayout {
        self.backend.layout()
    }

    pub fn is_lda(&self) -> bool {
        self.descriptor().is_lda()
    }

    pub fn is_gga(&self) -> bool {
        self.descriptor().is_gga()
    }

    pub fn is_mgga(&self) -> bool {
        self.descriptor().is_mgga()
    }

    pub fn is_hyb(&self) -> bool {
        self.descriptor().is_hyb()
    }

    pub fn is_polarized(&self) -> bool {
        self.spin() == Spin::Polarized
    }

    pub fn hyb_exx(&self) -> f64 {
        self.descriptor().exx
    }

    pub fn family(&self) -> XCFamily {
        self.descriptor().family
    }

    pub fn functional(&self) -> Functional {
        self.descriptor().functional
    }

    pub fn backend(&self) -> Backend {
        self.backend.kind()
    }

    pub fn spin(&self) -> Spin {
        self.layout().spin
    }

    pub fn name(&self) -> &'static str {
        self.functional().as_str()
    }

    pub fn dens_threshold(&self) -> f64 {
        self.descriptor().dens_threshold
    }

    pub fn rho_buffer_len(&self, npts: usize) -> usize {
        self.layout().rho_len(npts)
    }

    pub fn sigma_buffer_len(&self, npts: usize) -> usize {
        self.layout().sigma_len(npts)
    }

    pub fn exc_buffer_len(&self, npts: usize) -> usize {
        self.layout().exc_len(npts)
    }

    pub fn vrho_buffer_len(&self, npts: usize) -> usize {
        self.layout().vrho_len(npts)
    }

    pub fn vsigma_buffer_len(&self, npts: usize) -> usize {
        self.layout().vsigma_len(npts)
    }

    pub(crate) fn check_shape(&self, shape: Shape) -> XcResult<()> {
        let ok = match shape {
            Shape::Lda => self.family() == XCFamily::LDA,
            Shape::Gga => self.family().needs_sigma(),
        };

        if ok {
            Ok(())
        } else {
            Err(XcError::InvalidArgument(format!(
                "{:?}-shaped call on {} which is {:?}",
                shape,
                self.name(),
                self.family()
            )))
        }
    }

    pub(crate) fn check_len(&self, what: &str, found: usize, required: usize) -> XcResult<()> {
        if found < required {
            return Err(XcError::InvalidArgument(format!(
                "{} buffer holds {} values, {} required",
                what, found, required
            )));
        }
        Ok(())
    }

    fn log_failure<T>(&self, res: XcResult<T>) -> XcResult<T> {
        if let Err(e) = &res {
            log::error!("{}", e);
        }
        res
    }

    /// Runs an energy-only evaluation after validating shape and lengths.
    pub(crate) fn run_exc(
        &self,
        shape: Shape,
        npts: usize,
        rho: &[f64],
        sigma: &[f64],
        exc: &mut [f64],
        write: Write,
    ) -> XcResult<()> {
        self.check_shape(shape)?;

        let l = self.layout();
        self.check_len("rho", rho.len(), l.rho_len(npts))?;
        self.check_len("sigma", sigma.len(), l.sigma_len(npts))?;
        self.check_len("exc", exc.len(), l.exc_len(npts))?;

        let res = self.backend.exc(
            npts,
            &rho[..l.rho_len(npts)],
            &sigma[..l.sigma_len(npts)],
            &mut exc[..l.exc_len(npts)],
            write,
        );

        self.log_failure(res)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn run_exc_vxc(
        &self,
        shape: Shape,
        npts: usize,
        rho: &[f64],
        sigma: &[f64],
        exc: &mut [f64],
        vrho: &mut [f64],
        vsigma: &mut [f64],
        write: Write,
    ) -> XcResult<()> {
        self.check_shape(shape)?;

        let l = self.layout();
        self.check_len("rho", rho.len(), l.rho_len(npts))?;
        self.check_len("sigma", sigma.len(), l.sigma_len(npts))?;
        self.check_len("exc", exc.len(), l.exc_len(npts))?;
        self.check_len("vrho", vrho.len(), l.vrho_len(npts))?;
        self.check_len("vsigma", vsigma.len(), l.vsigma_len(npts))?;

        let res = self.backend.exc_vxc(
            npts,
            &rho[..l.rho_len(npts)],
            &sigma[..l.sigma_len(npts)],
            &mut exc[..l.exc_len(npts)],
            &mut vrho[..l.vrho_len(npts)],
            &mut vsigma[..l.vsigma_len(npts)],
            write,
        );

        self.log_failure(res)
    }

    // LDA-shaped host calls

    pub fn eval_exc(&self, npts: usize, rho: &[f64], exc: &mut [f64]) -> XcResult<()> {
        self.run_exc(Shape::Lda, npts, rho, &[], exc, Write::Overwrite)
    }

    pub fn eval_exc_vxc(
        &self,
        npts: usize,
        rho: &[f64],
        exc: &mut [f64],
        vrho: &mut [f64],
    ) -> XcResult<()> {
        self.run_exc_vxc(Shape::Lda, npts, rho, &[], exc, vrho, &mut [], Write::Overwrite)
    }

    /// `exc += alpha * computed`
    pub fn eval_exc_inc(
        &self,
        alpha: f64,
        npts: usize,
        rho: &[f64],
        exc: &mut [f64],
    ) -> XcResult<()> {
        self.run_exc(Shape::Lda, npts, rho, &[], exc, Write::Accumulate(alpha))
    }

    pub fn eval_exc_vxc_inc(
        &self,
        alpha: f64,
        npts: usize,
        rho: &[f64],
        exc: &mut [f64],
        vrho: &mut [f64],
    ) -> XcResult<()> {
        self.run_exc_vxc(
            Shape::Lda,
            npts,
            rho,
            &[],
            exc,
            vrho,
            &mut [],
            Write::Accumulate(alpha),
        )
    }

    // GGA-shaped host calls

    pub fn eval_exc_gga(
        &self,
        npts: usize,
        rho: &[f64],
        sigma: &[f64],
        exc: &mut [f64],
    ) -> XcResult<()> {
        self.run_exc(Shape::Gga, npts, rho, sigma, exc, Write::Overwrite)
    }

    pub fn eval_exc_vxc_gga(
        &self,
        npts: usize,
        rho: &[f64],
        sigma: &[f64],
        exc: &mut [f64],
        vrho: &mut [f64],
        vsigma: &mut [f64],
    ) -> XcResult<()> {
        self.run_exc_vxc(Shape::Gga, npts, rho, sigma, exc, vrho, vsigma, Write::Overwrite)
    }

    pub fn eval_exc_inc_gga(
        &self,
        alpha: f64,
        npts: usize,
        rho: &[f64],
        sigma: &[f64],
        exc: &mut [f64],
    ) -> XcResult<()> {
        self.run_exc(Shape::Gga, npts, rho, sigma, exc, Write::Accumulate(alpha))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn eval_exc_vxc_inc_gga(
        &self,
        alpha: f64,
        npts: usize,
        rho: &[f64],
        sigma: &[f64],
        exc: &mut [f64],
        vrho: &mut [f64],
        vsigma: &mut [f64],
    ) -> XcResult<()> {
        self.run_exc_vxc(
            Shape::Gga,
            npts,
            rho,
            sigma,
            exc,
            vrho,
            vsigma,
            Write::Accumulate(alpha),
        )
    }
}
