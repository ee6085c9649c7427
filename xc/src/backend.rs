//! The seam between the facade and the evaluation engines.
//!
//! Slices handed to a backend are exactly as long as the layout requires;
//! the facade checks and trims them beforehand. Gradient buffers are empty
//! for LDA functionals, and so is `vrho`/`vsigma` in energy-only calls.

use crate::descriptor::FunctionalDescriptor;
use crate::error::XcResult;
use crate::layout::BufferLayout;
use crate::traits::Backend;

/// How computed values land in an output buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Write {
    /// `out[i] = computed[i]`
    Overwrite,
    /// `out[i] += alpha * computed[i]`
    Accumulate(f64),
}

impl Write {
    #[inline]
    pub fn apply(&self, out: &mut f64, x: f64) {
        match *self {
            Write::Overwrite => *out = x,
            Write::Accumulate(alpha) => *out += alpha * x,
        }
    }
}

pub trait XcBackend: Send + Sync {
    fn kind(&self) -> Backend;

    fn descriptor(&self) -> &FunctionalDescriptor;

    fn layout(&self) -> &BufferLayout;

    fn exc(&self, npts: usize, rho: &[f64], sigma: &[f64], exc: &mut [f64], write: Write)
        -> XcResult<()>;

    #[allow(clippy::too_many_arguments)]
    fn exc_vxc(
        &self,
        npts: usize,
        rho: &[f64],
        sigma: &[f64],
        exc: &mut [f64],
        vrho: &mut [f64],
        vsigma: &mut [f64],
        write: Write,
    ) -> XcResult<()>;
}
