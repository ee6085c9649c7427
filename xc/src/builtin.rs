//! Builtin backend: drives the closed-form point kernels over the grid.
//! Handles chunking and parallelization.

use crate::backend::{Write, XcBackend};
use crate::descriptor::{FunctionalDescriptor, KernelImpl};
use crate::error::XcResult;
use crate::families::{GgaPoint, Screening};
use crate::layout::BufferLayout;
use crate::traits::{Backend, Spin};
use itertools::multizip;
use rayon::prelude::*;

pub const PARALLEL_MIN_LEN: usize = 8192;

/// Points per work item; cache-friendly size
const CHUNK_SIZE: usize = 1024;

pub struct BuiltinBackend {
    desc: FunctionalDescriptor,
    layout: BufferLayout,
    parallel_min_len: usize,
}

/// Results of one point in the engine's ordering.
type PointFn<'a> = Box<dyn Fn(&[f64], &[f64]) -> GgaPoint + Sync + 'a>;

fn chunks_of(buf: &mut [f64], stride: usize, nchunks: usize) -> Vec<&mut [f64]> {
    if stride == 0 {
        (0..nchunks).map(|_| Default::default()).collect()
    } else {
        buf.chunks_mut(CHUNK_SIZE * stride).collect()
    }
}

impl BuiltinBackend {
    pub fn new(desc: FunctionalDescriptor, spin: Spin) -> BuiltinBackend {
        BuiltinBackend {
            desc,
            layout: BufferLayout::new(desc.family, spin),
            parallel_min_len: PARALLEL_MIN_LEN,
        }
    }

    /// Minimum number of points before work is spread over rayon threads.
    pub fn with_parallel_min_len(mut self, len: usize) -> BuiltinBackend {
        self.parallel_min_len = len;
        self
    }

    #[inline]
    fn use_parallel_for_len(&self, len: usize) -> bool {
        len >= self.parallel_min_len && rayon::current_num_threads() > 1
    }

    /// Selects the point evaluation once per call.
    fn point_fn(&self) -> PointFn<'_> {
        let scr: Screening = self.desc.screening();

        match (self.desc.kernel, self.layout.spin) {
            (KernelImpl::Lda(k), Spin::Unpolarized) => {
                Box::new(move |rho: &[f64], _: &[f64]| -> GgaPoint {
                    k.unpolarized(rho[0], &scr).into()
                })
            }
            (KernelImpl::Lda(k), Spin::Polarized) => {
                Box::new(move |rho: &[f64], _: &[f64]| -> GgaPoint {
                    k.polarized([rho[0], rho[1]], &scr).into()
                })
            }
            (KernelImpl::Gga(k), Spin::Unpolarized) => {
                Box::new(move |rho: &[f64], sigma: &[f64]| -> GgaPoint {
                    k.unpolarized(rho[0], sigma[0], &scr)
                })
            }
            (KernelImpl::Gga(k), Spin::Polarized) => {
                Box::new(move |rho: &[f64], sigma: &[f64]| -> GgaPoint {
                    k.polarized([rho[0], rho[1]], [sigma[0], sigma[1], sigma[2]], &scr)
                })
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn drive(
        &self,
        npts: usize,
        rho: &[f64],
        sigma: &[f64],
        exc: &mut [f64],
        vrho: &mut [f64],
        vsigma: &mut [f64],
        write: Write,
    ) {
        if npts == 0 {
            return;
        }

        let ns = self.layout.rho_stride();
        let nsig = self.layout.sigma_stride();
        let with_vxc = !vrho.is_empty();
        let nv = if with_vxc { ns } else { 0 };
        let nvs = if with_vxc { nsig } else { 0 };

        let point = self.point_fn();
        let thr = self.desc.dens_threshold;

        let work = |(ic, (exc, vrho, vsigma)): (usize, (&mut [f64], &mut [f64], &mut [f64]))| {
            let first = ic * CHUNK_SIZE;

            for (j, e) in exc.iter_mut().enumerate() {
                let ip = first + j;
                let r = &rho[ip * ns..(ip + 1) * ns];
                let s = &sigma[ip * nsig..(ip + 1) * nsig];

                let tot: f64 = r.iter().map(|x| x.max(0.0)).sum();

                let p = if tot <= thr {
                    GgaPoint::default()
                } else {
                    let clamped = [r[0].max(0.0), r.get(1).map_or(0.0, |x| x.max(0.0))];
                    let mut p = point(&clamped[..ns], s);
                    p.e /= tot;
                    p
                };

                write.apply(e, p.e);

                for k in 0..nv {
                    write.apply(&mut vrho[j * nv + k], p.vrho[k]);
                }
                for k in 0..nvs {
                    write.apply(&mut vsigma[j * nvs + k], p.vsigma[k]);
                }
            }
        };

        let nchunks = (npts + CHUNK_SIZE - 1) / CHUNK_SIZE;
        let exc_chunks = chunks_of(exc, 1, nchunks);
        let vrho_chunks = chunks_of(vrho, nv, nchunks);
        let vsigma_chunks = chunks_of(vsigma, nvs, nchunks);

        if self.use_parallel_for_len(npts) {
            exc_chunks
                .into_par_iter()
                .zip(vrho_chunks)
                .zip(vsigma_chunks)
                .map(|((e, v), s)| (e, v, s))
                .enumerate()
                .for_each(work);
        } else {
            multizip((exc_chunks, vrho_chunks, vsigma_chunks))
                .enumerate()
                .for_each(work);
        }
    }
}

impl XcBackend for BuiltinBackend {
    fn kind(&self) -> Backend {
        Backend::Builtin
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
        self.drive(npts, rho, sigma, exc, &mut [], &mut [], write);
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
        self.drive(npts, rho, sigma, exc, vrho, vsigma, write);
        Ok(())
    }
}
