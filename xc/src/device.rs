//! Device-resident evaluation.
//!
//! Each call validates its arguments, then enqueues one launch on the given
//! stream and returns. The launch runs the same backend evaluation as the
//! host path. Results become visible after `Stream::synchronize`, which
//! also reports a failed launch; the outputs of a failed launch are left
//! untouched.

use crate::backend::Write;
use crate::error::{XcError, XcResult};
use crate::kernel::{Shape, XCKernel};
use xcdevice::{DeviceBuffer, DeviceError, Stream};

/// Buffers of one device call. Handles are cloned into the launch.
struct DeviceArgs {
    rho: DeviceBuffer,
    sigma: Option<DeviceBuffer>,
    exc: DeviceBuffer,
    vrho: Option<DeviceBuffer>,
    vsigma: Option<DeviceBuffer>,
}

impl DeviceArgs {
    fn all(&self) -> Vec<(&'static str, &DeviceBuffer)> {
        let mut v = vec![("rho", &self.rho), ("exc", &self.exc)];
        v.extend(self.sigma.iter().map(|b| ("sigma", b)));
        v.extend(self.vrho.iter().map(|b| ("vrho", b)));
        v.extend(self.vsigma.iter().map(|b| ("vsigma", b)));
        v
    }
}

fn apply(out: &DeviceBuffer, computed: &[f64], write: Write) -> XcResult<()> {
    let mut out = out.write()?;
    for (o, x) in out.iter_mut().zip(computed) {
        write.apply(o, *x);
    }
    Ok(())
}

impl XCKernel {
    fn enqueue(
        &self,
        name: &'static str,
        shape: Shape,
        npts: usize,
        args: DeviceArgs,
        write: Write,
        stream: &Stream,
    ) -> XcResult<()> {
        self.check_shape(shape)?;

        let l = *self.layout();
        self.check_len("rho", args.rho.len(), l.rho_len(npts))?;
        self.check_len("exc", args.exc.len(), l.exc_len(npts))?;
        if let Some(sigma) = &args.sigma {
            self.check_len("sigma", sigma.len(), l.sigma_len(npts))?;
        }
        if let Some(vrho) = &args.vrho {
            self.check_len("vrho", vrho.len(), l.vrho_len(npts))?;
        }
        if let Some(vsigma) = &args.vsigma {
            self.check_len("vsigma", vsigma.len(), l.vsigma_len(npts))?;
        }

        {
            let bufs = args.all();
            for (i, (a, x)) in bufs.iter().enumerate() {
                for (b, y) in &bufs[i + 1..] {
                    if x.same_memory(y) {
                        return Err(XcError::InvalidArgument(format!(
                            "{} and {} refer to the same device memory",
                            a, b
                        )));
                    }
                }
            }
        }

        let kernel = self.clone();
        stream.launch(name, move || {
            kernel
                .device_body(npts, &args, write)
                .map_err(|e| DeviceError::Launch {
                    name,
                    reason: e.to_string(),
                })
        })?;

        Ok(())
    }

    /// Runs on the stream worker.
    fn device_body(&self, npts: usize, args: &DeviceArgs, write: Write) -> XcResult<()> {
        let l = *self.layout();

        let rho = args.rho.read()?;
        let sigma = match &args.sigma {
            Some(s) => Some(s.read()?),
            None => None,
        };
        let rho = &rho[..l.rho_len(npts)];
        let sigma: &[f64] = match &sigma {
            Some(s) => &s[..l.sigma_len(npts)],
            None => &[],
        };

        let mut exc = vec![0.0; l.exc_len(npts)];

        match &args.vrho {
            None => {
                self.backend.exc(npts, rho, sigma, &mut exc, Write::Overwrite)?;
                apply(&args.exc, &exc, write)?;
            }

            Some(vrho_buf) => {
                let mut vrho = vec![0.0; l.vrho_len(npts)];
                let mut vsigma = vec![0.0; l.vsigma_len(npts)];

                self.backend.exc_vxc(
                    npts,
                    rho,
                    sigma,
                    &mut exc,
                    &mut vrho,
                    &mut vsigma,
                    Write::Overwrite,
                )?;

                apply(&args.exc, &exc, write)?;
                apply(vrho_buf, &vrho, write)?;
                if let Some(vsigma_buf) = &args.vsigma {
                    apply(vsigma_buf, &vsigma, write)?;
                }
            }
        }

        Ok(())
    }

    // LDA-shaped device calls

    pub fn eval_exc_device(
        &self,
        npts: usize,
        rho: &DeviceBuffer,
        exc: &DeviceBuffer,
        stream: &Stream,
    ) -> XcResult<()> {
        let args = DeviceArgs {
            rho: rho.clone(),
            sigma: None,
            exc: exc.clone(),
            vrho: None,
            vsigma: None,
        };
        self.enqueue("eval_exc", Shape::Lda, npts, args, Write::Overwrite, stream)
    }

    pub fn eval_exc_vxc_device(
        &self,
        npts: usize,
        rho: &DeviceBuffer,
        exc: &DeviceBuffer,
        vrho: &DeviceBuffer,
        stream: &Stream,
    ) -> XcResult<()> {
        let args = DeviceArgs {
            rho: rho.clone(),
            sigma: None,
            exc: exc.clone(),
            vrho: Some(vrho.clone()),
            vsigma: None,
        };
        self.enqueue("eval_exc_vxc", Shape::Lda, npts, args, Write::Overwrite, stream)
    }

    pub fn eval_exc_inc_device(
        &self,
        alpha: f64,
        npts: usize,
        rho: &DeviceBuffer,
        exc: &DeviceBuffer,
        stream: &Stream,
    ) -> XcResult<()> {
        let args = DeviceArgs {
            rho: rho.clone(),
            sigma: None,
            exc: exc.clone(),
            vrho: None,
            vsigma: None,
        };
        self.enqueue("eval_exc_inc", Shape::Lda, npts, args, Write::Accumulate(alpha), stream)
    }

    pub fn eval_exc_vxc_inc_device(
        &self,
        alpha: f64,
        npts: usize,
        rho: &DeviceBuffer,
        exc: &DeviceBuffer,
        vrho: &DeviceBuffer,
        stream: &Stream,
    ) -> XcResult<()> {
        let args = DeviceArgs {
            rho: rho.clone(),
            sigma: None,
            exc: exc.clone(),
            vrho: Some(vrho.clone()),
            vsigma: None,
        };
        self.enqueue(
            "eval_exc_vxc_inc",
            Shape::Lda,
            npts,
            args,
            Write::Accumulate(alpha),
            stream,
        )
    }

    // GGA-shaped device calls

    pub fn eval_exc_gga_device(
        &self,
        npts: usize,
        rho: &DeviceBuffer,
        sigma: &DeviceBuffer,
        exc: &DeviceBuffer,
        stream: &Stream,
    ) -> XcResult<()> {
        let args = DeviceArgs {
            rho: rho.clone(),
            sigma: Some(sigma.clone()),
            exc: exc.clone(),
            vrho: None,
            vsigma: None,
        };
        self.enqueue("eval_exc_gga", Shape::Gga, npts, args, Write::Overwrite, stream)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn eval_exc_vxc_gga_device(
        &self,
        npts: usize,
        rho: &DeviceBuffer,
        sigma: &DeviceBuffer,
        exc: &DeviceBuffer,
        vrho: &DeviceBuffer,
        vsigma: &DeviceBuffer,
        stream: &Stream,
    ) -> XcResult<()> {
        let args = DeviceArgs {
            rho: rho.clone(),
            sigma: Some(sigma.clone()),
            exc: exc.clone(),
            vrho: Some(vrho.clone()),
            vsigma: Some(vsigma.clone()),
        };
        self.enqueue("eval_exc_vxc_gga", Shape::Gga, npts, args, Write::Overwrite, stream)
    }

    pub fn eval_exc_inc_gga_device(
        &self,
        alpha: f64,
        npts: usize,
        rho: &DeviceBuffer,
        sigma: &DeviceBuffer,
        exc: &DeviceBuffer,
        stream: &Stream,
    ) -> XcResult<()> {
        let args = DeviceArgs {
            rho: rho.clone(),
            sigma: Some(sigma.clone()),
            exc: exc.clone(),
            vrho: None,
            vsigma: None,
        };
        self.enqueue(
            "eval_exc_inc_gga",
            Shape::Gga,
            npts,
            args,
            Write::Accumulate(alpha),
            stream,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn eval_exc_vxc_inc_gga_device(
        &self,
        alpha: f64,
        npts: usize,
        rho: &DeviceBuffer,
        sigma: &DeviceBuffer,
        exc: &DeviceBuffer,
        vrho: &DeviceBuffer,
        vsigma: &DeviceBuffer,
        stream: &Stream,
    ) -> XcResult<()> {
        let args = DeviceArgs {
            rho: rho.clone(),
            sigma: Some(sigma.clone()),
            exc: exc.clone(),
            vrho: Some(vrho.clone()),
            vsigma: Some(vsigma.clone()),
        };
        self.enqueue(
            "eval_exc_vxc_inc_gga",
            Shape::Gga,
            npts,
            args,
            Write::Accumulate(alpha),
            stream,
        )
    }
}
