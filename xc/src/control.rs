//! Kernel settings read from a `key = value` control file or from JSON.
//!
//! ```text
//! # comment
//! xc_backend = builtin        # builtin | external
//! xc_scheme = PBE0            # any registered functional name
//! spin_scheme = spin          # nonspin | spin | unpolarized | polarized
//! xc_dens_threshold = 1E-12   # optional
//! xc_parallel_min_len = 8192
//! ```

use crate::builtin::{BuiltinBackend, PARALLEL_MIN_LEN};
use crate::descriptor::FunctionalDescriptor;
use crate::error::{XcError, XcResult};
use crate::functional::Functional;
use crate::kernel::XCKernel;
use crate::traits::{Backend, Spin};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct XcControl {
    backend: Backend,
    functional: String,
    spin: Spin,
    dens_threshold: Option<f64>,
    parallel_min_len: usize,
}

impl Default for XcControl {
    fn default() -> Self {
        XcControl {
            backend: Backend::Builtin,
            functional: "PBE0".to_string(),
            spin: Spin::Unpolarized,
            dens_threshold: None,
            parallel_min_len: PARALLEL_MIN_LEN,
        }
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> XcResult<T> {
    value
        .parse()
        .map_err(|_| XcError::InvalidArgument(format!("invalid value '{}' for {}", value, key)))
}

impl XcControl {
    pub fn new() -> XcControl {
        XcControl::default()
    }

    pub fn get_backend(&self) -> Backend {
        self.backend
    }

    pub fn get_functional(&self) -> &str {
        &self.functional
    }

    pub fn get_spin(&self) -> Spin {
        self.spin
    }

    pub fn get_dens_threshold(&self) -> Option<f64> {
        self.dens_threshold
    }

    pub fn get_parallel_min_len(&self) -> usize {
        self.parallel_min_len
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> XcResult<XcControl> {
        let file = File::open(path.as_ref())?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;

        log::info!("reading xc settings from {}", path.as_ref().display());

        XcControl::from_lines(lines.iter().map(|s| s.as_str()))
    }

    pub fn from_str_content(text: &str) -> XcResult<XcControl> {
        XcControl::from_lines(text.lines())
    }

    pub fn from_json(text: &str) -> XcResult<XcControl> {
        let ctrl: XcControl = serde_json::from_str(text)?;
        ctrl.validate()?;
        Ok(ctrl)
    }

    fn from_lines<'a, I>(lines: I) -> XcResult<XcControl>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut ctrl = XcControl::default();

        for line in lines {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            let s: Vec<&str> = line.split('=').map(|x| x.trim()).collect();
            if s.len() != 2 {
                return Err(XcError::InvalidArgument(format!(
                    "expected 'key = value', got '{}'",
                    line
                )));
            }

            match s[0] {
                "xc_backend" => {
                    ctrl.backend = s[1].parse()?;
                }

                "xc_scheme" => {
                    ctrl.functional = s[1].to_string();
                }

                "spin_scheme" => {
                    ctrl.spin = s[1].parse()?;
                }

                "xc_dens_threshold" => {
                    ctrl.dens_threshold = Some(parse_value(s[0], s[1])?);
                }

                "xc_parallel_min_len" => {
                    ctrl.parallel_min_len = parse_value(s[0], s[1])?;
                }

                _ => {
                    return Err(XcError::InvalidArgument(format!(
                        "unknown parameter : {}",
                        line
                    )));
                }
            }
        }

        ctrl.validate()?;

        Ok(ctrl)
    }

    fn validate(&self) -> XcResult<()> {
        Functional::from_str(&self.functional)?;

        if let Some(thr) = self.dens_threshold {
            if !(thr.is_finite() && thr > 0.0) {
                return Err(XcError::InvalidArgument(format!(
                    "xc_dens_threshold must be positive, got {}",
                    thr
                )));
            }
        }

        if self.parallel_min_len == 0 {
            return Err(XcError::InvalidArgument(
                "xc_parallel_min_len must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Builds the kernel these settings describe.
    pub fn build(&self) -> XcResult<XCKernel> {
        self.validate()?;

        let mut desc = FunctionalDescriptor::new(self.functional.parse()?);
        if let Some(thr) = self.dens_threshold {
            desc = desc.with_dens_threshold(thr);
        }
        desc.check_thresholds()?;

        match self.backend {
            Backend::Builtin => {
                let backend = BuiltinBackend::new(desc, self.spin)
                    .with_parallel_min_len(self.parallel_min_len);
                Ok(XCKernel::from_backend(Arc::new(backend)))
            }
            Backend::External => XCKernel::with_descriptor(Backend::External, desc, self.spin),
        }
    }

    pub fn display(&self) {
        const OUT_WIDTH1: usize = 28;
        const OUT_WIDTH2: usize = 18;

        let thr = self
            .dens_threshold
            .map_or_else(|| "default".to_string(), |t| format!("{:e}", t));

        for (key, value) in [
            ("xc_backend", self.backend.to_string()),
            ("xc_scheme", self.functional.clone()),
            ("spin_scheme", self.spin.to_string()),
            ("xc_dens_threshold", thr),
            ("xc_parallel_min_len", self.parallel_min_len.to_string()),
        ] {
            log::info!(
                "   {:<width1$} = {:>width2$}",
                key,
                value,
                width1 = OUT_WIDTH1,
                width2 = OUT_WIDTH2
            );
        }
    }
}
