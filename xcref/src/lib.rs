//! Reference exchange-correlation library.
//!
//! A self-contained evaluator addressed by integer functional codes. It
//! keeps its own buffer conventions (channel-blocked spin data, gradient
//! contractions ordered `uu, dd, ud`) and obtains every potential by
//! forward-mode differentiation of the energy per volume.

mod dual;
mod error;
mod func;
mod gga;
mod lda;

pub use dual::*;
pub use error::*;
pub use func::*;

/// Screening thresholds applied while evaluating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Screen {
    pub dens: f64,
    pub zeta: f64,
}

/// Spin-resolved inputs of one grid point.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Vars {
    pub ra: Dual,
    pub rb: Dual,
    pub saa: Dual,
    pub sbb: Dual,
    pub sab: Dual,
}

#[cfg(test)]
mod tests;
