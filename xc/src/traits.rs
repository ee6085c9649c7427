//! Core enumerations shared by every layer of the engine.

use crate::error::XcError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Family of an XC functional.
/// This determines which call shape is valid and how long the buffers are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XCFamily {
    /// Local Density Approximation
    LDA,
    /// Generalized Gradient Approximation
    GGA,
    /// Meta-Generalized Gradient Approximation, shares the GGA buffer shape
    MetaGGA,
}

impl XCFamily {
    /// True for families that take the gradient invariant sigma.
    pub fn needs_sigma(&self) -> bool {
        !matches!(self, XCFamily::LDA)
    }
}

/// Spin treatment, fixed at kernel construction.
///
/// Parsed the same way from `key = value` files and JSON: `unpolarized`
/// or `nonspin`, `polarized` or `spin`, in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Spin {
    Unpolarized,
    Polarized,
}

impl Spin {
    /// Number of density channels.
    pub fn nchannels(&self) -> usize {
        match self {
            Spin::Unpolarized => 1,
            Spin::Polarized => 2,
        }
    }

    /// Number of gradient contractions per point.
    pub fn nsigma(&self) -> usize {
        match self {
            Spin::Unpolarized => 1,
            Spin::Polarized => 3,
        }
    }
}

impl FromStr for Spin {
    type Err = XcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unpolarized" | "nonspin" => Ok(Spin::Unpolarized),
            "polarized" | "spin" => Ok(Spin::Polarized),
            _ => Err(XcError::InvalidArgument(format!(
                "unknown spin setting '{}', expected unpolarized or polarized",
                s
            ))),
        }
    }
}

impl TryFrom<String> for Spin {
    type Error = XcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spin::Unpolarized => write!(f, "unpolarized"),
            Spin::Polarized => write!(f, "polarized"),
        }
    }
}

/// Implementation that evaluates a kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Backend {
    /// The reference library in `xcref`
    External,
    /// Closed-form kernels compiled into this crate
    Builtin,
}

impl FromStr for Backend {
    type Err = XcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "external" => Ok(Backend::External),
            "builtin" => Ok(Backend::Builtin),
            _ => Err(XcError::InvalidArgument(format!(
                "unknown backend '{}', expected external or builtin",
                s
            ))),
        }
    }
}

impl TryFrom<String> for Backend {
    type Error = XcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::External => write!(f, "external"),
            Backend::Builtin => write!(f, "builtin"),
        }
    }
}
