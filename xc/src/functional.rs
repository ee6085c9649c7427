//! Exchange-correlation functional identifiers

use crate::error::XcError;
use crate::registry::Registry;
use std::fmt;
use std::str::FromStr;

/// Enumeration of the functionals known to the engine.
///
/// `FromStr` resolves names through the registry, which is built from
/// [`Functional::as_str`] and checked to be a bijection.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Functional {
    SlaterExchange,
    VWN_RPA,
    VWN5,
    PZ81,
    PW91_LDA,
    PW91_LDA_MOD,
    B88,
    LYP,
    PBE_X,
    RevPBE_X,
    PBE_C,
    B3LYP,
    PBE0,
}

impl Functional {
    pub const ALL: [Functional; 13] = [
        Functional::SlaterExchange,
        Functional::VWN_RPA,
        Functional::VWN5,
        Functional::PZ81,
        Functional::PW91_LDA,
        Functional::PW91_LDA_MOD,
        Functional::B88,
        Functional::LYP,
        Functional::PBE_X,
        Functional::RevPBE_X,
        Functional::PBE_C,
        Functional::B3LYP,
        Functional::PBE0,
    ];

    /// Display name as registered.
    pub fn as_str(&self) -> &'static str {
        match self {
            Functional::SlaterExchange => "SlaterExchange",
            Functional::VWN_RPA => "VWN_RPA",
            Functional::VWN5 => "VWN5",
            Functional::PZ81 => "PZ81",
            Functional::PW91_LDA => "PW91_LDA",
            Functional::PW91_LDA_MOD => "PW91_LDA_MOD",
            Functional::B88 => "B88",
            Functional::LYP => "LYP",
            Functional::PBE_X => "PBE_X",
            Functional::RevPBE_X => "revPBE_X",
            Functional::PBE_C => "PBE_C",
            Functional::B3LYP => "B3LYP",
            Functional::PBE0 => "PBE0",
        }
    }
}

impl FromStr for Functional {
    type Err = XcError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Registry::try_global()?.lookup_by_name(name)
    }
}

impl fmt::Display for Functional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
