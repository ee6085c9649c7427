//! Hybrid functionals: weighted sums of semilocal parts plus a fraction of
//! exact exchange, which is left to the caller.

use crate::correlation::lyp::LYP;
use crate::correlation::pbe_c::PBE_C;
use crate::correlation::VWN_RPA;
use crate::exchange::b88::B88_X;
use crate::exchange::pbe::PBE_X;
use crate::exchange::slater::SLATER;
use crate::families::{GgaMix, LdaAsGga};

static SLATER_GGA: LdaAsGga = LdaAsGga(&SLATER);
static VWN_RPA_GGA: LdaAsGga = LdaAsGga(&VWN_RPA);

pub const B3LYP_EXX: f64 = 0.20;
pub const PBE0_EXX: f64 = 0.25;

pub static B3LYP: GgaMix = GgaMix {
    parts: &[
        (0.08, &SLATER_GGA),
        (0.72, &B88_X),
        (0.19, &VWN_RPA_GGA),
        (0.81, &LYP),
    ],
};

pub static PBE0: GgaMix = GgaMix {
    parts: &[(1.0 - PBE0_EXX, &PBE_X), (1.0, &PBE_C)],
};
