use std::f64;

// pi

pub const PI: f64 = f64::consts::PI;
pub const TWOPI: f64 = 2.0 * f64::consts::PI;
pub const FOURPI: f64 = 4.0 * f64::consts::PI;
pub const PI2: f64 = f64::consts::PI * f64::consts::PI;

// fractional powers

pub const T13: f64 = 1.0 / 3.0;
pub const T23: f64 = 2.0 / 3.0;
pub const T43: f64 = 4.0 / 3.0;
pub const T53: f64 = 5.0 / 3.0;
pub const T73: f64 = 7.0 / 3.0;
pub const T83: f64 = 8.0 / 3.0;

// 2^(1/3) and 2^(4/3)

pub const CBRT2: f64 = 1.259_921_049_894_873_2;
pub const TWO_T43: f64 = 2.0 * CBRT2;

// spin interpolation f(zeta) = [(1+z)^(4/3) + (1-z)^(4/3) - 2] / (2^(4/3) - 2)

pub const FZETA_DENOM: f64 = TWO_T43 - 2.0;

// f''(0)

pub const FZETA_DD0: f64 = 1.709920934161365617563962776245;

// screening

pub const DENS_THRESHOLD: f64 = 1E-15;
pub const ZETA_THRESHOLD: f64 = f64::EPSILON;

// numerical comparison

pub const EPS6: f64 = 1E-6;
pub const EPS8: f64 = 1E-8;
pub const EPS10: f64 = 1E-10;
pub const EPS12: f64 = 1E-12;
pub const EPS14: f64 = 1E-14;
pub const EPS20: f64 = 1E-20;

/// Wigner-Seitz radius of a uniform gas of density `rho`.
#[inline]
pub fn wigner_seitz_radius(rho: f64) -> f64 {
    (3.0 / FOURPI / rho).powf(T13)
}

/// Spin interpolation function and its derivative with respect to zeta.
#[inline]
pub fn fzeta(zeta: f64) -> (f64, f64) {
    let opz = 1.0 + zeta;
    let omz = 1.0 - zeta;

    let f = (opz.powf(T43) + omz.powf(T43) - 2.0) / FZETA_DENOM;
    let df = T43 * (opz.cbrt() - omz.cbrt()) / FZETA_DENOM;

    (f, df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fzeta_limits() {
        let (f0, df0) = fzeta(0.0);
        assert!(f0.abs() < EPS14);
        assert!(df0.abs() < EPS14);

        let (f1, _) = fzeta(1.0);
        assert!((f1 - 1.0).abs() < EPS12);
    }

    #[test]
    fn test_cbrt2() {
        assert!((CBRT2 - 2f64.cbrt()).abs() < EPS14);
    }

    #[test]
    fn test_wigner_seitz_radius() {
        let rho = 3.0 / FOURPI;
        assert!((wigner_seitz_radius(rho) - 1.0).abs() < EPS12);
    }
}
