//! Forward-mode dual numbers.
//!
//! A `Dual` carries a value and its gradient with respect to up to `NVAR`
//! independent inputs. Every functional in this library is written once as
//! an energy per volume over `Dual`; the potentials fall out of the
//! gradient.

use num_traits::{One, Zero};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

pub const NVAR: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual {
    pub v: f64,
    pub d: [f64; NVAR],
}

impl Dual {
    /// A constant: zero gradient.
    pub fn cst(v: f64) -> Self {
        Dual { v, d: [0.0; NVAR] }
    }

    /// The `i`-th independent variable.
    pub fn var(v: f64, i: usize) -> Self {
        let mut d = [0.0; NVAR];
        d[i] = 1.0;
        Dual { v, d }
    }

    #[inline]
    fn chain(self, v: f64, dv: f64) -> Self {
        let mut d = self.d;
        for x in d.iter_mut() {
            *x *= dv;
        }
        Dual { v, d }
    }

    pub fn powf(self, p: f64) -> Self {
        let vp = self.v.powf(p);
        self.chain(vp, p * self.v.powf(p - 1.0))
    }

    pub fn sqrt(self) -> Self {
        let s = self.v.sqrt();
        self.chain(s, 0.5 / s)
    }

    pub fn ln(self) -> Self {
        self.chain(self.v.ln(), 1.0 / self.v)
    }

    pub fn ln_1p(self) -> Self {
        self.chain(self.v.ln_1p(), 1.0 / (1.0 + self.v))
    }

    pub fn exp(self) -> Self {
        let e = self.v.exp();
        self.chain(e, e)
    }

    pub fn atan(self) -> Self {
        self.chain(self.v.atan(), 1.0 / (1.0 + self.v * self.v))
    }

    pub fn recip(self) -> Self {
        self.chain(1.0 / self.v, -1.0 / (self.v * self.v))
    }

    /// `x asinh(x)` with `x = sqrt(self)`, smooth down to `self = 0`.
    pub fn x_asinh_x_of_square(self) -> Self {
        if self.v <= 0.0 {
            return self.chain(0.0, 1.0);
        }

        let x = self.v.sqrt();
        let ash = x.asinh();
        let dv = 0.5 * (ash / x + 1.0 / (1.0 + self.v).sqrt());

        self.chain(x * ash, dv)
    }

    /// Clamps the value, keeping the gradient untouched.
    pub fn clamp_value(self, lo: f64, hi: f64) -> Self {
        Dual {
            v: self.v.max(lo).min(hi),
            d: self.d,
        }
    }
}

impl Zero for Dual {
    fn zero() -> Self {
        Dual::cst(0.0)
    }

    fn is_zero(&self) -> bool {
        self.v == 0.0 && self.d.iter().all(|x| *x == 0.0)
    }
}

impl One for Dual {
    fn one() -> Self {
        Dual::cst(1.0)
    }
}

impl Add for Dual {
    type Output = Dual;

    fn add(self, rhs: Dual) -> Dual {
        let mut d = self.d;
        for (x, y) in d.iter_mut().zip(rhs.d.iter()) {
            *x += y;
        }
        Dual { v: self.v + rhs.v, d }
    }
}

impl AddAssign for Dual {
    fn add_assign(&mut self, rhs: Dual) {
        *self = *self + rhs;
    }
}

impl Sub for Dual {
    type Output = Dual;

    fn sub(self, rhs: Dual) -> Dual {
        self + (-rhs)
    }
}

impl Neg for Dual {
    type Output = Dual;

    fn neg(self) -> Dual {
        self.chain(-self.v, -1.0)
    }
}

impl Mul for Dual {
    type Output = Dual;

    fn mul(self, rhs: Dual) -> Dual {
        let mut d = [0.0; NVAR];
        for i in 0..NVAR {
            d[i] = self.d[i] * rhs.v + self.v * rhs.d[i];
        }
        Dual { v: self.v * rhs.v, d }
    }
}

impl Div for Dual {
    type Output = Dual;

    fn div(self, rhs: Dual) -> Dual {
        self * rhs.recip()
    }
}

impl Add<f64> for Dual {
    type Output = Dual;

    fn add(self, rhs: f64) -> Dual {
        Dual {
            v: self.v + rhs,
            d: self.d,
        }
    }
}

impl Sub<f64> for Dual {
    type Output = Dual;

    fn sub(self, rhs: f64) -> Dual {
        self + (-rhs)
    }
}

impl Mul<f64> for Dual {
    type Output = Dual;

    fn mul(self, rhs: f64) -> Dual {
        self.chain(self.v * rhs, rhs)
    }
}

impl Div<f64> for Dual {
    type Output = Dual;

    fn div(self, rhs: f64) -> Dual {
        self * (1.0 / rhs)
    }
}

impl Add<Dual> for f64 {
    type Output = Dual;

    fn add(self, rhs: Dual) -> Dual {
        rhs + self
    }
}

impl Sub<Dual> for f64 {
    type Output = Dual;

    fn sub(self, rhs: Dual) -> Dual {
        (-rhs) + self
    }
}

impl Mul<Dual> for f64 {
    type Output = Dual;

    fn mul(self, rhs: Dual) -> Dual {
        rhs * self
    }
}

impl Div<Dual> for f64 {
    type Output = Dual;

    fn div(self, rhs: Dual) -> Dual {
        rhs.recip() * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1E-12 * (1.0 + b.abs())
    }

    #[test]
    fn test_product_and_quotient_rules() {
        let x = Dual::var(2.0, 0);
        let y = Dual::var(3.0, 1);

        let f = x * y / (x + y);
        // f = xy/(x+y): df/dx = y^2/(x+y)^2, df/dy = x^2/(x+y)^2
        assert!(close(f.v, 1.2));
        assert!(close(f.d[0], 9.0 / 25.0));
        assert!(close(f.d[1], 4.0 / 25.0));
    }

    #[test]
    fn test_elementary_functions() {
        let x = Dual::var(0.7, 0);

        assert!(close(x.powf(4.0 / 3.0).d[0], 4.0 / 3.0 * 0.7f64.powf(1.0 / 3.0)));
        assert!(close(x.ln().d[0], 1.0 / 0.7));
        assert!(close(x.exp().d[0], 0.7f64.exp()));
        assert!(close(x.atan().d[0], 1.0 / (1.0 + 0.49)));
        assert!(close(x.sqrt().d[0], 0.5 / 0.7f64.sqrt()));
        assert!(close(x.ln_1p().d[0], 1.0 / 1.7));
    }

    #[test]
    fn test_x_asinh_x_matches_direct_form() {
        let s = Dual::var(0.3, 0);
        let direct = {
            let x = s.sqrt();
            let ash = x.v.asinh();
            // d/ds [x asinh x] via x = sqrt(s)
            let dx = x.d[0];
            let dv = (ash + x.v / (1.0 + x.v * x.v).sqrt()) * dx;
            (x.v * ash, dv)
        };

        let f = s.x_asinh_x_of_square();
        assert!(close(f.v, direct.0));
        assert!(close(f.d[0], direct.1));

        let zero = Dual::var(0.0, 0).x_asinh_x_of_square();
        assert_eq!(zero.v, 0.0);
        assert!(close(zero.d[0], 1.0));
    }

    #[test]
    fn test_clamp_keeps_gradient() {
        let z = Dual::var(1.5, 2).clamp_value(-1.0, 1.0);
        assert_eq!(z.v, 1.0);
        assert_eq!(z.d[2], 1.0);
    }
}
