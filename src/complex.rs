//! Implementation of gaussian rationals, i.e. complex numbers whose real and
//! imaginary parts are both [Fraction]s.
//!
//! All arithmetic is exact, with the exception of [Complex::abs], [Complex::arg] and
//! the power functions ([Complex::powi], [Complex::try_pow]) which go through floating
//! point polar coordinates.

use crate::error::ArithmeticError;
use crate::fraction::Fraction;
use crate::operand::Operand;
use crate::traits::FractionBase;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::{One, ToPrimitive, Zero};
use std::fmt;
use tracing::debug;

/// Number of decimal places kept by the floating point results of [Complex::abs]
/// and the power functions
pub const POLAR_DECIMALS: i32 = 4;

#[inline]
fn round_decimals(x: f64) -> f64 {
    let factor = 10f64.powi(POLAR_DECIMALS);
    (x * factor).round() / factor
}

/// A complex number `real + imagine * i` with fraction components
#[derive(Hash, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Complex<T> {
    real: Fraction<T>,
    imagine: Fraction<T>,
}

impl<T> Complex<T> {
    #[inline]
    pub const fn from_parts(real: Fraction<T>, imagine: Fraction<T>) -> Self {
        Complex { real, imagine }
    }

    #[inline]
    pub const fn real(&self) -> &Fraction<T> {
        &self.real
    }

    #[inline]
    pub const fn imagine(&self) -> &Fraction<T> {
        &self.imagine
    }

    /// Get return-only references to the components `(real, imagine)`
    #[inline]
    pub const fn parts(&self) -> (&Fraction<T>, &Fraction<T>) {
        (&self.real, &self.imagine)
    }

    #[inline]
    pub fn set_real(&mut self, real: Fraction<T>) {
        self.real = real;
    }

    #[inline]
    pub fn set_imagine(&mut self, imagine: Fraction<T>) {
        self.imagine = imagine;
    }
}

impl<T: FractionBase> Complex<T> {
    /// Create a complex number, each component can be an integer, a float or a fraction.
    /// Floats are converted with [Fraction::from_f64].
    pub fn new(
        real: impl Into<Operand<T>>,
        imagine: impl Into<Operand<T>>,
    ) -> Result<Self, ArithmeticError> {
        Ok(Complex {
            real: Fraction::from_scalar(real.into(), "new")?,
            imagine: Fraction::from_scalar(imagine.into(), "new")?,
        })
    }

    /// Create a complex number with zero imaginary part
    #[inline]
    pub fn from_real(real: Fraction<T>) -> Self {
        Complex::from_parts(real, Fraction::zero())
    }

    #[inline]
    pub fn is_real(&self) -> bool {
        self.imagine.is_zero()
    }

    /// Returns the complex conjugate `real - imagine * i`
    #[inline]
    pub fn conj(&self) -> Result<Self, ArithmeticError> {
        Ok(Complex::from_parts(self.real.clone(), self.imagine.try_neg()?))
    }

    /// Negate both components, fails with [ArithmeticError::Overflow] if either
    /// numerator is `T::MIN`
    #[inline]
    pub fn try_neg(&self) -> Result<Self, ArithmeticError> {
        Ok(Complex::from_parts(self.real.try_neg()?, self.imagine.try_neg()?))
    }

    /// Exact squared magnitude `real² + imagine²`
    pub fn norm_sqr(&self) -> Result<Fraction<T>, ArithmeticError> {
        let rr = self.real.try_mul(&self.real)?;
        let ii = self.imagine.try_mul(&self.imagine)?;
        rr.try_add(ii)
    }

    // components converted to floats, NaN if not representable
    fn to_f64_parts(&self) -> (f64, f64) {
        (
            self.real.to_f64().unwrap_or(f64::NAN),
            self.imagine.to_f64().unwrap_or(f64::NAN),
        )
    }

    /// Magnitude `sqrt(real² + imagine²)` rounded to [POLAR_DECIMALS] decimal places
    pub fn abs(&self) -> f64 {
        let (re, im) = self.to_f64_parts();
        round_decimals((re * re + im * im).sqrt())
    }

    /// Argument `atan2(imagine, real)` in `(-π, π]`
    #[inline]
    pub fn arg(&self) -> f64 {
        let (re, im) = self.to_f64_parts();
        im.atan2(re)
    }

    fn add_impl(&self, rhs: Operand<T>, operation: &'static str) -> Result<Self, ArithmeticError> {
        match rhs {
            Operand::Complex(c) => Ok(Complex::from_parts(
                self.real.try_add(c.real)?,
                self.imagine.try_add(c.imagine)?,
            )),
            scalar => Ok(Complex::from_parts(
                self.real.try_add(Fraction::from_scalar(scalar, operation)?)?,
                self.imagine.clone(),
            )),
        }
    }

    fn sub_impl(&self, rhs: Operand<T>, operation: &'static str) -> Result<Self, ArithmeticError> {
        match rhs {
            Operand::Complex(c) => Ok(Complex::from_parts(
                self.real.try_sub(c.real)?,
                self.imagine.try_sub(c.imagine)?,
            )),
            scalar => Ok(Complex::from_parts(
                self.real.try_sub(Fraction::from_scalar(scalar, operation)?)?,
                self.imagine.clone(),
            )),
        }
    }

    fn mul_impl(&self, rhs: Operand<T>, operation: &'static str) -> Result<Self, ArithmeticError> {
        match rhs {
            Operand::Complex(c) => {
                // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
                let ac = self.real.try_mul(&c.real)?;
                let bd = self.imagine.try_mul(&c.imagine)?;
                let ad = self.real.try_mul(&c.imagine)?;
                let bc = self.imagine.try_mul(&c.real)?;
                Ok(Complex::from_parts(ac.try_sub(bd)?, ad.try_add(bc)?))
            }
            scalar => {
                let s = Fraction::from_scalar(scalar, operation)?;
                Ok(Complex::from_parts(
                    self.real.try_mul(&s)?,
                    self.imagine.try_mul(s)?,
                ))
            }
        }
    }

    fn div_impl(&self, rhs: Operand<T>, operation: &'static str) -> Result<Self, ArithmeticError> {
        match rhs {
            Operand::Complex(c) => {
                let denom = c.norm_sqr()?;
                if denom.is_zero() {
                    return Err(ArithmeticError::DivisionByZero);
                }

                // (a + bi)/(c + di) = ((ac + bd) + (bc - ad)i) / (c² + d²)
                let ac = self.real.try_mul(&c.real)?;
                let bd = self.imagine.try_mul(&c.imagine)?;
                let bc = self.imagine.try_mul(&c.real)?;
                let ad = self.real.try_mul(&c.imagine)?;
                Ok(Complex::from_parts(
                    ac.try_add(bd)?.try_div(&denom)?,
                    bc.try_sub(ad)?.try_div(denom)?,
                ))
            }
            scalar => {
                let s = Fraction::from_scalar(scalar, operation)?;
                if s.is_zero() {
                    return Err(ArithmeticError::DivisionByZero);
                }
                Ok(Complex::from_parts(
                    self.real.try_div(&s)?,
                    self.imagine.try_div(s)?,
                ))
            }
        }
    }

    /// Add a complex number or a real scalar. A scalar only changes the real part.
    #[inline]
    pub fn try_add(&self, rhs: impl Into<Operand<T>>) -> Result<Self, ArithmeticError> {
        self.add_impl(rhs.into(), "add")
    }

    /// Subtract a complex number or a real scalar. A scalar only changes the real part.
    #[inline]
    pub fn try_sub(&self, rhs: impl Into<Operand<T>>) -> Result<Self, ArithmeticError> {
        self.sub_impl(rhs.into(), "sub")
    }

    /// Multiply by a complex number or a real scalar
    #[inline]
    pub fn try_mul(&self, rhs: impl Into<Operand<T>>) -> Result<Self, ArithmeticError> {
        self.mul_impl(rhs.into(), "mul")
    }

    /// Divide by a complex number or a real scalar, fails with
    /// [ArithmeticError::DivisionByZero] if the divisor is zero
    #[inline]
    pub fn try_div(&self, rhs: impl Into<Operand<T>>) -> Result<Self, ArithmeticError> {
        self.div_impl(rhs.into(), "div")
    }

    /// In-place version of [Complex::try_add]. The value is left untouched on failure.
    #[inline]
    pub fn try_add_assign(&mut self, rhs: impl Into<Operand<T>>) -> Result<(), ArithmeticError> {
        *self = self.add_impl(rhs.into(), "add_assign")?;
        Ok(())
    }

    /// In-place version of [Complex::try_sub]. The value is left untouched on failure.
    #[inline]
    pub fn try_sub_assign(&mut self, rhs: impl Into<Operand<T>>) -> Result<(), ArithmeticError> {
        *self = self.sub_impl(rhs.into(), "sub_assign")?;
        Ok(())
    }

    /// In-place version of [Complex::try_mul]. The value is left untouched on failure.
    #[inline]
    pub fn try_mul_assign(&mut self, rhs: impl Into<Operand<T>>) -> Result<(), ArithmeticError> {
        *self = self.mul_impl(rhs.into(), "mul_assign")?;
        Ok(())
    }

    /// In-place version of [Complex::try_div]. The value is left untouched on failure.
    #[inline]
    pub fn try_div_assign(&mut self, rhs: impl Into<Operand<T>>) -> Result<(), ArithmeticError> {
        *self = self.div_impl(rhs.into(), "div_assign")?;
        Ok(())
    }

    /// Component-wise equality, only applicable to complex operands
    pub fn try_eq(&self, rhs: impl Into<Operand<T>>) -> Result<bool, ArithmeticError> {
        match rhs.into() {
            Operand::Complex(c) => Ok(self == &c),
            other => Err(ArithmeticError::mismatch("eq", other.kind())),
        }
    }

    /// Raise to an integer power.
    ///
    /// Unlike the other operations this is not exact: the power is evaluated in polar
    /// form `r^n * (cos(nθ) + i sin(nθ))` with floats, and each component is rounded to
    /// [POLAR_DECIMALS] decimal places before being converted back to a fraction.
    /// Components that round to an integer come back as integral fractions.
    pub fn powi(&self, exp: i32) -> Result<Self, ArithmeticError> {
        self.polar_pow(exp as i64)
    }

    /// Same as [Complex::powi], only integer exponents are applicable
    pub fn try_pow(&self, exp: impl Into<Operand<T>>) -> Result<Self, ArithmeticError> {
        match exp.into() {
            Operand::Integer(n) => self.polar_pow(n.to_i64().ok_or(ArithmeticError::Overflow)?),
            other => Err(ArithmeticError::mismatch("pow", other.kind())),
        }
    }

    fn polar_pow(&self, exp: i64) -> Result<Self, ArithmeticError> {
        if exp < 0 && self.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        let (re, im) = self.to_f64_parts();
        let r = (re * re + im * im).sqrt();
        let theta = im.atan2(re);

        let r_n = r.powf(exp as f64);
        let theta_n = theta * exp as f64;
        let real = round_decimals(r_n * theta_n.cos());
        let imagine = round_decimals(r_n * theta_n.sin());
        debug!(exp, real, imagine, "complex power through polar form");

        Ok(Complex::from_parts(
            Fraction::from_f64(real)?,
            Fraction::from_f64(imagine)?,
        ))
    }
}

impl<T: fmt::Display + FractionBase> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imagine.is_zero() {
            write!(f, "{}", self.real)
        } else if self.imagine.numer().is_negative() {
            // |imagine| might not fit into T
            let imagine = self.imagine.to_string();
            write!(f, "{} - {}i", self.real, imagine.trim_start_matches('-'))
        } else {
            write!(f, "{} + {}i", self.real, self.imagine)
        }
    }
}

macro_rules! forward_op_impl {
    (impl $imp:ident, $method:ident, $try_method:ident) => {
        impl<T: FractionBase> $imp<Complex<T>> for Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $method(self, rhs: Complex<T>) -> Complex<T> {
                match self.$try_method(Operand::Complex(rhs)) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl<T: FractionBase> $imp<Fraction<T>> for Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $method(self, rhs: Fraction<T>) -> Complex<T> {
                match self.$try_method(Operand::Ratio(rhs)) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl<T: FractionBase> $imp<T> for Complex<T> {
            type Output = Complex<T>;

            #[inline]
            fn $method(self, rhs: T) -> Complex<T> {
                match self.$try_method(Operand::Integer(rhs)) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }
    };
}

forward_op_impl!(impl Add, add, try_add);
forward_op_impl!(impl Sub, sub, try_sub);
forward_op_impl!(impl Mul, mul, try_mul);
forward_op_impl!(impl Div, div, try_div);

macro_rules! forward_assign_impl {
    (impl $imp:ident, $method:ident, $try_method:ident) => {
        impl<T: FractionBase> $imp<Complex<T>> for Complex<T> {
            #[inline]
            fn $method(&mut self, rhs: Complex<T>) {
                if let Err(e) = self.$try_method(Operand::Complex(rhs)) {
                    panic!("{}", e);
                }
            }
        }

        impl<T: FractionBase> $imp<Fraction<T>> for Complex<T> {
            #[inline]
            fn $method(&mut self, rhs: Fraction<T>) {
                if let Err(e) = self.$try_method(Operand::Ratio(rhs)) {
                    panic!("{}", e);
                }
            }
        }

        impl<T: FractionBase> $imp<T> for Complex<T> {
            #[inline]
            fn $method(&mut self, rhs: T) {
                if let Err(e) = self.$try_method(Operand::Integer(rhs)) {
                    panic!("{}", e);
                }
            }
        }
    };
}

forward_assign_impl!(impl AddAssign, add_assign, try_add_assign);
forward_assign_impl!(impl SubAssign, sub_assign, try_sub_assign);
forward_assign_impl!(impl MulAssign, mul_assign, try_mul_assign);
forward_assign_impl!(impl DivAssign, div_assign, try_div_assign);

impl<T: FractionBase> Neg for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn neg(self) -> Complex<T> {
        match self.try_neg() {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: FractionBase> Zero for Complex<T> {
    #[inline]
    fn zero() -> Self {
        Complex::from_parts(Fraction::zero(), Fraction::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imagine.is_zero()
    }
}

impl<T: FractionBase> One for Complex<T> {
    #[inline]
    fn one() -> Self {
        Complex::from_parts(Fraction::one(), Fraction::zero())
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.real.is_one() && self.imagine.is_zero()
    }
}

#[cfg(feature = "num-bigint")]
/// Gaussian rational with unbounded integer parts
pub type BigComplex = Complex<num_bigint::BigInt>;

#[cfg(feature = "num-complex")]
mod float_complex {
    use super::*;
    use num_complex::{Complex32, Complex64};

    impl<T: FractionBase> Complex<T> {
        pub fn to_complex64(&self) -> Option<Complex64> {
            Some(Complex64::new(self.real.to_f64()?, self.imagine.to_f64()?))
        }

        pub fn to_complex32(&self) -> Option<Complex32> {
            let complex = self.to_complex64()?;
            Some(Complex32::new(complex.re.to_f32()?, complex.im.to_f32()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core::f64::consts::PI;

    fn frac(n: i64, d: i64) -> Fraction<i64> {
        Fraction::new(n, d).unwrap()
    }

    fn cplx(re: i64, im: i64) -> Complex<i64> {
        Complex::new(re, im).unwrap()
    }

    #[test]
    fn creation_test() {
        let c = cplx(1, 2);
        assert_eq!(c.real(), &Fraction::from(1));
        assert_eq!(c.imagine(), &Fraction::from(2));

        let c = Complex::new(frac(1, 2), frac(3, 4)).unwrap();
        assert_eq!(c.parts(), (&frac(1, 2), &frac(3, 4)));

        let c = Complex::<i64>::new(0.5, 0.25).unwrap();
        assert_eq!(c, Complex::from_parts(frac(1, 2), frac(1, 4)));

        assert_eq!(Complex::from_real(frac(1, 3)), Complex::new(frac(1, 3), 0i64).unwrap());
        assert!(cplx(4, 0).is_real());
        assert!(Complex::<i64>::new(cplx(1, 1), 0i64)
            .unwrap_err()
            .is_not_applicable());
        assert!(matches!(
            Complex::<i64>::new(f64::NAN, 0.0),
            Err(ArithmeticError::InvalidArgument(_))
        ));
    }

    #[test]
    fn setters_test() {
        let mut c = cplx(1, 2);
        c.set_real(Fraction::from(-2));
        c.set_imagine(Fraction::from(1000));
        assert_eq!(c, cplx(-2, 1000));
    }

    #[test]
    fn fmt_test() {
        assert_eq!(cplx(1, 2).to_string(), "1 + 2i");
        assert_eq!(cplx(1, -2).to_string(), "1 - 2i");
        assert_eq!(cplx(1, 0).to_string(), "1");
        assert_eq!(cplx(0, 1).to_string(), "0 + 1i");
        assert_eq!(
            Complex::from_parts(frac(1, 2), frac(-3, 4)).to_string(),
            "1/2 - 3/4i"
        );
        assert_eq!(
            cplx(1, i64::MIN).to_string(),
            "1 - 9223372036854775808i"
        );
    }

    #[test]
    fn sign_overflow_test() {
        let c = cplx(1, i64::MIN);
        assert_eq!(c.conj(), Err(ArithmeticError::Overflow));
        assert_eq!(c.try_neg(), Err(ArithmeticError::Overflow));
        assert_eq!(cplx(i64::MIN, 1).try_neg(), Err(ArithmeticError::Overflow));
        assert_eq!(cplx(i64::MAX, 1).conj(), Ok(cplx(i64::MAX, -1)));
    }

    #[test]
    #[should_panic(expected = "integer overflow")]
    fn neg_overflow_panic_test() {
        let _ = -cplx(i64::MIN, 0);
    }

    #[test]
    fn add_distinct_denominators_overflow_test() {
        let c = Complex::new(Fraction::new(1i32, 65537).unwrap(), 0i32).unwrap();
        let d = Complex::new(Fraction::new(1i32, 65539).unwrap(), 1i32).unwrap();
        assert_eq!(c.try_add(d), Err(ArithmeticError::Overflow));
        assert_eq!(c.try_sub(d), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn tiny_float_operand_test() {
        assert_eq!(cplx(1, 2).try_add(1e-20), Ok(cplx(1, 2)));
    }

    #[test]
    fn arithmetic_test() {
        let (c1, c2) = (cplx(1, 2), cplx(3, 4));

        assert_eq!(c1 + c2, cplx(4, 6));
        assert_eq!(c1 + 1, cplx(2, 2));
        assert_eq!(c1 - c2, cplx(-2, -2));
        assert_eq!(c1 - 1, cplx(0, 2));
        assert_eq!(c1 * c2, cplx(-5, 10));
        assert_eq!(c1 * 2, cplx(2, 4));
        assert_eq!(c1 / c2, Complex::from_parts(frac(11, 25), frac(2, 25)));
        assert_eq!(c1 / 2, Complex::from_parts(frac(1, 2), Fraction::from(1)));
        assert_eq!(c1 * frac(1, 2), Complex::from_parts(frac(1, 2), Fraction::from(1)));
        assert_eq!(-c1, cplx(-1, -2));

        assert_eq!(
            c1.try_add(0.5),
            Ok(Complex::from_parts(frac(3, 2), Fraction::from(2)))
        );
        assert_eq!(c1.try_sub(frac(1, 2)), Ok(Complex::from_parts(frac(1, 2), Fraction::from(2))));
        assert_eq!(c1.try_mul(c2), Ok(cplx(-5, 10)));
        assert_eq!(c1.conj(), Ok(cplx(1, -2)));
        assert_eq!(c1 * c1.conj().unwrap(), cplx(5, 0));
        assert_eq!(c2.norm_sqr(), Ok(Fraction::from(25)));
    }

    #[test]
    fn division_by_zero_test() {
        let c1 = cplx(1, 2);
        assert_eq!(c1.try_div(cplx(0, 0)), Err(ArithmeticError::DivisionByZero));
        assert_eq!(c1.try_div(0i64), Err(ArithmeticError::DivisionByZero));
        assert_eq!(c1.try_div(0.0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(
            c1.try_div(Fraction::zero()),
            Err(ArithmeticError::DivisionByZero)
        );

        let mut c = cplx(1, 2);
        assert_eq!(c.try_div_assign(0i64), Err(ArithmeticError::DivisionByZero));
        assert_eq!(c.try_div_assign(cplx(0, 0)), Err(ArithmeticError::DivisionByZero));
        assert_eq!(c, cplx(1, 2));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn div_assign_zero_panic_test() {
        let mut c = cplx(1, 2);
        c /= 0;
    }

    #[test]
    fn assign_test() {
        let mut c = cplx(1, 2);
        c += 1;
        assert_eq!(c, cplx(2, 2));

        let mut c = cplx(1, 2);
        c += cplx(3, 4);
        assert_eq!(c, cplx(4, 6));

        let mut c = Complex::from_parts(frac(1, 3), frac(2, 3));
        c += frac(1, 5);
        assert_eq!(c, Complex::from_parts(frac(8, 15), frac(2, 3)));

        let mut c = cplx(1, 2);
        c -= 1;
        assert_eq!(c, cplx(0, 2));

        let mut c = cplx(1, 2);
        c -= cplx(3, 4);
        assert_eq!(c, cplx(-2, -2));

        let mut c = cplx(1, 2);
        c -= frac(1, 2);
        assert_eq!(c, Complex::from_parts(frac(1, 2), Fraction::from(2)));

        let mut c = cplx(1, 2);
        c *= 2;
        assert_eq!(c, cplx(2, 4));

        let mut c = cplx(1, 2);
        c *= cplx(3, 4);
        assert_eq!(c, cplx(-5, 10));

        let mut c = cplx(1, 2);
        c *= frac(1, 2);
        assert_eq!(c, Complex::from_parts(frac(1, 2), Fraction::from(1)));

        let mut c = cplx(1, 2);
        c /= cplx(3, 4);
        assert_eq!(c, Complex::from_parts(frac(11, 25), frac(2, 25)));

        let mut c = cplx(1, 2);
        c /= 2;
        assert_eq!(c, Complex::from_parts(frac(1, 2), Fraction::from(1)));
    }

    #[test]
    fn assign_mirrors_value_ops_test() {
        let lhs = [cplx(1, 2), cplx(-3, 5), Complex::from_parts(frac(1, 3), frac(-2, 7))];
        let rhs: Vec<Operand<i64>> = vec![
            cplx(3, 4).into(),
            frac(5, 6).into(),
            3i64.into(),
            (-0.25).into(),
        ];
        for a in &lhs {
            for b in &rhs {
                let mut c = a.clone();
                c.try_add_assign(b.clone()).unwrap();
                assert_eq!(Ok(c), a.try_add(b.clone()));

                let mut c = a.clone();
                c.try_sub_assign(b.clone()).unwrap();
                assert_eq!(Ok(c), a.try_sub(b.clone()));

                let mut c = a.clone();
                c.try_mul_assign(b.clone()).unwrap();
                assert_eq!(Ok(c), a.try_mul(b.clone()));

                let mut c = a.clone();
                c.try_div_assign(b.clone()).unwrap();
                assert_eq!(Ok(c), a.try_div(b.clone()));
            }
        }
    }

    #[test]
    fn eq_test() {
        assert_eq!(cplx(1, 2), cplx(1, 2));
        assert_ne!(cplx(1, 2), cplx(1, 3));
        assert_eq!(cplx(1, 2).try_eq(cplx(1, 2)), Ok(true));
        assert_eq!(cplx(1, 2).try_eq(&cplx(1, 3)), Ok(false));
        assert_eq!(
            cplx(1, 0).try_eq(1i64),
            Err(ArithmeticError::mismatch("eq", "integer"))
        );
    }

    #[test]
    fn abs_arg_test() {
        assert_eq!(cplx(3, 4).abs(), 5.0);
        assert_eq!(cplx(1, 1).abs(), 1.4142);
        assert_eq!(cplx(0, 0).abs(), 0.0);
        for re in -4i64..=4 {
            for im in -4i64..=4 {
                let c = cplx(re, im);
                assert_eq!((-c).abs(), c.abs());
            }
        }

        assert_relative_eq!(cplx(1, 1).arg(), PI / 4.0);
        assert_relative_eq!(cplx(-1, 0).arg(), PI);
        assert_relative_eq!(cplx(0, -2).arg(), -PI / 2.0);
    }

    #[test]
    fn pow_test() {
        assert_eq!(cplx(1, 1).powi(2), Ok(cplx(0, 2)));
        assert_eq!(cplx(1, 1).powi(3), Ok(cplx(-2, 2)));
        assert_eq!(cplx(1, 2).try_pow(2i64), Ok(cplx(-3, 4)));
        assert_eq!(cplx(0, 1).powi(3), Ok(cplx(0, -1)));
        assert_eq!(cplx(5, 7).powi(0), Ok(cplx(1, 0)));
        assert_eq!(
            cplx(1, 2).powi(-1),
            Ok(Complex::from_parts(frac(1, 5), frac(-2, 5)))
        );
        assert_eq!(cplx(1, 1).powi(2).unwrap().to_string(), "0 + 2i");

        assert_eq!(cplx(0, 0).powi(-2), Err(ArithmeticError::DivisionByZero));
        assert_eq!(
            cplx(1, 2).try_pow(2.0),
            Err(ArithmeticError::mismatch("pow", "float"))
        );
        assert_eq!(
            cplx(1, 2).try_pow(frac(1, 2)),
            Err(ArithmeticError::mismatch("pow", "fraction"))
        );
    }

    #[test]
    fn overflow_test() {
        let c = Complex::new(100i8, 100i8).unwrap();
        assert_eq!(c.try_mul(c), Err(ArithmeticError::Overflow));
        assert_eq!(c.try_div(c), Err(ArithmeticError::Overflow));
        assert_eq!(c.try_add(c), Err(ArithmeticError::Overflow));
    }

    #[cfg(feature = "num-complex")]
    #[test]
    fn to_complex_test() {
        let c = Complex::from_parts(frac(1, 2), frac(-3, 4));
        assert_eq!(c.to_complex64(), Some(num_complex::Complex64::new(0.5, -0.75)));
        assert_eq!(c.to_complex32(), Some(num_complex::Complex32::new(0.5, -0.75)));
    }

    #[cfg(feature = "num-bigint")]
    #[test]
    fn bigint_test() {
        use num_bigint::BigInt;

        let c = BigComplex::new(BigInt::from(1), BigInt::from(2)).unwrap();
        let d = BigComplex::new(BigInt::from(3), BigInt::from(4)).unwrap();
        assert_eq!(
            c.clone() * d,
            BigComplex::new(BigInt::from(-5), BigInt::from(10)).unwrap()
        );
        assert_eq!(c.powi(2), BigComplex::new(BigInt::from(-3), BigInt::from(4)));
    }
}
