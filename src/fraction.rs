//! Implementation of normalized exact fractions

use crate::cont_frac::{self, ConvergentConfig};
use crate::error::ArithmeticError;
use crate::operand::Operand;
use crate::traits::{Approximation, FractionBase};
use core::cmp::Ordering;
use core::convert::TryFrom;
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_rational::Ratio;
use num_traits::{checked_pow, One, ToPrimitive, Zero};
use std::fmt;

/// A fraction `numer / denom` kept in canonical form: the two parts are coprime,
/// the denominator is positive and zero is represented as `0/1`.
///
/// Every operation produces a new value. Fallible operations are exposed as the
/// `try_*` family accepting any [Operand]; the operator traits forward to them
/// and panic on failure, the same way [Ratio] panics on a zero divisor.
#[derive(Hash, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fraction<T> {
    numer: T, // carries the sign
    denom: T, // positive when normalized
}

impl<T> Fraction<T> {
    /// Create a fraction without normalization.
    ///
    /// The denominator must not be zero. Other operations assume that the value is
    /// canonical, so this is only useful for constants that are known to be reduced.
    #[inline]
    pub const fn new_raw(numer: T, denom: T) -> Self {
        Fraction { numer, denom }
    }

    #[inline]
    pub const fn numer(&self) -> &T {
        &self.numer
    }

    #[inline]
    pub const fn denom(&self) -> &T {
        &self.denom
    }

    #[inline]
    pub fn into_parts(self) -> (T, T) {
        (self.numer, self.denom)
    }
}

#[inline]
fn checked_mul<T: FractionBase>(a: &T, b: &T) -> Result<T, ArithmeticError> {
    a.checked_mul(b).ok_or(ArithmeticError::Overflow)
}

#[inline]
fn checked_neg<T: FractionBase>(a: &T) -> Result<T, ArithmeticError> {
    T::zero().checked_sub(a).ok_or(ArithmeticError::Overflow)
}

// Abstracts a/b `op` c/d = (a*lcm/b `op` c*lcm/d)/lcm where lcm = lcm(b,d) = b/gcd(b,d)*d
macro_rules! add_sub_impl {
    ($method:ident, $checked:ident) => {
        fn $method(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
            if self.denom == rhs.denom {
                let numer = self
                    .numer
                    .$checked(&rhs.numer)
                    .ok_or(ArithmeticError::Overflow)?;
                return Fraction::new(numer, self.denom.clone());
            }

            let g = self.denom.gcd(&rhs.denom);
            let lhs_r = rhs.denom.clone() / g.clone();
            let rhs_r = self.denom.clone() / g;
            let lcm = checked_mul(&self.denom, &lhs_r)?;
            let numer = checked_mul(&self.numer, &lhs_r)?
                .$checked(&checked_mul(&rhs.numer, &rhs_r)?)
                .ok_or(ArithmeticError::Overflow)?;
            Fraction::new(numer, lcm)
        }
    };
}

impl<T: FractionBase> Fraction<T> {
    /// Create a fraction from a numerator and a denominator, reducing it into canonical form.
    ///
    /// Fails with [ArithmeticError::InvalidArgument] if the denominator is zero.
    #[inline]
    pub fn new(numer: T, denom: T) -> Result<Self, ArithmeticError> {
        let mut ret = Fraction::new_raw(numer, denom);
        ret.reduce()?;
        Ok(ret)
    }

    /// Create the fraction `numer / denom` where both sides can be an integer, a float
    /// or another fraction.
    ///
    /// With `numer = a/b` and `denom = c/d` the result is `(a*d) / (b*c)`. Floats are first
    /// converted with [Fraction::from_f64]. A complex operand is not applicable.
    pub fn from_operands(
        numer: impl Into<Operand<T>>,
        denom: impl Into<Operand<T>>,
    ) -> Result<Self, ArithmeticError> {
        let (a, b) = Self::from_scalar(numer.into(), "new")?.into_parts();
        let (c, d) = Self::from_scalar(denom.into(), "new")?.into_parts();
        if c.is_zero() {
            return Err(ArithmeticError::InvalidArgument("denominator is zero"));
        }
        Fraction::new(checked_mul(&a, &d)?, checked_mul(&b, &c)?)
    }

    /// Convert a real scalar operand into a fraction
    pub(crate) fn from_scalar(
        operand: Operand<T>,
        operation: &'static str,
    ) -> Result<Self, ArithmeticError> {
        match operand {
            Operand::Integer(t) => Ok(Fraction::from(t)),
            Operand::Float(f) => Fraction::from_f64(f),
            Operand::Ratio(r) => Ok(r),
            other => Err(ArithmeticError::mismatch(operation, other.kind())),
        }
    }

    /// Operands accepted by the arithmetic operators: integers and fractions
    fn from_arith_operand(
        operand: Operand<T>,
        operation: &'static str,
    ) -> Result<Self, ArithmeticError> {
        match operand {
            Operand::Integer(t) => Ok(Fraction::from(t)),
            Operand::Ratio(r) => Ok(r),
            other => Err(ArithmeticError::mismatch(operation, other.kind())),
        }
    }

    /// Convert a finite float into a fraction with the default [ConvergentConfig]
    #[inline]
    pub fn from_f64(x: f64) -> Result<Self, ArithmeticError> {
        Self::from_f64_with(x, &ConvergentConfig::default())
    }

    #[inline]
    pub fn from_f64_with(x: f64, config: &ConvergentConfig) -> Result<Self, ArithmeticError> {
        Self::approximate_f64_with(x, config).map(Approximation::value)
    }

    /// Same as [Fraction::from_f64], but also reports whether the result converts back
    /// to exactly the same float
    #[inline]
    pub fn approximate_f64(x: f64) -> Result<Approximation<Self>, ArithmeticError> {
        Self::approximate_f64_with(x, &ConvergentConfig::default())
    }

    pub fn approximate_f64_with(
        x: f64,
        config: &ConvergentConfig,
    ) -> Result<Approximation<Self>, ArithmeticError> {
        let approx = cont_frac::approximate::<T>(x, config)?;
        let exact = approx.is_exact();
        let (n, d) = approx.value();
        let frac = Fraction::new(n, d)?;
        Ok(if exact {
            Approximation::Exact(frac)
        } else {
            Approximation::Approximated(frac)
        })
    }

    // Simplify the fraction into normalized form
    fn reduce(&mut self) -> Result<(), ArithmeticError> {
        if self.denom.is_zero() {
            return Err(ArithmeticError::InvalidArgument("denominator is zero"));
        }

        // gcd(0, d) and gcd(d, d) take |d|, which overflows for T::MIN
        if self.numer.is_zero() {
            self.denom = T::one();
            return Ok(());
        }
        if self.numer == self.denom {
            self.numer = T::one();
            self.denom = T::one();
            return Ok(());
        }

        let g = self.numer.gcd(&self.denom);
        if !g.is_one() {
            self.numer = self.numer.clone() / g.clone();
            self.denom = self.denom.clone() / g;
        }

        // keep denom positive
        if self.denom.is_negative() {
            self.numer = checked_neg(&self.numer)?;
            self.denom = checked_neg(&self.denom)?;
        }
        Ok(())
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Converts to an integer, rounding towards zero.
    ///
    /// A fraction with denominator one reports [Approximation::Exact], which is the
    /// way to collapse a fraction into a plain integer for presentation.
    #[inline]
    pub fn to_integer(&self) -> Approximation<T> {
        if self.is_integer() {
            Approximation::Exact(self.numer.clone())
        } else {
            Approximation::Approximated(self.numer.clone() / self.denom.clone())
        }
    }

    /// Returns the reciprocal, fails if the fraction is zero
    #[inline]
    pub fn recip(&self) -> Result<Self, ArithmeticError> {
        if self.numer.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Fraction::new(self.denom.clone(), self.numer.clone())
    }

    /// Absolute value of both components. The denominator is included so that
    /// values created by [Fraction::new_raw] with a negative denominator are fixed as well.
    ///
    /// Fails with [ArithmeticError::Overflow] if a component is `T::MIN`.
    pub fn abs(&self) -> Result<Self, ArithmeticError> {
        let abs = |t: &T| {
            if t.is_negative() {
                checked_neg(t)
            } else {
                Ok(t.clone())
            }
        };
        Ok(Fraction::new_raw(abs(&self.numer)?, abs(&self.denom)?))
    }

    /// Flips the sign of the numerator, fails with [ArithmeticError::Overflow]
    /// if it is `T::MIN`
    #[inline]
    pub fn try_neg(&self) -> Result<Self, ArithmeticError> {
        Ok(Fraction::new_raw(checked_neg(&self.numer)?, self.denom.clone()))
    }

    add_sub_impl!(add_fraction, checked_add);
    add_sub_impl!(sub_fraction, checked_sub);

    fn mul_fraction(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        // cancel the cross factors first to delay overflow
        let g_ad = self.numer.gcd(&rhs.denom);
        let g_cb = rhs.numer.gcd(&self.denom);
        if g_ad.is_zero() || g_cb.is_zero() {
            return Ok(Fraction::zero());
        }
        let numer = checked_mul(
            &(self.numer.clone() / g_ad.clone()),
            &(rhs.numer.clone() / g_cb.clone()),
        )?;
        let denom = checked_mul(&(self.denom.clone() / g_cb), &(rhs.denom.clone() / g_ad))?;
        Fraction::new(numer, denom)
    }

    fn div_fraction(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.mul_fraction(&rhs.recip()?)
    }

    /// Add an integer or a fraction
    #[inline]
    pub fn try_add(&self, rhs: impl Into<Operand<T>>) -> Result<Self, ArithmeticError> {
        self.add_fraction(&Self::from_arith_operand(rhs.into(), "add")?)
    }

    /// Subtract an integer or a fraction
    #[inline]
    pub fn try_sub(&self, rhs: impl Into<Operand<T>>) -> Result<Self, ArithmeticError> {
        self.sub_fraction(&Self::from_arith_operand(rhs.into(), "sub")?)
    }

    /// Multiply by an integer or a fraction
    #[inline]
    pub fn try_mul(&self, rhs: impl Into<Operand<T>>) -> Result<Self, ArithmeticError> {
        self.mul_fraction(&Self::from_arith_operand(rhs.into(), "mul")?)
    }

    /// Divide by an integer or a fraction, fails with [ArithmeticError::DivisionByZero]
    /// if the divisor is zero
    #[inline]
    pub fn try_div(&self, rhs: impl Into<Operand<T>>) -> Result<Self, ArithmeticError> {
        self.div_fraction(&Self::from_arith_operand(rhs.into(), "div")?)
    }

    /// Raise to the power of an integer or a float.
    ///
    /// Integer exponents (and floats holding an integral value) are exact, a negative
    /// exponent raises the reciprocal. Other float exponents are evaluated in floating
    /// point on the numerator and the denominator separately, and converted back with
    /// [Fraction::from_operands], so the result is only approximated.
    pub fn try_pow(&self, exp: impl Into<Operand<T>>) -> Result<Self, ArithmeticError> {
        match exp.into() {
            Operand::Integer(n) => self.powi64(n.to_i64().ok_or(ArithmeticError::Overflow)?),
            Operand::Float(f) => {
                if !f.is_finite() {
                    return Err(ArithmeticError::InvalidArgument("float value is not finite"));
                }
                if f.fract() == 0.0 {
                    let n = f.to_i64().ok_or(ArithmeticError::Overflow)?;
                    return self.powi64(n);
                }

                let numer = self.numer.to_f64().ok_or(ArithmeticError::Overflow)?;
                let denom = self.denom.to_f64().ok_or(ArithmeticError::Overflow)?;
                Fraction::from_operands(Operand::Float(numer.powf(f)), Operand::Float(denom.powf(f)))
            }
            other => Err(ArithmeticError::mismatch("pow", other.kind())),
        }
    }

    /// Raise to an integer power
    #[inline]
    pub fn powi(&self, exp: i32) -> Result<Self, ArithmeticError> {
        self.powi64(exp as i64)
    }

    fn powi64(&self, exp: i64) -> Result<Self, ArithmeticError> {
        let base = if exp < 0 { self.recip()? } else { self.clone() };
        let e = usize::try_from(exp.unsigned_abs()).map_err(|_| ArithmeticError::Overflow)?;

        // powers of coprime integers stay coprime
        let numer = checked_pow(base.numer, e).ok_or(ArithmeticError::Overflow)?;
        let denom = checked_pow(base.denom, e).ok_or(ArithmeticError::Overflow)?;
        Fraction::new(numer, denom)
    }

    /// Compare with an integer, a float or a fraction.
    ///
    /// Floats are compared against `numer` and `float * denom` in floating point.
    pub fn try_cmp(&self, rhs: impl Into<Operand<T>>) -> Result<Ordering, ArithmeticError> {
        match rhs.into() {
            Operand::Integer(t) => Ok(self.cmp(&Fraction::from(t))),
            Operand::Ratio(r) => Ok(self.cmp(&r)),
            Operand::Float(f) => {
                let numer = self.numer.to_f64().ok_or(ArithmeticError::Overflow)?;
                let denom = self.denom.to_f64().ok_or(ArithmeticError::Overflow)?;
                numer
                    .partial_cmp(&(f * denom))
                    .ok_or(ArithmeticError::InvalidArgument("float value is NaN"))
            }
            other => Err(ArithmeticError::mismatch("cmp", other.kind())),
        }
    }

    /// Rounds towards zero
    #[inline]
    pub fn trunc(&self) -> Self {
        Fraction::from(self.numer.clone() / self.denom.clone())
    }

    /// Rounds towards minus infinity
    #[inline]
    pub fn floor(&self) -> Self {
        Fraction::from(self.numer.div_floor(&self.denom))
    }

    /// Rounds towards plus infinity
    #[inline]
    pub fn ceil(&self) -> Self {
        let (q, r) = self.numer.div_mod_floor(&self.denom);
        if r.is_zero() {
            Fraction::from(q)
        } else {
            Fraction::from(q + T::one())
        }
    }

    /// Rounds to the nearest integer, half-way cases are rounded away from zero
    pub fn round(&self) -> Self {
        let (q, r) = self.numer.div_rem(&self.denom);
        if r.is_zero() {
            return Fraction::from(q);
        }

        // |r| < denom, so none of these can overflow
        if r.is_positive() {
            if r >= self.denom.clone() - r.clone() {
                Fraction::from(q + T::one())
            } else {
                Fraction::from(q)
            }
        } else {
            let r = T::zero() - r;
            if r >= self.denom.clone() - r.clone() {
                Fraction::from(q - T::one())
            } else {
                Fraction::from(q)
            }
        }
    }

    /// Rounds to `digits` decimal places, so that the denominator of the result divides `10^digits`.
    /// A negative `digits` rounds to a multiple of `10^-digits` instead (tens, hundreds, ...).
    ///
    /// `numer * 10^digits / denom` is rounded with the rule of [Fraction::round] in exact
    /// integer arithmetic.
    pub fn round_to(&self, digits: i32) -> Result<Self, ArithmeticError> {
        let ten = T::from_u8(10).ok_or(ArithmeticError::Overflow)?;
        let e = usize::try_from(digits.unsigned_abs()).map_err(|_| ArithmeticError::Overflow)?;
        let factor = checked_pow(ten, e).ok_or(ArithmeticError::Overflow)?;
        if digits >= 0 {
            let scaled = Fraction::new(checked_mul(&self.numer, &factor)?, self.denom.clone())?;
            Fraction::new(scaled.round().numer, factor)
        } else {
            let scaled = Fraction::new(self.numer.clone(), checked_mul(&self.denom, &factor)?)?;
            Ok(Fraction::from(checked_mul(&scaled.round().numer, &factor)?))
        }
    }
}

impl<T: FractionBase> From<T> for Fraction<T> {
    #[inline]
    fn from(t: T) -> Self {
        Fraction::new_raw(t, T::one())
    }
}

impl<T> Fraction<T> {
    /// Convert from a [Ratio], which is already normalized with a positive denominator
    #[inline]
    pub fn from_ratio(r: Ratio<T>) -> Self {
        let (n, d) = r.into();
        Fraction::new_raw(n, d)
    }
}

impl<T> From<Fraction<T>> for Ratio<T> {
    #[inline]
    fn from(f: Fraction<T>) -> Self {
        Ratio::new_raw(f.numer, f.denom)
    }
}

impl<T: fmt::Display + FractionBase> fmt::Display for Fraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom.is_one() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl<T: FractionBase> Ord for Fraction<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // equivalent to comparing a*d with c*b, without the risk of overflow
        if self.denom == other.denom {
            return self.numer.cmp(&other.numer);
        }
        if self.numer == other.numer {
            if self.numer.is_zero() {
                return Ordering::Equal;
            }
            let ord = other.denom.cmp(&self.denom);
            return if self.numer.is_negative() {
                ord.reverse()
            } else {
                ord
            };
        }

        // compare the integer parts, then the reciprocals of the remainders
        let (self_int, self_rem) = self.numer.div_mod_floor(&self.denom);
        let (other_int, other_rem) = other.numer.div_mod_floor(&other.denom);
        match self_int.cmp(&other_int) {
            Ordering::Equal => match (self_rem.is_zero(), other_rem.is_zero()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => {
                    let self_recip = Fraction::new_raw(self.denom.clone(), self_rem);
                    let other_recip = Fraction::new_raw(other.denom.clone(), other_rem);
                    self_recip.cmp(&other_recip).reverse()
                }
            },
            ord => ord,
        }
    }
}

impl<T: FractionBase> PartialOrd for Fraction<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! forward_op_impl {
    (impl $imp:ident, $method:ident, $try_method:ident) => {
        impl<T: FractionBase> $imp<Fraction<T>> for Fraction<T> {
            type Output = Fraction<T>;

            #[inline]
            fn $method(self, rhs: Fraction<T>) -> Fraction<T> {
                match self.$try_method(Operand::Ratio(rhs)) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl<T: FractionBase> $imp<T> for Fraction<T> {
            type Output = Fraction<T>;

            #[inline]
            fn $method(self, rhs: T) -> Fraction<T> {
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

impl<T: FractionBase> Neg for Fraction<T> {
    type Output = Fraction<T>;

    #[inline]
    fn neg(self) -> Fraction<T> {
        match self.try_neg() {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: FractionBase> Zero for Fraction<T> {
    #[inline]
    fn zero() -> Self {
        Fraction::new_raw(T::zero(), T::one())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T: FractionBase> One for Fraction<T> {
    #[inline]
    fn one() -> Self {
        Fraction::new_raw(T::one(), T::one())
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }
}

impl<T: FractionBase> ToPrimitive for Fraction<T> {
    /// Truncates towards zero
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.to_integer().value().to_i64()
    }

    /// Truncates towards zero
    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_integer().value().to_u64()
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(self.numer.to_f64()? / self.denom.to_f64()?)
    }
}

#[cfg(feature = "num-bigint")]
/// Fraction with unbounded integer parts
pub type BigFraction = Fraction<num_bigint::BigInt>;
