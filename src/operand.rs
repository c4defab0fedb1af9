//! Closed set of value kinds accepted on the right-hand side of the arithmetic
//! operations, and as constructor inputs.

use crate::complex::Complex;
use crate::fraction::Fraction;

/// A right-hand side operand of [Fraction] and [Complex] operations
#[derive(Clone, Debug, PartialEq)]
pub enum Operand<T> {
    Integer(T),
    Float(f64),
    Ratio(Fraction<T>),
    Complex(Complex<T>),
}

impl<T> Operand<T> {
    /// Name of the operand kind, used in error reports
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Integer(_) => "integer",
            Operand::Float(_) => "float",
            Operand::Ratio(_) => "fraction",
            Operand::Complex(_) => "complex",
        }
    }

    /// Whether the operand is a real scalar (anything but a complex number)
    #[inline]
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Operand::Complex(_))
    }
}

impl<T> From<Fraction<T>> for Operand<T> {
    #[inline]
    fn from(f: Fraction<T>) -> Self {
        Operand::Ratio(f)
    }
}

impl<T: Clone> From<&Fraction<T>> for Operand<T> {
    #[inline]
    fn from(f: &Fraction<T>) -> Self {
        Operand::Ratio(f.clone())
    }
}

impl<T> From<Complex<T>> for Operand<T> {
    #[inline]
    fn from(c: Complex<T>) -> Self {
        Operand::Complex(c)
    }
}

impl<T: Clone> From<&Complex<T>> for Operand<T> {
    #[inline]
    fn from(c: &Complex<T>) -> Self {
        Operand::Complex(c.clone())
    }
}

macro_rules! impl_primitive_operand {
    ($($T:ty),*) => {$(
        impl From<$T> for Operand<$T> {
            #[inline]
            fn from(t: $T) -> Self {
                Operand::Integer(t)
            }
        }
        impl From<f64> for Operand<$T> {
            #[inline]
            fn from(f: f64) -> Self {
                Operand::Float(f)
            }
        }
    )*};
}
impl_primitive_operand!(i8, i16, i32, i64, i128, isize);

#[cfg(feature = "num-bigint")]
mod bigint {
    use super::Operand;
    use num_bigint::BigInt;

    impl From<BigInt> for Operand<BigInt> {
        #[inline]
        fn from(t: BigInt) -> Self {
            Operand::Integer(t)
        }
    }

    impl From<f64> for Operand<BigInt> {
        #[inline]
        fn from(f: f64) -> Self {
            Operand::Float(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_test() {
        assert_eq!(Operand::from(3i64).kind(), "integer");
        assert_eq!(Operand::<i64>::from(0.5f64).kind(), "float");
        assert_eq!(Operand::from(Fraction::from(2i64)).kind(), "fraction");

        let c = Complex::from_parts(Fraction::from(1i64), Fraction::from(2i64));
        let op = Operand::from(&c);
        assert_eq!(op.kind(), "complex");
        assert!(!op.is_scalar());
        assert!(Operand::from(1i32).is_scalar());
    }
}
