use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, FromPrimitive, Signed, ToPrimitive};

/// A helper trait to define valid integer types that can back a [Fraction][crate::Fraction]
pub trait FractionBase:
    Integer + Signed + Clone + CheckedAdd + CheckedSub + CheckedMul + FromPrimitive + ToPrimitive
{
}
impl<T> FractionBase for T where
    T: Integer + Signed + Clone + CheckedAdd + CheckedSub + CheckedMul + FromPrimitive + ToPrimitive
{
}

/// Marks whether a converted value represents its source exactly
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T),
}

impl<T> Approximation<T> {
    /// Get the value regardless of the exactness
    #[inline]
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) | Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Approximation::Exact(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Approximation<U> {
        match self {
            Approximation::Approximated(v) => Approximation::Approximated(f(v)),
            Approximation::Exact(v) => Approximation::Exact(f(v)),
        }
    }
}
